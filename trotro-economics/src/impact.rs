//! System-wide environmental impact aggregation.

use std::ops::Add;

use log::debug;
use trotro_core::EmissionsBreakdown;

/// Policy coefficients for the impact models.
///
/// The health and climate estimates are deliberately simple linear
/// models: concentration approximates emissions spread over the service
/// area, and cost multiplies concentration by exposed population and a
/// per-capita coefficient. These are planning-level figures supplied by
/// configuration; they carry no epidemiological precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactCoefficients {
    /// Service area the emissions disperse over, in square kilometres.
    pub service_area_km2: f64,
    /// Residents exposed within the service area.
    pub exposed_population: f64,
    /// Days of comparable operation per year for annualisation.
    pub operating_days_per_year: f64,
    /// Index points per kg/km2 of daily PM2.5 concentration.
    pub aqi_per_pm25_density: f64,
    /// Annual health cost per person per kg/km2 of PM2.5 concentration.
    pub health_cost_per_capita_density: f64,
    /// Climate cost per kilogram of annual CO2.
    pub climate_cost_per_kg_co2: f64,
}

impl Default for ImpactCoefficients {
    /// Greater Accra planning defaults.
    fn default() -> Self {
        Self {
            service_area_km2: 225.0,
            exposed_population: 2_500_000.0,
            operating_days_per_year: 365.0,
            aqi_per_pm25_density: 500.0,
            health_cost_per_capita_density: 12.0,
            climate_cost_per_kg_co2: 0.9,
        }
    }
}

/// Aggregated environmental impact of one day of operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvironmentalImpact {
    /// Summed emissions over all routes for one day.
    pub daily: EmissionsBreakdown,
    /// Daily emissions extrapolated to a year of operation.
    pub annual: EmissionsBreakdown,
    /// Linear air-quality index derived from PM2.5 density.
    pub air_quality_index: f64,
    /// Annual health cost estimate over the exposed population.
    pub health_cost: f64,
    /// Annual climate cost estimate from CO2.
    pub climate_cost: f64,
}

/// Sum route emissions into daily and annual system totals and derive
/// the configured impact estimates.
///
/// # Examples
/// ```
/// use trotro_core::EmissionsBreakdown;
/// use trotro_economics::{aggregate_impact, ImpactCoefficients};
///
/// let routes = vec![
///     EmissionsBreakdown { co2_kg: 40.0, nox_kg: 0.5, pm25_kg: 0.06, co_kg: 0.2 },
///     EmissionsBreakdown { co2_kg: 25.0, nox_kg: 0.3, pm25_kg: 0.04, co_kg: 0.1 },
/// ];
/// let impact = aggregate_impact(&routes, &ImpactCoefficients::default());
/// assert_eq!(impact.daily.co2_kg, 65.0);
/// assert_eq!(impact.annual.co2_kg, 65.0 * 365.0);
/// ```
#[must_use]
pub fn aggregate_impact(
    route_emissions: &[EmissionsBreakdown],
    coefficients: &ImpactCoefficients,
) -> EnvironmentalImpact {
    debug!("aggregating impact over {} routes", route_emissions.len());
    let daily = route_emissions
        .iter()
        .copied()
        .fold(EmissionsBreakdown::zero(), Add::add);
    let annual = daily.scaled(coefficients.operating_days_per_year);

    let pm25_density = daily.pm25_kg / coefficients.service_area_km2;
    let air_quality_index = pm25_density * coefficients.aqi_per_pm25_density;
    let health_cost = pm25_density
        * coefficients.exposed_population
        * coefficients.health_cost_per_capita_density;
    let climate_cost = annual.co2_kg * coefficients.climate_cost_per_kg_co2;

    EnvironmentalImpact {
        daily,
        annual,
        air_quality_index,
        health_cost,
        climate_cost,
    }
}
