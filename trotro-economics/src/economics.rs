//! Per-route cost, revenue, and profitability computation.

use std::time::Duration;

use trotro_core::{
    CongestionFactors, EmissionsBreakdown, Ratio, RouteEconomics, VehicleProfile,
};

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Tunable economic coefficients shared across a request.
///
/// Defaults are Accra-flavoured placeholders in Ghana cedis awaiting
/// calibration against operator records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EconomicParams {
    /// Hours in a standard driver shift; wages are prorated against it.
    pub standard_shift_hours: f64,
    /// Fraction of theoretical full-load revenue counted as foregone
    /// while the vehicle is in service.
    pub opportunity_rate: f64,
    /// System-average fare used for the opportunity cost model.
    pub average_fare: f64,
    /// Carbon price per kilogram of CO2.
    pub carbon_price_per_kg: f64,
}

impl Default for EconomicParams {
    fn default() -> Self {
        Self {
            standard_shift_hours: 8.0,
            opportunity_rate: 0.3,
            average_fare: 2.5,
            carbon_price_per_kg: 0.9,
        }
    }
}

/// Compute the full economic breakdown of one route.
///
/// Pure function over immutable inputs: applying it twice to the same
/// arguments returns equal records. Zero-denominator ratios come back
/// as [`Ratio::Undefined`], never `NaN`.
///
/// The carbon cost prices the CO2 mass already computed by the
/// emissions model, so the congestion emission multiplier is reflected
/// through `emissions`.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use trotro_core::{
///     CongestionFactors, CostRates, EmissionFactors, EmissionsBreakdown, FuelType, Ratio,
///     VehicleProfile,
/// };
/// use trotro_economics::{route_economics, EconomicParams};
///
/// # fn main() -> Result<(), trotro_core::VehicleProfileError> {
/// let vehicle = VehicleProfile::new(
///     "TT-1",
///     14,
///     9.0,
///     EmissionFactors::diesel(),
///     CostRates { fuel_price: 13.5, daily_wage: 80.0, maintenance_per_km: 0.4 },
///     180.0,
///     Duration::from_secs(8 * 3600),
///     FuelType::Diesel,
/// )?;
/// let economics = route_economics(
///     18.0,
///     Duration::from_secs(3600),
///     &vehicle,
///     7.0,
///     2.5,
///     &CongestionFactors::free_flow(),
///     &EmissionsBreakdown::zero(),
///     &EconomicParams::default(),
/// );
/// assert_eq!(economics.load_factor, 0.5);
/// assert!(economics.profit_margin.is_defined());
/// # Ok(())
/// # }
/// ```
#[must_use]
#[expect(clippy::too_many_arguments, reason = "economics is a function of the full route state")]
pub fn route_economics(
    distance_km: f64,
    duration: Duration,
    vehicle: &VehicleProfile,
    passengers: f64,
    fare_per_passenger: f64,
    factors: &CongestionFactors,
    emissions: &EmissionsBreakdown,
    params: &EconomicParams,
) -> RouteEconomics {
    let duration_hours = duration.as_secs_f64() / SECONDS_PER_HOUR;
    let rates = &vehicle.cost_rates;

    let fuel_cost = vehicle.fuel_consumed(distance_km) * rates.fuel_price * factors.fuel;
    let wage_cost = duration_hours * (rates.daily_wage / params.standard_shift_hours);
    let maintenance_cost = distance_km * rates.maintenance_per_km;
    let opportunity_cost = duration_hours
        * f64::from(vehicle.capacity)
        * params.average_fare
        * params.opportunity_rate;
    let carbon_cost = emissions.co2_kg * params.carbon_price_per_kg;

    let revenue = passengers * fare_per_passenger;
    let load_factor = passengers / f64::from(vehicle.capacity);
    let total_cost =
        fuel_cost + wage_cost + maintenance_cost + opportunity_cost + carbon_cost;

    let (cost_per_km, revenue_per_km) = if distance_km > 0.0 {
        (total_cost / distance_km, revenue / distance_km)
    } else {
        (0.0, 0.0)
    };

    RouteEconomics {
        distance_km,
        duration,
        fuel_cost,
        wage_cost,
        maintenance_cost,
        opportunity_cost,
        carbon_cost,
        revenue,
        load_factor,
        cost_per_km,
        revenue_per_km,
        profit_margin: Ratio::of(revenue - total_cost, revenue),
        roi: Ratio::of(revenue - total_cost, total_cost),
    }
}
