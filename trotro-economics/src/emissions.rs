//! Per-route pollutant emissions.

use trotro_core::{CongestionFactors, EmissionsBreakdown, VehicleProfile};

/// Compute the pollutant masses emitted over one route.
///
/// Each pollutant is `fuel_consumed * factor * congestion`, where fuel
/// consumption is the vehicle's rated figure and the congestion
/// emission multiplier captures stop-and-go penalties. Electric
/// vehicles inherit whatever grid CO2 intensity their
/// [`trotro_core::EmissionFactors`] carry, with zero tailpipe species.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use trotro_core::{
///     CongestionFactors, CostRates, EmissionFactors, FuelType, VehicleProfile,
/// };
/// use trotro_economics::route_emissions;
///
/// # fn main() -> Result<(), trotro_core::VehicleProfileError> {
/// let bus = VehicleProfile::new(
///     "EV-1",
///     20,
///     1.2,
///     EmissionFactors::electric(0.45),
///     CostRates { fuel_price: 1.8, daily_wage: 80.0, maintenance_per_km: 0.25 },
///     200.0,
///     Duration::from_secs(8 * 3600),
///     FuelType::Electric,
/// )?;
/// let emissions = route_emissions(12.0, &bus, &CongestionFactors::free_flow());
/// assert_eq!(emissions.nox_kg, 0.0);
/// assert!(emissions.co2_kg > 0.0);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn route_emissions(
    distance_km: f64,
    vehicle: &VehicleProfile,
    factors: &CongestionFactors,
) -> EmissionsBreakdown {
    let fuel = vehicle.fuel_consumed(distance_km);
    let rates = &vehicle.emission_factors;
    EmissionsBreakdown {
        co2_kg: fuel * rates.co2,
        nox_kg: fuel * rates.nox,
        pm25_kg: fuel * rates.pm25,
        co_kg: fuel * rates.co,
    }
    .scaled(factors.emissions)
}
