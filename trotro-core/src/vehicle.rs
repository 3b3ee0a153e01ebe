//! Vehicle classes: capacity, fuel, emission, and cost characteristics.

use std::time::Duration;

use thiserror::Error;

/// The closed set of fuel types the economics and emissions models
/// understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FuelType {
    /// Diesel minibuses, the bulk of the trotro fleet.
    Diesel,
    /// Petrol-fuelled shared taxis and smaller vans.
    Petrol,
    /// Compressed natural gas conversions.
    Cng,
    /// Battery-electric vehicles. Tailpipe factors are zero; CO2 comes
    /// from the grid intensity supplied to [`EmissionFactors::electric`].
    Electric,
}

/// Emission factors in kilograms of pollutant per unit of fuel consumed
/// (litres for liquid fuels, kilograms for CNG, kilowatt-hours for
/// electric).
///
/// The per-fuel defaults below are generic tailpipe figures intended as
/// calibration starting points, not measured fleet data.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmissionFactors {
    /// Carbon dioxide, kg per fuel unit.
    pub co2: f64,
    /// Nitrogen oxides, kg per fuel unit.
    pub nox: f64,
    /// Fine particulate matter, kg per fuel unit.
    pub pm25: f64,
    /// Carbon monoxide, kg per fuel unit.
    pub co: f64,
}

impl EmissionFactors {
    /// Typical diesel tailpipe factors.
    #[must_use]
    pub const fn diesel() -> Self {
        Self {
            co2: 2.68,
            nox: 0.04,
            pm25: 0.005,
            co: 0.01,
        }
    }

    /// Typical petrol tailpipe factors.
    #[must_use]
    pub const fn petrol() -> Self {
        Self {
            co2: 2.31,
            nox: 0.02,
            pm25: 0.002,
            co: 0.02,
        }
    }

    /// Typical CNG tailpipe factors (per kg of gas).
    #[must_use]
    pub const fn cng() -> Self {
        Self {
            co2: 1.81,
            nox: 0.01,
            pm25: 0.001,
            co: 0.005,
        }
    }

    /// Electric factors: zero tailpipe emissions, with CO2 reflecting the
    /// carbon intensity of the charging grid in kg per kWh.
    ///
    /// There is no universal default; deployments must supply a grid
    /// figure appropriate to their region.
    #[must_use]
    pub const fn electric(grid_co2_per_kwh: f64) -> Self {
        Self {
            co2: grid_co2_per_kwh,
            nox: 0.0,
            pm25: 0.0,
            co: 0.0,
        }
    }
}

/// Per-vehicle operating cost rates in the deployment currency.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostRates {
    /// Price per fuel unit (litre, kg, or kWh).
    pub fuel_price: f64,
    /// Daily driver wage for a standard shift.
    pub daily_wage: f64,
    /// Maintenance cost per kilometre driven.
    pub maintenance_per_km: f64,
}

/// Errors returned by [`VehicleProfile::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VehicleProfileError {
    /// Capacity must be at least one passenger.
    #[error("vehicle capacity must be positive")]
    ZeroCapacity,
    /// Fuel efficiency must be a positive, finite distance per fuel unit.
    #[error("vehicle fuel efficiency must be positive, got {0}")]
    InvalidFuelEfficiency(f64),
    /// Maximum route distance must be positive.
    #[error("vehicle max distance must be positive, got {0}")]
    InvalidMaxDistance(f64),
    /// Maximum route duration must be positive.
    #[error("vehicle max duration must be positive")]
    ZeroMaxDuration,
}

/// A reusable description of one vehicle or vehicle class.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use trotro_core::{CostRates, EmissionFactors, FuelType, VehicleProfile};
///
/// # fn main() -> Result<(), trotro_core::VehicleProfileError> {
/// let trotro = VehicleProfile::new(
///     "TT-14",
///     14,
///     9.0,
///     EmissionFactors::diesel(),
///     CostRates { fuel_price: 13.5, daily_wage: 80.0, maintenance_per_km: 0.4 },
///     180.0,
///     Duration::from_secs(8 * 3600),
///     FuelType::Diesel,
/// )?;
/// assert_eq!(trotro.capacity, 14);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleProfile {
    /// Fleet identifier or class label.
    pub id: String,
    /// Passenger capacity; always positive.
    pub capacity: u32,
    /// Kilometres travelled per fuel unit; always positive.
    pub fuel_efficiency: f64,
    /// Tailpipe (or grid) emission factors.
    pub emission_factors: EmissionFactors,
    /// Operating cost rates.
    pub cost_rates: CostRates,
    /// Maximum route distance in kilometres.
    pub max_distance_km: f64,
    /// Maximum route duration.
    pub max_duration: Duration,
    /// Fuel type selecting the economics and emissions behaviour.
    pub fuel_type: FuelType,
}

impl VehicleProfile {
    /// Validates and constructs a [`VehicleProfile`].
    ///
    /// # Errors
    /// Returns [`VehicleProfileError`] when capacity is zero, fuel
    /// efficiency is not a positive finite number, or either route limit
    /// is non-positive.
    #[expect(clippy::too_many_arguments, reason = "profile mirrors the full data record")]
    pub fn new(
        id: impl Into<String>,
        capacity: u32,
        fuel_efficiency: f64,
        emission_factors: EmissionFactors,
        cost_rates: CostRates,
        max_distance_km: f64,
        max_duration: Duration,
        fuel_type: FuelType,
    ) -> Result<Self, VehicleProfileError> {
        if capacity == 0 {
            return Err(VehicleProfileError::ZeroCapacity);
        }
        if !fuel_efficiency.is_finite() || fuel_efficiency <= 0.0 {
            return Err(VehicleProfileError::InvalidFuelEfficiency(fuel_efficiency));
        }
        if !max_distance_km.is_finite() || max_distance_km <= 0.0 {
            return Err(VehicleProfileError::InvalidMaxDistance(max_distance_km));
        }
        if max_duration.is_zero() {
            return Err(VehicleProfileError::ZeroMaxDuration);
        }
        Ok(Self {
            id: id.into(),
            capacity,
            fuel_efficiency,
            emission_factors,
            cost_rates,
            max_distance_km,
            max_duration,
            fuel_type,
        })
    }

    /// Fuel units consumed over `distance_km` before congestion effects.
    #[must_use]
    pub fn fuel_consumed(&self, distance_km: f64) -> f64 {
        distance_km / self.fuel_efficiency
    }
}
