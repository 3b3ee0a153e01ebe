//! Multi-objective weight vectors and the canonical scenario presets.

use thiserror::Error;

/// Errors returned by [`OptimizationObjectives::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ObjectivesError {
    /// A weight was negative or not finite.
    #[error("objective weight `{name}` must be finite and non-negative, got {value}")]
    InvalidWeight {
        /// Name of the offending weight.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The weights did not sum to 1.0 within tolerance.
    #[error("objective weights must sum to 1.0 +/- {tolerance}, got {sum}")]
    Unnormalised {
        /// Observed sum of the weights.
        sum: f64,
        /// Accepted deviation from 1.0.
        tolerance: f64,
    },
}

/// A weight vector over the optimization objectives.
///
/// Weights are non-negative and must sum to 1.0 within
/// [`Self::SUM_TOLERANCE`]. An out-of-tolerance sum is a rejection at
/// the request boundary, never a silent normalisation.
///
/// # Examples
/// ```
/// use trotro_core::OptimizationObjectives;
///
/// let objectives = OptimizationObjectives::balanced();
/// assert!(objectives.validate().is_ok());
/// assert!((objectives.weight_sum() - 1.0).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizationObjectives {
    /// Weight on total route distance.
    pub distance: f64,
    /// Weight on total travel time.
    pub time: f64,
    /// Weight on fuel cost.
    pub fuel_cost: f64,
    /// Weight on emissions.
    pub emissions: f64,
    /// Weight on passenger coverage (demand served).
    pub passenger_coverage: f64,
    /// Weight on driver shift efficiency.
    pub driver_efficiency: f64,
    /// Weight on vehicle wear.
    pub vehicle_wear: f64,
}

impl OptimizationObjectives {
    /// Accepted deviation of the weight sum from 1.0.
    pub const SUM_TOLERANCE: f64 = 0.01;

    /// Sum of all weights.
    #[must_use]
    pub fn weight_sum(&self) -> f64 {
        self.distance
            + self.time
            + self.fuel_cost
            + self.emissions
            + self.passenger_coverage
            + self.driver_efficiency
            + self.vehicle_wear
    }

    /// Check that all weights are finite, non-negative, and sum to 1.0
    /// within tolerance.
    ///
    /// # Errors
    /// Returns [`ObjectivesError`] naming the first offending weight, or
    /// the out-of-tolerance sum.
    pub fn validate(&self) -> Result<(), ObjectivesError> {
        let named = [
            ("distance", self.distance),
            ("time", self.time),
            ("fuel_cost", self.fuel_cost),
            ("emissions", self.emissions),
            ("passenger_coverage", self.passenger_coverage),
            ("driver_efficiency", self.driver_efficiency),
            ("vehicle_wear", self.vehicle_wear),
        ];
        for (name, value) in named {
            if !value.is_finite() || value < 0.0 {
                return Err(ObjectivesError::InvalidWeight { name, value });
            }
        }
        let sum = self.weight_sum();
        if (sum - 1.0).abs() > Self::SUM_TOLERANCE {
            return Err(ObjectivesError::Unnormalised {
                sum,
                tolerance: Self::SUM_TOLERANCE,
            });
        }
        Ok(())
    }

    /// Canonical preset favouring operating cost.
    #[must_use]
    pub const fn cost_optimized() -> Self {
        Self {
            distance: 0.25,
            time: 0.10,
            fuel_cost: 0.35,
            emissions: 0.05,
            passenger_coverage: 0.15,
            driver_efficiency: 0.05,
            vehicle_wear: 0.05,
        }
    }

    /// Canonical preset favouring journey time.
    #[must_use]
    pub const fn time_optimized() -> Self {
        Self {
            distance: 0.20,
            time: 0.50,
            fuel_cost: 0.10,
            emissions: 0.05,
            passenger_coverage: 0.10,
            driver_efficiency: 0.025,
            vehicle_wear: 0.025,
        }
    }

    /// Canonical preset favouring low emissions.
    #[must_use]
    pub const fn eco_optimized() -> Self {
        Self {
            distance: 0.20,
            time: 0.05,
            fuel_cost: 0.10,
            emissions: 0.50,
            passenger_coverage: 0.10,
            driver_efficiency: 0.025,
            vehicle_wear: 0.025,
        }
    }

    /// Canonical preset with no dominant objective.
    #[must_use]
    pub const fn balanced() -> Self {
        Self {
            distance: 0.20,
            time: 0.20,
            fuel_cost: 0.15,
            emissions: 0.15,
            passenger_coverage: 0.20,
            driver_efficiency: 0.05,
            vehicle_wear: 0.05,
        }
    }
}
