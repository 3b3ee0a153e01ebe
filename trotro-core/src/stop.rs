//! Transit stops and their demand characteristics.

use geo::Coord;
use thiserror::Error;

/// Errors returned by [`Stop::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StopError {
    /// Priority was outside the 1–10 range.
    #[error("stop priority must be between 1 and 10, got {0}")]
    PriorityOutOfRange(u8),
    /// Passenger demand was negative or not finite.
    #[error("stop passenger demand must be finite and non-negative, got {0}")]
    InvalidDemand(f64),
    /// Accessibility score was outside the `[0.0, 1.0]` range.
    #[error("stop accessibility score must be between 0.0 and 1.0, got {0}")]
    InvalidAccessibility(f64),
}

/// A fixed geographic point served by the network.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
/// Stops are stored once per optimization request; routes refer to them
/// by index into the request's stop vector, never by pointer.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use trotro_core::Stop;
///
/// # fn main() -> Result<(), trotro_core::StopError> {
/// let stop = Stop::new(1, Coord { x: -0.1870, y: 5.6037 }, 120.0, 8, 0.7)?;
/// assert_eq!(stop.id, 1);
/// assert_eq!(stop.priority, 8);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    /// Unique identifier within a request.
    pub id: u64,
    /// Geospatial position (`x = longitude`, `y = latitude`).
    pub location: Coord<f64>,
    /// Boarding demand in persons per hour.
    pub passenger_demand: f64,
    /// Service priority from 1 (lowest) to 10 (highest).
    pub priority: u8,
    /// Accessibility score in `[0.0, 1.0]`.
    pub accessibility_score: f64,
}

impl Stop {
    /// Validates and constructs a [`Stop`].
    ///
    /// # Errors
    /// Returns [`StopError`] when the priority is outside 1–10, the demand
    /// is negative or non-finite, or the accessibility score is outside
    /// `[0.0, 1.0]`.
    pub fn new(
        id: u64,
        location: Coord<f64>,
        passenger_demand: f64,
        priority: u8,
        accessibility_score: f64,
    ) -> Result<Self, StopError> {
        if !(1..=10).contains(&priority) {
            return Err(StopError::PriorityOutOfRange(priority));
        }
        if !passenger_demand.is_finite() || passenger_demand < 0.0 {
            return Err(StopError::InvalidDemand(passenger_demand));
        }
        if !(0.0..=1.0).contains(&accessibility_score) {
            return Err(StopError::InvalidAccessibility(accessibility_score));
        }
        Ok(Self {
            id,
            location,
            passenger_demand,
            priority,
            accessibility_score,
        })
    }

    /// Construct a stop with median priority and accessibility.
    ///
    /// Convenience for callers that only know location and demand.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use trotro_core::Stop;
    ///
    /// let stop = Stop::with_demand(3, Coord { x: 0.0, y: 5.6 }, 40.0);
    /// assert_eq!(stop.priority, 5);
    /// ```
    #[must_use]
    pub fn with_demand(id: u64, location: Coord<f64>, passenger_demand: f64) -> Self {
        Self {
            id,
            location,
            passenger_demand: passenger_demand.max(0.0),
            priority: 5,
            accessibility_score: 0.5,
        }
    }
}
