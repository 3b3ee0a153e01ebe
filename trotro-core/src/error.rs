//! The optimization error taxonomy.
//!
//! Only invalid input is an error. Infeasibility and timeout are
//! outcomes carried on [`crate::OptimizedSolution`]'s status field so
//! callers always receive the diagnostic describing what was achieved.

use thiserror::Error;

use crate::{MatrixError, ObjectivesError, VehicleProfileError};

/// Errors returned before any route construction begins.
///
/// Validation failures are fatal for the request and are returned
/// immediately; no partial computation is attempted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimizationError {
    /// Fewer than two stops were supplied.
    #[error("at least two stops are required, got {0}")]
    TooFewStops(usize),
    /// The vehicle roster was empty.
    #[error("at least one vehicle is required")]
    NoVehicles,
    /// A stop lies outside the request's service region.
    #[error(
        "stop {stop_id} is outside the service region: latitude {latitude}, longitude {longitude}"
    )]
    OutsideServiceRegion {
        /// Identifier of the offending stop.
        stop_id: u64,
        /// The stop's latitude.
        latitude: f64,
        /// The stop's longitude.
        longitude: f64,
    },
    /// The depot index does not refer to a stop in the request.
    #[error("depot index {depot} is out of range for {stops} stops")]
    DepotOutOfRange {
        /// The rejected depot index.
        depot: usize,
        /// Number of stops in the request.
        stops: usize,
    },
    /// A budget or margin constraint was negative.
    #[error("constraint `{name}` must be non-negative, got {value}")]
    NegativeConstraint {
        /// Name of the offending constraint.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The fare per passenger was negative or non-finite.
    #[error("fare per passenger must be finite and non-negative, got {0}")]
    InvalidFare(f64),
    /// The objective weights failed validation.
    #[error(transparent)]
    Objectives(#[from] ObjectivesError),
    /// A vehicle profile failed validation.
    #[error(transparent)]
    Vehicle(#[from] VehicleProfileError),
    /// Matrix construction failed, e.g. malformed coordinates.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}
