//! Core domain types for the Trotro transit optimization engine.
//!
//! This crate owns the data model shared by every other member of the
//! workspace: stops, vehicle profiles, congestion context, objective
//! weights, requests, and solutions. Constructors validate eagerly and
//! return `Result` so that malformed input is rejected at the boundary
//! rather than surfacing as corrupt arithmetic deep inside a solve.
//!
//! The crate also provides the two shared leaf computations, the
//! geospatial travel matrix ([`TravelMatrix`]) and the congestion and
//! cultural context model ([`CongestionModel`]), plus the
//! [`TransitSolver`] trait seam that solver crates implement.
//!
//! Everything here is a pure value type: no I/O, no global state, no
//! interior mutability. A request carries its own immutable snapshot of
//! the fleet and the network.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod congestion;
mod context;
mod error;
mod matrix;
mod objectives;
mod ratio;
mod request;
mod solution;
mod solver;
mod stop;
mod vehicle;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use congestion::{CongestionFactors, CongestionModel, CorridorClass};
pub use context::{CongestionContext, CulturalCalendar};
pub use error::OptimizationError;
pub use matrix::{MatrixError, TravelMatrix};
pub use objectives::{ObjectivesError, OptimizationObjectives};
pub use ratio::Ratio;
pub use request::{OptimizationRequest, RouteConstraints, TimeWindow};
pub use solution::{
    ConstraintViolation, EmissionsBreakdown, OptimizedSolution, RouteEconomics, SolutionTotals,
    SolverStatus, VehicleRoute,
};
pub use solver::{ScenarioSet, TransitSolver};
pub use stop::{Stop, StopError};
pub use vehicle::{CostRates, EmissionFactors, FuelType, VehicleProfile, VehicleProfileError};
