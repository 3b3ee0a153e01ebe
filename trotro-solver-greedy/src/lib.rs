//! Greedy constructive solver for the trotro routing problem.
//!
//! The solver grows one route per vehicle from the depot, repeatedly
//! appending the unvisited stop with the lowest multi-objective cost
//! among those that keep the route feasible under capacity, distance,
//! and duration limits. It is a deliberate simplification of an exact
//! formulation: deterministic, fast, and honest about incomplete
//! coverage through the solution status, and it can be swapped for a
//! stronger solver without changing the [`trotro_core::TransitSolver`]
//! contract.
//!
//! Scenario generation re-solves the same request under the four
//! canonical objective presets. The runs share no mutable state and
//! execute in parallel.

#![forbid(unsafe_code)]

mod scenario;
mod score;
mod solver;

pub use scenario::generate_scenarios;
pub use score::ScoreWeights;
pub use solver::{GreedySolver, GreedySolverConfig};
