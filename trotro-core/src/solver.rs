//! The solver trait seam and multi-scenario result set.

use crate::{OptimizationError, OptimizationRequest, OptimizedSolution};

/// Find a feasible, scored assignment of stop sequences to vehicles.
///
/// Implementations must be stateless functions of the request: no
/// global mutable state, no side effects, and byte-identical output for
/// identical input. They must return [`OptimizationError`] for invalid
/// requests rather than panicking, and must express infeasibility and
/// timeout through the solution's status field.
/// Solvers must be `Send + Sync` so scenario runs can execute in
/// parallel.
pub trait TransitSolver: Send + Sync {
    /// Solve one request, producing a structured solution or a
    /// validation error.
    ///
    /// # Errors
    /// Returns [`OptimizationError`] when the request fails boundary
    /// validation.
    fn optimize(
        &self,
        request: &OptimizationRequest,
    ) -> Result<OptimizedSolution, OptimizationError>;
}

/// The four canonical scenario solutions for one request.
///
/// Each scenario is a complete, independent solve under one of the
/// canonical objective presets; no state is shared between runs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioSet {
    /// Solve under [`crate::OptimizationObjectives::cost_optimized`].
    pub cost_optimized: OptimizedSolution,
    /// Solve under [`crate::OptimizationObjectives::time_optimized`].
    pub time_optimized: OptimizedSolution,
    /// Solve under [`crate::OptimizationObjectives::eco_optimized`].
    pub eco_optimized: OptimizedSolution,
    /// Solve under [`crate::OptimizationObjectives::balanced`].
    pub balanced: OptimizedSolution,
}
