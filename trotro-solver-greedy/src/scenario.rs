//! Scenario generation across the canonical objective presets.

use log::debug;
use trotro_core::{
    OptimizationError, OptimizationObjectives, OptimizationRequest, OptimizedSolution, ScenarioSet,
    TransitSolver,
};

use crate::solver::GreedySolver;

/// Solve the request under all four canonical objective presets.
///
/// The four solves share no mutable state and run on the rayon thread
/// pool in parallel. The preset replaces the request's objectives; the
/// stops, fleet, constraints, and context are identical across
/// scenarios, so differences between the solutions are attributable to
/// the weights alone.
///
/// # Errors
///
/// Returns the first [`OptimizationError`] produced by any scenario.
/// Validation failures are identical across presets apart from the
/// objective weights, which every preset satisfies by construction.
pub fn generate_scenarios(
    solver: &GreedySolver,
    request: &OptimizationRequest,
) -> Result<ScenarioSet, OptimizationError> {
    debug!("generating four objective scenarios");
    let solve = |objectives: OptimizationObjectives| -> Result<OptimizedSolution, OptimizationError> {
        let mut scenario = request.clone();
        scenario.objectives = objectives;
        solver.optimize(&scenario)
    };

    let ((cost_optimized, time_optimized), (eco_optimized, balanced)) = rayon::join(
        || {
            rayon::join(
                || solve(OptimizationObjectives::cost_optimized()),
                || solve(OptimizationObjectives::time_optimized()),
            )
        },
        || {
            rayon::join(
                || solve(OptimizationObjectives::eco_optimized()),
                || solve(OptimizationObjectives::balanced()),
            )
        },
    );

    Ok(ScenarioSet {
        cost_optimized: cost_optimized?,
        time_optimized: time_optimized?,
        eco_optimized: eco_optimized?,
        balanced: balanced?,
    })
}
