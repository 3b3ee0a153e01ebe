//! Facade crate for the Trotro transit optimization engine.
//!
//! This crate re-exports the core domain types and economics model, and
//! exposes the optional solver and network analyzer behind feature
//! flags.

#![forbid(unsafe_code)]

pub use trotro_core::{
    CongestionContext, CongestionFactors, CongestionModel, ConstraintViolation, CorridorClass,
    CostRates, CulturalCalendar, EmissionFactors, EmissionsBreakdown, FuelType, MatrixError,
    ObjectivesError, OptimizationError, OptimizationObjectives, OptimizationRequest,
    OptimizedSolution, Ratio, RouteConstraints, RouteEconomics, ScenarioSet, SolutionTotals,
    SolverStatus, Stop, StopError, TimeWindow, TransitSolver, TravelMatrix, VehicleProfile,
    VehicleProfileError, VehicleRoute,
};

pub use trotro_economics::{
    aggregate_impact, route_economics, route_emissions, EconomicParams, EnvironmentalImpact,
    ImpactCoefficients,
};

#[cfg(feature = "solver-greedy")]
pub use trotro_solver_greedy::{generate_scenarios, GreedySolver, GreedySolverConfig};

#[cfg(feature = "analyzer")]
pub use trotro_analyzer::{
    analyze_network, find_service_gaps, route_performance, AnalyzerConfig, GapSeverity, NamedArea,
    NetworkAnalysis, NetworkRoute, RoutePerformance, ServiceGap,
};
