//! Property-based tests for the greedy solver.
//!
//! These assert invariants that must hold for every valid request,
//! complementing the scenario-specific behavioural tests.
//!
//! # Invariants tested
//!
//! - **Capacity compliance:** Boarded passengers never exceed capacity.
//! - **No duplicates:** Each stop is served by at most one route.
//! - **Conservation:** Served and unserved stops partition the network.
//! - **Depot terminals:** Every route starts and ends at the depot.
//! - **Finite metrics:** Distances, costs, and emissions are finite.


use proptest::prelude::*;
use trotro_core::test_support::{midweek_context, sample_vehicle};
use trotro_core::{OptimizationObjectives, OptimizationRequest, TransitSolver};
use trotro_solver_greedy::GreedySolver;

use proptest_support::{assert_unique_interior_stops, stop_set_strategy};

fn build_request(stops: Vec<trotro_core::Stop>, capacity: u32) -> OptimizationRequest {
    OptimizationRequest::new(
        stops,
        vec![
            sample_vehicle("TT-1", capacity),
            sample_vehicle("TT-2", capacity),
        ],
        OptimizationObjectives::balanced(),
        midweek_context(),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: No route boards more passengers than the vehicle holds.
    #[test]
    fn routes_respect_vehicle_capacity(
        stops in stop_set_strategy(2, 10),
        capacity in 10_u32..=120_u32,
    ) {
        let request = build_request(stops, capacity);
        let solution = GreedySolver::new().optimize(&request).expect("solve should succeed");
        for route in &solution.routes {
            prop_assert!(
                route.passengers <= f64::from(capacity) + 1e-9,
                "route boards {} passengers but capacity is {capacity}",
                route.passengers
            );
        }
    }

    /// Property: Each stop appears in at most one route interior.
    #[test]
    fn no_stop_is_served_twice(stops in stop_set_strategy(2, 12)) {
        let request = build_request(stops, 500);
        let solution = GreedySolver::new().optimize(&request).expect("solve should succeed");
        assert_unique_interior_stops(&solution.routes)?;
    }

    /// Property: Served and unserved stops partition the non-depot stops.
    #[test]
    fn served_and_unserved_partition_the_network(stops in stop_set_strategy(2, 12)) {
        let total = stops.len();
        let request = build_request(stops, 60);
        let solution = GreedySolver::new().optimize(&request).expect("solve should succeed");
        prop_assert_eq!(
            solution.served_stop_count() + solution.unserved_stops.len(),
            total - 1,
            "every stop except the depot is either served or reported unserved"
        );
    }

    /// Property: Every route is a depot-to-depot loop.
    #[test]
    fn routes_are_depot_loops(stops in stop_set_strategy(2, 10)) {
        let request = build_request(stops, 200);
        let solution = GreedySolver::new().optimize(&request).expect("solve should succeed");
        for route in &solution.routes {
            prop_assert_eq!(route.stops.first(), Some(&request.depot));
            prop_assert_eq!(route.stops.last(), Some(&request.depot));
            prop_assert!(route.stops.len() >= 3, "a route serves at least one stop");
        }
    }

    /// Property: All solution metrics are finite and non-negative.
    #[test]
    fn metrics_are_finite_and_non_negative(stops in stop_set_strategy(2, 10)) {
        let request = build_request(stops, 200);
        let solution = GreedySolver::new().optimize(&request).expect("solve should succeed");
        prop_assert!(solution.totals.distance_km.is_finite());
        prop_assert!(solution.totals.distance_km >= 0.0);
        prop_assert!(solution.totals.co2_kg.is_finite());
        prop_assert!(solution.totals.co2_kg >= 0.0);
        prop_assert!(solution.totals.cost.is_finite());
        for route in &solution.routes {
            prop_assert!(route.distance_km.is_finite());
            prop_assert!(route.economics.total_cost().is_finite());
            prop_assert!(route.efficiency_score.is_finite());
            prop_assert!(route.emissions.co2_kg >= 0.0);
        }
    }

    /// Property: Solving twice yields structurally identical solutions.
    #[test]
    fn solve_is_deterministic(stops in stop_set_strategy(2, 8)) {
        let request = build_request(stops, 80);
        let solver = GreedySolver::new();
        let first = solver.optimize(&request).expect("solve should succeed");
        let second = solver.optimize(&request).expect("solve should succeed");
        prop_assert_eq!(first, second);
    }
}
