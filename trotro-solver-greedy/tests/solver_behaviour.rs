#![expect(
    clippy::unwrap_used,
    clippy::indexing_slicing,
    reason = "behaviour tests use unwrap and fixed indices for readable failures"
)]

//! End-to-end behaviour of the greedy solver on small networks.

use std::time::Duration;

use geo::Coord;
use rstest::{fixture, rstest};
use trotro_core::test_support::{midweek_context, sample_stops, sample_vehicle};
use trotro_core::{
    OptimizationError, OptimizationObjectives, OptimizationRequest, SolverStatus, Stop,
    TransitSolver,
};
use trotro_solver_greedy::{generate_scenarios, GreedySolver};

/// Roughly one kilometre of latitude near the equator.
const ONE_KM_LAT: f64 = 0.009044;

fn stop_at(id: u64, x: f64, y: f64, demand: f64) -> Stop {
    Stop::with_demand(id, Coord { x, y }, demand)
}

#[fixture]
fn solver() -> GreedySolver {
    GreedySolver::new()
}

#[rstest]
fn two_stop_network_yields_one_optimal_loop(solver: GreedySolver) {
    let stops = vec![
        stop_at(1, -0.2050, 5.5715, 5.0),
        stop_at(2, -0.2050, 5.5715 + ONE_KM_LAT, 5.0),
    ];
    let request = OptimizationRequest::new(
        stops,
        vec![sample_vehicle("TT-1", 10)],
        OptimizationObjectives::balanced(),
        midweek_context(),
    );
    let solution = solver.optimize(&request).unwrap();

    assert_eq!(solution.status, SolverStatus::Optimal);
    assert_eq!(solution.routes.len(), 1);
    let route = &solution.routes[0];
    assert_eq!(route.stops, vec![0, 1, 0]);
    // The depot's own demand never boards, so five seats of ten fill.
    assert!((route.passengers - 5.0).abs() < 1e-9);
    assert!((route.economics.load_factor - 0.5).abs() < 1e-9);
    // Out and back over roughly one kilometre each way.
    assert!(route.distance_km > 1.8 && route.distance_km < 2.2);
}

#[rstest]
fn tight_capacity_leaves_stops_unserved(solver: GreedySolver) {
    // Nine demand-5 stops around a depot; each capacity-5 vehicle can
    // board exactly one stop's worth of passengers.
    let mut stops = vec![stop_at(0, -0.2050, 5.5715, 0.0)];
    for offset in 1..=9u64 {
        #[expect(clippy::cast_precision_loss, reason = "offset is tiny")]
        let east = -0.2050 + ONE_KM_LAT * offset as f64;
        stops.push(stop_at(offset, east, 5.5715, 5.0));
    }
    let vehicles = (1..=3)
        .map(|n| sample_vehicle(&format!("TT-{n}"), 5))
        .collect();
    let request = OptimizationRequest::new(
        stops,
        vehicles,
        OptimizationObjectives::balanced(),
        midweek_context(),
    );
    let solution = solver.optimize(&request).unwrap();

    assert_eq!(solution.status, SolverStatus::Feasible);
    assert_eq!(solution.routes.len(), 3);
    assert_eq!(solution.served_stop_count(), 3);
    assert_eq!(solution.unserved_stops.len(), 6);
    for route in &solution.routes {
        assert!(route.passengers <= 5.0 + 1e-9);
    }
}

#[rstest]
fn pure_emission_weight_visits_nearest_first(solver: GreedySolver) {
    // Collinear stops east of the depot at one, two, and three
    // kilometres. A distance-driven objective must sweep them in order.
    let stops = vec![
        stop_at(0, -0.2050, 5.5715, 10.0),
        stop_at(1, -0.2050 + ONE_KM_LAT, 5.5715, 10.0),
        stop_at(2, -0.2050 + 2.0 * ONE_KM_LAT, 5.5715, 10.0),
        stop_at(3, -0.2050 + 3.0 * ONE_KM_LAT, 5.5715, 10.0),
    ];
    let objectives = OptimizationObjectives {
        distance: 0.0,
        time: 0.0,
        fuel_cost: 0.0,
        emissions: 1.0,
        passenger_coverage: 0.0,
        driver_efficiency: 0.0,
        vehicle_wear: 0.0,
    };
    let request = OptimizationRequest::new(
        stops,
        vec![sample_vehicle("TT-1", 100)],
        objectives,
        midweek_context(),
    );
    let solution = solver.optimize(&request).unwrap();

    assert_eq!(solution.routes[0].stops, vec![0, 1, 2, 3, 0]);
}

#[rstest]
fn repeated_solves_are_identical(solver: GreedySolver) {
    let request = OptimizationRequest::new(
        sample_stops(),
        vec![sample_vehicle("TT-1", 60), sample_vehicle("TT-2", 60)],
        OptimizationObjectives::balanced(),
        midweek_context(),
    );
    let first = solver.optimize(&request).unwrap();
    let second = solver.optimize(&request).unwrap();
    assert_eq!(format!("{first:?}"), format!("{second:?}"));
}

#[rstest]
fn extra_vehicle_never_reduces_coverage(solver: GreedySolver) {
    let small = OptimizationRequest::new(
        sample_stops(),
        vec![sample_vehicle("TT-1", 120)],
        OptimizationObjectives::balanced(),
        midweek_context(),
    );
    let mut large = small.clone();
    large.vehicles.push(sample_vehicle("TT-2", 120));

    let served_small = solver.optimize(&small).unwrap().served_stop_count();
    let served_large = solver.optimize(&large).unwrap().served_stop_count();
    assert!(served_large >= served_small);
}

#[rstest]
fn unnormalised_weights_are_rejected(solver: GreedySolver) {
    let mut objectives = OptimizationObjectives::balanced();
    objectives.distance = 0.6;
    let request = OptimizationRequest::new(
        sample_stops(),
        vec![sample_vehicle("TT-1", 100)],
        objectives,
        midweek_context(),
    );
    let result = solver.optimize(&request);
    assert!(matches!(result, Err(OptimizationError::Objectives(_))));
}

#[rstest]
fn stop_outside_service_region_is_rejected(solver: GreedySolver) {
    let mut stops = sample_stops();
    stops.push(stop_at(99, 31.23, 30.04, 50.0));
    let request = OptimizationRequest::new(
        stops,
        vec![sample_vehicle("TT-1", 100)],
        OptimizationObjectives::balanced(),
        midweek_context(),
    );
    let result = solver.optimize(&request);
    assert!(matches!(
        result,
        Err(OptimizationError::OutsideServiceRegion { stop_id: 99, .. })
    ));
}

#[rstest]
fn exhausted_budget_reports_timeout(solver: GreedySolver) {
    let mut request = OptimizationRequest::new(
        sample_stops(),
        vec![sample_vehicle("TT-1", 100)],
        OptimizationObjectives::balanced(),
        midweek_context(),
    );
    request.time_budget = Duration::ZERO;
    let solution = solver.optimize(&request).unwrap();
    assert_eq!(solution.status, SolverStatus::Timeout);
}

#[rstest]
fn scenario_set_covers_all_presets(solver: GreedySolver) {
    let request = OptimizationRequest::new(
        sample_stops(),
        vec![sample_vehicle("TT-1", 400)],
        OptimizationObjectives::balanced(),
        midweek_context(),
    );
    let scenarios = generate_scenarios(&solver, &request).unwrap();
    for solution in [
        &scenarios.cost_optimized,
        &scenarios.time_optimized,
        &scenarios.eco_optimized,
        &scenarios.balanced,
    ] {
        assert_eq!(solution.status, SolverStatus::Optimal);
        assert!(solution.totals.distance_km > 0.0);
        assert!(solution.totals.co2_kg > 0.0);
        assert!(solution.totals.cost > 0.0);
    }
}

#[rstest]
#[case::ample(sample_stops(), 400)]
#[case::tight(sample_stops(), 150)]
#[case::scarce(sample_stops(), 60)]
#[case::corridor(
    vec![
        stop_at(0, -0.2050, 5.5715, 20.0),
        stop_at(1, -0.2050 + ONE_KM_LAT, 5.5715, 40.0),
        stop_at(2, -0.2050 + 2.0 * ONE_KM_LAT, 5.5715, 10.0),
        stop_at(3, -0.2050 + 3.0 * ONE_KM_LAT, 5.5715, 30.0),
    ],
    400
)]
fn eco_scenario_emits_no_more_co2_than_cost_scenario(
    solver: GreedySolver,
    #[case] stops: Vec<Stop>,
    #[case] capacity: u32,
) {
    let request = OptimizationRequest::new(
        stops,
        vec![sample_vehicle("TT-1", capacity)],
        OptimizationObjectives::balanced(),
        midweek_context(),
    );
    let scenarios = generate_scenarios(&solver, &request).unwrap();
    let eco = scenarios.eco_optimized.totals.co2_kg;
    let cost = scenarios.cost_optimized.totals.co2_kg;
    assert!(
        eco <= cost + 1e-9,
        "eco scenario emits {eco} kg CO2 but cost scenario only {cost} kg"
    );
}

#[rstest]
fn totals_sum_the_routes(solver: GreedySolver) {
    let request = OptimizationRequest::new(
        sample_stops(),
        vec![sample_vehicle("TT-1", 150), sample_vehicle("TT-2", 150)],
        OptimizationObjectives::balanced(),
        midweek_context(),
    );
    let solution = solver.optimize(&request).unwrap();
    let distance: f64 = solution.routes.iter().map(|route| route.distance_km).sum();
    let co2: f64 = solution.routes.iter().map(|route| route.emissions.co2_kg).sum();
    assert!((solution.totals.distance_km - distance).abs() < 1e-9);
    assert!((solution.totals.co2_kg - co2).abs() < 1e-9);
}
