//! The greedy constructive solver.

use std::time::{Duration, Instant};

use log::debug;
use trotro_core::{
    CongestionFactors, CongestionModel, ConstraintViolation, OptimizationError,
    OptimizationRequest, OptimizedSolution, Ratio, RouteEconomics, SolutionTotals, SolverStatus,
    TransitSolver, TravelMatrix, VehicleProfile, VehicleRoute,
};
use trotro_economics::{route_economics, route_emissions, EconomicParams};

use crate::score::ScoreWeights;

const SECONDS_PER_MINUTE: f64 = 60.0;

/// Configuration for [`GreedySolver`].
#[derive(Debug, Clone, PartialEq)]
pub struct GreedySolverConfig {
    /// Assumed free-flow network speed for the travel matrix.
    pub average_speed_kmh: f64,
    /// Candidate scoring constants.
    pub score: ScoreWeights,
    /// Congestion rule table.
    pub congestion: CongestionModel,
    /// Economic coefficients for route costing.
    pub economics: EconomicParams,
}

impl Default for GreedySolverConfig {
    fn default() -> Self {
        Self {
            average_speed_kmh: 25.0,
            score: ScoreWeights::default(),
            congestion: CongestionModel::default(),
            economics: EconomicParams::default(),
        }
    }
}

/// Deterministic greedy constructive solver.
///
/// Stateless between calls: every solve is a pure function of the
/// request and this configuration. Identical inputs produce
/// byte-identical solutions.
#[derive(Debug, Clone, Default)]
pub struct GreedySolver {
    config: GreedySolverConfig,
}

/// A route under construction, before metrics are attached.
struct RouteDraft {
    sequence: Vec<usize>,
    distance_km: f64,
    minutes: f64,
    passengers: f64,
}

/// Feasibility state of one growing route.
struct RouteState {
    current: usize,
    distance_km: f64,
    minutes: f64,
    load: f64,
}

impl GreedySolver {
    /// Construct a solver with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a solver with explicit configuration.
    #[must_use]
    pub const fn with_config(config: GreedySolverConfig) -> Self {
        Self { config }
    }

    /// The solver's configuration.
    #[must_use]
    pub const fn config(&self) -> &GreedySolverConfig {
        &self.config
    }

    fn construct_route(
        &self,
        request: &OptimizationRequest,
        matrix: &TravelMatrix,
        factors: &CongestionFactors,
        vehicle: &VehicleProfile,
        visited: &mut [bool],
        started_at: Instant,
        timed_out: &mut bool,
    ) -> Option<RouteDraft> {
        let depot = request.depot;
        let mut sequence = vec![depot];
        let mut state = RouteState {
            current: depot,
            distance_km: 0.0,
            minutes: 0.0,
            load: 0.0,
        };

        loop {
            if started_at.elapsed() >= request.time_budget {
                *timed_out = true;
                break;
            }
            let Some(next) = self.pick_candidate(request, matrix, factors, vehicle, visited, &state)
            else {
                break;
            };
            let leg_km = matrix.distance_km(state.current, next)?;
            let leg_minutes = matrix.minutes(state.current, next)? * factors.time;
            if let Some(stop) = request.stops.get(next) {
                state.load += request.demand_for(stop);
            }
            state.distance_km += leg_km;
            state.minutes += leg_minutes;
            state.current = next;
            sequence.push(next);
            if let Some(flag) = visited.get_mut(next) {
                *flag = true;
            }
        }

        if sequence.len() < 2 {
            return None;
        }

        // Close the loop back to the depot.
        state.distance_km += matrix.distance_km(state.current, depot)?;
        state.minutes += matrix.minutes(state.current, depot)? * factors.time;
        sequence.push(depot);

        Some(RouteDraft {
            sequence,
            distance_km: state.distance_km,
            minutes: state.minutes,
            passengers: state.load,
        })
    }

    fn pick_candidate(
        &self,
        request: &OptimizationRequest,
        matrix: &TravelMatrix,
        factors: &CongestionFactors,
        vehicle: &VehicleProfile,
        visited: &[bool],
        state: &RouteState,
    ) -> Option<usize> {
        let weights = &self.config.score;
        let penalised = self.window_penalised(request);
        let mut best: Option<(usize, f64)> = None;

        for (index, stop) in request.stops.iter().enumerate() {
            if visited.get(index).copied().unwrap_or(true) {
                continue;
            }
            let Some(leg_km) = matrix.distance_km(state.current, index) else {
                continue;
            };
            let Some(base_minutes) = matrix.minutes(state.current, index) else {
                continue;
            };
            let leg_minutes = base_minutes * factors.time;
            let demand = request.demand_for(stop);
            if !self.is_feasible(
                request, matrix, factors, vehicle, state, index, leg_km, leg_minutes, demand,
            ) {
                continue;
            }
            let score =
                weights.candidate_score(leg_km, leg_minutes, demand, &request.objectives, penalised);
            // Strict improvement beyond the tie epsilon replaces the
            // incumbent; iteration order makes the lowest index win ties.
            match best {
                Some((_, incumbent)) if score + weights.tie_epsilon >= incumbent => {}
                _ => best = Some((index, score)),
            }
        }
        best.map(|(index, _)| index)
    }

    #[expect(clippy::too_many_arguments, reason = "feasibility spans the whole route state")]
    fn is_feasible(
        &self,
        request: &OptimizationRequest,
        matrix: &TravelMatrix,
        factors: &CongestionFactors,
        vehicle: &VehicleProfile,
        state: &RouteState,
        candidate: usize,
        leg_km: f64,
        leg_minutes: f64,
        demand: f64,
    ) -> bool {
        if state.load + demand > f64::from(vehicle.capacity) {
            return false;
        }
        let Some(return_km) = matrix.distance_km(candidate, request.depot) else {
            return false;
        };
        let Some(return_minutes) = matrix.minutes(candidate, request.depot) else {
            return false;
        };
        if state.distance_km + leg_km + return_km > vehicle.max_distance_km {
            return false;
        }
        let max_minutes = vehicle.max_duration.as_secs_f64() / SECONDS_PER_MINUTE;
        if state.minutes + leg_minutes + return_minutes * factors.time > max_minutes {
            return false;
        }
        let arrival = state.minutes + leg_minutes;
        request
            .stops
            .get(candidate)
            .and_then(|stop| request.time_windows.get(&stop.id))
            .map_or(true, |window| window.admits(arrival))
    }

    fn window_penalised(&self, request: &OptimizationRequest) -> bool {
        let constraints = &request.constraints;
        let context = &request.context;
        (constraints.avoid_prayer_window && context.is_prayer_window)
            || (constraints.avoid_market_day_congestion && context.is_market_day)
    }

    fn finish_route(
        &self,
        request: &OptimizationRequest,
        factors: &CongestionFactors,
        vehicle: &VehicleProfile,
        draft: RouteDraft,
    ) -> VehicleRoute {
        let duration = Duration::from_secs_f64(draft.minutes * SECONDS_PER_MINUTE);
        let emissions = route_emissions(draft.distance_km, vehicle, factors);
        let economics = route_economics(
            draft.distance_km,
            duration,
            vehicle,
            draft.passengers,
            request.fare_per_passenger,
            factors,
            &emissions,
            &self.config.economics,
        );
        let violations = route_violations(request, &economics);
        let efficiency_score = if draft.distance_km > 0.0 {
            draft.passengers / draft.distance_km
        } else {
            0.0
        };
        VehicleRoute {
            vehicle_id: vehicle.id.clone(),
            stops: draft.sequence,
            distance_km: draft.distance_km,
            duration,
            passengers: draft.passengers,
            economics,
            emissions,
            violations,
            efficiency_score,
        }
    }
}

impl TransitSolver for GreedySolver {
    fn optimize(
        &self,
        request: &OptimizationRequest,
    ) -> Result<OptimizedSolution, OptimizationError> {
        request.validate()?;
        let started_at = Instant::now();
        debug!(
            "optimizing: {} stops, {} vehicles, depot {}",
            request.stops.len(),
            request.vehicles.len(),
            request.depot
        );

        let matrix = TravelMatrix::build(&request.stops, self.config.average_speed_kmh)?;
        let factors = self
            .config
            .congestion
            .factors(&request.context, request.corridor);
        debug!(
            "congestion factors: time {:.2}, fuel {:.2}, emissions {:.2}",
            factors.time, factors.fuel, factors.emissions
        );

        let mut visited = vec![false; request.stops.len()];
        if let Some(flag) = visited.get_mut(request.depot) {
            *flag = true;
        }

        let mut routes = Vec::new();
        let mut timed_out = false;
        for vehicle in &request.vehicles {
            if started_at.elapsed() >= request.time_budget {
                timed_out = true;
                break;
            }
            let draft = self.construct_route(
                request,
                &matrix,
                &factors,
                vehicle,
                &mut visited,
                started_at,
                &mut timed_out,
            );
            if let Some(draft) = draft {
                routes.push(self.finish_route(request, &factors, vehicle, draft));
            }
        }

        let unserved_stops: Vec<usize> = visited
            .iter()
            .enumerate()
            .filter(|&(index, &seen)| index != request.depot && !seen)
            .map(|(index, _)| index)
            .collect();

        let status = if timed_out {
            SolverStatus::Timeout
        } else if routes.is_empty() {
            SolverStatus::Infeasible
        } else if unserved_stops.is_empty() {
            SolverStatus::Optimal
        } else {
            SolverStatus::Feasible
        };
        debug!(
            "solve finished: status {status:?}, {} routes, {} unserved stops",
            routes.len(),
            unserved_stops.len()
        );

        let totals = solution_totals(&routes);
        let compliance_score = compliance_score(request, &routes);
        Ok(OptimizedSolution {
            routes,
            unserved_stops,
            totals,
            status,
            compliance_score,
        })
    }
}

fn route_violations(
    request: &OptimizationRequest,
    economics: &RouteEconomics,
) -> Vec<ConstraintViolation> {
    let constraints = &request.constraints;
    let context = &request.context;
    let mut violations = Vec::new();
    if constraints.avoid_prayer_window && context.is_prayer_window {
        violations.push(ConstraintViolation::PrayerWindowOperation);
    }
    if constraints.avoid_market_day_congestion && context.is_market_day {
        violations.push(ConstraintViolation::MarketDayOperation);
    }
    if context.is_peak_hour() {
        violations.push(ConstraintViolation::PeakHourOperation);
    }
    if let Some(limit) = constraints.fuel_budget_limit {
        if economics.fuel_cost > limit {
            violations.push(ConstraintViolation::FuelBudgetExceeded {
                spent: economics.fuel_cost,
                limit,
            });
        }
    }
    if let Some(limit) = constraints.driver_wage_budget {
        if economics.wage_cost > limit {
            violations.push(ConstraintViolation::WageBudgetExceeded {
                spent: economics.wage_cost,
                limit,
            });
        }
    }
    if let Some(minimum) = constraints.min_profit_margin {
        let below = match economics.profit_margin {
            Ratio::Defined(margin) => margin < minimum,
            Ratio::Undefined => true,
        };
        if below {
            violations.push(ConstraintViolation::ProfitBelowMinimum {
                margin: economics.profit_margin,
                minimum,
            });
        }
    }
    violations
}

fn solution_totals(routes: &[VehicleRoute]) -> SolutionTotals {
    let mut totals = SolutionTotals::default();
    for route in routes {
        totals.distance_km += route.distance_km;
        totals.duration += route.duration;
        totals.co2_kg += route.emissions.co2_kg;
        totals.cost += route.economics.total_cost();
    }
    totals
}

/// Diagnostic 0–100 score of how well the plan honours cultural and
/// temporal avoidance preferences. Deductions apply once per solution.
fn compliance_score(request: &OptimizationRequest, routes: &[VehicleRoute]) -> u8 {
    let mut score: i32 = 100;
    if !routes.is_empty() {
        let constraints = &request.constraints;
        let context = &request.context;
        if constraints.avoid_prayer_window && context.is_prayer_window {
            score -= 20;
        }
        if constraints.avoid_market_day_congestion && context.is_market_day {
            score -= 15;
        }
        if context.is_peak_hour() {
            score -= 10;
        }
    }
    u8::try_from(score.clamp(0, 100)).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use trotro_core::test_support::{
        friday_prayer_context, midweek_context, sample_stops, sample_vehicle,
    };
    use trotro_core::OptimizationObjectives;

    #[fixture]
    fn request() -> OptimizationRequest {
        OptimizationRequest::new(
            sample_stops(),
            vec![sample_vehicle("TT-1", 400)],
            OptimizationObjectives::balanced(),
            midweek_context(),
        )
    }

    #[rstest]
    fn serves_all_stops_with_ample_capacity(request: OptimizationRequest) {
        let solution = GreedySolver::new().optimize(&request).unwrap();
        assert_eq!(solution.status, SolverStatus::Optimal);
        assert!(solution.unserved_stops.is_empty());
        assert_eq!(solution.served_stop_count(), request.stops.len() - 1);
    }

    #[rstest]
    fn routes_start_and_end_at_depot(request: OptimizationRequest) {
        let solution = GreedySolver::new().optimize(&request).unwrap();
        for route in &solution.routes {
            assert_eq!(route.stops.first(), Some(&request.depot));
            assert_eq!(route.stops.last(), Some(&request.depot));
        }
    }

    #[rstest]
    fn depot_demand_is_not_boarded(request: OptimizationRequest) {
        let solution = GreedySolver::new().optimize(&request).unwrap();
        let expected: f64 = request
            .stops
            .iter()
            .enumerate()
            .filter(|&(index, _)| index != request.depot)
            .map(|(_, stop)| stop.passenger_demand)
            .sum();
        let boarded: f64 = solution.routes.iter().map(|route| route.passengers).sum();
        assert!((boarded - expected).abs() < 1e-9);
    }

    #[rstest]
    fn compliance_deducts_for_prayer_window(mut request: OptimizationRequest) {
        request.context = friday_prayer_context();
        request.constraints.avoid_prayer_window = true;
        let solution = GreedySolver::new().optimize(&request).unwrap();
        assert_eq!(solution.compliance_score, 80);
        assert!(solution
            .routes
            .iter()
            .all(|route| route.violations.contains(&ConstraintViolation::PrayerWindowOperation)));
    }

    #[rstest]
    fn compliance_is_full_without_violations(request: OptimizationRequest) {
        let solution = GreedySolver::new().optimize(&request).unwrap();
        assert_eq!(solution.compliance_score, 100);
    }

    #[rstest]
    fn fuel_budget_violation_is_surfaced(mut request: OptimizationRequest) {
        request.constraints.fuel_budget_limit = Some(0.01);
        let solution = GreedySolver::new().optimize(&request).unwrap();
        assert!(solution.routes.iter().all(|route| {
            route
                .violations
                .iter()
                .any(|violation| matches!(violation, ConstraintViolation::FuelBudgetExceeded { .. }))
        }));
    }

    #[rstest]
    fn zero_budget_times_out_with_empty_plan(mut request: OptimizationRequest) {
        request.time_budget = Duration::ZERO;
        let solution = GreedySolver::new().optimize(&request).unwrap();
        assert_eq!(solution.status, SolverStatus::Timeout);
        assert!(solution.routes.is_empty());
    }

    #[rstest]
    fn undersized_fleet_is_infeasible(mut request: OptimizationRequest) {
        // Every stop demands more than the single seat available.
        request.vehicles = vec![sample_vehicle("TT-1", 1)];
        let solution = GreedySolver::new().optimize(&request).unwrap();
        assert_eq!(solution.status, SolverStatus::Infeasible);
        assert!(solution.routes.is_empty());
        assert_eq!(solution.unserved_stops.len(), request.stops.len() - 1);
    }

    #[rstest]
    fn time_window_excludes_late_arrivals(mut request: OptimizationRequest) {
        // A window no arrival can meet keeps the stop unserved.
        let excluded = request.stops.get(2).map(|stop| stop.id).unwrap();
        request.time_windows.insert(
            excluded,
            trotro_core::TimeWindow {
                earliest_minute: 0.0,
                latest_minute: 0.0,
            },
        );
        let solution = GreedySolver::new().optimize(&request).unwrap();
        assert_eq!(solution.status, SolverStatus::Feasible);
        assert_eq!(solution.unserved_stops, vec![2]);
    }
}
