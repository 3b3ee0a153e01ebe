//! Per-route performance metrics over the static network.

use std::collections::HashSet;
use std::f64::consts::PI;

use geo::{Distance, Haversine, Point};

use crate::{AnalyzerConfig, NetworkRoute};

const METRES_PER_KM: f64 = 1000.0;

/// Descriptive metrics for one route of the static network.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePerformance {
    /// Identifier of the analyzed route.
    pub route_id: String,
    /// Passenger-kilometres served per vehicle-kilometre per stop.
    pub efficiency: f64,
    /// Walking-reach disc area per stop at the service radius, km2.
    pub coverage_km2: f64,
    /// Cross-route connections at shared stops, normalised per stop.
    pub accessibility: f64,
}

/// Compute performance metrics for `route` within its network.
///
/// Efficiency weights each leg's length by the boarding demand at its
/// origin stop, so a route that places demand near its start scores
/// higher than one that buries it at the end. Coverage counts each stop
/// as an independent walking-reach disc; overlap between close stops is
/// not subtracted. Accessibility counts stops shared with other routes
/// of the network.
#[must_use]
pub fn route_performance(
    route: &NetworkRoute,
    network: &[NetworkRoute],
    config: &AnalyzerConfig,
) -> RoutePerformance {
    let stop_count = route.stops.len();
    let route_km = route_length_km(route);
    let passenger_km = passenger_km(route);

    let efficiency = if route_km > 0.0 && stop_count > 0 {
        #[expect(clippy::cast_precision_loss, reason = "stop counts are far below 2^52")]
        let per_stop = route_km * stop_count as f64;
        passenger_km / per_stop
    } else {
        0.0
    };

    #[expect(clippy::cast_precision_loss, reason = "stop counts are far below 2^52")]
    let coverage_km2 =
        stop_count as f64 * PI * config.service_radius_km * config.service_radius_km;

    RoutePerformance {
        route_id: route.id.clone(),
        efficiency,
        coverage_km2,
        accessibility: accessibility(route, network),
    }
}

fn route_length_km(route: &NetworkRoute) -> f64 {
    route
        .stops
        .windows(2)
        .filter_map(|pair| match pair {
            [from, to] => Some(
                Haversine.distance(Point::from(from.location), Point::from(to.location))
                    / METRES_PER_KM,
            ),
            _ => None,
        })
        .sum()
}

fn passenger_km(route: &NetworkRoute) -> f64 {
    route
        .stops
        .windows(2)
        .filter_map(|pair| match pair {
            [from, to] => {
                let leg_km = Haversine
                    .distance(Point::from(from.location), Point::from(to.location))
                    / METRES_PER_KM;
                Some(from.passenger_demand * leg_km)
            }
            _ => None,
        })
        .sum()
}

fn accessibility(route: &NetworkRoute, network: &[NetworkRoute]) -> f64 {
    if route.stops.is_empty() {
        return 0.0;
    }
    let own_stops: HashSet<u64> = route.stops.iter().map(|stop| stop.id).collect();
    let connections: usize = network
        .iter()
        .filter(|other| other.id != route.id)
        .map(|other| {
            other
                .stops
                .iter()
                .filter(|stop| own_stops.contains(&stop.id))
                .count()
        })
        .sum();
    #[expect(clippy::cast_precision_loss, reason = "stop counts are far below 2^52")]
    let normalised = connections as f64 / route.stops.len() as f64;
    normalised
}
