//! Descriptive analysis of an existing static transit network.
//!
//! The analyzer is the read-only counterpart to the solver: it never
//! mutates the network and shares no state with optimization. Callers
//! supply the baseline routes and the named areas of the service
//! region; the analyzer reports per-route performance metrics and the
//! areas left outside walking reach of any stop, for comparison against
//! optimized alternatives.

#![forbid(unsafe_code)]

mod gaps;
mod metrics;
mod network;

pub use gaps::{find_service_gaps, GapSeverity, ServiceGap};
pub use metrics::{route_performance, RoutePerformance};
pub use network::{AnalyzerConfig, NamedArea, NetworkRoute};

use log::debug;

/// The combined output of one network analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkAnalysis {
    /// Per-route performance metrics, in input route order.
    pub performance: Vec<RoutePerformance>,
    /// Service gaps ranked by population at risk.
    pub gaps: Vec<ServiceGap>,
}

/// Analyze a static network: per-route metrics plus service gaps.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use trotro_analyzer::{analyze_network, AnalyzerConfig, NamedArea, NetworkRoute};
/// use trotro_core::Stop;
///
/// let route = NetworkRoute {
///     id: "L1".into(),
///     name: "Circle - Makola".into(),
///     stops: vec![
///         Stop::with_demand(1, Coord { x: -0.2050, y: 5.5715 }, 80.0),
///         Stop::with_demand(2, Coord { x: -0.2080, y: 5.5460 }, 120.0),
///     ],
///     frequency_per_hour: 6.0,
/// };
/// let areas = vec![NamedArea {
///     name: "Teshie".into(),
///     location: Coord { x: -0.1070, y: 5.5830 },
///     population: 85_000,
/// }];
/// let analysis = analyze_network(&[route], &areas, &AnalyzerConfig::default());
/// assert_eq!(analysis.performance.len(), 1);
/// assert_eq!(analysis.gaps.len(), 1);
/// ```
#[must_use]
pub fn analyze_network(
    routes: &[NetworkRoute],
    areas: &[NamedArea],
    config: &AnalyzerConfig,
) -> NetworkAnalysis {
    debug!(
        "analyzing network: {} routes, {} named areas",
        routes.len(),
        areas.len()
    );
    let performance = routes
        .iter()
        .map(|route| route_performance(route, routes, config))
        .collect();
    let gaps = find_service_gaps(routes, areas, config);
    NetworkAnalysis { performance, gaps }
}
