//! Static network records and analyzer configuration.

use geo::Coord;
use trotro_core::Stop;

/// One existing route of the static network.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkRoute {
    /// Route identifier.
    pub id: String,
    /// Human-readable route name.
    pub name: String,
    /// Ordered stops the route serves.
    pub stops: Vec<Stop>,
    /// Scheduled departures per hour.
    pub frequency_per_hour: f64,
}

/// A named settlement or district checked for stop coverage.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedArea {
    /// Area name as used in planning documents.
    pub name: String,
    /// Representative centre point (`x = longitude`, `y = latitude`).
    pub location: Coord<f64>,
    /// Resident population.
    pub population: u64,
}

/// Thresholds and radii for the analyzer.
///
/// Distances are kilometres. The severity buckets follow the planning
/// convention that anything beyond comfortable walking distance is a
/// gap, escalating with distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyzerConfig {
    /// Walking-reach radius a stop is assumed to serve.
    pub service_radius_km: f64,
    /// Nearest-stop distance beyond which an area is a gap.
    pub gap_threshold_km: f64,
    /// Distance beyond which a gap is medium severity.
    pub medium_gap_km: f64,
    /// Distance beyond which a gap is high severity.
    pub high_gap_km: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            service_radius_km: 0.5,
            gap_threshold_km: 1.0,
            medium_gap_km: 1.5,
            high_gap_km: 2.0,
        }
    }
}
