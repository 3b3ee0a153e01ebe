//! Service-gap detection: areas beyond walking reach of any stop.

use geo::{Distance, Haversine, Point};

use crate::{AnalyzerConfig, NamedArea, NetworkRoute};

const METRES_PER_KM: f64 = 1000.0;

/// How badly an area is underserved, by nearest-stop distance bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum GapSeverity {
    /// Just beyond the gap threshold.
    Low,
    /// Beyond the medium-distance bucket.
    Medium,
    /// Beyond the high-distance bucket.
    High,
}

/// A named area whose nearest stop is beyond the gap threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceGap {
    /// Name of the underserved area.
    pub area: String,
    /// Distance to the nearest stop in kilometres.
    pub nearest_stop_km: f64,
    /// Resident population at risk.
    pub population: u64,
    /// Distance-bucket severity.
    pub severity: GapSeverity,
}

/// Find all service gaps, ranked by population descending.
///
/// An area with no stop in the entire network at all is reported with
/// the distance to the closest stop of any route; a network with no
/// stops gaps every area at an unbounded distance, reported as
/// `f64::INFINITY`.
#[must_use]
pub fn find_service_gaps(
    routes: &[NetworkRoute],
    areas: &[NamedArea],
    config: &AnalyzerConfig,
) -> Vec<ServiceGap> {
    let mut gaps: Vec<ServiceGap> = areas
        .iter()
        .filter_map(|area| {
            let nearest_km = nearest_stop_km(routes, area);
            if nearest_km > config.gap_threshold_km {
                Some(ServiceGap {
                    area: area.name.clone(),
                    nearest_stop_km: nearest_km,
                    population: area.population,
                    severity: severity_for(nearest_km, config),
                })
            } else {
                None
            }
        })
        .collect();
    gaps.sort_by(|a, b| {
        b.population
            .cmp(&a.population)
            .then_with(|| a.area.cmp(&b.area))
    });
    gaps
}

fn nearest_stop_km(routes: &[NetworkRoute], area: &NamedArea) -> f64 {
    routes
        .iter()
        .flat_map(|route| route.stops.iter())
        .map(|stop| {
            Haversine.distance(Point::from(area.location), Point::from(stop.location))
                / METRES_PER_KM
        })
        .fold(f64::INFINITY, f64::min)
}

fn severity_for(nearest_km: f64, config: &AnalyzerConfig) -> GapSeverity {
    if nearest_km > config.high_gap_km {
        GapSeverity::High
    } else if nearest_km > config.medium_gap_km {
        GapSeverity::Medium
    } else {
        GapSeverity::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;
    use rstest::{fixture, rstest};
    use trotro_core::Stop;

    #[fixture]
    fn network() -> Vec<NetworkRoute> {
        vec![NetworkRoute {
            id: "L1".into(),
            name: "Circle - Makola".into(),
            stops: vec![Stop::with_demand(
                1,
                Coord {
                    x: -0.2050,
                    y: 5.5715,
                },
                80.0,
            )],
            frequency_per_hour: 6.0,
        }]
    }

    fn area(name: &str, x: f64, y: f64, population: u64) -> NamedArea {
        NamedArea {
            name: name.into(),
            location: Coord { x, y },
            population,
        }
    }

    #[rstest]
    fn nearby_area_is_not_a_gap(network: Vec<NetworkRoute>) {
        // A few hundred metres from the Circle stop.
        let areas = vec![area("Adabraka", -0.2070, 5.5700, 30_000)];
        let gaps = find_service_gaps(&network, &areas, &AnalyzerConfig::default());
        assert!(gaps.is_empty());
    }

    #[rstest]
    fn severity_buckets_follow_distance(network: Vec<NetworkRoute>) {
        // Roughly 1.2 km, 1.8 km, and 8 km east of the only stop.
        let areas = vec![
            area("Near", -0.1940, 5.5715, 10_000),
            area("Mid", -0.1885, 5.5715, 10_000),
            area("Far", -0.1330, 5.5715, 10_000),
        ];
        let gaps = find_service_gaps(&network, &areas, &AnalyzerConfig::default());
        assert_eq!(gaps.len(), 3);
        let by_name = |name: &str| {
            gaps.iter()
                .find(|gap| gap.area == name)
                .map(|gap| gap.severity)
        };
        assert_eq!(by_name("Near"), Some(GapSeverity::Low));
        assert_eq!(by_name("Mid"), Some(GapSeverity::Medium));
        assert_eq!(by_name("Far"), Some(GapSeverity::High));
    }

    #[rstest]
    fn gaps_are_ranked_by_population(network: Vec<NetworkRoute>) {
        let areas = vec![
            area("Small", -0.1330, 5.5715, 5_000),
            area("Large", -0.1330, 5.6100, 90_000),
        ];
        let gaps = find_service_gaps(&network, &areas, &AnalyzerConfig::default());
        let names: Vec<_> = gaps.iter().map(|gap| gap.area.as_str()).collect();
        assert_eq!(names, vec!["Large", "Small"]);
    }

    #[rstest]
    fn empty_network_gaps_every_area_at_infinity() {
        let areas = vec![area("Anywhere", -0.2, 5.6, 1_000)];
        let gaps = find_service_gaps(&[], &areas, &AnalyzerConfig::default());
        assert_eq!(gaps.len(), 1);
        assert!(gaps.first().is_some_and(|gap| gap.nearest_stop_km.is_infinite()));
    }
}
