//! Pairwise distance and travel-time matrices between stops.
//!
//! Distances use the haversine great-circle formula via `geo`; travel
//! times divide distance by an assumed network speed. Both matrices are
//! symmetric by construction with a zero diagonal, and the builder is a
//! pure function, so one matrix is safely shared across every
//! objective-weight scenario of a request.

use geo::{Distance, Haversine, Point};
use log::debug;
use thiserror::Error;

use crate::Stop;

const METRES_PER_KM: f64 = 1000.0;
const MINUTES_PER_HOUR: f64 = 60.0;

/// Errors returned by [`TravelMatrix::build`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    /// No stops were provided.
    #[error("at least one stop is required to build a travel matrix")]
    EmptyInput,
    /// A stop carried coordinates outside the valid WGS84 ranges.
    #[error(
        "stop {stop_id} has malformed coordinates: latitude {latitude}, longitude {longitude}"
    )]
    InvalidCoordinate {
        /// Identifier of the offending stop.
        stop_id: u64,
        /// The rejected latitude.
        latitude: f64,
        /// The rejected longitude.
        longitude: f64,
    },
    /// The assumed network speed was zero, negative, or non-finite.
    #[error("assumed speed must be positive, got {speed_kmh} km/h")]
    NonPositiveSpeed {
        /// The rejected speed.
        speed_kmh: f64,
    },
}

/// Square matrices of pairwise distances (km) and travel times
/// (minutes) over an ordered stop list.
///
/// Rows and columns follow the input stop order. Accessors return
/// `None` for out-of-range indices rather than panicking.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use trotro_core::{Stop, TravelMatrix};
///
/// # fn main() -> Result<(), trotro_core::MatrixError> {
/// let stops = vec![
///     Stop::with_demand(1, Coord { x: -0.1870, y: 5.6037 }, 50.0),
///     Stop::with_demand(2, Coord { x: -0.1670, y: 5.6137 }, 30.0),
/// ];
/// let matrix = TravelMatrix::build(&stops, 25.0)?;
/// assert_eq!(matrix.len(), 2);
/// assert_eq!(matrix.distance_km(0, 0), Some(0.0));
/// assert_eq!(matrix.distance_km(0, 1), matrix.distance_km(1, 0));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TravelMatrix {
    len: usize,
    distances_km: Vec<f64>,
    minutes: Vec<f64>,
}

impl TravelMatrix {
    /// Build distance and time matrices for `stops` at an assumed
    /// network speed.
    ///
    /// Symmetry holds by construction: each pair is computed once and
    /// mirrored. The diagonal is zero.
    ///
    /// # Errors
    /// Returns [`MatrixError`] when `stops` is empty, the speed is not
    /// positive, or any stop has a latitude outside `[-90, 90]` or a
    /// longitude outside `[-180, 180]`.
    pub fn build(stops: &[Stop], speed_kmh: f64) -> Result<Self, MatrixError> {
        if stops.is_empty() {
            return Err(MatrixError::EmptyInput);
        }
        if !speed_kmh.is_finite() || speed_kmh <= 0.0 {
            return Err(MatrixError::NonPositiveSpeed { speed_kmh });
        }
        for stop in stops {
            validate_coordinates(stop)?;
        }
        debug!(
            "building travel matrix: {} stops at {speed_kmh} km/h",
            stops.len()
        );

        let n = stops.len();
        let mut distances_km = vec![0.0; n * n];
        let mut minutes = vec![0.0; n * n];
        for (i, origin) in stops.iter().enumerate() {
            for (j, destination) in stops.iter().enumerate().skip(i + 1) {
                let km = Haversine.distance(
                    Point::from(origin.location),
                    Point::from(destination.location),
                ) / METRES_PER_KM;
                let mins = km / speed_kmh * MINUTES_PER_HOUR;
                for index in [i * n + j, j * n + i] {
                    if let Some(cell) = distances_km.get_mut(index) {
                        *cell = km;
                    }
                    if let Some(cell) = minutes.get_mut(index) {
                        *cell = mins;
                    }
                }
            }
        }
        Ok(Self {
            len: n,
            distances_km,
            minutes,
        })
    }

    /// Number of stops covered by the matrix.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the matrix covers no stops.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Great-circle distance in kilometres from stop `i` to stop `j`.
    #[must_use]
    pub fn distance_km(&self, i: usize, j: usize) -> Option<f64> {
        self.cell(i, j).and_then(|index| self.distances_km.get(index)).copied()
    }

    /// Uncongested travel time in minutes from stop `i` to stop `j`.
    #[must_use]
    pub fn minutes(&self, i: usize, j: usize) -> Option<f64> {
        self.cell(i, j).and_then(|index| self.minutes.get(index)).copied()
    }

    const fn cell(&self, i: usize, j: usize) -> Option<usize> {
        if i < self.len && j < self.len {
            Some(i * self.len + j)
        } else {
            None
        }
    }
}

fn validate_coordinates(stop: &Stop) -> Result<(), MatrixError> {
    let latitude = stop.location.y;
    let longitude = stop.location.x;
    let latitude_valid = latitude.is_finite() && (-90.0..=90.0).contains(&latitude);
    let longitude_valid = longitude.is_finite() && (-180.0..=180.0).contains(&longitude);
    if latitude_valid && longitude_valid {
        Ok(())
    } else {
        Err(MatrixError::InvalidCoordinate {
            stop_id: stop.id,
            latitude,
            longitude,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;
    use rstest::{fixture, rstest};

    #[fixture]
    fn accra_stops() -> Vec<Stop> {
        vec![
            Stop::with_demand(1, Coord { x: -0.1870, y: 5.6037 }, 50.0),
            Stop::with_demand(2, Coord { x: -0.1670, y: 5.6137 }, 30.0),
            Stop::with_demand(3, Coord { x: -0.2100, y: 5.5800 }, 20.0),
        ]
    }

    #[rstest]
    fn diagonal_is_zero(accra_stops: Vec<Stop>) {
        let matrix = TravelMatrix::build(&accra_stops, 25.0).unwrap();
        for i in 0..matrix.len() {
            assert_eq!(matrix.distance_km(i, i), Some(0.0));
            assert_eq!(matrix.minutes(i, i), Some(0.0));
        }
    }

    #[rstest]
    fn matrix_is_symmetric(accra_stops: Vec<Stop>) {
        let matrix = TravelMatrix::build(&accra_stops, 25.0).unwrap();
        for i in 0..matrix.len() {
            for j in 0..matrix.len() {
                assert_eq!(matrix.distance_km(i, j), matrix.distance_km(j, i));
                assert_eq!(matrix.minutes(i, j), matrix.minutes(j, i));
            }
        }
    }

    #[rstest]
    fn distances_are_plausible(accra_stops: Vec<Stop>) {
        // Roughly 2.5 km between the first two central Accra points.
        let matrix = TravelMatrix::build(&accra_stops, 25.0).unwrap();
        let km = matrix.distance_km(0, 1).unwrap();
        assert!(km > 1.0 && km < 5.0, "unexpected distance {km}");
    }

    #[rstest]
    fn time_scales_with_speed(accra_stops: Vec<Stop>) {
        let slow = TravelMatrix::build(&accra_stops, 12.5).unwrap();
        let fast = TravelMatrix::build(&accra_stops, 25.0).unwrap();
        let slow_minutes = slow.minutes(0, 1).unwrap();
        let fast_minutes = fast.minutes(0, 1).unwrap();
        assert!((slow_minutes - 2.0 * fast_minutes).abs() < 1e-9);
    }

    #[rstest]
    fn rejects_empty_input() {
        assert_eq!(TravelMatrix::build(&[], 25.0), Err(MatrixError::EmptyInput));
    }

    #[rstest]
    #[case(0.0)]
    #[case(-10.0)]
    fn rejects_non_positive_speed(accra_stops: Vec<Stop>, #[case] speed: f64) {
        let result = TravelMatrix::build(&accra_stops, speed);
        assert!(matches!(result, Err(MatrixError::NonPositiveSpeed { .. })));
    }

    #[rstest]
    #[case(91.0, 0.0)]
    #[case(-95.0, 0.0)]
    #[case(5.6, 181.0)]
    #[case(5.6, -200.0)]
    fn rejects_malformed_coordinates(#[case] latitude: f64, #[case] longitude: f64) {
        let stops = vec![Stop::with_demand(7, Coord { x: longitude, y: latitude }, 1.0)];
        let result = TravelMatrix::build(&stops, 25.0);
        assert!(matches!(
            result,
            Err(MatrixError::InvalidCoordinate { stop_id: 7, .. })
        ));
    }

    #[rstest]
    fn out_of_range_indices_return_none(accra_stops: Vec<Stop>) {
        let matrix = TravelMatrix::build(&accra_stops, 25.0).unwrap();
        assert_eq!(matrix.distance_km(0, 3), None);
        assert_eq!(matrix.minutes(9, 0), None);
    }
}
