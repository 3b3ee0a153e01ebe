//! Shared fixtures for tests across the workspace.
//!
//! Available to dependants through the `test-support` feature, matching
//! the locations and demand levels of central Accra so distances and
//! congestion behave like the real network at small scale.

use std::time::Duration;

use chrono::NaiveDate;
use geo::Coord;

use crate::{
    CongestionContext, CostRates, CulturalCalendar, EmissionFactors, FuelType, Stop,
    VehicleProfile,
};

/// A small cluster of central Accra stops with varied demand.
///
/// Index 0 (Circle interchange) doubles as the depot in most tests.
#[must_use]
pub fn sample_stops() -> Vec<Stop> {
    vec![
        // Kwame Nkrumah Circle interchange.
        Stop::with_demand(1, Coord { x: -0.2050, y: 5.5715 }, 80.0),
        // Makola Market.
        Stop::with_demand(2, Coord { x: -0.2080, y: 5.5460 }, 120.0),
        // Osu Oxford Street.
        Stop::with_demand(3, Coord { x: -0.1790, y: 5.5570 }, 60.0),
        // 37 Military Hospital station.
        Stop::with_demand(4, Coord { x: -0.1820, y: 5.5850 }, 45.0),
        // Achimota interchange.
        Stop::with_demand(5, Coord { x: -0.2300, y: 5.6150 }, 70.0),
    ]
}

/// A diesel trotro profile with the given id and capacity.
///
/// # Panics
/// Never panics: the fixed parameters satisfy every profile invariant
/// for any positive capacity, and zero capacity is a test bug.
#[must_use]
pub fn sample_vehicle(id: &str, capacity: u32) -> VehicleProfile {
    VehicleProfile::new(
        id,
        capacity,
        9.0,
        EmissionFactors::diesel(),
        CostRates {
            fuel_price: 13.5,
            daily_wage: 80.0,
            maintenance_per_km: 0.4,
        },
        180.0,
        Duration::from_secs(8 * 3600),
        FuelType::Diesel,
    )
    .expect("sample vehicle parameters are valid")
}

/// A quiet Tuesday mid-morning context: no peak, market, prayer, or
/// rain effects.
///
/// # Panics
/// Never panics: the fixed calendar date is valid.
#[must_use]
pub fn midweek_context() -> CongestionContext {
    let datetime = NaiveDate::from_ymd_opt(2024, 2, 6)
        .and_then(|d| d.and_hms_opt(10, 0, 0))
        .expect("fixture datetime is valid");
    CongestionContext::from_datetime(datetime, &CulturalCalendar::default())
}

/// A Friday 12:30 context inside the prayer window, outside the rainy
/// season.
///
/// # Panics
/// Never panics: the fixed calendar date is valid.
#[must_use]
pub fn friday_prayer_context() -> CongestionContext {
    let datetime = NaiveDate::from_ymd_opt(2024, 2, 9)
        .and_then(|d| d.and_hms_opt(12, 30, 0))
        .expect("fixture datetime is valid");
    CongestionContext::from_datetime(datetime, &CulturalCalendar::default())
}
