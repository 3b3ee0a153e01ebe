//! Temporal and cultural context for congestion modelling.
//!
//! A [`CongestionContext`] is a deterministic snapshot of the conditions
//! at one evaluation instant: hour, weekday, and the cultural flags that
//! drive Ghanaian traffic patterns (market days, the Friday prayer
//! window, the rainy season). It is derived once per request from a
//! timestamp plus a [`CulturalCalendar`] and never mutated afterwards.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

/// Calendar conventions the context derivation consults.
///
/// Defaults follow Accra practice but every field is configuration: a
/// deployment in another region swaps the calendar, not the code.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CulturalCalendar {
    /// Weekdays on which the major markets operate.
    pub market_days: Vec<Weekday>,
    /// Months (1–12) falling in the rainy season.
    pub rainy_months: Vec<u32>,
    /// Weekday of the congregational prayer.
    pub prayer_day: Weekday,
    /// First hour (inclusive) of the prayer window.
    pub prayer_start_hour: u32,
    /// Last hour (exclusive) of the prayer window.
    pub prayer_end_hour: u32,
}

impl Default for CulturalCalendar {
    /// Accra conventions: Wednesday and Saturday markets, April–July and
    /// September–October rains, Friday prayers from 12:00 to 14:00.
    fn default() -> Self {
        Self {
            market_days: vec![Weekday::Wed, Weekday::Sat],
            rainy_months: vec![4, 5, 6, 7, 9, 10],
            prayer_day: Weekday::Fri,
            prayer_start_hour: 12,
            prayer_end_hour: 14,
        }
    }
}

/// A snapshot of temporal and cultural conditions at evaluation time.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use trotro_core::{CongestionContext, CulturalCalendar};
///
/// let friday_noon = NaiveDate::from_ymd_opt(2024, 6, 7)
///     .and_then(|d| d.and_hms_opt(12, 30, 0))
///     .unwrap();
/// let context = CongestionContext::from_datetime(friday_noon, &CulturalCalendar::default());
/// assert!(context.is_prayer_window);
/// assert!(context.is_rainy_season);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CongestionContext {
    /// Hour of day, 0–23.
    pub hour_of_day: u32,
    /// Day of the week.
    pub day_of_week: Weekday,
    /// Whether the major markets operate on this day.
    pub is_market_day: bool,
    /// Whether the instant falls in the congregational prayer window.
    pub is_prayer_window: bool,
    /// Whether the month falls in the rainy season.
    pub is_rainy_season: bool,
}

impl CongestionContext {
    /// Derive a context from a timestamp and a cultural calendar.
    ///
    /// The derivation is a pure function: identical inputs always yield
    /// an identical context, which underpins the solver's determinism
    /// guarantee.
    #[must_use]
    pub fn from_datetime(datetime: NaiveDateTime, calendar: &CulturalCalendar) -> Self {
        let hour = datetime.hour();
        let weekday = datetime.weekday();
        let is_prayer_window = weekday == calendar.prayer_day
            && (calendar.prayer_start_hour..calendar.prayer_end_hour).contains(&hour);
        Self {
            hour_of_day: hour,
            day_of_week: weekday,
            is_market_day: calendar.market_days.contains(&weekday),
            is_prayer_window,
            is_rainy_season: calendar.rainy_months.contains(&datetime.month()),
        }
    }

    /// Whether the hour falls in a commuter peak (07:00–09:00 or
    /// 17:00–19:00).
    #[must_use]
    pub fn is_peak_hour(&self) -> bool {
        (7..9).contains(&self.hour_of_day) || (17..19).contains(&self.hour_of_day)
    }

    /// Whether the hour falls in the low-traffic night band
    /// (22:00–05:00).
    #[must_use]
    pub const fn is_night(&self) -> bool {
        self.hour_of_day >= 22 || self.hour_of_day < 5
    }
}
