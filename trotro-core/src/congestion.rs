//! Time-dependent congestion multipliers.
//!
//! The model turns a [`CongestionContext`] into three multipliers: one
//! for travel time and two derived, sub-linear multipliers for fuel
//! consumption and emissions. Stop-and-go traffic burns more fuel and
//! emits more per kilometre, but not proportionally to the total delay,
//! so the fuel and emission multipliers are powers of the time
//! multiplier with exponents below one.
//!
//! Every constant in the rule table is a struct field with a documented
//! default. None of them are validated physical constants; they are
//! policy values awaiting calibration against real corridor data.

use crate::CongestionContext;

/// Road corridor classification selecting the peak-hour multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CorridorClass {
    /// Major radial roads; worst peak congestion.
    Arterial,
    /// Connecting roads with moderate peak congestion.
    #[default]
    Collector,
    /// Neighbourhood streets with mild peak congestion.
    Local,
}

/// Multipliers applied to base travel time, fuel consumption, and
/// emissions for one evaluation context.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CongestionFactors {
    /// Travel-time multiplier, clamped to the model's bounds.
    pub time: f64,
    /// Fuel-consumption multiplier, `time` raised to the fuel exponent.
    pub fuel: f64,
    /// Emission multiplier, `time` raised to the emission exponent.
    pub emissions: f64,
}

impl CongestionFactors {
    /// Free-flow factors: no adjustment on any axis.
    #[must_use]
    pub const fn free_flow() -> Self {
        Self {
            time: 1.0,
            fuel: 1.0,
            emissions: 1.0,
        }
    }
}

/// The congestion rule table with calibratable constants.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use trotro_core::{CongestionContext, CongestionModel, CorridorClass, CulturalCalendar};
///
/// let peak = NaiveDate::from_ymd_opt(2024, 6, 4)
///     .and_then(|d| d.and_hms_opt(8, 0, 0))
///     .unwrap();
/// let context = CongestionContext::from_datetime(peak, &CulturalCalendar::default());
/// let factors = CongestionModel::default().factors(&context, CorridorClass::Collector);
/// assert!(factors.time > 1.0);
/// assert!(factors.fuel < factors.time);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CongestionModel {
    /// Peak multiplier on arterial corridors.
    pub peak_arterial: f64,
    /// Peak multiplier on collector corridors.
    pub peak_collector: f64,
    /// Peak multiplier on local corridors.
    pub peak_local: f64,
    /// Additional multiplier on market days.
    pub market_day: f64,
    /// Additional multiplier during the prayer window.
    pub prayer_window: f64,
    /// Night-time multiplier (faster, less traffic).
    pub night: f64,
    /// Additional multiplier during the rainy season.
    pub rainy_season: f64,
    /// Exponent mapping the time multiplier to fuel consumption.
    pub fuel_exponent: f64,
    /// Exponent mapping the time multiplier to emissions.
    pub emission_exponent: f64,
    /// Lower clamp for the time multiplier.
    pub min_time_multiplier: f64,
    /// Upper clamp for the time multiplier.
    pub max_time_multiplier: f64,
}

impl Default for CongestionModel {
    fn default() -> Self {
        Self {
            peak_arterial: 2.8,
            peak_collector: 2.2,
            peak_local: 1.8,
            market_day: 1.3,
            prayer_window: 1.2,
            night: 0.7,
            rainy_season: 1.15,
            fuel_exponent: 0.9,
            emission_exponent: 0.8,
            min_time_multiplier: 0.5,
            max_time_multiplier: 3.0,
        }
    }
}

impl CongestionModel {
    /// Peak multiplier for a corridor class.
    #[must_use]
    pub const fn peak_multiplier(&self, corridor: CorridorClass) -> f64 {
        match corridor {
            CorridorClass::Arterial => self.peak_arterial,
            CorridorClass::Collector => self.peak_collector,
            CorridorClass::Local => self.peak_local,
        }
    }

    /// Compute the multipliers for one context and corridor class.
    ///
    /// Rules stack multiplicatively; the combined time multiplier is
    /// clamped to `[min_time_multiplier, max_time_multiplier]` before
    /// the fuel and emission powers are taken.
    #[must_use]
    pub fn factors(&self, context: &CongestionContext, corridor: CorridorClass) -> CongestionFactors {
        let mut time = 1.0;
        if context.is_peak_hour() {
            time *= self.peak_multiplier(corridor);
        }
        if context.is_night() {
            time *= self.night;
        }
        if context.is_market_day {
            time *= self.market_day;
        }
        if context.is_prayer_window {
            time *= self.prayer_window;
        }
        if context.is_rainy_season {
            time *= self.rainy_season;
        }
        let time = time.clamp(self.min_time_multiplier, self.max_time_multiplier);
        CongestionFactors {
            time,
            fuel: time.powf(self.fuel_exponent),
            emissions: time.powf(self.emission_exponent),
        }
    }
}
