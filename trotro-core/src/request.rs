//! Optimization requests: the complete immutable input snapshot.

use std::collections::HashMap;
use std::time::Duration;

use geo::{Coord, Rect};

use crate::{
    CongestionContext, CorridorClass, OptimizationError, OptimizationObjectives, Stop,
    VehicleProfile,
};

/// Default per-request computation budget.
pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_secs(30);

/// Soft scheduling preferences and economic guard-rails.
///
/// The avoidance flags are deterrents, not hard constraints: a plan may
/// still operate in an avoided window when no feasible alternative
/// exists, and the violation is surfaced on the route and reflected in
/// the compliance score.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteConstraints {
    /// Penalise operating during the congregational prayer window.
    pub avoid_prayer_window: bool,
    /// Penalise operating during market-day congestion.
    pub avoid_market_day_congestion: bool,
    /// Per-route fuel spend ceiling, if any.
    pub fuel_budget_limit: Option<f64>,
    /// Per-route driver wage ceiling, if any.
    pub driver_wage_budget: Option<f64>,
    /// Minimum acceptable per-route profit margin, if any.
    pub min_profit_margin: Option<f64>,
}

impl RouteConstraints {
    fn validate(&self) -> Result<(), OptimizationError> {
        let named = [
            ("fuel_budget_limit", self.fuel_budget_limit),
            ("driver_wage_budget", self.driver_wage_budget),
            ("min_profit_margin", self.min_profit_margin),
        ];
        for (name, value) in named {
            if let Some(value) = value {
                if !value.is_finite() || value < 0.0 {
                    return Err(OptimizationError::NegativeConstraint { name, value });
                }
            }
        }
        Ok(())
    }
}

/// A service window for one stop, in minutes from route departure.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeWindow {
    /// Earliest acceptable arrival, minutes from departure.
    pub earliest_minute: f64,
    /// Latest acceptable arrival, minutes from departure.
    pub latest_minute: f64,
}

impl TimeWindow {
    /// Whether an arrival at `minute` falls inside the window.
    #[must_use]
    pub fn admits(&self, minute: f64) -> bool {
        (self.earliest_minute..=self.latest_minute).contains(&minute)
    }
}

/// The complete input snapshot for one optimization run.
///
/// A request owns its stops and vehicles; the solver is a stateless
/// function of this value and nothing else. Stops are referenced by
/// index throughout solving.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use chrono::NaiveDate;
/// use geo::Coord;
/// use trotro_core::{
///     CongestionContext, CostRates, CulturalCalendar, EmissionFactors, FuelType,
///     OptimizationObjectives, OptimizationRequest, Stop, VehicleProfile,
/// };
///
/// # fn main() -> Result<(), trotro_core::VehicleProfileError> {
/// let stops = vec![
///     Stop::with_demand(1, Coord { x: -0.1870, y: 5.6037 }, 50.0),
///     Stop::with_demand(2, Coord { x: -0.1670, y: 5.6137 }, 30.0),
/// ];
/// let vehicle = VehicleProfile::new(
///     "TT-1",
///     14,
///     9.0,
///     EmissionFactors::diesel(),
///     CostRates { fuel_price: 13.5, daily_wage: 80.0, maintenance_per_km: 0.4 },
///     180.0,
///     Duration::from_secs(8 * 3600),
///     FuelType::Diesel,
/// )?;
/// let datetime = NaiveDate::from_ymd_opt(2024, 6, 4)
///     .and_then(|d| d.and_hms_opt(10, 0, 0))
///     .unwrap();
/// let context = CongestionContext::from_datetime(datetime, &CulturalCalendar::default());
/// let request = OptimizationRequest::new(
///     stops,
///     vec![vehicle],
///     OptimizationObjectives::balanced(),
///     context,
/// );
/// assert!(request.validate().is_ok());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizationRequest {
    /// Stops to serve; routes reference these by index.
    pub stops: Vec<Stop>,
    /// The vehicle roster, used in input order.
    pub vehicles: Vec<VehicleProfile>,
    /// Objective weight vector.
    pub objectives: OptimizationObjectives,
    /// Soft scheduling and economic constraints.
    pub constraints: RouteConstraints,
    /// Temporal and cultural context for the evaluation instant.
    pub context: CongestionContext,
    /// Corridor class selecting the peak congestion band.
    pub corridor: CorridorClass,
    /// Index of the depot stop where every route starts and ends.
    pub depot: usize,
    /// Flat fare collected per passenger.
    pub fare_per_passenger: f64,
    /// Optional service windows keyed by stop id.
    pub time_windows: HashMap<u64, TimeWindow>,
    /// Optional demand overrides keyed by stop id, replacing the stop's
    /// own `passenger_demand` when present.
    pub demand_overrides: HashMap<u64, f64>,
    /// Bounding box every stop must fall within.
    pub service_region: Rect<f64>,
    /// Computation budget; exceeding it yields a `Timeout` status with
    /// the best solution found so far.
    pub time_budget: Duration,
}

impl OptimizationRequest {
    /// Construct a request with defaults for the optional fields:
    /// depot 0, a 2.5-unit fare, the Ghana service region, and the
    /// default time budget.
    #[must_use]
    pub fn new(
        stops: Vec<Stop>,
        vehicles: Vec<VehicleProfile>,
        objectives: OptimizationObjectives,
        context: CongestionContext,
    ) -> Self {
        Self {
            stops,
            vehicles,
            objectives,
            constraints: RouteConstraints::default(),
            context,
            corridor: CorridorClass::default(),
            depot: 0,
            fare_per_passenger: 2.5,
            time_windows: HashMap::new(),
            demand_overrides: HashMap::new(),
            service_region: Self::ghana_region(),
            time_budget: DEFAULT_TIME_BUDGET,
        }
    }

    /// Bounding box covering Ghana with a small margin.
    #[must_use]
    pub fn ghana_region() -> Rect<f64> {
        Rect::new(Coord { x: -3.5, y: 4.5 }, Coord { x: 1.5, y: 11.5 })
    }

    /// Effective boarding demand for a stop, honouring any override.
    #[must_use]
    pub fn demand_for(&self, stop: &Stop) -> f64 {
        self.demand_overrides
            .get(&stop.id)
            .copied()
            .unwrap_or(stop.passenger_demand)
    }

    /// Validate the request boundary.
    ///
    /// Checks stop and vehicle counts, objective normalisation, the
    /// depot index, the fare, constraint signs, and that every stop
    /// falls inside the service region. Violations reject the request
    /// before any computation.
    ///
    /// # Errors
    /// Returns the first [`OptimizationError`] encountered.
    pub fn validate(&self) -> Result<(), OptimizationError> {
        if self.stops.len() < 2 {
            return Err(OptimizationError::TooFewStops(self.stops.len()));
        }
        if self.vehicles.is_empty() {
            return Err(OptimizationError::NoVehicles);
        }
        self.objectives.validate()?;
        if self.depot >= self.stops.len() {
            return Err(OptimizationError::DepotOutOfRange {
                depot: self.depot,
                stops: self.stops.len(),
            });
        }
        if !self.fare_per_passenger.is_finite() || self.fare_per_passenger < 0.0 {
            return Err(OptimizationError::InvalidFare(self.fare_per_passenger));
        }
        self.constraints.validate()?;
        for stop in &self.stops {
            if !self.region_contains(stop.location) {
                return Err(OptimizationError::OutsideServiceRegion {
                    stop_id: stop.id,
                    latitude: stop.location.y,
                    longitude: stop.location.x,
                });
            }
        }
        Ok(())
    }

    fn region_contains(&self, location: Coord<f64>) -> bool {
        let min = self.service_region.min();
        let max = self.service_region.max();
        location.x.is_finite()
            && location.y.is_finite()
            && (min.x..=max.x).contains(&location.x)
            && (min.y..=max.y).contains(&location.y)
    }
}
