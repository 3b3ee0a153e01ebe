//! Solution records: per-route metrics and the aggregate result.
//!
//! All records here are derived data. They are recomputed whenever the
//! underlying route changes and are never hand-edited.

use std::ops::Add;
use std::time::Duration;

use crate::Ratio;

/// Terminal state of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverStatus {
    /// Every stop was served within constraints.
    Optimal,
    /// A valid plan exists but coverage is incomplete.
    Feasible,
    /// No vehicle could serve any stop from the start.
    Infeasible,
    /// The computation budget expired; this is the best plan found.
    Timeout,
}

/// A soft constraint the plan could not honour.
///
/// Violations are diagnostics. They never abort a solve; they degrade
/// the compliance score and let the caller judge the trade-off.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstraintViolation {
    /// The route operates during the prayer window despite the
    /// avoidance flag.
    PrayerWindowOperation,
    /// The route operates through market-day congestion despite the
    /// avoidance flag.
    MarketDayOperation,
    /// The route operates during a commuter peak.
    PeakHourOperation,
    /// Route fuel spend exceeded the budget.
    FuelBudgetExceeded {
        /// Fuel cost incurred.
        spent: f64,
        /// The configured ceiling.
        limit: f64,
    },
    /// Route wage cost exceeded the budget.
    WageBudgetExceeded {
        /// Wage cost incurred.
        spent: f64,
        /// The configured ceiling.
        limit: f64,
    },
    /// Route profit margin fell below the configured minimum, or was
    /// undefined because the route earned no revenue.
    ProfitBelowMinimum {
        /// Achieved margin, when defined.
        margin: Ratio,
        /// The configured minimum.
        minimum: f64,
    },
}

/// Full economic breakdown of one vehicle route.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteEconomics {
    /// Route distance in kilometres.
    pub distance_km: f64,
    /// Route duration after congestion.
    pub duration: Duration,
    /// Fuel cost including the congestion fuel multiplier.
    pub fuel_cost: f64,
    /// Driver wage for the route duration.
    pub wage_cost: f64,
    /// Distance-proportional maintenance cost.
    pub maintenance_cost: f64,
    /// Revenue foregone while not carrying passengers.
    pub opportunity_cost: f64,
    /// Emitted CO2 priced at the configured carbon price.
    pub carbon_cost: f64,
    /// Fare revenue collected.
    pub revenue: f64,
    /// Passengers carried over capacity.
    pub load_factor: f64,
    /// Total cost per kilometre; zero for a zero-length route.
    pub cost_per_km: f64,
    /// Revenue per kilometre; zero for a zero-length route.
    pub revenue_per_km: f64,
    /// `(revenue - total cost) / revenue`, undefined at zero revenue.
    pub profit_margin: Ratio,
    /// `(revenue - total cost) / total cost`, undefined at zero cost.
    pub roi: Ratio,
}

impl RouteEconomics {
    /// Sum of all cost components.
    #[must_use]
    pub fn total_cost(&self) -> f64 {
        self.fuel_cost
            + self.wage_cost
            + self.maintenance_cost
            + self.opportunity_cost
            + self.carbon_cost
    }
}

/// Pollutant masses emitted over one route, in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmissionsBreakdown {
    /// Carbon dioxide.
    pub co2_kg: f64,
    /// Nitrogen oxides.
    pub nox_kg: f64,
    /// Fine particulate matter.
    pub pm25_kg: f64,
    /// Carbon monoxide.
    pub co_kg: f64,
}

impl EmissionsBreakdown {
    /// The zero breakdown.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            co2_kg: 0.0,
            nox_kg: 0.0,
            pm25_kg: 0.0,
            co_kg: 0.0,
        }
    }

    /// Scale every pollutant by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            co2_kg: self.co2_kg * factor,
            nox_kg: self.nox_kg * factor,
            pm25_kg: self.pm25_kg * factor,
            co_kg: self.co_kg * factor,
        }
    }
}

impl Add for EmissionsBreakdown {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            co2_kg: self.co2_kg + other.co2_kg,
            nox_kg: self.nox_kg + other.nox_kg,
            pm25_kg: self.pm25_kg + other.pm25_kg,
            co_kg: self.co_kg + other.co_kg,
        }
    }
}

/// One vehicle's optimized stop sequence with its derived metrics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleRoute {
    /// Identifier of the vehicle serving this route.
    pub vehicle_id: String,
    /// Stop indices in visiting order, starting and ending at the
    /// depot.
    pub stops: Vec<usize>,
    /// Route distance in kilometres.
    pub distance_km: f64,
    /// Route duration after congestion.
    pub duration: Duration,
    /// Passengers boarded along the route.
    pub passengers: f64,
    /// Economic breakdown.
    pub economics: RouteEconomics,
    /// Emission breakdown.
    pub emissions: EmissionsBreakdown,
    /// Soft constraints the route could not honour.
    pub violations: Vec<ConstraintViolation>,
    /// Passengers served per kilometre driven; zero for an empty route.
    pub efficiency_score: f64,
}

impl VehicleRoute {
    /// Stops visited excluding the depot terminals.
    #[must_use]
    pub fn served_stop_count(&self) -> usize {
        self.stops.len().saturating_sub(2)
    }
}

/// Aggregate totals over all routes in a solution.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolutionTotals {
    /// Total distance in kilometres.
    pub distance_km: f64,
    /// Total route duration.
    pub duration: Duration,
    /// Total CO2 in kilograms.
    pub co2_kg: f64,
    /// Total operating cost.
    pub cost: f64,
}

/// The top-level optimization result.
///
/// Always a structured description of what was achieved: an infeasible
/// request yields an empty route set with `Infeasible` status rather
/// than an error, and a timeout yields the best plan found so far.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizedSolution {
    /// One route per vehicle that served at least one stop.
    pub routes: Vec<VehicleRoute>,
    /// Indices of stops no vehicle could serve.
    pub unserved_stops: Vec<usize>,
    /// Aggregate totals over all routes.
    pub totals: SolutionTotals,
    /// Terminal solver state.
    pub status: SolverStatus,
    /// Diagnostic 0–100 score of cultural and temporal compliance.
    pub compliance_score: u8,
}

impl OptimizedSolution {
    /// Number of stops served across all routes, excluding depots.
    #[must_use]
    pub fn served_stop_count(&self) -> usize {
        self.routes.iter().map(VehicleRoute::served_stop_count).sum()
    }
}
