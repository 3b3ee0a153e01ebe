//! Economic and environmental models for trotro routes.
//!
//! The crate provides three pure computations over `trotro-core` types:
//!
//! - **Route economics** ([`route_economics`]) turns distance, duration,
//!   a vehicle profile, and congestion factors into the full cost,
//!   revenue, and profitability breakdown.
//! - **Route emissions** ([`route_emissions`]) derives pollutant masses
//!   from fuel consumption and the vehicle's emission factors.
//! - **Impact aggregation** ([`aggregate_impact`]) sums route emissions
//!   into system-wide daily and annual totals and prices their health
//!   and climate burden through documented linear models.
//!
//! Every coefficient lives on a params struct with a `Default` impl.
//! They are policy values for calibration, not measured constants, and
//! the impact models claim no epidemiological precision.
//!
//! All functions are idempotent: identical inputs produce identical
//! outputs, with no hidden state.

#![forbid(unsafe_code)]

mod economics;
mod emissions;
mod impact;

pub use economics::{route_economics, EconomicParams};
pub use emissions::route_emissions;
pub use impact::{aggregate_impact, EnvironmentalImpact, ImpactCoefficients};
