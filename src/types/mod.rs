//! Shared data structures for the dairy decision-support engine
//!
//! This module defines the core types flowing through a session:
//! - Control inputs: feed rate, nitrogen rate, feed unit cost
//! - FarmParameters: the derived indicator snapshot
//! - ChartPoint: one history point for the trend chart
//! - Suggestion: rule-triggered optimisation advisory
//! - LogEntry: operator-facing message log

mod parameters;
mod chart;
mod advisory;
mod log;
// Public so callers can reach the compiled-in constants as `types::farm_thresholds`.
pub mod thresholds;

pub use parameters::*;
pub use chart::*;
pub use advisory::*;
pub use log::*;
pub use thresholds::*;
