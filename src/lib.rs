//! Dairy Advisor: greenhouse-gas decision support for dairy farms
//!
//! Derives emissions, milk yield, cost and efficiency indicators from three
//! farm controls, raises threshold-based advisories, answers keyword
//! questions and projects a yield/cost trend chart.
//!
//! ## Architecture
//!
//! - **Farm Model**: linear sensitivity model, controls → indicators
//! - **Suggestion Engine**: ordered threshold rules → advisories
//! - **Assistant**: keyword-routed answers to operator questions
//! - **Chart**: trend history → canvas geometry
//! - **Pipeline**: session controller owning all mutable state

pub mod assistant;
pub mod chart;
pub mod config;
pub mod farm_model;
pub mod optimization;
pub mod pipeline;
pub mod types;

// Re-export configuration
pub use config::{AdvisorConfig, ConfigError};

// Re-export commonly used types
pub use types::{
    ChartPoint, ControlInputs, ControlKind, FarmParameters, LogEntry, LogKind, Priority,
    Suggestion, SuggestionCategory,
};

// Re-export session components
pub use chart::{project_chart, CanvasConfig, ChartDomains, ChartGeometry};
pub use farm_model::{derive, ModelError};
pub use pipeline::{ControlError, HistoryBuffer, SessionController, SessionError, SessionSnapshot};
