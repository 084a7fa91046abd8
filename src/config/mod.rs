//! Advisor Configuration Module
//!
//! Control bounds, seed controls, chart layout and session sizes, all
//! defaulting to the compiled-in constants and optionally overridden from a
//! TOML file at startup. Advisory thresholds ride along in `AdvisorConfig`
//! but are never read from the file.
//!
//! ## Loading Order
//!
//! 1. `DAIRY_ADVISOR_CONFIG` environment variable (path to TOML file)
//! 2. `advisor_config.toml` in the current working directory
//! 3. Built-in defaults
//!
//! ## Usage
//!
//! Build the config once and pass it by reference:
//!
//! ```ignore
//! let config = AdvisorConfig::load();
//! let mut session = SessionController::new(&config)?;
//! ```

mod advisor_config;
pub mod defaults;
pub mod validation;

pub use advisor_config::*;
