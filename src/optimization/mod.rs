//! Suggestion Engine
//!
//! Compares the current indicators against the configured thresholds and
//! produces an ordered list of optimisation advisories. Entirely rule
//! based; the list is rebuilt from scratch on every indicator change.

mod suggestions;
pub mod templates;

pub use suggestions::suggest;
