//! Suggestion types: SuggestionCategory, Priority, Suggestion

use serde::{Deserialize, Serialize};

/// Indicator family a suggestion addresses
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionCategory {
    Emission,
    Nitrogen,
    Protein,
    Cost,
}

impl std::fmt::Display for SuggestionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuggestionCategory::Emission => write!(f, "EMISSION"),
            SuggestionCategory::Nitrogen => write!(f, "NITROGEN"),
            SuggestionCategory::Protein => write!(f, "PROTEIN"),
            SuggestionCategory::Cost => write!(f, "COST"),
        }
    }
}

/// Suggestion priority
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Medium = 1,
    High = 2,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Medium => write!(f, "MEDIUM"),
            Priority::High => write!(f, "HIGH"),
        }
    }
}

/// Rule-triggered optimisation advisory
///
/// Recomputed wholesale on every indicator change; the list order is the
/// rule evaluation order, not a priority sort.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Suggestion {
    /// Indicator family this advisory addresses
    pub category: SuggestionCategory,
    /// Actionable recommendation
    pub message: String,
    /// Expected effect if the recommendation is followed
    pub impact: String,
    /// Advisory priority
    pub priority: Priority,
}
