//! Advisory text templates
//!
//! Slot-filled wording for each suggestion category. Nitrogen and protein
//! advisories are fixed text; emission and cost advisories embed the values
//! that triggered them.

use crate::types::{Priority, Suggestion, SuggestionCategory};

/// Feed reduction advisory with its modelled emission saving.
pub fn emission_advisory(reduced_feed: f64, reduced_emissions: f64, reduction_pct: f64) -> Suggestion {
    Suggestion {
        category: SuggestionCategory::Emission,
        message: format!(
            "Reduce concentrate feed by 10% to {reduced_feed:.2} kg/day to bring emissions down."
        ),
        impact: format!(
            "Emissions fall to {reduced_emissions:.2} kg CO2e/day, a {reduction_pct:.1}% reduction."
        ),
        priority: Priority::High,
    }
}

pub fn nitrogen_advisory() -> Suggestion {
    Suggestion {
        category: SuggestionCategory::Nitrogen,
        message: "Nitrogen use efficiency is low. Split fertiliser applications and match rates \
                  to grass growth."
            .to_string(),
        impact: "Less nitrogen lost to leaching and nitrous oxide emissions.".to_string(),
        priority: Priority::Medium,
    }
}

pub fn protein_advisory() -> Suggestion {
    Suggestion {
        category: SuggestionCategory::Protein,
        message: "Protein efficiency is low. Rebalance the ration towards lower crude-protein \
                  concentrates."
            .to_string(),
        impact: "Lower nitrogen excretion and reduced feed spend.".to_string(),
        priority: Priority::Medium,
    }
}

/// Cost advisory quoting the current cost against the threshold.
pub fn cost_advisory(cost_per_litre: f64, threshold: f64) -> Suggestion {
    Suggestion {
        category: SuggestionCategory::Cost,
        message: format!(
            "Cost per litre ({cost_per_litre:.2}) is above the target of {threshold:.2}. \
             Review concentrate levels and feed purchasing."
        ),
        impact: format!(
            "Closing the gap saves {:.2} per litre produced.",
            (cost_per_litre - threshold).max(0.0)
        ),
        priority: Priority::High,
    }
}
