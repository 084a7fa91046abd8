//! Chat Responder
//!
//! Keyword-routed answers to operator questions about the current
//! indicators. No language model: a query is lowercased and matched
//! against a fixed keyword table, first hit wins.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::types::FarmParameters;

/// Answer returned when no keyword matches.
pub const FALLBACK_RESPONSE: &str = "I can help with questions about emissions, milk yield or \
     production cost. Try asking about one of those.";

/// Topic a query resolves to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QueryTopic {
    Emissions,
    Yield,
    Cost,
    Unrecognized,
}

impl std::fmt::Display for QueryTopic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryTopic::Emissions => write!(f, "emissions"),
            QueryTopic::Yield => write!(f, "yield"),
            QueryTopic::Cost => write!(f, "cost"),
            QueryTopic::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

/// Keyword table in match priority order.
const KEYWORDS: [(&str, QueryTopic); 3] = [
    ("emission", QueryTopic::Emissions),
    ("yield", QueryTopic::Yield),
    ("cost", QueryTopic::Cost),
];

/// Resolve the topic of a query by case-insensitive substring match.
pub fn classify(query: &str) -> QueryTopic {
    let lower = query.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map_or(QueryTopic::Unrecognized, |(_, topic)| *topic)
}

/// Answer a query against the current indicators.
///
/// Callers are expected to drop trimmed-empty queries before calling; an
/// empty string here simply gets the fallback answer.
pub fn respond(query: &str, params: &FarmParameters) -> String {
    let topic = classify(query);
    trace!(%topic, "Query classified");

    match topic {
        QueryTopic::Emissions => format!(
            "Current emissions are {:.2} kg CO2e/day at {:.2} kg/day of concentrate feed. \
             Each extra kg of concentrate adds about 0.05 kg CO2e/day.",
            params.emissions_kg_co2e_per_day, params.concentrate_feed_kg_per_day
        ),
        QueryTopic::Yield => format!(
            "Milk yield is {} L per lactation. Each extra kg/day of concentrate adds about \
             100 L, at the cost of lower protein efficiency ({:.1}% now).",
            params.milk_yield_liters_per_lactation, params.protein_efficiency_percent
        ),
        QueryTopic::Cost => format!(
            "Production cost is {:.2} per litre. Concentrate spend is the main driver; \
             reducing feed or sourcing cheaper concentrate brings it down.",
            params.cost_per_litre
        ),
        QueryTopic::Unrecognized => FALLBACK_RESPONSE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_params() -> FarmParameters {
        FarmParameters {
            concentrate_feed_kg_per_day: 8.08,
            nitrogen_rate_kg_per_ha_per_year: 180.0,
            emissions_kg_co2e_per_day: 1.39,
            milk_yield_liters_per_lactation: 8750,
            cost_per_litre: 0.37,
            protein_efficiency_percent: 14.3,
            nitrogen_efficiency_percent: 17.6,
        }
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(classify("EMISSIONS please"), QueryTopic::Emissions);
        assert_eq!(classify("Yield?"), QueryTopic::Yield);
        assert_eq!(classify("what does it COST"), QueryTopic::Cost);
        assert_eq!(classify("hello"), QueryTopic::Unrecognized);
    }

    #[test]
    fn test_emission_beats_cost() {
        assert_eq!(
            classify("what is the cost of cutting emissions"),
            QueryTopic::Emissions
        );
    }

    #[test]
    fn test_yield_beats_cost() {
        assert_eq!(classify("does yield affect cost?"), QueryTopic::Yield);
    }

    #[test]
    fn test_yield_answer_quotes_current_yield() {
        let answer = respond("What about yield today?", &reference_params());
        assert!(answer.contains("8750 L"), "{answer}");
    }

    #[test]
    fn test_emission_answer_quotes_current_emissions() {
        let answer = respond("Emission and cost outlook", &reference_params());
        assert!(answer.contains("1.39 kg CO2e/day"), "{answer}");
    }

    #[test]
    fn test_cost_answer_quotes_cost_per_litre() {
        let answer = respond("cost?", &reference_params());
        assert!(answer.contains("0.37 per litre"), "{answer}");
    }

    #[test]
    fn test_unrecognized_gets_fallback() {
        assert_eq!(respond("weather tomorrow", &reference_params()), FALLBACK_RESPONSE);
    }
}
