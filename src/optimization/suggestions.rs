//! Threshold-based suggestion generator

use tracing::debug;

use crate::config::ThresholdConfig;
use crate::farm_model::{emissions, round1, round2};
use crate::types::{farm_thresholds, FarmParameters, Suggestion};

use super::templates;

/// Evaluate every advisory rule against the current indicators.
///
/// Rules run in a fixed order (emission, nitrogen, protein, cost) and each
/// appends at most one suggestion, so the result is ordered by rule rather
/// than by priority. An empty vector means nothing needs attention.
pub fn suggest(params: &FarmParameters, thresholds: &ThresholdConfig) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    // 1. Emissions: model a 10% feed cut and report the saving
    let current = params.emissions_kg_co2e_per_day;
    if current > thresholds.emission_threshold {
        let reduced_feed =
            round2(params.concentrate_feed_kg_per_day * farm_thresholds::FEED_REDUCTION_FACTOR);
        let reduced_emissions = emissions(reduced_feed);
        let reduction_pct = round1(100.0 * (current - reduced_emissions) / current);
        suggestions.push(templates::emission_advisory(
            reduced_feed,
            reduced_emissions,
            reduction_pct,
        ));
    }

    // 2. Nitrogen use efficiency
    if params.nitrogen_efficiency_percent < thresholds.nitrogen_efficiency_min {
        suggestions.push(templates::nitrogen_advisory());
    }

    // 3. Protein efficiency
    if params.protein_efficiency_percent < thresholds.protein_efficiency_min {
        suggestions.push(templates::protein_advisory());
    }

    // 4. Cost per litre
    if params.cost_per_litre > thresholds.cost_threshold {
        suggestions.push(templates::cost_advisory(
            params.cost_per_litre,
            thresholds.cost_threshold,
        ));
    }

    debug!(count = suggestions.len(), "Suggestions recomputed");
    suggestions
}
