//! Linear sensitivity models for dairy indicators
//!
//! Each indicator varies linearly around a fixed reference point:
//! - Emissions (kg CO2e/day) and milk yield (L/lactation) from feed rate
//! - Cost per litre from feed rate, yield and feed unit cost
//! - Protein efficiency (%) from feed rate
//! - Nitrogen efficiency (%) from nitrogen application rate
//!
//! This is a first-order approximation for decision support, not an
//! agronomic simulation.

use crate::types::model_baselines as base;

// ============================================================================
// Rounding
// ============================================================================

/// Round to 1 decimal place
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to 2 decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ============================================================================
// Feed-Driven Indicators
// ============================================================================

/// Daily emissions for a concentrate feed rate
///
/// Formula: E = 1.39 + 0.05 × (feed − 8.08)
///
/// Returns kg CO2e/day, rounded to 2 decimals
pub fn emissions(feed_kg_per_day: f64) -> f64 {
    round2(
        base::EMISSIONS_KG_CO2E
            + base::EMISSIONS_PER_KG_FEED * (feed_kg_per_day - base::FEED_KG_PER_DAY),
    )
}

/// Milk yield per lactation for a concentrate feed rate
///
/// Formula: Y = 8750 + 100 × (feed − 8.08)
///
/// Returns litres, rounded to the nearest whole litre. May be zero or
/// negative for feed rates far below the reference; callers must check
/// before dividing by it.
#[allow(clippy::cast_possible_truncation)]
pub fn milk_yield(feed_kg_per_day: f64) -> i64 {
    (base::MILK_YIELD_LITRES
        + base::MILK_YIELD_PER_KG_FEED * (feed_kg_per_day - base::FEED_KG_PER_DAY))
        .round() as i64
}

/// Production cost per litre
///
/// Formula: C = base + (feed × cost/kg × 365) / yield
///
/// Returns `None` when `milk_yield <= 0`, otherwise the cost rounded to 2
/// decimals.
#[allow(clippy::cast_precision_loss)]
pub fn cost_per_litre(
    feed_kg_per_day: f64,
    milk_yield: i64,
    feed_cost_per_kg: f64,
    base_cost: f64,
) -> Option<f64> {
    if milk_yield <= 0 {
        return None;
    }
    let annual_feed_cost = feed_kg_per_day * feed_cost_per_kg * base::FEEDING_DAYS_PER_YEAR;
    Some(round2(base_cost + annual_feed_cost / milk_yield as f64))
}

/// Dietary protein efficiency for a concentrate feed rate
///
/// Formula: P = 14.3 − 0.1 × (feed − 8.08)
///
/// Returns %, rounded to 1 decimal
pub fn protein_efficiency(feed_kg_per_day: f64) -> f64 {
    round1(
        base::PROTEIN_EFFICIENCY_PERCENT
            - base::PROTEIN_EFFICIENCY_PER_KG_FEED * (feed_kg_per_day - base::FEED_KG_PER_DAY),
    )
}

// ============================================================================
// Nitrogen-Driven Indicators
// ============================================================================

/// Nitrogen use efficiency for an application rate
///
/// Formula: N = 17.6 − 0.02 × (rate − 180)
///
/// Returns %, rounded to 1 decimal
pub fn nitrogen_efficiency(nitrogen_kg_per_ha: f64) -> f64 {
    round1(
        base::NITROGEN_EFFICIENCY_PERCENT
            - base::NITROGEN_EFFICIENCY_PER_KG_N * (nitrogen_kg_per_ha - base::NITROGEN_KG_PER_HA),
    )
}
