//! Farm Model Module
//!
//! Deterministic derivation of dairy indicators from the three control
//! inputs. All functions here are pure: the same inputs always give the
//! same `FarmParameters`.
//!
//! - `emissions()` / `milk_yield()` / `protein_efficiency()` - feed driven
//! - `cost_per_litre()` - feed, yield and feed unit cost
//! - `nitrogen_efficiency()` - nitrogen rate driven
//! - `derive()` - full snapshot, yield computed before cost

pub mod indicators;

pub use indicators::{
    cost_per_litre, emissions, milk_yield, nitrogen_efficiency, protein_efficiency, round1,
    round2,
};

use thiserror::Error;

use crate::types::{ControlInputs, FarmParameters};

/// Derivation failure
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ModelError {
    /// Feed rate so low that the derived yield is not positive; cost per
    /// litre would divide by zero or flip sign.
    #[error("feed rate {feed:.2} kg/day gives non-positive milk yield ({milk_yield} L)")]
    DegenerateYield { feed: f64, milk_yield: i64 },
}

/// Derive the full indicator snapshot from the control inputs.
///
/// Yield is computed first because cost per litre depends on it.
pub fn derive(inputs: &ControlInputs, base_cost: f64) -> Result<FarmParameters, ModelError> {
    let feed = inputs.concentrate_feed_kg_per_day;
    let yield_litres = milk_yield(feed);
    let cost = cost_per_litre(feed, yield_litres, inputs.feed_cost_per_kg, base_cost).ok_or(
        ModelError::DegenerateYield {
            feed,
            milk_yield: yield_litres,
        },
    )?;

    Ok(FarmParameters {
        concentrate_feed_kg_per_day: feed,
        nitrogen_rate_kg_per_ha_per_year: inputs.nitrogen_rate_kg_per_ha_per_year,
        emissions_kg_co2e_per_day: emissions(feed),
        milk_yield_liters_per_lactation: yield_litres,
        cost_per_litre: cost,
        protein_efficiency_percent: protein_efficiency(feed),
        nitrogen_efficiency_percent: nitrogen_efficiency(inputs.nitrogen_rate_kg_per_ha_per_year),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::farm_thresholds::BASE_COST;

    fn inputs(feed: f64, nitrogen: f64, cost: f64) -> ControlInputs {
        ControlInputs {
            concentrate_feed_kg_per_day: feed,
            nitrogen_rate_kg_per_ha_per_year: nitrogen,
            feed_cost_per_kg: cost,
        }
    }

    #[test]
    fn test_derive_reference_point() {
        let p = derive(&inputs(8.08, 180.0, 0.35), BASE_COST).expect("reference point derives");
        assert_eq!(p.concentrate_feed_kg_per_day, 8.08);
        assert_eq!(p.nitrogen_rate_kg_per_ha_per_year, 180.0);
        assert!((p.emissions_kg_co2e_per_day - 1.39).abs() < 1e-9);
        assert_eq!(p.milk_yield_liters_per_lactation, 8750);
        assert!((p.cost_per_litre - 0.37).abs() < 1e-9);
        assert!((p.protein_efficiency_percent - 14.3).abs() < 1e-9);
        assert!((p.nitrogen_efficiency_percent - 17.6).abs() < 1e-9);
    }

    #[test]
    fn test_derive_is_deterministic() {
        let i = inputs(11.3, 240.0, 0.42);
        let first = derive(&i, BASE_COST).expect("valid");
        for _ in 0..10 {
            assert_eq!(derive(&i, BASE_COST).expect("valid"), first);
        }
    }

    #[test]
    fn test_derive_nitrogen_does_not_touch_feed_indicators() {
        let low = derive(&inputs(8.08, 0.0, 0.35), BASE_COST).expect("valid");
        let high = derive(&inputs(8.08, 300.0, 0.35), BASE_COST).expect("valid");
        assert_eq!(low.emissions_kg_co2e_per_day, high.emissions_kg_co2e_per_day);
        assert_eq!(low.milk_yield_liters_per_lactation, high.milk_yield_liters_per_lactation);
        assert_eq!(low.cost_per_litre, high.cost_per_litre);
        assert!(low.nitrogen_efficiency_percent > high.nitrogen_efficiency_percent);
    }

    #[test]
    fn test_derive_rejects_degenerate_yield() {
        // 8750 + 100 × (feed − 8.08) <= 0 once feed <= −79.42
        let err = derive(&inputs(-100.0, 180.0, 0.35), BASE_COST)
            .expect_err("yield is not positive");
        assert!(matches!(err, ModelError::DegenerateYield { milk_yield, .. } if milk_yield <= 0));
    }
}
