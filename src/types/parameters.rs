//! Control inputs and the derived indicator snapshot

use serde::{Deserialize, Serialize};

// ============================================================================
// Control Inputs
// ============================================================================

/// One of the three externally settable controls
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ControlKind {
    /// Concentrate feed rate (kg/day)
    ConcentrateFeed,
    /// Nitrogen application rate (kg N/ha/yr)
    NitrogenRate,
    /// Feed unit cost (currency/kg)
    FeedCost,
}

impl ControlKind {
    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            ControlKind::ConcentrateFeed => "Concentrate feed",
            ControlKind::NitrogenRate => "Nitrogen rate",
            ControlKind::FeedCost => "Feed cost",
        }
    }

    /// Unit suffix used in log messages
    pub fn unit(&self) -> &'static str {
        match self {
            ControlKind::ConcentrateFeed => "kg/day",
            ControlKind::NitrogenRate => "kg N/ha/yr",
            ControlKind::FeedCost => "per kg",
        }
    }
}

impl std::fmt::Display for ControlKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The three control values that fully determine every indicator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ControlInputs {
    /// Concentrate feed rate (kg/day)
    pub concentrate_feed_kg_per_day: f64,
    /// Nitrogen application rate (kg N/ha/yr)
    pub nitrogen_rate_kg_per_ha_per_year: f64,
    /// Feed unit cost (currency/kg)
    pub feed_cost_per_kg: f64,
}

impl ControlInputs {
    /// Value of a single control
    pub fn get(&self, kind: ControlKind) -> f64 {
        match kind {
            ControlKind::ConcentrateFeed => self.concentrate_feed_kg_per_day,
            ControlKind::NitrogenRate => self.nitrogen_rate_kg_per_ha_per_year,
            ControlKind::FeedCost => self.feed_cost_per_kg,
        }
    }

    /// Copy with one control replaced, the others untouched
    pub fn with(self, kind: ControlKind, value: f64) -> Self {
        let mut next = self;
        match kind {
            ControlKind::ConcentrateFeed => next.concentrate_feed_kg_per_day = value,
            ControlKind::NitrogenRate => next.nitrogen_rate_kg_per_ha_per_year = value,
            ControlKind::FeedCost => next.feed_cost_per_kg = value,
        }
        next
    }
}

// ============================================================================
// Derived Indicators
// ============================================================================

/// Indicator snapshot derived from the control inputs.
///
/// Always rebuilt as a whole by `farm_model::derive`; never patched field by
/// field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FarmParameters {
    /// Concentrate feed rate (kg/day), control input
    pub concentrate_feed_kg_per_day: f64,
    /// Nitrogen application rate (kg N/ha/yr), control input
    pub nitrogen_rate_kg_per_ha_per_year: f64,
    /// Enteric + manure emissions (kg CO2e/day), 2 decimals
    pub emissions_kg_co2e_per_day: f64,
    /// Milk yield per lactation (L)
    pub milk_yield_liters_per_lactation: i64,
    /// Production cost per litre (currency/L), 2 decimals
    pub cost_per_litre: f64,
    /// Dietary protein efficiency (%), 1 decimal
    pub protein_efficiency_percent: f64,
    /// Nitrogen use efficiency (%), 1 decimal
    pub nitrogen_efficiency_percent: f64,
}
