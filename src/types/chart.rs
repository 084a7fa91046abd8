//! Trend history point

use serde::{Deserialize, Serialize};

/// One point of the yield/cost trend chart.
///
/// Produced once per accepted control change and never modified afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartPoint {
    /// X-axis label (month for seeded points, wall-clock time afterwards)
    pub label: String,
    /// Milk yield at this point (L/lactation)
    pub milk_yield: f64,
    /// Target yield drawn as the dashed reference line (L/lactation)
    pub target: f64,
    /// Cost per litre at this point (currency/L)
    pub cost: f64,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, milk_yield: f64, target: f64, cost: f64) -> Self {
        Self {
            label: label.into(),
            milk_yield,
            target,
            cost,
        }
    }
}
