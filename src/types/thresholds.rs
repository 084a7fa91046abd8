//! Compiled-in model baselines and advisory thresholds

/// Reference points of the first-order sensitivity model.
///
/// Every indicator varies linearly around these baselines.
pub mod model_baselines {
    /// Reference concentrate feed rate (kg/day)
    pub const FEED_KG_PER_DAY: f64 = 8.08;
    /// Reference nitrogen application rate (kg N/ha/yr)
    pub const NITROGEN_KG_PER_HA: f64 = 180.0;
    /// Emissions at the reference feed rate (kg CO2e/day)
    pub const EMISSIONS_KG_CO2E: f64 = 1.39;
    /// Emission sensitivity (kg CO2e/day per kg feed)
    pub const EMISSIONS_PER_KG_FEED: f64 = 0.05;
    /// Milk yield at the reference feed rate (L/lactation)
    pub const MILK_YIELD_LITRES: f64 = 8750.0;
    /// Yield sensitivity (L per kg feed)
    pub const MILK_YIELD_PER_KG_FEED: f64 = 100.0;
    /// Protein efficiency at the reference feed rate (%)
    pub const PROTEIN_EFFICIENCY_PERCENT: f64 = 14.3;
    /// Protein efficiency sensitivity (% per kg feed)
    pub const PROTEIN_EFFICIENCY_PER_KG_FEED: f64 = 0.1;
    /// Nitrogen efficiency at the reference nitrogen rate (%)
    pub const NITROGEN_EFFICIENCY_PERCENT: f64 = 17.6;
    /// Nitrogen efficiency sensitivity (% per kg N)
    pub const NITROGEN_EFFICIENCY_PER_KG_N: f64 = 0.02;
    /// Feeding days per year used to annualise feed cost
    pub const FEEDING_DAYS_PER_YEAR: f64 = 365.0;
}

/// Thresholds for advisory generation
pub mod farm_thresholds {
    /// Fixed cost per litre before feed (currency/L)
    pub const BASE_COST: f64 = 0.25;
    /// Emissions above this trigger a feed reduction advisory (kg CO2e/day)
    pub const EMISSION_THRESHOLD: f64 = 1.5;
    /// Cost per litre above this triggers a cost advisory (currency/L)
    pub const COST_THRESHOLD: f64 = 0.35;
    /// Target milk yield drawn as the dashed chart line (L/lactation)
    pub const TARGET_YIELD: f64 = 9000.0;
    /// Nitrogen efficiency below this triggers a nitrogen advisory (%)
    pub const NITROGEN_EFFICIENCY_MIN: f64 = 15.0;
    /// Protein efficiency below this triggers a protein advisory (%)
    pub const PROTEIN_EFFICIENCY_MIN: f64 = 12.0;
    /// Fraction of current feed used in the reduction scenario
    pub const FEED_REDUCTION_FACTOR: f64 = 0.9;
}

/// Domain bounds for the three control inputs
pub mod control_bounds {
    /// Maximum concentrate feed rate (kg/day)
    pub const FEED_MAX_KG_PER_DAY: f64 = 20.0;
    /// Maximum nitrogen rate accepted by default (kg N/ha/yr)
    pub const NITROGEN_MAX_KG_PER_HA: f64 = 300.0;
    /// Hard ceiling any configuration may raise the nitrogen bound to
    pub const NITROGEN_CEILING_KG_PER_HA: f64 = 500.0;
}
