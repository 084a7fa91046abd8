//! Config validation: unknown-key detection with edit-distance suggestions
//! and range checks on control bounds and advisory thresholds.
//!
//! The raw TOML is walked as a `toml::Value` tree before serde sees it, so a
//! misspelt key (which serde would silently replace with its default) still
//! reaches the operator as a warning.

use std::collections::HashSet;

use super::AdvisorConfig;
use crate::types::control_bounds;

/// Maximum edit distance at which a known key is offered as a correction.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Section name of the compiled-in advisory thresholds. Present in a file
/// it is reported and ignored.
const THRESHOLDS_SECTION: &str = "thresholds";

/// A non-fatal config warning (typo, suspicious value).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, " (did you mean '{s}'?)")?;
        }
        Ok(())
    }
}

// ============================================================================
// Known Config Keys
// ============================================================================

/// Every valid dotted key path of `AdvisorConfig`.
///
/// Kept in step with the section structs in `advisor_config.rs`. Thresholds
/// are compiled in and have no keys.
pub fn known_config_keys() -> HashSet<&'static str> {
    [
        "controls",
        "controls.feed_max_kg_per_day",
        "controls.nitrogen_max_kg_per_ha",
        "seed",
        "seed.concentrate_feed",
        "seed.nitrogen_rate",
        "seed.feed_cost_per_kg",
        "chart",
        "chart.width",
        "chart.height",
        "chart.padding",
        "chart.yield_min",
        "chart.yield_max",
        "chart.cost_min",
        "chart.cost_max",
        "session",
        "session.history_capacity",
        "session.max_log_entries",
    ]
    .into_iter()
    .collect()
}

// ============================================================================
// TOML Key Walking
// ============================================================================

/// Collect the dotted path of every key in a `toml::Value` tree.
///
/// `{ a = { b = 1, c = 2 } }` yields `["a", "a.b", "a.c"]`.
pub fn walk_toml_keys(value: &toml::Value, prefix: &str) -> Vec<String> {
    let Some(table) = value.as_table() else {
        return Vec::new();
    };

    table
        .iter()
        .flat_map(|(k, v)| {
            let path = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            let nested = if v.is_table() {
                walk_toml_keys(v, &path)
            } else {
                Vec::new()
            };
            std::iter::once(path).chain(nested)
        })
        .collect()
}

// ============================================================================
// Edit Distance
// ============================================================================

/// Levenshtein distance over Unicode scalar values, single-row variant.
fn edit_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b_chars.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &cb) in b_chars.iter().enumerate() {
            let substitution = diagonal + usize::from(ca != cb);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(row[j + 1] + 1);
        }
    }

    row[b_chars.len()]
}

/// Closest known key within `MAX_SUGGESTION_DISTANCE` edits, if any.
///
/// Ties resolve to the lexicographically smallest key so the suggestion is
/// stable across runs.
pub fn suggest_correction(unknown: &str, known: &HashSet<&str>) -> Option<String> {
    known
        .iter()
        .map(|&k| (edit_distance(unknown, k), k))
        .filter(|(d, _)| *d <= MAX_SUGGESTION_DISTANCE)
        .min()
        .map(|(_, k)| k.to_string())
}

// ============================================================================
// Unknown Key Validation (entry point)
// ============================================================================

/// Parse a raw TOML string and return warnings for any unknown config keys.
///
/// Never fails: syntax errors are left for serde to report.
pub fn validate_unknown_keys(raw_toml: &str) -> Vec<ValidationWarning> {
    let Ok(value) = raw_toml.parse::<toml::Value>() else {
        return Vec::new();
    };

    let known = known_config_keys();
    walk_toml_keys(&value, "")
        .into_iter()
        .filter(|key| !known.contains(key.as_str()))
        .map(|key| {
            let threshold_key = key == THRESHOLDS_SECTION
                || key.starts_with(&format!("{THRESHOLDS_SECTION}."));
            if threshold_key {
                ValidationWarning {
                    message: format!(
                        "Config key '{key}' is ignored: advisory thresholds are compiled in"
                    ),
                    suggestion: None,
                    field: key,
                }
            } else {
                ValidationWarning {
                    suggestion: suggest_correction(&key, &known),
                    message: format!("Unknown config key '{key}'"),
                    field: key,
                }
            }
        })
        .collect()
}

// ============================================================================
// Range Validation
// ============================================================================

/// Validate value ranges on a parsed config.
///
/// Returns (errors, warnings): errors are impossible values that must
/// prevent startup; warnings are legal but suspicious.
pub fn validate_physical_ranges(config: &AdvisorConfig) -> (Vec<String>, Vec<ValidationWarning>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let t = &config.thresholds;
    for (name, value) in [
        ("base_cost", t.base_cost),
        ("emission_threshold", t.emission_threshold),
        ("cost_threshold", t.cost_threshold),
        ("target_yield", t.target_yield),
        ("nitrogen_efficiency_min", t.nitrogen_efficiency_min),
        ("protein_efficiency_min", t.protein_efficiency_min),
    ] {
        if !value.is_finite() || value <= 0.0 {
            errors.push(format!("thresholds.{name} = {value} must be a positive number"));
        }
    }

    for (name, value) in [
        ("nitrogen_efficiency_min", t.nitrogen_efficiency_min),
        ("protein_efficiency_min", t.protein_efficiency_min),
    ] {
        if value > 100.0 {
            errors.push(format!("thresholds.{name} = {value:.1} exceeds 100%"));
        }
    }

    let c = &config.controls;
    if !c.feed_max_kg_per_day.is_finite() || c.feed_max_kg_per_day <= 0.0 {
        errors.push(format!(
            "controls.feed_max_kg_per_day = {} must be > 0",
            c.feed_max_kg_per_day
        ));
    }
    if !c.nitrogen_max_kg_per_ha.is_finite()
        || c.nitrogen_max_kg_per_ha <= 0.0
        || c.nitrogen_max_kg_per_ha > control_bounds::NITROGEN_CEILING_KG_PER_HA
    {
        errors.push(format!(
            "controls.nitrogen_max_kg_per_ha = {} must be in (0, {:.0}]",
            c.nitrogen_max_kg_per_ha,
            control_bounds::NITROGEN_CEILING_KG_PER_HA
        ));
    }

    // Target yield far outside the chart domain draws the dashed line off-canvas
    if !config.chart.domains().milk_yield.contains(t.target_yield) {
        warnings.push(ValidationWarning {
            field: "thresholds.target_yield".to_string(),
            message: format!(
                "target_yield = {:.0} lies outside the chart yield domain [{:.0}, {:.0}]",
                t.target_yield, config.chart.yield_min, config.chart.yield_max
            ),
            suggestion: None,
        });
    }

    // The emissions model is linear around 1.39 kg CO2e/day; thresholds far from it never fire
    if t.emission_threshold > 10.0 {
        warnings.push(ValidationWarning {
            field: "thresholds.emission_threshold".to_string(),
            message: format!(
                "emission_threshold = {:.2} is outside the typical range (0-10 kg CO2e/day)",
                t.emission_threshold
            ),
            suggestion: None,
        });
    }

    (errors, warnings)
}

// ============================================================================
// Tests
// ============================================================================
