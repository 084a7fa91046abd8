//! Advisor Configuration - control bounds, seed, chart layout and session sizes as TOML values
//!
//! Every struct implements `Default` with values matching the compiled-in
//! constants, so a missing config file reproduces the reference behaviour
//! exactly. Advisory thresholds are not part of the file format: they are
//! always built from `types::farm_thresholds`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::chart::{CanvasConfig, ChartDomains, ValueDomain};
use crate::types::{control_bounds, farm_thresholds, ControlInputs};

use super::defaults;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "DAIRY_ADVISOR_CONFIG";

/// Config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "advisor_config.toml";

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for an advisor session.
///
/// Load with `AdvisorConfig::load()` which searches:
/// 1. `$DAIRY_ADVISOR_CONFIG` env var
/// 2. `./advisor_config.toml`
/// 3. Built-in defaults
///
/// The value is built once at startup and only ever handed out by reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// Advisory thresholds. Never read from or written to TOML.
    #[serde(skip)]
    pub thresholds: ThresholdConfig,

    /// Control input domain bounds
    #[serde(default)]
    pub controls: ControlBoundsConfig,

    /// Initial control values for a new session
    #[serde(default)]
    pub seed: SeedConfig,

    /// Chart canvas and value domains
    #[serde(default)]
    pub chart: ChartConfig,

    /// Session buffer sizes
    #[serde(default)]
    pub session: SessionConfig,
}

impl AdvisorConfig {
    /// Load configuration using the standard search order:
    /// 1. `$DAIRY_ADVISOR_CONFIG` environment variable
    /// 2. `./advisor_config.toml` in the current working directory
    /// 3. Built-in defaults
    pub fn load() -> Self {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), "Loaded advisor config from {}", CONFIG_ENV_VAR);
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from {}, falling back", CONFIG_ENV_VAR);
                    }
                }
            } else {
                warn!(path = %path, "{} points to non-existent file, falling back", CONFIG_ENV_VAR);
            }
        }

        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!("Loaded advisor config from ./{}", LOCAL_CONFIG_FILE);
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./{}, using defaults", LOCAL_CONFIG_FILE);
                }
            }
        }

        info!("No {} found, using built-in defaults", LOCAL_CONFIG_FILE);
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml_str(&contents).map_err(|e| match e {
            ConfigError::Parse(_, err) => ConfigError::Parse(path.to_path_buf(), err),
            other => other,
        })
    }

    /// Parse and validate a TOML document.
    ///
    /// Unknown keys are logged as warnings and never fail the load.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        for w in super::validation::validate_unknown_keys(contents) {
            warn!("{}", w);
        }

        let config: Self = toml::from_str(contents)
            .map_err(|e| ConfigError::Parse(PathBuf::from("<inline>"), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the effective configuration back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Check internal consistency. Collects every problem before failing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (mut errors, warnings) = super::validation::validate_physical_ranges(self);
        for w in &warnings {
            warn!("{}", w);
        }

        let t = &self.thresholds;
        if t.base_cost >= t.cost_threshold {
            errors.push(format!(
                "thresholds.base_cost ({:.2}) must be below cost_threshold ({:.2})",
                t.base_cost, t.cost_threshold
            ));
        }

        let c = &self.chart;
        if c.width <= 2.0 * c.padding {
            errors.push(format!(
                "chart.width ({:.0}) must exceed twice the padding ({:.0})",
                c.width, c.padding
            ));
        }
        if c.height <= 2.0 * c.padding {
            errors.push(format!(
                "chart.height ({:.0}) must exceed twice the padding ({:.0})",
                c.height, c.padding
            ));
        }
        if c.yield_max <= c.yield_min {
            errors.push(format!(
                "chart.yield_max ({:.0}) must be greater than yield_min ({:.0})",
                c.yield_max, c.yield_min
            ));
        }
        if c.cost_max <= c.cost_min {
            errors.push(format!(
                "chart.cost_max ({:.2}) must be greater than cost_min ({:.2})",
                c.cost_max, c.cost_min
            ));
        }

        let s = &self.seed;
        let b = &self.controls;
        if !(0.0..=b.feed_max_kg_per_day).contains(&s.concentrate_feed) {
            errors.push(format!(
                "seed.concentrate_feed ({:.2}) outside [0, {:.1}]",
                s.concentrate_feed, b.feed_max_kg_per_day
            ));
        }
        if !(0.0..=b.nitrogen_max_kg_per_ha).contains(&s.nitrogen_rate) {
            errors.push(format!(
                "seed.nitrogen_rate ({:.1}) outside [0, {:.1}]",
                s.nitrogen_rate, b.nitrogen_max_kg_per_ha
            ));
        }
        if s.feed_cost_per_kg <= 0.0 {
            errors.push(format!(
                "seed.feed_cost_per_kg ({:.2}) must be > 0",
                s.feed_cost_per_kg
            ));
        }

        if self.session.history_capacity == 0 {
            errors.push("session.history_capacity must be > 0".to_string());
        }
        if self.session.max_log_entries < 2 {
            errors.push("session.max_log_entries must be >= 2 (query + response)".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

// ============================================================================
// Config Error
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config I/O error ({}): {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config parse error ({}): {}", .0.display(), .1)]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("Config serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config validation failed:\n  - {}", .0.join("\n  - "))]
    Validation(Vec<String>),
}

// ============================================================================
// Sections
// ============================================================================

/// Advisory thresholds, compiled in from `types::farm_thresholds`
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdConfig {
    /// Fixed cost per litre before feed (currency/L)
    pub base_cost: f64,
    /// Emissions above this raise a feed reduction advisory (kg CO2e/day)
    pub emission_threshold: f64,
    /// Cost per litre above this raises a cost advisory
    pub cost_threshold: f64,
    /// Target milk yield (L/lactation)
    pub target_yield: f64,
    /// Nitrogen efficiency floor (%)
    pub nitrogen_efficiency_min: f64,
    /// Protein efficiency floor (%)
    pub protein_efficiency_min: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            base_cost: farm_thresholds::BASE_COST,
            emission_threshold: farm_thresholds::EMISSION_THRESHOLD,
            cost_threshold: farm_thresholds::COST_THRESHOLD,
            target_yield: farm_thresholds::TARGET_YIELD,
            nitrogen_efficiency_min: farm_thresholds::NITROGEN_EFFICIENCY_MIN,
            protein_efficiency_min: farm_thresholds::PROTEIN_EFFICIENCY_MIN,
        }
    }
}

/// Upper bounds of the control inputs. Lower bounds are always zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlBoundsConfig {
    pub feed_max_kg_per_day: f64,
    pub nitrogen_max_kg_per_ha: f64,
}

impl Default for ControlBoundsConfig {
    fn default() -> Self {
        Self {
            feed_max_kg_per_day: control_bounds::FEED_MAX_KG_PER_DAY,
            nitrogen_max_kg_per_ha: control_bounds::NITROGEN_MAX_KG_PER_HA,
        }
    }
}

/// Control values a new session starts from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub concentrate_feed: f64,
    pub nitrogen_rate: f64,
    pub feed_cost_per_kg: f64,
}

impl SeedConfig {
    pub fn inputs(&self) -> ControlInputs {
        ControlInputs {
            concentrate_feed_kg_per_day: self.concentrate_feed,
            nitrogen_rate_kg_per_ha_per_year: self.nitrogen_rate,
            feed_cost_per_kg: self.feed_cost_per_kg,
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            concentrate_feed: defaults::SEED_CONCENTRATE_FEED,
            nitrogen_rate: defaults::SEED_NITROGEN_RATE,
            feed_cost_per_kg: defaults::SEED_FEED_COST_PER_KG,
        }
    }
}

/// Chart canvas size and fixed value domains
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub yield_min: f64,
    pub yield_max: f64,
    pub cost_min: f64,
    pub cost_max: f64,
}

impl ChartConfig {
    pub fn canvas(&self) -> CanvasConfig {
        CanvasConfig {
            width: self.width,
            height: self.height,
            padding: self.padding,
        }
    }

    pub fn domains(&self) -> ChartDomains {
        ChartDomains {
            milk_yield: ValueDomain::new(self.yield_min, self.yield_max),
            cost: ValueDomain::new(self.cost_min, self.cost_max),
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: defaults::CHART_WIDTH,
            height: defaults::CHART_HEIGHT,
            padding: defaults::CHART_PADDING,
            yield_min: defaults::CHART_YIELD_MIN,
            yield_max: defaults::CHART_YIELD_MAX,
            cost_min: defaults::CHART_COST_MIN,
            cost_max: defaults::CHART_COST_MAX,
        }
    }
}

/// Session buffer sizes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Trend history capacity (points)
    pub history_capacity: usize,
    /// Message log capacity (entries); oldest evicted first
    pub max_log_entries: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            history_capacity: defaults::HISTORY_CAPACITY,
            max_log_entries: defaults::MAX_LOG_ENTRIES,
        }
    }
}
