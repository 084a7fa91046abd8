//! Session Controller
//!
//! Owns the live indicators, message log, trend history and suggestion
//! list for one operator session. Every event runs to completion before
//! returning; a control change always applies its four steps in order:
//!
//! ```text
//! 1. derive FarmParameters from the updated controls
//! 2. append an alert summarising the indicator deltas
//! 3. append a trend point to the history
//! 4. recompute suggestions
//! ```
//!
//! A rejected change returns `Err` before step 1 and leaves every piece of
//! state exactly as it was.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::assistant;
use crate::chart::{self, ChartGeometry};
use crate::config::{defaults, AdvisorConfig};
use crate::farm_model;
use crate::optimization;
use crate::types::{
    ChartPoint, ControlInputs, ControlKind, FarmParameters, LogEntry, LogKind, Suggestion,
};

use super::error::{validate_control, ControlError, SessionError};
use super::history::HistoryBuffer;

/// Read-only copy of the whole session state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionSnapshot {
    pub parameters: FarmParameters,
    pub controls: ControlInputs,
    pub log: Vec<LogEntry>,
    pub suggestions: Vec<Suggestion>,
    pub history: Vec<ChartPoint>,
}

#[derive(Debug, Clone)]
pub struct SessionController {
    config: AdvisorConfig,
    controls: ControlInputs,
    parameters: FarmParameters,
    log: VecDeque<LogEntry>,
    history: HistoryBuffer,
    suggestions: Vec<Suggestion>,
}

impl SessionController {
    /// Start a session from the configured seed controls.
    ///
    /// The config is validated first, so one assembled in code is held to
    /// the same invariants as one loaded from a file.
    pub fn new(config: &AdvisorConfig) -> Result<Self, SessionError> {
        config.validate()?;

        let controls = config.seed.inputs();
        for kind in [
            ControlKind::ConcentrateFeed,
            ControlKind::NitrogenRate,
            ControlKind::FeedCost,
        ] {
            validate_control(kind, controls.get(kind), &config.controls)?;
        }
        let parameters = farm_model::derive(&controls, config.thresholds.base_cost)
            .map_err(ControlError::from)?;

        let target = config.thresholds.target_yield;
        let history = HistoryBuffer::seeded(
            config.session.history_capacity,
            defaults::SEED_HISTORY
                .iter()
                .map(|&(label, milk_yield, cost)| ChartPoint::new(label, milk_yield, target, cost)),
        );

        let mut session = Self {
            config: config.clone(),
            controls,
            parameters,
            log: VecDeque::new(),
            history,
            suggestions: optimization::suggest(&parameters, &config.thresholds),
        };
        session.push_log(LogEntry::new(LogKind::Info, defaults::WELCOME_MESSAGE));

        info!(
            feed = controls.concentrate_feed_kg_per_day,
            nitrogen = controls.nitrogen_rate_kg_per_ha_per_year,
            feed_cost = controls.feed_cost_per_kg,
            suggestions = session.suggestions.len(),
            "Session started"
        );
        Ok(session)
    }

    // ========================================================================
    // Control Events
    // ========================================================================

    pub fn set_concentrate_feed(&mut self, value: f64) -> Result<FarmParameters, ControlError> {
        self.apply_control(ControlKind::ConcentrateFeed, value)
    }

    pub fn set_nitrogen_rate(&mut self, value: f64) -> Result<FarmParameters, ControlError> {
        self.apply_control(ControlKind::NitrogenRate, value)
    }

    pub fn set_feed_cost_per_kg(&mut self, value: f64) -> Result<FarmParameters, ControlError> {
        self.apply_control(ControlKind::FeedCost, value)
    }

    /// Dispatch by control kind
    pub fn set_control(
        &mut self,
        kind: ControlKind,
        value: f64,
    ) -> Result<FarmParameters, ControlError> {
        self.apply_control(kind, value)
    }

    fn apply_control(
        &mut self,
        kind: ControlKind,
        value: f64,
    ) -> Result<FarmParameters, ControlError> {
        let next = match self.try_derive(kind, value) {
            Ok(next) => next,
            Err(e) => {
                warn!(control = %kind, value, error = %e, "Control change rejected");
                return Err(e);
            }
        };

        let old_value = self.controls.get(kind);
        let previous = self.parameters;
        self.controls = self.controls.with(kind, value);
        self.parameters = next;
        debug!(control = %kind, old = old_value, new = value, "Control updated");

        self.push_log(LogEntry::new(
            LogKind::Alert,
            alert_summary(kind, value, &previous, &next),
        ));

        #[allow(clippy::cast_precision_loss)]
        let milk_yield = next.milk_yield_liters_per_lactation as f64;
        self.history.append(ChartPoint::new(
            trend_label(),
            milk_yield,
            self.config.thresholds.target_yield,
            next.cost_per_litre,
        ));

        self.suggestions = optimization::suggest(&next, &self.config.thresholds);
        Ok(next)
    }

    /// Validate and derive without touching session state
    fn try_derive(&self, kind: ControlKind, value: f64) -> Result<FarmParameters, ControlError> {
        validate_control(kind, value, &self.config.controls)?;
        let inputs = self.controls.with(kind, value);
        Ok(farm_model::derive(&inputs, self.config.thresholds.base_cost)?)
    }

    // ========================================================================
    // Query Events
    // ========================================================================

    /// Answer an operator question. Blank queries are ignored; anything else
    /// is logged exactly as typed.
    pub fn submit_query(&mut self, text: &str) {
        if text.trim().is_empty() {
            return;
        }
        let response = assistant::respond(text, &self.parameters);
        self.push_log(LogEntry::new(LogKind::Query, text));
        self.push_log(LogEntry::new(LogKind::Response, response));
    }

    fn push_log(&mut self, entry: LogEntry) {
        // A query and its response must both survive the append
        let cap = self.config.session.max_log_entries.max(2);
        while self.log.len() >= cap {
            self.log.pop_front();
        }
        self.log.push_back(entry);
    }

    // ========================================================================
    // Read Access
    // ========================================================================

    pub fn parameters(&self) -> &FarmParameters {
        &self.parameters
    }

    pub fn controls(&self) -> &ControlInputs {
        &self.controls
    }

    pub fn log(&self) -> impl Iterator<Item = &LogEntry> {
        self.log.iter()
    }

    pub fn log_len(&self) -> usize {
        self.log.len()
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            parameters: self.parameters,
            controls: self.controls,
            log: self.log.iter().cloned().collect(),
            suggestions: self.suggestions.clone(),
            history: self.history.to_vec(),
        }
    }

    /// Project the current history with the configured canvas and domains
    pub fn project_chart(&self) -> ChartGeometry {
        chart::project_chart(
            &self.history.to_vec(),
            &self.config.chart.canvas(),
            &self.config.chart.domains(),
        )
    }
}

fn trend_label() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

/// One-line summary of how each indicator moved after a control change
fn alert_summary(
    kind: ControlKind,
    value: f64,
    previous: &FarmParameters,
    next: &FarmParameters,
) -> String {
    let setting = if kind == ControlKind::NitrogenRate {
        format!("{value:.0} {}", kind.unit())
    } else {
        format!("{value:.2} {}", kind.unit())
    };
    format!(
        "{kind} set to {setting}. Emissions {:.2} kg CO2e/day ({:+.2}), milk yield {} L ({:+}), \
         cost {:.2}/L ({:+.2}), protein efficiency {:.1}% ({:+.1}), nitrogen efficiency {:.1}% ({:+.1}).",
        next.emissions_kg_co2e_per_day,
        next.emissions_kg_co2e_per_day - previous.emissions_kg_co2e_per_day,
        next.milk_yield_liters_per_lactation,
        next.milk_yield_liters_per_lactation - previous.milk_yield_liters_per_lactation,
        next.cost_per_litre,
        next.cost_per_litre - previous.cost_per_litre,
        next.protein_efficiency_percent,
        next.protein_efficiency_percent - previous.protein_efficiency_percent,
        next.nitrogen_efficiency_percent,
        next.nitrogen_efficiency_percent - previous.nitrogen_efficiency_percent,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::types::SuggestionCategory;

    fn session() -> SessionController {
        SessionController::new(&AdvisorConfig::default()).expect("default seed is valid")
    }

    #[test]
    fn test_initial_state() {
        let s = session();
        assert_eq!(s.history().len(), 4);
        assert_eq!(s.log_len(), 1);
        assert_eq!(s.log().next().map(|e| e.kind), Some(LogKind::Info));
        assert_eq!(s.parameters().milk_yield_liters_per_lactation, 8750);
        assert!((s.parameters().nitrogen_efficiency_percent - 16.2).abs() < 1e-9);
        // Seed cost 0.37 sits above the 0.35 threshold
        let cats: Vec<_> = s.suggestions().iter().map(|x| x.category).collect();
        assert_eq!(cats, vec![SuggestionCategory::Cost]);
    }

    #[test]
    fn test_feed_change_applies_all_steps() {
        let mut s = session();
        let p = s.set_concentrate_feed(12.0).expect("in range");
        assert_eq!(p.milk_yield_liters_per_lactation, 9142);
        assert_eq!(s.log_len(), 2);
        let alert = s.log().last().expect("alert logged");
        assert_eq!(alert.kind, LogKind::Alert);
        assert!(alert.text.starts_with("Concentrate feed set to 12.00 kg/day"), "{}", alert.text);
        assert!(alert.text.contains("(+392)"), "{}", alert.text);
        assert_eq!(s.history().len(), 4);
        assert!((s.history().latest().expect("point").milk_yield - 9142.0).abs() < 1e-9);
        assert_eq!(
            s.suggestions().first().map(|x| x.category),
            Some(SuggestionCategory::Emission)
        );
    }

    #[test]
    fn test_rejection_leaves_state_untouched() {
        let mut s = session();
        let before = s.snapshot();
        assert!(s.set_feed_cost_per_kg(-1.0).is_err());
        assert!(s.set_concentrate_feed(f64::NAN).is_err());
        assert!(s.set_nitrogen_rate(301.0).is_err());
        assert_eq!(s.snapshot(), before);
    }

    #[test]
    fn test_blank_query_is_noop() {
        let mut s = session();
        s.submit_query("   ");
        assert_eq!(s.log_len(), 1);
    }

    #[test]
    fn test_log_is_bounded() {
        let mut config = AdvisorConfig::default();
        config.session.max_log_entries = 5;
        let mut s = SessionController::new(&config).expect("valid");
        for _ in 0..10 {
            s.submit_query("cost?");
        }
        assert_eq!(s.log_len(), 5);
        assert_eq!(s.log().last().map(|e| e.kind), Some(LogKind::Response));
    }

    #[test]
    fn test_unvalidated_config_is_refused() {
        let mut config = AdvisorConfig::default();
        config.session.max_log_entries = 1;
        assert!(matches!(
            SessionController::new(&config),
            Err(SessionError::InvalidConfig(ConfigError::Validation(_)))
        ));

        let mut config = AdvisorConfig::default();
        config.chart.cost_min = 0.6;
        assert!(matches!(
            SessionController::new(&config),
            Err(SessionError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_query_logged_as_typed() {
        let mut s = session();
        s.submit_query("  cost? ");
        let kinds: Vec<_> = s.log().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![LogKind::Info, LogKind::Query, LogKind::Response]);
        assert_eq!(s.log().nth(1).map(|e| e.text.as_str()), Some("  cost? "));
    }

    #[test]
    fn test_session_chart_uses_history() {
        let s = session();
        let g = s.project_chart();
        assert_eq!(g.labels.len(), 4);
        assert_eq!(g.labels[0].text, "Jan");
    }
}
