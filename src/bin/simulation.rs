//! Dairy Advisor Scenario Simulation
//!
//! Drives a `SessionController` through a seeded random walk of the three
//! farm controls and prints one record per step. A small share of steps
//! submit deliberately invalid values to exercise rejection.
//!
//! # Usage
//! ```bash
//! ./simulation --steps 100 --seed 42
//! ./simulation --format table --invalid-rate 0.2
//! ```

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use rand::prelude::*;
use rand_distr::{Distribution, Normal};
use serde::Serialize;
use std::io::{self, Write};
use tracing::{info, warn};

use dairy_advisor::config::defaults::SIMULATION_DEFAULT_STEPS;
use dairy_advisor::{AdvisorConfig, ControlKind, SessionController, SuggestionCategory};

// ============================================================================
// Walk Constants
// ============================================================================

/// Step noise (standard deviation) per control
const FEED_STEP_SD: f64 = 0.8;
const NITROGEN_STEP_SD: f64 = 20.0;
const FEED_COST_STEP_SD: f64 = 0.02;

/// Smallest feed cost the walk will propose
const MIN_FEED_COST: f64 = 0.05;

/// Questions asked at random between control changes
const QUESTIONS: [&str; 4] = [
    "How are emissions looking?",
    "What is the milk yield now?",
    "What does a litre cost us?",
    "Anything else I should know?",
];

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "dairy-simulation")]
#[command(about = "Random-walk scenario driver for the dairy advisor")]
#[command(version = "1.0")]
struct Args {
    /// Number of control changes to simulate
    #[arg(short = 'n', long, default_value_t = SIMULATION_DEFAULT_STEPS, value_parser = clap::value_parser!(u32).range(1..=100_000))]
    steps: u32,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Share of steps that submit an invalid value (0.0-1.0)
    #[arg(long, default_value_t = 0.1)]
    invalid_rate: f64,

    /// Share of steps followed by an operator question (0.0-1.0)
    #[arg(long, default_value_t = 0.2)]
    query_rate: f64,

    /// Output format: json or table
    #[arg(short, long, default_value = "json")]
    format: String,
}

// ============================================================================
// Step Record
// ============================================================================

#[derive(Debug, Serialize)]
struct StepRecord {
    step: u32,
    control: ControlKind,
    requested: f64,
    accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    emissions_kg_co2e_per_day: f64,
    milk_yield_liters_per_lactation: i64,
    cost_per_litre: f64,
    suggestions: Vec<SuggestionCategory>,
    out_of_domain_points: usize,
}

// ============================================================================
// Simulation State
// ============================================================================

struct Walker {
    rng: StdRng,
    feed_noise: Normal<f64>,
    nitrogen_noise: Normal<f64>,
    cost_noise: Normal<f64>,
    invalid_rate: f64,
    query_rate: f64,
}

impl Walker {
    fn new(args: &Args) -> Result<Self> {
        let rng = match args.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        let normal = |sd: f64| Normal::new(0.0, sd).map_err(|e| anyhow!("invalid noise: {e}"));
        Ok(Self {
            rng,
            feed_noise: normal(FEED_STEP_SD)?,
            nitrogen_noise: normal(NITROGEN_STEP_SD)?,
            cost_noise: normal(FEED_COST_STEP_SD)?,
            invalid_rate: args.invalid_rate,
            query_rate: args.query_rate,
        })
    }

    /// Pick a control and propose its next value
    fn propose(&mut self, session: &SessionController) -> (ControlKind, f64) {
        let bounds = &session.config().controls;
        let current = session.controls();
        let kind = match self.rng.gen_range(0..3) {
            0 => ControlKind::ConcentrateFeed,
            1 => ControlKind::NitrogenRate,
            _ => ControlKind::FeedCost,
        };

        if self.rng.gen_bool(self.invalid_rate) {
            let (feed_max, nitrogen_max) = (bounds.feed_max_kg_per_day, bounds.nitrogen_max_kg_per_ha);
            return (kind, self.invalid_value(kind, feed_max, nitrogen_max));
        }

        let value = match kind {
            ControlKind::ConcentrateFeed => (current.concentrate_feed_kg_per_day
                + self.feed_noise.sample(&mut self.rng))
            .clamp(0.0, bounds.feed_max_kg_per_day),
            ControlKind::NitrogenRate => (current.nitrogen_rate_kg_per_ha_per_year
                + self.nitrogen_noise.sample(&mut self.rng))
            .clamp(0.0, bounds.nitrogen_max_kg_per_ha),
            ControlKind::FeedCost => {
                (current.feed_cost_per_kg + self.cost_noise.sample(&mut self.rng)).max(MIN_FEED_COST)
            }
        };
        (kind, (value * 100.0).round() / 100.0)
    }

    fn invalid_value(&mut self, kind: ControlKind, feed_max: f64, nitrogen_max: f64) -> f64 {
        match kind {
            ControlKind::ConcentrateFeed => {
                if self.rng.gen_bool(0.5) {
                    feed_max + self.rng.gen_range(1.0..10.0)
                } else {
                    -self.rng.gen_range(0.5..5.0)
                }
            }
            ControlKind::NitrogenRate => nitrogen_max + self.rng.gen_range(1.0..200.0),
            ControlKind::FeedCost => {
                if self.rng.gen_bool(0.5) {
                    0.0
                } else {
                    f64::NAN
                }
            }
        }
    }

    fn maybe_question(&mut self) -> Option<&'static str> {
        if self.rng.gen_bool(self.query_rate) {
            QUESTIONS.choose(&mut self.rng).copied()
        } else {
            None
        }
    }
}

fn write_record(out: &mut impl Write, record: &StepRecord, format: &str) -> Result<()> {
    if format == "table" {
        let cats: Vec<String> = record.suggestions.iter().map(ToString::to_string).collect();
        writeln!(
            out,
            "{:>5} {:<18} {:>9.2} {:<8} {:>6.2} {:>6} {:>5.2} {}",
            record.step,
            record.control.display_name(),
            record.requested,
            if record.accepted { "ok" } else { "REJECTED" },
            record.emissions_kg_co2e_per_day,
            record.milk_yield_liters_per_lactation,
            record.cost_per_litre,
            cats.join(",")
        )?;
    } else {
        let line = serde_json::to_string(record).context("Failed to serialize step")?;
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    if args.format != "json" && args.format != "table" {
        return Err(anyhow!("unknown format '{}' (expected json or table)", args.format));
    }
    for (name, rate) in [("invalid-rate", args.invalid_rate), ("query-rate", args.query_rate)] {
        if !(0.0..=1.0).contains(&rate) {
            return Err(anyhow!("--{name} must be between 0 and 1 (got {rate})"));
        }
    }

    let config = AdvisorConfig::load();
    let mut session = SessionController::new(&config).context("Failed to start session")?;
    let mut walker = Walker::new(&args)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.format == "table" {
        writeln!(
            out,
            "{:>5} {:<18} {:>9} {:<8} {:>6} {:>6} {:>5} suggestions",
            "step", "control", "value", "status", "CO2e", "yield", "cost"
        )?;
    }

    let mut rejected = 0u32;
    for step in 1..=args.steps {
        let (kind, requested) = walker.propose(&session);
        let result = session.set_control(kind, requested);
        if result.is_err() {
            rejected += 1;
        }

        if let Some(question) = walker.maybe_question() {
            session.submit_query(question);
        }

        let p = session.parameters();
        let record = StepRecord {
            step,
            control: kind,
            requested,
            accepted: result.is_ok(),
            error: result.err().map(|e| e.to_string()),
            emissions_kg_co2e_per_day: p.emissions_kg_co2e_per_day,
            milk_yield_liters_per_lactation: p.milk_yield_liters_per_lactation,
            cost_per_litre: p.cost_per_litre,
            suggestions: session.suggestions().iter().map(|s| s.category).collect(),
            out_of_domain_points: session.project_chart().out_of_domain.len(),
        };
        write_record(&mut out, &record, &args.format)?;
    }
    out.flush()?;

    if rejected > 0 {
        warn!(rejected, "Some control changes were rejected");
    }
    info!(
        steps = args.steps,
        rejected,
        log_entries = session.log_len(),
        "Simulation complete"
    );
    Ok(())
}
