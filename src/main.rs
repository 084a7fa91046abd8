//! Dairy Advisor operator console
//!
//! Line-oriented front end over a single `SessionController`. Reads one
//! command per line from stdin and prints results to stdout; logs go to
//! stderr.
//!
//! # Usage
//!
//! ```bash
//! dairy-advisor
//! dairy-advisor --config farm.toml --json
//! printf 'feed 10\nask emissions?\nsnapshot\n' | dairy-advisor --json
//! ```
//!
//! # Environment Variables
//!
//! - `DAIRY_ADVISOR_CONFIG`: Path to the TOML config (default: ./advisor_config.toml)
//! - `RUST_LOG`: Logging level (default: info)

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;

use dairy_advisor::{AdvisorConfig, ControlKind, SessionController};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "dairy-advisor")]
#[command(about = "Dairy greenhouse-gas decision support console")]
#[command(version)]
struct CliArgs {
    /// Path to an advisor_config.toml (overrides DAIRY_ADVISOR_CONFIG)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print snapshots, charts and suggestions as JSON
    #[arg(long)]
    json: bool,
}

// ============================================================================
// Console Commands
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Set(ControlKind, f64),
    Ask(String),
    Snapshot,
    Chart,
    Suggestions,
    Help,
    Quit,
}

const HELP: &str = "\
Commands:
  feed <kg/day>        set concentrate feed rate
  nitrogen <kg N/ha>   set nitrogen application rate
  cost <per kg>        set feed unit cost
  ask <question>       ask about emissions, yield or cost
  snapshot             show indicators, log and history
  chart                show projected chart paths
  suggestions          show current advisories
  help                 show this message
  quit                 exit";

impl Command {
    fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        let control = |kind: ControlKind| -> Result<Option<Self>, String> {
            rest.parse::<f64>()
                .map(|v| Some(Self::Set(kind, v)))
                .map_err(|_| format!("'{rest}' is not a number"))
        };

        match word.to_lowercase().as_str() {
            "feed" => control(ControlKind::ConcentrateFeed),
            "nitrogen" => control(ControlKind::NitrogenRate),
            "cost" => control(ControlKind::FeedCost),
            "ask" => Ok(Some(Self::Ask(rest.to_string()))),
            "snapshot" => Ok(Some(Self::Snapshot)),
            "chart" => Ok(Some(Self::Chart)),
            "suggestions" => Ok(Some(Self::Suggestions)),
            "help" | "?" => Ok(Some(Self::Help)),
            "quit" | "exit" => Ok(Some(Self::Quit)),
            other => Err(format!("unknown command '{other}' (try 'help')")),
        }
    }
}

// ============================================================================
// Output
// ============================================================================

fn print_indicators(out: &mut impl Write, session: &SessionController) -> io::Result<()> {
    let p = session.parameters();
    let c = session.controls();
    writeln!(
        out,
        "feed {:.2} kg/day | nitrogen {:.0} kg N/ha/yr | feed cost {:.2}/kg",
        c.concentrate_feed_kg_per_day, c.nitrogen_rate_kg_per_ha_per_year, c.feed_cost_per_kg
    )?;
    writeln!(
        out,
        "emissions {:.2} kg CO2e/day | yield {} L | cost {:.2}/L | protein eff {:.1}% | N eff {:.1}%",
        p.emissions_kg_co2e_per_day,
        p.milk_yield_liters_per_lactation,
        p.cost_per_litre,
        p.protein_efficiency_percent,
        p.nitrogen_efficiency_percent
    )
}

fn print_suggestions(out: &mut impl Write, session: &SessionController) -> io::Result<()> {
    if session.suggestions().is_empty() {
        return writeln!(out, "No suggestions: all indicators within thresholds.");
    }
    for s in session.suggestions() {
        writeln!(out, "[{}] {}: {}", s.priority, s.category, s.message)?;
        writeln!(out, "    impact: {}", s.impact)?;
    }
    Ok(())
}

fn run_command(
    out: &mut impl Write,
    session: &mut SessionController,
    command: Command,
    json: bool,
) -> Result<()> {
    match command {
        Command::Set(kind, value) => match session.set_control(kind, value) {
            Ok(_) => {
                if let Some(alert) = session.log().last() {
                    writeln!(out, "{}", alert.text)?;
                }
            }
            Err(e) => writeln!(out, "rejected: {e}")?,
        },
        Command::Ask(text) => {
            let before = session.log_len();
            session.submit_query(&text);
            if session.log_len() != before {
                if let Some(answer) = session.log().last() {
                    writeln!(out, "{}", answer.text)?;
                }
            }
        }
        Command::Snapshot => {
            if json {
                let snapshot = serde_json::to_string_pretty(&session.snapshot())
                    .context("Failed to serialize snapshot")?;
                writeln!(out, "{snapshot}")?;
            } else {
                print_indicators(out, session)?;
                for point in session.history().iter() {
                    writeln!(
                        out,
                        "  {:>8}  yield {:>6.0}  target {:>6.0}  cost {:.2}",
                        point.label, point.milk_yield, point.target, point.cost
                    )?;
                }
                for entry in session.log() {
                    writeln!(out, "  <{}> {}", entry.kind, entry.text)?;
                }
            }
        }
        Command::Chart => {
            let geometry = session.project_chart();
            if json {
                let chart = serde_json::to_string_pretty(&geometry)
                    .context("Failed to serialize chart geometry")?;
                writeln!(out, "{chart}")?;
            } else {
                writeln!(out, "yield:  {}", geometry.milk_yield_line.to_path_data())?;
                writeln!(out, "target: {}", geometry.target_line.to_path_data())?;
                writeln!(out, "cost:   {}", geometry.cost_line.to_path_data())?;
                if !geometry.out_of_domain.is_empty() {
                    writeln!(out, "outside axis domains: {:?}", geometry.out_of_domain)?;
                }
            }
        }
        Command::Suggestions => {
            if json {
                let list = serde_json::to_string_pretty(session.suggestions())
                    .context("Failed to serialize suggestions")?;
                writeln!(out, "{list}")?;
            } else {
                print_suggestions(out, session)?;
            }
        }
        Command::Help => writeln!(out, "{HELP}")?,
        Command::Quit => {}
    }
    Ok(())
}

// ============================================================================
// Main
// ============================================================================

fn main() -> Result<()> {
    // Logs to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let args = CliArgs::parse();

    let config = match &args.config {
        Some(path) => AdvisorConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => AdvisorConfig::load(),
    };

    let mut session = SessionController::new(&config).context("Failed to start session")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_indicators(&mut out, &session)?;
    if let Some(welcome) = session.log().next() {
        writeln!(out, "{}", welcome.text)?;
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read stdin")?;
        match Command::parse(&line) {
            Ok(None) => continue,
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => run_command(&mut out, &mut session, command, args.json)?,
            Err(msg) => writeln!(out, "{msg}")?,
        }
        out.flush()?;
    }

    info!(log_entries = session.log_len(), "Session ended");
    Ok(())
}
