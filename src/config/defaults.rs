//! System-wide default constants.
//!
//! Centralises the numbers a fresh session starts from. Advisory thresholds
//! and model baselines live in `types::thresholds`.

// ============================================================================
// Session
// ============================================================================

/// Trend history capacity (points).
pub const HISTORY_CAPACITY: usize = 4;

/// Message log capacity (entries). Oldest entries are evicted first.
///
/// Every control change adds one entry and every query two, so 500 covers
/// several hours of interactive use.
pub const MAX_LOG_ENTRIES: usize = 500;

/// Welcome message logged when a session starts.
pub const WELCOME_MESSAGE: &str = "Welcome to the dairy GHG advisor. Adjust feed, nitrogen or \
     feed cost to see how emissions, yield and cost respond, or ask about emissions, yield or cost.";

// ============================================================================
// Seed Controls
// ============================================================================

/// Initial concentrate feed rate (kg/day).
pub const SEED_CONCENTRATE_FEED: f64 = 8.08;

/// Initial nitrogen application rate (kg N/ha/yr).
pub const SEED_NITROGEN_RATE: f64 = 250.0;

/// Initial feed unit cost (currency/kg).
pub const SEED_FEED_COST_PER_KG: f64 = 0.35;

/// Illustrative trend points a session starts with: (label, yield, cost).
pub const SEED_HISTORY: [(&str, f64, f64); 4] = [
    ("Jan", 8650.0, 0.38),
    ("Feb", 8700.0, 0.37),
    ("Mar", 8720.0, 0.37),
    ("Apr", 8750.0, 0.37),
];

// ============================================================================
// Chart
// ============================================================================

/// Canvas width (px).
pub const CHART_WIDTH: f64 = 500.0;

/// Canvas height (px).
pub const CHART_HEIGHT: f64 = 300.0;

/// Padding between canvas edge and plot interior (px).
pub const CHART_PADDING: f64 = 40.0;

/// Milk-yield axis domain (L/lactation).
pub const CHART_YIELD_MIN: f64 = 8000.0;
pub const CHART_YIELD_MAX: f64 = 9500.0;

/// Cost-per-litre axis domain.
pub const CHART_COST_MIN: f64 = 0.25;
pub const CHART_COST_MAX: f64 = 0.50;

/// Vertical offset of x-axis labels below the axis (px).
pub const CHART_LABEL_OFFSET: f64 = 15.0;

/// Marker radius (px).
pub const CHART_MARKER_RADIUS: f64 = 3.0;

// ============================================================================
// Simulation
// ============================================================================

/// Default number of control events in a simulation run.
pub const SIMULATION_DEFAULT_STEPS: u32 = 50;
