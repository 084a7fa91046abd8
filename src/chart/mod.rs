//! Chart Projector
//!
//! Maps the trend history onto canvas coordinates for a rendering layer:
//! two axis guide lines, three polylines (yield, dashed target, cost),
//! per-point markers and x-axis labels. Pure geometry; nothing here draws.

mod projector;

pub use projector::project_chart;

use serde::{Deserialize, Serialize};

use crate::config::defaults;

// ============================================================================
// Canvas and Domains
// ============================================================================

/// Canvas size and padding in pixels
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CanvasConfig {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: defaults::CHART_WIDTH,
            height: defaults::CHART_HEIGHT,
            padding: defaults::CHART_PADDING,
        }
    }
}

impl CanvasConfig {
    pub fn interior_width(&self) -> f64 {
        self.width - 2.0 * self.padding
    }

    pub fn interior_height(&self) -> f64 {
        self.height - 2.0 * self.padding
    }

    /// Y coordinate of the x-axis (bottom of the plot interior)
    pub fn baseline_y(&self) -> f64 {
        self.height - self.padding
    }
}

/// Closed value range mapped onto the plot interior height
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ValueDomain {
    pub min: f64,
    pub max: f64,
}

impl ValueDomain {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Position of `value` within the domain, 0.0 at `min` and 1.0 at `max`.
    /// Not clamped. A zero-width domain maps everything to 0.0.
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.span();
        if span <= 0.0 {
            return 0.0;
        }
        (value - self.min) / span
    }
}

/// Y-axis domains for the two scales on the chart
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ChartDomains {
    /// Shared by the yield and target lines
    pub milk_yield: ValueDomain,
    pub cost: ValueDomain,
}

impl Default for ChartDomains {
    fn default() -> Self {
        Self {
            milk_yield: ValueDomain::new(defaults::CHART_YIELD_MIN, defaults::CHART_YIELD_MAX),
            cost: ValueDomain::new(defaults::CHART_COST_MIN, defaults::CHART_COST_MAX),
        }
    }
}

// ============================================================================
// Geometry
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Straight guide line
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// Plotted series
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChartSeries {
    MilkYield,
    Target,
    Cost,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// One series drawn as connected straight segments
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Polyline {
    pub series: ChartSeries,
    pub style: LineStyle,
    pub points: Vec<Point>,
}

impl Polyline {
    /// SVG path data: `M x0 y0 L x1 y1 L x2 y2 ...`. Empty for no points.
    pub fn to_path_data(&self) -> String {
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let cmd = if i == 0 { 'M' } else { 'L' };
                format!("{cmd} {} {}", p.x, p.y)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Circle drawn at a data point
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Marker {
    pub series: ChartSeries,
    /// Index into the projected history
    pub index: usize,
    pub center: Point,
    pub radius: f64,
}

/// X-axis label, anchored at its horizontal centre
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AxisLabel {
    pub text: String,
    pub position: Point,
}

/// Everything a renderer needs to draw the trend chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartGeometry {
    pub x_positions: Vec<f64>,
    pub y_axis: Segment,
    pub x_axis: Segment,
    pub milk_yield_line: Polyline,
    pub target_line: Polyline,
    pub cost_line: Polyline,
    /// Yield and cost markers, interleaved per point
    pub markers: Vec<Marker>,
    pub labels: Vec<AxisLabel>,
    /// Indices of points with any value outside its domain. These are
    /// projected unclamped and may land outside the plot interior.
    pub out_of_domain: Vec<usize>,
}
