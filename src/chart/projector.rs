//! History → canvas coordinate projection

use tracing::debug;

use crate::config::defaults::{CHART_LABEL_OFFSET, CHART_MARKER_RADIUS};
use crate::types::ChartPoint;

use super::{
    AxisLabel, CanvasConfig, ChartDomains, ChartGeometry, ChartSeries, LineStyle, Marker, Point,
    Polyline, Segment, ValueDomain,
};

/// Project the trend history onto the canvas.
///
/// Points are spread evenly across the interior width; a lone point sits on
/// the left interior edge. Both y-scales are inverted so larger values sit
/// higher. Out-of-domain values are not clamped, only reported in
/// `out_of_domain`.
#[allow(clippy::cast_precision_loss)]
pub fn project_chart(
    points: &[ChartPoint],
    canvas: &CanvasConfig,
    domains: &ChartDomains,
) -> ChartGeometry {
    let p = canvas.padding;
    let baseline = canvas.baseline_y();

    let step = if points.len() > 1 {
        canvas.interior_width() / (points.len() - 1) as f64
    } else {
        0.0
    };
    let x_positions: Vec<f64> = (0..points.len()).map(|i| p + i as f64 * step).collect();

    let scale = |domain: &ValueDomain, value: f64| {
        baseline - domain.normalize(value) * canvas.interior_height()
    };

    let line = |series: ChartSeries,
                style: LineStyle,
                domain: &ValueDomain,
                value: fn(&ChartPoint) -> f64| Polyline {
        series,
        style,
        points: points
            .iter()
            .zip(&x_positions)
            .map(|(pt, &x)| Point::new(x, scale(domain, value(pt))))
            .collect(),
    };

    let milk_yield_line = line(
        ChartSeries::MilkYield,
        LineStyle::Solid,
        &domains.milk_yield,
        |pt: &ChartPoint| pt.milk_yield,
    );
    let target_line = line(
        ChartSeries::Target,
        LineStyle::Dashed,
        &domains.milk_yield,
        |pt: &ChartPoint| pt.target,
    );
    let cost_line = line(ChartSeries::Cost, LineStyle::Solid, &domains.cost, |pt: &ChartPoint| {
        pt.cost
    });

    let mut markers = Vec::with_capacity(points.len() * 2);
    for (index, (yield_pt, cost_pt)) in milk_yield_line
        .points
        .iter()
        .zip(&cost_line.points)
        .enumerate()
    {
        markers.push(Marker {
            series: ChartSeries::MilkYield,
            index,
            center: *yield_pt,
            radius: CHART_MARKER_RADIUS,
        });
        markers.push(Marker {
            series: ChartSeries::Cost,
            index,
            center: *cost_pt,
            radius: CHART_MARKER_RADIUS,
        });
    }

    let labels = points
        .iter()
        .zip(&x_positions)
        .map(|(pt, &x)| AxisLabel {
            text: pt.label.clone(),
            position: Point::new(x, baseline + CHART_LABEL_OFFSET),
        })
        .collect();

    let out_of_domain: Vec<usize> = points
        .iter()
        .enumerate()
        .filter(|(_, pt)| {
            !domains.milk_yield.contains(pt.milk_yield)
                || !domains.milk_yield.contains(pt.target)
                || !domains.cost.contains(pt.cost)
        })
        .map(|(i, _)| i)
        .collect();

    if !out_of_domain.is_empty() {
        debug!(points = ?out_of_domain, "Chart points outside axis domains");
    }

    ChartGeometry {
        x_positions,
        y_axis: Segment {
            from: Point::new(p, p),
            to: Point::new(p, baseline),
        },
        x_axis: Segment {
            from: Point::new(p, baseline),
            to: Point::new(canvas.width - p, baseline),
        },
        milk_yield_line,
        target_line,
        cost_line,
        markers,
        labels,
        out_of_domain,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn seeded() -> Vec<ChartPoint> {
        vec![
            ChartPoint::new("Jan", 8650.0, 9000.0, 0.38),
            ChartPoint::new("Feb", 8700.0, 9000.0, 0.37),
            ChartPoint::new("Mar", 8720.0, 9000.0, 0.37),
            ChartPoint::new("Apr", 8750.0, 9000.0, 0.37),
        ]
    }

    fn project(points: &[ChartPoint]) -> ChartGeometry {
        project_chart(points, &CanvasConfig::default(), &ChartDomains::default())
    }

    #[test]
    fn test_x_positions_span_interior() {
        let g = project(&seeded());
        assert_eq!(g.x_positions, vec![40.0, 180.0, 320.0, 460.0]);
    }

    #[test]
    fn test_y_scales_are_inverted() {
        let g = project(&seeded());
        // 8750 is halfway up the 8000..9500 domain: 260 − 0.5 × 220
        assert!((g.milk_yield_line.points[3].y - 150.0).abs() < EPS);
        // 9000 target: 260 − (1000/1500) × 220
        assert!((g.target_line.points[0].y - (260.0 - 220.0 * 2.0 / 3.0)).abs() < 1e-6);
        // 0.37 cost: 260 − (0.12/0.25) × 220 = 154.4
        assert!((g.cost_line.points[1].y - 154.4).abs() < 1e-6);
        assert!(g.milk_yield_line.points[0].y > g.milk_yield_line.points[3].y);
    }

    #[test]
    fn test_axes_anchor_at_padding() {
        let g = project(&seeded());
        assert_eq!(g.y_axis.from, Point::new(40.0, 40.0));
        assert_eq!(g.y_axis.to, Point::new(40.0, 260.0));
        assert_eq!(g.x_axis.from, Point::new(40.0, 260.0));
        assert_eq!(g.x_axis.to, Point::new(460.0, 260.0));
    }

    #[test]
    fn test_line_styles_and_markers() {
        let g = project(&seeded());
        assert_eq!(g.target_line.style, LineStyle::Dashed);
        assert_eq!(g.milk_yield_line.style, LineStyle::Solid);
        assert_eq!(g.cost_line.style, LineStyle::Solid);
        assert_eq!(g.markers.len(), 8);
        assert!(g.markers.iter().all(|m| m.series != ChartSeries::Target));
        assert_eq!(g.markers[2].index, 1);
        assert_eq!(g.markers[2].series, ChartSeries::MilkYield);
    }

    #[test]
    fn test_labels_sit_below_axis() {
        let g = project(&seeded());
        let texts: Vec<&str> = g.labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["Jan", "Feb", "Mar", "Apr"]);
        assert!(g.labels.iter().all(|l| (l.position.y - 275.0).abs() < EPS));
    }

    #[test]
    fn test_single_point_sits_on_left_edge() {
        let g = project(&[ChartPoint::new("Now", 8750.0, 9000.0, 0.37)]);
        assert_eq!(g.x_positions, vec![40.0]);
        assert_eq!(g.milk_yield_line.points[0].x, 40.0);
        assert_eq!(g.cost_line.points[0].x, 40.0);
        assert!(g.milk_yield_line.points.iter().all(|p| p.y.is_finite()));
        assert_eq!(g.milk_yield_line.to_path_data(), "M 40 150");
    }

    #[test]
    fn test_empty_history_draws_axes_only() {
        let g = project(&[]);
        assert!(g.x_positions.is_empty());
        assert!(g.markers.is_empty());
        assert!(g.labels.is_empty());
        assert_eq!(g.cost_line.to_path_data(), "");
        assert_eq!(g.x_axis.to, Point::new(460.0, 260.0));
    }

    #[test]
    fn test_out_of_domain_is_flagged_not_clamped() {
        let points = vec![
            ChartPoint::new("a", 9800.0, 9000.0, 0.37),
            ChartPoint::new("b", 8700.0, 9000.0, 0.37),
            ChartPoint::new("c", 8700.0, 9000.0, 0.20),
        ];
        let g = project(&points);
        assert_eq!(g.out_of_domain, vec![0, 2]);
        // Above the domain max lands above the top padding
        assert!(g.milk_yield_line.points[0].y < 40.0);
        // Below the cost min lands below the x-axis
        assert!(g.cost_line.points[2].y > 260.0);
    }

    #[test]
    fn test_path_data_connects_points() {
        let points = vec![
            ChartPoint::new("a", 8000.0, 9500.0, 0.25),
            ChartPoint::new("b", 9500.0, 9500.0, 0.50),
        ];
        let g = project(&points);
        assert_eq!(g.milk_yield_line.to_path_data(), "M 40 260 L 460 40");
        assert_eq!(g.target_line.to_path_data(), "M 40 40 L 460 40");
    }
}
