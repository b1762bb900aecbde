// File: crates/benchplot-core/src/line.rs
// Summary: Multi-series line plot over an ordinal step axis (scoring ablation).

use tracing::debug;

use crate::axis::{Axis, AxisFrame, AxisStyle};
use crate::chart::{line_legend, ChartRenderer};
use crate::data::{scoring_ablation, NamedSeries, SCORING_STEPS};
use crate::error::Result;
use crate::geometry::Point;
use crate::grid::linspace;
use crate::primitive::{ChartOutput, ChartText, Primitive, Scene, Stroke};
use crate::scale::AxisRange;
use crate::types::{Insets, RenderOptions};

#[derive(Clone, Debug, PartialEq)]
pub struct LineLayout {
    pub insets: Insets,
    pub domain: (f64, f64),
    pub ticks: Vec<f64>,
    pub column_grid_alpha: f32,
    pub line_width: f64,
    pub highlight_line_width: f64,
    pub marker_radius: f64,
    pub highlight_marker_radius: f64,
    /// Legend column starts this far left of the plot's right edge.
    pub legend_inset: f64,
    pub legend_row: f64,
    pub axis: AxisStyle,
}

impl Default for LineLayout {
    fn default() -> Self {
        Self {
            insets: Insets::new(62, 28, 38, 64),
            domain: (80.0, 100.0),
            ticks: vec![80.0, 84.0, 88.0, 92.0, 96.0, 100.0],
            column_grid_alpha: 0.15,
            line_width: 2.3,
            highlight_line_width: 3.2,
            marker_radius: 3.8,
            highlight_marker_radius: 4.8,
            legend_inset: 188.0,
            legend_row: 18.0,
            axis: AxisStyle::default(),
        }
    }
}

pub struct LineSeriesChart {
    pub steps: Vec<String>,
    pub series: Vec<NamedSeries>,
    pub x_label: String,
    pub y_label: String,
    pub layout: LineLayout,
}

impl Default for LineSeriesChart {
    fn default() -> Self {
        Self {
            steps: SCORING_STEPS.iter().map(|s| s.to_string()).collect(),
            series: scoring_ablation(),
            x_label: "Total Diffusion Steps (S)".into(),
            y_label: "Image-level AU-ROC (%)".into(),
            layout: LineLayout::default(),
        }
    }
}

impl ChartRenderer for LineSeriesChart {
    fn render(&self, opts: &RenderOptions) -> Result<ChartOutput> {
        let theme = &opts.theme;
        let l = &self.layout;
        let plot = l.insets.plot_area(opts.width, opts.height);
        let axis = Axis::fixed(&*self.y_label, AxisRange::new(l.domain.0, l.domain.1)?, &l.ticks);
        let y = axis.vertical(plot);
        let columns = linspace(plot.left, plot.right, self.steps.len());
        let frame = AxisFrame::new(plot, theme, l.axis);
        let mut scene = Scene::new(opts.width, opts.height);

        frame.horizontal_grid(&mut scene, &axis.ticks, &y);
        frame.vertical_grid(
            &mut scene,
            columns.iter().copied().zip(self.steps.iter().cloned()),
            l.column_grid_alpha,
        );

        let outline = Stroke::solid(theme.background.with_alpha(0.9), 1.2);
        for s in &self.series {
            let ours = s.is_ours();
            // values past the last step label have no column and are dropped
            let points: Vec<Point> = columns.iter().zip(&s.values).map(|(&px, &v)| Point::new(px, y.to_px(v))).collect();
            let width = if ours { l.highlight_line_width } else { l.line_width };
            if !points.is_empty() {
                scene.push(Primitive::Polyline { points: points.clone(), stroke: Stroke::solid(s.color, width).rounded() });
            }

            let r = if ours { l.highlight_marker_radius } else { l.marker_radius };
            for center in points {
                scene.push(Primitive::Circle { center, r, fill: s.color, stroke: Some(outline.clone()), title: None });
            }
        }

        frame.axis_lines(&mut scene);
        frame.x_title(&mut scene, &self.x_label, opts.height);
        frame.y_title(&mut scene, &axis.label);

        let legend: Vec<(&str, _, bool)> = self.series.iter().map(|s| (s.name.as_str(), s.color, s.is_ours())).collect();
        line_legend(&mut scene, theme, &legend, plot.right - l.legend_inset, plot.top - 16.0, l.legend_row);

        debug!(series = self.series.len(), primitives = scene.len(), "rendered line series");
        Ok(ChartOutput {
            scene,
            text: ChartText {
                title_x: Some(self.x_label.clone()),
                title_y: Some(axis.label),
                legend: self.series.iter().map(|s| s.name.clone()).collect(),
                ..ChartText::default()
            },
        })
    }
}
