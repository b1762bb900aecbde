// File: crates/benchplot-core/src/scatter.rs
// Summary: Accuracy-vs-throughput scatter plots, with a data-derived domain or a fixed one.

use std::collections::BTreeMap;

use tracing::debug;

use crate::axis::{format_tick, Axis, AxisFrame, AxisStyle};
use crate::chart::ChartRenderer;
use crate::data::{comparison_table, Dataset, MethodPoint};
use crate::error::{ChartError, Result};
use crate::geometry::Point;
use crate::primitive::{Anchor, ChartOutput, ChartText, Color, Font, Primitive, Scene, Stroke, Text};
use crate::scale::{AxisRange, LinearScale};
use crate::theme::Theme;
use crate::types::{Insets, RenderOptions};

pub const FPS_TITLE: &str = "Frames Per Second (FPS)";

/// Label displacement `(dx, dy)` from a point centre, looked up by method name.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelOffsets {
    pub default: (f64, f64),
    pub highlighted: (f64, f64),
    pub by_method: BTreeMap<String, (f64, f64)>,
}

impl LabelOffsets {
    pub fn uniform(default: (f64, f64), highlighted: (f64, f64)) -> Self {
        Self { default, highlighted, by_method: BTreeMap::new() }
    }

    pub fn with(mut self, method: &str, offset: (f64, f64)) -> Self {
        self.by_method.insert(method.to_string(), offset);
        self
    }

    pub fn get(&self, method: &str, highlighted: bool) -> (f64, f64) {
        match self.by_method.get(method) {
            Some(&o) => o,
            None if highlighted => self.highlighted,
            None => self.default,
        }
    }
}

/// Which theme colours the non-highlighted points use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointPalette {
    Primary,
    Secondary,
}

impl PointPalette {
    /// `(fill, stroke, label)` for ordinary points.
    fn colors(self, theme: &Theme) -> (Color, Color, Color) {
        match self {
            PointPalette::Primary => (theme.primary, theme.point_outline.with_alpha(0.72), theme.point_label),
            PointPalette::Secondary => (theme.secondary, theme.secondary_label, theme.secondary_label),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ScatterDomain {
    /// Accuracy from the score extrema (clamped to `[floor, ceil]`), throughput from zero
    /// to the max rounded up to a multiple of ten plus ten.
    Derived { floor: f64, ceil: f64, x_target_ticks: usize, y_target_ticks: usize },
    Fixed { x: (f64, f64), x_ticks: Vec<f64>, y: (f64, f64), y_ticks: Vec<f64> },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScatterLayout {
    pub insets: Insets,
    pub domain: ScatterDomain,
    pub radius: f64,
    pub highlight_radius: f64,
    /// Extra radius of the translucent halo behind the highlighted point.
    pub halo_pad: f64,
    pub palette: PointPalette,
    pub labels: LabelOffsets,
    /// The trend segment starts this far above the domain's lower-left corner.
    pub trend_lift: f64,
    pub axis: AxisStyle,
}

impl ScatterLayout {
    pub fn derived() -> Self {
        Self {
            insets: Insets::new(58, 30, 28, 58),
            domain: ScatterDomain::Derived { floor: 70.0, ceil: 100.0, x_target_ticks: 6, y_target_ticks: 5 },
            radius: 5.2,
            highlight_radius: 8.0,
            halo_pad: 7.0,
            palette: PointPalette::Primary,
            labels: LabelOffsets::uniform((8.0, -8.0), (12.0, -10.0)),
            trend_lift: 2.0,
            axis: AxisStyle { grid_alpha: 0.18, ..AxisStyle::default() },
        }
    }

    pub fn comparison() -> Self {
        Self {
            domain: ScatterDomain::Fixed {
                x: (91.0, 100.0),
                x_ticks: vec![92.0, 93.0, 94.0, 95.0, 96.0, 97.0, 98.0, 99.0, 100.0],
                y: (0.0, 95.0),
                y_ticks: vec![0.0, 20.0, 40.0, 60.0, 80.0],
            },
            radius: 5.5,
            halo_pad: 8.0,
            palette: PointPalette::Secondary,
            labels: LabelOffsets::uniform((8.0, -8.0), (12.0, -10.0))
                .with("GLAD", (8.0, -8.0))
                .with("TransFusion", (8.0, 14.0))
                .with("OmiAD", (8.0, -8.0))
                .with("DeCoDiff", (8.0, 14.0))
                .with("MDM", (8.0, -8.0))
                .with("InvAD (Ours)", (12.0, -10.0)),
            ..Self::derived()
        }
    }

    /// Resolve both axes for `points`.
    pub fn axes(&self, points: &[MethodPoint], x_label: &str) -> Result<(Axis, Axis)> {
        match &self.domain {
            ScatterDomain::Derived { floor, ceil, x_target_ticks, y_target_ticks } => {
                let (lo, hi) = crate::data::extent(points.iter().map(|p| p.score)).ok_or(ChartError::EmptyDataset)?;
                let (_, fps_max) = crate::data::extent(points.iter().map(|p| p.fps)).ok_or(ChartError::EmptyDataset)?;
                let x = AxisRange::clamped_percent(lo, hi, 1.0, 1.0, *floor, *ceil)?;
                let y_max = 20f64.max((fps_max / 10.0).ceil() * 10.0 + 10.0);
                let y = AxisRange::new(0.0, y_max)?;
                Ok((Axis::nice(x_label, x, *x_target_ticks), Axis::nice(FPS_TITLE, y, *y_target_ticks)))
            }
            ScatterDomain::Fixed { x, x_ticks, y, y_ticks } => Ok((
                Axis::fixed(x_label, AxisRange::new(x.0, x.1)?, x_ticks),
                Axis::fixed(FPS_TITLE, AxisRange::new(y.0, y.1)?, y_ticks),
            )),
        }
    }
}

/// Scatter of a benchmark dataset; domain follows the data.
pub struct SpeedScatterChart<'a> {
    pub dataset: &'a Dataset,
    pub layout: ScatterLayout,
}

impl<'a> SpeedScatterChart<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset, layout: ScatterLayout::derived() }
    }
}

impl ChartRenderer for SpeedScatterChart<'_> {
    fn render(&self, opts: &RenderOptions) -> Result<ChartOutput> {
        let ds = self.dataset;
        let out = draw_scatter(&ds.points, &ds.metric_label, &ds.metric_short, &self.layout, opts)?;
        debug!(dataset = %ds.name, primitives = out.scene.len(), "rendered speed scatter");
        Ok(out)
    }
}

/// Scatter of the diffusion-method comparison table on a fixed domain.
pub struct ComparisonScatterChart {
    pub points: Vec<MethodPoint>,
    pub metric_label: String,
    pub metric_short: String,
    pub layout: ScatterLayout,
}

impl Default for ComparisonScatterChart {
    fn default() -> Self {
        Self {
            points: comparison_table(),
            metric_label: "Image-level AU-ROC (%)".into(),
            metric_short: "AU-ROC".into(),
            layout: ScatterLayout::comparison(),
        }
    }
}

impl ChartRenderer for ComparisonScatterChart {
    fn render(&self, opts: &RenderOptions) -> Result<ChartOutput> {
        let out = draw_scatter(&self.points, &self.metric_label, &self.metric_short, &self.layout, opts)?;
        debug!(primitives = out.scene.len(), "rendered comparison scatter");
        Ok(out)
    }
}

/// Tooltip annotation carried by every point.
pub fn tooltip(point: &MethodPoint, metric_short: &str) -> String {
    format!("{}: {} {:.1}, FPS {:.1}", point.method, metric_short, point.score, point.fps)
}

fn draw_scatter(
    points: &[MethodPoint],
    metric_label: &str,
    metric_short: &str,
    layout: &ScatterLayout,
    opts: &RenderOptions,
) -> Result<ChartOutput> {
    let theme = &opts.theme;
    let plot = layout.insets.plot_area(opts.width, opts.height);
    let (x_axis, y_axis) = layout.axes(points, metric_label)?;
    let x = x_axis.horizontal(plot);
    let y = y_axis.vertical(plot);
    let frame = AxisFrame::new(plot, theme, layout.axis);
    let mut scene = Scene::new(opts.width, opts.height);

    frame.vertical_grid(
        &mut scene,
        x_axis.ticks.iter().map(|&t| (x.to_px(t), format_tick(t))),
        layout.axis.grid_alpha,
    );
    frame.horizontal_grid(&mut scene, &y_axis.ticks, &y);

    if let Some(own) = points.iter().find(|p| p.is_distinguished()) {
        trend_segment(&mut scene, theme, &x, &y, own, layout.trend_lift);
    }

    let (fill, stroke, label_fill) = layout.palette.colors(theme);
    for point in points {
        let ours = point.is_distinguished();
        let center = Point::new(x.to_px(point.score), y.to_px(point.fps));
        let r = if ours { layout.highlight_radius } else { layout.radius };
        if ours {
            scene.push(Primitive::Circle {
                center,
                r: r + layout.halo_pad,
                fill: theme.highlight.with_alpha(0.22),
                stroke: None,
                title: None,
            });
        }
        scene.push(Primitive::Circle {
            center,
            r,
            fill: if ours { theme.highlight } else { fill },
            stroke: Some(Stroke::solid(if ours { theme.highlight_light } else { stroke }, 1.5)),
            title: Some(tooltip(point, metric_short)),
        });

        let (dx, dy) = layout.labels.get(&point.method, ours);
        let font = if ours {
            Font::new(theme.body_font, 13.0).weight(700)
        } else {
            Font::new(theme.body_font, 11.0).weight(500)
        };
        scene.push(Primitive::Text(Text {
            x: center.x + dx,
            y: center.y + dy,
            content: point.method.clone(),
            font,
            anchor: Anchor::Start,
            fill: if ours { theme.highlight_light } else { label_fill },
            rotate: None,
        }));
    }

    frame.axis_lines(&mut scene);
    frame.x_title(&mut scene, &x_axis.label, opts.height);
    frame.y_title(&mut scene, &y_axis.label);

    Ok(ChartOutput {
        scene,
        text: ChartText {
            title_x: Some(x_axis.label),
            title_y: Some(y_axis.label),
            ..ChartText::default()
        },
    })
}

/// Dashed emphasis line from the lower-left corner to the highlighted point; not a fit.
fn trend_segment(scene: &mut Scene, theme: &Theme, x: &LinearScale, y: &LinearScale, own: &MethodPoint, lift: f64) {
    let stroke = Stroke::solid(theme.highlight.with_alpha(0.28), 2.0).dashed(8.0, 6.0);
    scene.push(Primitive::line(
        x.to_px(x.domain.min()),
        y.to_px(y.domain.min() + lift),
        x.to_px(own.score),
        y.to_px(own.fps),
        stroke,
    ));
}
