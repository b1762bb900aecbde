// File: crates/benchplot-core/src/bar.rs
// Summary: Single-metric bar comparison, one bar per method, y domain derived from the scores.

use tracing::debug;

use crate::axis::{Axis, AxisFrame, AxisStyle};
use crate::chart::{category_label, format_value, ChartRenderer};
use crate::data::Dataset;
use crate::error::{ChartError, Result};
use crate::geometry::Slots;
use crate::primitive::{Anchor, ChartOutput, ChartText, Fill, Font, LinearGradient, Primitive, Scene, Stroke, Text};
use crate::scale::AxisRange;
use crate::types::{Insets, RenderOptions};

#[derive(Clone, Debug, PartialEq)]
pub struct BarLayout {
    pub insets: Insets,
    pub target_ticks: usize,
    /// Lower clamp for the derived y minimum.
    pub floor: f64,
    /// Upper clamp for the derived y maximum.
    pub ceil: f64,
    /// Headroom below the lowest score before flooring.
    pub pad_below: f64,
    /// Headroom above the highest score before ceiling.
    pub pad_above: f64,
    pub max_bar_width: f64,
    /// Bar width as a fraction of its slot, before the cap.
    pub bar_fraction: f64,
    pub corner_radius: f64,
    pub axis: AxisStyle,
}

impl Default for BarLayout {
    fn default() -> Self {
        Self {
            insets: Insets::new(62, 24, 28, 80),
            target_ticks: 6,
            floor: 70.0,
            ceil: 100.0,
            pad_below: 2.0,
            pad_above: 1.0,
            max_bar_width: 72.0,
            bar_fraction: 0.6,
            corner_radius: 8.0,
            axis: AxisStyle { grid_alpha: 0.22, axis_alpha: 0.52, ..AxisStyle::default() },
        }
    }
}

pub struct BarComparisonChart<'a> {
    pub dataset: &'a Dataset,
    pub layout: BarLayout,
}

impl<'a> BarComparisonChart<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset, layout: BarLayout::default() }
    }

    /// `[max(floor, ⌊min - 2⌋), min(ceil, ⌈max + 1⌉)]` with nice ticks.
    pub fn y_axis(&self) -> Result<Axis> {
        let (lo, hi) = self.dataset.score_extent().ok_or(ChartError::EmptyDataset)?;
        let l = &self.layout;
        let range = AxisRange::clamped_percent(lo, hi, l.pad_below, l.pad_above, l.floor, l.ceil)?;
        Ok(Axis::nice(self.dataset.metric_label.clone(), range, l.target_ticks))
    }

    /// Gradient id, unique per dataset so several charts can share one document.
    pub fn gradient_id(&self) -> String {
        let slug: String = self
            .dataset
            .name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
            .collect();
        format!("own-bar-gradient-{slug}")
    }

    pub fn bar_width(&self, plot_width: f64) -> f64 {
        let step = plot_width / self.dataset.points.len() as f64;
        self.layout.max_bar_width.min(step * self.layout.bar_fraction)
    }
}

impl ChartRenderer for BarComparisonChart<'_> {
    fn render(&self, opts: &RenderOptions) -> Result<ChartOutput> {
        let theme = &opts.theme;
        let l = &self.layout;
        let plot = l.insets.plot_area(opts.width, opts.height);
        let axis = self.y_axis()?;
        let y = axis.vertical(plot);
        let frame = AxisFrame::new(plot, theme, l.axis);
        let mut scene = Scene::new(opts.width, opts.height);

        let gradient_id = self.gradient_id();
        scene.push(Primitive::Gradient(LinearGradient {
            id: gradient_id.clone(),
            top: theme.highlight,
            bottom: theme.primary,
        }));

        frame.horizontal_grid(&mut scene, &axis.ticks, &y);

        let slots = Slots::new(plot, self.dataset.points.len());
        let bar_w = self.bar_width(plot.width());
        for (i, point) in self.dataset.points.iter().enumerate() {
            let ours = point.is_distinguished();
            let x = slots.centered(i, bar_w);
            let top = y.to_px(point.score);
            let (fill, stroke) = if ours {
                (Fill::Gradient(gradient_id.clone()), theme.highlight.with_alpha(0.95))
            } else {
                (Fill::Solid(theme.primary.with_alpha(0.58)), theme.primary.with_alpha(0.72))
            };
            scene.push(Primitive::Rect {
                x,
                y: top,
                width: bar_w,
                height: plot.bottom - top,
                rx: l.corner_radius,
                fill,
                stroke: Some(Stroke::solid(stroke, 1.0)),
            });

            let cx = x + bar_w / 2.0;
            scene.push(Primitive::Text(Text {
                x: cx,
                y: top - 8.0,
                content: format_value(point.score),
                font: Font::new(theme.body_font, 12.0).weight(if ours { 700 } else { 500 }),
                anchor: Anchor::Middle,
                fill: if ours { theme.highlight_light } else { theme.value_label },
                rotate: None,
            }));
            let label_fill = if ours { theme.highlight } else { theme.tick_label };
            scene.push(category_label(theme, cx, plot.bottom + 24.0, &point.method, 12.0, label_fill));
        }

        frame.axis_lines(&mut scene);
        frame.y_title(&mut scene, &axis.label);

        debug!(dataset = %self.dataset.name, primitives = scene.len(), "rendered bar comparison");
        Ok(ChartOutput {
            scene,
            text: ChartText { title_y: Some(axis.label), ..ChartText::default() },
        })
    }
}
