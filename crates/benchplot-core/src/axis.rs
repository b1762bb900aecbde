// File: crates/benchplot-core/src/axis.rs
// Summary: Axis model (label, domain, ticks) and the axis-frame helper shared by every chart.

use crate::geometry::Rect;
use crate::grid::make_ticks;
use crate::primitive::{Anchor, Font, Primitive, Scene, Stroke, Text};
use crate::scale::{AxisRange, LinearScale};
use crate::theme::Theme;

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub range: AxisRange,
    pub ticks: Vec<f64>,
}

impl Axis {
    /// Axis with ticks from [`make_ticks`].
    pub fn nice(label: impl Into<String>, range: AxisRange, target_steps: usize) -> Self {
        let ticks = make_ticks(range.min(), range.max(), target_steps);
        Self { label: label.into(), range, ticks }
    }

    /// Axis with a hand-picked tick list (fixed-domain charts).
    pub fn fixed(label: impl Into<String>, range: AxisRange, ticks: &[f64]) -> Self {
        Self { label: label.into(), range, ticks: ticks.to_vec() }
    }

    pub fn horizontal(&self, area: Rect) -> LinearScale { LinearScale::horizontal(self.range, area) }
    pub fn vertical(&self, area: Rect) -> LinearScale { LinearScale::vertical(self.range, area) }
}

/// Tick labels print the shortest exact form (`92`, `92.5`).
pub fn format_tick(v: f64) -> String {
    format!("{v}")
}

/// Per-chart stroke alphas and tick-label metrics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisStyle {
    pub grid_alpha: f32,
    pub axis_alpha: f32,
    pub axis_width: f64,
    pub tick_font_size: f64,
    /// Distance from the y axis to the right edge of its tick labels.
    pub tick_gap: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self { grid_alpha: 0.22, axis_alpha: 0.56, axis_width: 1.2, tick_font_size: 12.0, tick_gap: 10.0 }
    }
}

/// Draws gridlines, tick labels, axis lines and axis titles around one plot area.
pub struct AxisFrame<'a> {
    pub area: Rect,
    pub theme: &'a Theme,
    pub style: AxisStyle,
}

impl<'a> AxisFrame<'a> {
    pub fn new(area: Rect, theme: &'a Theme, style: AxisStyle) -> Self {
        Self { area, theme, style }
    }

    fn tick_font(&self) -> Font {
        Font::new(self.theme.body_font, self.style.tick_font_size)
    }

    fn label(&self, x: f64, y: f64, content: String, anchor: Anchor) -> Primitive {
        Primitive::Text(Text {
            x,
            y,
            content,
            font: self.tick_font(),
            anchor,
            fill: self.theme.tick_label,
            rotate: None,
        })
    }

    /// One horizontal gridline plus a right-aligned label per tick.
    pub fn horizontal_grid(&self, scene: &mut Scene, ticks: &[f64], y: &LinearScale) {
        let stroke = Stroke::solid(self.theme.grid.with_alpha(self.style.grid_alpha), 1.0);
        for &tick in ticks {
            let py = y.to_px(tick);
            scene.push(Primitive::line(self.area.left, py, self.area.right, py, stroke.clone()));
            scene.push(self.label(self.area.left - self.style.tick_gap, py + 4.0, format_tick(tick), Anchor::End));
        }
    }

    /// One vertical gridline plus a centred label below the plot per `(x_px, label)`.
    pub fn vertical_grid<I>(&self, scene: &mut Scene, columns: I, grid_alpha: f32)
    where
        I: IntoIterator<Item = (f64, String)>,
    {
        let stroke = Stroke::solid(self.theme.grid.with_alpha(grid_alpha), 1.0);
        for (px, text) in columns {
            scene.push(Primitive::line(px, self.area.top, px, self.area.bottom, stroke.clone()));
            scene.push(self.label(px, self.area.bottom + 20.0, text, Anchor::Middle));
        }
    }

    /// X axis along the bottom edge, then Y axis along the left edge.
    pub fn axis_lines(&self, scene: &mut Scene) {
        let stroke = Stroke::solid(self.theme.grid.with_alpha(self.style.axis_alpha), self.style.axis_width);
        let a = self.area;
        scene.push(Primitive::line(a.left, a.bottom, a.right, a.bottom, stroke.clone()));
        scene.push(Primitive::line(a.left, a.top, a.left, a.bottom, stroke));
    }

    /// Vertical title rotated -90° at a fixed offset from the canvas edge.
    pub fn y_title(&self, scene: &mut Scene, content: &str) {
        let (x, y) = (18.0, self.area.center_y());
        scene.push(Primitive::Text(Text {
            x,
            y,
            content: content.to_string(),
            font: Font::new(self.theme.body_font, 12.0),
            anchor: Anchor::Middle,
            fill: self.theme.tick_label,
            rotate: Some(-90.0),
        }));
    }

    /// Horizontal title centred under the plot, 14px above the canvas bottom.
    pub fn x_title(&self, scene: &mut Scene, content: &str, canvas_height: f64) {
        scene.push(Primitive::Text(Text {
            x: self.area.center_x(),
            y: canvas_height - 14.0,
            content: content.to_string(),
            font: Font::new(self.theme.body_font, 12.0),
            anchor: Anchor::Middle,
            fill: self.theme.tick_label,
            rotate: None,
        }));
    }
}
