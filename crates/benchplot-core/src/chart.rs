// File: crates/benchplot-core/src/chart.rs
// Summary: Renderer trait, surface identifiers, and legend helpers shared by chart modules.

use crate::error::Result;
use crate::primitive::{Anchor, ChartOutput, Color, Fill, Font, Primitive, Scene, Stroke, Text};
use crate::theme::Theme;
use crate::types::RenderOptions;

/// Pure geometry step: data in, ordered primitives out. Applying them is the host's job.
pub trait ChartRenderer {
    fn render(&self, opts: &RenderOptions) -> Result<ChartOutput>;
}

/// Identifiers of the drawing surfaces and text targets a host may mount.
pub mod surface {
    pub const BAR_COMPARISON: &str = "bar-comparison";
    pub const SPEED_SCATTER: &str = "speed-scatter";
    pub const COMPARISON_SCATTER: &str = "comparison-scatter";
    pub const GENERALIZATION: &str = "generalization";
    pub const ARCH_ABLATION: &str = "arch-ablation";
    pub const SCORING_ABLATION: &str = "scoring-ablation";

    pub const BAR_TITLE: &str = "bar-title";
    pub const SCATTER_TITLE: &str = "scatter-title";

    /// Every chart surface, dataset-driven ones first.
    pub const ALL: [&str; 6] = [
        BAR_COMPARISON,
        SPEED_SCATTER,
        COMPARISON_SCATTER,
        GENERALIZATION,
        ARCH_ABLATION,
        SCORING_ABLATION,
    ];
}

/// Horizontal row of colour swatches with labels, starting at `(x, y)`.
pub(crate) fn swatch_legend(scene: &mut Scene, theme: &Theme, items: &[(&str, Color)], x: f64, y: f64, spacing: f64) {
    let mut lx = x;
    for &(name, color) in items {
        scene.push(Primitive::Rect {
            x: lx,
            y: y - 8.0,
            width: 12.0,
            height: 12.0,
            rx: 3.0,
            fill: Fill::Solid(color),
            stroke: None,
        });
        scene.push(Primitive::Text(Text {
            x: lx + 18.0,
            y: y + 2.0,
            content: name.to_string(),
            font: Font::new(theme.body_font, 11.0),
            anchor: Anchor::Start,
            fill: theme.legend_label,
            rotate: None,
        }));
        lx += spacing;
    }
}

/// Vertical stack of line samples with labels; highlighted rows get a heavier line and accent text.
pub(crate) fn line_legend(
    scene: &mut Scene,
    theme: &Theme,
    items: &[(&str, Color, bool)],
    x: f64,
    y: f64,
    row_height: f64,
) {
    let mut ly = y;
    for &(name, color, ours) in items {
        let width = if ours { 3.0 } else { 2.2 };
        scene.push(Primitive::line(x, ly, x + 24.0, ly, Stroke::solid(color, width)));
        scene.push(Primitive::Text(Text {
            x: x + 30.0,
            y: ly + 4.0,
            content: name.to_string(),
            font: Font::new(theme.body_font, 11.5),
            anchor: Anchor::Start,
            fill: if ours { theme.highlight_light } else { theme.point_label },
            rotate: None,
        }));
        ly += row_height;
    }
}

/// Bar value labels print one decimal.
pub(crate) fn format_value(v: f64) -> String {
    format!("{v:.1}")
}

/// Centred text under a bar or group.
pub(crate) fn category_label(theme: &Theme, x: f64, y: f64, content: &str, size: f64, fill: Color) -> Primitive {
    Primitive::Text(Text {
        x,
        y,
        content: content.to_string(),
        font: Font::new(theme.body_font, size),
        anchor: Anchor::Middle,
        fill,
        rotate: None,
    })
}
