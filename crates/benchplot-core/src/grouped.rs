// File: crates/benchplot-core/src/grouped.rs
// Summary: Grouped bar charts: dual-axis generalization panels and the two-metric ablation.
// Notes:
// - Highlighting here is per record through the `ours` flag, not the method-name lookup.

use tracing::debug;

use crate::axis::{Axis, AxisFrame, AxisStyle};
use crate::chart::{category_label, format_value, swatch_legend, ChartRenderer};
use crate::data::{architecture_ablation, generalization_table, AblationRow, GeneralizationRow};
use crate::error::Result;
use crate::geometry::Slots;
use crate::primitive::{Anchor, ChartOutput, ChartText, Color, Fill, Font, Primitive, Scene, Stroke, Text};
use crate::scale::AxisRange;
use crate::theme::Theme;
use crate::types::{Insets, RenderOptions};

pub const DET_LEGEND: &str = "Det. AU-ROC";
pub const LOC_LEGEND: &str = "Loc. AU-ROC";
pub const FPS_LEGEND: &str = "FPS";

/// Rounded bar from `top` down to `baseline`, full opacity when highlighted.
fn bar(x: f64, top: f64, width: f64, baseline: f64, rx: f64, fill: Color, stroke: Color) -> Primitive {
    Primitive::Rect {
        x,
        y: top,
        width,
        height: baseline - top,
        rx,
        fill: Fill::Solid(fill),
        stroke: Some(Stroke::solid(stroke, 1.0)),
    }
}

/// `(fill, stroke)` for a bar of `base` colour.
fn bar_colors(base: Color, light: Color, ours: bool, dim_fill: f32, dim_stroke: f32) -> (Color, Color) {
    if ours {
        (base.with_alpha(0.95), light.with_alpha(0.95))
    } else {
        (base.with_alpha(dim_fill), base.with_alpha(dim_stroke))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DualAxisLayout {
    pub insets: Insets,
    /// Left panel share of the plot width.
    pub left_fraction: f64,
    pub gap: f64,
    pub accuracy: (f64, f64),
    pub accuracy_ticks: Vec<f64>,
    pub throughput: (f64, f64),
    pub throughput_ticks: Vec<f64>,
    pub max_pair_width: f64,
    pub pair_fraction: f64,
    /// Single accuracy bar width as a fraction of its pair.
    pub bar_fraction: f64,
    pub max_fps_width: f64,
    pub fps_fraction: f64,
    pub label_size: f64,
    pub legend_y: f64,
    pub legend_spacing: f64,
    pub axis: AxisStyle,
}

impl Default for DualAxisLayout {
    fn default() -> Self {
        Self {
            insets: Insets::new(54, 24, 34, 64),
            left_fraction: 0.58,
            gap: 28.0,
            accuracy: (90.0, 100.0),
            accuracy_ticks: vec![90.0, 92.0, 94.0, 96.0, 98.0, 100.0],
            throughput: (0.0, 90.0),
            throughput_ticks: vec![0.0, 20.0, 40.0, 60.0, 80.0],
            max_pair_width: 68.0,
            pair_fraction: 0.52,
            bar_fraction: 0.42,
            max_fps_width: 50.0,
            fps_fraction: 0.46,
            label_size: 10.8,
            legend_y: 32.0,
            legend_spacing: 110.0,
            axis: AxisStyle { grid_alpha: 0.2, tick_font_size: 11.5, tick_gap: 8.0, ..AxisStyle::default() },
        }
    }
}

/// Two accuracy bars per record on the left panel, one throughput bar on the right.
pub struct GeneralizationChart {
    pub rows: Vec<GeneralizationRow>,
    pub left_title: String,
    pub right_title: String,
    pub layout: DualAxisLayout,
}

impl Default for GeneralizationChart {
    fn default() -> Self {
        Self {
            rows: generalization_table(),
            left_title: "Detection/Localization AU-ROC".into(),
            right_title: "Inference Speed (FPS)".into(),
            layout: DualAxisLayout::default(),
        }
    }
}

impl GeneralizationChart {
    fn panel_title(theme: &Theme, x: f64, content: &str) -> Primitive {
        Primitive::Text(Text {
            x,
            y: 18.0,
            content: content.to_string(),
            font: Font::new(theme.display_font, 13.0),
            anchor: Anchor::Middle,
            fill: theme.panel_title,
            rotate: None,
        })
    }
}

impl ChartRenderer for GeneralizationChart {
    fn render(&self, opts: &RenderOptions) -> Result<ChartOutput> {
        let theme = &opts.theme;
        let l = &self.layout;
        let plot = l.insets.plot_area(opts.width, opts.height);
        let (left, right) = plot.split_columns(plot.width() * l.left_fraction, l.gap);

        let acc = Axis::fixed(&*self.left_title, AxisRange::new(l.accuracy.0, l.accuracy.1)?, &l.accuracy_ticks);
        let fps = Axis::fixed(&*self.right_title, AxisRange::new(l.throughput.0, l.throughput.1)?, &l.throughput_ticks);
        let y_acc = acc.vertical(left);
        let y_fps = fps.vertical(right);
        let left_frame = AxisFrame::new(left, theme, l.axis);
        let right_frame = AxisFrame::new(right, theme, l.axis);

        let mut scene = Scene::new(opts.width, opts.height);
        left_frame.horizontal_grid(&mut scene, &acc.ticks, &y_acc);
        right_frame.horizontal_grid(&mut scene, &fps.ticks, &y_fps);
        left_frame.axis_lines(&mut scene);
        right_frame.axis_lines(&mut scene);

        let n = self.rows.len();
        let left_slots = Slots::new(left, n);
        let right_slots = Slots::new(right, n);
        let pair_w = l.max_pair_width.min(left_slots.step * l.pair_fraction);
        let single_w = pair_w * l.bar_fraction;
        let fps_w = l.max_fps_width.min(right_slots.step * l.fps_fraction);
        let baseline = plot.bottom;

        for (i, row) in self.rows.iter().enumerate() {
            let group_left = left_slots.centered(i, pair_w);
            let (det_fill, det_stroke) = bar_colors(theme.primary, theme.primary_light, row.ours, 0.58, 0.7);
            let (loc_fill, loc_stroke) = bar_colors(theme.secondary, theme.secondary_light, row.ours, 0.6, 0.7);
            scene.push(bar(group_left, y_acc.to_px(row.det), single_w, baseline, 5.0, det_fill, det_stroke));
            scene.push(bar(
                group_left + pair_w - single_w,
                y_acc.to_px(row.loc),
                single_w,
                baseline,
                5.0,
                loc_fill,
                loc_stroke,
            ));

            let fps_x = right_slots.centered(i, fps_w);
            let (fps_fill, fps_stroke) = if row.ours {
                (theme.highlight.with_alpha(0.95), theme.highlight_light.with_alpha(0.95))
            } else {
                (theme.tertiary.with_alpha(0.65), theme.tertiary.with_alpha(0.7))
            };
            scene.push(bar(fps_x, y_fps.to_px(row.fps), fps_w, baseline, 6.0, fps_fill, fps_stroke));

            let label_fill = if row.ours { theme.highlight_light } else { theme.tick_label };
            let label_y = plot.bottom + 20.0;
            scene.push(category_label(theme, group_left + pair_w / 2.0, label_y, &row.method, l.label_size, label_fill));
            scene.push(category_label(theme, fps_x + fps_w / 2.0, label_y, &row.method, l.label_size, label_fill));
        }

        scene.push(Self::panel_title(theme, left.center_x(), &self.left_title));
        scene.push(Self::panel_title(theme, right.center_x(), &self.right_title));

        let legend = [(DET_LEGEND, theme.primary), (LOC_LEGEND, theme.secondary), (FPS_LEGEND, theme.highlight)];
        swatch_legend(&mut scene, theme, &legend, plot.left + 10.0, l.legend_y, l.legend_spacing);

        debug!(records = n, primitives = scene.len(), "rendered generalization chart");
        Ok(ChartOutput {
            scene,
            text: ChartText {
                panel_titles: vec![self.left_title.clone(), self.right_title.clone()],
                legend: legend.iter().map(|(name, _)| name.to_string()).collect(),
                ..ChartText::default()
            },
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AblationLayout {
    pub insets: Insets,
    pub domain: (f64, f64),
    pub ticks: Vec<f64>,
    pub max_group_width: f64,
    pub group_fraction: f64,
    /// Single bar width as a fraction of its group.
    pub bar_fraction: f64,
    pub corner_radius: f64,
    pub legend_y: f64,
    pub legend_spacing: f64,
    pub axis: AxisStyle,
}

impl Default for AblationLayout {
    fn default() -> Self {
        Self {
            insets: Insets::new(62, 24, 38, 78),
            domain: (92.0, 100.0),
            ticks: vec![92.0, 94.0, 96.0, 98.0, 100.0],
            max_group_width: 120.0,
            group_fraction: 0.74,
            bar_fraction: 0.4,
            corner_radius: 8.0,
            legend_y: 20.0,
            legend_spacing: 120.0,
            axis: AxisStyle::default(),
        }
    }
}

/// Detection and localization bars per ablation setting with value labels.
pub struct AblationChart {
    pub rows: Vec<AblationRow>,
    pub y_label: String,
    pub layout: AblationLayout,
}

impl Default for AblationChart {
    fn default() -> Self {
        Self { rows: architecture_ablation(), y_label: "AU-ROC (%)".into(), layout: AblationLayout::default() }
    }
}

impl AblationChart {
    fn value_label(theme: &Theme, x: f64, top: f64, v: f64, ours: bool, fill: Color) -> Primitive {
        Primitive::Text(Text {
            x,
            y: top - 8.0,
            content: format_value(v),
            font: Font::new(theme.body_font, 11.5).weight(if ours { 700 } else { 500 }),
            anchor: Anchor::Middle,
            fill,
            rotate: None,
        })
    }
}

impl ChartRenderer for AblationChart {
    fn render(&self, opts: &RenderOptions) -> Result<ChartOutput> {
        let theme = &opts.theme;
        let l = &self.layout;
        let plot = l.insets.plot_area(opts.width, opts.height);
        let axis = Axis::fixed(&*self.y_label, AxisRange::new(l.domain.0, l.domain.1)?, &l.ticks);
        let y = axis.vertical(plot);
        let frame = AxisFrame::new(plot, theme, l.axis);
        let mut scene = Scene::new(opts.width, opts.height);

        frame.horizontal_grid(&mut scene, &axis.ticks, &y);

        let slots = Slots::new(plot, self.rows.len());
        let group_w = l.max_group_width.min(slots.step * l.group_fraction);
        let bar_w = group_w * l.bar_fraction;
        for (i, row) in self.rows.iter().enumerate() {
            let group_x = slots.centered(i, group_w);
            let det_x = group_x;
            let loc_x = group_x + group_w - bar_w;
            let det_top = y.to_px(row.det);
            let loc_top = y.to_px(row.loc);

            let (det_fill, det_stroke) = bar_colors(theme.primary, theme.primary_light, row.ours, 0.58, 0.72);
            let (loc_fill, loc_stroke) = bar_colors(theme.secondary, theme.secondary_light, row.ours, 0.58, 0.72);
            scene.push(bar(det_x, det_top, bar_w, plot.bottom, l.corner_radius, det_fill, det_stroke));
            scene.push(bar(loc_x, loc_top, bar_w, plot.bottom, l.corner_radius, loc_fill, loc_stroke));

            let det_text = if row.ours { theme.primary_value_strong } else { theme.value_label };
            let loc_text = if row.ours { theme.secondary_value_strong } else { theme.secondary_value };
            scene.push(Self::value_label(theme, det_x + bar_w / 2.0, det_top, row.det, row.ours, det_text));
            scene.push(Self::value_label(theme, loc_x + bar_w / 2.0, loc_top, row.loc, row.ours, loc_text));

            let label_fill = if row.ours { theme.highlight_light } else { theme.tick_label };
            scene.push(category_label(theme, group_x + group_w / 2.0, plot.bottom + 24.0, &row.setting, 12.0, label_fill));
        }

        frame.axis_lines(&mut scene);
        frame.y_title(&mut scene, &axis.label);

        let legend = [(DET_LEGEND, theme.primary), (LOC_LEGEND, theme.secondary)];
        swatch_legend(&mut scene, theme, &legend, plot.left + 10.0, l.legend_y, l.legend_spacing);

        debug!(settings = self.rows.len(), primitives = scene.len(), "rendered ablation chart");
        Ok(ChartOutput {
            scene,
            text: ChartText {
                title_y: Some(axis.label),
                legend: legend.iter().map(|(name, _)| name.to_string()).collect(),
                ..ChartText::default()
            },
        })
    }
}
