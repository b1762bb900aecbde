// File: crates/benchplot-core/tests/grouped.rs
// Purpose: Dual-panel generalization chart and the grouped ablation bars.

use benchplot_core::primitive::{Fill, Primitive};
use benchplot_core::{AblationChart, ChartRenderer, GeneralizationChart, RenderOptions, Theme};
use pretty_assertions::assert_eq;

fn rect_fills(scene: &benchplot_core::Scene) -> Vec<(f64, f64, f32)> {
    scene
        .primitives
        .iter()
        .filter_map(|p| match p {
            Primitive::Rect { x, width, fill: Fill::Solid(c), height, .. } if *height > 12.0 || *width != 12.0 => {
                Some((*x, *width, c.a))
            }
            _ => None,
        })
        .collect()
}

#[test]
fn generalization_has_two_panels_and_three_legend_entries() {
    let out = GeneralizationChart::default().render(&RenderOptions::default()).unwrap();
    assert_eq!(out.text.panel_titles, vec!["Detection/Localization AU-ROC", "Inference Speed (FPS)"]);
    assert_eq!(out.text.legend, vec!["Det. AU-ROC", "Loc. AU-ROC", "FPS"]);

    let theme = Theme::dark();
    let titles: Vec<_> = out.scene.texts().filter(|t| t.font.family == theme.display_font).collect();
    assert_eq!(titles.len(), 2);
    assert!(titles.iter().all(|t| t.y == 18.0));
    // left panel title sits left of the right one
    assert!(titles[0].x < titles[1].x);
}

#[test]
fn generalization_primitive_counts() {
    let out = GeneralizationChart::default().render(&RenderOptions::default()).unwrap();
    // 4 records x 3 bars, plus 3 legend swatches
    assert_eq!(out.scene.count("rect"), 12 + 3);
    // grids (6 + 5) + two axis pairs
    assert_eq!(out.scene.count("line"), 11 + 4);
    assert_eq!(out.scene.len(), 54);
}

#[test]
fn throughput_bars_live_in_the_right_panel() {
    let chart = GeneralizationChart::default();
    let out = chart.render(&RenderOptions::default()).unwrap();
    let plot_left = 54.0;
    let split = plot_left + 782.0 * 0.58 + 28.0;
    let bars = rect_fills(&out.scene);
    for row in 0..4 {
        let (det_x, _, _) = bars[row * 3];
        let (loc_x, _, _) = bars[row * 3 + 1];
        let (fps_x, _, _) = bars[row * 3 + 2];
        assert!(det_x < loc_x && loc_x < split - 28.0);
        assert!(fps_x >= split);
    }
}

#[test]
fn highlighted_records_render_at_full_opacity() {
    let chart = GeneralizationChart::default();
    let out = chart.render(&RenderOptions::default()).unwrap();
    let bars = rect_fills(&out.scene);
    for (i, row) in chart.rows.iter().enumerate() {
        for (_, _, a) in &bars[i * 3..i * 3 + 3] {
            if row.ours {
                assert_eq!(*a, 0.95, "{}", row.method);
            } else {
                assert!(*a < 0.7, "{}", row.method);
            }
        }
    }
}

#[test]
fn ablation_layout() {
    let chart = AblationChart::default();
    let out = chart.render(&RenderOptions::default()).unwrap();
    assert_eq!(out.scene.count("rect"), 8 + 2);
    assert_eq!(out.scene.len(), 10 + 20 + 2 + 1 + 4);
    assert_eq!(out.text.legend, vec!["Det. AU-ROC", "Loc. AU-ROC"]);
    assert_eq!(out.text.title_y.as_deref(), Some("AU-ROC (%)"));

    let values: Vec<&str> = out
        .scene
        .texts()
        .filter(|t| t.content.contains('.') && t.content.parse::<f64>().is_ok())
        .map(|t| t.content.as_str())
        .collect();
    assert_eq!(values, vec!["97.2", "96.8", "98.0", "97.3", "93.8", "95.9", "99.0", "97.5"]);
}

#[test]
fn ablation_ours_group_is_bold_and_accented() {
    let theme = Theme::dark();
    let out = AblationChart::default().render(&RenderOptions::default()).unwrap();
    let det = out.scene.texts().find(|t| t.content == "99.0").unwrap();
    assert!(det.font.is_bold());
    assert_eq!(det.fill, theme.primary_value_strong);
    let setting = out.scene.texts().find(|t| t.content == "DiT-gigant").unwrap();
    assert_eq!(setting.fill, theme.highlight_light);
    let plain = out.scene.texts().find(|t| t.content == "MLP").unwrap();
    assert_eq!(plain.fill, theme.tick_label);
}

#[test]
fn ablation_bars_share_the_baseline() {
    let out = AblationChart::default().render(&RenderOptions::default()).unwrap();
    let bottom = 420.0 - 78.0;
    for p in &out.scene.primitives {
        if let Primitive::Rect { y, height, width, .. } = p {
            if *width != 12.0 {
                assert!((y + height - bottom).abs() < 1e-9);
            }
        }
    }
}
