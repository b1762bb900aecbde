// File: crates/benchplot-core/tests/line.rs
// Purpose: Scoring ablation line chart: series, markers and the stacked legend.

use benchplot_core::data::{scoring_ablation, NamedSeries};
use benchplot_core::primitive::{Color, Primitive};
use benchplot_core::{ChartRenderer, LineSeriesChart, RenderOptions};
use pretty_assertions::assert_eq;

fn polylines(scene: &benchplot_core::Scene) -> Vec<(usize, f64, bool)> {
    scene
        .primitives
        .iter()
        .filter_map(|p| match p {
            Primitive::Polyline { points, stroke } => Some((points.len(), stroke.width, stroke.round_caps)),
            _ => None,
        })
        .collect()
}

#[test]
fn three_series_with_ours_thicker() {
    let out = LineSeriesChart::default().render(&RenderOptions::default()).unwrap();
    assert_eq!(polylines(&out.scene), vec![(6, 2.3, true), (6, 2.3, true), (6, 3.2, true)]);
    assert_eq!(out.scene.count("circle"), 18);
}

#[test]
fn primitive_order() {
    let out = LineSeriesChart::default().render(&RenderOptions::default()).unwrap();
    let kinds: Vec<&str> = out.scene.primitives.iter().map(Primitive::kind).collect();
    let mut expected: Vec<&str> = Vec::new();
    expected.extend(std::iter::repeat(["line", "text"]).take(6 + 6).flatten());
    for _ in 0..3 {
        expected.push("polyline");
        expected.extend(["circle"; 6]);
    }
    expected.extend(["line", "line", "text", "text"]);
    expected.extend(std::iter::repeat(["line", "text"]).take(3).flatten());
    assert_eq!(kinds, expected);
}

#[test]
fn step_labels_sit_on_evenly_spaced_columns() {
    let out = LineSeriesChart::default().render(&RenderOptions::default()).unwrap();
    let labels: Vec<_> = out.scene.texts().filter(|t| t.y == 420.0 - 64.0 + 20.0).collect();
    let contents: Vec<&str> = labels.iter().map(|t| t.content.as_str()).collect();
    assert_eq!(contents, vec!["3", "5", "10", "50", "100", "1000"]);
    assert_eq!(labels[0].x, 62.0);
    assert!((labels[5].x - 832.0).abs() < 1e-9);
    let gap = labels[1].x - labels[0].x;
    for w in labels.windows(2) {
        assert!((w[1].x - w[0].x - gap).abs() < 1e-9);
    }
}

#[test]
fn legend_is_stacked_top_right() {
    let out = LineSeriesChart::default().render(&RenderOptions::default()).unwrap();
    let texts: Vec<_> = out.scene.texts().collect();
    let legend = &texts[texts.len() - 3..];
    let names: Vec<&str> = legend.iter().map(|t| t.content.as_str()).collect();
    assert_eq!(names, vec!["NLL", "Diff", "NLL + Diff (Ours)"]);
    assert!(legend.iter().all(|t| t.x == 832.0 - 188.0 + 30.0));
    assert_eq!(legend[0].y, 38.0 - 16.0 + 4.0);
    assert_eq!(legend[1].y - legend[0].y, 18.0);
    assert_eq!(legend[2].y - legend[1].y, 18.0);
    assert_eq!(out.text.legend, vec!["NLL", "Diff", "NLL + Diff (Ours)"]);
}

#[test]
fn extra_values_beyond_the_step_axis_are_dropped() {
    let mut chart = LineSeriesChart::default();
    chart.series = vec![NamedSeries { name: "Long".into(), color: Color::hex(0x63d6ff), values: vec![90.0; 9] }];
    let out = chart.render(&RenderOptions::default()).unwrap();
    assert_eq!(polylines(&out.scene), vec![(6, 2.3, true)]);
    assert_eq!(out.scene.count("circle"), 6);
}

#[test]
fn single_step_axis_places_one_column_at_plot_centre() {
    let mut chart = LineSeriesChart::default();
    chart.steps = vec!["3".into()];
    chart.series = vec![NamedSeries { name: "NLL".into(), color: Color::hex(0x63d6ff), values: vec![96.1, 95.2] }];
    let out = chart.render(&RenderOptions::default()).unwrap();

    assert_eq!(polylines(&out.scene), vec![(1, 2.3, true)]);
    assert_eq!(out.scene.count("circle"), 1);
    let centre = (62.0 + 832.0) / 2.0;
    let circle_x: Vec<f64> = out
        .scene
        .primitives
        .iter()
        .filter_map(|p| match p {
            Primitive::Circle { center, .. } => Some(center.x),
            _ => None,
        })
        .collect();
    assert_eq!(circle_x, vec![centre]);
    let step_labels: Vec<_> = out.scene.texts().filter(|t| t.y == 420.0 - 64.0 + 20.0).collect();
    assert_eq!(step_labels.len(), 1);
    assert_eq!(step_labels[0].x, centre);
}

#[test]
fn empty_step_axis_draws_no_series_geometry() {
    let mut chart = LineSeriesChart::default();
    chart.steps = Vec::new();
    chart.series = vec![NamedSeries { name: "NLL".into(), color: Color::hex(0x63d6ff), values: vec![96.1, 95.2, 93.0] }];
    let out = chart.render(&RenderOptions::default()).unwrap();

    assert_eq!(out.scene.count("polyline"), 0);
    assert_eq!(out.scene.count("circle"), 0);
    assert_eq!(out.scene.texts().filter(|t| t.y == 420.0 - 64.0 + 20.0).count(), 0);
    // legend still lists the series
    assert_eq!(out.text.legend, vec!["NLL"]);
}

#[test]
fn builtin_series_match_step_count() {
    for s in scoring_ablation() {
        assert_eq!(s.values.len(), 6, "{}", s.name);
    }
    assert!(scoring_ablation()[2].is_ours());
}
