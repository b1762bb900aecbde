// File: crates/demo/tests/file_host.rs
// Purpose: File-backed host: surface files, clearing, titles and the manifest.

use std::path::PathBuf;

use benchplot_core::{render_static_charts, surface, BenchmarkSwitch, Host, RenderOptions};
use benchplot_demo::{FileHost, OutputFormats};

fn out_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("file_host").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn writes_svg_and_json_for_mounted_surfaces() {
    let dir = out_dir("all");
    let formats = OutputFormats { png: false, json: true };
    let mut host = FileHost::new(&dir, surface::ALL, formats, None).unwrap();
    assert_eq!(render_static_charts(&mut host, &RenderOptions::default()), 4);
    let switch = BenchmarkSwitch::builtin();
    switch.initialize(&mut host);

    for id in surface::ALL {
        let svg = std::fs::read_to_string(host.surface_path(id, "svg")).unwrap();
        assert!(svg.starts_with("<svg "), "{id}");
        assert!(host.surface_path(id, "json").exists(), "{id}");
        assert!(!host.surface_path(id, "png").exists(), "{id}");
    }
    assert_eq!(host.written(), 12);
    assert!(host.failures().is_empty());
}

#[test]
fn png_is_skipped_without_a_renderer() {
    let dir = out_dir("nopng");
    let formats = OutputFormats { png: true, json: false };
    let mut host = FileHost::new(&dir, [surface::ARCH_ABLATION], formats, None).unwrap();
    render_static_charts(&mut host, &RenderOptions::default());
    assert!(host.surface_path(surface::ARCH_ABLATION, "svg").exists());
    assert!(!host.surface_path(surface::ARCH_ABLATION, "png").exists());
    assert!(!host.surface_path(surface::GENERALIZATION, "svg").exists());
}

#[test]
fn clearing_removes_surface_files() {
    let dir = out_dir("clear");
    let formats = OutputFormats { png: false, json: true };
    let mut host = FileHost::new(&dir, surface::ALL, formats, None).unwrap();
    BenchmarkSwitch::builtin().initialize(&mut host);
    assert!(host.surface_path(surface::BAR_COMPARISON, "svg").exists());

    host.clear_surface(surface::BAR_COMPARISON);
    assert!(!host.surface_path(surface::BAR_COMPARISON, "svg").exists());
    assert!(!host.surface_path(surface::BAR_COMPARISON, "json").exists());
    assert!(host.surface_path(surface::SPEED_SCATTER, "svg").exists());
    // clearing twice is harmless
    host.clear_surface(surface::BAR_COMPARISON);
    assert!(host.failures().is_empty());
}

#[test]
fn manifest_records_titles_and_selection() {
    let dir = out_dir("manifest");
    let mut host = FileHost::new(&dir, surface::ALL, OutputFormats::default(), None).unwrap();
    let mut switch = BenchmarkSwitch::builtin();
    switch.initialize(&mut host);
    switch.select("bmad", &mut host);

    let path = host.write_manifest(switch.active_key(), "dark").unwrap();
    let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(json["active"], "bmad");
    assert_eq!(json["titles"][surface::BAR_TITLE], "Method Comparison (BMAD, mAD)");
    assert_eq!(json["titles"][surface::SCATTER_TITLE], "Speed-Accuracy Trade-off (BMAD)");
    assert_eq!(json["selectors"]["bmad"], true);
    assert_eq!(json["selectors"]["mvtec"], false);
    assert_eq!(json["surfaces"].as_array().map(Vec::len), Some(6));
}
