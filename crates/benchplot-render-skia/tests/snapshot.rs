// File: crates/benchplot-render-skia/tests/snapshot.rs
// Purpose: Golden PNG snapshot harness with bless flow.
// Behavior:
// - Renders the default MVTec speed scatter to PNG bytes with labels disabled.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and checks that two renders decode to the same pixels.

use benchplot_core::data::mvtec;
use benchplot_core::{ChartRenderer, RenderOptions, SpeedScatterChart};
use benchplot_render_skia::{RasterOptions, SkiaRenderer};

fn render_bytes() -> Vec<u8> {
    let ds = mvtec();
    let out = SpeedScatterChart::new(&ds).render(&RenderOptions::default()).expect("scatter renders");
    let mut opts = RasterOptions::default();
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    SkiaRenderer::new(opts).render_to_png_bytes(&out.scene).expect("render png")
}

#[test]
fn golden_speed_scatter() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("speed_scatter_mvtec.png");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
        let first = image::load_from_memory(&bytes).expect("decode first").to_rgba8();
        let second = image::load_from_memory(&render_bytes()).expect("decode second").to_rgba8();
        assert_eq!(first.dimensions(), (860, 420));
        assert_eq!(first.as_raw(), second.as_raw(), "raster output is not deterministic");
    }
}
