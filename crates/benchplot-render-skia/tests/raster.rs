// File: crates/benchplot-render-skia/tests/raster.rs
// Purpose: PNG/RGBA output shape, background fill and gradient resolution.

use benchplot_core::data::mvtec;
use benchplot_core::geometry::Point;
use benchplot_core::primitive::{Color, Fill, Primitive, Scene, Stroke};
use benchplot_core::{BarComparisonChart, ChartRenderer, RenderOptions, Theme};
use benchplot_render_skia::{RasterOptions, SkiaRenderer};

fn no_text() -> SkiaRenderer {
    let mut opts = RasterOptions::default();
    opts.draw_labels = false; // avoid font variance
    SkiaRenderer::new(opts)
}

#[test]
fn png_bytes_have_signature() {
    let ds = mvtec();
    let out = BarComparisonChart::new(&ds).render(&RenderOptions::default()).unwrap();
    let bytes = SkiaRenderer::default().render_to_png_bytes(&out.scene).expect("png");
    assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (860, 420));
}

#[test]
fn rgba8_buffer_shape_and_background() {
    let ds = mvtec();
    let out = BarComparisonChart::new(&ds).render(&RenderOptions::default()).unwrap();
    let (px, w, h, stride) = no_text().render_to_rgba8(&out.scene).expect("rgba render");
    assert_eq!((w, h), (860, 420));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, w as usize * 4);

    // top-left corner is outside the plot: plain background
    let bg = Theme::dark().background;
    assert_eq!(&px[..4], &[bg.r, bg.g, bg.b, 255]);
}

#[test]
fn scale_multiplies_surface_size() {
    let mut opts = RasterOptions::default();
    opts.scale = 2.0;
    opts.draw_labels = false;
    let scene = Scene::new(100.0, 40.0);
    let (px, w, h, _) = SkiaRenderer::new(opts).render_to_rgba8(&scene).unwrap();
    assert_eq!((w, h), (200, 80));
    assert_eq!(px.len(), 200 * 80 * 4);
}

#[test]
fn own_bar_is_painted_with_the_gradient() {
    let ds = mvtec();
    let chart = BarComparisonChart::new(&ds);
    let out = chart.render(&RenderOptions::default()).unwrap();
    let (px, w, _, stride) = no_text().render_to_rgba8(&out.scene).unwrap();

    let (x, y, width, height) = out
        .scene
        .primitives
        .iter()
        .rev()
        .find_map(|p| match p {
            Primitive::Rect { x, y, width, height, fill: Fill::Gradient(_), .. } => Some((*x, *y, *width, *height)),
            _ => None,
        })
        .unwrap();
    let cx = (x + width / 2.0) as usize;
    let at = |py: f64| {
        let i = py as usize * stride + cx * 4;
        assert!(cx < w as usize);
        [px[i], px[i + 1], px[i + 2]]
    };
    let near_top = at(y + 12.0);
    let near_bottom = at(y + height - 12.0);
    // highlight (#00d2a6) fades into primary (#63d6ff): red rises toward the bottom
    assert!(near_bottom[0] > near_top[0], "top {near_top:?} bottom {near_bottom:?}");
}

#[test]
fn dangling_gradient_reference_is_an_error() {
    let mut scene = Scene::new(50.0, 50.0);
    scene.push(Primitive::Rect {
        x: 5.0,
        y: 5.0,
        width: 20.0,
        height: 20.0,
        rx: 4.0,
        fill: Fill::Gradient("missing".into()),
        stroke: None,
    });
    let err = no_text().render_to_png_bytes(&scene).unwrap_err();
    assert!(err.to_string().contains("missing"), "{err}");
}

#[test]
fn empty_polyline_and_dashes_render() {
    let mut scene = Scene::new(60.0, 30.0);
    scene.push(Primitive::Polyline { points: Vec::new(), stroke: Stroke::solid(Color::hex(0xffffff), 2.0) });
    scene.push(Primitive::line(0.0, 15.0, 60.0, 15.0, Stroke::solid(Color::hex(0x00d2a6), 2.0).dashed(8.0, 6.0)));
    scene.push(Primitive::Polyline {
        points: vec![Point::new(0.0, 0.0), Point::new(30.0, 30.0), Point::new(60.0, 0.0)],
        stroke: Stroke::solid(Color::hex(0x63d6ff), 3.2).rounded(),
    });
    let bytes = no_text().render_to_png_bytes(&scene).unwrap();
    assert!(!bytes.is_empty());
}

#[test]
fn zero_sized_scene_is_rejected() {
    assert!(no_text().render_to_png_bytes(&Scene::new(0.0, 10.0)).is_err());
}

#[test]
fn png_file_lands_in_nested_dir() {
    let dir = std::path::PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("raster_nested/a/b");
    let path = dir.join("chart.png");
    let _ = std::fs::remove_file(&path);
    no_text().render_to_png(&Scene::new(20.0, 20.0), &path).unwrap();
    assert!(path.exists());
}
