// File: crates/benchplot-render-skia/src/paint.rs
// Summary: Conversions from core colours and strokes to Skia paints.

use benchplot_core::primitive::{Color, Stroke};
use skia_safe as skia;

pub fn to_skia(c: Color) -> skia::Color {
    let a = (c.a.clamp(0.0, 1.0) * 255.0).round() as u8;
    skia::Color::from_argb(a, c.r, c.g, c.b)
}

pub fn fill_paint(color: Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(to_skia(color));
    paint
}

/// Stroke paint honouring dash pattern and round caps/joins.
pub fn stroke_paint(stroke: &Stroke) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(stroke.width as f32);
    paint.set_color(to_skia(stroke.color));
    if let Some((dash, gap)) = stroke.dash {
        paint.set_path_effect(skia::PathEffect::dash(&[dash as f32, gap as f32], 0.0));
    }
    if stroke.round_caps {
        paint.set_stroke_cap(skia::paint::Cap::Round);
        paint.set_stroke_join(skia::paint::Join::Round);
    }
    paint
}

/// Vertical two-stop gradient spanning `top..bottom`.
pub fn gradient_paint(top_color: Color, bottom_color: Color, top: f32, bottom: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    let colors = [to_skia(top_color), to_skia(bottom_color)];
    let shader = skia::Shader::linear_gradient(
        ((0.0, top), (0.0, bottom)),
        colors.as_ref(),
        None,
        skia::TileMode::Clamp,
        None,
        None,
    );
    paint.set_shader(shader);
    paint
}
