// File: crates/benchplot-render-skia/src/raster.rs
// Summary: Headless scene rasterisation on Skia CPU surfaces (PNG bytes, PNG files, RGBA8 buffers).

use std::path::Path;

use anyhow::{anyhow, Result};
use benchplot_core::primitive::{Color, Fill, Primitive, Scene};
use benchplot_core::{ChartError, Theme};
use skia_safe as skia;
use tracing::debug;

use crate::paint::{fill_paint, gradient_paint, stroke_paint, to_skia};
use crate::text::TextShaper;

#[derive(Clone, Debug, PartialEq)]
pub struct RasterOptions {
    pub background: Color,
    /// Skip text primitives, e.g. for pixel snapshots that must not depend on installed fonts.
    pub draw_labels: bool,
    /// Device pixels per scene unit.
    pub scale: f32,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self::from_theme(&Theme::dark())
    }
}

impl RasterOptions {
    pub fn from_theme(theme: &Theme) -> Self {
        Self { background: theme.background, draw_labels: true, scale: 1.0 }
    }
}

pub struct SkiaRenderer {
    pub options: RasterOptions,
    shaper: TextShaper,
}

impl Default for SkiaRenderer {
    fn default() -> Self { Self::new(RasterOptions::default()) }
}

impl SkiaRenderer {
    pub fn new(options: RasterOptions) -> Self {
        Self { options, shaper: TextShaper::new() }
    }

    /// Pixel size of the surface for `scene`.
    pub fn surface_size(&self, scene: &Scene) -> (i32, i32) {
        let s = self.options.scale.max(0.01);
        ((scene.width as f32 * s).round() as i32, (scene.height as f32 * s).round() as i32)
    }

    fn rasterize(&self, scene: &Scene) -> Result<skia::Surface> {
        let (w, h) = self.surface_size(scene);
        if w <= 0 || h <= 0 {
            return Err(anyhow!("scene has no drawable area ({w}x{h})"));
        }
        let mut surface =
            skia::surfaces::raster_n32_premul((w, h)).ok_or_else(|| anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(to_skia(self.options.background));
        canvas.save();
        canvas.scale((self.options.scale, self.options.scale));
        let painted = self.paint_scene(canvas, scene);
        canvas.restore();
        painted?;
        debug!(width = w, height = h, primitives = scene.len(), "rasterised scene");
        Ok(surface)
    }

    fn paint_scene(&self, canvas: &skia::Canvas, scene: &Scene) -> Result<()> {
        for p in &scene.primitives {
            match p {
                Primitive::Line { from, to, stroke } => {
                    canvas.draw_line((from.x as f32, from.y as f32), (to.x as f32, to.y as f32), &stroke_paint(stroke));
                }
                Primitive::Rect { x, y, width, height, rx, fill, stroke } => {
                    let rect = skia::Rect::from_xywh(*x as f32, *y as f32, *width as f32, *height as f32);
                    // corner radius cannot exceed half the shorter side
                    let r = (*rx as f32).min(rect.width() / 2.0).min(rect.height() / 2.0).max(0.0);
                    let paint = match fill {
                        Fill::Solid(c) => fill_paint(*c),
                        Fill::Gradient(id) => {
                            let g = scene.gradient(id).ok_or_else(|| ChartError::UnknownGradient(id.clone()))?;
                            gradient_paint(g.top, g.bottom, rect.top, rect.bottom)
                        }
                    };
                    canvas.draw_round_rect(rect, r, r, &paint);
                    if let Some(s) = stroke {
                        canvas.draw_round_rect(rect, r, r, &stroke_paint(s));
                    }
                }
                Primitive::Circle { center, r, fill, stroke, .. } => {
                    let c = (center.x as f32, center.y as f32);
                    canvas.draw_circle(c, *r as f32, &fill_paint(*fill));
                    if let Some(s) = stroke {
                        canvas.draw_circle(c, *r as f32, &stroke_paint(s));
                    }
                }
                Primitive::Polyline { points, stroke } => {
                    let Some((first, rest)) = points.split_first() else { continue };
                    let mut path = skia::Path::new();
                    path.move_to((first.x as f32, first.y as f32));
                    for pt in rest {
                        path.line_to((pt.x as f32, pt.y as f32));
                    }
                    canvas.draw_path(&path, &stroke_paint(stroke));
                }
                Primitive::Text(t) => {
                    if self.options.draw_labels {
                        self.shaper.draw(canvas, t);
                    }
                }
                // definitions only; consumed by rect fills
                Primitive::Gradient(_) => {}
            }
        }
        Ok(())
    }

    /// Encode `scene` as PNG.
    pub fn render_to_png_bytes(&self, scene: &Scene) -> Result<Vec<u8>> {
        let mut surface = self.rasterize(scene)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render `scene` to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, scene: &Scene, output_png_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(scene)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Unpremultiplied RGBA8 pixels: `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, scene: &Scene) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.rasterize(scene)?;
        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(anyhow!("read_pixels failed"));
        }
        Ok((pixels, w as u32, h as u32, stride))
    }
}
