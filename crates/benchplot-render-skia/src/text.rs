// File: crates/benchplot-render-skia/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout; resolves CSS-style family lists and anchors.

use benchplot_core::primitive::{Anchor, Text};
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};
use skia_safe as skia;

use crate::paint::to_skia;

const FALLBACK_FAMILIES: [&str; 5] = ["Segoe UI", "Arial", "Helvetica", "DejaVu Sans", "sans-serif"];

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    /// `"Sora, sans-serif"` -> `["Sora", "sans-serif", <fallbacks>]`.
    fn families(css: &str) -> Vec<String> {
        let mut out: Vec<String> = css
            .split(',')
            .map(|f| f.trim().trim_matches(|c| c == '"' || c == '\'').to_string())
            .filter(|f| !f.is_empty())
            .collect();
        for f in FALLBACK_FAMILIES {
            if !out.iter().any(|have| have.eq_ignore_ascii_case(f)) {
                out.push(f.to_string());
            }
        }
        out
    }

    fn make_style(family: &str, size: f32, color: skia::Color, bold: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&Self::families(family));
        ts.set_font_style(if bold { skia::FontStyle::bold() } else { skia::FontStyle::normal() });
        ts
    }

    pub fn layout(&self, text: &str, family: &str, size: f32, color: skia::Color, bold: bool) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(family, size, color, bold);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Paint `t` with its baseline at `(t.x, t.y)`, aligned per its anchor and rotated about that point.
    pub fn draw(&self, canvas: &skia::Canvas, t: &Text) {
        let size = t.font.size as f32;
        let bold = t.font.is_bold();
        let p = self.layout(&t.content, &t.font.family, size, to_skia(t.fill), bold);
        // width of the longest line
        let width = p.longest_line();
        let dx = match t.anchor {
            Anchor::Start => 0.0,
            Anchor::Middle => -width / 2.0,
            Anchor::End => -width,
        };
        let (x, y) = (t.x as f32, t.y as f32);
        canvas.save();
        if let Some(deg) = t.rotate {
            canvas.rotate(deg as f32, Some(skia::Point::new(x, y)));
        }
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        p.paint(canvas, (x + dx, y - size * 0.8));
        canvas.restore();
    }
}
