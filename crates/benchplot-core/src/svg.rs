// File: crates/benchplot-core/src/svg.rs
// Summary: Serialises a scene to a standalone SVG document.

use std::fmt::{self, Write};

use crate::primitive::{Fill, Primitive, Scene, Stroke, Text};

/// Standalone `<svg>` document for `scene`, primitives in list order.
pub fn to_svg(scene: &Scene) -> String {
    let mut out = String::with_capacity(scene.len() * 160);
    write_svg(scene, &mut out).expect("fmt::Write for String is infallible");
    out
}

pub fn write_svg<W: Write>(scene: &Scene, out: &mut W) -> fmt::Result {
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = scene.width,
        h = scene.height
    )?;

    let gradients: Vec<_> = scene
        .primitives
        .iter()
        .filter_map(|p| match p {
            Primitive::Gradient(g) => Some(g),
            _ => None,
        })
        .collect();
    if !gradients.is_empty() {
        writeln!(out, "  <defs>")?;
        for g in gradients {
            writeln!(out, r#"    <linearGradient id="{}" x1="0%" y1="0%" x2="0%" y2="100%">"#, escape(&g.id))?;
            writeln!(out, r#"      <stop offset="0%" stop-color="{}"/>"#, g.top.to_css())?;
            writeln!(out, r#"      <stop offset="100%" stop-color="{}"/>"#, g.bottom.to_css())?;
            writeln!(out, "    </linearGradient>")?;
        }
        writeln!(out, "  </defs>")?;
    }

    for p in &scene.primitives {
        match p {
            Primitive::Line { from, to, stroke } => {
                writeln!(out, r#"  <line x1="{}" y1="{}" x2="{}" y2="{}"{}/>"#, from.x, from.y, to.x, to.y, stroke_attrs(stroke))?;
            }
            Primitive::Rect { x, y, width, height, rx, fill, stroke } => {
                let stroke = stroke.as_ref().map(stroke_attrs).unwrap_or_default();
                writeln!(
                    out,
                    r#"  <rect x="{x}" y="{y}" width="{width}" height="{height}" rx="{rx}" fill="{}"{stroke}/>"#,
                    fill_value(fill)
                )?;
            }
            Primitive::Circle { center, r, fill, stroke, title } => {
                let stroke = stroke.as_ref().map(stroke_attrs).unwrap_or_default();
                let open = format!(r#"  <circle cx="{}" cy="{}" r="{r}" fill="{}"{stroke}"#, center.x, center.y, fill.to_css());
                match title {
                    Some(t) => writeln!(out, "{open}><title>{}</title></circle>", escape(t))?,
                    None => writeln!(out, "{open}/>")?,
                }
            }
            Primitive::Polyline { points, stroke } => {
                let pts: Vec<String> = points.iter().map(|p| format!("{},{}", p.x, p.y)).collect();
                writeln!(out, r#"  <polyline points="{}" fill="none"{}/>"#, pts.join(" "), stroke_attrs(stroke))?;
            }
            Primitive::Text(t) => write_text(out, t)?,
            Primitive::Gradient(_) => {}
        }
    }
    writeln!(out, "</svg>")
}

fn write_text<W: Write>(out: &mut W, t: &Text) -> fmt::Result {
    write!(
        out,
        r#"  <text x="{}" y="{}" text-anchor="{}" font-family="{}" font-size="{}""#,
        t.x,
        t.y,
        t.anchor.as_str(),
        escape(&t.font.family),
        t.font.size
    )?;
    if let Some(w) = t.font.weight {
        write!(out, r#" font-weight="{w}""#)?;
    }
    write!(out, r#" fill="{}""#, t.fill.to_css())?;
    if let Some(deg) = t.rotate {
        write!(out, r#" transform="rotate({deg}, {}, {})""#, t.x, t.y)?;
    }
    writeln!(out, ">{}</text>", escape(&t.content))
}

fn stroke_attrs(s: &Stroke) -> String {
    let mut a = format!(r#" stroke="{}" stroke-width="{}""#, s.color.to_css(), s.width);
    if let Some((dash, gap)) = s.dash {
        a.push_str(&format!(r#" stroke-dasharray="{dash} {gap}""#));
    }
    if s.round_caps {
        a.push_str(r#" stroke-linecap="round" stroke-linejoin="round""#);
    }
    a
}

fn fill_value(fill: &Fill) -> String {
    match fill {
        Fill::Solid(c) => c.to_css(),
        Fill::Gradient(id) => format!("url(#{})", escape(id)),
    }
}

/// XML-escape text content and attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
