// File: crates/benchplot-core/src/primitive.rs
// Summary: Drawable primitives emitted by renderers (lines, rects, circles, polylines, text, gradients).
// Notes:
// - Primitives are plain values. A render call builds a fresh list and the host owns it.
// - Every type serialises with serde so hosts can consume scenes as JSON.

use serde::{Serialize, Serializer};

use crate::geometry::{clamp, Point};

/// sRGB colour with straight alpha in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a: 1.0 } }

    /// From a packed `0xRRGGBB` literal.
    pub const fn hex(v: u32) -> Self {
        Self::rgb(((v >> 16) & 0xff) as u8, ((v >> 8) & 0xff) as u8, (v & 0xff) as u8)
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a: clamp(a, 0.0, 1.0), ..self }
    }

    pub fn is_opaque(&self) -> bool { self.a >= 1.0 }

    /// CSS form: `#rrggbb` when opaque, `rgba(r, g, b, a)` otherwise.
    pub fn to_css(&self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.to_css())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
    /// `(dash, gap)` lengths in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<(f64, f64)>,
    pub round_caps: bool,
}

impl Stroke {
    pub fn solid(color: Color, width: f64) -> Self {
        Self { color, width, dash: None, round_caps: false }
    }
    pub fn dashed(mut self, dash: f64, gap: f64) -> Self {
        self.dash = Some((dash, gap));
        self
    }
    pub fn rounded(mut self) -> Self {
        self.round_caps = true;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Fill {
    Solid(Color),
    /// Reference to a [`LinearGradient`] emitted earlier in the same scene.
    Gradient(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Font {
    pub family: String,
    pub size: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u16>,
}

impl Font {
    pub fn new(family: impl Into<String>, size: f64) -> Self {
        Self { family: family.into(), size, weight: None }
    }
    pub fn weight(mut self, weight: u16) -> Self {
        self.weight = Some(weight);
        self
    }
    pub fn is_bold(&self) -> bool { self.weight.map_or(false, |w| w >= 600) }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub content: String,
    pub font: Font,
    pub anchor: Anchor,
    pub fill: Color,
    /// Rotation in degrees about `(x, y)`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate: Option<f64>,
}

/// Vertical two-stop gradient, top colour to bottom colour.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LinearGradient {
    pub id: String,
    pub top: Color,
    pub bottom: Color,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        rx: f64,
        fill: Fill,
        #[serde(skip_serializing_if = "Option::is_none")]
        stroke: Option<Stroke>,
    },
    Circle {
        center: Point,
        r: f64,
        fill: Color,
        #[serde(skip_serializing_if = "Option::is_none")]
        stroke: Option<Stroke>,
        /// Hover annotation; rendered by hosts that support tooltips.
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
    Polyline {
        points: Vec<Point>,
        stroke: Stroke,
    },
    Text(Text),
    Gradient(LinearGradient),
}

impl Primitive {
    pub fn line(x1: f64, y1: f64, x2: f64, y2: f64, stroke: Stroke) -> Self {
        Primitive::Line { from: Point::new(x1, y1), to: Point::new(x2, y2), stroke }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Line { .. } => "line",
            Primitive::Rect { .. } => "rect",
            Primitive::Circle { .. } => "circle",
            Primitive::Polyline { .. } => "polyline",
            Primitive::Text(_) => "text",
            Primitive::Gradient(_) => "gradient",
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Primitive::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Ordered output of one render call; later primitives draw on top.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub primitives: Vec<Primitive>,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, primitives: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, p: Primitive) { self.primitives.push(p); }

    pub fn len(&self) -> usize { self.primitives.len() }
    pub fn is_empty(&self) -> bool { self.primitives.is_empty() }

    pub fn texts(&self) -> impl Iterator<Item = &Text> {
        self.primitives.iter().filter_map(Primitive::as_text)
    }

    pub fn count(&self, kind: &str) -> usize {
        self.primitives.iter().filter(|p| p.kind() == kind).count()
    }

    pub fn gradient(&self, id: &str) -> Option<&LinearGradient> {
        self.primitives.iter().find_map(|p| match p {
            Primitive::Gradient(g) if g.id == id => Some(g),
            _ => None,
        })
    }
}

/// Exact strings a renderer computed, for hosts that reuse them elsewhere.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ChartText {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_x: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_y: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub panel_titles: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub legend: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartOutput {
    pub scene: Scene,
    pub text: ChartText,
}
