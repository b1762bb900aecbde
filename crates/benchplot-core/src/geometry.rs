// File: crates/benchplot-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }
    pub fn center_x(&self) -> f64 { self.left + self.width() / 2.0 }
    pub fn center_y(&self) -> f64 { self.top + self.height() / 2.0 }

    /// Split horizontally into a left part of `left_width`, a gap, and the remainder.
    pub fn split_columns(&self, left_width: f64, gap: f64) -> (Rect, Rect) {
        let left = Rect::from_ltwh(self.left, self.top, left_width, self.height());
        let right_x = self.left + left_width + gap;
        let right = Rect::from_ltrb(right_x, self.top, self.right, self.bottom);
        (left, right)
    }
}

/// Equal-width horizontal slots across a span, one per category.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slots {
    pub start: f64,
    pub step: f64,
}

impl Slots {
    pub fn new(span: Rect, count: usize) -> Self {
        Self { start: span.left, step: span.width() / count as f64 }
    }

    /// Left edge of an element of `width` centered in slot `index`.
    #[inline]
    pub fn centered(&self, index: usize, width: f64) -> f64 {
        self.start + self.step * index as f64 + (self.step - width) / 2.0
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
