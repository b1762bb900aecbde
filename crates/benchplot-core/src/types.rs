// File: crates/benchplot-core/src/types.rs
// Summary: Shared types and constants (canvas size, insets, render options).

use crate::geometry::Rect;
use crate::theme::Theme;

/// Default surface width in pixels.
pub const WIDTH: f64 = 860.0;
/// Default surface height in pixels.
pub const HEIGHT: f64 = 420.0;

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }

    /// Plot rectangle left over inside a `width` x `height` canvas.
    pub fn plot_area(&self, width: f64, height: f64) -> Rect {
        Rect::from_ltwh(
            self.left as f64,
            self.top as f64,
            width - self.hsum() as f64,
            height - self.vsum() as f64,
        )
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(62, 24, 28, 80)
    }
}

/// Canvas size and palette shared by every renderer.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: f64,
    pub height: f64,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, theme: Theme::dark() }
    }
}
