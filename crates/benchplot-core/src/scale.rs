// File: crates/benchplot-core/src/scale.rs
// Summary: Axis domain ranges and the linear domain-to-pixel transform.

use serde::Serialize;

use crate::error::{ChartError, Result};
use crate::geometry::Rect;

/// Validated axis domain. Invariant: both bounds finite and `min < max`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AxisRange {
    min: f64,
    max: f64,
}

impl AxisRange {
    /// Rejects equal, inverted, or non-finite bounds instead of letting the
    /// mapping divide by zero further down.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(ChartError::DegenerateDomain { min, max });
        }
        Ok(Self { min, max })
    }

    /// Accuracy-style range from data extrema: `[max(floor, ⌊lo - pad_lo⌋), min(ceil, ⌈hi + pad_hi⌉)]`.
    pub fn clamped_percent(lo: f64, hi: f64, pad_lo: f64, pad_hi: f64, floor: f64, ceil: f64) -> Result<Self> {
        let min = floor.max((lo - pad_lo).floor());
        let max = ceil.min((hi + pad_hi).ceil());
        Self::new(min, max)
    }

    #[inline] pub fn min(&self) -> f64 { self.min }
    #[inline] pub fn max(&self) -> f64 { self.max }
    #[inline] pub fn span(&self) -> f64 { self.max - self.min }

    pub fn contains(&self, v: f64) -> bool { v >= self.min && v <= self.max }
}

/// Affine map from an [`AxisRange`] onto a pixel segment.
///
/// Vertical scales are inverted so larger values sit higher on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: AxisRange,
    pub pixel_start: f64,
    pub extent: f64,
    pub inverted: bool,
}

impl LinearScale {
    pub fn new(domain: AxisRange, pixel_start: f64, extent: f64, inverted: bool) -> Self {
        Self { domain, pixel_start, extent, inverted }
    }

    /// Horizontal scale across the width of `area`.
    pub fn horizontal(domain: AxisRange, area: Rect) -> Self {
        Self::new(domain, area.left, area.width(), false)
    }

    /// Vertical scale across the height of `area`, domain minimum at the bottom.
    pub fn vertical(domain: AxisRange, area: Rect) -> Self {
        Self::new(domain, area.top, area.height(), true)
    }

    #[inline]
    pub fn fraction(&self, v: f64) -> f64 {
        (v - self.domain.min) / self.domain.span()
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        if self.inverted {
            self.pixel_start + self.extent - self.fraction(v) * self.extent
        } else {
            self.pixel_start + self.fraction(v) * self.extent
        }
    }

    #[inline]
    pub fn from_px(&self, px: f64) -> f64 {
        let f = if self.inverted {
            (self.pixel_start + self.extent - px) / self.extent
        } else {
            (px - self.pixel_start) / self.extent
        };
        self.domain.min + f * self.domain.span()
    }

    /// Pixel coordinate of the domain minimum (the baseline bars grow from).
    pub fn baseline(&self) -> f64 { self.to_px(self.domain.min) }
}
