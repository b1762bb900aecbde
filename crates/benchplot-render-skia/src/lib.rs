// File: crates/benchplot-render-skia/src/lib.rs
// Summary: Skia renderer crate; rasterises core scenes on CPU surfaces and shapes text with textlayout.

pub mod paint;
pub mod raster;
pub mod text;

pub use raster::{RasterOptions, SkiaRenderer};
pub use text::TextShaper;
