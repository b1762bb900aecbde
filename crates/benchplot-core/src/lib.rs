// File: crates/benchplot-core/src/lib.rs
// Summary: Core library entry point; exports tick generation, scales, chart renderers and the benchmark controller.

pub mod axis;
pub mod bar;
pub mod chart;
pub mod controller;
pub mod data;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod grouped;
pub mod host;
pub mod line;
pub mod primitive;
pub mod scale;
pub mod scatter;
pub mod svg;
pub mod theme;
pub mod types;

pub use axis::{Axis, AxisFrame, AxisStyle};
pub use bar::{BarComparisonChart, BarLayout};
pub use chart::{surface, ChartRenderer};
pub use controller::{render_static_charts, BenchmarkSwitch, SwitchOutcome};
pub use data::{Catalog, Dataset, MethodPoint};
pub use error::{ChartError, Result};
pub use grid::{make_ticks, nice_step};
pub use grouped::{AblationChart, AblationLayout, DualAxisLayout, GeneralizationChart};
pub use host::{mount, Host, MemoryHost};
pub use line::{LineLayout, LineSeriesChart};
pub use primitive::{ChartOutput, ChartText, Color, Primitive, Scene};
pub use scale::{AxisRange, LinearScale};
pub use scatter::{ComparisonScatterChart, LabelOffsets, ScatterLayout, SpeedScatterChart};
pub use svg::to_svg;
pub use theme::Theme;
pub use types::{Insets, RenderOptions};
