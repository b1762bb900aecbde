// File: crates/benchplot-core/src/error.rs
// Summary: Error type shared by every renderer and the dataset validators.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChartError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    /// Axis bounds that cannot be mapped: `min >= max` or a non-finite bound.
    #[error("degenerate axis domain [{min}, {max}]")]
    DegenerateDomain { min: f64, max: f64 },

    #[error("non-finite value in {what}")]
    NonFinite { what: String },

    #[error("benchmark catalog is empty")]
    EmptyCatalog,

    #[error("dataset has no points")]
    EmptyDataset,

    /// Exactly one highlighted entry is required per dataset.
    #[error("expected exactly one highlighted entry, found {count}")]
    Distinguished { count: usize },

    #[error("fill references undefined gradient '{0}'")]
    UnknownGradient(String),
}
