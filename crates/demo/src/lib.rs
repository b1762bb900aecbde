// File: crates/demo/src/lib.rs
// Summary: Demo host pieces shared by the `benchplot` binary and its tests.

pub mod csv_data;
pub mod file_host;

pub use csv_data::{dataset_key, load_dataset_csv};
pub use file_host::{FileHost, OutputFormats};
