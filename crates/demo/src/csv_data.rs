// File: crates/demo/src/csv_data.rs
// Summary: Loads an extra benchmark (method, score, fps) from CSV with loose header matching.

use std::path::Path;

use anyhow::{bail, Context, Result};
use benchplot_core::{Dataset, MethodPoint};
use tracing::{debug, warn};

const METHOD_HEADERS: [&str; 4] = ["method", "name", "model", "approach"];
const SCORE_HEADERS: [&str; 7] = ["score", "auroc", "au-roc", "i-auroc", "accuracy", "metric", "value"];
const FPS_HEADERS: [&str; 4] = ["fps", "throughput", "speed", "frames_per_second"];

/// Catalog key for a dataset name: lowercase alphanumerics only (`"Real-IAD"` -> `"realiad"`).
pub fn dataset_key(name: &str) -> String {
    name.chars().filter(|c| c.is_ascii_alphanumeric()).map(|c| c.to_ascii_lowercase()).collect()
}

/// Read `path` into a dataset. Rows whose score or fps does not parse are skipped.
pub fn load_dataset_csv(path: &Path, name: &str, metric_label: &str, metric_short: &str) -> Result<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    debug!(?headers, "csv headers");

    let idx = |names: &[&str]| -> Option<usize> {
        headers.iter().position(|h| names.iter().any(|want| h == want))
    };
    let (Some(i_method), Some(i_score), Some(i_fps)) = (idx(&METHOD_HEADERS), idx(&SCORE_HEADERS), idx(&FPS_HEADERS))
    else {
        bail!("expected method, score and fps columns; found {:?}", headers);
    };

    let mut points = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("reading row {}", row + 1))?;
        let parse = |i: usize| -> Option<f64> { rec.get(i).and_then(|s| s.parse::<f64>().ok()) };
        match (rec.get(i_method), parse(i_score), parse(i_fps)) {
            (Some(method), Some(score), Some(fps)) if !method.is_empty() => {
                points.push(MethodPoint::new(method, score, fps));
            }
            _ => warn!(row = row + 1, "skipping malformed row"),
        }
    }
    debug!(rows = points.len(), "loaded dataset csv");
    Ok(Dataset::new(name, metric_label, metric_short, points))
}
