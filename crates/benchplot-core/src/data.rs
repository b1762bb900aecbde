// File: crates/benchplot-core/src/data.rs
// Summary: Benchmark datasets, fixed result tables and the ordered benchmark catalog.

use serde::Serialize;

use crate::error::{ChartError, Result};
use crate::primitive::Color;

/// Name of the method every chart highlights.
pub const OWN_METHOD: &str = "InvAD";
/// Suffix marking a highlighted entry in tables that decorate names.
pub const OWN_MARKER: &str = "(Ours)";

/// True for the highlighted entry: the bare own-method name or anything tagged with the marker.
pub fn is_own_method(name: &str) -> bool {
    name == OWN_METHOD || name.trim_end().ends_with(OWN_MARKER)
}

/// One method's result on a benchmark.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MethodPoint {
    pub method: String,
    /// Accuracy metric, percent.
    pub score: f64,
    /// Throughput, frames per second.
    pub fps: f64,
}

impl MethodPoint {
    pub fn new(method: impl Into<String>, score: f64, fps: f64) -> Self {
        Self { method: method.into(), score, fps }
    }

    pub fn is_distinguished(&self) -> bool { is_own_method(&self.method) }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Dataset {
    pub name: String,
    pub metric_label: String,
    pub metric_short: String,
    pub points: Vec<MethodPoint>,
}

impl Dataset {
    pub fn new(
        name: impl Into<String>,
        metric_label: impl Into<String>,
        metric_short: impl Into<String>,
        points: Vec<MethodPoint>,
    ) -> Self {
        Self { name: name.into(), metric_label: metric_label.into(), metric_short: metric_short.into(), points }
    }

    pub fn distinguished(&self) -> Option<&MethodPoint> {
        self.points.iter().find(|p| p.is_distinguished())
    }

    /// `(min, max)` of the accuracy scores; `None` when empty.
    pub fn score_extent(&self) -> Option<(f64, f64)> {
        extent(self.points.iter().map(|p| p.score))
    }

    /// Checks the invariants the builtin tables satisfy by construction:
    /// at least one point, finite values, exactly one highlighted method.
    pub fn validate(&self) -> Result<()> {
        if self.points.is_empty() {
            return Err(ChartError::EmptyDataset);
        }
        for p in &self.points {
            if !p.score.is_finite() || !p.fps.is_finite() {
                return Err(ChartError::NonFinite { what: format!("{} / {}", self.name, p.method) });
            }
        }
        let count = self.points.iter().filter(|p| p.is_distinguished()).count();
        if count != 1 {
            return Err(ChartError::Distinguished { count });
        }
        Ok(())
    }
}

pub(crate) fn extent(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Ordered key -> dataset mapping; the first key is the startup selection.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    entries: Vec<(String, Dataset)>,
}

impl Catalog {
    pub fn new() -> Self { Self::default() }

    /// The five compiled-in benchmarks in declared order.
    pub fn builtin() -> Self {
        let mut c = Self::new();
        c.insert("mvtec", mvtec());
        c.insert("visa", visa());
        c.insert("mpdd", mpdd());
        c.insert("bmad", bmad());
        c.insert("realiad", realiad());
        c
    }

    /// Adds or replaces `key`; replacing keeps the original position.
    pub fn insert(&mut self, key: impl Into<String>, dataset: Dataset) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = dataset,
            None => self.entries.push((key, dataset)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Dataset> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, d)| d)
    }

    pub fn contains(&self, key: &str) -> bool { self.get(key).is_some() }

    pub fn first_key(&self) -> Option<&str> {
        self.entries.first().map(|(k, _)| k.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

fn points(rows: &[(&str, f64, f64)]) -> Vec<MethodPoint> {
    rows.iter().map(|&(m, s, f)| MethodPoint::new(m, s, f)).collect()
}

pub fn mvtec() -> Dataset {
    Dataset::new("MVTecAD", "Image-level AU-ROC (%)", "Det. AU-ROC", points(&[
        ("RD4AD", 94.6, 4.8),
        ("UniAD", 96.5, 5.3),
        ("DiAD", 97.2, 0.1),
        ("HVQ-Trans", 98.0, 5.6),
        ("OmiAD", 98.8, 39.4),
        ("InvAD", 99.0, 88.1),
    ]))
}

pub fn visa() -> Dataset {
    Dataset::new("VisA", "Image-level AU-ROC (%)", "Det. AU-ROC", points(&[
        ("RD4AD", 92.4, 4.9),
        ("UniAD", 88.8, 4.6),
        ("DiAD", 86.8, 0.1),
        ("HVQ-Trans", 93.2, 5.0),
        ("OmiAD", 95.3, 35.3),
        ("InvAD", 96.9, 74.1),
    ]))
}

pub fn mpdd() -> Dataset {
    Dataset::new("MPDD", "Image-level AU-ROC (%)", "Det. AU-ROC", points(&[
        ("RD4AD", 84.1, 4.7),
        ("UniAD", 82.2, 5.8),
        ("DiAD", 74.6, 0.1),
        ("HVQ-Trans", 86.5, 6.2),
        ("OmiAD", 93.7, 49.8),
        ("InvAD", 96.5, 120.0),
    ]))
}

pub fn bmad() -> Dataset {
    Dataset::new("BMAD", "mAD", "mAD", points(&[
        ("PaDiM", 79.9, 20.0),
        ("CFlow", 77.0, 15.0),
        ("RD4AD", 84.2, 20.0),
        ("PatchCore", 86.4, 20.0),
        ("SimpleNet", 80.7, 10.0),
        ("InvAD", 87.2, 88.0),
    ]))
}

pub fn realiad() -> Dataset {
    Dataset::new("Real-IAD", "I-AUROC (%)", "I-AUROC", points(&[
        ("PatchCore", 90.4, 0.04),
        ("PaDiM", 86.6, 117.0),
        ("SimpleNet", 91.7, 10.0),
        ("DeSTSeg", 89.2, 110.0),
        ("UniAD", 75.6, 103.0),
        ("DiAD", 86.6, 11.0),
        ("HVQ-Trans", 82.7, 107.0),
        ("InvAD", 92.3, 148.0),
    ]))
}

/// Accuracy/throughput of diffusion-based methods under one protocol.
pub fn comparison_table() -> Vec<MethodPoint> {
    points(&[
        ("GLAD", 99.3, 0.2),
        ("TransFusion", 99.2, 1.6),
        ("OmiAD", 98.8, 39.4),
        ("DeCoDiff", 95.7, 17.0),
        ("MDM", 91.9, 2.2),
        ("InvAD (Ours)", 99.1, 88.1),
    ])
}

/// Record with two accuracy metrics and a throughput metric.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GeneralizationRow {
    pub method: String,
    pub det: f64,
    pub loc: f64,
    pub fps: f64,
    pub ours: bool,
}

pub fn generalization_table() -> Vec<GeneralizationRow> {
    [
        ("DiAD", 97.2, 96.8, 0.1, false),
        ("DiAD + InvAD", 98.2, 97.5, 88.1, true),
        ("MDM", 91.9, 94.8, 2.2, false),
        ("MDM + InvAD", 98.2, 97.5, 63.0, true),
    ]
    .into_iter()
    .map(|(method, det, loc, fps, ours)| GeneralizationRow { method: method.to_string(), det, loc, fps, ours })
    .collect()
}

/// One ablation setting with detection and localization accuracy.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AblationRow {
    pub setting: String,
    pub det: f64,
    pub loc: f64,
    pub ours: bool,
}

pub fn architecture_ablation() -> Vec<AblationRow> {
    [
        ("MLP", 97.2, 96.8, false),
        ("UNet", 98.0, 97.3, false),
        ("DiT-base", 93.8, 95.9, false),
        ("DiT-gigant", 99.0, 97.5, true),
    ]
    .into_iter()
    .map(|(setting, det, loc, ours)| AblationRow { setting: setting.to_string(), det, loc, ours })
    .collect()
}

/// Named value list aligned to a shared ordinal axis.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NamedSeries {
    pub name: String,
    pub color: Color,
    pub values: Vec<f64>,
}

impl NamedSeries {
    pub fn is_ours(&self) -> bool { is_own_method(&self.name) }
}

/// Ordinal step labels shared by the scoring ablation series.
pub const SCORING_STEPS: [&str; 6] = ["3", "5", "10", "50", "100", "1000"];

pub fn scoring_ablation() -> Vec<NamedSeries> {
    vec![
        NamedSeries { name: "NLL".into(), color: Color::hex(0x63d6ff), values: vec![96.1, 95.2, 93.0, 89.7, 89.4, 89.1] },
        NamedSeries { name: "Diff".into(), color: Color::hex(0xff9b54), values: vec![98.4, 98.1, 95.8, 83.2, 82.2, 82.0] },
        NamedSeries {
            name: "NLL + Diff (Ours)".into(),
            color: Color::hex(0x00d2a6),
            values: vec![99.0, 98.9, 98.4, 96.0, 95.7, 95.4],
        },
    ]
}
