// File: crates/benchplot-core/src/controller.rs
// Summary: Benchmark switch controller: owns the active selection and redraws the dataset-driven charts.

use tracing::{info, warn};

use crate::bar::BarComparisonChart;
use crate::chart::{surface, ChartRenderer};
use crate::data::{Catalog, Dataset};
use crate::error::{ChartError, Result};
use crate::grouped::{AblationChart, GeneralizationChart};
use crate::host::{mount, Host};
use crate::line::LineSeriesChart;
use crate::scatter::{ComparisonScatterChart, SpeedScatterChart};
use crate::types::RenderOptions;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwitchOutcome {
    Switched,
    /// The key was already active; nothing was redrawn.
    AlreadyActive,
    /// The key is not in the catalog; state and surfaces untouched.
    UnknownKey,
}

pub fn bar_title(ds: &Dataset) -> String {
    format!("Method Comparison ({}, {})", ds.name, ds.metric_short)
}

pub fn scatter_title(ds: &Dataset) -> String {
    format!("Speed-Accuracy Trade-off ({})", ds.name)
}

/// Holds the selected benchmark key. One instance per page session; tests build their own.
#[derive(Clone, Debug)]
pub struct BenchmarkSwitch {
    catalog: Catalog,
    active: String,
    options: RenderOptions,
}

impl BenchmarkSwitch {
    /// Starts on the catalog's first key.
    pub fn new(catalog: Catalog, options: RenderOptions) -> Result<Self> {
        let active = catalog.first_key().ok_or(ChartError::EmptyCatalog)?.to_string();
        Ok(Self { catalog, active, options })
    }

    /// Controller over the compiled-in benchmarks with default options.
    pub fn builtin() -> Self {
        let catalog = Catalog::builtin();
        let active = catalog.first_key().unwrap_or("mvtec").to_string();
        Self { catalog, active, options: RenderOptions::default() }
    }

    pub fn active_key(&self) -> &str { &self.active }

    pub fn active_dataset(&self) -> Option<&Dataset> { self.catalog.get(&self.active) }

    pub fn catalog(&self) -> &Catalog { &self.catalog }

    pub fn options(&self) -> &RenderOptions { &self.options }

    /// Startup render of the current selection, unconditionally.
    pub fn initialize<H: Host + ?Sized>(&self, host: &mut H) {
        self.redraw(host);
    }

    /// Switch to `key`, redrawing only on a genuine transition.
    pub fn select<H: Host + ?Sized>(&mut self, key: &str, host: &mut H) -> SwitchOutcome {
        if !self.catalog.contains(key) {
            warn!(key, "unknown benchmark key; selection unchanged");
            return SwitchOutcome::UnknownKey;
        }
        if key == self.active {
            return SwitchOutcome::AlreadyActive;
        }
        info!(from = %self.active, to = key, "switching benchmark");
        self.active = key.to_string();
        self.redraw(host);
        SwitchOutcome::Switched
    }

    /// Bar chart, scatter chart, both titles, then the selector markers, in that order.
    /// A failing chart leaves its own surface cleared and does not stop the rest.
    fn redraw<H: Host + ?Sized>(&self, host: &mut H) {
        let Some(ds) = self.catalog.get(&self.active) else { return };
        let opts = &self.options;
        let _ = mount(host, surface::BAR_COMPARISON, || BarComparisonChart::new(ds).render(opts));
        let _ = mount(host, surface::SPEED_SCATTER, || SpeedScatterChart::new(ds).render(opts));
        host.set_text(surface::BAR_TITLE, &bar_title(ds));
        host.set_text(surface::SCATTER_TITLE, &scatter_title(ds));
        for key in self.catalog.keys() {
            host.set_selector_state(key, key == self.active);
        }
    }
}

/// Render the four fixed-domain charts once. Returns how many surfaces were filled.
pub fn render_static_charts<H: Host + ?Sized>(host: &mut H, opts: &RenderOptions) -> usize {
    let results = [
        mount(host, surface::COMPARISON_SCATTER, || ComparisonScatterChart::default().render(opts)),
        mount(host, surface::ARCH_ABLATION, || AblationChart::default().render(opts)),
        mount(host, surface::SCORING_ABLATION, || LineSeriesChart::default().render(opts)),
        mount(host, surface::GENERALIZATION, || GeneralizationChart::default().render(opts)),
    ];
    results.iter().filter(|r| matches!(r, Ok(true))).count()
}
