// File: crates/demo/src/main.rs
// Summary: `benchplot` CLI; renders every chart surface to files and replays benchmark selections.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use benchplot_core::theme;
use benchplot_core::{render_static_charts, surface, BenchmarkSwitch, Catalog, RenderOptions, SwitchOutcome};
use benchplot_demo::{dataset_key, load_dataset_csv, FileHost, OutputFormats};
use benchplot_render_skia::{RasterOptions, SkiaRenderer};
use clap::Parser;
use tracing::{info, warn};

/// benchplot: benchmark comparison charts as SVG/PNG files
#[derive(Parser, Debug)]
#[command(name = "benchplot")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output directory for chart files and manifest.json
    #[arg(short, long, value_name = "DIR", default_value = "target/out", env = "BENCHPLOT_OUT")]
    out: PathBuf,

    /// Benchmark keys to select in order after the startup render (repeatable)
    #[arg(short, long = "select", value_name = "KEY")]
    select: Vec<String>,

    /// Also rasterise every surface to PNG
    #[arg(long)]
    png: bool,

    /// Also dump every surface's primitive list as JSON
    #[arg(long)]
    json: bool,

    /// Palette preset (dark, light)
    #[arg(long, default_value = "dark")]
    theme: String,

    /// Extra benchmark loaded from a CSV with method, score and fps columns
    #[arg(long, value_name = "FILE", requires = "dataset_name")]
    dataset_csv: Option<PathBuf>,

    /// Display name of the CSV benchmark
    #[arg(long, value_name = "NAME")]
    dataset_name: Option<String>,

    /// Axis label for the CSV benchmark's accuracy metric
    #[arg(long, default_value = "Image-level AU-ROC (%)")]
    metric_label: String,

    /// Short metric name used in the bar chart title
    #[arg(long, default_value = "AU-ROC")]
    metric_short: String,

    /// List benchmark keys and exit
    #[arg(long)]
    list: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let mut catalog = Catalog::builtin();
    if let (Some(path), Some(name)) = (&cli.dataset_csv, &cli.dataset_name) {
        let ds = load_dataset_csv(path, name, &cli.metric_label, &cli.metric_short)
            .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
        ds.validate().with_context(|| format!("dataset '{name}' is not chartable"))?;
        let key = dataset_key(name);
        if key.is_empty() {
            bail!("dataset name '{name}' has no alphanumeric characters");
        }
        info!(key = %key, points = ds.points.len(), "registered csv benchmark");
        catalog.insert(key, ds);
    }

    if cli.list {
        for key in catalog.keys() {
            if let Some(ds) = catalog.get(key) {
                println!("{key:<10} {} ({}, {} methods)", ds.name, ds.metric_short, ds.points.len());
            }
        }
        return Ok(());
    }

    let theme = theme::find(&cli.theme);
    if !theme.name.eq_ignore_ascii_case(&cli.theme) {
        warn!(requested = %cli.theme, "unknown theme; using dark");
    }
    let theme_name = theme.name;
    let opts = RenderOptions { theme, ..RenderOptions::default() };

    let raster = cli.png.then(|| SkiaRenderer::new(RasterOptions::from_theme(&opts.theme)));
    let formats = OutputFormats { png: cli.png, json: cli.json };
    let mut host = FileHost::new(&cli.out, surface::ALL, formats, raster)?;

    let fixed = render_static_charts(&mut host, &opts);
    info!(charts = fixed, "rendered fixed-domain charts");

    let mut switch = BenchmarkSwitch::new(catalog, opts)?;
    switch.initialize(&mut host);
    info!(active = switch.active_key(), "startup render complete");

    for key in &cli.select {
        match switch.select(key, &mut host) {
            SwitchOutcome::Switched => {}
            SwitchOutcome::AlreadyActive => info!(key = %key, "already active"),
            SwitchOutcome::UnknownKey => warn!(key = %key, "no such benchmark; try --list"),
        }
    }

    let manifest = host.write_manifest(switch.active_key(), theme_name)?;
    if !host.failures().is_empty() {
        bail!("{} surface write(s) failed: {}", host.failures().len(), host.failures().join("; "));
    }

    println!("Active benchmark: {}", switch.active_key());
    for id in [surface::BAR_TITLE, surface::SCATTER_TITLE] {
        if let Some(title) = host.text(id) {
            println!("  {id}: {title}");
        }
    }
    println!("Wrote {} files to {}", host.written() + 1, host.out_dir().display());
    println!("Manifest: {}", manifest.display());
    Ok(())
}
