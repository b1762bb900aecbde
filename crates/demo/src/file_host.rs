// File: crates/demo/src/file_host.rs
// Summary: Host that mounts chart surfaces as files in an output directory.
// Notes:
// - Each surface maps to `<out>/<id>.svg`, plus `.png` / `.json` when enabled.
// - The `Host` trait cannot fail, so I/O errors are logged and collected for the caller.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use benchplot_core::{to_svg, ChartOutput, Host};
use benchplot_render_skia::SkiaRenderer;
use serde::Serialize;
use tracing::{debug, warn};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputFormats {
    pub png: bool,
    pub json: bool,
}

pub struct FileHost {
    out_dir: PathBuf,
    surfaces: BTreeSet<String>,
    formats: OutputFormats,
    raster: Option<SkiaRenderer>,
    texts: BTreeMap<String, String>,
    selectors: BTreeMap<String, bool>,
    written: usize,
    failures: Vec<String>,
}

#[derive(Serialize)]
struct Manifest<'a> {
    active: &'a str,
    theme: &'a str,
    titles: &'a BTreeMap<String, String>,
    selectors: &'a BTreeMap<String, bool>,
    surfaces: Vec<&'a str>,
}

impl FileHost {
    /// Creates `out_dir` and mounts `surfaces`. PNG output needs a raster renderer.
    pub fn new<'a>(
        out_dir: impl Into<PathBuf>,
        surfaces: impl IntoIterator<Item = &'a str>,
        formats: OutputFormats,
        raster: Option<SkiaRenderer>,
    ) -> Result<Self> {
        let out_dir = out_dir.into();
        fs::create_dir_all(&out_dir).with_context(|| format!("creating {}", out_dir.display()))?;
        Ok(Self {
            out_dir,
            surfaces: surfaces.into_iter().map(str::to_string).collect(),
            formats: OutputFormats { png: formats.png && raster.is_some(), ..formats },
            raster,
            texts: BTreeMap::new(),
            selectors: BTreeMap::new(),
            written: 0,
            failures: Vec::new(),
        })
    }

    pub fn out_dir(&self) -> &Path { &self.out_dir }

    pub fn surface_path(&self, id: &str, ext: &str) -> PathBuf {
        self.out_dir.join(format!("{id}.{ext}"))
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.texts.get(id).map(String::as_str)
    }

    pub fn selectors(&self) -> &BTreeMap<String, bool> { &self.selectors }

    /// Files written so far, counting rewrites.
    pub fn written(&self) -> usize { self.written }

    /// I/O problems hit while applying surfaces.
    pub fn failures(&self) -> &[String] { &self.failures }

    fn write_surface(&mut self, id: &str, output: &ChartOutput) -> Result<()> {
        let svg_path = self.surface_path(id, "svg");
        fs::write(&svg_path, to_svg(&output.scene)).with_context(|| format!("writing {}", svg_path.display()))?;
        self.written += 1;

        if self.formats.png {
            if let Some(raster) = &self.raster {
                let png_path = self.surface_path(id, "png");
                raster.render_to_png(&output.scene, &png_path).with_context(|| format!("writing {}", png_path.display()))?;
                self.written += 1;
            }
        }
        if self.formats.json {
            let json_path = self.surface_path(id, "json");
            let json = serde_json::to_string_pretty(output)?;
            fs::write(&json_path, json).with_context(|| format!("writing {}", json_path.display()))?;
            self.written += 1;
        }
        debug!(surface = id, primitives = output.scene.len(), "surface written");
        Ok(())
    }

    /// Writes `manifest.json` with titles, selector flags and the active key.
    pub fn write_manifest(&self, active: &str, theme: &str) -> Result<PathBuf> {
        let manifest = Manifest {
            active,
            theme,
            titles: &self.texts,
            selectors: &self.selectors,
            surfaces: self.surfaces.iter().map(String::as_str).collect(),
        };
        let path = self.out_dir.join("manifest.json");
        fs::write(&path, serde_json::to_string_pretty(&manifest)?).with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

impl Host for FileHost {
    fn has_surface(&self, id: &str) -> bool { self.surfaces.contains(id) }

    fn replace_surface(&mut self, id: &str, output: &ChartOutput) {
        if let Err(e) = self.write_surface(id, output) {
            warn!(surface = id, error = %e, "failed to write surface");
            self.failures.push(format!("{id}: {e:#}"));
        }
    }

    fn clear_surface(&mut self, id: &str) {
        for ext in ["svg", "png", "json"] {
            let path = self.surface_path(id, ext);
            match fs::remove_file(&path) {
                Ok(()) => debug!(path = %path.display(), "cleared"),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to clear surface file");
                    self.failures.push(format!("{id}: {e}"));
                }
            }
        }
    }

    fn set_text(&mut self, id: &str, text: &str) {
        self.texts.insert(id.to_string(), text.to_string());
    }

    fn set_selector_state(&mut self, key: &str, active: bool) {
        self.selectors.insert(key.to_string(), active);
    }
}
