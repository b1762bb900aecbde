// File: crates/benchplot-core/src/host.rs
// Summary: Boundary to the host that owns drawing surfaces, title text and selector controls.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::error::Result;
use crate::primitive::{ChartOutput, Scene};

/// What the embedding layer provides. Renderers never touch a surface directly.
pub trait Host {
    fn has_surface(&self, id: &str) -> bool;
    /// Drop everything on surface `id` and show exactly `output`.
    fn replace_surface(&mut self, id: &str, output: &ChartOutput);
    /// Drop everything on surface `id`.
    fn clear_surface(&mut self, id: &str);
    /// Set the text of target `id`; hosts without that target ignore it.
    fn set_text(&mut self, id: &str, text: &str);
    fn set_selector_state(&mut self, key: &str, active: bool);
}

/// Render into surface `id` when the host has it mounted.
///
/// A missing surface skips the render entirely. A failed render clears the
/// surface so nothing from a previous render survives, and the error is returned.
pub fn mount<H, F>(host: &mut H, id: &str, render: F) -> Result<bool>
where
    H: Host + ?Sized,
    F: FnOnce() -> Result<ChartOutput>,
{
    if !host.has_surface(id) {
        debug!(surface = id, "surface not mounted; skipping render");
        return Ok(false);
    }
    match render() {
        Ok(output) => {
            host.replace_surface(id, &output);
            Ok(true)
        }
        Err(e) => {
            warn!(surface = id, error = %e, "render failed; surface cleared");
            host.clear_surface(id);
            Err(e)
        }
    }
}

/// In-memory host: keeps the latest scene per mounted surface.
#[derive(Clone, Debug, Default)]
pub struct MemoryHost {
    surfaces: BTreeMap<String, Option<ChartOutput>>,
    texts: BTreeMap<String, String>,
    selectors: BTreeMap<String, bool>,
    replacements: usize,
}

impl MemoryHost {
    pub fn new() -> Self { Self::default() }

    /// Host with the given surfaces mounted (and empty).
    pub fn with_surfaces<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        let mut h = Self::new();
        for id in ids { h.mount_surface(id); }
        h
    }

    pub fn mount_surface(&mut self, id: &str) {
        self.surfaces.entry(id.to_string()).or_insert(None);
    }

    pub fn output(&self, id: &str) -> Option<&ChartOutput> {
        self.surfaces.get(id).and_then(Option::as_ref)
    }

    pub fn scene(&self, id: &str) -> Option<&Scene> {
        self.output(id).map(|o| &o.scene)
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.texts.get(id).map(String::as_str)
    }

    pub fn register_selector(&mut self, key: &str) {
        self.selectors.entry(key.to_string()).or_insert(false);
    }

    /// Keys whose selector currently carries the active marker.
    pub fn active_selectors(&self) -> Vec<&str> {
        self.selectors.iter().filter(|(_, on)| **on).map(|(k, _)| k.as_str()).collect()
    }

    /// Number of surface replacements performed so far.
    pub fn replacements(&self) -> usize { self.replacements }
}

impl Host for MemoryHost {
    fn has_surface(&self, id: &str) -> bool { self.surfaces.contains_key(id) }

    fn replace_surface(&mut self, id: &str, output: &ChartOutput) {
        if let Some(slot) = self.surfaces.get_mut(id) {
            *slot = Some(output.clone());
            self.replacements += 1;
        }
    }

    fn clear_surface(&mut self, id: &str) {
        if let Some(slot) = self.surfaces.get_mut(id) {
            *slot = None;
        }
    }

    fn set_text(&mut self, id: &str, text: &str) {
        self.texts.insert(id.to_string(), text.to_string());
    }

    fn set_selector_state(&mut self, key: &str, active: bool) {
        self.selectors.insert(key.to_string(), active);
    }
}
