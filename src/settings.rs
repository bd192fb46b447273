//! Editor settings.
//!
//! Settings live in `<config dir>/notesboard/settings.json`. Every field has
//! a default, so a partial or missing file is fine; an unreadable file falls
//! back to defaults with a warning instead of stopping the editor.

use crate::constants::{
    CLICK_MAX_MS, CLICK_SLOP, MAX_HISTORY_STATES, NUDGE_STEP, NUDGE_STEP_LARGE, PASTE_OFFSET,
    RESIZE_HANDLE_SIZE, SCROLL_LINE_PIXELS, ZOOM_STEP,
};
use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Undo depth; the oldest snapshot is dropped beyond this
    pub history_limit: usize,
    /// Offset applied to each paste/duplicate
    pub paste_offset: f32,
    pub nudge_step: f32,
    pub nudge_step_large: f32,
    /// Pointer travel in pixels below which a press is a click
    pub click_slop: f32,
    pub click_max_ms: u64,
    /// Resize corner size in pixels
    pub resize_handle_size: f32,
    pub zoom_step: f32,
    pub scroll_line_pixels: f32,
    /// Minimum spacing of store writes; 0 writes on every commit
    pub save_debounce_ms: u64,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            history_limit: MAX_HISTORY_STATES,
            paste_offset: PASTE_OFFSET,
            nudge_step: NUDGE_STEP,
            nudge_step_large: NUDGE_STEP_LARGE,
            click_slop: CLICK_SLOP,
            click_max_ms: CLICK_MAX_MS,
            resize_handle_size: RESIZE_HANDLE_SIZE,
            zoom_step: ZOOM_STEP,
            scroll_line_pixels: SCROLL_LINE_PIXELS,
            save_debounce_ms: 0,
        }
    }
}

/// Default location of the settings file, if the platform has a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("notesboard").join("settings.json"))
}

impl EditorSettings {
    /// Load from the default location, falling back to defaults.
    pub fn load() -> Self {
        match default_settings_path() {
            Some(path) if path.exists() => Self::load_or_default(&path),
            _ => Self::default(),
        }
    }

    /// Load from `path`, falling back to defaults on any failure.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Using default settings: {:#}", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        let settings: Self = serde_json::from_str(&raw)
            .with_context(|| format!("parsing settings in {}", path.display()))?;
        Ok(settings.sanitized())
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Replace nonsensical values with defaults.
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.history_limit == 0 {
            self.history_limit = defaults.history_limit;
        }
        if !(self.zoom_step > 0.0) {
            self.zoom_step = defaults.zoom_step;
        }
        if !(self.resize_handle_size > 0.0) {
            self.resize_handle_size = defaults.resize_handle_size;
        }
        if self.click_slop < 0.0 {
            self.click_slop = defaults.click_slop;
        }
        self
    }
}
