//! Centralized layout/display options with TOML preset support.
//!
//! All tweakable settings (render style, overlay, geometry sizing,
//! analysis thresholds, colors) are consolidated here. Options serialize
//! to/from TOML for view presets.

mod analysis;
mod colors;
mod display;
mod geometry;

use std::path::Path;

pub use analysis::AnalysisOptions;
pub use colors::ColorOptions;
pub use display::{DisplayOptions, OverlayMode, RenderStyle};
pub use geometry::GeometryOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::LigviewError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[display]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Render style and overlay selection.
    pub display: DisplayOptions,
    /// Atom and bond sizing.
    pub geometry: GeometryOptions,
    /// Overlay analysis thresholds.
    pub analysis: AnalysisOptions,
    /// Color palette options.
    #[schemars(skip)]
    pub colors: ColorOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`LigviewError::OptionsParse`] on malformed TOML.
    pub fn from_toml(content: &str) -> Result<Self, LigviewError> {
        toml::from_str(content)
            .map_err(|e| LigviewError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`LigviewError::Io`] if the file cannot be read, or
    /// [`LigviewError::OptionsParse`] if its contents are not valid options.
    pub fn load(path: &Path) -> Result<Self, LigviewError> {
        let content = std::fs::read_to_string(path).map_err(LigviewError::Io)?;
        let options = Self::from_toml(&content)?;
        log::info!("Loaded view preset '{}'", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`LigviewError::Io`] if the file or its parent directory
    /// cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), LigviewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| LigviewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(LigviewError::Io)?;
        }
        std::fs::write(path, content).map_err(LigviewError::Io)?;
        log::info!("Saved view preset '{}'", path.display());
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        } else {
            log::warn!("Preset directory '{}' is not readable", dir.display());
        }
        names.sort();
        names
    }
}
