//! Seeding settings, read from `seed.ron`, `seed.toml` or `seed.json`.
//!
//! Every field has a default, so an absent file or an empty table is a valid
//! configuration.

use crate::loader::{DataLoadError, Format, deserialize_file, detect_format, find_data_file};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Base name of the settings file.
pub const SETTINGS_BASE_NAME: &str = "seed";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedSettings {
    /// Key of the game version to seed.
    pub version: String,
    /// Snapshot destination.
    pub output: PathBuf,
    /// Snapshot encoding. Inferred from the output extension when absent.
    pub format: Option<Format>,
    /// Run the integrity check before committing.
    pub verify: bool,
    /// Replace an existing snapshot at `output`.
    pub overwrite: bool,
    /// `tracing-subscriber` filter directive, e.g. `"info,worldseed_core=debug"`.
    pub log_filter: String,
}

impl Default for SeedSettings {
    fn default() -> Self {
        Self {
            version: "season6".to_string(),
            output: PathBuf::from("world.ron"),
            format: None,
            verify: true,
            overwrite: false,
            log_filter: "info".to_string(),
        }
    }
}

impl SeedSettings {
    /// The snapshot format to write: explicit, or detected from `output`.
    pub fn resolved_format(&self) -> Result<Format, DataLoadError> {
        match self.format {
            Some(format) => Ok(format),
            None => detect_format(&self.output),
        }
    }
}

/// Load settings from `dir`. Falls back to defaults when no settings file exists.
pub fn load_settings(dir: &Path) -> Result<SeedSettings, DataLoadError> {
    match find_data_file(dir, SETTINGS_BASE_NAME)? {
        Some(path) => {
            debug!(path = %path.display(), "loading seed settings");
            deserialize_file(&path)
        }
        None => {
            debug!(dir = %dir.display(), "no seed settings file, using defaults");
            Ok(SeedSettings::default())
        }
    }
}
