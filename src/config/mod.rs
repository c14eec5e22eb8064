//! Configuration module for ghsearch-rs
//!
//! Handles loading and validating settings from YAML files and environment variables.

mod settings;

pub use settings::*;

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variable pointing at an explicit settings file
pub const SETTINGS_PATH_ENV: &str = "GHSEARCH_SETTINGS_PATH";

/// Load settings from an explicit path, the environment, a default location, or defaults.
///
/// Environment overrides are applied last and the result is validated.
pub fn load(explicit: Option<&Path>) -> Result<Settings> {
    let mut settings = match locate(explicit) {
        Some(path) => {
            info!("Loading settings from: {}", path.display());
            Settings::from_file(&path)?
        }
        None => {
            info!("No settings file found, using defaults");
            Settings::default()
        }
    };

    settings.merge_env();
    settings.validate()?;
    Ok(settings)
}

fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Ok(path) = std::env::var(SETTINGS_PATH_ENV) {
        let path = PathBuf::from(path);
        if path.exists() {
            return Some(path);
        }
    }

    let mut candidates = vec![
        PathBuf::from("ghsearch.yml"),
        PathBuf::from("config/ghsearch.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("ghsearch-rs/settings.yml"));
    }

    candidates.into_iter().find(|p| p.exists())
}
