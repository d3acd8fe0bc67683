//! Configuration module for UAForge
//!
//! Handles loading and validating settings from YAML files and environment
//! variables.

mod settings;

pub use settings::*;

use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

/// Load settings from the first settings file found, or use defaults
///
/// `UAFORGE_SETTINGS_PATH` takes precedence over the search paths; `UAFORGE_*`
/// environment variables are merged on top either way.
pub fn load() -> Result<Settings> {
    if let Ok(path) = std::env::var("UAFORGE_SETTINGS_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(&path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    let paths = [
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
        PathBuf::from("/etc/uaforge/settings.yml"),
        dirs::config_dir()
            .map(|p| p.join("uaforge/settings.yml"))
            .unwrap_or_default(),
    ];

    for path in paths.iter() {
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    info!("No settings file found, using defaults");
    let mut settings = Settings::default();
    settings.merge_env();
    Ok(settings)
}
