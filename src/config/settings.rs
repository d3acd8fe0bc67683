//! Settings structures for UAForge configuration

use crate::generator::Variant;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main settings structure matching settings.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub server: ServerSettings,
    pub generator: GeneratorSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            general: GeneralSettings::default(),
            server: ServerSettings::default(),
            generator: GeneratorSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables (UAFORGE_* prefix)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("UAFORGE_DEBUG") {
            self.general.debug = val.parse().unwrap_or(false);
        }
        if let Ok(val) = std::env::var("UAFORGE_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("UAFORGE_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Ok(val) = std::env::var("UAFORGE_BASE_URL") {
            self.server.base_url = Some(val);
        }
        if let Ok(val) = std::env::var("UAFORGE_MAX_COUNT") {
            if let Ok(max) = val.parse() {
                self.generator.max_count = max;
            }
        }
    }
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable debug logging
    pub debug: bool,
    /// Instance name displayed in the UI
    pub instance_name: String,
    /// Record usage counters for the stats page
    pub enable_stats: bool,
    /// Contact URL shown on the about page
    pub contact_url: Option<String>,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            debug: false,
            instance_name: "UAForge".to_string(),
            enable_stats: true,
            contact_url: None,
        }
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
    /// Base URL for the instance
    pub base_url: Option<String>,
    /// Public instance mode (controls robots.txt)
    pub public_instance: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 8088,
            bind_address: "127.0.0.1".to_string(),
            base_url: None,
            public_instance: false,
        }
    }
}

/// Generator defaults and limits
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Variant preselected in the UI
    pub default_variant: Variant,
    /// Batch size used when none is requested
    pub default_count: u32,
    /// Largest batch the web endpoints will serve
    pub max_count: u32,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            default_variant: Variant::Dalvik,
            default_count: crate::DEFAULT_COUNT,
            max_count: crate::MAX_COUNT,
        }
    }
}
