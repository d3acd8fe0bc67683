//! Application state shared across handlers

use crate::config::Settings;
use crate::stats::Stats;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Usage counters
    pub stats: Arc<Stats>,
    /// Template renderer
    pub templates: Arc<super::Templates>,
}

impl AppState {
    /// Create new application state
    pub fn new(settings: Settings) -> anyhow::Result<Self> {
        Ok(Self {
            settings: Arc::new(settings),
            stats: Arc::new(Stats::new()),
            templates: Arc::new(super::Templates::new()?),
        })
    }

    /// Get instance name
    pub fn instance_name(&self) -> &str {
        &self.settings.general.instance_name
    }

    /// Check if instance is public
    pub fn is_public(&self) -> bool {
        self.settings.server.public_instance
    }
}
