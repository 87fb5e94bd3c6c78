//! Engine configuration
//!
//! Runtime settings with serde defaults, loadable from a JSON file. Every
//! field may be omitted; a missing file section keeps the built-in value.

use crate::error::ComputeError;
use crate::window::WindowConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub window: WindowConfig,
}

impl EngineConfig {
    /// Parse and validate configuration from JSON
    pub fn from_json(json: &str) -> Result<Self, ComputeError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ComputeError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, ComputeError> {
        let json = fs::read_to_string(path).map_err(|e| {
            ComputeError::ParseError(format!("Cannot read config {}: {}", path.display(), e))
        })?;
        Self::from_json(&json)
    }

    /// Override the window capacity when given
    pub fn with_capacity(mut self, capacity: Option<usize>) -> Self {
        if let Some(capacity) = capacity {
            self.window.capacity = capacity;
        }
        self
    }

    pub fn validate(&self) -> Result<(), ComputeError> {
        self.window.validate()
    }

    /// Log the effective configuration
    pub fn log_config(&self) {
        tracing::info!(
            capacity = self.window.capacity,
            retention_hours = ?self.window.retention_hours,
            "engine configuration loaded"
        );
    }
}
