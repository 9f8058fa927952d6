// File: src/config.rs
// Purpose: Navigation configuration parsing from ordo.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use ordo_router::DEFAULT_HOP_LIMIT;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NavConfig {
    #[serde(default)]
    pub navigation: NavigationConfig,
}

/// Navigation options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Path resolved on initial load (default: "/")
    #[serde(default = "default_initial_path")]
    pub initial_path: String,

    /// Maximum redirect hops before resolution fails (default: 10)
    #[serde(default = "default_redirect_limit")]
    pub redirect_limit: usize,
}

// Default values
fn default_initial_path() -> String {
    "/".to_string()
}

fn default_redirect_limit() -> usize {
    DEFAULT_HOP_LIMIT
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            initial_path: default_initial_path(),
            redirect_limit: default_redirect_limit(),
        }
    }
}

impl NavConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults, not an error
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: NavConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from the default path (./ordo.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("ordo.toml")
    }
}
