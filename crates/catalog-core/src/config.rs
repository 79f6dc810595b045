//! Catalog configuration (`catalog.toml`)
//!
//! Lookup order:
//! 1. an explicit `--config` path
//! 2. `catalog.toml` in the working directory
//! 3. `catalog.toml` in `$CATALOG_CONFIG_DIR`, or the user config directory
//!
//! A missing file means defaults. Relative data paths are resolved against
//! the directory the config file lives in.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bail_invalid;
use crate::error::{CatalogError, Result};
use crate::score::BadgeThresholds;

pub const CONFIG_FILE: &str = "catalog.toml";
const CONFIG_DIR: &str = "catalog";
const CONFIG_DIR_ENV_VAR: &str = "CATALOG_CONFIG_DIR";

/// Catalog configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Product catalog JSON file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,

    /// Publication weight JSON file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights_path: Option<PathBuf>,

    /// Score badge cut-offs
    #[serde(default)]
    pub badge: BadgeThresholds,
}

impl CatalogConfig {
    /// Load and validate a config file
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CatalogError::io_operation("read config", path.display(), e))?;
        let mut config: CatalogConfig = toml::from_str(&content)?;

        if config.badge.good > config.badge.excellent {
            bail_invalid!(
                "badge thresholds",
                format!(
                    "good ({}) is above excellent ({})",
                    config.badge.good, config.badge.excellent
                )
            );
        }

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        config.catalog_path = config.catalog_path.map(|p| base.join(p));
        config.weights_path = config.weights_path.map(|p| base.join(p));

        Ok(config)
    }

    /// Find and load the config for a working directory
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let local = cwd.join(CONFIG_FILE);
        if local.is_file() {
            return Self::load(&local);
        }

        match Self::user_config_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn user_config_path() -> Option<PathBuf> {
        let dir = match std::env::var_os(CONFIG_DIR_ENV_VAR) {
            Some(dir) => PathBuf::from(dir),
            None => dirs::config_dir()?.join(CONFIG_DIR),
        };
        Some(dir.join(CONFIG_FILE))
    }
}
