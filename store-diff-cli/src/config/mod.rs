//! Configuration
//!
//! Layers, lowest precedence first: built-in defaults, the TOML config file,
//! environment variables and command-line flags. The last two arrive together as
//! [`ConfigOverrides`] because clap reads both.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "store-diff";
const CONFIG_FILE: &str = "config.toml";

/// Effective configuration for a comparison run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prefix for both source locations. Empty means locations are used as-is.
    pub base_location: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    pub sources: SourceLocations,
    /// Query parameters appended to both source addresses
    pub query: BTreeMap<String, String>,
}

/// Locations of the two sources, relative to `base_location`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceLocations {
    pub mock: String,
    pub prod: String,
}

impl Default for SourceLocations {
    fn default() -> Self {
        Self {
            mock: "data/mockStore.json".to_string(),
            prod: "data/prodStore.json".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_location: String::new(),
            timeout_secs: 30,
            sources: SourceLocations::default(),
            query: BTreeMap::new(),
        }
    }
}

/// Values coming from environment variables or flags
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_location: Option<String>,
    pub mock: Option<String>,
    pub prod: Option<String>,
    pub timeout_secs: Option<u64>,
    pub query: Vec<(String, String)>,
}

impl Config {
    /// Default config file location (`<config dir>/store-diff/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load the config file at `path`, or the default file if it exists.
    ///
    /// An explicit path must exist; a missing default file just yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => {
                    log::debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(base) = overrides.base_location {
            self.base_location = base;
        }
        if let Some(mock) = overrides.mock {
            self.sources.mock = mock;
        }
        if let Some(prod) = overrides.prod {
            self.sources.prod = prod;
        }
        if let Some(timeout) = overrides.timeout_secs {
            self.timeout_secs = timeout;
        }
        self.query.extend(overrides.query);
    }

    pub fn validate(&self) -> Result<()> {
        if self.sources.mock.trim().is_empty() {
            anyhow::bail!("Mock source location is empty");
        }
        if self.sources.prod.trim().is_empty() {
            anyhow::bail!("Prod source location is empty");
        }
        if self.timeout_secs == 0 {
            anyhow::bail!("Timeout must be at least one second");
        }
        Ok(())
    }
}

/// Parse a `key=value` query parameter. The value may itself contain `=`.
pub fn parse_query_pair(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{}'", raw)),
    }
}
