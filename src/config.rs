//! Configuration loading for the Unicode safety scan
//!
//! Supports TOML configuration; every missing field falls back to its
//! default. The SC2155 splitter takes no configuration.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::output::DEFAULT_SNIPPET_LIMIT;
use crate::rules::filetypes::{Classifier, DEFAULT_STRICT_PATHS};

/// Config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = ".unicode-safety.toml";

/// Scanner policy section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Extensionless paths that are always strict (replaces the default list)
    pub strict_paths: Vec<String>,

    /// Snippet truncation length in characters
    pub snippet_limit: usize,

    /// Show docs warnings
    pub warn_docs: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            strict_paths: DEFAULT_STRICT_PATHS.iter().map(|p| p.to_string()).collect(),
            snippet_limit: DEFAULT_SNIPPET_LIMIT,
            warn_docs: false,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub scan: ScanConfig,
}

impl Config {
    /// Load configuration from the standard locations or use defaults
    pub fn load() -> Self {
        let config_paths = [
            // Repository-local config
            Some(PathBuf::from(LOCAL_CONFIG_FILE)),
            // User-specific config
            dirs::home_dir().map(|p| p.join(".config/unicode-safety/config.toml")),
        ];

        for path in config_paths.into_iter().flatten() {
            if path.is_file() {
                match Self::load_from(&path) {
                    Ok(config) => return config,
                    Err(e) => tracing::warn!("{}; using defaults", e),
                }
            }
        }

        Config::default()
    }

    /// Load from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Expand ~ in path strings
    pub fn expand_path(path: &str) -> PathBuf {
        if let Some(rest) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
        PathBuf::from(path)
    }

    /// Path classifier for the configured strict paths
    pub fn classifier(&self) -> Classifier {
        Classifier::new(self.scan.strict_paths.iter().map(|p| Self::expand_path(p)))
    }
}
