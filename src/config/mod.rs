//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::constants::defaults;
use crate::core::error::{CdnMapError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// CDN base URL prefix for generated links
    pub base_url: Option<String>,

    /// URL path segment between base URL and file name
    pub url_path: Option<String>,

    /// Key prefix joined to file stems with an underscore
    pub prefix: Option<String>,

    /// Output file path for the JSON mapping
    pub output: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,

    /// Deny-list of path prefixes replacing the built-in set
    pub deny_paths: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Some(defaults::BASE_URL.to_string()),
            url_path: Some(defaults::URL_PATH.to_string()),
            prefix: Some(defaults::KEY_PREFIX.to_string()),
            output: Some(defaults::OUTPUT_FILE.to_string()),
            verbose: Some(false),
            deny_paths: None, // Built-in deny-list applies
        }
    }
}

impl Config {
    /// Load configuration from file, validating after parse
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            CdnMapError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            CdnMapError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        // Check for .cdnmap.toml in current directory
        if let Ok(config) = Self::load_from_file(".cdnmap.toml") {
            return config;
        }

        // Check for .cdnmap.toml in parent directories (up to 3 levels)
        for i in 1..=3 {
            let path = format!("{}.cdnmap.toml", "../".repeat(i));
            if let Ok(config) = Self::load_from_file(&path) {
                return config;
            }
        }

        // Fall back to defaults
        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(ref base_url) = cli_config.base_url {
            self.base_url = Some(base_url.clone());
        }
        if let Some(ref url_path) = cli_config.url_path {
            self.url_path = Some(url_path.clone());
        }
        if let Some(ref prefix) = cli_config.prefix {
            self.prefix = Some(prefix.clone());
        }
        if let Some(ref output) = cli_config.output {
            self.output = Some(output.clone());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(ref base_url) = self.base_url {
            if base_url.trim_end_matches('/').is_empty() {
                return Err(CdnMapError::Config(
                    "Base URL must not be empty".to_string(),
                ));
            }
        }
        if let Some(ref prefix) = self.prefix {
            if prefix.is_empty() {
                return Err(CdnMapError::Config(
                    "Key prefix must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Deny-list as paths, `None` when the built-in set applies
    pub fn deny_paths_as_paths(&self) -> Option<Vec<PathBuf>> {
        self.deny_paths
            .as_ref()
            .map(|paths| paths.iter().map(PathBuf::from).collect())
    }
}

/// Configuration values gathered from the command line before merging
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub base_url: Option<String>,
    pub url_path: Option<String>,
    pub prefix: Option<String>,
    pub output: Option<String>,
    pub verbose: bool,
    pub quiet: bool,
    pub assume_yes: bool,
    pub config_file: Option<String>,
    pub no_config: bool,
}
