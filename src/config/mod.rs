//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::core::constants::defaults;
use crate::core::error::{LogSightError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Log file parsed on every request
    pub log_file: Option<String>,

    /// Address the dashboard server listens on
    pub addr: Option<String>,

    /// Width of each chart in pixels
    pub chart_width: Option<u32>,

    /// Height of each chart in pixels
    pub chart_height: Option<u32>,

    /// Render the dashboard once to this HTML file instead of serving it
    pub output_path: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: Some(defaults::LOG_FILE.to_string()),
            addr: Some(defaults::ADDR.to_string()),
            chart_width: Some(defaults::CHART_WIDTH),
            chart_height: Some(defaults::CHART_HEIGHT),
            output_path: None, // Serve over HTTP by default
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LogSightError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            LogSightError::Config(format!(
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
        if let Ok(config) = Self::load_from_file(defaults::CONFIG_FILE_NAME) {
            return config;
        }

        for i in 1..=defaults::CONFIG_SEARCH_DEPTH {
            let path = format!("{}{}", "../".repeat(i), defaults::CONFIG_FILE_NAME);
            if let Ok(config) = Self::load_from_file(&path) {
                return config;
            }
        }

        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(ref log_file) = cli_config.log_file {
            self.log_file = Some(log_file.clone());
        }
        if let Some(ref addr) = cli_config.addr {
            self.addr = Some(addr.clone());
        }

        // Chart geometry
        if let Some(width) = cli_config.chart_width {
            self.chart_width = Some(width);
        }
        if let Some(height) = cli_config.chart_height {
            self.chart_height = Some(height);
        }

        // Output
        if let Some(ref output_path) = cli_config.output_path {
            self.output_path = Some(output_path.clone());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    /// Path of the log file, relative paths resolve against the working directory
    pub fn log_file_path(&self) -> PathBuf {
        PathBuf::from(self.log_file.as_deref().unwrap_or(defaults::LOG_FILE))
    }

    /// Parsed listen address
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let addr = self.addr.as_deref().unwrap_or(defaults::ADDR);
        addr.parse().map_err(|e| {
            LogSightError::InvalidArgument(format!("Could not parse address '{addr}': {e}"))
        })
    }

    /// Chart size as (width, height) in pixels
    pub fn chart_size(&self) -> (u32, u32) {
        (
            self.chart_width.unwrap_or(defaults::CHART_WIDTH),
            self.chart_height.unwrap_or(defaults::CHART_HEIGHT),
        )
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("chart_width", self.chart_width),
            ("chart_height", self.chart_height),
        ] {
            if let Some(px) = value {
                if px == 0 {
                    return Err(LogSightError::Config(format!(
                        "{name} cannot be 0. Expected a positive number of pixels."
                    )));
                }
                if px > defaults::MAX_CHART_DIMENSION {
                    return Err(LogSightError::Config(format!(
                        "{name} of {px} pixels is too large. Expected at most {}.",
                        defaults::MAX_CHART_DIMENSION
                    )));
                }
            }
        }

        if let Some(ref log_file) = self.log_file
            && log_file.trim().is_empty()
        {
            return Err(LogSightError::Config(
                "log_file cannot be empty. Expected a path to a log file.".to_string(),
            ));
        }

        if self.addr.is_some() {
            self.socket_addr()
                .map_err(|e| LogSightError::Config(e.to_string()))?;
        }

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    pub log_file: Option<String>, // --log-file
    pub addr: Option<String>,     // --addr

    // Chart geometry
    pub chart_width: Option<u32>,  // --chart-width
    pub chart_height: Option<u32>, // --chart-height

    // Output & verbosity
    pub output_path: Option<String>, // --output
    pub quiet: bool,                 // --quiet
    pub verbose: bool,               // --verbose

    // Configuration
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}
