//! Configuration management for askline.
//!
//! Handles loading and merging configuration from multiple sources:
//! - Built-in defaults
//! - Config files (.askline/config.yaml)
//! - Environment variables
//! - Command-line flags
//!
//! Later sources win: CLI flags override environment variables, which
//! override the config file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Default question-answering service endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";

/// Main application configuration.
///
/// Holds all global options that affect CLI behavior across commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Optional config file path
    pub config_file: Option<PathBuf>,

    /// Base URL of the question-answering service
    pub endpoint: String,

    /// Optional request timeout in seconds (no timeout when unset)
    pub timeout_secs: Option<u64>,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,
}

/// Full configuration file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConfigFile {
    service: Option<ServiceConfig>,
    logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ServiceConfig {
    endpoint: Option<String>,
    #[serde(rename = "timeoutSecs")]
    timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoggingConfig {
    level: Option<String>,
    color: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config_file: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: None,
            log_level: None,
            verbose: false,
            no_color: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from the config file and environment variables.
    ///
    /// `config_file` is the path given on the command line; when `None`,
    /// the `ASKLINE_CONFIG` environment variable and then the default
    /// location are consulted. An explicitly given path must exist; the
    /// default location is merged only when present.
    ///
    /// Environment variables:
    /// - `ASKLINE_CONFIG`: Path to config file
    /// - `ASKLINE_ENDPOINT`: Question-answering service base URL
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    pub fn load(config_file: Option<&Path>) -> AppResult<Self> {
        let mut config = Self::default();

        config.config_file = config_file.map(Path::to_path_buf);

        if config.config_file.is_none() {
            if let Ok(path) = std::env::var("ASKLINE_CONFIG") {
                config.config_file = Some(PathBuf::from(path));
            }
        }

        // Load from YAML config file
        match config.config_file.clone() {
            Some(path) => {
                if !path.exists() {
                    return Err(AppError::Config(format!(
                        "Config file does not exist: {:?}",
                        path
                    )));
                }
                config = config.merge_yaml(&path)?;
            }
            None => {
                let default_path = PathBuf::from(".askline/config.yaml");
                if default_path.exists() {
                    config = config.merge_yaml(&default_path)?;
                }
            }
        }

        // Environment variables override YAML config, but only when set
        if let Ok(endpoint) = std::env::var("ASKLINE_ENDPOINT") {
            config.endpoint = endpoint;
        }

        if let Ok(level) = std::env::var("RUST_LOG") {
            config.log_level = Some(level);
        }

        if std::env::var("NO_COLOR").is_ok() {
            config.no_color = true;
        }

        Ok(config)
    }

    /// Merge YAML configuration file into this config.
    fn merge_yaml(&mut self, path: &PathBuf) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config_file: ConfigFile = serde_yaml::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;

        let mut result = self.clone();

        if let Some(service) = config_file.service {
            if let Some(endpoint) = service.endpoint {
                result.endpoint = endpoint;
            }
            if let Some(timeout) = service.timeout_secs {
                result.timeout_secs = Some(timeout);
            }
        }

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                result.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                result.no_color = !color;
            }
        }

        Ok(result)
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// CLI flags take precedence over environment variables and the
    /// config file.
    pub fn with_overrides(
        mut self,
        endpoint: Option<String>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint;
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            // Verbose mode implies debug logging
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> AppResult<()> {
        if self.endpoint.trim().is_empty() {
            return Err(AppError::Config(
                "Service endpoint must not be empty".to_string(),
            ));
        }

        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(AppError::Config(format!(
                "Service endpoint must be an http(s) URL, got: {}",
                self.endpoint
            )));
        }

        if self.timeout_secs == Some(0) {
            return Err(AppError::Config(
                "Request timeout must be greater than zero when set".to_string(),
            ));
        }

        Ok(())
    }
}
