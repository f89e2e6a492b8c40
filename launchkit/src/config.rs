//! Action configuration
//!
//! Settings are resolved once at start-up and never written back.

use anyhow::{Context, Result};
use launchkit_core::{LaunchError, TransformKind, DEFAULT_ENDPOINT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::client::DEFAULT_TIMEOUT_SECS;

pub const ENV_ENDPOINT: &str = "LAUNCHKIT_ENDPOINT";
pub const ENV_TIMEOUT: &str = "LAUNCHKIT_TIMEOUT";
pub const ENV_VERBOSE: &str = "LAUNCHKIT_VERBOSE";
pub const ENV_TRANSFORM: &str = "LAUNCHKIT_TRANSFORM";
pub const ENV_ESCAPE_UNICODE: &str = "LAUNCHKIT_ESCAPE_UNICODE";

const MAX_TIMEOUT_SECS: u64 = 300;

/// Resolved configuration shared by both actions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LaunchConfig {
    /// Endpoint fetched when no argument is given
    pub default_endpoint: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Enable debug logging on stderr
    pub verbose: bool,

    /// Clipboard transform
    pub transform: TransformKind,

    /// Escape non-ASCII characters in rendered JSON
    pub escape_unicode: bool,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            default_endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
            verbose: false,
            transform: TransformKind::default(),
            escape_unicode: true,
        }
    }
}

impl LaunchConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Default configuration file path
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            PathBuf::from(xdg_config)
        } else if let Some(home) = dirs::home_dir() {
            home.join(".config")
        } else {
            return Err(anyhow::anyhow!("Cannot determine config directory"));
        };

        Ok(config_dir.join("launchkit").join("config.toml"))
    }

    /// Create a new builder for constructing configuration
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

/// Builder for configuration with validation and priority chain support
///
/// Priority chain (lowest to highest):
/// 1. Defaults
/// 2. Config file
/// 3. Environment variables
/// 4. CLI arguments
///
/// Layers are applied highest first; a layer only fills values that are
/// still unset.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    default_endpoint: Option<String>,
    timeout: Option<u64>,
    verbose: Option<bool>,
    transform: Option<TransformKind>,
    escape_unicode: Option<bool>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default endpoint (with validation)
    pub fn with_default_endpoint(mut self, endpoint: impl Into<String>) -> Result<Self> {
        let endpoint = endpoint.into();
        Self::validate_endpoint(&endpoint)?;
        self.default_endpoint = Some(endpoint);
        Ok(self)
    }

    /// Set timeout (with validation)
    pub fn with_timeout(mut self, timeout: u64) -> Result<Self> {
        Self::validate_timeout(timeout)?;
        self.timeout = Some(timeout);
        Ok(self)
    }

    /// Set verbose flag
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    /// Set clipboard transform
    pub fn with_transform(mut self, transform: TransformKind) -> Self {
        self.transform = Some(transform);
        self
    }

    /// Set unicode escaping
    pub fn with_escape_unicode(mut self, escape_unicode: bool) -> Self {
        self.escape_unicode = Some(escape_unicode);
        self
    }

    /// Fill unset values from a config file.
    ///
    /// `path` overrides the default location. A missing or unreadable file
    /// leaves the builder unchanged.
    pub fn with_config_file(self, load_file: bool, path: Option<&Path>) -> Self {
        if !load_file {
            return self;
        }

        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match LaunchConfig::default_path() {
                Ok(path) => path,
                Err(_) => return self,
            },
        };

        match LaunchConfig::load(&path) {
            Ok(config) => self.merge_file(config),
            Err(_) => self,
        }
    }

    fn merge_file(self, config: LaunchConfig) -> Self {
        let default_endpoint = self.default_endpoint.or_else(|| {
            Self::validate_endpoint(&config.default_endpoint)
                .ok()
                .map(|_| config.default_endpoint)
        });
        let timeout = self.timeout.or_else(|| {
            Self::validate_timeout(config.timeout)
                .ok()
                .map(|_| config.timeout)
        });

        Self {
            default_endpoint,
            timeout,
            verbose: self.verbose.or(Some(config.verbose)),
            transform: self.transform.or(Some(config.transform)),
            escape_unicode: self.escape_unicode.or(Some(config.escape_unicode)),
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_overrides(mut self) -> Self {
        // Only apply env vars if values weren't already set (preserving priority)
        if self.default_endpoint.is_none() {
            if let Ok(endpoint) = std::env::var(ENV_ENDPOINT) {
                if Self::validate_endpoint(&endpoint).is_ok() {
                    self.default_endpoint = Some(endpoint);
                }
            }
        }

        if self.timeout.is_none() {
            if let Ok(timeout) = std::env::var(ENV_TIMEOUT) {
                if let Ok(timeout) = timeout.parse() {
                    if Self::validate_timeout(timeout).is_ok() {
                        self.timeout = Some(timeout);
                    }
                }
            }
        }

        if self.verbose.is_none() {
            if let Ok(verbose) = std::env::var(ENV_VERBOSE) {
                self.verbose = Some(parse_bool(&verbose));
            }
        }

        if self.transform.is_none() {
            if let Ok(transform) = std::env::var(ENV_TRANSFORM) {
                self.transform = transform.parse().ok();
            }
        }

        if self.escape_unicode.is_none() {
            if let Ok(escape) = std::env::var(ENV_ESCAPE_UNICODE) {
                self.escape_unicode = Some(parse_bool(&escape));
            }
        }

        self
    }

    /// Build the final configuration with validation
    pub fn build(self) -> Result<LaunchConfig, LaunchError> {
        let defaults = LaunchConfig::default();

        let default_endpoint = self.default_endpoint.unwrap_or(defaults.default_endpoint);
        let timeout = self.timeout.unwrap_or(defaults.timeout);

        Self::validate_endpoint(&default_endpoint)?;
        Self::validate_timeout(timeout)?;

        Ok(LaunchConfig {
            default_endpoint,
            timeout,
            verbose: self.verbose.unwrap_or(defaults.verbose),
            transform: self.transform.unwrap_or(defaults.transform),
            escape_unicode: self.escape_unicode.unwrap_or(defaults.escape_unicode),
        })
    }

    /// The endpoint itself is left to the transport layer; only emptiness is
    /// rejected for the configured default.
    fn validate_endpoint(endpoint: &str) -> Result<(), LaunchError> {
        if endpoint.trim().is_empty() {
            return Err(LaunchError::Config(
                "Default endpoint cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    fn validate_timeout(timeout: u64) -> Result<(), LaunchError> {
        if timeout == 0 {
            return Err(LaunchError::Config(
                "Timeout must be greater than 0".to_string(),
            ));
        }

        if timeout > MAX_TIMEOUT_SECS {
            return Err(LaunchError::Config(format!(
                "Timeout must be less than or equal to {} seconds",
                MAX_TIMEOUT_SECS
            )));
        }

        Ok(())
    }
}

fn parse_bool(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value == "1"
}
