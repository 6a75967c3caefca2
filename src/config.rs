//! Configuration management for halocline.
//!
//! This module handles the layered configuration system with the following precedence:
//! 1. Environment variables (highest priority)
//! 2. JSON config file
//! 3. Default values (lowest priority)

use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{HaloclineError, Result};
use crate::interpolation::Extrapolation;

/// Environment variable overriding the log level
pub const ENV_LOG_LEVEL: &str = "HALOCLINE_LOG_LEVEL";

/// Environment variable overriding the vertical interpolation method
pub const ENV_INTERPOLATION: &str = "HALOCLINE_INTERPOLATION";

/// Vertical resolution configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerticalConfig {
    /// Method used between bracketing layers
    #[serde(default = "default_interpolation")]
    pub interpolation_method: String,

    /// Behaviour for targets outside a cell's sampled depths
    ///
    /// Only the linear method extrapolates. Nearest always returns the closest
    /// sample, so `missing` is rejected together with it.
    #[serde(default)]
    pub extrapolation: Extrapolation,

    /// Distance under which a target depth counts as hitting a layer exactly
    #[serde(default = "default_depth_tolerance")]
    pub depth_tolerance: f64,
}

/// Time axis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeConfig {
    /// Maximum distance in seconds between a requested instant and a time step
    #[serde(default)]
    pub tolerance_secs: i64,
}

/// Complete configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Vertical configuration
    #[serde(default)]
    pub vertical: VerticalConfig,

    /// Time configuration
    #[serde(default)]
    pub time: TimeConfig,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        // Start with defaults
        let mut config = Config::default();

        // Load from JSON file if provided
        if let Some(path) = config_path {
            let json_config = Self::load_from_file(path)?;
            config.merge(json_config);
        }

        // Override with environment variables
        if let Ok(level) = std::env::var(ENV_LOG_LEVEL) {
            config.log_level = level;
        }
        if let Ok(method) = std::env::var(ENV_INTERPOLATION) {
            config.vertical.interpolation_method = method;
        }

        Ok(config)
    }

    /// Load configuration from a JSON file
    fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        self.vertical = other.vertical;
        self.time = other.time;
        self.log_level = other.log_level;
    }

    /// Time tolerance as a duration
    pub fn time_tolerance(&self) -> Duration {
        Duration::seconds(self.time.tolerance_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        // Validate log level
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(HaloclineError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        // Validate interpolation method
        match self.vertical.interpolation_method.as_str() {
            "linear" | "nearest" => {}
            _ => {
                return Err(HaloclineError::Config {
                    message: format!(
                        "Invalid interpolation method: {}. Must be one of: linear, nearest",
                        self.vertical.interpolation_method
                    ),
                });
            }
        }

        if self.vertical.interpolation_method == "nearest"
            && self.vertical.extrapolation == Extrapolation::Missing
        {
            return Err(HaloclineError::Config {
                message: "Extrapolation 'missing' requires the linear interpolation method"
                    .to_string(),
            });
        }

        let tolerance = self.vertical.depth_tolerance;
        if tolerance.is_nan() || tolerance < 0.0 {
            return Err(HaloclineError::Config {
                message: format!(
                    "Depth tolerance must be a non-negative number, got {}",
                    self.vertical.depth_tolerance
                ),
            });
        }

        if self.time.tolerance_secs < 0 {
            return Err(HaloclineError::Config {
                message: format!(
                    "Time tolerance cannot be negative, got {}s",
                    self.time.tolerance_secs
                ),
            });
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vertical: VerticalConfig::default(),
            time: TimeConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for VerticalConfig {
    fn default() -> Self {
        Self {
            interpolation_method: default_interpolation(),
            extrapolation: Extrapolation::default(),
            depth_tolerance: default_depth_tolerance(),
        }
    }
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self { tolerance_secs: 0 }
    }
}

// Default value functions for serde
fn default_interpolation() -> String {
    "linear".to_string()
}

fn default_depth_tolerance() -> f64 {
    1e-6
}

fn default_log_level() -> String {
    "info".to_string()
}
