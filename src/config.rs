//! Configuration types for poly-buffer

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::report::OutputFormat;
use crate::stats::DEFAULT_THRESHOLD;
use crate::telemetry::LogFormat;

/// Root configuration structure
///
/// Every section is optional; missing keys take their defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Price log input configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    /// Price log written by the trading bot
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("logs/price.log")
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
        }
    }
}

/// Analysis configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisConfig {
    /// Upper edge of the dwell band
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Report output configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelemetryConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
