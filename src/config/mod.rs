//! Configuration System for glycemia
//!
//! Provides:
//! - TOML configuration files
//! - Environment variable overrides
//! - Multiple config file locations
//!
//! # Configuration File Locations
//!
//! Configuration files are searched in order (first found wins):
//! 1. `./glycemia.toml` - Project-local configuration
//! 2. `~/.config/glycemia/config.toml` - User configuration (XDG)
//! 3. `~/.glycemia/config.toml` - User configuration (legacy)
//! 4. `/etc/glycemia/config.toml` - System-wide configuration
//!
//! # Environment Variables
//!
//! - `GLYCEMIA_PROFILE` - Inference profile (standard, extended)
//! - `GLYCEMIA_LOG_LEVEL` - Logging verbosity (quiet, normal, verbose, debug)
//! - `GLYCEMIA_FORMAT` - Output format (text, json, csv)
//! - `GLYCEMIA_SEED` - Simulation seed
//! - `GLYCEMIA_STEPS` - Simulation length
//! - `GLYCEMIA_SAMPLES` - Membership curve resolution
//!
//! # Example Configuration
//!
//! ```toml
//! [general]
//! log_level = "normal"
//! format = "text"
//!
//! [inference]
//! profile = "standard"
//!
//! [simulation]
//! seed = 113
//! steps = 100
//! samples = 1000
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fuzzy::ProfileKind;

// ============================================================================
// Configuration Schema
// ============================================================================

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GlycemiaConfig {
    pub general: GeneralConfig,
    pub inference: InferenceConfig,
    pub simulation: SimulationConfig,
}

/// General configuration options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GeneralConfig {
    pub log_level: LogLevel,
    pub format: OutputFormat,
}

/// Inference settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InferenceConfig {
    pub profile: ProfileKind,
}

/// Diagnostics settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Seed for the simulated input streams
    pub seed: u64,
    /// Number of simulated time steps
    pub steps: usize,
    /// Sample points per membership curve
    pub samples: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 113,
            steps: 100,
            samples: 1000,
        }
    }
}

// ============================================================================
// Enums
// ============================================================================

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "plain" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            "csv" => Some(OutputFormat::Csv),
            _ => None,
        }
    }
}

/// Log level options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Verbose => "verbose",
            LogLevel::Debug => "debug",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "quiet" | "q" | "0" => Some(LogLevel::Quiet),
            "normal" | "n" | "1" => Some(LogLevel::Normal),
            "verbose" | "v" | "2" => Some(LogLevel::Verbose),
            "debug" | "d" | "3" => Some(LogLevel::Debug),
            _ => None,
        }
    }

    /// Maximum tracing level emitted at this verbosity
    pub fn tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Quiet => tracing::Level::ERROR,
            LogLevel::Normal => tracing::Level::WARN,
            LogLevel::Verbose => tracing::Level::DEBUG,
            LogLevel::Debug => tracing::Level::TRACE,
        }
    }
}

// ============================================================================
// Configuration Loading
// ============================================================================

impl GlycemiaConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from the first existing default location, then
    /// apply environment variable overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        for path in Self::config_paths() {
            if path.exists() {
                config = Self::load_from_file(&path)?;
                break;
            }
        }

        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string
    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::from("<string>"),
            message: e.to_string(),
        })
    }

    /// Get the list of config file search paths
    pub fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("./glycemia.toml")];

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("glycemia").join("config.toml"));
        }

        if let Some(home_dir) = dirs::home_dir() {
            paths.push(home_dir.join(".glycemia").join("config.toml"));
        }

        #[cfg(unix)]
        paths.push(PathBuf::from("/etc/glycemia/config.toml"));

        paths
    }

    /// Apply overrides from the process environment
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable lookup. Unparseable values
    /// are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(profile) = lookup("GLYCEMIA_PROFILE").and_then(|v| ProfileKind::from_str(&v)) {
            self.inference.profile = profile;
        }

        if let Some(level) = lookup("GLYCEMIA_LOG_LEVEL").and_then(|v| LogLevel::from_str(&v)) {
            self.general.log_level = level;
        }

        if let Some(format) = lookup("GLYCEMIA_FORMAT").and_then(|v| OutputFormat::from_str(&v)) {
            self.general.format = format;
        }

        if let Some(seed) = lookup("GLYCEMIA_SEED").and_then(|v| v.parse().ok()) {
            self.simulation.seed = seed;
        }

        if let Some(steps) = lookup("GLYCEMIA_STEPS").and_then(|v| v.parse().ok()) {
            self.simulation.steps = steps;
        }

        if let Some(samples) = lookup("GLYCEMIA_SAMPLES").and_then(|v| v.parse().ok()) {
            self.simulation.samples = samples;
        }
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Write configuration to a file
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_toml()?;
        fs::write(path, content).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Generate a default configuration file content
    pub fn default_config_content() -> &'static str {
        r#"# glycemia configuration file

[general]
# Logging level: quiet, normal, verbose, debug
log_level = "normal"
# Output format: text, json, csv
format = "text"

[inference]
# Rule base: standard (5 rules) or extended (9 rules)
profile = "standard"

[simulation]
# Seed for the simulated input streams
seed = 113
# Number of simulated time steps
steps = 100
# Sample points per membership curve
samples = 1000
"#
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("IO error reading {}: {message}", .path.display())]
    Io { path: PathBuf, message: String },

    #[error("Parse error in {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Serialization error: {0}")]
    Serialize(String),
}

// ============================================================================
// Tests
// ============================================================================
