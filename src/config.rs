//! Configuration management
//!
//! This module handles loading and managing configuration from:
//! - Command-line arguments
//! - Configuration files (TOML)
//! - Defaults

use crate::ensure;
use crate::error::{Error, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Longest word length `verify` accepts; the word count grows as |alphabet|^n.
pub const MAX_VERIFY_LENGTH: usize = 10;

/// Most words `verify` enumerates across all lengths.
pub const MAX_VERIFY_WORDS: usize = 1 << 20;

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub verify: VerifyConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the automaton description is read from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_input_path")]
    pub path: PathBuf,
}

/// Where and how the result line is written
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output file; stdout when absent
    pub path: Option<PathBuf>,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,
}

/// Output format types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The bare result line
    #[default]
    Text,
    /// JSON document with the result and graph statistics
    Json,
    /// DOT format (Graphviz) of the transition graph
    Dot,
}

/// Language verification settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyConfig {
    /// Longest word enumerated when comparing automaton and expression
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions

fn default_input_path() -> PathBuf {
    PathBuf::from("input.txt")
}

fn default_max_length() -> usize {
    4
}

fn default_log_level() -> String {
    "warn".to_string()
}

// Default implementations

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: None,
            format: OutputFormat::default(),
        }
    }
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            max_length: default_max_length(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let contents = std::fs::read_to_string(&path)
            .map_err(|e| Error::Config(format!("Failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config file {:?}: {}", path, e)))?;
        config.check()?;

        Ok(config)
    }

    /// Parse and check configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents).map_err(|e| Error::Config(e.to_string()))?;
        config.check()?;
        Ok(config)
    }

    /// Load configuration from default locations
    ///
    /// Searches in order:
    /// 1. ./fsa2regex.toml
    /// 2. ~/.fsa2regex/config.toml
    /// 3. /etc/fsa2regex/config.toml
    pub fn load() -> Result<Self> {
        let paths = vec![
            PathBuf::from("fsa2regex.toml"),
            dirs::home_dir()
                .map(|h| h.join(".fsa2regex").join("config.toml"))
                .unwrap_or_else(|| PathBuf::from("/dev/null")),
            PathBuf::from("/etc/fsa2regex/config.toml"),
        ];

        for path in paths {
            if path.exists() {
                tracing::info!("Loading config from {:?}", path);
                return Self::from_file(path);
            }
        }

        tracing::debug!("No config file found, using defaults");
        Ok(Config::default())
    }

    fn check(&self) -> Result<()> {
        ensure!(
            self.verify.max_length <= MAX_VERIFY_LENGTH,
            "verify.max_length must be at most {}",
            MAX_VERIFY_LENGTH
        );
        Ok(())
    }
}
