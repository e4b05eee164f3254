//! Scorecard configuration loaded from environment variables.
//!
//! Command-line flags in the binary take precedence over these values.

use std::env;
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::AppError;

/// How log lines are written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::config(format!(
                "SCORECARD_LOG_FORMAT must be 'text' or 'json', got '{other}'"
            ))),
        }
    }
}

/// How the scorecard is printed after each command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(AppError::config(format!(
                "SCORECARD_OUTPUT must be 'table' or 'json', got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_format: LogFormat,
    pub output: OutputFormat,
    pub team1_name: String,
    pub team2_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Text,
            output: OutputFormat::Table,
            team1_name: String::new(),
            team2_name: String::new(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which returns the value of a
    /// variable or None when it is unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let log_format = match lookup("SCORECARD_LOG_FORMAT") {
            Some(v) => v.parse()?,
            None => defaults.log_format,
        };
        let output = match lookup("SCORECARD_OUTPUT") {
            Some(v) => v.parse()?,
            None => defaults.output,
        };

        Ok(Self {
            log_format,
            output,
            team1_name: lookup("SCORECARD_TEAM1_NAME").unwrap_or_default(),
            team2_name: lookup("SCORECARD_TEAM2_NAME").unwrap_or_default(),
        })
    }
}
