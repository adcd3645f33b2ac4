// File: crates/riemann-core/src/error.rs
// Summary: Error types for the fallible edges around the core (config, colours, form input).

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("empty colour string")]
    Empty,
    #[error("unknown colour name '{0}'")]
    UnknownName(String),
    #[error("invalid hex colour '{0}' (expected #rgb, #rrggbb or #rrggbbaa)")]
    InvalidHex(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Rejections produced while turning raw form fields into a plot request.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    #[error("unknown function '{0}'")]
    UnknownFunction(String),
    #[error("{field} is not a number: '{value}'")]
    InvalidNumber { field: &'static str, value: String },
    #[error("domain end ({end}) must be greater than start ({start})")]
    EmptyDomain { start: f64, end: f64 },
    #[error("partition size must be a positive integer, got '{0}'")]
    InvalidPartition(String),
}
