//! Error types for configuration and checkpoint operations.

use thiserror::Error;

/// Errors raised while loading or validating configuration input
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("{field} = {value} is out of range (expected {expected})")]
    OutOfRange {
        field: String,
        value: f64,
        expected: &'static str,
    },
}

impl ConfigError {
    pub(crate) fn out_of_range(field: impl Into<String>, value: f64, expected: &'static str) -> Self {
        Self::OutOfRange {
            field: field.into(),
            value,
            expected,
        }
    }
}

/// Errors that can occur during checkpoint operations
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
}
