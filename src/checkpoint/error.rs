//! Snapshot error types.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur while saving or restoring a session snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Snapshot version is not supported by this version
    #[error("Unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The stored engine configuration is not usable
    #[error("Snapshot configuration is invalid: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// Snapshot data is internally inconsistent
    #[error("Snapshot validation failed: {0}")]
    ValidationFailed(String),
}
