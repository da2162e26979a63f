//! Configuration error types.

use thiserror::Error;

/// A single rule broken by an [`EngineConfig`](super::EngineConfig).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("max_digits must be at least 1")]
    ZeroMaxDigits,

    #[error("max_consecutive_operations must be at least 1")]
    ZeroConsecutiveOperations,

    #[error("multiplication_limit must be finite and non-negative (got {0})")]
    InvalidMultiplicationLimit(f64),

    #[error("max_history must be at least 1")]
    ZeroMaxHistory,
}

/// Errors that can occur while loading engine configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration text is not valid JSON for an engine config
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// One or more limits are out of range. Lists every violation.
    #[error(
        "Invalid configuration: {}",
        .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
    )]
    Invalid(Vec<ConfigViolation>),
}
