//! Engine configuration.
//!
//! The defaults reproduce the calculator's documented limits. Every field
//! can be overridden from JSON; missing fields keep their defaults.
//!
//! Validation uses Stillwater's `Validation` so a bad configuration
//! reports all of its problems at once rather than the first one found.
//!
//! # Example
//!
//! ```rust
//! use zcalc::config::EngineConfig;
//!
//! let config = EngineConfig::from_json(r#"{ "max_digits": 12 }"#).unwrap();
//! assert_eq!(config.max_digits, 12);
//! assert_eq!(config.max_consecutive_operations, 5);
//! ```

use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub mod error;

pub use error::{ConfigError, ConfigViolation};

/// Longest entry accepted by digit keys.
pub const DEFAULT_MAX_DIGITS: usize = 8;

/// Operators accepted in a row before the fatal failure.
pub const DEFAULT_MAX_CONSECUTIVE_OPERATIONS: u32 = 5;

/// Largest operand magnitude allowed in a multiplication.
pub const DEFAULT_MULTIPLICATION_LIMIT: f64 = 999_999.0;

/// Transitions a session keeps before dropping the oldest.
pub const DEFAULT_MAX_HISTORY: usize = 1_000;

/// Limits applied by the transition engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub max_digits: usize,
    pub max_consecutive_operations: u32,
    pub multiplication_limit: f64,
    pub max_history: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_digits: DEFAULT_MAX_DIGITS,
            max_consecutive_operations: DEFAULT_MAX_CONSECUTIVE_OPERATIONS,
            multiplication_limit: DEFAULT_MULTIPLICATION_LIMIT,
            max_history: DEFAULT_MAX_HISTORY,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.check()?;
        Ok(config)
    }

    /// Check every limit, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        checks.push(if self.max_digits == 0 {
            Validation::fail(ConfigViolation::ZeroMaxDigits)
        } else {
            Validation::success(())
        });

        checks.push(if self.max_consecutive_operations == 0 {
            Validation::fail(ConfigViolation::ZeroConsecutiveOperations)
        } else {
            Validation::success(())
        });

        let limit = self.multiplication_limit;
        checks.push(if limit.is_finite() && limit >= 0.0 {
            Validation::success(())
        } else {
            Validation::fail(ConfigViolation::InvalidMultiplicationLimit(limit))
        });

        checks.push(if self.max_history == 0 {
            Validation::fail(ConfigViolation::ZeroMaxHistory)
        } else {
            Validation::success(())
        });

        Validation::all_vec(checks).map(|_| ())
    }

    /// [`validate`](Self::validate) as a `Result`.
    pub fn check(&self) -> Result<(), ConfigError> {
        match self.validate() {
            Validation::Success(_) => Ok(()),
            Validation::Failure(violations) => Err(ConfigError::Invalid(
                violations.iter().cloned().collect(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_limits() {
        let config = EngineConfig::default();
        assert_eq!(config.max_digits, 8);
        assert_eq!(config.max_consecutive_operations, 5);
        assert_eq!(config.multiplication_limit, 999_999.0);
        assert_eq!(config.max_history, DEFAULT_MAX_HISTORY);
        assert!(config.validate().is_success());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = EngineConfig::from_json(r#"{ "multiplication_limit": 10.5 }"#).unwrap();
        assert_eq!(config.multiplication_limit, 10.5);
        assert_eq!(config.max_digits, DEFAULT_MAX_DIGITS);
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let config = EngineConfig {
            max_digits: 0,
            max_consecutive_operations: 0,
            multiplication_limit: -1.0,
            max_history: 0,
        };

        match config.validate() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 4);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::ZeroMaxDigits)));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::ZeroConsecutiveOperations)));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::InvalidMultiplicationLimit(_))));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::ZeroMaxHistory)));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn invalid_json_values_are_rejected() {
        let err = EngineConfig::from_json(r#"{ "max_digits": 0 }"#).unwrap_err();
        match err {
            ConfigError::Invalid(violations) => {
                assert_eq!(violations, vec![ConfigViolation::ZeroMaxDigits]);
            }
            other => panic!("Expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn zero_history_is_rejected() {
        let err = EngineConfig::from_json(r#"{ "max_history": 0 }"#).unwrap_err();
        match err {
            ConfigError::Invalid(violations) => {
                assert_eq!(violations, vec![ConfigViolation::ZeroMaxHistory]);
            }
            other => panic!("Expected Invalid, got {other:?}"),
        }

        let config = EngineConfig::from_json(r#"{ "max_history": 16 }"#).unwrap();
        assert_eq!(config.max_history, 16);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = EngineConfig::from_json("{ max_digits: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn error_message_lists_every_violation() {
        let config = EngineConfig {
            max_digits: 0,
            max_consecutive_operations: 0,
            ..EngineConfig::default()
        };
        let message = config.check().unwrap_err().to_string();
        assert!(message.contains("max_digits"));
        assert!(message.contains("max_consecutive_operations"));
    }
}
