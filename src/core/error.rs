//! Failure types raised by the transition engine.
//!
//! The two severities live in separate types so a recoverable arithmetic
//! failure can never be mistaken for the fatal operator condition.

use thiserror::Error;

/// Arithmetic failures. The engine recovers from these by resetting to the
/// initial state and notifying the user.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ArithmeticError {
    #[error("Numbers too large for multiplication!")]
    MultiplicationOverflow { first: f64, second: f64 },

    #[error("Division by zero!")]
    DivisionByZero,
}

/// Unrecoverable failures. These are never folded into a state; the
/// session hands them to its caller, which ends the run.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FatalError {
    #[error("Too many consecutive operations!")]
    TooManyConsecutiveOperations { count: u32 },
}
