//! zcalc: a deterministic calculator state machine
//!
//! zcalc follows the "pure core, imperative shell" layout. The core is a
//! pure transition function from a calculator state and a keypad action to
//! the next state. The shell owns the live state, delivers display frames
//! and notifications, and keeps a history of every step.
//!
//! The engine reproduces a fixed set of quirks exactly: multiple decimal
//! points are accepted, percent ignores the left operand, multiplication
//! refuses operands above 999,999, division by zero resets the calculator,
//! non-finite results print literally, and a sixth operator in a row is an
//! unrecoverable failure.
//!
//! # Core Concepts
//!
//! - **State**: `CalculatorState`, an immutable snapshot
//! - **Action**: the closed set of keypad events
//! - **Engine**: `apply`, which returns the next state plus side effects as data
//! - **Session**: `Calculator`, the single mutable slot and its dispatch loop
//!
//! # Example
//!
//! ```rust
//! use zcalc::core::parse_keys;
//! use zcalc::effects::{Calculator, RecordingEnv};
//!
//! let mut calculator = Calculator::new();
//! let mut env = RecordingEnv::new();
//!
//! calculator.run(parse_keys("12+30=").unwrap(), &mut env).unwrap();
//!
//! let frame = env.last_frame().unwrap();
//! assert_eq!(frame.primary, "42");
//! assert_eq!(frame.secondary, "12+30");
//! ```

pub mod checkpoint;
pub mod config;
pub mod core;
pub mod effects;

// Re-export commonly used types
pub use checkpoint::{Snapshot, SnapshotError};
pub use config::{ConfigError, EngineConfig};
pub use core::{apply, Action, CalculatorState, FatalError, Operator, Outcome, Rules};
pub use effects::{Calculator, DisplaySink, Frame, NotificationSink};
