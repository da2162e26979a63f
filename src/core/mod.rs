//! Core calculator types and the transition engine.
//!
//! This module is the pure functional core:
//! - `CalculatorState` snapshots and the `Action` set
//! - `apply`, the `(state, action) -> state'` engine
//! - Guard predicates for entry limits
//! - Immutable history tracking
//!
//! Nothing here performs I/O. Display updates and notices are returned as
//! values for the shell in [`crate::effects`] to deliver.

mod action;
mod engine;
mod error;
mod format;
mod guard;
mod history;
mod state;

pub use action::{parse_keys, Action, ParseActionError};
pub use engine::{apply, DisplayUpdate, Notice, Outcome, Rules};
pub use error::{ArithmeticError, FatalError};
pub use format::format_result;
pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::{CalculatorState, Operator};
