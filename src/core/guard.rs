//! Guard predicates over calculator state.
//!
//! Guards are pure boolean functions that decide whether an action may
//! proceed. The engine's entry limits are expressed as guards.

use super::state::CalculatorState;

/// Pure predicate that decides whether an action may proceed.
///
/// # Example
///
/// ```rust
/// use zcalc::core::{CalculatorState, Guard};
///
/// let has_entry = Guard::new(|s: &CalculatorState| !s.current_number.is_empty());
///
/// assert!(!has_entry.check(&CalculatorState::initial()));
/// ```
pub struct Guard {
    predicate: Box<dyn Fn(&CalculatorState) -> bool + Send + Sync>,
}

impl Guard {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and free of side effects.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&CalculatorState) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Allows digit entry while the entry is shorter than `max_digits`.
    pub fn digit_entry(max_digits: usize) -> Self {
        Self::new(move |s| s.entry_len() < max_digits)
    }

    /// Allows operators while fewer than `max` have been accepted in a row.
    pub fn operator_entry(max: u32) -> Self {
        Self::new(move |s| s.consecutive_operations < max)
    }

    pub fn check(&self, state: &CalculatorState) -> bool {
        (self.predicate)(state)
    }
}

impl std::fmt::Debug for Guard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Guard(..)")
    }
}
