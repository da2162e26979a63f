//! Calculator state snapshot.
//!
//! A `CalculatorState` is an immutable value. The engine never mutates one
//! in place; every action produces a fresh state that replaces the old one
//! wholesale.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary operator accepted by the calculator keypad.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators in keypad order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Symbol appended to the expression trace.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Look up an operator by its keypad symbol.
    ///
    /// ASCII `*` and `/` are accepted as aliases for `×` and `÷`.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '×' | '*' => Some(Self::Multiply),
            '÷' | '/' => Some(Self::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Everything the calculator knows between two actions.
///
/// # Example
///
/// ```rust
/// use zcalc::core::CalculatorState;
///
/// let state = CalculatorState::initial();
/// assert!(state.current_number.is_empty());
/// assert!(state.is_new_number);
/// assert_eq!(state.consecutive_operations, 0);
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Text of the number being entered. May hold several decimal points.
    pub current_number: String,
    /// Pending operator, if any.
    pub operator: Option<Operator>,
    /// Left operand captured when the pending operator was accepted.
    pub first_number: f64,
    /// When set, the next digit or decimal point starts a fresh number.
    pub is_new_number: bool,
    /// Operators accepted since the last successful equals.
    pub consecutive_operations: u32,
    /// Human-readable trace shown in the secondary display.
    pub expression: String,
}

impl CalculatorState {
    /// The all-empty state the calculator boots into and resets to.
    pub fn initial() -> Self {
        Self {
            current_number: String::new(),
            operator: None,
            first_number: 0.0,
            is_new_number: true,
            consecutive_operations: 0,
            expression: String::new(),
        }
    }

    /// True when an operator is waiting for its right operand.
    pub fn has_pending_operator(&self) -> bool {
        self.operator.is_some()
    }

    /// Whether this is exactly the boot/reset state.
    pub fn is_initial(&self) -> bool {
        *self == Self::initial()
    }

    /// Number of characters in `current_number`.
    pub fn entry_len(&self) -> usize {
        self.current_number.chars().count()
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::initial()
    }
}
