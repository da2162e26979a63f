//! The transition engine: `(state, action) -> state'`.
//!
//! [`apply`] is pure. It never touches a screen or a notifier; the display
//! update and the optional notice travel back in the [`Outcome`] and the
//! session shell delivers them.
//!
//! Several behaviours here are knowingly wrong (uncapped decimal points,
//! percent ignoring the left operand, a multiplication ceiling, a crash
//! after five operators in a row). They are the observable contract and
//! must stay as they are.

use super::action::Action;
use super::error::{ArithmeticError, FatalError};
use super::format::format_result;
use super::guard::Guard;
use super::state::{CalculatorState, Operator};
use crate::config::{ConfigError, EngineConfig};
use std::fmt;

/// Limits the engine enforces, built from an [`EngineConfig`].
#[derive(Debug)]
pub struct Rules {
    digit_entry: Guard,
    operator_entry: Guard,
    multiplication_limit: f64,
}

impl Rules {
    /// Build rules from a configuration, rejecting invalid limits.
    pub fn new(config: &EngineConfig) -> Result<Self, ConfigError> {
        config.check()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: &EngineConfig) -> Self {
        Self {
            digit_entry: Guard::digit_entry(config.max_digits),
            operator_entry: Guard::operator_entry(config.max_consecutive_operations),
            multiplication_limit: config.multiplication_limit,
        }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::from_valid(&EngineConfig::default())
    }
}

/// Transient message for the notification sink.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// A digit was refused because the entry is at its length limit.
    NumberTooLong,
    /// Evaluation failed and the calculator was reset.
    Arithmetic(ArithmeticError),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NumberTooLong => f.write_str("Number too long!"),
            Self::Arithmetic(err) => write!(f, "{err}"),
        }
    }
}

/// Changes to push to the display sink.
///
/// `secondary` is `None` when the secondary text should be left as is.
/// `secondary_visible` is `None` when visibility should not change.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayUpdate {
    pub primary: String,
    pub secondary: Option<String>,
    pub secondary_visible: Option<bool>,
}

impl DisplayUpdate {
    /// Show a state's entry and expression.
    pub fn showing(state: &CalculatorState) -> Self {
        Self {
            primary: state.current_number.clone(),
            secondary: Some(state.expression.clone()).filter(|e| !e.is_empty()),
            secondary_visible: None,
        }
    }

    fn revealed(mut self) -> Self {
        self.secondary_visible = Some(true);
        self
    }

    /// Boot/clear display: `0` with the expression hidden.
    pub fn cleared() -> Self {
        Self {
            primary: "0".to_string(),
            secondary: None,
            secondary_visible: Some(false),
        }
    }

    /// Shown after an arithmetic failure.
    pub fn error() -> Self {
        Self {
            primary: "Error".to_string(),
            secondary: None,
            secondary_visible: Some(false),
        }
    }
}

/// Result of applying one action.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// The state that replaces the previous one.
    pub state: CalculatorState,
    /// `None` when nothing on screen changes.
    pub display: Option<DisplayUpdate>,
    pub notice: Option<Notice>,
}

impl Outcome {
    fn unchanged(state: &CalculatorState) -> Self {
        Self {
            state: state.clone(),
            display: None,
            notice: None,
        }
    }

    fn shown(state: CalculatorState) -> Self {
        Self {
            display: Some(DisplayUpdate::showing(&state)),
            state,
            notice: None,
        }
    }

    fn revealed(state: CalculatorState) -> Self {
        Self {
            display: Some(DisplayUpdate::showing(&state).revealed()),
            state,
            notice: None,
        }
    }

    fn failed(err: ArithmeticError) -> Self {
        Self {
            state: CalculatorState::initial(),
            display: Some(DisplayUpdate::error()),
            notice: Some(Notice::Arithmetic(err)),
        }
    }
}

/// Apply one action to a state.
///
/// Only [`Action::Operator`] can fail, and only with the fatal
/// consecutive-operator condition. Every other outcome, including
/// arithmetic failures, comes back as a new state.
///
/// # Example
///
/// ```rust
/// use zcalc::core::{apply, Action, CalculatorState, Operator, Rules};
///
/// let rules = Rules::default();
/// let mut state = CalculatorState::initial();
/// for action in [
///     Action::Number(7),
///     Action::Operator(Operator::Multiply),
///     Action::Number(6),
///     Action::Equals,
/// ] {
///     state = apply(&state, action, &rules).unwrap().state;
/// }
/// assert_eq!(state.current_number, "42");
/// assert_eq!(state.expression, "7×6");
/// ```
pub fn apply(
    state: &CalculatorState,
    action: Action,
    rules: &Rules,
) -> Result<Outcome, FatalError> {
    match action {
        Action::Number(digit) => Ok(number(state, digit, rules)),
        Action::Operator(op) => operator(state, op, rules),
        Action::Equals => Ok(equals(state, rules)),
        Action::Clear => Ok(Outcome {
            state: CalculatorState::initial(),
            display: Some(DisplayUpdate::cleared()),
            notice: None,
        }),
        Action::Decimal => Ok(decimal(state)),
        Action::Backspace => Ok(backspace(state)),
        Action::Percent => Ok(percent(state)),
    }
}

fn number(state: &CalculatorState, digit: u8, rules: &Rules) -> Outcome {
    if digit > 9 {
        return Outcome::unchanged(state);
    }

    // The cap is checked even when the digit would start a fresh number.
    if !rules.digit_entry.check(state) {
        return Outcome {
            notice: Some(Notice::NumberTooLong),
            ..Outcome::unchanged(state)
        };
    }

    let current_number = if state.is_new_number {
        digit.to_string()
    } else {
        format!("{}{digit}", state.current_number)
    };
    let expression = if state.has_pending_operator() {
        format!("{}{digit}", state.expression)
    } else {
        current_number.clone()
    };

    Outcome::revealed(CalculatorState {
        current_number,
        is_new_number: false,
        expression,
        ..state.clone()
    })
}

fn operator(state: &CalculatorState, op: Operator, rules: &Rules) -> Result<Outcome, FatalError> {
    if !rules.operator_entry.check(state) {
        return Err(FatalError::TooManyConsecutiveOperations {
            count: state.consecutive_operations,
        });
    }
    if state.current_number.is_empty() {
        return Ok(Outcome::unchanged(state));
    }

    let folded = match evaluate(state, rules) {
        Some(Ok(result)) => resolved(state, result),
        // Resets exactly like a failed Equals; must never become fatal.
        Some(Err(err)) => return Ok(Outcome::failed(err)),
        None => state.clone(),
    };
    let Some(first_number) = parse_operand(&folded.current_number) else {
        return Ok(Outcome::unchanged(state));
    };

    // Counts from the incoming state: folding a pending operator does not
    // reset the run of operators.
    Ok(Outcome::revealed(CalculatorState {
        first_number,
        operator: Some(op),
        is_new_number: true,
        consecutive_operations: state.consecutive_operations + 1,
        expression: format!("{}{op}", state.expression),
        ..folded
    }))
}

fn equals(state: &CalculatorState, rules: &Rules) -> Outcome {
    match evaluate(state, rules) {
        Some(Ok(result)) => Outcome::shown(resolved(state, result)),
        Some(Err(err)) => Outcome::failed(err),
        None => Outcome::unchanged(state),
    }
}

/// Evaluate the pending operation. `None` when there is nothing to do.
fn evaluate(state: &CalculatorState, rules: &Rules) -> Option<Result<f64, ArithmeticError>> {
    let op = state.operator?;
    let second = parse_operand(&state.current_number)?;
    let first = state.first_number;

    let result = match op {
        Operator::Add => Ok(first + second),
        Operator::Subtract => Ok(first - second),
        Operator::Multiply => {
            let limit = rules.multiplication_limit;
            if first.abs() > limit || second.abs() > limit {
                Err(ArithmeticError::MultiplicationOverflow { first, second })
            } else {
                Ok(first * second)
            }
        }
        Operator::Divide => {
            if second == 0.0 {
                Err(ArithmeticError::DivisionByZero)
            } else {
                Ok(first / second)
            }
        }
    };
    Some(result)
}

/// State after a successful evaluation. The expression is kept as typed.
fn resolved(state: &CalculatorState, result: f64) -> CalculatorState {
    CalculatorState {
        current_number: format_result(result),
        operator: None,
        is_new_number: true,
        consecutive_operations: 0,
        ..state.clone()
    }
}

fn decimal(state: &CalculatorState) -> Outcome {
    // No check for an existing point: "1.2.3" is accepted.
    let current_number = if state.is_new_number {
        "0.".to_string()
    } else {
        format!("{}.", state.current_number)
    };
    let expression = if state.has_pending_operator() {
        format!("{}.", state.expression)
    } else {
        current_number.clone()
    };

    Outcome::revealed(CalculatorState {
        current_number,
        is_new_number: false,
        expression,
        ..state.clone()
    })
}

fn backspace(state: &CalculatorState) -> Outcome {
    if state.current_number.is_empty() || state.current_number == "0" {
        return Outcome::unchanged(state);
    }

    let mut current_number = state.current_number.clone();
    current_number.pop();
    if current_number.is_empty() {
        current_number.push('0');
    }

    let mut expression = state.expression.clone();
    expression.pop();
    if expression.is_empty() {
        expression.clone_from(&current_number);
    }

    Outcome::shown(CalculatorState {
        current_number,
        expression,
        ..state.clone()
    })
}

fn percent(state: &CalculatorState) -> Outcome {
    if state.current_number.is_empty() {
        return Outcome::unchanged(state);
    }
    // Intentional silent failure: an entry that does not parse (e.g. "1.2.3")
    // leaves the state untouched and raises no notice. Do not surface it.
    let Ok(number) = state.current_number.parse::<f64>() else {
        return Outcome::unchanged(state);
    };

    // Literal value / 100; the pending operator and left operand are ignored.
    let result = format_result(number / 100.0);
    let expression = if state.has_pending_operator() {
        format!("{}{result}", state.expression)
    } else {
        result.clone()
    };

    Outcome::shown(CalculatorState {
        current_number: result,
        expression,
        ..state.clone()
    })
}

fn parse_operand(text: &str) -> Option<f64> {
    text.parse::<f64>().ok()
}
