//! Input events consumed by the transition engine.

use super::state::Operator;
use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One discrete keypad event.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Action {
    /// A digit key, `0..=9`.
    Number(#[serde(deserialize_with = "digit")] u8),
    Operator(Operator),
    Equals,
    Clear,
    Decimal,
    Backspace,
    Percent,
}

/// Errors raised while turning key text into actions.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParseActionError {
    #[error("Unknown key '{0}'")]
    UnknownKey(char),

    #[error("Expected a single key, got {0:?}")]
    NotSingleKey(String),
}

/// Deserialize a digit key payload, refusing anything above 9.
fn digit<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = u8::deserialize(deserializer)?;
    if value > 9 {
        return Err(de::Error::invalid_value(
            Unexpected::Unsigned(u64::from(value)),
            &"a digit between 0 and 9",
        ));
    }
    Ok(value)
}

impl Action {
    /// Map a single key character to its action.
    ///
    /// `C` clears, `<` is backspace. Operators accept the ASCII aliases
    /// understood by [`Operator::from_symbol`].
    pub fn from_key(key: char) -> Result<Self, ParseActionError> {
        if let Some(digit) = key.to_digit(10) {
            return Ok(Self::Number(digit as u8));
        }
        if let Some(op) = Operator::from_symbol(key) {
            return Ok(Self::Operator(op));
        }
        match key {
            '=' => Ok(Self::Equals),
            'C' | 'c' => Ok(Self::Clear),
            '.' => Ok(Self::Decimal),
            '<' => Ok(Self::Backspace),
            '%' => Ok(Self::Percent),
            other => Err(ParseActionError::UnknownKey(other)),
        }
    }

    /// Keypad label for this action.
    pub fn key(&self) -> String {
        match self {
            Self::Number(digit) => digit.to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::Decimal => ".".to_string(),
            Self::Backspace => "<".to_string(),
            Self::Percent => "%".to_string(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(key), None) => Self::from_key(key),
            _ => Err(ParseActionError::NotSingleKey(s.to_string())),
        }
    }
}

/// Parse a run of keys such as `"12+3="` into actions.
///
/// Whitespace is skipped.
///
/// # Example
///
/// ```rust
/// use zcalc::core::{parse_keys, Action, Operator};
///
/// let actions = parse_keys("1 + 2 =").unwrap();
/// assert_eq!(
///     actions,
///     vec![
///         Action::Number(1),
///         Action::Operator(Operator::Add),
///         Action::Number(2),
///         Action::Equals,
///     ]
/// );
/// ```
pub fn parse_keys(keys: &str) -> Result<Vec<Action>, ParseActionError> {
    keys.chars()
        .filter(|c| !c.is_whitespace())
        .map(Action::from_key)
        .collect()
}
