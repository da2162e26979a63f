//! Transition history for a calculator session.
//!
//! The session owns its history and records into it in place. A history is
//! bounded: once it holds `limit` transitions, recording a new one drops
//! the oldest.

use super::action::Action;
use super::state::CalculatorState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::vec_deque::{self, VecDeque};
use std::time::Duration;

/// Record of a single applied action.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    /// Position of this action in the session, starting at 1
    pub sequence: usize,
    /// The action that was applied
    pub action: Action,
    /// The state the action was applied to
    pub from: CalculatorState,
    /// The state that replaced it
    pub to: CalculatorState,
    /// When the action was applied
    pub timestamp: DateTime<Utc>,
}

/// Ordered, bounded history of applied actions.
///
/// # Example
///
/// ```rust
/// use zcalc::core::{Action, CalculatorState, StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let start = CalculatorState::initial();
/// let typed = CalculatorState {
///     current_number: "4".to_string(),
///     is_new_number: false,
///     expression: "4".to_string(),
///     ..CalculatorState::initial()
/// };
///
/// let mut history = StateHistory::new();
/// history.push(
///     StateTransition {
///         sequence: history.next_sequence(),
///         action: Action::Number(4),
///         from: start,
///         to: typed,
///         timestamp: Utc::now(),
///     },
///     100,
/// );
///
/// assert_eq!(history.get_path().len(), 2);
/// assert_eq!(history.next_sequence(), 2);
/// assert_eq!(history.actions(), vec![Action::Number(4)]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateHistory {
    transitions: VecDeque<StateTransition>,
}

impl StateHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: VecDeque::new(),
        }
    }

    /// Record a transition, evicting the oldest ones so at most `limit`
    /// remain.
    pub fn push(&mut self, transition: StateTransition, limit: usize) {
        self.transitions.push_back(transition);
        while self.transitions.len() > limit {
            self.transitions.pop_front();
        }
    }

    /// Sequence number for the next transition.
    ///
    /// Keeps counting from the newest entry after old ones are evicted.
    pub fn next_sequence(&self) -> usize {
        self.transitions.back().map_or(1, |t| t.sequence + 1)
    }

    /// States traversed: the first `from`, then each `to`.
    pub fn get_path(&self) -> Vec<&CalculatorState> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Actions in the order they were applied.
    pub fn actions(&self) -> Vec<Action> {
        self.transitions.iter().map(|t| t.action).collect()
    }

    /// Time between the first and last recorded action.
    ///
    /// `None` for an empty history.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.front(), self.transitions.back()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Oldest first.
    pub fn transitions(&self) -> vec_deque::Iter<'_, StateTransition> {
        self.transitions.iter()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// The most recent state, if anything has been recorded.
    pub fn latest(&self) -> Option<&CalculatorState> {
        self.transitions.back().map(|t| &t.to)
    }
}
