//! Calculator session: the single current-state slot and its dispatch loop.

use super::screen::Frame;
use super::sinks::{DisplaySink, NotificationSink};
use crate::checkpoint::{Snapshot, SnapshotError};
use crate::config::{ConfigError, EngineConfig};
use crate::core::{
    apply, Action, CalculatorState, FatalError, Rules, StateHistory, StateTransition,
};
use chrono::Utc;
use tracing::{debug, error, warn};

/// A running calculator.
///
/// Owns the one live [`CalculatorState`], replacing it wholesale on every
/// dispatch, and records each step in a [`StateHistory`] bounded by
/// [`EngineConfig::max_history`].
pub struct Calculator {
    config: EngineConfig,
    rules: Rules,
    state: CalculatorState,
    frame: Frame,
    history: StateHistory,
}

impl Calculator {
    /// A calculator with the default limits.
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            rules: Rules::default(),
            state: CalculatorState::initial(),
            frame: Frame::boot(),
            history: StateHistory::new(),
        }
    }

    /// A calculator with custom limits.
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        let rules = Rules::new(&config)?;
        Ok(Self {
            config,
            rules,
            ..Self::new()
        })
    }

    /// Current state (pure)
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// What the display currently shows (pure)
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Push the current frame to the display. Call once at startup.
    pub fn boot<Env: DisplaySink>(&self, env: &mut Env) {
        env.show(&self.frame);
    }

    /// Apply one action and deliver its side effects.
    ///
    /// A [`FatalError`] leaves the session untouched and is meant to end the
    /// run; callers should not catch it and carry on.
    pub fn dispatch<Env>(
        &mut self,
        action: Action,
        env: &mut Env,
    ) -> Result<&CalculatorState, FatalError>
    where
        Env: DisplaySink + NotificationSink,
    {
        let sequence = self.history.next_sequence();
        let outcome = match apply(&self.state, action, &self.rules) {
            Ok(outcome) => outcome,
            Err(fatal) => {
                error!(%action, sequence, error = %fatal, "unrecoverable calculator failure");
                return Err(fatal);
            }
        };

        if let Some(notice) = &outcome.notice {
            warn!(%action, sequence, %notice, "notifying user");
            env.notify(&notice.to_string());
        }
        if let Some(update) = &outcome.display {
            self.frame.apply(update);
        }
        env.show(&self.frame);

        let from = std::mem::replace(&mut self.state, outcome.state);
        self.history.push(
            StateTransition {
                sequence,
                action,
                from,
                to: self.state.clone(),
                timestamp: Utc::now(),
            },
            self.config.max_history,
        );

        debug!(
            %action,
            sequence,
            current = %self.state.current_number,
            expression = %self.state.expression,
            "applied action"
        );
        Ok(&self.state)
    }

    /// Dispatch actions in order, stopping at the first fatal failure.
    pub fn run<Env, I>(&mut self, actions: I, env: &mut Env) -> Result<&CalculatorState, FatalError>
    where
        Env: DisplaySink + NotificationSink,
        I: IntoIterator<Item = Action>,
    {
        for action in actions {
            self.dispatch(action, env)?;
        }
        Ok(&self.state)
    }

    /// Capture the session for later resumption.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(
            self.config.clone(),
            self.state.clone(),
            self.frame.clone(),
            self.history.clone(),
        )
    }

    /// Resume a session from a snapshot.
    pub fn restore(snapshot: Snapshot) -> Result<Self, SnapshotError> {
        snapshot.validate()?;
        let rules = Rules::new(&snapshot.config)?;
        debug!(id = %snapshot.id, steps = snapshot.history.len(), "restored session");
        Ok(Self {
            config: snapshot.config,
            rules,
            state: snapshot.state,
            frame: snapshot.frame,
            history: snapshot.history,
        })
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
