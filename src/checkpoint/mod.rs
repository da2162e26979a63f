//! Save and resume calculator sessions.
//!
//! A [`Snapshot`] captures everything a [`Calculator`](crate::effects::Calculator)
//! needs to pick up where it left off: the engine configuration, the
//! current state, the display frame and the transition history.
//!
//! Binary snapshots (bincode) are exact. JSON cannot carry infinite or NaN
//! operands, so [`Snapshot::to_json`] refuses snapshots that contain them.

use crate::config::EngineConfig;
use crate::core::{CalculatorState, StateHistory};
use crate::effects::Frame;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable copy of a calculator session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: String,

    /// When the snapshot was taken
    pub timestamp: DateTime<Utc>,

    pub config: EngineConfig,

    pub state: CalculatorState,

    /// Display contents at capture time
    pub frame: Frame,

    pub history: StateHistory,
}

impl Snapshot {
    /// Build a snapshot with a fresh id and timestamp.
    pub fn new(
        config: EngineConfig,
        state: CalculatorState,
        frame: Frame,
        history: StateHistory,
    ) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            config,
            state,
            frame,
            history,
        }
    }

    /// Check that this snapshot can be resumed.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        self.config.check()?;
        if self.history.len() > self.config.max_history {
            return Err(SnapshotError::ValidationFailed(format!(
                "history holds {} transitions, limit is {}",
                self.history.len(),
                self.config.max_history
            )));
        }
        if let Some(latest) = self.history.latest() {
            if *latest != self.state {
                return Err(SnapshotError::ValidationFailed(
                    "current state does not match the last recorded transition".to_string(),
                ));
            }
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        if self.states().any(|s| !s.first_number.is_finite()) {
            return Err(SnapshotError::SerializationFailed(
                "non-finite operand cannot be written as JSON".to_string(),
            ));
        }
        serde_json::to_string_pretty(self)
            .map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    fn states(&self) -> impl Iterator<Item = &CalculatorState> {
        std::iter::once(&self.state).chain(
            self.history
                .transitions()
                .flat_map(|t| [&t.from, &t.to]),
        )
    }
}
