//! What the display sink is shown after each action.

use crate::core::DisplayUpdate;
use serde::{Deserialize, Serialize};

/// Full contents of the calculator display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Main readout: the entry, `0` at boot, `Error` after a failure.
    pub primary: String,
    /// Expression trace.
    pub secondary: String,
    pub secondary_visible: bool,
}

impl Frame {
    /// The frame shown at boot: `0` with no expression.
    pub fn boot() -> Self {
        Self {
            primary: "0".to_string(),
            secondary: String::new(),
            secondary_visible: false,
        }
    }

    /// Merge an engine display update into this frame.
    ///
    /// Secondary text and visibility only change when the update says so.
    pub fn apply(&mut self, update: &DisplayUpdate) {
        self.primary.clone_from(&update.primary);
        if let Some(secondary) = &update.secondary {
            self.secondary.clone_from(secondary);
        }
        if let Some(visible) = update.secondary_visible {
            self.secondary_visible = visible;
        }
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::boot()
    }
}
