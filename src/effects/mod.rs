//! The imperative shell around the pure engine.
//!
//! [`Calculator`] holds the single current state, runs each action through
//! [`crate::core::apply`] to completion, and pushes the resulting display
//! frame and notices into an environment implementing [`DisplaySink`] and
//! [`NotificationSink`]. Everything is synchronous; one dispatch finishes
//! before the next begins.

mod machine;
mod screen;
mod sinks;

pub use machine::Calculator;
pub use screen::Frame;
pub use sinks::{DisplaySink, NotificationSink, RecordingEnv};
