//! Environment traits the session pushes its side effects into.
//!
//! A front end implements both traits; tests use [`RecordingEnv`].

use super::screen::Frame;

/// Receives the full display after every dispatched action.
pub trait DisplaySink {
    fn show(&mut self, frame: &Frame);
}

/// Receives transient, auto-dismissing messages.
pub trait NotificationSink {
    fn notify(&mut self, message: &str);
}

/// Environment that remembers everything it was given.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingEnv {
    pub frames: Vec<Frame>,
    pub notifications: Vec<String>,
}

impl RecordingEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// The frame currently on screen, if any was shown.
    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }
}

impl DisplaySink for RecordingEnv {
    fn show(&mut self, frame: &Frame) {
        self.frames.push(frame.clone());
    }
}

impl NotificationSink for RecordingEnv {
    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }
}
