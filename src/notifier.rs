//! The toast collaborator fired after a successful save.
//!
//! Presentation is somebody else's job; the screen only hands over a title, a
//! description and how long the message should stay up. Calls are fire-and-forget.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tracing::info;

/// Receives success notifications. Implementations must not fail.
pub trait Notifier: Send + Sync {
    fn notify(&self, title: &str, description: &str, duration: Duration);
}

/// Emits each notification as a structured `tracing` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, title: &str, description: &str, duration: Duration) {
        info!(title, description, duration_ms = millis(duration), "Toast");
    }
}

/// Whole milliseconds, saturating at `u64::MAX`.
fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// One captured notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub duration: Duration,
}

/// Keeps every notification it receives. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    toasts: Arc<Mutex<Vec<Toast>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything notified so far, oldest first.
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, title: &str, description: &str, duration: Duration) {
        self.toasts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Toast {
                title: title.to_string(),
                description: description.to_string(),
                duration,
            });
    }
}
