//! Haptic feedback.
//!
//! The card asks for a pulse when a press starts and when it ends. Whether
//! anything physical happens is up to the host platform.

use std::sync::Arc;

use parking_lot::Mutex;

/// Pulse strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackLevel {
    /// Fired on the Idle -> Pressed transition.
    Medium,
    /// Fired on the Pressed -> Idle transition.
    Light,
}

/// Platform hook for feedback pulses.
pub trait Feedback {
    fn pulse(&self, level: FeedbackLevel);
}

/// Does nothing. The default for platforms with no haptic engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFeedback;

impl Feedback for NoopFeedback {
    fn pulse(&self, _level: FeedbackLevel) {}
}

/// Emits a `tracing` event per pulse.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingFeedback;

impl Feedback for TracingFeedback {
    fn pulse(&self, level: FeedbackLevel) {
        tracing::debug!(?level, "Feedback pulse");
    }
}

/// Records every pulse. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingFeedback {
    pulses: Arc<Mutex<Vec<FeedbackLevel>>>,
}

impl RecordingFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    /// All pulses so far, oldest first.
    pub fn pulses(&self) -> Vec<FeedbackLevel> {
        self.pulses.lock().clone()
    }

    pub fn count(&self, level: FeedbackLevel) -> usize {
        self.pulses.lock().iter().filter(|l| **l == level).count()
    }

    pub fn clear(&self) {
        self.pulses.lock().clear();
    }
}

impl Feedback for RecordingFeedback {
    fn pulse(&self, level: FeedbackLevel) {
        self.pulses.lock().push(level);
    }
}
