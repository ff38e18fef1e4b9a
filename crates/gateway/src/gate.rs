//! The state gate: point-in-time suppression of notifications.
//!
//! A stopped task loop may still have steps in flight. Instead of cancelling
//! them, every publish consults the shared run flag at the instant of
//! delivery and silently drops the notification when the loop is inactive.
//! Nothing is buffered or replayed.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use runwatch_core::{Notification, NotificationSink};
use tracing::debug;

/// Whether the owning task loop is active.
///
/// Cloning yields another handle to the *same* flag, so the task loop can
/// keep one while the gateway holds another. Independent gateways get
/// independent flags via [`RunState::new`].
#[derive(Debug, Clone, Default)]
pub struct RunState {
    running: Arc<AtomicBool>,
}

impl RunState {
    pub fn new(running: bool) -> Self {
        Self {
            running: Arc::new(AtomicBool::new(running)),
        }
    }

    /// Replace the stored state. Any state may follow any other.
    pub fn set_running(&self, active: bool) {
        self.running.store(active, Ordering::SeqCst);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

/// Admits notifications to the sink only while the run state is active.
pub struct StateGate {
    state: RunState,
    sink: Arc<dyn NotificationSink>,
}

impl StateGate {
    pub fn new(state: RunState, sink: Arc<dyn NotificationSink>) -> Self {
        Self { state, sink }
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// Deliver `notification` if the loop is running right now.
    ///
    /// Returns whether the notification reached the sink.
    pub fn publish(&self, notification: Notification) -> bool {
        if !self.state.is_running() {
            debug!(kind = %notification.kind(), running = false, "Notification dropped");
            return false;
        }

        debug!(kind = %notification.kind(), running = true, "Notification admitted");
        self.sink.deliver(notification);
        true
    }
}
