//! Stock notification sinks.

use std::sync::Mutex;

use runwatch_core::{Notification, NotificationSink};
use tokio::sync::mpsc;
use tracing::warn;

/// Forwards notifications into an unbounded tokio channel.
///
/// A renderer on the receiving side can run on its own task. If the
/// receiver is gone the notification is logged and discarded.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<Notification>,
}

impl ChannelSink {
    pub fn new(tx: mpsc::UnboundedSender<Notification>) -> Self {
        Self { tx }
    }

    /// Create a sink together with the receiver it feeds.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }
}

impl NotificationSink for ChannelSink {
    fn deliver(&self, notification: Notification) {
        if let Err(e) = self.tx.send(notification) {
            warn!(kind = %e.0.kind(), "Notification receiver closed, discarding");
        }
    }
}

/// Keeps every delivered notification, in delivery order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    delivered: Mutex<Vec<Notification>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of everything delivered so far.
    pub fn snapshot(&self) -> Vec<Notification> {
        self.lock().clone()
    }

    /// Remove and return everything delivered so far.
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A poisoned lock only means another delivery panicked mid-push; the
    // vector itself is still consistent.
    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Notification>> {
        self.delivered
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl NotificationSink for RecordingSink {
    fn deliver(&self, notification: Notification) {
        self.lock().push(notification);
    }
}
