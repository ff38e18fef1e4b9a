//! The rendering sink: where admitted notifications go.
//!
//! There is exactly one sink per gateway. It is injected at construction,
//! not subscribed to, and it owns everything about presentation.

use crate::notification::Notification;

/// Consumer of admitted notifications.
///
/// Called at most once per admitted publish. A panicking sink is not caught
/// by the gateway; it unwinds into whoever called the entry point.
pub trait NotificationSink: Send + Sync {
    fn deliver(&self, notification: Notification);
}

impl<F> NotificationSink for F
where
    F: Fn(Notification) + Send + Sync,
{
    fn deliver(&self, notification: Notification) {
        self(notification)
    }
}
