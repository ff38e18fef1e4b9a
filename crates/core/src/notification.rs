//! User-facing notifications.
//!
//! A `Notification` lives for exactly one delivery attempt: the gateway
//! builds it, offers it to the sink, and forgets it.

use serde::{Deserialize, Serialize};

/// The closed set of notification kinds a renderer must handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// The user's goal was accepted by the task loop.
    Goal,
    /// A status line about what the loop is doing (or why it stopped).
    SystemStatus,
    /// The loop started thinking; carries no text.
    Thinking,
}

impl NotificationKind {
    /// Stable lowercase name, used in logs and line-oriented output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Goal => "goal",
            Self::SystemStatus => "system_status",
            Self::Thinking => "thinking",
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed, immutable status message produced for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    kind: NotificationKind,
    value: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    pub fn goal(text: impl Into<String>) -> Self {
        Self::new(NotificationKind::Goal, text)
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self::new(NotificationKind::SystemStatus, text)
    }

    /// Thinking notifications always carry an empty value.
    pub fn thinking() -> Self {
        Self::new(NotificationKind::Thinking, String::new())
    }

    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}
