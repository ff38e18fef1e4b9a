//! Planned actions reported by the task loop before it acts.

use serde::{Deserialize, Serialize};

/// What the task loop is about to do.
///
/// Unrecognised tags are kept verbatim in `Other` rather than rejected, so a
/// newer planner never breaks deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActionKind {
    Search,
    Wikipedia,
    Image,
    Code,
    Other(String),
}

impl ActionKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Search => "search",
            Self::Wikipedia => "wikipedia",
            Self::Image => "image",
            Self::Code => "code",
            Self::Other(tag) => tag,
        }
    }
}

impl From<&str> for ActionKind {
    fn from(tag: &str) -> Self {
        match tag {
            "search" => Self::Search,
            "wikipedia" => Self::Wikipedia,
            "image" => Self::Image,
            "code" => Self::Code,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ActionKind {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<ActionKind> for String {
    fn from(kind: ActionKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Structured description of the next step a task loop intends to perform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedAction {
    /// `None` when the planner produced no action tag at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<ActionKind>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arg: Option<String>,
}

impl PlannedAction {
    pub fn new(action: impl Into<ActionKind>, arg: Option<String>) -> Self {
        Self {
            action: Some(action.into()),
            arg,
        }
    }

    pub fn with_arg(action: impl Into<ActionKind>, arg: impl Into<String>) -> Self {
        Self::new(action, Some(arg.into()))
    }

    /// The argument, or `""` when absent.
    pub fn arg_or_empty(&self) -> &str {
        self.arg.as_deref().unwrap_or_default()
    }
}
