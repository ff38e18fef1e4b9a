//! Caught failures and the symbolic keys they are reduced to.
//!
//! Host code catches errors of whatever shape its transport produces. The
//! shape is decided once, here, at the boundary; classification later only
//! has to match on the variant.

use serde::{Deserialize, Serialize};

/// An error value caught by the task loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RawFailure {
    /// A transport-layer error that carried an HTTP-like response.
    Transport { status: u16 },

    /// A bare string was thrown.
    Text { message: String },

    /// Anything else.
    Unknown,
}

impl RawFailure {
    pub fn transport(status: u16) -> Self {
        Self::Transport { status }
    }

    pub fn text(message: impl Into<String>) -> Self {
        Self::Text {
            message: message.into(),
        }
    }

    /// Reduce a loosely typed JSON error value to a `RawFailure`.
    ///
    /// Objects with a numeric `status` (or `response.status`) are transport
    /// errors, strings are `Text`, everything else is `Unknown`. Status
    /// codes outside the `u16` range are treated as unknown shapes.
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => Self::text(s.clone()),
            serde_json::Value::Object(map) => {
                let status = map
                    .get("response")
                    .and_then(|r| r.get("status"))
                    .and_then(serde_json::Value::as_u64)
                    .or_else(|| map.get("status").and_then(serde_json::Value::as_u64))
                    .and_then(|s| u16::try_from(s).ok());
                match status {
                    Some(status) => Self::transport(status),
                    None => Self::Unknown,
                }
            }
            _ => Self::Unknown,
        }
    }
}

impl From<&str> for RawFailure {
    fn from(message: &str) -> Self {
        Self::text(message)
    }
}

impl From<String> for RawFailure {
    fn from(message: String) -> Self {
        Self::text(message)
    }
}

/// Identifier used to look up display text for a failure category.
///
/// The named variants are the stable vocabulary; `Custom` carries a string
/// failure through untouched, so resolvers must tolerate arbitrary keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKey {
    InitialRetrievalFailure,
    QuotaExceeded,
    ModelUnavailable,
    GenericAccessError,
    Custom(String),
}

impl ErrorKey {
    pub fn as_str(&self) -> &str {
        match self {
            Self::InitialRetrievalFailure => "initial-retrieval-failure",
            Self::QuotaExceeded => "quota-exceeded",
            Self::ModelUnavailable => "model-unavailable",
            Self::GenericAccessError => "generic-access-error",
            Self::Custom(key) => key,
        }
    }
}

impl std::fmt::Display for ErrorKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_json_reads_nested_response_status() {
        let v = json!({"message": "Request failed", "response": {"status": 404}});
        assert_eq!(RawFailure::from_json(&v), RawFailure::transport(404));
    }

    #[test]
    fn from_json_reads_top_level_status() {
        assert_eq!(
            RawFailure::from_json(&json!({"status": 429})),
            RawFailure::transport(429)
        );
    }

    #[test]
    fn from_json_falls_back_when_nested_status_is_not_numeric() {
        assert_eq!(
            RawFailure::from_json(&json!({"response": {"status": null}, "status": 404})),
            RawFailure::transport(404)
        );
        assert_eq!(
            RawFailure::from_json(&json!({"response": {"status": "oops"}, "status": 429})),
            RawFailure::transport(429)
        );
    }

    #[test]
    fn from_json_string_becomes_text() {
        assert_eq!(RawFailure::from_json(&json!("boom")), RawFailure::text("boom"));
    }

    #[test]
    fn from_json_other_shapes_are_unknown() {
        assert_eq!(RawFailure::from_json(&json!({"code": "E1"})), RawFailure::Unknown);
        assert_eq!(RawFailure::from_json(&json!(42)), RawFailure::Unknown);
        assert_eq!(RawFailure::from_json(&json!(null)), RawFailure::Unknown);
        assert_eq!(
            RawFailure::from_json(&json!({"status": "404"})),
            RawFailure::Unknown
        );
        assert_eq!(
            RawFailure::from_json(&json!({"status": 70000})),
            RawFailure::Unknown
        );
    }

    #[test]
    fn error_key_strings() {
        assert_eq!(ErrorKey::ModelUnavailable.as_str(), "model-unavailable");
        assert_eq!(ErrorKey::Custom("boom".into()).to_string(), "boom");
    }

    #[test]
    fn raw_failure_serde_tagging() {
        let json = serde_json::to_string(&RawFailure::transport(500)).unwrap();
        assert_eq!(json, r#"{"type":"transport","status":500}"#);
    }
}
