//! Error types for runwatch.
//!
//! Uses `thiserror` for ergonomic error definitions. The gateway's own
//! operations never fail; these cover reading and parsing replay scripts.

use thiserror::Error;

/// The top-level error type for all runwatch operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Replay scripts ---
    #[error("Invalid script entry on line {line}: {reason}")]
    Script { line: usize, reason: String },

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // --- I/O ---
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_error_displays_line() {
        let err = Error::Script {
            line: 7,
            reason: "unknown event `explode`".into(),
        };
        assert!(err.to_string().contains("line 7"));
        assert!(err.to_string().contains("explode"));
    }

    #[test]
    fn serde_error_converts() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
