//! Failure classification.
//!
//! Reduces any caught failure to a symbolic key. In `Literal` mode the
//! quota check is applied first and then unconditionally overwritten by the
//! 404/else check, so a 429 ends up as `generic-access-error`. `QuotaAware`
//! is opt-in and keeps 429 as `quota-exceeded`.

use runwatch_core::{ErrorKey, RawFailure};
use tracing::debug;

const STATUS_TOO_MANY_REQUESTS: u16 = 429;
const STATUS_NOT_FOUND: u16 = 404;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClassifierMode {
    /// 404 → model-unavailable, every other status (429 included) →
    /// generic-access-error.
    #[default]
    Literal,
    /// 404 → model-unavailable, 429 → quota-exceeded, others →
    /// generic-access-error.
    QuotaAware,
}

impl ClassifierMode {
    pub fn from_quota_aware(quota_aware: bool) -> Self {
        if quota_aware {
            Self::QuotaAware
        } else {
            Self::Literal
        }
    }
}

/// Classify with the literal branch structure.
pub fn classify(failure: &RawFailure) -> ErrorKey {
    classify_with(failure, ClassifierMode::Literal)
}

/// Classify a failure under the given mode. Pure: equal inputs give equal keys.
pub fn classify_with(failure: &RawFailure, mode: ClassifierMode) -> ErrorKey {
    let key = match failure {
        RawFailure::Transport { status } => transport_key(*status, mode),
        RawFailure::Text { message } => ErrorKey::Custom(message.clone()),
        RawFailure::Unknown => ErrorKey::InitialRetrievalFailure,
    };
    debug!(key = %key, ?mode, "Classified failure");
    key
}

fn transport_key(status: u16, mode: ClassifierMode) -> ErrorKey {
    let mut key = ErrorKey::InitialRetrievalFailure;

    if status == STATUS_TOO_MANY_REQUESTS {
        key = ErrorKey::QuotaExceeded;
    }

    if status == STATUS_NOT_FOUND {
        key = ErrorKey::ModelUnavailable;
    } else if mode == ClassifierMode::Literal || key != ErrorKey::QuotaExceeded {
        key = ErrorKey::GenericAccessError;
    }

    key
}
