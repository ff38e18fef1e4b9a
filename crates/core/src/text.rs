//! Text resolution: turning symbolic keys into display text.

/// Namespace for classifier-driven lookups.
pub const ERRORS_NAMESPACE: &str = "errors";

/// Namespace for lifecycle status lines (loop limit, shutdown, completion).
pub const CHAT_NAMESPACE: &str = "chat";

/// Locale-aware lookup of display text.
///
/// Implementations must return *something* for unknown keys (typically the
/// key itself); the failure classifier can hand over arbitrary strings.
pub trait TextResolver: Send + Sync {
    fn resolve(&self, key: &str, namespace: &str) -> String;
}

impl<F> TextResolver for F
where
    F: Fn(&str, &str) -> String + Send + Sync,
{
    fn resolve(&self, key: &str, namespace: &str) -> String {
        self(key, namespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_resolvers() {
        let resolver = |key: &str, ns: &str| format!("{ns}:{key}");
        assert_eq!(resolver.resolve("loop-limit", CHAT_NAMESPACE), "chat:loop-limit");
    }
}
