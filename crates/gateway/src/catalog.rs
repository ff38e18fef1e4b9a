//! Built-in, config-extensible text resolver.
//!
//! Lookup order for `(key, namespace)`: preferred locale, fallback locale,
//! then the key itself. It never fails.

use std::collections::HashMap;

use runwatch_config::{AppConfig, MessageTable};
use runwatch_core::{CHAT_NAMESPACE, ERRORS_NAMESPACE, TextResolver};
use tracing::debug;

const BUILTIN_LOCALE: &str = "en";

const BUILTIN_CHAT: &[(&str, &str)] = &[
    (
        "loop-limit",
        "🛑 The loop limit has been reached. Raise it in settings to keep the agent running.",
    ),
    ("manual-shutdown", "🛑 The agent has been stopped manually."),
    ("all-completed", "✅ All tasks completed. Shutting down."),
];

const BUILTIN_ERRORS: &[(&str, &str)] = &[
    (
        "initial-retrieval-failure",
        "Could not retrieve the initial tasks. Check your API key and try again.",
    ),
    (
        "quota-exceeded",
        "Your API quota has been exceeded. Check your plan and billing details.",
    ),
    (
        "model-unavailable",
        "The selected model is not available for your API key.",
    ),
    (
        "generic-access-error",
        "The API request failed. Check your API key and network connection.",
    ),
];

#[derive(Debug, Clone)]
pub struct CatalogResolver {
    locale: String,
    fallback_locale: String,
    table: MessageTable,
}

impl CatalogResolver {
    /// English built-ins, English preferred.
    pub fn new() -> Self {
        let mut resolver = Self {
            locale: BUILTIN_LOCALE.into(),
            fallback_locale: BUILTIN_LOCALE.into(),
            table: HashMap::new(),
        };
        for (key, text) in BUILTIN_CHAT {
            resolver.insert(BUILTIN_LOCALE, CHAT_NAMESPACE, *key, *text);
        }
        for (key, text) in BUILTIN_ERRORS {
            resolver.insert(BUILTIN_LOCALE, ERRORS_NAMESPACE, *key, *text);
        }
        resolver
    }

    /// Built-ins with the config's locales and `[messages]` merged on top.
    pub fn from_config(config: &AppConfig) -> Self {
        let mut resolver = Self::new().with_locale(&config.locale, &config.fallback_locale);
        for (locale, namespaces) in &config.messages {
            for (namespace, entries) in namespaces {
                for (key, text) in entries {
                    resolver.insert(locale, namespace, key, text);
                }
            }
        }
        resolver
    }

    pub fn with_locale(mut self, locale: &str, fallback_locale: &str) -> Self {
        self.locale = locale.to_string();
        self.fallback_locale = fallback_locale.to_string();
        self
    }

    /// Add or replace one entry.
    pub fn insert(
        &mut self,
        locale: impl Into<String>,
        namespace: impl Into<String>,
        key: impl Into<String>,
        text: impl Into<String>,
    ) {
        self.table
            .entry(locale.into())
            .or_default()
            .entry(namespace.into())
            .or_default()
            .insert(key.into(), text.into());
    }

    fn lookup(&self, locale: &str, namespace: &str, key: &str) -> Option<&String> {
        self.table.get(locale)?.get(namespace)?.get(key)
    }
}

impl Default for CatalogResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl TextResolver for CatalogResolver {
    fn resolve(&self, key: &str, namespace: &str) -> String {
        if let Some(text) = self
            .lookup(&self.locale, namespace, key)
            .or_else(|| self.lookup(&self.fallback_locale, namespace, key))
        {
            return text.clone();
        }

        debug!(key, namespace, locale = %self.locale, "No catalog entry, using key");
        key.to_string()
    }
}
