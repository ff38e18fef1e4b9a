//! The message gateway: one entry point per task-loop event.
//!
//! Each entry point builds a `Notification` and offers it to the state
//! gate. Every entry point returns whether the notification was delivered;
//! callers are free to ignore it.

use std::sync::Arc;

use runwatch_config::AppConfig;
use runwatch_core::{
    CHAT_NAMESPACE, ERRORS_NAMESPACE, Notification, NotificationSink, PlannedAction, RawFailure,
    TextResolver,
};
use tracing::info;

use crate::catalog::CatalogResolver;
use crate::classify::{ClassifierMode, classify_with};
use crate::describe::describe_action;
use crate::gate::{RunState, StateGate};

pub const LOOP_LIMIT_KEY: &str = "loop-limit";
pub const MANUAL_SHUTDOWN_KEY: &str = "manual-shutdown";
pub const ALL_COMPLETED_KEY: &str = "all-completed";

/// Decides if, when, and as what a task-loop event reaches the user.
pub struct MessageGateway {
    gate: StateGate,
    resolver: Arc<dyn TextResolver>,
    mode: ClassifierMode,
}

impl MessageGateway {
    /// Create a gateway with its own, initially inactive, run state.
    pub fn new(sink: Arc<dyn NotificationSink>, resolver: Arc<dyn TextResolver>) -> Self {
        Self::with_state(RunState::default(), sink, resolver)
    }

    /// Create a gateway around an existing run-state handle.
    pub fn with_state(
        state: RunState,
        sink: Arc<dyn NotificationSink>,
        resolver: Arc<dyn TextResolver>,
    ) -> Self {
        Self {
            gate: StateGate::new(state, sink),
            resolver,
            mode: ClassifierMode::default(),
        }
    }

    /// Build a gateway from configuration, resolving text through a
    /// [`CatalogResolver`] seeded from the config's `[messages]`.
    ///
    /// The gateway starts out not running, like every other constructor.
    pub fn from_config(config: &AppConfig, sink: Arc<dyn NotificationSink>) -> Self {
        let resolver = Arc::new(CatalogResolver::from_config(config));
        Self::with_state(RunState::default(), sink, resolver)
            .with_classifier_mode(ClassifierMode::from_quota_aware(config.gateway.quota_aware))
    }

    pub fn with_classifier_mode(mut self, mode: ClassifierMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn classifier_mode(&self) -> ClassifierMode {
        self.mode
    }

    /// A handle to the run state this gateway consults.
    pub fn run_state(&self) -> RunState {
        self.gate.state().clone()
    }

    pub fn set_running(&self, active: bool) {
        info!(running = active, "Run state changed");
        self.gate.state().set_running(active);
    }

    pub fn is_running(&self) -> bool {
        self.gate.state().is_running()
    }

    /// Offer an already-built notification to the gate.
    pub fn publish(&self, notification: Notification) -> bool {
        self.gate.publish(notification)
    }

    pub fn goal_accepted(&self, text: &str) -> bool {
        self.publish(Notification::goal(text))
    }

    pub fn loop_limit_reached(&self) -> bool {
        self.publish_lifecycle(LOOP_LIMIT_KEY)
    }

    pub fn manual_shutdown(&self) -> bool {
        self.publish_lifecycle(MANUAL_SHUTDOWN_KEY)
    }

    pub fn all_completed(&self) -> bool {
        self.publish_lifecycle(ALL_COMPLETED_KEY)
    }

    pub fn thinking_started(&self) -> bool {
        self.publish(Notification::thinking())
    }

    pub fn action_update(&self, action: &PlannedAction) -> bool {
        self.publish(Notification::system(describe_action(action)))
    }

    /// Classify `failure`, resolve its text in the `errors` namespace, and
    /// publish it as a system status line.
    pub fn failure(&self, failure: &RawFailure) -> bool {
        let key = classify_with(failure, self.mode);
        let text = self.resolver.resolve(key.as_str(), ERRORS_NAMESPACE);
        self.publish(Notification::system(text))
    }

    fn publish_lifecycle(&self, key: &str) -> bool {
        let text = self.resolver.resolve(key, CHAT_NAMESPACE);
        self.publish(Notification::system(text))
    }
}
