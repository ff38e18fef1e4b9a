//! End-to-end integration tests for the runwatch message gateway.
//!
//! These tests exercise the full path from task-loop events to what a
//! renderer receives, including gating, classification, and text lookup.

use std::sync::Arc;

use runwatch_config::AppConfig;
use runwatch_core::{
    ERRORS_NAMESPACE, Notification, NotificationKind, PlannedAction, RawFailure, TextResolver,
};
use runwatch_gateway::{
    CatalogResolver, ChannelSink, LoopEvent, MessageGateway, RecordingSink, parse_script, replay,
};

// ── Helpers ──────────────────────────────────────────────────────────────

fn catalog_gateway() -> (MessageGateway, Arc<RecordingSink>, CatalogResolver) {
    let sink = Arc::new(RecordingSink::new());
    let resolver = CatalogResolver::new();
    let gateway = MessageGateway::new(sink.clone(), Arc::new(resolver.clone()));
    (gateway, sink, resolver)
}

// ── Scenarios ────────────────────────────────────────────────────────────

#[test]
fn scenario_a_goal_reaches_sink_while_running() {
    let (gateway, sink, _) = catalog_gateway();
    gateway.set_running(true);

    gateway.goal_accepted("Plan a trip");

    let delivered = sink.drain();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].kind(), NotificationKind::Goal);
    assert_eq!(delivered[0].value(), "Plan a trip");
}

#[test]
fn scenario_b_thinking_is_dropped_while_stopped() {
    let (gateway, sink, _) = catalog_gateway();
    gateway.set_running(false);

    gateway.thinking_started();

    assert!(sink.is_empty());
}

#[test]
fn scenario_c_not_found_resolves_model_unavailable() {
    let (gateway, sink, resolver) = catalog_gateway();
    gateway.set_running(true);

    gateway.failure(&RawFailure::transport(404));

    let delivered = sink.drain();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].kind(), NotificationKind::SystemStatus);
    assert_eq!(
        delivered[0].value(),
        resolver.resolve("model-unavailable", ERRORS_NAMESPACE)
    );
}

// ── Full runs ────────────────────────────────────────────────────────────

#[test]
fn scripted_run_shows_only_what_happened_while_running() {
    let (gateway, sink, resolver) = catalog_gateway();
    let script = r#"
{"event":"thinking"}
{"event":"start"}
{"event":"goal","text":"Find a recipe"}
{"event":"thinking"}
{"event":"action","action":"search","arg":"vegan lasagna"}
{"event":"action","action":"code"}
{"event":"failure","error":{"response":{"status":429}}}
{"event":"shutdown"}
{"event":"action","action":"image","arg":"too late"}
{"event":"failure","error":"also too late"}
"#;
    let events = parse_script(script).unwrap();
    let delivered_count = replay(&gateway, &events);

    let delivered = sink.drain();
    assert_eq!(delivered_count, delivered.len());
    assert_eq!(
        delivered.iter().map(Notification::kind).collect::<Vec<_>>(),
        vec![
            NotificationKind::Goal,
            NotificationKind::Thinking,
            NotificationKind::SystemStatus,
            NotificationKind::SystemStatus,
            NotificationKind::SystemStatus,
            NotificationKind::SystemStatus,
        ]
    );
    assert!(delivered[2].value().contains("vegan lasagna"));
    assert_eq!(delivered[3].value(), "💻 Writing code...");
    assert_eq!(
        delivered[4].value(),
        resolver.resolve("generic-access-error", ERRORS_NAMESPACE)
    );
    assert_eq!(
        delivered[5].value(),
        resolver.resolve("manual-shutdown", runwatch_core::CHAT_NAMESPACE)
    );
    assert!(!gateway.is_running());
}

#[test]
fn restart_after_loop_limit_does_not_replay() {
    let (gateway, sink, _) = catalog_gateway();
    let events = vec![
        LoopEvent::Start,
        LoopEvent::LoopLimit,
        LoopEvent::Goal {
            text: "dropped".into(),
        },
        LoopEvent::Start,
        LoopEvent::Goal {
            text: "second run".into(),
        },
        LoopEvent::Completed,
    ];

    replay(&gateway, &events);

    let delivered = sink.drain();
    assert_eq!(delivered.len(), 3);
    assert!(delivered[0].value().contains("loop limit"));
    assert_eq!(delivered[1], Notification::goal("second run"));
    assert!(delivered[2].value().contains("All tasks completed"));
}

#[test]
fn string_failures_pass_through_catalog_as_keys() {
    let (gateway, sink, _) = catalog_gateway();
    gateway.set_running(true);

    gateway.failure(&RawFailure::from("boom"));
    gateway.failure(&RawFailure::Unknown);

    let delivered = sink.drain();
    assert_eq!(delivered[0].value(), "boom");
    assert!(delivered[1].value().contains("initial tasks"));
}

#[test]
fn two_gateways_have_independent_run_states() {
    let (first, first_sink, _) = catalog_gateway();
    let (second, second_sink, _) = catalog_gateway();

    first.set_running(true);
    first.thinking_started();
    second.thinking_started();

    assert_eq!(first_sink.len(), 1);
    assert!(second_sink.is_empty());
}

#[test]
fn configured_locale_and_quota_mode_apply() {
    let config: AppConfig = toml::from_str(
        r#"
locale = "de"

[gateway]
quota_aware = true

[messages.de.errors]
"quota-exceeded" = "Kontingent überschritten"
"#,
    )
    .unwrap();

    let sink = Arc::new(RecordingSink::new());
    let gateway = MessageGateway::from_config(&config, sink.clone());

    gateway.failure(&RawFailure::transport(429));
    assert!(sink.is_empty());

    gateway.set_running(true);
    gateway.failure(&RawFailure::transport(429));
    gateway.failure(&RawFailure::transport(404));

    let delivered = sink.drain();
    assert_eq!(delivered[0].value(), "Kontingent überschritten");
    // Falls back to the built-in English entry
    assert!(delivered[1].value().contains("not available"));
}

#[tokio::test]
async fn channel_sink_feeds_a_renderer_task() {
    let (sink, mut rx) = ChannelSink::channel();
    let gateway = MessageGateway::new(Arc::new(sink), Arc::new(CatalogResolver::new()));

    let renderer = tokio::spawn(async move {
        let mut lines = Vec::new();
        while let Some(notification) = rx.recv().await {
            lines.push(format!("{}:{}", notification.kind(), notification.value()));
        }
        lines
    });

    gateway.set_running(true);
    gateway.action_update(&PlannedAction::with_arg("wikipedia", "Rome"));
    gateway.set_running(false);
    gateway.action_update(&PlannedAction::with_arg("wikipedia", "Carthage"));
    drop(gateway);

    let lines = renderer.await.unwrap();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("system_status:"));
    assert!(lines[0].contains("Rome"));
}
