//! Task-loop events and how they drive a gateway.
//!
//! Scripts are JSON lines, one event per line:
//!
//! ```text
//! {"event":"start"}
//! {"event":"goal","text":"Plan a trip"}
//! {"event":"action","action":"search","arg":"cheap flights"}
//! {"event":"failure","error":{"response":{"status":404}}}
//! {"event":"completed"}
//! ```

use runwatch_core::{Error, PlannedAction, RawFailure, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::gateway::MessageGateway;

/// Something the task loop did that the gateway should hear about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LoopEvent {
    Start,
    Stop,
    Goal {
        text: String,
    },
    Thinking,
    Action {
        #[serde(flatten)]
        action: PlannedAction,
    },
    /// `error` is whatever the loop caught, in its original loose shape.
    Failure {
        #[serde(default)]
        error: serde_json::Value,
    },
    Completed,
    LoopLimit,
    Shutdown,
}

/// Apply one event. Returns whether a notification reached the sink.
///
/// Terminal events publish their status line first and only then mark the
/// loop inactive, so the final message is still shown.
pub fn drive(gateway: &MessageGateway, event: &LoopEvent) -> bool {
    debug!(?event, "Driving gateway");
    match event {
        LoopEvent::Start => {
            gateway.set_running(true);
            false
        }
        LoopEvent::Stop => {
            gateway.set_running(false);
            false
        }
        LoopEvent::Goal { text } => gateway.goal_accepted(text),
        LoopEvent::Thinking => gateway.thinking_started(),
        LoopEvent::Action { action } => gateway.action_update(action),
        LoopEvent::Failure { error } => gateway.failure(&RawFailure::from_json(error)),
        LoopEvent::Completed => finish(gateway, MessageGateway::all_completed),
        LoopEvent::LoopLimit => finish(gateway, MessageGateway::loop_limit_reached),
        LoopEvent::Shutdown => finish(gateway, MessageGateway::manual_shutdown),
    }
}

fn finish(gateway: &MessageGateway, announce: fn(&MessageGateway) -> bool) -> bool {
    let delivered = announce(gateway);
    gateway.set_running(false);
    delivered
}

/// Parse a JSON-lines script. Blank lines and `#` comments are skipped.
pub fn parse_script(input: &str) -> Result<Vec<LoopEvent>> {
    let mut events = Vec::new();
    for (idx, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let event = serde_json::from_str(line).map_err(|e| Error::Script {
            line: idx + 1,
            reason: e.to_string(),
        })?;
        events.push(event);
    }
    Ok(events)
}

/// Drive every event in order. Returns how many notifications were delivered.
pub fn replay(gateway: &MessageGateway, events: &[LoopEvent]) -> usize {
    events.iter().filter(|event| drive(gateway, event)).count()
}
