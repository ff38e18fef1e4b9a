//! `runwatch replay`: Drive a script of task-loop events through the gateway.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use runwatch_config::AppConfig;
use runwatch_core::{Notification, NotificationKind, NotificationSink};
use runwatch_gateway::{MessageGateway, parse_script, replay};
use serde::Serialize;
use tokio::io::AsyncReadExt;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `[kind] value`, one per line
    Text,
    /// One JSON object per line
    Json,
}

#[derive(Serialize)]
struct RenderedNotification<'a> {
    kind: NotificationKind,
    value: &'a str,
    delivered_at: DateTime<Utc>,
}

/// Prints every admitted notification to stdout.
pub struct StdoutSink {
    format: OutputFormat,
}

impl StdoutSink {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl NotificationSink for StdoutSink {
    fn deliver(&self, notification: Notification) {
        println!("{}", render(&notification, self.format, Utc::now()));
    }
}

pub fn render(notification: &Notification, format: OutputFormat, at: DateTime<Utc>) -> String {
    match format {
        OutputFormat::Text if notification.value().is_empty() => {
            format!("[{}]", notification.kind())
        }
        OutputFormat::Text => format!("[{}] {}", notification.kind(), notification.value()),
        OutputFormat::Json => serde_json::to_string(&RenderedNotification {
            kind: notification.kind(),
            value: notification.value(),
            delivered_at: at,
        })
        .unwrap_or_default(),
    }
}

pub async fn run(
    config: &AppConfig,
    script: &str,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_script(script)
        .await
        .map_err(|e| format!("Failed to read script {script}: {e}"))?;
    let events = parse_script(&input)?;

    let gateway = MessageGateway::from_config(config, Arc::new(StdoutSink::new(format)));
    let delivered = replay(&gateway, &events);

    info!(events = events.len(), delivered, "Replay finished");
    Ok(())
}

async fn read_script(script: &str) -> runwatch_core::Result<String> {
    if script == "-" {
        let mut buf = String::new();
        tokio::io::stdin().read_to_string(&mut buf).await?;
        Ok(buf)
    } else {
        Ok(tokio::fs::read_to_string(script).await?)
    }
}
