//! # runwatch Core
//!
//! Domain types and collaborator traits for the runwatch message gateway.
//! This crate knows nothing about gating or classification. It defines the
//! values that flow between a task loop, the gateway, and whatever renders
//! notifications for the user.
//!
//! ## Design Philosophy
//!
//! The two outward seams (where notifications go, and where display text
//! comes from) are traits here. Implementations live in `runwatch-gateway`
//! or in the host application. This enables:
//! - Stubbing collaborators with plain closures in tests
//! - Keeping the gateway free of rendering and i18n storage concerns

pub mod action;
pub mod error;
pub mod failure;
pub mod notification;
pub mod sink;
pub mod text;

// Re-export key types at crate root for ergonomics
pub use action::{ActionKind, PlannedAction};
pub use error::{Error, Result};
pub use failure::{ErrorKey, RawFailure};
pub use notification::{Notification, NotificationKind};
pub use sink::NotificationSink;
pub use text::{TextResolver, CHAT_NAMESPACE, ERRORS_NAMESPACE};
