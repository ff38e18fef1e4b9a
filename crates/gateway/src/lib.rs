//! The runwatch message gateway.
//!
//! Decides *whether*, *when*, and *as what* an event from an autonomous task
//! loop becomes visible to the user:
//!
//! - [`gate`]: the run flag and the point-in-time gate in front of the sink
//! - [`gateway`]: one entry point per lifecycle event
//! - [`classify`]: reduction of caught failures to symbolic error keys
//! - [`describe`]: sentences for planned actions
//! - [`catalog`]: a built-in text resolver with config overrides
//! - [`sinks`]: channel and recording sinks
//! - [`driver`]: scripted task-loop events

pub mod catalog;
pub mod classify;
pub mod describe;
pub mod driver;
pub mod gate;
pub mod gateway;
pub mod sinks;

pub use catalog::CatalogResolver;
pub use classify::{ClassifierMode, classify, classify_with};
pub use describe::describe_action;
pub use driver::{LoopEvent, drive, parse_script, replay};
pub use gate::{RunState, StateGate};
pub use gateway::MessageGateway;
pub use sinks::{ChannelSink, RecordingSink};
