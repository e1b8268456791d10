//! Domain events module.
//!
//! Provides domain event types and the sink trait for emitting events after
//! confirmed remote mutations. The embedding view layer implements the sink
//! to translate events into its own refresh or notification behavior.

mod domain_event;
mod sink;

pub use domain_event::*;
pub use sink::*;
