//! Domain events module.
//!
//! Provides domain event types and the sink trait for emitting events
//! after successful domain mutations. The live stats layer consumes these
//! events as its change-notification stream.

mod domain_event;
mod sink;

pub use domain_event::*;
pub use sink::*;
