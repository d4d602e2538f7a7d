//! Store events module.
//!
//! The store emits events through a sink after successful writes, and
//! forwards external "storage changed" triggers. Consumers react by
//! re-reading the collections they display.

mod sink;
mod store_event;

pub use sink::*;
pub use store_event::*;
