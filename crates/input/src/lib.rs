//! Terminal input for blockfall.
//!
//! Translates raw key events into the core's edge-triggered action set.
//! The core assumes exactly-once delivery per press, so this crate owns
//! both the key-to-action mapping and the press edge detection.

pub mod edge;
pub mod map;

pub use edge::EdgeFilter;
pub use map::{handle_key_event, should_quit};
