//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Signal`] and runs the
//! blocking reader on a dedicated thread. The listener only knows a callback,
//! so it works with any channel the caller picks.

pub mod listener;
pub mod map;

pub use smudge_types as types;

pub use listener::{listen, spawn_listener};
pub use map::{handle_key_event, map_event, should_quit};
