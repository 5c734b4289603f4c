//! Terminal rendering module.
//!
//! Entities draw into a [`FrameBuffer`] through the core `Surface` trait; the
//! [`TerminalRenderer`] diffs consecutive frames and writes only the changed
//! runs with crossterm. [`TerminalDisplay`] ties the two together with raw
//! mode and the alternate screen. [`HeadlessDisplay`] is the in-memory twin
//! used by tests and benches.

pub mod display;
pub mod fb;
pub mod renderer;

pub use smudge_core as core;
pub use smudge_types as types;

pub use display::{HeadlessDisplay, TerminalDisplay};
pub use fb::{Cell, FrameBuffer, CONTINUATION};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
