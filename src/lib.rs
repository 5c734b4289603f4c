//! Smudge (workspace facade crate).
//!
//! Re-exports the crates under `crates/` as `smudge::{core,engine,input,term,types}`
//! and holds the command-line surface shared by the binaries.

pub mod cli;

pub use smudge_core as core;
pub use smudge_engine as engine;
pub use smudge_input as input;
pub use smudge_term as term;
pub use smudge_types as types;
