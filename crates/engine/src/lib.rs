//! Simulation loop module - cadence, signals and presentation
//!
//! The loop owns the [`World`](smudge_core::World) and is its only mutator.
//! It runs on a current-thread tokio runtime: a fixed interval paces the
//! cycles and a [`SignalReceiver`] delivers Quit/Reignite from the input
//! thread. Nothing here knows about fire or smoke beyond calling
//! [`reignite`](smudge_core::reignite).
//!
//! # Cycle
//!
//! 1. `sync` the display; a new width becomes the World's clipping width
//! 2. clear the surface
//! 3. `update_all`, then `render_all`
//! 4. `present`
//!
//! # Example
//!
//! ```no_run
//! use smudge_core::World;
//! use smudge_engine::{signal_channel, LoopConfig, Simulation};
//!
//! # async fn demo(display: &mut impl smudge_core::Display) -> anyhow::Result<()> {
//! let (tx, mut rx) = signal_channel();
//! let mut sim = Simulation::new(World::new(80, 1), LoopConfig::default());
//! let stats = sim.run(display, &mut rx).await?;
//! drop(tx);
//! println!("{} frames", stats.frames);
//! # Ok(())
//! # }
//! ```

pub mod runner;
pub mod signal;

pub use smudge_core as core;
pub use smudge_types as types;

pub use runner::{LoopConfig, RunStats, Simulation, StopReason};
pub use signal::{signal_channel, SignalReceiver, SignalSender};
