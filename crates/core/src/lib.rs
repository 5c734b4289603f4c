//! Core simulation module - entities, fire rules and the World that runs them
//!
//! Everything here is single-threaded and free of terminal I/O. Entities draw
//! onto the [`Surface`] trait; the terminal crate provides the real backend.
//!
//! # Module Structure
//!
//! - [`entity`]: the [`Drawable`] trait and the [`Body`] every entity composes
//! - [`world`]: ordered entity collection with deferred mid-pass mutation
//! - [`cell`]: [`CharacterCell`] ignition, burning and spreading
//! - [`smoke`]: [`Smoke`] particles left by burnt-out cells
//! - [`smudge`]: smudge region layout and round-robin population from sources
//! - [`source`]: reading the source files
//! - [`surface`]: drawing target traits and unicode-aware line drawing
//! - [`config`]: per-run [`FireConfig`] tunables
//! - [`error`]: the [`SmudgeError`] startup failures
//!
//! # Fire Rules
//!
//! - A burning cell loses one hitpoint per step and flickers red/orange
//! - It may spread early (once) while burning, and always spreads at death
//! - A lone unignited neighbour is always ignited; several each ignite by chance
//! - A dead cell leaves one smoke particle that rises and fades
//!
//! # Example
//!
//! ```
//! use smudge_core::{populate, smudge_region, CharacterCell, SourceMixer, World};
//!
//! let mut world = World::new(30, 7);
//! let mut mixer = SourceMixer::new(&["fn main() {}"], world.rng());
//! let cells = populate(&mut world, smudge_region(30, 10), &mut mixer);
//! assert_eq!(cells, 100);
//!
//! world.update_all();
//! assert_eq!(world.ticks(), 1);
//! assert!(world.count::<CharacterCell>() <= cells);
//! ```

pub mod cell;
pub mod config;
pub mod entity;
pub mod error;
pub mod smoke;
pub mod smudge;
pub mod source;
pub mod surface;
pub mod world;

pub use smudge_types as types;

pub use cell::{fire_color, reignite, CharacterCell, FireState};
pub use config::FireConfig;
pub use entity::{AsAny, Body, Drawable, EntityId, RenderCtx};
pub use error::{SmudgeError, SourceFailure};
pub use smoke::Smoke;
pub use smudge::{populate, smudge_region, Region, SourceMixer};
pub use source::{load_sources, LoadedSources};
pub use surface::{draw_line, Display, Surface, MAX_MARKS};
pub use world::{SimRng, UpdateCtx, World};
