//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, terminal rendering, input mapping).
//!
//! # Smudge Layout
//!
//! The smudge stick occupies the middle third of the terminal, every row:
//!
//! - **Columns**: `width / 3 .. 2 * (width / 3)`
//! - **Rows**: `0 .. height`
//! - **Minimum terminal**: 12 x 10
//!
//! # Simulation Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 300 | Fixed interval between simulation steps |
//! | `CELL_HITPOINTS` | 20 | Steps a burning cell survives |
//! | `SMOKE_HITPOINTS` | 8 | Steps a smoke particle drifts before fading |
//! | `EARLY_SPREAD_CHANCE` | 0.4 | Per-step chance a burning cell spreads early |
//! | `FAN_OUT_CHANCE` | 0.25 | Per-neighbour ignition chance with several candidates |
//! | `REIGNITE_COUNT` | 10 | Cells ignited by one reignite signal |
//!
//! # Examples
//!
//! ```
//! use smudge_types::{Point, Ray, Signal};
//!
//! let ray = Ray::new(Point::new(0, 0), Point::new(5, 1));
//! assert_eq!(ray.len(), 6);
//! assert_eq!(ray.last(), Some(Point::new(5, 1)));
//!
//! assert_eq!(Signal::Reignite.as_str(), "reignite");
//! ```

pub mod geometry;
pub mod style;

pub use geometry::{adjacent, Point, Ray};
pub use style::{CellStyle, Rgb};

/// Fixed simulation interval in milliseconds
pub const TICK_MS: u64 = 300;

/// Minimum terminal width in columns
pub const MIN_WIDTH: u16 = 12;

/// Minimum terminal height in rows
pub const MIN_HEIGHT: u16 = 10;

/// Hitpoints of a freshly placed character cell
pub const CELL_HITPOINTS: i32 = 20;

/// Decay counter of a freshly spawned smoke particle
pub const SMOKE_HITPOINTS: i32 = 8;

/// Chance per burning step that a cell spreads before it dies
pub const EARLY_SPREAD_CHANCE: f64 = 0.4;

/// Chance each neighbour ignites when more than one is eligible
pub const FAN_OUT_CHANCE: f64 = 0.25;

/// Upper bound of unignited cells lit by one reignite signal
pub const REIGNITE_COUNT: usize = 10;

/// Glyph standing in for whitespace and control characters in a source
pub const WHITESPACE_MARKER: char = '+';

/// Glyph used once a source stream has run out of characters
pub const EXHAUSTED_GLYPH: char = 'x';

/// Smoke glyphs, densest first.
///
/// A particle starts at index 0 and thins out toward the end as its decay
/// counter runs down.
pub const SMOKE_GRADIENT: [char; 8] = ['@', '%', '#', '*', '+', '~', '-', '.'];

/// Red channel of the fire flicker
pub const FIRE_RED: u8 = 240;

/// Blue channel of the fire flicker
pub const FIRE_BLUE: u8 = 20;

/// Green channel range of the fire flicker (`min..max`)
pub const FIRE_GREEN: (u8, u8) = (60, 170);

/// Grey shade range of smoke (`min..=max`)
pub const SMOKE_GREY: (u8, u8) = (90, 200);

/// Grey shade range of source text (`min..max`)
pub const SOURCE_GREY: (u8, u8) = (40, 160);

/// Signals delivered from the input listener to the simulation loop
///
/// Each signal takes effect between simulation steps, never in the middle
/// of one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    /// Stop the loop once the current step has been presented
    Quit,
    /// Ignite a handful of unignited cells right away
    Reignite,
}

impl Signal {
    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Signal::Quit => "quit",
            Signal::Reignite => "reignite",
        }
    }
}
