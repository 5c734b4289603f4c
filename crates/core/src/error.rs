//! Startup failures.
//!
//! Every variant is fatal and raised before the simulation loop starts. Once
//! the loop runs there is no fault path inside the simulation itself.

use std::io;
use std::path::PathBuf;

/// A source file that could not be read.
#[derive(Debug)]
pub struct SourceFailure {
    pub path: PathBuf,
    pub error: io::Error,
}

#[derive(Debug, thiserror::Error)]
pub enum SmudgeError {
    /// The terminal could not be put into raw/alternate-screen mode.
    #[error("failed to initialize terminal: {0}")]
    Initialization(#[source] io::Error),

    #[error(
        "terminal is too small ({width}x{height}), need at least {min_width}x{min_height}"
    )]
    TerminalTooSmall {
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },

    #[error("invalid value for {name}: {value}")]
    InvalidSetting { name: &'static str, value: String },

    /// Every input failed to load. Empty when no path was given at all.
    #[error("no source file could be read ({} failed)", .failures.len())]
    NoReadableSources { failures: Vec<SourceFailure> },
}

impl SmudgeError {
    /// Fail with [`SmudgeError::TerminalTooSmall`] if `(width, height)` is under the floor.
    pub fn check_size(
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    ) -> Result<(), SmudgeError> {
        if width < min_width || height < min_height {
            return Err(SmudgeError::TerminalTooSmall {
                width,
                height,
                min_width,
                min_height,
            });
        }
        Ok(())
    }
}
