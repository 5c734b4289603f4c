//! Command-line arguments.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::core::{FireConfig, SmudgeError};
use crate::engine::LoopConfig;
use crate::types::{
    CELL_HITPOINTS, EARLY_SPREAD_CHANCE, FAN_OUT_CHANCE, REIGNITE_COUNT, SMOKE_HITPOINTS, TICK_MS,
};

/// Burn a smudge stick made of text files
#[derive(Parser, Debug, Clone)]
#[command(name = "smudge")]
#[command(about = "Interleave text files into a smudge stick and burn it away", long_about = None)]
pub struct Args {
    /// Text files to burn, one character stream each
    pub paths: Vec<PathBuf>,

    /// RNG seed (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Milliseconds between simulation steps
    #[arg(long, default_value_t = TICK_MS)]
    pub interval_ms: u64,

    /// Steps a burning cell survives
    #[arg(long, default_value_t = CELL_HITPOINTS, allow_negative_numbers = true)]
    pub hitpoints: i32,

    /// Steps a smoke particle drifts before fading
    #[arg(long, default_value_t = SMOKE_HITPOINTS, allow_negative_numbers = true)]
    pub smoke: i32,

    /// Per-step chance a burning cell spreads before it dies (0-1)
    #[arg(long, default_value_t = EARLY_SPREAD_CHANCE, allow_negative_numbers = true)]
    pub early_spread: f64,

    /// Chance each neighbour ignites when several are eligible (0-1)
    #[arg(long, default_value_t = FAN_OUT_CHANCE, allow_negative_numbers = true)]
    pub fan_out: f64,

    /// Cells lit by one reignite key press
    #[arg(long, default_value_t = REIGNITE_COUNT)]
    pub reignite: usize,

    /// Stop after this many steps
    #[arg(long)]
    pub ticks: Option<u64>,

    /// Write logs to this file (nothing is logged otherwise)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "smudge_core=trace"
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// The explicit seed, or a random one.
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    pub fn fire_config(&self) -> Result<FireConfig, SmudgeError> {
        let config = FireConfig {
            cell_hitpoints: self.hitpoints,
            smoke_hitpoints: self.smoke,
            early_spread_chance: self.early_spread,
            fan_out_chance: self.fan_out,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn loop_config(&self) -> Result<LoopConfig, SmudgeError> {
        if self.interval_ms == 0 {
            return Err(SmudgeError::InvalidSetting {
                name: "interval-ms",
                value: self.interval_ms.to_string(),
            });
        }
        Ok(LoopConfig {
            tick: Duration::from_millis(self.interval_ms),
            reignite_count: self.reignite,
            max_ticks: self.ticks,
        })
    }
}
