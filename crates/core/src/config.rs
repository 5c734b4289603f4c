//! Per-run fire tuning.

use crate::error::SmudgeError;
use crate::types::{
    CELL_HITPOINTS, EARLY_SPREAD_CHANCE, FAN_OUT_CHANCE, SMOKE_HITPOINTS,
};

/// Tunables read by cells and smoke while they update.
///
/// The two chances only shape the fire front. A cell always spreads before it
/// dies and a lone candidate is always ignited, whatever their values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FireConfig {
    /// Hitpoints given to every cell at population time.
    pub cell_hitpoints: i32,
    /// Decay counter given to every smoke particle.
    pub smoke_hitpoints: i32,
    /// Chance per burning step of spreading before death.
    pub early_spread_chance: f64,
    /// Chance each candidate ignites when several are eligible.
    pub fan_out_chance: f64,
}

impl Default for FireConfig {
    fn default() -> Self {
        Self {
            cell_hitpoints: CELL_HITPOINTS,
            smoke_hitpoints: SMOKE_HITPOINTS,
            early_spread_chance: EARLY_SPREAD_CHANCE,
            fan_out_chance: FAN_OUT_CHANCE,
        }
    }
}

impl FireConfig {
    pub fn validate(&self) -> Result<(), SmudgeError> {
        check_chance("early-spread", self.early_spread_chance)?;
        check_chance("fan-out", self.fan_out_chance)?;
        if self.cell_hitpoints < 1 {
            return Err(SmudgeError::InvalidSetting {
                name: "hitpoints",
                value: self.cell_hitpoints.to_string(),
            });
        }
        if self.smoke_hitpoints < 0 {
            return Err(SmudgeError::InvalidSetting {
                name: "smoke",
                value: self.smoke_hitpoints.to_string(),
            });
        }
        Ok(())
    }
}

fn check_chance(name: &'static str, p: f64) -> Result<(), SmudgeError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(SmudgeError::InvalidSetting {
            name,
            value: p.to_string(),
        });
    }
    Ok(())
}
