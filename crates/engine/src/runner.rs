//! Fixed-interval update/render loop.

use std::time::Duration;

use anyhow::{Context, Result};
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info};

use crate::core::{reignite, Display, World};
use crate::signal::SignalReceiver;
use crate::types::{Signal, REIGNITE_COUNT, TICK_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopConfig {
    /// Time between cycles.
    pub tick: Duration,
    /// Cells lit by one Reignite signal.
    pub reignite_count: usize,
    /// Stop after this many cycles.
    pub max_ticks: Option<u64>,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(TICK_MS),
            reignite_count: REIGNITE_COUNT,
            max_ticks: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A Quit signal arrived.
    Quit,
    /// Every signal sender went away.
    Disconnected,
    /// `max_ticks` cycles ran.
    TickLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub frames: u64,
    pub reignites: u64,
    pub stop: StopReason,
}

/// Owns the World and drives it against a [`Display`].
pub struct Simulation {
    world: World,
    config: LoopConfig,
}

impl Simulation {
    pub fn new(world: World, config: LoopConfig) -> Self {
        Self { world, config }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn config(&self) -> &LoopConfig {
        &self.config
    }

    /// One cycle: pick up size changes, update, draw, present.
    pub fn cycle<D: Display>(&mut self, display: &mut D) -> Result<()> {
        if display.sync().context("failed to query terminal size")? {
            let (w, h) = display.size();
            self.world.set_max_width(i32::from(w));
            debug!(width = w, height = h, "display resized");
        }

        display.clear();
        self.world.update_all();
        self.world.render_all(display);
        display.present().context("failed to present frame")?;
        Ok(())
    }

    /// Run until Quit, disconnection or the tick limit.
    ///
    /// Signals win over a due tick. Reignite runs a cycle at once and restarts
    /// the interval from there.
    pub async fn run<D: Display>(
        &mut self,
        display: &mut D,
        signals: &mut SignalReceiver,
    ) -> Result<RunStats> {
        let mut interval = time::interval(self.config.tick);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut frames = 0u64;
        let mut reignites = 0u64;

        let stop = loop {
            if self.config.max_ticks.is_some_and(|max| frames >= max) {
                break StopReason::TickLimit;
            }

            tokio::select! {
                biased;
                signal = signals.recv() => match signal {
                    Some(Signal::Quit) => break StopReason::Quit,
                    None => break StopReason::Disconnected,
                    Some(Signal::Reignite) => {
                        let lit = reignite(&mut self.world, self.config.reignite_count);
                        reignites += 1;
                        debug!(lit, "reignite");
                        self.cycle(display)?;
                        frames += 1;
                        interval.reset();
                    }
                },
                _ = interval.tick() => {
                    self.cycle(display)?;
                    frames += 1;
                }
            }
        };

        info!(frames, reignites, ?stop, live = self.world.len(), "simulation stopped");
        Ok(RunStats {
            frames,
            reignites,
            stop,
        })
    }
}
