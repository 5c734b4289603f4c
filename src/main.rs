//! Smudge runner (default binary).
//!
//! Loads the source files, fills the middle third of the terminal with them
//! and burns the result until Esc/q/Ctrl-C. Space or `b` blows on the embers.

use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use smudge::cli::Args;
use smudge::core::{
    load_sources, populate, smudge_region, FireConfig, LoadedSources, SmudgeError, SourceMixer,
    Surface, World,
};
use smudge::engine::{signal_channel, LoopConfig, RunStats, Simulation};
use smudge::input::spawn_listener;
use smudge::term::TerminalDisplay;
use smudge::types::{MIN_HEIGHT, MIN_WIDTH};

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let fire = args.fire_config()?;
    let cadence = args.loop_config()?;
    let sources = load(&args)?;
    let seed = args.seed();

    let mut display = TerminalDisplay::open()?;
    let result = run(&mut display, &sources, fire, cadence, seed);

    // Always try to restore terminal state.
    let _ = display.close();
    let stats = result?;
    info!(frames = stats.frames, reignites = stats.reignites, stop = ?stats.stop, "bye");
    Ok(())
}

fn init_logging(args: &Args) -> Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };
    let filter = EnvFilter::try_new(&args.log_level).map_err(|_| SmudgeError::InvalidSetting {
        name: "log-level",
        value: args.log_level.clone(),
    })?;
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(true)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn load(args: &Args) -> Result<LoadedSources> {
    match load_sources(&args.paths) {
        Ok(sources) => {
            if let Some(warning) = sources.warning() {
                eprintln!("warning: {warning}");
            }
            Ok(sources)
        }
        Err(err) => {
            if let SmudgeError::NoReadableSources { failures } = &err {
                for failure in failures {
                    eprintln!("{}: {}", failure.path.display(), failure.error);
                }
            }
            Err(err.into())
        }
    }
}

fn run(
    display: &mut TerminalDisplay,
    sources: &LoadedSources,
    fire: FireConfig,
    cadence: LoopConfig,
    seed: u64,
) -> Result<RunStats> {
    let (width, height) = display.size();
    SmudgeError::check_size(width, height, MIN_WIDTH, MIN_HEIGHT)?;

    let mut world = World::new(i32::from(width), seed).with_config(fire)?;
    let mut mixer = SourceMixer::new(&sources.texts, world.rng());
    let region = smudge_region(width, height);
    let cells = populate(&mut world, region, &mut mixer);
    info!(seed, width, height, cells, ?cadence, "starting");

    let (tx, mut rx) = signal_channel();
    spawn_listener(move |signal| tx.send(signal)).context("failed to start input thread")?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("failed to build runtime")?;
    let mut sim = Simulation::new(world, cadence);
    runtime.block_on(sim.run(display, &mut rx))
}
