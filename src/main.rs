//! Rock Split entry point
//!
//! Native builds have no window yet; the game runs headless with the demo
//! pilot at the controls and reports how it went.

use std::path::PathBuf;

use clap::Parser;

use rock_split::platform::HeadlessDisplay;
use rock_split::sim::{GamePhase, autopilot};
use rock_split::{GameRunner, GameSettings};

#[derive(Parser)]
#[command(version, about = "Rock Split: split asteroids on a wraparound playfield")]
struct Cli {
    /// Number of asteroids at the start of the game
    asteroids: Option<u32>,

    /// RNG seed (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// JSON settings file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Stop after this many ticks even if the game is still running
    #[arg(long, default_value_t = 20_000)]
    max_ticks: u64,

    /// Write every display command of the run to this JSON file
    #[arg(long, value_name = "PATH")]
    record: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = match &cli.config {
        Some(path) => GameSettings::load(path)?,
        None => GameSettings::default(),
    };
    if let Some(count) = cli.asteroids {
        settings.asteroid_count = count;
    }
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }

    log::info!("Rock Split (native) starting...");
    let display = HeadlessDisplay::new(settings.bounds);
    let display = if cli.record.is_some() {
        display
    } else {
        display.without_recording()
    };
    let mut runner = GameRunner::new(&settings, display)?;

    let mut phase = GamePhase::Running;
    for _ in 0..cli.max_ticks {
        let input = autopilot::steer(runner.state());
        runner.display_mut().push_input(input);
        phase = runner.step();
        if phase.is_terminal() {
            break;
        }
        // Headless timer fires immediately
        runner.display_mut().take_pending_tick();
    }

    let state = runner.state();
    log::info!(
        "Finished: {:?} after {} ticks, score {}, lives {}, {} asteroids left",
        phase,
        state.time_ticks,
        state.score,
        state.lives,
        state.asteroids.len()
    );

    if let Some(path) = &cli.record {
        let json = serde_json::to_string(&runner.display().commands)?;
        std::fs::write(path, json)?;
        log::info!("Wrote {} commands to {}", runner.display().commands.len(), path.display());
    }

    Ok(())
}
