//! Windfall — a first-person lever-pull tycoon, headless demo binary.
//!
//! Builds the demo room, then replays a scripted walkthrough through the
//! real input and simulation stack in real time: walk to the table, pull the
//! lever twice, collect the winnings. A renderer host would drive the same
//! [`windfall_sim::Simulation`] from its event loop instead.
//!
//! Run with: `cargo run -p windfall-game`

mod clock;
mod demo;
mod hud;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::{error, info};
use windfall_config::Config;
use windfall_sim::Simulation;

/// CLI arguments for the game binary.
#[derive(Parser, Debug)]
#[command(name = "windfall-game", about = "Windfall — lever-pull tycoon demo")]
struct GameArgs {
    /// Window width in pixels (forwarded to a renderer host).
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Window height in pixels (forwarded to a renderer host).
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Window title override.
    #[arg(long)]
    title: Option<String>,

    /// Demo run length in seconds.
    #[arg(long, default_value_t = 4.0)]
    seconds: f32,

    /// Config directory override (defaults to the per-user config dir).
    #[arg(long)]
    config_dir: Option<PathBuf>,
}

fn main() {
    let args = GameArgs::parse();

    let config_dir = args
        .config_dir
        .unwrap_or_else(windfall_config::default_config_dir);
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("config unusable ({e}), continuing with defaults");
        Config::default()
    });

    config.window.width = args.width;
    config.window.height = args.height;
    if let Some(title) = args.title {
        config.window.title = title;
    }

    windfall_log::init_logging(None, cfg!(debug_assertions), Some(&config));

    info!("Windfall — lever-pull tycoon");
    info!(
        "Window: {}x{} | Title: {}",
        config.window.width, config.window.height, config.window.title
    );

    let mut sim = match Simulation::new(&config) {
        Ok(sim) => sim,
        Err(e) => {
            error!("level index failed to build: {e}");
            std::process::exit(1);
        }
    };

    let mut display = hud::ConsoleDisplay;
    let mut script = demo::DemoScript::new();
    let mut clock = clock::FrameClock::new();

    let mut elapsed = 0.0_f32;
    let mut next_hud = 0.0_f32;
    while elapsed < args.seconds {
        let dt = clock.frame_dt();
        let intent = script.advance(dt);
        sim.tick(&intent, dt, &mut display);
        elapsed += dt;

        if config.debug.show_hud && elapsed >= next_hud {
            info!("{}", hud::format_hud(sim.state()));
            next_hud = elapsed + 0.5;
        }

        std::thread::sleep(Duration::from_millis(15));
    }

    let ledger = &sim.state().ledger;
    info!(
        "demo finished: banked ${}, ${:.0} left on the lever",
        ledger.collected(),
        ledger.uncollected()
    );
}
