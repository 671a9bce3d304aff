//! Billiards entry point
//!
//! Runs a headless session driven by the demo player. Pass a JSON settings
//! file as the first argument to override the default table.

use std::process::ExitCode;

use billiards::appearance::Palette;
use billiards::autoplay::AutoPlayer;
use billiards::session::{LogRenderer, Session};
use billiards::sim::{HELP, Simulation};
use billiards::{SetupError, Settings};

/// Demo shots before the session quits on its own
const DEMO_SHOTS: u32 = 5;
/// Hard stop for the headless run
const MAX_FRAMES: u64 = 60_000;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Billiards starting...");

    match run() {
        Ok(frames) => {
            log::info!("Finished after {} frames", frames);
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("Could not start the simulation: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<u64, SetupError> {
    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    let seed = std::env::var("BILLIARDS_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0x5eed);

    let mut sim = Simulation::new(settings.clone(), &mut Palette)?;
    println!("\n{HELP}");

    let session = Session::new(&settings).with_max_frames(MAX_FRAMES);
    let mut player = AutoPlayer::new(seed, DEMO_SHOTS);
    let mut renderer = LogRenderer::new(500);

    log::info!("Autoplay seed: {}", seed);
    Ok(session.run(&mut sim, &mut player, &mut renderer))
}
