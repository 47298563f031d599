//! Roid Belt entry point
//!
//! Headless host: loads settings, wires the game to file/log collaborators and
//! drives it at a fixed 30 Hz with the demo pilot at the controls.

use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use clap::Parser;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use roid_belt::audio::LogAudio;
use roid_belt::platform::{DemoPilot, FixedTimestep};
use roid_belt::renderer::HudRenderer;
use roid_belt::{FileScoreStore, Game, Settings};

#[derive(Parser)]
#[command(name = "roid-belt")]
#[command(about = "Run the asteroid belt simulation headless with a demo pilot")]
struct Args {
    /// Path to the settings file
    #[arg(short, long, default_value = Settings::DEFAULT_PATH)]
    settings: PathBuf,

    /// RNG seed (overrides the settings file)
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many ticks (0 = run forever)
    #[arg(short, long, default_value_t = 0)]
    ticks: u64,

    /// Run ticks back to back instead of at 30 Hz
    #[arg(long)]
    fast: bool,

    /// Highscore file (overrides the settings file)
    #[arg(long)]
    score_file: Option<PathBuf>,
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    log::info!("Roid Belt starting...");

    let settings = Settings::load(&args.settings);
    let seed = args.seed.or(settings.seed).unwrap_or_else(clock_seed);
    let score_file = args.score_file.unwrap_or_else(|| settings.score_file.clone());

    let mut game = Game::new(
        &settings,
        Pcg32::seed_from_u64(seed),
        FileScoreStore::new(score_file),
        LogAudio::new(),
        HudRenderer::with_overlays(settings.overlays()),
    );
    log::info!("Game initialized with seed: {}", seed);

    let mut pilot = DemoPilot::new();
    let mut timestep = FixedTimestep::new();
    let mut last_frame = Instant::now();
    let mut ran: u64 = 0;

    'frames: loop {
        let steps = if args.fast {
            1
        } else {
            let now = Instant::now();
            let dt = now.duration_since(last_frame).as_secs_f32();
            last_frame = now;
            timestep.advance(dt)
        };

        for _ in 0..steps {
            let input = pilot.next_input(&game.state);
            game.step(&input);
            ran += 1;
            if args.ticks > 0 && ran >= args.ticks {
                break 'frames;
            }
        }

        if !args.fast {
            std::thread::sleep(Duration::from_secs_f32(timestep.until_next()));
        }
    }

    log::info!(
        "Stopped after {} ticks: level {}, score {}, highscore {}",
        ran,
        game.state.level + 1,
        game.state.score,
        game.state.highscore
    );
}
