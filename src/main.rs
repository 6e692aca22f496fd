//! Brick Breaker entry point
//!
//! Runs a headless session with a simple autopilot on the paddle. Usage:
//! `brick-breaker [settings.json]`. Set `RUST_LOG=debug` to watch every bounce.

use std::time::{SystemTime, UNIX_EPOCH};

use brick_breaker::Settings;
use brick_breaker::assets::{AssetManifest, Preloader};
use brick_breaker::audio::{AudioManager, LogBackend};
use brick_breaker::consts::SIM_DT;
use brick_breaker::input::{KeyEvent, command_for, keys};
use brick_breaker::platform::{Lifecycle, Runner, Schedule};
use brick_breaker::renderer::build_frame;
use brick_breaker::sim::{GameState, Outcome};

const DEFAULT_SETTINGS_PATH: &str = "settings.json";
/// Safety net when no frame cap is configured (10 minutes at 60 Hz)
const DEFAULT_MAX_FRAMES: u64 = 60 * 60 * 10;

#[derive(Default)]
struct GameOver(Option<Outcome>);

impl Lifecycle for GameOver {
    fn game_over(&mut self, outcome: Outcome) {
        self.0 = Some(outcome);
    }
}

/// Steer toward the ball; release keys when roughly underneath it
fn autopilot(state: &GameState) -> KeyEvent {
    let paddle_center = state.paddle.pos.x + state.paddle.size.x / 2.0;
    let diff = state.ball.center_x() - paddle_center;
    if diff < -state.paddle.speed {
        KeyEvent::Down(keys::LEFT)
    } else if diff > state.paddle.speed {
        KeyEvent::Down(keys::RIGHT)
    } else {
        KeyEvent::Up(keys::LEFT)
    }
}

fn run() -> brick_breaker::Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SETTINGS_PATH.to_string());
    let settings = Settings::load(&path);

    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    let mut state = GameState::new(seed);

    // No real loader here: report every manifest entry as loaded
    let mut preloader = Preloader::new(AssetManifest::default());
    let asset_keys: Vec<&str> = preloader.manifest().iter().map(|(key, _)| key).collect();
    for key in asset_keys {
        log::debug!("Loading {}", preloader.manifest().path(key)?);
        if preloader.mark_loaded(key)? {
            state.assets_ready();
        }
    }
    let sprites = preloader.manifest().sprites()?;
    let sounds = preloader.manifest().sounds()?;

    let mut audio = AudioManager::new(Box::new(LogBackend), sounds);
    audio.apply_settings(&settings);
    let mut runner = Runner::new(audio);
    let mut game_over = GameOver::default();

    if let Some(command) = command_for(KeyEvent::Down(keys::SPACE)) {
        state.apply(command);
    }

    let max_frames = settings.max_frames.unwrap_or(DEFAULT_MAX_FRAMES);
    while runner.frames() < max_frames {
        if let Some(command) = command_for(autopilot(&state)) {
            state.apply(command);
        }
        let (_, schedule) = runner.frame(&mut state, SIM_DT, &mut game_over);
        let frame = build_frame(&state, &sprites);
        log::trace!("frame {}: {} draw commands", runner.frames(), frame.len());
        if schedule == Schedule::Stop {
            break;
        }
    }

    match game_over.0 {
        Some(outcome) => println!(
            "{} Score: {} after {} ticks",
            outcome.message(),
            state.score,
            state.time_ticks
        ),
        None => println!(
            "Stopped after {} frames. Score: {}",
            runner.frames(),
            state.score
        ),
    }
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Brick Breaker (headless) starting...");

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
