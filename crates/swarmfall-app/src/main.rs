use std::process::ExitCode;
use std::time::{Duration, Instant};

use log::{error, info, warn, LevelFilter};

use swarmfall_app::audio::LogAudio;
use swarmfall_app::config::AppConfig;
use swarmfall_app::error::AppError;
use swarmfall_app::game_loop::LoopServices;
use swarmfall_app::headless::StatsCanvas;
use swarmfall_app::input::CircleStrafe;
use swarmfall_app::leaderboard::JsonScoreBoard;
use swarmfall_app::logger::Logger;
use swarmfall_app::state::AppState;
use swarmfall_app::upgrade_select::PreferWeapons;
use swarmfall_app::core::commands::PlayerCommand;
use swarmfall_app::core::enums::GamePhase;

const DEFAULT_CONFIG: &str = "swarmfall.toml";

fn main() -> ExitCode {
    let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG.into());
    let loaded = AppConfig::load(&path);
    let level = loaded
        .as_ref()
        .map(AppConfig::level_filter)
        .unwrap_or(LevelFilter::Info);
    if let Err(e) = Logger::init(level) {
        eprintln!("{e}");
    }
    let config = loaded.unwrap_or_else(|e| {
        warn!("{path}: {e}; using defaults");
        AppConfig::default()
    });

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Play headless runs back to back until the session time is up.
fn run(config: &AppConfig) -> Result<(), AppError> {
    let services = LoopServices {
        scores: Box::new(JsonScoreBoard::open(&config.leaderboard_path)?),
        selector: Box::new(PreferWeapons),
        input: Box::new(CircleStrafe::default()),
        audio: Box::new(LogAudio),
        canvas: Box::new(StatsCanvas::default()),
    };

    let state = AppState::new();
    state.start(config, services)?;
    state.send_command(PlayerCommand::StartRun)?;

    let session =
        Duration::try_from_secs_f64(config.run_seconds.max(0.0)).unwrap_or(Duration::ZERO);
    let deadline = Instant::now() + session;
    while Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(250));
        if let Some(snap) = state.snapshot()? {
            if snap.phase == GamePhase::GameOver {
                state.send_command(PlayerCommand::Restart)?;
            }
        }
    }

    if let Some(snap) = state.snapshot()? {
        info!(
            "session over at {:.1}s of play: level {}, score {}, {} enemies on field",
            snap.time.elapsed_secs,
            snap.player.level,
            snap.score.score,
            snap.enemies.len()
        );
    }
    state.shutdown()
}
