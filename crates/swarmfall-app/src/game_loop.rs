//! Game loop thread: drives the simulation engine once per host frame.
//!
//! Commands arrive via an `mpsc` channel. Each frame polls input, resolves a
//! pending upgrade choice, ticks the engine with the clamped wall-clock delta,
//! plays audio cues, draws and stores the snapshot for polling. The
//! leaderboard is consulted only when the run ends or the pause menu opens.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use log::{error, info, warn};

use swarmfall_core::commands::PlayerCommand;
use swarmfall_core::enums::GamePhase;
use swarmfall_core::state::GameStateSnapshot;
use swarmfall_core::types::FrameClock;
use swarmfall_sim::render::{self, Canvas, SpriteBook};
use swarmfall_sim::SimulationEngine;

use crate::audio::AudioSink;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::input::InputSource;
use crate::leaderboard::ScoreBoard;
use crate::state::GameLoopCommand;
use crate::upgrade_select::UpgradeSelector;

/// Entries shown on the pause menu and after game over.
const LEADERBOARD_ROWS: usize = 5;

/// The collaborators the loop talks to.
pub struct LoopServices {
    pub scores: Box<dyn ScoreBoard + Send>,
    pub selector: Box<dyn UpgradeSelector + Send>,
    pub input: Box<dyn InputSource + Send>,
    pub audio: Box<dyn AudioSink + Send>,
    pub canvas: Box<dyn Canvas + Send>,
}

pub struct GameLoop {
    engine: SimulationEngine,
    services: LoopServices,
    clock: FrameClock,
    player_name: String,
    last_phase: GamePhase,
    frames: u64,
}

impl GameLoop {
    pub fn new(config: &AppConfig, services: LoopServices) -> Result<Self, AppError> {
        let engine = SimulationEngine::new(config.sim.clone())?;
        Ok(Self {
            clock: FrameClock::new(config.sim.max_tick_delta),
            engine,
            services,
            player_name: config.player_name.clone(),
            last_phase: GamePhase::default(),
            frames: 0,
        })
    }

    pub fn queue(&mut self, command: PlayerCommand) {
        self.engine.queue_command(command);
    }

    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one host frame at wall time `now_secs`.
    pub fn frame(
        &mut self,
        now_secs: f64,
        sprites: &SpriteBook,
    ) -> Result<GameStateSnapshot, AppError> {
        // 1. Input
        let input = self.services.input.poll(now_secs);
        self.engine.queue_commands([
            PlayerCommand::SetMovement {
                x: input.movement.x,
                y: input.movement.y,
            },
            PlayerCommand::SetPointer {
                x: input.pointer.x,
                y: input.pointer.y,
            },
        ]);

        // 2. Pending upgrade choice
        if self.engine.phase() == GamePhase::LevelUp {
            if let Some(index) = self.services.selector.choose(self.engine.upgrade_offer()) {
                self.engine.queue_command(PlayerCommand::ChooseUpgrade { index });
            }
        }

        // 3. Delta. Frozen frames do not build up a backlog.
        if !self.last_phase.is_running() {
            self.clock.reset();
        }
        let dt = self.clock.delta(now_secs);

        // 4. Tick
        let snapshot = self.engine.tick(dt)?;

        // 5. Audio
        for cue in &snapshot.audio_cues {
            self.services.audio.play(cue);
        }

        // 6. Leaderboard, on phase entry only
        if snapshot.phase != self.last_phase {
            self.on_phase_entered(&snapshot);
        }

        // 7. Draw
        render::draw_frame(self.services.canvas.as_mut(), &snapshot, sprites);

        self.last_phase = snapshot.phase;
        self.frames += 1;
        Ok(snapshot)
    }

    fn on_phase_entered(&mut self, snapshot: &GameStateSnapshot) {
        match snapshot.phase {
            GamePhase::GameOver => {
                let score = snapshot.score.score;
                let rank = self.services.scores.rank_of(score);
                if let Err(e) = self.services.scores.submit(&self.player_name, score) {
                    warn!("could not record score: {e}");
                }
                info!(
                    "{} finished with {score} points ({} kills), rank {rank}",
                    self.player_name, snapshot.score.kills
                );
                self.log_leaderboard();
            }
            GamePhase::Paused => self.log_leaderboard(),
            _ => {}
        }
    }

    fn log_leaderboard(&self) {
        for (i, entry) in self.services.scores.top(LEADERBOARD_ROWS).iter().enumerate() {
            info!("{:>2}. {:<16} {}", i + 1, entry.identity, entry.score);
        }
    }
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    game_loop: GameLoop,
    frame_rate: u32,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    sprites: Arc<Mutex<Arc<SpriteBook>>>,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>), AppError> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let frame_duration = Duration::from_secs_f64(1.0 / frame_rate.max(1) as f64);

    let handle = std::thread::Builder::new()
        .name("swarmfall-game-loop".into())
        .spawn(move || {
            run_game_loop(game_loop, cmd_rx, frame_duration, &latest_snapshot, &sprites);
        })
        .map_err(AppError::Spawn)?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut game_loop: GameLoop,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    frame_duration: Duration,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
    sprites: &Mutex<Arc<SpriteBook>>,
) {
    let started = Instant::now();
    let mut next_frame_time = started;

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => game_loop.queue(cmd),
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Pick up the most recently published sprites
        let book = match sprites.lock() {
            Ok(lock) => Arc::clone(&*lock),
            Err(_) => Arc::new(SpriteBook::new()),
        };

        // 3. Advance one frame
        let snapshot = match game_loop.frame(started.elapsed().as_secs_f64(), &book) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                error!("simulation halted: {e}");
                return;
            }
        };

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until next frame
        next_frame_time += frame_duration;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > frame_duration * 2 {
            // Too far behind; reset to avoid catch-up spiral
            next_frame_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::Mute;
    use crate::headless::StatsCanvas;
    use crate::input::Idle;
    use crate::leaderboard::MemoryScoreBoard;
    use crate::upgrade_select::FirstChoice;
    use swarmfall_core::constants::MAX_TICK_DELTA;
    use swarmfall_core::upgrades::UpgradeOption;

    fn services() -> LoopServices {
        LoopServices {
            scores: Box::new(MemoryScoreBoard::new()),
            selector: Box::new(FirstChoice),
            input: Box::new(Idle),
            audio: Box::new(Mute),
            canvas: Box::new(StatsCanvas::default()),
        }
    }

    fn started() -> GameLoop {
        let mut game_loop = GameLoop::new(&AppConfig::default(), services()).unwrap();
        game_loop.queue(PlayerCommand::StartRun);
        game_loop
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartRun))
            .unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Pause))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::StartRun)
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::PlayerCommand(PlayerCommand::Pause)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_first_frame_after_start_has_zero_delta() {
        let mut game_loop = started();
        let book = SpriteBook::new();
        let snap = game_loop.frame(10.0, &book).unwrap();
        assert_eq!(snap.phase, GamePhase::Active);
        assert_eq!(snap.time.elapsed_secs, 0.0);

        let snap = game_loop.frame(10.05, &book).unwrap();
        assert!((snap.time.elapsed_secs - 0.05).abs() < 1e-4);
    }

    #[test]
    fn test_stall_is_clamped() {
        let mut game_loop = started();
        let book = SpriteBook::new();
        game_loop.frame(0.0, &book).unwrap();
        let snap = game_loop.frame(3.0, &book).unwrap();
        assert_eq!(snap.time.elapsed_secs, MAX_TICK_DELTA as f64);
    }

    #[test]
    fn test_resume_does_not_catch_up() {
        let mut game_loop = started();
        let book = SpriteBook::new();
        game_loop.frame(0.0, &book).unwrap();
        game_loop.frame(0.05, &book).unwrap();

        game_loop.queue(PlayerCommand::Pause);
        let paused = game_loop.frame(0.06, &book).unwrap();
        assert_eq!(paused.phase, GamePhase::Paused);
        game_loop.frame(5.0, &book).unwrap();

        game_loop.queue(PlayerCommand::Resume);
        let resumed = game_loop.frame(60.0, &book).unwrap();
        assert_eq!(resumed.phase, GamePhase::Active);
        // Baseline was reset: the resume frame consumes nothing.
        assert_eq!(resumed.time.elapsed_secs, paused.time.elapsed_secs);
        let next = game_loop.frame(60.02, &book).unwrap();
        assert!((next.time.elapsed_secs - paused.time.elapsed_secs - 0.02).abs() < 1e-4);
    }

    /// A config whose tiny view puts edge spawns within a second of the player.
    fn cramped() -> AppConfig {
        let mut config = AppConfig::default();
        config.sim.view_width = 48.0;
        config.sim.view_height = 48.0;
        config
    }

    #[test]
    fn test_selector_not_consulted_while_active() {
        struct Counting(Arc<Mutex<usize>>);
        impl UpgradeSelector for Counting {
            fn choose(&mut self, _options: &[UpgradeOption]) -> Option<usize> {
                if let Ok(mut calls) = self.0.lock() {
                    *calls += 1;
                }
                Some(0)
            }
        }

        let calls = Arc::new(Mutex::new(0));
        let mut svc = services();
        svc.selector = Box::new(Counting(Arc::clone(&calls)));
        let mut game_loop = GameLoop::new(&AppConfig::default(), svc).unwrap();
        game_loop.queue(PlayerCommand::StartRun);
        let book = SpriteBook::new();
        for i in 0..30 {
            game_loop.frame(i as f64 / 60.0, &book).unwrap();
        }
        assert_eq!(*calls.lock().unwrap(), 0);
        assert_eq!(game_loop.frames(), 30);
    }

    #[test]
    fn test_game_over_submits_score() {
        struct Shared(Arc<Mutex<MemoryScoreBoard>>);
        impl ScoreBoard for Shared {
            fn submit(
                &mut self,
                identity: &str,
                score: u32,
            ) -> Result<(), crate::leaderboard::LeaderboardError> {
                match self.0.lock() {
                    Ok(mut board) => board.submit(identity, score),
                    Err(_) => Ok(()),
                }
            }
            fn top(&self, n: usize) -> Vec<crate::leaderboard::ScoreEntry> {
                self.0.lock().map(|b| b.top(n)).unwrap_or_default()
            }
            fn rank_of(&self, score: u32) -> usize {
                self.0.lock().map(|b| b.rank_of(score)).unwrap_or(1)
            }
        }

        let board = Arc::new(Mutex::new(MemoryScoreBoard::new()));
        let mut svc = services();
        svc.scores = Box::new(Shared(Arc::clone(&board)));
        let mut game_loop = GameLoop::new(&cramped(), svc).unwrap();
        game_loop.queue(PlayerCommand::StartRun);

        let book = SpriteBook::new();
        let mut over = false;
        for i in 0..600 {
            let snap = game_loop.frame(i as f64 / 60.0, &book).unwrap();
            if snap.phase == GamePhase::GameOver {
                over = true;
                break;
            }
        }
        assert!(over, "an idle player in a cramped view should be overrun");
        let board = board.lock().unwrap();
        assert_eq!(board.len(), 1);
        assert_eq!(board.top(1)[0].identity, "player");
    }

    #[test]
    fn test_spawned_loop_publishes_snapshots() {
        let latest = Arc::new(Mutex::new(None));
        let sprites = Arc::new(Mutex::new(Arc::new(SpriteBook::new())));
        let (tx, handle) =
            spawn_game_loop(started(), 240, Arc::clone(&latest), sprites).unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        while latest.lock().unwrap().is_none() && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(5));
        }
        tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();

        let snap = latest.lock().unwrap().clone().unwrap();
        assert_eq!(snap.phase, GamePhase::Active);
    }
}
