//! Application state shared between the host thread and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use log::info;

use swarmfall_core::commands::PlayerCommand;
use swarmfall_core::state::GameStateSnapshot;
use swarmfall_sim::render::SpriteBook;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::game_loop::{self, GameLoop, LoopServices};

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// - `mpsc::Sender` is wrapped in `Mutex` (Sender is Send but not Sync)
/// - `Mutex<Option<...>>` holds state that does not exist before `start`
/// - `Arc<Mutex<...>>` is shared with the game loop thread
pub struct AppState {
    /// Channel sender to forward commands to the game loop thread.
    /// `None` before `start` is called.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot for synchronous polling.
    /// Updated by the game loop thread after each frame.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    /// Published sprite sheets. Loaders swap in a whole new book.
    pub sprites: Arc<Mutex<Arc<SpriteBook>>>,
    /// Whether the game loop is currently running.
    pub running: Mutex<bool>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            sprites: Arc::new(Mutex::new(Arc::new(SpriteBook::new()))),
            running: Mutex::new(false),
            handle: Mutex::new(None),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the engine and spawn the game loop thread.
    pub fn start(&self, config: &AppConfig, services: LoopServices) -> Result<(), AppError> {
        let mut running = self.running.lock().map_err(|_| AppError::Poisoned)?;
        if *running {
            return Err(AppError::AlreadyRunning);
        }

        let game_loop = GameLoop::new(config, services)?;
        let (cmd_tx, handle) = game_loop::spawn_game_loop(
            game_loop,
            config.frame_rate,
            Arc::clone(&self.latest_snapshot),
            Arc::clone(&self.sprites),
        )?;

        *self.command_tx.lock().map_err(|_| AppError::Poisoned)? = Some(cmd_tx);
        *self.handle.lock().map_err(|_| AppError::Poisoned)? = Some(handle);
        *running = true;
        info!("game loop started at {} Hz", config.frame_rate);
        Ok(())
    }

    /// Send a player command to the simulation.
    pub fn send_command(&self, command: PlayerCommand) -> Result<(), AppError> {
        let tx_lock = self.command_tx.lock().map_err(|_| AppError::Poisoned)?;
        match tx_lock.as_ref() {
            Some(tx) => tx
                .send(GameLoopCommand::PlayerCommand(command))
                .map_err(|_| AppError::Disconnected),
            None => Err(AppError::NotStarted),
        }
    }

    /// Get the latest snapshot.
    pub fn snapshot(&self) -> Result<Option<GameStateSnapshot>, AppError> {
        let lock = self.latest_snapshot.lock().map_err(|_| AppError::Poisoned)?;
        Ok(lock.clone())
    }

    /// Replace the sprite book seen by subsequent frames.
    pub fn publish_sprites(&self, book: SpriteBook) -> Result<(), AppError> {
        let mut lock = self.sprites.lock().map_err(|_| AppError::Poisoned)?;
        *lock = Arc::new(book);
        Ok(())
    }

    /// Stop the game loop and wait for its thread to exit.
    pub fn shutdown(&self) -> Result<(), AppError> {
        let mut running = self.running.lock().map_err(|_| AppError::Poisoned)?;
        if !*running {
            return Err(AppError::NotStarted);
        }
        if let Some(tx) = self.command_tx.lock().map_err(|_| AppError::Poisoned)?.take() {
            // The loop may already have stopped on its own.
            let _ = tx.send(GameLoopCommand::Shutdown);
        }
        if let Some(handle) = self.handle.lock().map_err(|_| AppError::Poisoned)?.take() {
            handle.join().map_err(|_| AppError::Disconnected)?;
        }
        *running = false;
        info!("game loop stopped");
        Ok(())
    }
}
