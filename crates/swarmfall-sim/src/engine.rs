//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the world, processes player commands, runs all
//! systems in a fixed order and produces `GameStateSnapshot`s. Completely
//! headless, enabling deterministic testing.

use std::collections::VecDeque;

use glam::Vec2;
use log::{info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use swarmfall_core::commands::PlayerCommand;
use swarmfall_core::enums::GamePhase;
use swarmfall_core::events::AudioCue;
use swarmfall_core::state::GameStateSnapshot;
use swarmfall_core::types::SimTime;
use swarmfall_core::upgrades::UpgradeOption;

use crate::config::SimConfig;
use crate::error::SimError;
use crate::systems;
use crate::systems::combat::{CombatOutcome, Hit};
use crate::systems::wave_director::WaveDirector;
use crate::weapons::{EvolutionManager, WeaponContext};
use crate::world::World;

/// The simulation engine. Owns the world and all run state.
pub struct SimulationEngine {
    config: SimConfig,
    world: World,
    director: WaveDirector,
    evolution: EvolutionManager,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    audio_cues: Vec<AudioCue>,
    upgrade_offer: Vec<UpgradeOption>,
    /// Level-ups earned but not yet resolved through `ChooseUpgrade`.
    pending_level_ups: u32,
    /// Last pointer position, screen space.
    pointer: Vec2,
    hits: Vec<Hit>,
}

impl SimulationEngine {
    /// Create a new engine. Fails if the config is invalid.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        let world = World::new(&config)?;
        Ok(Self {
            director: WaveDirector::new(&config.waves),
            evolution: EvolutionManager::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            audio_cues: Vec::new(),
            upgrade_offer: Vec::new(),
            pending_level_ups: 0,
            pointer: Vec2::ZERO,
            hits: Vec::new(),
            world,
            config,
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by `dt` seconds and return the resulting
    /// snapshot. `dt` is clamped to the configured maximum; outside the
    /// `Active` phase nothing advances.
    ///
    /// An `Err` means a pool was misconfigured and is not recoverable.
    pub fn tick(&mut self, dt: f32) -> Result<GameStateSnapshot, SimError> {
        self.process_commands()?;

        if self.phase.is_running() {
            let dt = if dt.is_finite() {
                dt.clamp(0.0, self.config.max_tick_delta)
            } else {
                0.0
            };
            self.run_systems(dt)?;
            self.time.advance(dt);
        }

        let audio_cues = std::mem::take(&mut self.audio_cues);
        Ok(systems::snapshot::build_snapshot(
            &self.world,
            &self.director,
            &self.evolution,
            self.time,
            self.phase,
            &self.upgrade_offer,
            audio_cues,
        ))
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Options currently awaiting a `ChooseUpgrade`. Empty outside `LevelUp`.
    pub fn upgrade_offer(&self) -> &[UpgradeOption] {
        &self.upgrade_offer
    }

    /// Last pointer position mapped into world space.
    pub fn pointer_world(&self) -> Vec2 {
        self.world.camera.screen_to_world(self.pointer)
    }

    pub fn director(&self) -> &WaveDirector {
        &self.director
    }

    pub fn evolution(&self) -> &EvolutionManager {
        &self.evolution
    }

    /// Mutable world access (for tests that stage entities directly).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) -> Result<(), SimError> {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command)?;
        }
        Ok(())
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) -> Result<(), SimError> {
        match command {
            PlayerCommand::StartRun => {
                if self.phase == GamePhase::MainMenu {
                    self.start_run()?;
                }
            }
            PlayerCommand::Restart => {
                if matches!(self.phase, GamePhase::GameOver | GamePhase::Paused) {
                    self.start_run()?;
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::SetMovement { x, y } => {
                self.world.player.set_input(Vec2::new(x, y));
            }
            PlayerCommand::SetPointer { x, y } => {
                if x.is_finite() && y.is_finite() {
                    self.pointer = Vec2::new(x, y);
                }
            }
            PlayerCommand::ChooseUpgrade { index } => self.choose_upgrade(index),
        }
        Ok(())
    }

    /// Release everything back to the pools and begin a fresh run.
    fn start_run(&mut self) -> Result<(), SimError> {
        self.world.reset()?;
        self.director.reset();
        self.evolution.init();
        self.time = SimTime::default();
        self.upgrade_offer.clear();
        self.pending_level_ups = 0;
        self.phase = GamePhase::Active;
        self.audio_cues.push(AudioCue::Start);
        info!("run started (seed {})", self.config.seed);
        Ok(())
    }

    fn choose_upgrade(&mut self, index: usize) {
        if self.phase != GamePhase::LevelUp {
            warn!("upgrade choice {index} ignored outside level-up");
            return;
        }
        let Some(option) = self.upgrade_offer.get(index).cloned() else {
            warn!(
                "upgrade choice {index} out of range ({} offered)",
                self.upgrade_offer.len()
            );
            return;
        };
        self.evolution.apply_upgrade(&option, &mut self.world.player);
        self.pending_level_ups = self.pending_level_ups.saturating_sub(1);
        if self.pending_level_ups > 0 {
            self.upgrade_offer = self.evolution.get_upgrades(self.config.upgrade_choices);
        } else {
            self.upgrade_offer.clear();
            self.phase = GamePhase::Active;
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32) -> Result<(), SimError> {
        // 1. Wave spawning
        self.director
            .update(dt, &mut self.world, &mut self.rng, &mut self.audio_cues)?;
        // 2. Player movement + animation
        self.world.player.update(dt);
        // 3. Weapons (cooldowns, emission, orbit upkeep) then projectile motion
        let fired = {
            let mut ctx = WeaponContext::new(&mut self.world, &mut self.audio_cues);
            self.evolution.update(dt, &mut ctx)?
        };
        if fired {
            self.world.player.trigger_attack();
        }
        systems::movement::run(&mut self.world, dt);
        // 4. Loot + effects
        let level_ups = systems::loot::run(&mut self.world, dt);
        systems::movement::update_texts(&mut self.world, dt);
        // 5. Enemy steering
        systems::steering::run(&mut self.world, dt);
        // 6. Collision resolution
        let outcome = systems::combat::run(
            &mut self.world,
            &mut self.rng,
            &mut self.audio_cues,
            &mut self.hits,
        )?;
        if outcome == CombatOutcome::PlayerDied {
            let score = self.world.score.score;
            self.phase = GamePhase::GameOver;
            self.audio_cues.push(AudioCue::GameOver { score });
            info!(
                "game over at {:.1}s: score {score}, {} kills",
                self.director.elapsed(),
                self.world.score.kills
            );
            return Ok(());
        }
        // 7. Cleanup
        systems::cleanup::run(&mut self.world)?;
        // 8. Camera follow
        let target = self.world.player.position;
        self.world.camera.update(target);
        // 9. Level-up menu
        if level_ups > 0 {
            self.pending_level_ups += level_ups;
            self.phase = GamePhase::LevelUp;
            self.upgrade_offer = self.evolution.get_upgrades(self.config.upgrade_choices);
            let level = self.world.player.level;
            self.audio_cues.push(AudioCue::LevelUp { level });
            info!("level {level} reached, awaiting upgrade choice");
        }
        Ok(())
    }
}
