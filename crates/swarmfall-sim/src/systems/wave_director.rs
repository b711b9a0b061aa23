//! Wave director: picks the active wave from elapsed time and issues spawns.

use std::f32::consts::TAU;

use glam::Vec2;
use log::{debug, info};
use rand::Rng;

use swarmfall_core::constants::*;
use swarmfall_core::enums::{EnemyKind, SpawnPattern};
use swarmfall_core::events::AudioCue;
use swarmfall_core::state::WaveView;
use swarmfall_core::types::Rect;

use crate::config::WaveConfig;
use crate::error::PoolError;
use crate::world::World;

/// A schedule entry with its runtime one-shot flag.
#[derive(Debug, Clone)]
pub struct Wave {
    pub start_time: f32,
    pub spawn_interval: f32,
    pub pattern: SpawnPattern,
    pub difficulty: f32,
    pub enemy_kind: EnemyKind,
    /// Boss waves only: set once the boss has been issued.
    pub has_spawned: bool,
}

impl From<&WaveConfig> for Wave {
    fn from(config: &WaveConfig) -> Self {
        Self {
            start_time: config.start_time,
            spawn_interval: config.spawn_interval,
            pattern: config.pattern,
            difficulty: config.difficulty,
            enemy_kind: config.kind(),
            has_spawned: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WaveDirector {
    elapsed: f32,
    spawn_timer: f32,
    waves: Vec<Wave>,
    /// Last reported wave, for transition logging.
    active: usize,
}

impl WaveDirector {
    /// `schedule` must be non-empty and sorted by start time.
    pub fn new(schedule: &[WaveConfig]) -> Self {
        Self {
            elapsed: 0.0,
            spawn_timer: 0.0,
            waves: schedule.iter().map(Wave::from).collect(),
            active: 0,
        }
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.spawn_timer = 0.0;
        self.active = 0;
        for wave in &mut self.waves {
            wave.has_spawned = false;
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn waves(&self) -> &[Wave] {
        &self.waves
    }

    /// Index of the last wave whose start time has passed, else 0.
    ///
    /// Waves never expire; they are only superseded by a later start.
    pub fn current_index(&self) -> usize {
        self.waves
            .iter()
            .rposition(|w| w.start_time <= self.elapsed)
            .unwrap_or(0)
    }

    /// Wave difficulty plus the global ramp.
    pub fn difficulty(&self) -> f32 {
        let base = self
            .waves
            .get(self.current_index())
            .map_or(1.0, |w| w.difficulty);
        base + (self.elapsed / DIFFICULTY_RAMP_INTERVAL).floor() * DIFFICULTY_RAMP_STEP
    }

    /// Advance the clock and spawn whatever the active wave calls for.
    pub fn update(
        &mut self,
        dt: f32,
        world: &mut World,
        rng: &mut impl Rng,
        audio: &mut Vec<AudioCue>,
    ) -> Result<(), PoolError> {
        self.elapsed += dt;
        self.spawn_timer += dt;

        let index = self.current_index();
        if index != self.active {
            debug!(
                "wave {} -> {} at {:.1}s",
                self.active, index, self.elapsed
            );
            self.active = index;
        }
        let difficulty = self.difficulty();
        let Some(wave) = self.waves.get_mut(index) else {
            return Ok(());
        };

        match wave.pattern {
            SpawnPattern::Boss => {
                if !wave.has_spawned {
                    wave.has_spawned = true;
                    let view = world.camera.visible_rect();
                    world.spawn_enemy(wave.enemy_kind, difficulty, boss_point(&view), rng)?;
                    info!("boss {} spawned at difficulty {difficulty}", wave.enemy_kind.name());
                    audio.push(AudioCue::BossSpawned);
                }
            }
            SpawnPattern::Edge => {
                if self.spawn_timer >= wave.spawn_interval {
                    self.spawn_timer = 0.0;
                    let view = world.camera.visible_rect();
                    let at = edge_point(&view, rng);
                    world.spawn_enemy(wave.enemy_kind, difficulty, at, rng)?;
                }
            }
            SpawnPattern::Circle => {
                if self.spawn_timer >= wave.spawn_interval {
                    self.spawn_timer = 0.0;
                    let center = world.player.position;
                    for at in ring_points(center, CIRCLE_SPAWN_RADIUS, CIRCLE_SPAWN_COUNT) {
                        world.spawn_enemy(wave.enemy_kind, difficulty, at, rng)?;
                    }
                }
            }
        }
        Ok(())
    }

    pub fn view(&self) -> WaveView {
        let index = self.current_index();
        let wave = self.waves.get(index);
        WaveView {
            index,
            pattern: wave.map(|w| w.pattern).unwrap_or_default(),
            enemy_kind: wave.map(|w| w.enemy_kind).unwrap_or_default(),
            difficulty: self.difficulty(),
            elapsed_secs: self.elapsed,
        }
    }
}

/// Random point just outside one edge of `view`.
pub fn edge_point(view: &Rect, rng: &mut impl Rng) -> Vec2 {
    if rng.gen_bool(0.5) {
        let x = if rng.gen_bool(0.5) {
            view.left() - EDGE_SPAWN_MARGIN
        } else {
            view.right() + EDGE_SPAWN_MARGIN
        };
        Vec2::new(x, view.top() + rng.gen::<f32>() * view.height)
    } else {
        let y = if rng.gen_bool(0.5) {
            view.top() - EDGE_SPAWN_MARGIN
        } else {
            view.bottom() + EDGE_SPAWN_MARGIN
        };
        Vec2::new(view.left() + rng.gen::<f32>() * view.width, y)
    }
}

/// `count` points evenly spaced on a ring.
pub fn ring_points(center: Vec2, radius: f32, count: usize) -> impl Iterator<Item = Vec2> {
    (0..count).map(move |i| {
        let angle = TAU / count as f32 * i as f32;
        center + Vec2::new(angle.cos(), angle.sin()) * radius
    })
}

/// Centred above the visible area.
pub fn boss_point(view: &Rect) -> Vec2 {
    Vec2::new(view.center().x, view.top() - BOSS_SPAWN_OFFSET)
}
