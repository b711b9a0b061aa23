//! Snapshot system: reads the world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use swarmfall_core::enums::GamePhase;
use swarmfall_core::events::AudioCue;
use swarmfall_core::state::GameStateSnapshot;
use swarmfall_core::types::SimTime;
use swarmfall_core::upgrades::UpgradeOption;

use crate::systems::wave_director::WaveDirector;
use crate::weapons::EvolutionManager;
use crate::world::World;

pub fn build_snapshot(
    world: &World,
    director: &WaveDirector,
    evolution: &EvolutionManager,
    time: SimTime,
    phase: GamePhase,
    upgrade_offer: &[UpgradeOption],
    audio_cues: Vec<AudioCue>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time,
        phase,
        player: world.player.view(),
        camera: world.camera.view(),
        wave: director.view(),
        enemies: world.enemies.iter().map(|e| e.view()).collect(),
        projectiles: world.projectiles.iter().map(|p| p.view()).collect(),
        pickups: world.pickups.iter().map(|p| p.view()).collect(),
        texts: world.texts.iter().map(|t| t.view()).collect(),
        weapons: evolution.views(),
        upgrade_offer: upgrade_offer.to_vec(),
        audio_cues,
        score: world.score.view(),
    }
}
