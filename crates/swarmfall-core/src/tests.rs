#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::commands::PlayerCommand;
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::AudioCue;
    use crate::state::{EnemyView, GameStateSnapshot};
    use crate::types::{angle_between, unit, FrameClock, Rect, SimTime};
    use crate::upgrades::{UpgradeKind, UpgradeOption};

    // ---- Enums ----

    #[test]
    fn test_enemy_kind_from_name() {
        assert_eq!(EnemyKind::from_name("monster_eye"), EnemyKind::MonsterEye);
        assert_eq!(EnemyKind::from_name("boss_demon"), EnemyKind::BossDemon);
        for kind in EnemyKind::ALL {
            assert_eq!(EnemyKind::from_name(kind.name()), kind);
        }
    }

    #[test]
    fn test_enemy_kind_unknown_name_falls_back_to_default() {
        assert_eq!(EnemyKind::from_name("slime_king"), EnemyKind::MonsterRed);
        assert_eq!(EnemyKind::from_name(""), EnemyKind::default());
    }

    #[test]
    fn test_enemy_kind_serializes_as_config_name() {
        let json = serde_json::to_string(&EnemyKind::MonsterSkeleton).unwrap();
        assert_eq!(json, "\"monster_skeleton\"");
        let back: SpawnPattern = serde_json::from_str("\"circle\"").unwrap();
        assert_eq!(back, SpawnPattern::Circle);
    }

    #[test]
    fn test_only_active_phase_runs() {
        assert!(GamePhase::Active.is_running());
        for phase in [
            GamePhase::MainMenu,
            GamePhase::Paused,
            GamePhase::LevelUp,
            GamePhase::GameOver,
        ] {
            assert!(!phase.is_running(), "{phase:?} should freeze the sim");
        }
    }

    #[test]
    fn test_anim_frame_counts() {
        assert_eq!(AnimState::Idle.frame_count(), 4);
        assert_eq!(AnimState::Walk.frame_count(), 6);
        assert_eq!(AnimState::Throw.frame_count(), 4);
        assert_eq!(AnimState::WalkAttack.frame_count(), 6);
    }

    // ---- Commands / events ----

    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::StartRun,
            PlayerCommand::SetMovement { x: 1.0, y: -1.0 },
            PlayerCommand::SetPointer { x: 400.0, y: 300.0 },
            PlayerCommand::ChooseUpgrade { index: 2 },
            PlayerCommand::Pause,
        ];
        for cmd in commands {
            let json = serde_json::to_string(&cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(cmd, back);
        }
    }

    #[test]
    fn test_command_json_is_tagged() {
        let json = serde_json::to_string(&PlayerCommand::ChooseUpgrade { index: 1 }).unwrap();
        assert!(json.contains("\"type\":\"ChooseUpgrade\""));
        let cmd: PlayerCommand =
            serde_json::from_str(r#"{"type":"SetMovement","x":0.5,"y":0}"#).unwrap();
        assert_eq!(cmd, PlayerCommand::SetMovement { x: 0.5, y: 0.0 });
    }

    #[test]
    fn test_audio_cue_serde() {
        let cue = AudioCue::Hit {
            kind: EnemyKind::BossDemon,
            killed: false,
        };
        let json = serde_json::to_string(&cue).unwrap();
        assert!(json.contains("\"type\":\"Hit\""));
        assert!(json.contains("boss_demon"));
        let back: AudioCue = serde_json::from_str(&json).unwrap();
        assert_eq!(cue, back);
    }

    #[test]
    fn test_upgrade_option_serde() {
        let option = UpgradeOption::new(
            "Triple Bow",
            "Fires three bolts",
            UpgradeKind::NewWeapon {
                weapon_id: "multishot_bow".into(),
            },
        );
        let json = serde_json::to_string(&option).unwrap();
        let back: UpgradeOption = serde_json::from_str(&json).unwrap();
        assert_eq!(option, back);
    }

    // ---- Snapshot ----

    #[test]
    fn test_default_snapshot_serializes() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, GamePhase::MainMenu);
        assert!(back.enemies.is_empty());
        assert_eq!(back.score.score, 0);
    }

    #[test]
    fn test_enemy_view_hp_ratio() {
        let view = EnemyView {
            hp: 2500.0,
            max_hp: 5000.0,
            ..Default::default()
        };
        assert!((view.hp_ratio() - 0.5).abs() < 1e-6);
        assert_eq!(EnemyView::default().hp_ratio(), 0.0);
    }

    // ---- Types ----

    #[test]
    fn test_sim_time_advance() {
        let mut t = SimTime::default();
        t.advance(0.5);
        t.advance(0.25);
        assert_eq!(t.tick, 2);
        assert!((t.elapsed_secs - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_rect_edges_and_contains() {
        let r = Rect::from_origin(Vec2::new(-400.0, -300.0), VIEW_WIDTH, VIEW_HEIGHT);
        assert_eq!(r.right(), 400.0);
        assert_eq!(r.bottom(), 300.0);
        assert_eq!(r.center(), Vec2::ZERO);
        assert!(r.contains(Vec2::new(399.0, -299.0)));
        assert!(!r.contains(Vec2::new(401.0, 0.0)));
    }

    #[test]
    fn test_frame_clock_first_frame_is_zero() {
        let mut clock = FrameClock::new(MAX_TICK_DELTA);
        assert_eq!(clock.delta(12.0), 0.0);
        let dt = clock.delta(12.016);
        assert!((dt - 0.016).abs() < 1e-5);
    }

    #[test]
    fn test_frame_clock_clamps_stall() {
        let mut clock = FrameClock::new(MAX_TICK_DELTA);
        clock.delta(0.0);
        assert_eq!(clock.delta(5.0), MAX_TICK_DELTA);
    }

    #[test]
    fn test_frame_clock_reset_drops_backlog() {
        let mut clock = FrameClock::new(MAX_TICK_DELTA);
        clock.delta(1.0);
        clock.reset();
        // 30 s of pause must not surface as a delta.
        assert_eq!(clock.delta(31.0), 0.0);
        assert!((clock.delta(31.05) - 0.05).abs() < 1e-5);
    }

    #[test]
    fn test_frame_clock_ignores_time_going_backwards() {
        let mut clock = FrameClock::new(MAX_TICK_DELTA);
        clock.delta(2.0);
        assert_eq!(clock.delta(1.0), 0.0);
    }

    #[test]
    fn test_unit_and_angle_between() {
        let v = unit(std::f32::consts::FRAC_PI_2);
        assert!(v.x.abs() < 1e-6 && (v.y - 1.0).abs() < 1e-6);
        let a = angle_between(Vec2::new(1.0, 1.0), Vec2::new(1.0, 5.0));
        assert!((a - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }
}
