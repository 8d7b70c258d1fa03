#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::commands::PlayerCommand;
    use crate::enums::*;
    use crate::events::AudioEvent;
    use crate::state::GameSnapshot;
    use crate::transform::Transform;
    use crate::types::{FrameTime, SimTime, Viewport};

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_game_phase_serde() {
        let variants = vec![GamePhase::MainMenu, GamePhase::Active, GamePhase::Paused];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_move_dir_serde() {
        let variants = vec![MoveDir::Left, MoveDir::Right, MoveDir::Up, MoveDir::Down];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: MoveDir = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::StartGame,
            PlayerCommand::Pause,
            PlayerCommand::Resume,
            PlayerCommand::MoveTurret { dir: MoveDir::Left },
            PlayerCommand::StopTurret,
            PlayerCommand::RotateTurret { step_deg: -2.0 },
            PlayerCommand::StopRotate,
            PlayerCommand::SetShooting { on: true },
            PlayerCommand::PressAt { x: 10.0, y: 20.0 },
            PlayerCommand::Release,
            PlayerCommand::DragTurret { x: 300.0, y: 200.0 },
            PlayerCommand::SetTurretRate { rate: 4.0 },
            PlayerCommand::SetTurretLifespan { ms: 2500.0 },
            PlayerCommand::SetTurretVelocity {
                velocity: [0.0, -700.0, 0.0],
            },
            PlayerCommand::SetInvaderRate { rate: 1.5 },
            PlayerCommand::SetInvaderLifespan { ms: 7000.0 },
            PlayerCommand::SetViewport {
                width: 800.0,
                height: 600.0,
            },
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify AudioEvent round-trips through serde.
    #[test]
    fn test_audio_event_serde() {
        let events = vec![
            AudioEvent::ShotFired {
                emitter: EmitterKind::Turret,
            },
            AudioEvent::ShotFired {
                emitter: EmitterKind::Invader,
            },
            AudioEvent::Impact { x: 512.0, y: 48.0 },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let _back: AudioEvent = serde_json::from_str(&json).unwrap();
        }
    }

    /// Verify GameSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    /// Verify the local bounding-box test, edges included.
    #[test]
    fn test_transform_contains_local() {
        let t = Transform::new(10.0, 4.0);
        assert!(t.contains_local(Vec3::ZERO));
        assert!(t.contains_local(Vec3::new(5.0, 2.0, 0.0)));
        assert!(t.contains_local(Vec3::new(-5.0, -2.0, 0.0)));
        assert!(!t.contains_local(Vec3::new(5.1, 0.0, 0.0)));
        assert!(!t.contains_local(Vec3::new(0.0, -2.1, 0.0)));
    }

    /// Verify the world-space test honors translation and rotation.
    #[test]
    fn test_transform_contains_world() {
        let mut t = Transform::new(4.0, 2.0);
        t.position = Vec3::new(10.0, 0.0, 0.0);

        // Outside the un-rotated box (above it), inside after a quarter turn.
        let p = Vec3::new(10.0, 1.8, 0.0);
        assert!(!t.contains_world(p));
        t.rotation = 90.0;
        assert!(t.contains_world(p));

        // Far point stays outside either way.
        assert!(!t.contains_world(Vec3::new(20.0, 0.0, 0.0)));
    }

    /// Verify Viewport containment is strict at the edges.
    #[test]
    fn test_viewport_contains() {
        let v = Viewport::new(800.0, 600.0);
        assert!(v.contains(400.0, 300.0));
        assert!(!v.contains(0.0, 300.0));
        assert!(!v.contains(800.0, 300.0));
        assert!(!v.contains(400.0, 600.0));
        assert_eq!(v.center(), Vec3::new(400.0, 300.0, 0.0));
    }

    /// Verify SimTime advancement records the latest clock reading.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);

        for i in 1..=30u64 {
            time.advance(FrameTime::new(i as f64 * 16.0, 0.016));
        }
        assert_eq!(time.tick, 30);
        assert!((time.now_ms - 480.0).abs() < 1e-10);
    }
}
