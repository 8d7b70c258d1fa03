//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting on the start screen; the simulation is frozen.
    #[default]
    MainMenu,
    Active,
    Paused,
}

/// Which spawner role an emitter plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmitterKind {
    /// The player's turret.
    Turret,
    /// The off-screen invader spawner.
    Invader,
}

/// Turret movement direction while a key is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveDir {
    Left,
    Right,
    Up,
    Down,
}

impl MoveDir {
    /// Per-frame turret step for this direction (screen coordinates, +Y is
    /// down).
    pub fn step(self) -> glam::Vec3 {
        let d = crate::constants::TURRET_MOVE_STEP;
        match self {
            MoveDir::Left => glam::Vec3::new(-d, 0.0, 0.0),
            MoveDir::Right => glam::Vec3::new(d, 0.0, 0.0),
            MoveDir::Up => glam::Vec3::new(0.0, -d, 0.0),
            MoveDir::Down => glam::Vec3::new(0.0, d, 0.0),
        }
    }
}
