//! Player commands sent from the host to the simulation.
//!
//! Keyboard, mouse, and slider input is dispatched by the host shell; it
//! arrives here as data and is applied at the next frame boundary.

use serde::{Deserialize, Serialize};

use crate::enums::MoveDir;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Game flow ---
    /// Leave the start screen and begin the wave.
    StartGame,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,

    // --- Turret steering ---
    /// Begin moving the turret one step per frame in `dir`.
    MoveTurret { dir: MoveDir },
    /// Release the held movement key.
    StopTurret,
    /// Begin rotating the turret by `step_deg` degrees per frame.
    RotateTurret { step_deg: f32 },
    /// Release the held rotation key.
    StopRotate,
    /// Hold or release the fire key.
    SetShooting { on: bool },

    // --- Mouse ---
    /// Mouse press: grabs the turret if the press lands inside it.
    PressAt { x: f32, y: f32 },
    /// Mouse release: lets go of the turret.
    Release,
    /// Mouse drag: moves a grabbed turret, ignored outside the viewport.
    DragTurret { x: f32, y: f32 },

    // --- Turret tuning (slider panel) ---
    SetTurretRate { rate: f32 },
    SetTurretLifespan { ms: f32 },
    SetTurretVelocity { velocity: [f32; 3] },

    // --- Invader tuning (slider panel) ---
    SetInvaderRate { rate: f32 },
    SetInvaderLifespan { ms: f32 },

    // --- Window ---
    /// The host window was resized.
    SetViewport { width: f32, height: f32 },
}
