//! Game state snapshot — the complete visible state for the host each frame.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::GamePhase;
use crate::events::AudioEvent;
use crate::types::SimTime;

/// Complete game state built after each frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub turret: EmitterView,
    pub invaders: EmitterView,
    pub score: ScoreView,
    /// Events produced this frame; already drained, never repeated.
    pub audio_events: Vec<AudioEvent>,
}

/// An emitter and its live sprites, for rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmitterView {
    pub position: Vec3,
    /// Orientation in degrees.
    pub rotation: f32,
    pub rate: f32,
    pub lifespan_ms: f32,
    pub started: bool,
    pub shooting: bool,
    pub has_image: bool,
    pub sprites: Vec<SpriteView>,
}

/// A live sprite, for rendering: transform plus the image hint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteView {
    pub position: Vec3,
    /// Orientation in degrees.
    pub rotation: f32,
    pub width: f32,
    pub height: f32,
    /// Renderer hint: draw the attached image, or a placeholder rectangle.
    pub has_image: bool,
}

/// Running score.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: u32,
    pub shots_fired: u32,
    pub invaders_destroyed: u32,
}
