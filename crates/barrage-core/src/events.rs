//! Events emitted by the simulation for the host's sound and scoring.
//!
//! These replace polled one-shot flags: each event is pushed exactly once
//! into the frame's buffer and drained into the snapshot, so the host can
//! never observe a stale signal or forget to reset one.

use serde::{Deserialize, Serialize};

use crate::enums::EmitterKind;

/// Audio and scoring events for the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// An emitter spawned a sprite (fire sound).
    ShotFired { emitter: EmitterKind },
    /// A bullet met an invader (explosion sound, score).
    Impact { x: f32, y: f32 },
}
