//! Fundamental time, viewport, and image-hint types.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Per-frame clock reading supplied by the host.
///
/// The simulation never reads a global clock: the host measures elapsed wall
/// time since the previous frame and passes it in here, so motion stays
/// wall-clock accurate at any frame rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameTime {
    /// Monotonic milliseconds since simulation start.
    pub now_ms: f64,
    /// Measured real seconds since the previous frame.
    pub delta_secs: f32,
}

impl FrameTime {
    pub fn new(now_ms: f64, delta_secs: f32) -> Self {
        Self { now_ms, delta_secs }
    }
}

/// Simulation time tracking for snapshots.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Frames processed while the game was active.
    pub tick: u64,
    /// Clock reading of the most recent active frame (milliseconds).
    pub now_ms: f64,
}

impl SimTime {
    /// Record one processed frame.
    pub fn advance(&mut self, frame: FrameTime) {
        self.tick += 1;
        self.now_ms = frame.now_ms;
    }
}

/// Current window bounds, consulted for random horizontal spawns and for
/// clamping turret movement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True if the point lies strictly inside the window.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x > 0.0 && x < self.width && y > 0.0 && y < self.height
    }

    pub fn center(&self) -> Vec3 {
        Vec3::new(self.width / 2.0, self.height / 2.0, 0.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: crate::constants::DEFAULT_VIEWPORT_WIDTH,
            height: crate::constants::DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

/// Footprint of an image attached to a sprite or emitter.
///
/// Asset loading lives in the host; the simulation only needs the dimensions
/// (a sprite's bounding box takes the image's size) and the fact that an
/// image exists at all.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteImage {
    pub width: f32,
    pub height: f32,
}
