//! A single moving, aging entity.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use barrage_core::constants::{LIFESPAN_IMMORTAL, SPRITE_HEIGHT, SPRITE_WIDTH};
use barrage_core::transform::Transform;
use barrage_core::types::SpriteImage;

/// A transient simulation entity with position, velocity, and a finite or
/// infinite lifespan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sprite {
    pub transform: Transform,
    /// Units/sec.
    pub velocity: Vec3,
    /// Units/sec², fed into velocity per frame during a charge-mode boost.
    pub acceleration: Vec3,
    /// Informational only; motion integrates `velocity`.
    pub speed: f32,
    /// Milliseconds; `LIFESPAN_IMMORTAL` never expires.
    pub lifespan_ms: f32,
    /// Clock reading at creation (ms).
    pub birth_ms: f64,
    /// Renderer hint: an image is attached, draw it instead of a placeholder.
    pub has_image: bool,
}

impl Default for Sprite {
    fn default() -> Self {
        Self {
            transform: Transform::new(SPRITE_WIDTH, SPRITE_HEIGHT),
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            speed: 0.0,
            lifespan_ms: LIFESPAN_IMMORTAL,
            birth_ms: 0.0,
            has_image: false,
        }
    }
}

impl Sprite {
    /// Age in milliseconds at the given clock reading.
    pub fn age(&self, now_ms: f64) -> f64 {
        now_ms - self.birth_ms
    }

    /// True once a mortal sprite has outlived its lifespan.
    pub fn expired(&self, now_ms: f64) -> bool {
        self.lifespan_ms != LIFESPAN_IMMORTAL && self.age(now_ms) > f64::from(self.lifespan_ms)
    }

    /// Attach an image: the bounding box takes the image's footprint.
    pub fn set_image(&mut self, image: SpriteImage) {
        self.transform.width = image.width;
        self.transform.height = image.height;
        self.has_image = true;
    }

    /// Advance position by one frame of velocity.
    pub fn step(&mut self, delta_secs: f32) {
        self.transform.position += self.velocity * delta_secs;
    }

    /// Center-point containment: is this sprite's position inside `other`'s
    /// bounding box?
    ///
    /// A point test, not shape overlap: a fast sprite can pass through a
    /// larger one between frames without its center ever landing inside, and
    /// the result is asymmetric when the boxes differ in size.
    pub fn collides_with(&self, other: &Sprite) -> bool {
        other.transform.contains_world(self.transform.position)
    }
}
