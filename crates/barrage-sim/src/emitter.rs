//! General purpose emitter for spawning sprites.

use glam::Vec3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use barrage_core::constants::{
    DEFAULT_LIFESPAN_MS, DEFAULT_RATE, DEFAULT_VELOCITY, EMITTER_SIZE, SPAWN_ACCEL,
};
use barrage_core::enums::EmitterKind;
use barrage_core::events::AudioEvent;
use barrage_core::transform::Transform;
use barrage_core::types::{FrameTime, SpriteImage, Viewport};

use crate::sprite::Sprite;
use crate::system::SpriteSystem;

/// A stateful spawner that periodically creates sprites into an owned
/// `SpriteSystem` while active.
///
/// Works like a particle emitter: `rate`, `lifespan_ms`, and `velocity` are
/// template values copied onto each spawned sprite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Emitter {
    pub kind: EmitterKind,
    pub transform: Transform,
    /// Sprites spawned by this emitter; created and destroyed with it.
    pub system: SpriteSystem,
    /// Spawns per second. Callers keep this strictly positive; the spawn
    /// gate divides by it.
    pub rate: f32,
    /// Lifespan copied onto each spawned sprite (ms).
    pub lifespan_ms: f32,
    /// Velocity copied onto each spawned sprite (units/sec).
    pub velocity: Vec3,
    /// Emission latch, flipped by `start`/`stop`.
    pub started: bool,
    /// Per-spawn gate: spawning needs both `started` and `shoot`.
    pub shoot: bool,
    /// Clock reading of the most recent spawn (ms).
    pub last_spawned_ms: f64,
    /// Randomize the horizontal position across the viewport before each
    /// spawn.
    pub randomize_x: bool,
    /// Image attached to spawned sprites; they take its footprint.
    pub child_image: Option<SpriteImage>,
    /// Renderer hint for the emitter itself.
    pub has_image: bool,

    // Host steering state, written by the engine between updates.
    pub moving: bool,
    pub move_dir: Vec3,
    pub rotating: bool,
    /// Degrees per frame while `rotating`.
    pub rotate_step: f32,
    pub dragged: bool,
}

impl Emitter {
    pub fn new(kind: EmitterKind) -> Self {
        Self {
            kind,
            transform: Transform::new(EMITTER_SIZE, EMITTER_SIZE),
            system: SpriteSystem::new(),
            rate: DEFAULT_RATE,
            lifespan_ms: DEFAULT_LIFESPAN_MS,
            velocity: Vec3::from_array(DEFAULT_VELOCITY),
            started: false,
            shoot: false,
            last_spawned_ms: 0.0,
            randomize_x: false,
            child_image: None,
            has_image: false,
            moving: false,
            move_dir: Vec3::ZERO,
            rotating: false,
            rotate_step: 0.0,
            dragged: false,
        }
    }

    /// Enable emission. Resets the spawn clock so a long-stopped emitter
    /// does not fire a catch-up burst.
    pub fn start(&mut self, now_ms: f64) {
        self.started = true;
        self.last_spawned_ms = now_ms;
    }

    /// Disable emission. Existing sprites also freeze: `update` returns
    /// early for a stopped emitter.
    pub fn stop(&mut self) {
        self.started = false;
    }

    /// Spawn if due, then advance the owned system.
    pub fn update(
        &mut self,
        time: FrameTime,
        viewport: Viewport,
        rng: &mut ChaCha8Rng,
        events: &mut Vec<AudioEvent>,
    ) {
        if !self.started {
            return;
        }

        // Face along the template velocity (visual orientation only).
        if self.velocity.length_squared() > f32::EPSILON {
            let angle = self.velocity.angle_between(Vec3::Y).to_degrees();
            self.transform.rotation = if self.velocity.x < 0.0 { angle } else { -angle };
        }

        if self.shoot && time.now_ms - self.last_spawned_ms > f64::from(1000.0 / self.rate) {
            if self.randomize_x {
                self.transform.position.x = rng.gen_range(0.0..viewport.width);
            }

            let mut sprite = Sprite::default();
            if let Some(image) = self.child_image {
                sprite.set_image(image);
            }
            sprite.velocity = self.velocity;
            sprite.acceleration = self.velocity.normalize_or_zero() * SPAWN_ACCEL;
            sprite.speed = self.velocity.length();
            sprite.transform.rotation = self.transform.rotation;
            sprite.transform.position = self.transform.position;
            sprite.lifespan_ms = self.lifespan_ms;
            sprite.birth_ms = time.now_ms;
            self.system.add(sprite);

            self.last_spawned_ms = time.now_ms;
            events.push(AudioEvent::ShotFired { emitter: self.kind });
        }

        self.system.update(time);
    }
}
