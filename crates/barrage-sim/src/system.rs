//! Manages all sprites in a system. Multiple systems can coexist and be
//! collision-tested against each other.

use serde::{Deserialize, Serialize};

use barrage_core::constants::{CHARGE_BOOST_START_MS, CHARGE_STALL_END_MS, CHARGE_STALL_START_MS};
use barrage_core::events::AudioEvent;
use barrage_core::types::FrameTime;

use crate::sprite::Sprite;

/// An exclusively-owned, insertion-ordered collection of live sprites with
/// batched per-frame update and collision testing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpriteSystem {
    pub sprites: Vec<Sprite>,
    /// Staged-motion switch: sprites in this system free-fly, stall between
    /// 350 ms and 1500 ms of age, then fly boosted past 2000 ms.
    pub charge: bool,
}

impl SpriteSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sprite. No deduplication, no capacity bound.
    pub fn add(&mut self, sprite: Sprite) {
        self.sprites.push(sprite);
    }

    /// Erase one sprite by index. Out-of-range is a no-op; the main loop
    /// never calls this, expiry handles removal.
    pub fn remove(&mut self, index: usize) {
        if index < self.sprites.len() {
            self.sprites.remove(index);
        }
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Expire, apply staged motion, and integrate.
    ///
    /// Expiry computes the survivor set in a single pass, so any number of
    /// sprites can lapse in the same frame. Survivors then move by one frame
    /// of velocity.
    pub fn update(&mut self, time: FrameTime) {
        let now = time.now_ms;
        self.sprites.retain(|s| !s.expired(now));

        for sprite in &mut self.sprites {
            if self.charge {
                let age = sprite.age(now);
                if age > CHARGE_STALL_START_MS && age < CHARGE_STALL_END_MS {
                    sprite.velocity = glam::Vec3::ZERO;
                }
                if age > CHARGE_BOOST_START_MS {
                    sprite.velocity += sprite.acceleration;
                }
            }
            sprite.step(time.delta_secs);
        }
    }

    /// Test every sprite here against every sprite in `other`.
    ///
    /// The first hit per local sprite zeroes both lifespans (removal happens
    /// on each system's next `update`, not immediately) and emits one
    /// `Impact`; the inner search then stops, so one sprite takes out at
    /// most one opponent per frame.
    pub fn collide_check(&mut self, other: &mut SpriteSystem, events: &mut Vec<AudioEvent>) {
        for sprite in &mut self.sprites {
            for target in &mut other.sprites {
                if sprite.collides_with(target) {
                    sprite.lifespan_ms = 0.0;
                    target.lifespan_ms = 0.0;
                    let pos = sprite.transform.position;
                    log::debug!("impact at ({:.0}, {:.0})", pos.x, pos.y);
                    events.push(AudioEvent::Impact { x: pos.x, y: pos.y });
                    break;
                }
            }
        }
    }
}
