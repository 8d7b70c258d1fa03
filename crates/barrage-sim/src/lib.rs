//! Simulation engine for BARRAGE.
//!
//! Sprites, sprite systems, and emitters, plus the game engine that composes
//! them into the turret-versus-invaders loop and produces `GameSnapshot`s
//! for the host. Completely headless, enabling deterministic testing.

pub mod emitter;
pub mod engine;
pub mod sprite;
pub mod system;

pub use barrage_core as core;
pub use engine::GameEngine;
