//! BARRAGE headless host.
//!
//! Wires the simulation crates to a paced game-loop thread and logs the
//! events a real frontend would turn into sound and drawing.

pub mod game_loop;
pub mod state;

pub use barrage_core as core;
