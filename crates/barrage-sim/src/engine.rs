//! Game engine — the core of the game.
//!
//! `GameEngine` owns the turret and invader emitters, processes queued
//! player commands, runs the per-frame pipeline (steer, spawn, move,
//! collide, score), and produces `GameSnapshot`s. Completely headless
//! (no window or audio dependency), enabling deterministic testing.

use std::collections::VecDeque;

use glam::{Mat3, Vec3};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use barrage_core::commands::PlayerCommand;
use barrage_core::constants::{
    INVADER_LIFESPAN_MS, INVADER_RATE, INVADER_SPAWN_OFFSET, MIN_RATE, SCORE_PER_IMPACT,
    TURRET_LIFESPAN_MS, TURRET_RATE, TURRET_VELOCITY,
};
use barrage_core::enums::{EmitterKind, GamePhase};
use barrage_core::events::AudioEvent;
use barrage_core::state::{EmitterView, GameSnapshot, ScoreView, SpriteView};
use barrage_core::types::{FrameTime, SimTime, Viewport};

use crate::emitter::Emitter;

/// Configuration for starting a new game.
pub struct SimConfig {
    /// RNG seed for the invader spawn positions. Same seed + same commands +
    /// same frame times = same game.
    pub seed: u64,
    /// Initial window bounds.
    pub viewport: Viewport,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            viewport: Viewport::default(),
        }
    }
}

/// The game engine. Owns both emitters and all game state.
pub struct GameEngine {
    turret: Emitter,
    invaders: Emitter,
    phase: GamePhase,
    time: SimTime,
    viewport: Viewport,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    audio_events: Vec<AudioEvent>,
    score: ScoreView,
}

impl GameEngine {
    /// Create a new game engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        let mut turret = Emitter::new(EmitterKind::Turret);
        turret.rate = TURRET_RATE;
        turret.lifespan_ms = TURRET_LIFESPAN_MS;
        turret.velocity = Vec3::from_array(TURRET_VELOCITY);

        let mut invaders = Emitter::new(EmitterKind::Invader);
        invaders.rate = INVADER_RATE;
        invaders.lifespan_ms = INVADER_LIFESPAN_MS;
        invaders.randomize_x = true;
        invaders.system.charge = true;

        Self {
            turret,
            invaders,
            phase: GamePhase::default(),
            time: SimTime::default(),
            viewport: config.viewport,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            audio_events: Vec::new(),
            score: ScoreView::default(),
        }
    }

    /// Queue a player command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the simulation by one frame and return the resulting snapshot.
    pub fn tick(&mut self, frame: FrameTime) -> GameSnapshot {
        self.process_commands(frame);

        if self.phase == GamePhase::Active {
            self.steer_turret();
            self.turret
                .update(frame, self.viewport, &mut self.rng, &mut self.audio_events);
            self.invaders
                .update(frame, self.viewport, &mut self.rng, &mut self.audio_events);
            self.turret
                .system
                .collide_check(&mut self.invaders.system, &mut self.audio_events);
            self.settle_score();
            self.time.advance(frame);
        }

        self.build_snapshot()
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the running score.
    pub fn score(&self) -> ScoreView {
        self.score
    }

    /// Get a read-only reference to the turret emitter.
    pub fn turret(&self) -> &Emitter {
        &self.turret
    }

    /// Get a read-only reference to the invader spawner.
    pub fn invaders(&self) -> &Emitter {
        &self.invaders
    }

    /// Mutable turret access (for tests that stage collisions directly).
    #[cfg(test)]
    pub fn turret_mut(&mut self) -> &mut Emitter {
        &mut self.turret
    }

    /// Mutable invader access (for tests that stage collisions directly).
    #[cfg(test)]
    pub fn invaders_mut(&mut self) -> &mut Emitter {
        &mut self.invaders
    }

    /// Process all queued commands.
    fn process_commands(&mut self, frame: FrameTime) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command, frame);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand, frame: FrameTime) {
        match command {
            PlayerCommand::StartGame => {
                if self.phase == GamePhase::MainMenu {
                    self.setup_wave(frame);
                    self.phase = GamePhase::Active;
                    log::info!("game started");
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::MoveTurret { dir } => {
                self.turret.moving = true;
                self.turret.move_dir = dir.step();
            }
            PlayerCommand::StopTurret => {
                self.turret.moving = false;
            }
            PlayerCommand::RotateTurret { step_deg } => {
                self.turret.rotating = true;
                self.turret.rotate_step = step_deg;
            }
            PlayerCommand::StopRotate => {
                self.turret.rotating = false;
            }
            PlayerCommand::SetShooting { on } => {
                self.turret.shoot = on;
            }
            PlayerCommand::PressAt { x, y } => {
                self.turret.dragged = self
                    .turret
                    .transform
                    .contains_world(Vec3::new(x, y, 0.0));
            }
            PlayerCommand::Release => {
                self.turret.dragged = false;
            }
            PlayerCommand::DragTurret { x, y } => {
                if self.turret.dragged && self.viewport.contains(x, y) {
                    let z = self.turret.transform.position.z;
                    self.turret.transform.position = Vec3::new(x, y, z);
                }
            }
            PlayerCommand::SetTurretRate { rate } => {
                self.turret.rate = rate.max(MIN_RATE);
            }
            PlayerCommand::SetTurretLifespan { ms } => {
                self.turret.lifespan_ms = ms;
            }
            PlayerCommand::SetTurretVelocity { velocity } => {
                self.turret.velocity = Vec3::from_array(velocity);
            }
            PlayerCommand::SetInvaderRate { rate } => {
                self.invaders.rate = rate.max(MIN_RATE);
            }
            PlayerCommand::SetInvaderLifespan { ms } => {
                self.invaders.lifespan_ms = ms;
            }
            PlayerCommand::SetViewport { width, height } => {
                self.viewport = Viewport::new(width, height);
            }
        }
    }

    /// Place the emitters and open fire for a fresh wave.
    fn setup_wave(&mut self, frame: FrameTime) {
        self.turret.transform.position = self.viewport.center();
        self.turret.start(frame.now_ms);

        self.invaders.transform.position =
            Vec3::new(self.viewport.width / 2.0, INVADER_SPAWN_OFFSET, 0.0);
        self.invaders.shoot = true;
        self.invaders.start(frame.now_ms);

        self.score = ScoreView::default();
    }

    /// Apply held movement/rotation keys to the turret, one step per frame.
    fn steer_turret(&mut self) {
        if self.turret.moving {
            let next = self.turret.transform.position + self.turret.move_dir;
            if self.viewport.contains(next.x, next.y) {
                self.turret.transform.position = next;
            }
        }

        if self.turret.rotating {
            // Rotation steers through the velocity: spin the heading and
            // re-aim at constant speed. The emitter re-derives its visual
            // rotation from the velocity on update.
            let rot = self.turret.transform.rotation + self.turret.rotate_step;
            let heading = Mat3::from_rotation_z(rot.to_radians()) * Vec3::Y;
            let speed = self.turret.velocity.length();
            self.turret.velocity = heading * speed;
        }
    }

    /// Convert this frame's events into points.
    fn settle_score(&mut self) {
        for event in &self.audio_events {
            match event {
                AudioEvent::Impact { .. } => {
                    self.score.score += SCORE_PER_IMPACT;
                    self.score.invaders_destroyed += 1;
                }
                AudioEvent::ShotFired {
                    emitter: EmitterKind::Turret,
                } => {
                    self.score.shots_fired += 1;
                }
                AudioEvent::ShotFired { .. } => {}
            }
        }
    }

    fn build_snapshot(&mut self) -> GameSnapshot {
        GameSnapshot {
            time: self.time,
            phase: self.phase,
            turret: emitter_view(&self.turret),
            invaders: emitter_view(&self.invaders),
            score: self.score,
            audio_events: std::mem::take(&mut self.audio_events),
        }
    }
}

/// Build the render view of one emitter and its live sprites.
fn emitter_view(emitter: &Emitter) -> EmitterView {
    EmitterView {
        position: emitter.transform.position,
        rotation: emitter.transform.rotation,
        rate: emitter.rate,
        lifespan_ms: emitter.lifespan_ms,
        started: emitter.started,
        shooting: emitter.shoot,
        has_image: emitter.has_image,
        sprites: emitter
            .system
            .sprites
            .iter()
            .map(|s| SpriteView {
                position: s.transform.position,
                rotation: s.transform.rotation,
                width: s.transform.width,
                height: s.transform.height,
                has_image: s.has_image,
            })
            .collect(),
    }
}
