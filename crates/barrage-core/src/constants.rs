//! Simulation constants and tuning parameters.

/// Nominal host frame rate (Hz) used by the demo game loop.
pub const TICK_RATE: u32 = 60;

// --- Lifespan ---

/// Sentinel lifespan marking a sprite that never expires.
pub const LIFESPAN_IMMORTAL: f32 = -1.0;

// --- Emitter defaults ---

/// Default emission rate (sprites/sec).
pub const DEFAULT_RATE: f32 = 3.0;

/// Default sprite lifespan (milliseconds).
pub const DEFAULT_LIFESPAN_MS: f32 = 3000.0;

/// Default spawn velocity (units/sec, +Y is down-screen).
pub const DEFAULT_VELOCITY: [f32; 3] = [0.0, 200.0, 0.0];

/// Emitter bounding box side (units).
pub const EMITTER_SIZE: f32 = 50.0;

/// Magnitude of the acceleration given to each spawned sprite, along the
/// spawn direction (units/sec², fed into velocity per frame in charge mode).
pub const SPAWN_ACCEL: f32 = 5.0;

/// Minimum emission rate the engine accepts. The spawn gate divides by the
/// rate, so it must stay strictly positive.
pub const MIN_RATE: f32 = 0.1;

// --- Sprite defaults ---

/// Default sprite bounding box (units), used when no image is attached.
pub const SPRITE_WIDTH: f32 = 10.0;
pub const SPRITE_HEIGHT: f32 = 100.0;

// --- Charge mode ---

/// Age at which a charge-mode sprite begins its stall (ms).
pub const CHARGE_STALL_START_MS: f64 = 350.0;

/// Age at which the stall ends (ms).
pub const CHARGE_STALL_END_MS: f64 = 1500.0;

/// Age past which acceleration feeds into velocity every frame (ms).
pub const CHARGE_BOOST_START_MS: f64 = 2000.0;

// --- Turret steering ---

/// Position step per frame while a move key is held (units).
pub const TURRET_MOVE_STEP: f32 = 5.0;

/// Rotation step per frame while a rotate key is held (degrees).
pub const TURRET_ROTATE_STEP: f32 = 2.0;

/// Turret tuning defaults: rate, lifespan, velocity (aims up-screen).
pub const TURRET_RATE: f32 = 2.0;
pub const TURRET_LIFESPAN_MS: f32 = 5000.0;
pub const TURRET_VELOCITY: [f32; 3] = [0.0, -700.0, 0.0];

// --- Invader spawner ---

pub const INVADER_RATE: f32 = 1.0;
pub const INVADER_LIFESPAN_MS: f32 = 7000.0;

/// Vertical position of the invader spawner, above the top edge (units).
pub const INVADER_SPAWN_OFFSET: f32 = -50.0;

// --- Scoring ---

/// Points awarded per invader destroyed.
pub const SCORE_PER_IMPACT: u32 = 100;

// --- Viewport ---

pub const DEFAULT_VIEWPORT_WIDTH: f32 = 1024.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 768.0;
