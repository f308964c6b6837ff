//! Simulation constants and tuning parameters.
//!
//! Ratios are relative to the arena width so the whole game scales with
//! the arena. Speeds and intervals are expressed in simulated units and
//! converted to real time by `EntitySpecs::derive`.

use std::f64::consts::PI;

/// Fixed step used by the target-target separation nudge (seconds).
pub const COLLISION_NUDGE_DT: f64 = 1.0 / 60.0;

/// Extra distance pushed past contact when a target hits an obstacle.
pub const OBSTACLE_SEPARATION_MARGIN: f64 = 2.0;

/// Obstacle shadow rotation added per target deflection (radians).
pub const OBSTACLE_SHADOW_PER_DEFLECTION: f64 = 1.1 * PI;

/// Rotation queued by a flip (radians).
pub const FLIP_ANGLE: f64 = PI;

// --- Defaults ---

pub const DEFAULT_ARENA_SIZE: f64 = 500.0;

pub const DEFAULT_SPEED_MULTIPLIER: f64 = 2.3;

pub const DEFAULT_TARGET_COUNT: usize = 10;

pub const DEFAULT_OBSTACLE_COUNT: usize = 4;

/// Ten simulated minutes.
pub const DEFAULT_MAX_EPISODE_SECS: f64 = 600.0;

pub const DEFAULT_SEED: u64 = 42;

// --- Interceptor ---

pub const INTERCEPTOR_RADIUS_RATIO: f64 = 0.0255;

pub const INTERCEPTOR_SPEED_RATIO: f64 = 0.15;

// --- Targets ---

pub const TARGET_RADIUS_RATIO: f64 = 0.0085;

pub const TARGET_SPEED_RATIO: f64 = 0.0165;

/// Radius of the ring targets start on.
pub const TARGET_RING_RATIO: f64 = 0.05;

/// Turning rate while working off a queued rotation (rad per simulated second).
pub const TARGET_ANGULAR_SPEED: f64 = 1.38;

/// A target queues a flip every 20 simulated seconds.
pub const TARGET_FLIP_INTERVAL_SECS: f64 = 20.0;

/// A target wiggles its heading every 5 simulated seconds.
pub const TARGET_WIGGLE_INTERVAL_SECS: f64 = 5.0;

/// Full width of the wiggle perturbation (40 degrees).
pub const TARGET_WIGGLE_MAGNITUDE: f64 = 40.0 * PI / 180.0;

/// Rotation queued on a target by a magnet activation (45 degrees).
pub const MAGNET_ROTATION: f64 = 45.0 * PI / 180.0;

/// Slack on the magnet range check so a target sitting exactly on the
/// range is not rejected by rounding in the radius ratios.
pub const MAGNET_RANGE_TOLERANCE: f64 = 1e-9;

// --- Obstacles ---

/// Obstacle radius as a multiple of the target radius.
pub const OBSTACLE_RADIUS_FACTOR: f64 = 1.5;

pub const OBSTACLE_ORBIT_RATIO: f64 = 0.25;

/// Rate the shadow rotation drains at (rad per simulated second).
pub const OBSTACLE_ANGULAR_SPEED: f64 = 1.38;

// --- Scoring ---

pub const SCORE_INITIAL: f64 = 12_000.0;

pub const SCORE_GOAL: f64 = 2_000.0;

pub const SCORE_MISS: f64 = -1_000.0;

pub const SCORE_LIVING_PENALTY_PER_MINUTE: f64 = -100.0;

// --- RL rewards ---

pub const REWARD_GOAL: f64 = 10.0;

pub const REWARD_MISS: f64 = -10.0;

/// Delivered instead of the tick reward when the episode fails.
pub const REWARD_TERMINAL: f64 = -10.0;

pub const REWARD_MAGNET: f64 = 1.0;
