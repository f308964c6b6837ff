//! Simulation configuration and the per-entity constants derived from it.
//!
//! `SimConfig` is what a user edits (JSON, every field optional).
//! `EntitySpecs` is what the engine consumes: radii, speeds and intervals
//! scaled to the arena width and converted to real time.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::enums::{ArenaEdge, ControlMode};
use crate::types::Bounds;

/// Errors raised while loading or validating a `SimConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Arena dimensions in world units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_ARENA_SIZE,
            height: DEFAULT_ARENA_SIZE,
        }
    }
}

/// Game score bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub initial: f64,
    pub goal: f64,
    pub miss: f64,
    /// Applied continuously, per simulated minute.
    pub living_penalty_per_minute: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            initial: SCORE_INITIAL,
            goal: SCORE_GOAL,
            miss: SCORE_MISS,
            living_penalty_per_minute: SCORE_LIVING_PENALTY_PER_MINUTE,
        }
    }
}

/// Reward signal handed to the agent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardConfig {
    pub goal: f64,
    pub miss: f64,
    pub terminal: f64,
    pub magnet: f64,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            goal: REWARD_GOAL,
            miss: REWARD_MISS,
            terminal: REWARD_TERMINAL,
            magnet: REWARD_MAGNET,
        }
    }
}

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and dt sequence = same run.
    pub seed: u64,
    /// Simulated seconds per real second.
    pub speed_multiplier: f64,
    pub arena: ArenaConfig,
    /// Target capacity. Fixes the state vector and action space sizes.
    pub target_count: usize,
    pub obstacle_count: usize,
    /// Simulated seconds before the episode times out.
    pub max_episode_secs: f64,
    pub goal_edge: ArenaEdge,
    /// Start a fresh episode on the tick after a terminal one.
    pub auto_reset: bool,
    pub control: ControlMode,
    pub scoring: ScoringConfig,
    pub rewards: RewardConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            speed_multiplier: DEFAULT_SPEED_MULTIPLIER,
            arena: ArenaConfig::default(),
            target_count: DEFAULT_TARGET_COUNT,
            obstacle_count: DEFAULT_OBSTACLE_COUNT,
            max_episode_secs: DEFAULT_MAX_EPISODE_SECS,
            goal_edge: ArenaEdge::default(),
            auto_reset: false,
            control: ControlMode::default(),
            scoring: ScoringConfig::default(),
            rewards: RewardConfig::default(),
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            self.speed_multiplier,
            self.arena.width,
            self.arena.height,
            self.max_episode_secs,
            self.scoring.initial,
            self.scoring.goal,
            self.scoring.miss,
            self.scoring.living_penalty_per_minute,
            self.rewards.goal,
            self.rewards.miss,
            self.rewards.terminal,
            self.rewards.magnet,
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::Invalid("all numeric fields must be finite".into()));
        }
        if self.arena.width <= 0.0 || self.arena.height <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "arena must have positive size, got {}x{}",
                self.arena.width, self.arena.height
            )));
        }
        if self.speed_multiplier <= 0.0 {
            return Err(ConfigError::Invalid("speed_multiplier must be positive".into()));
        }
        if self.max_episode_secs <= 0.0 {
            return Err(ConfigError::Invalid("max_episode_secs must be positive".into()));
        }
        if self.target_count == 0 {
            return Err(ConfigError::Invalid("target_count must be at least 1".into()));
        }
        Ok(())
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.arena.width, self.arena.height)
    }

    /// Length of the RL state vector: `2 + 4 * (targets + obstacles)`.
    pub fn state_size(&self) -> usize {
        2 + 4 * (self.target_count + self.obstacle_count)
    }

    /// Number of discrete actions: no-op, magnet, one pursue per target slot.
    pub fn action_count(&self) -> usize {
        2 + self.target_count
    }
}

/// Interceptor constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterceptorSpec {
    pub radius: f64,
    pub speed: f64,
}

/// Target constants. Times are real seconds, rates per real second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetSpec {
    pub radius: f64,
    pub speed: f64,
    pub ring_radius: f64,
    pub angular_speed: f64,
    pub flip_interval: f64,
    pub wiggle_interval: f64,
    pub wiggle_magnitude: f64,
    pub magnet_rotation: f64,
}

/// Obstacle constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleSpec {
    pub radius: f64,
    pub speed: f64,
    pub orbit_radius: f64,
    /// Drain rate of the shadow rotation.
    pub angular_speed: f64,
}

impl ObstacleSpec {
    /// Orbital angular rate (rad per real second).
    pub fn orbit_rate(&self) -> f64 {
        self.speed / self.orbit_radius
    }

    /// Real seconds for one undisturbed orbit.
    pub fn orbit_period(&self) -> f64 {
        std::f64::consts::TAU * self.orbit_radius / self.speed
    }
}

/// Per-type constants derived from arena scale and the speed multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntitySpecs {
    pub interceptor: InterceptorSpec,
    pub target: TargetSpec,
    pub obstacle: ObstacleSpec,
    /// Magnet eligibility distance: `|interceptor radius - target radius|`.
    ///
    /// A target is eligible when its center is within this distance of the
    /// interceptor's (inclusive). The range shrinks as the two radii converge.
    pub magnet_range: f64,
}

impl EntitySpecs {
    pub fn derive(config: &SimConfig) -> Self {
        let w = config.arena.width;
        let m = config.speed_multiplier;

        let interceptor = InterceptorSpec {
            radius: INTERCEPTOR_RADIUS_RATIO * w,
            speed: INTERCEPTOR_SPEED_RATIO * w * m,
        };

        let target = TargetSpec {
            radius: TARGET_RADIUS_RATIO * w,
            speed: TARGET_SPEED_RATIO * w * m,
            ring_radius: TARGET_RING_RATIO * w,
            angular_speed: TARGET_ANGULAR_SPEED * m,
            flip_interval: TARGET_FLIP_INTERVAL_SECS / m,
            wiggle_interval: TARGET_WIGGLE_INTERVAL_SECS / m,
            wiggle_magnitude: TARGET_WIGGLE_MAGNITUDE,
            magnet_rotation: MAGNET_ROTATION,
        };

        let obstacle = ObstacleSpec {
            radius: OBSTACLE_RADIUS_FACTOR * target.radius,
            speed: target.speed,
            orbit_radius: OBSTACLE_ORBIT_RATIO * w,
            angular_speed: OBSTACLE_ANGULAR_SPEED * m,
        };

        Self {
            interceptor,
            target,
            obstacle,
            magnet_range: (interceptor.radius - target.radius).abs(),
        }
    }
}
