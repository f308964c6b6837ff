//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// World position (arena units, origin top-left, +y down).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec2);

/// Unit heading. Zero only while the entity is not moving.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Heading(pub DVec2);

/// Physical size and translation speed (arena units per real second).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub radius: f64,
    pub speed: f64,
}

/// Autonomous wander state carried by every target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Wander {
    /// Real seconds since the last periodic flip.
    pub time_since_flip: f64,
    /// Real seconds since the last heading wiggle.
    pub time_since_wiggle: f64,
    /// Angle still to turn before translation resumes, in `[0, 2π)`.
    pub queued_rotation: f64,
}

/// Orbital state of an obstacle around the arena center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orbit {
    /// Current orbital angle (radians from +x).
    pub angle: f64,
    /// Distance from the arena center.
    pub radius: f64,
    /// Pending pause in orbital progress after deflecting a target (radians).
    pub shadow_rotation: f64,
}

/// Fixed index assigned at spawn. Targets keep theirs after others leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot(pub usize);

/// Marks the interceptor (UAV).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Interceptor;

/// Marks a target (Roomba).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Target;

/// Marks an orbiting obstacle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obstacle;
