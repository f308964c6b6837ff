//! Fundamental simulation types.

use serde::{Deserialize, Serialize};

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of ticks advanced this episode.
    pub tick: u64,
    /// Elapsed simulated time in seconds (real dt scaled by the speed multiplier).
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `sim_dt` simulated seconds.
    pub fn advance(&mut self, sim_dt: f64) {
        self.tick += 1;
        self.elapsed_secs += sim_dt;
    }
}

/// Opaque per-entity display tag. The engine carries it but never reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisplayTag(pub u32);

/// Axis-aligned arena bounds, `[0, width] x [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Inclusive containment: points on an edge are still inside.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }

    pub fn center(&self) -> glam::DVec2 {
        glam::DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Length of the arena diagonal.
    pub fn diagonal(&self) -> f64 {
        self.width.hypot(self.height)
    }
}
