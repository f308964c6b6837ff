//! Fixed layout of the RL state vector.
//!
//! `[uav_x, uav_y]` normalized to the arena, then four values per obstacle
//! and then four per target slot: `[x, y, heading_x, heading_y]`. Heading is
//! written as `[0, 0]` while the entity is working off a queued or shadow
//! rotation. A deactivated target slot reads `[0, 0, 0, 0]`.

use glam::DVec2;

/// Values per entity entry.
pub const ENTRY_LEN: usize = 4;

/// One decoded entity entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntryView {
    /// Normalized position.
    pub position: DVec2,
    /// Unit heading, or zero while turning.
    pub heading: DVec2,
}

impl EntryView {
    /// True if the entry is the inactive-slot sentinel.
    pub fn is_sentinel(&self) -> bool {
        self.position == DVec2::ZERO && self.heading == DVec2::ZERO
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservationLayout {
    pub target_capacity: usize,
    pub obstacle_count: usize,
}

impl ObservationLayout {
    pub fn new(target_capacity: usize, obstacle_count: usize) -> Self {
        Self {
            target_capacity,
            obstacle_count,
        }
    }

    pub fn len(&self) -> usize {
        2 + ENTRY_LEN * (self.target_capacity + self.obstacle_count)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn obstacle_offset(&self, index: usize) -> usize {
        2 + ENTRY_LEN * index
    }

    pub fn target_offset(&self, slot: usize) -> usize {
        2 + ENTRY_LEN * (self.obstacle_count + slot)
    }

    /// A zeroed vector of the right length.
    pub fn blank(&self) -> Vec<f64> {
        vec![0.0; self.len()]
    }

    /// Write one entry at `offset`.
    pub fn write_entry(state: &mut [f64], offset: usize, position: DVec2, heading: DVec2) {
        state[offset] = position.x;
        state[offset + 1] = position.y;
        state[offset + 2] = heading.x;
        state[offset + 3] = heading.y;
    }

    /// Normalized interceptor position.
    pub fn interceptor(&self, state: &[f64]) -> Option<DVec2> {
        if state.len() != self.len() {
            return None;
        }
        Some(DVec2::new(state[0], state[1]))
    }

    pub fn target(&self, state: &[f64], slot: usize) -> Option<EntryView> {
        if slot >= self.target_capacity || state.len() != self.len() {
            return None;
        }
        Some(read_entry(state, self.target_offset(slot)))
    }

    pub fn obstacle(&self, state: &[f64], index: usize) -> Option<EntryView> {
        if index >= self.obstacle_count || state.len() != self.len() {
            return None;
        }
        Some(read_entry(state, self.obstacle_offset(index)))
    }
}

fn read_entry(state: &[f64], offset: usize) -> EntryView {
    EntryView {
        position: DVec2::new(state[offset], state[offset + 1]),
        heading: DVec2::new(state[offset + 2], state[offset + 3]),
    }
}
