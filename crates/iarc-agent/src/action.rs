//! Discrete action space.
//!
//! Index 0 is a no-op, 1 is a magnet activation and `2 + k` moves the
//! interceptor toward target slot `k` for one tick.

/// A decoded action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Noop,
    Magnet,
    /// Move toward the target in this slot.
    Pursue(usize),
}

impl Action {
    /// Decode an agent response. Missing or out-of-range indices are no-ops.
    pub fn decode(index: Option<usize>, target_capacity: usize) -> Action {
        match index {
            Some(0) | None => Action::Noop,
            Some(1) => Action::Magnet,
            Some(i) if i - 2 < target_capacity => Action::Pursue(i - 2),
            Some(_) => Action::Noop,
        }
    }

    /// Inverse of `decode` for valid actions.
    pub fn index(self) -> usize {
        match self {
            Action::Noop => 0,
            Action::Magnet => 1,
            Action::Pursue(slot) => slot + 2,
        }
    }
}

/// Size of the action space for a given target capacity.
pub fn action_count(target_capacity: usize) -> usize {
    2 + target_capacity
}
