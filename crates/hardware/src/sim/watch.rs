//! Idle detection.
//!
//! The ISA has no halt instruction; programs end by spinning, usually on a
//! self-targeting `beq`. [`IdleDetector`] recognizes that from the outside:
//! once the PC comes back to an address seen since the last state-changing
//! write, nothing further can happen.

use std::collections::HashSet;

/// Tracks PCs visited since the last write that changed a value.
#[derive(Clone, Debug, Default)]
pub struct IdleDetector {
    seen: HashSet<u32>,
}

impl IdleDetector {
    /// Creates a detector with an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the PC reached after a step.
    ///
    /// # Arguments
    ///
    /// * `pc` - The PC after the step.
    /// * `changed` - Whether the step changed a register or memory value.
    ///
    /// # Returns
    ///
    /// True if `pc` was already visited since the last changing step.
    pub fn observe(&mut self, pc: u32, changed: bool) -> bool {
        if self.seen.contains(&pc) {
            return true;
        }
        if changed {
            self.seen.clear();
        } else {
            let _ = self.seen.insert(pc);
        }
        false
    }

    /// Forgets the visit history.
    pub fn clear(&mut self) {
        self.seen.clear();
    }
}
