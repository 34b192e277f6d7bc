// SPDX-License-Identifier: MPL-2.0
//! Staged index changes.
//!
//! Navigation updates the logical index at once, but the displayed artwork
//! only follows after a short pause (longer when the detail overlay has to
//! fade out first). Each scheduled change carries a sequence number; only the
//! most recent one may complete, so a timer that fires after the user moved
//! on can never roll the display back.

use crate::domain::gallery::TransitionDelay;

/// A display change waiting for its timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTransition {
    pub seq: u64,
    pub target: usize,
    pub delay: TransitionDelay,
}

/// Issues and settles pending display changes.
#[derive(Debug, Clone, Default)]
pub struct TransitionScheduler {
    next_seq: u64,
    pending: Option<PendingTransition>,
}

impl TransitionScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a change to `target`, superseding any pending one.
    pub fn schedule(&mut self, target: usize, delay: TransitionDelay) -> PendingTransition {
        self.next_seq = self.next_seq.wrapping_add(1);
        let transition = PendingTransition {
            seq: self.next_seq,
            target,
            delay,
        };
        self.pending = Some(transition);
        transition
    }

    /// Settles the transition whose timer fired.
    ///
    /// Returns the target index, or `None` if `seq` was superseded.
    pub fn complete(&mut self, seq: u64) -> Option<usize> {
        match self.pending {
            Some(pending) if pending.seq == seq => {
                self.pending = None;
                Some(pending.target)
            }
            _ => None,
        }
    }

    /// Drops the pending transition, if any.
    pub fn cancel(&mut self) -> Option<PendingTransition> {
        self.pending.take()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn pending(&self) -> Option<PendingTransition> {
        self.pending
    }
}
