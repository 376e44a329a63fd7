//! Up-then-down thumb movement
//!
//! The first observation records a baseline height. The thumb tip must then
//! rise above the baseline and drop back below it before the timeout.

use crate::hand::landmarks::THUMB_TIP;
use crate::hand::HandLandmarks;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Inactive,
    /// Waiting for the thumb to rise
    Rising,
    /// Rose, waiting for it to fall back
    Falling,
}

/// Per-hand rise-fall state
#[derive(Clone, Debug)]
pub struct RiseFallTracker {
    phase: Phase,
    baseline_y: f32,
    started_at: f64,
}

impl Default for RiseFallTracker {
    fn default() -> Self {
        Self {
            phase: Phase::Inactive,
            baseline_y: 0.0,
            started_at: 0.0,
        }
    }
}

impl RiseFallTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame; returns true exactly once per completed gesture
    pub fn update(
        &mut self,
        hand: &HandLandmarks,
        now_ms: f64,
        margin: f32,
        timeout_ms: f64,
    ) -> bool {
        if self.phase != Phase::Inactive && now_ms - self.started_at > timeout_ms {
            self.phase = Phase::Inactive;
            return false;
        }

        let y = hand[THUMB_TIP].y;

        match self.phase {
            Phase::Inactive => {
                self.baseline_y = y;
                self.started_at = now_ms;
                self.phase = Phase::Rising;
                false
            }
            Phase::Rising => {
                if y < self.baseline_y - margin {
                    self.phase = Phase::Falling;
                }
                false
            }
            Phase::Falling => {
                if y > self.baseline_y + margin {
                    log::debug!("Thumb rise-fall completed");
                    self.phase = Phase::Inactive;
                    true
                } else {
                    false
                }
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase != Phase::Inactive
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
