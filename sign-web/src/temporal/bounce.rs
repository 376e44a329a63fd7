//! Two-hand synchronized bounce ("Langsamer")
//!
//! Both wrists rise above their own baselines, then both drop below them,
//! within the timeout.

use crate::hand::landmarks::WRIST;
use crate::hand::HandLandmarks;

/// Two-hand bounce state
#[derive(Clone, Debug, Default)]
pub struct BounceTracker {
    active: bool,
    went_up: bool,
    baseline: (f32, f32),
    started_at: f64,
}

impl BounceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one two-hand frame; returns true exactly once per bounce
    pub fn update(
        &mut self,
        left: &HandLandmarks,
        right: &HandLandmarks,
        now_ms: f64,
        margin: f32,
        timeout_ms: f64,
    ) -> bool {
        if self.active && now_ms - self.started_at > timeout_ms {
            self.active = false;
            return false;
        }

        let (left_y, right_y) = (left[WRIST].y, right[WRIST].y);

        if !self.active {
            self.active = true;
            self.went_up = false;
            self.baseline = (left_y, right_y);
            self.started_at = now_ms;
            return false;
        }

        if !self.went_up {
            if left_y < self.baseline.0 - margin && right_y < self.baseline.1 - margin {
                self.went_up = true;
            }
            return false;
        }

        if left_y > self.baseline.0 + margin && right_y > self.baseline.1 + margin {
            log::debug!("Two-hand bounce completed");
            self.active = false;
            return true;
        }

        false
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
