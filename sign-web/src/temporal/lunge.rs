//! Forward wrist lunge (hand pushed toward the camera)

use crate::hand::landmarks::WRIST;
use crate::hand::HandLandmarks;

/// Per-hand depth lunge state
#[derive(Clone, Debug, Default)]
pub struct LungeTracker {
    active: bool,
    baseline_z: f32,
    started_at: f64,
}

impl LungeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame; true once the wrist depth dropped by `min_depth`
    /// below the baseline within the timeout
    pub fn update(
        &mut self,
        hand: &HandLandmarks,
        now_ms: f64,
        min_depth: f32,
        timeout_ms: f64,
    ) -> bool {
        if self.active && now_ms - self.started_at > timeout_ms {
            self.active = false;
            return false;
        }

        let z = hand[WRIST].z;

        if !self.active {
            self.active = true;
            self.baseline_z = z;
            self.started_at = now_ms;
            return false;
        }

        if z < self.baseline_z - min_depth {
            log::debug!("Lunge completed: z {:.3} -> {:.3}", self.baseline_z, z);
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
