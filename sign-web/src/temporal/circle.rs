//! Circular index-finger motion
//!
//! Counts direction flips of the index fingertip on each axis. Enough flips
//! inside one window count as a circle. No closed-loop geometry is checked,
//! so vigorous back-and-forth motion also qualifies.

use crate::hand::landmarks::INDEX_TIP;
use crate::hand::HandLandmarks;
use nalgebra::Vector2;

/// Per-hand circle tracker
#[derive(Clone, Debug, Default)]
pub struct CircleTracker {
    prev: Option<Vector2<f32>>,
    /// Last nonzero movement sign per axis (-1, 0, +1)
    dir: (i8, i8),
    changes: u32,
    window_start: f64,
}

fn sign(v: f32) -> i8 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

impl CircleTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame; returns true when a circle completes
    pub fn update(
        &mut self,
        hand: &HandLandmarks,
        now_ms: f64,
        timeout_ms: f64,
        min_changes: u32,
    ) -> bool {
        let tip = Vector2::new(hand[INDEX_TIP].x, hand[INDEX_TIP].y);

        let prev = match self.prev {
            Some(p) => p,
            None => {
                self.prev = Some(tip);
                self.window_start = now_ms;
                return false;
            }
        };

        if now_ms - self.window_start > timeout_ms {
            self.changes = 0;
            self.window_start = now_ms;
        }

        let delta = tip - prev;
        let new_dir = (sign(delta.x), sign(delta.y));

        if new_dir.0 != 0 && new_dir.0 != self.dir.0 {
            self.changes += 1;
            self.dir.0 = new_dir.0;
        }
        if new_dir.1 != 0 && new_dir.1 != self.dir.1 {
            self.changes += 1;
            self.dir.1 = new_dir.1;
        }

        self.prev = Some(tip);

        if self.changes >= min_changes {
            log::debug!("Circle completed after {} direction changes", self.changes);
            self.changes = 0;
            self.window_start = now_ms;
            return true;
        }

        false
    }

    /// Direction changes counted in the current window
    pub fn changes(&self) -> u32 {
        self.changes
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Both hands completed a circle on the same frame. Both trackers are
/// always advanced.
pub fn mirrored_circle(
    left: &mut CircleTracker,
    right: &mut CircleTracker,
    left_hand: &HandLandmarks,
    right_hand: &HandLandmarks,
    now_ms: f64,
    timeout_ms: f64,
    min_changes: u32,
) -> bool {
    let left_circle = left.update(left_hand, now_ms, timeout_ms, min_changes);
    let right_circle = right.update(right_hand, now_ms, timeout_ms, min_changes);
    left_circle && right_circle
}
