//! Two-hand clap counting ("Bitte")
//!
//! A clap is the transition from hands apart to wrists closer than the clap
//! distance. Holding the hands together counts once.

use crate::hand::landmarks::WRIST;
use crate::hand::HandLandmarks;

/// Two-hand clap state
#[derive(Clone, Debug, Default)]
pub struct ClapCounter {
    active: bool,
    was_close: bool,
    claps: u32,
    started_at: f64,
}

impl ClapCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one two-hand frame; true once `required` claps happened within
    /// the timeout
    pub fn update(
        &mut self,
        left: &HandLandmarks,
        right: &HandLandmarks,
        now_ms: f64,
        clap_distance: f32,
        required: u32,
        timeout_ms: f64,
    ) -> bool {
        if self.active && now_ms - self.started_at > timeout_ms {
            self.active = false;
            return false;
        }

        let distance = nalgebra::distance(&left[WRIST].planar(), &right[WRIST].planar());
        let close = distance < clap_distance;

        if !self.active {
            self.active = true;
            self.claps = 0;
            self.was_close = close;
            self.started_at = now_ms;
            return false;
        }

        if close && !self.was_close {
            self.claps += 1;
        }
        self.was_close = close;

        if self.claps >= required {
            log::debug!("{} claps completed", self.claps);
            self.active = false;
            return true;
        }

        false
    }

    /// Claps counted in the current attempt
    pub fn claps(&self) -> u32 {
        self.claps
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::hand_at;

    const DISTANCE: f32 = 0.05;
    const TIMEOUT: f64 = 1000.0;

    fn apart() -> (HandLandmarks, HandLandmarks) {
        (hand_at(0.3, 0.7), hand_at(0.7, 0.7))
    }

    fn together() -> (HandLandmarks, HandLandmarks) {
        (hand_at(0.49, 0.7), hand_at(0.51, 0.7))
    }

    fn step(
        counter: &mut ClapCounter,
        hands: (HandLandmarks,
        HandLandmarks),
        t: f64,
        required: u32,
    ) -> bool {
        counter.update(&hands.0, &hands.1, t, DISTANCE, required, TIMEOUT)
    }

    #[test]
    fn test_holding_close_counts_once() {
        let mut counter = ClapCounter::new();
        step(&mut counter, apart(), 0.0, 10);
        for i in 1..=8 {
            step(&mut counter, together(), i as f64 * 30.0, 10);
        }
        assert_eq!(counter.claps(), 1);
    }

    #[test]
    fn test_two_claps_complete() {
        let mut counter = ClapCounter::new();
        let frames = [apart(), together(), together(), apart(), together()];
        let fired: Vec<bool> = frames
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, hands)| step(&mut counter, hands, i as f64 * 100.0, 2))
            .collect();
        assert_eq!(fired, vec![false, false, false, false, true]);
    }

    #[test]
    fn test_starting_close_is_not_a_clap() {
        let mut counter = ClapCounter::new();
        step(&mut counter, together(), 0.0, 2);
        step(&mut counter, together(), 50.0, 2);
        assert_eq!(counter.claps(), 0);
    }

    #[test]
    fn test_slow_claps_time_out() {
        let mut counter = ClapCounter::new();
        step(&mut counter, apart(), 0.0, 2);
        step(&mut counter, together(), 300.0, 2);
        step(&mut counter, apart(), 600.0, 2);
        assert!(!step(&mut counter, together(), 1100.0, 2));
    }
}
