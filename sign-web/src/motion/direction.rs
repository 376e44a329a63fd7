//! Movement tests over a motion history
//!
//! All tests compare the oldest and newest samples of the window (the
//! wave test also looks at the middle sample). Fewer than two samples never
//! counts as movement.

use super::history::{DualSample, MotionHistory, TipSample};

/// Horizontal travel from oldest to newest sample (positive = rightward)
pub fn horizontal_travel(history: &MotionHistory<TipSample>) -> Option<f32> {
    if history.len() < 2 {
        return None;
    }
    let first = history.oldest()?;
    let last = history.newest()?;
    Some(last.x - first.x)
}

/// Fingertip travelled more than `min_dist` toward smaller x
pub fn moved_left(history: &MotionHistory<TipSample>, min_dist: f32) -> bool {
    horizontal_travel(history).map_or(false, |dx| dx < -min_dist)
}

/// Fingertip travelled more than `min_dist` toward larger x
pub fn moved_right(history: &MotionHistory<TipSample>, min_dist: f32) -> bool {
    horizontal_travel(history).map_or(false, |dx| dx > min_dist)
}

/// Back-and-forth movement over a full window
///
/// Both halves (first -> middle, middle -> last) must travel more than
/// `min_dist`, and the direction must flip at the middle sample.
pub fn is_waving(history: &MotionHistory<TipSample>, min_dist: f32) -> bool {
    if !history.is_full() || history.len() < 3 {
        return false;
    }

    let (first, mid, last) = match (
        history.oldest(),
        history.get(history.len() / 2),
        history.newest(),
    ) {
        (Some(a), Some(b), Some(c)) => (a.x, b.x, c.x),
        _ => return false,
    };

    let moved_enough = (mid - first).abs() > min_dist && (last - mid).abs() > min_dist;
    let changed_direction = (first < mid && mid > last) || (first > mid && mid < last);

    moved_enough && changed_direction
}

/// Left hand of the "evening" sign: thumb ends above the index tip, index
/// tip swept down and toward larger x
pub fn swept_down_outward_left(history: &MotionHistory<DualSample>) -> bool {
    swept_down(history, |first, last| last.index_x > first.index_x)
}

/// Right hand of the "evening" sign: mirrored, index tip toward smaller x
pub fn swept_down_outward_right(history: &MotionHistory<DualSample>) -> bool {
    swept_down(history, |first, last| last.index_x < first.index_x)
}

fn swept_down(
    history: &MotionHistory<DualSample>,
    sideways: impl Fn(&DualSample, &DualSample) -> bool,
) -> bool {
    if history.len() < 2 {
        return false;
    }
    let (first, last) = match (history.oldest(), history.newest()) {
        (Some(first), Some(last)) => (first, last),
        _ => return false,
    };

    let thumb_up = last.thumb_y < last.index_y;
    let moved_down = last.index_y > first.index_y;

    thumb_up && moved_down && sideways(first, last)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trace(xs: &[f32], capacity: usize) -> MotionHistory<TipSample> {
        let mut history = MotionHistory::new(capacity);
        for &x in xs {
            history.push(TipSample { x, y: 0.5 });
        }
        history
    }

    fn dual(samples: &[(f32, f32, f32, f32)]) -> MotionHistory<DualSample> {
        let mut history = MotionHistory::new(20);
        for &(thumb_x, thumb_y, index_x, index_y) in samples {
            history.push(DualSample { thumb_x, thumb_y, index_x, index_y });
        }
        history
    }

    #[test]
    fn test_single_sample_is_not_movement() {
        let history = trace(&[0.9], 15);
        assert!(!moved_left(&history, 0.1));
        assert!(!moved_right(&history, 0.1));
        assert_eq!(horizontal_travel(&history), None);
    }

    #[test]
    fn test_moved_right_and_left() {
        let right = trace(&[0.30, 0.35, 0.45], 15);
        assert!(moved_right(&right, 0.1));
        assert!(!moved_left(&right, 0.1));

        let left = trace(&[0.60, 0.55, 0.42], 15);
        assert!(moved_left(&left, 0.1));
        assert!(!moved_right(&left, 0.1));
    }

    #[test]
    fn test_small_drift_is_not_a_move() {
        let history = trace(&[0.50, 0.53, 0.55], 15);
        assert!(!moved_right(&history, 0.1));
        // The "bad" sweep uses a shorter distance
        assert!(!moved_right(&history, 0.07));
        let history = trace(&[0.50, 0.55, 0.58], 15);
        assert!(moved_right(&history, 0.07));
    }

    #[test]
    fn test_waving_needs_full_window() {
        let partial = trace(&[0.3, 0.5, 0.3], 15);
        assert!(!is_waving(&partial, 0.1));
    }

    #[test]
    fn test_waving_back_and_forth() {
        let xs: Vec<f32> = (0..15)
            .map(|i| 0.35 + 0.25 * (1.0 - (i as f32 - 7.0).abs() / 7.0))
            .collect();
        assert!(is_waving(&trace(&xs, 15), 0.1));
    }

    #[test]
    fn test_monotonic_drift_is_not_waving() {
        let xs: Vec<f32> = (0..15).map(|i| 0.2 + 0.04 * i as f32).collect();
        assert!(!is_waving(&trace(&xs, 15), 0.1));
    }

    #[test]
    fn test_evening_sweep_mirrored_by_hand() {
        // Index moves down and toward larger x, thumb above it
        let left = dual(&[(0.40, 0.30, 0.45, 0.40), (0.44, 0.34, 0.50, 0.46)]);
        assert!(swept_down_outward_left(&left));
        assert!(!swept_down_outward_right(&left));

        let right = dual(&[(0.60, 0.30, 0.55, 0.40), (0.56, 0.34, 0.50, 0.46)]);
        assert!(swept_down_outward_right(&right));
        assert!(!swept_down_outward_left(&right));
    }

    #[test]
    fn test_evening_needs_thumb_on_top() {
        let left = dual(&[(0.40, 0.50, 0.45, 0.40), (0.44, 0.56, 0.50, 0.46)]);
        assert!(!swept_down_outward_left(&left));
    }
}
