//! Poses that also need movement
//!
//! A static pose from [`super::poses`] combined with a test over the hand's
//! motion history. Two-hand signs take both hands and both histories.

use crate::config::GestureConfig;
use crate::hand::{HandLandmarks, Handedness};
use crate::motion::{
    is_waving, moved_left, moved_right, swept_down_outward_left, swept_down_outward_right,
    DualSample, MotionHistory, TipSample,
};
use super::poses::{is_bad_pose, is_hand_open, is_how_are_you};

/// "Wie geht's" pinch drawn outward: a left hand moves left, a right hand
/// moves right
pub fn how_are_you_moving(
    hand: &HandLandmarks,
    side: Handedness,
    history: &MotionHistory<TipSample>,
    config: &GestureConfig,
) -> bool {
    if !is_how_are_you(hand, config) {
        return false;
    }
    match side {
        Handedness::Left => moved_left(history, config.move_min_distance),
        Handedness::Right => moved_right(history, config.move_min_distance),
    }
}

/// "Hallo/Tschüss": open hand waving
pub fn hello(
    hand: &HandLandmarks,
    history: &MotionHistory<TipSample>,
    config: &GestureConfig,
) -> bool {
    is_hand_open(hand) && is_waving(history, config.wave_min_distance)
}

/// "Schlecht": bad pose swept toward the body's midline (a left hand moves
/// right, a right hand moves left)
pub fn bad_moving(
    hand: &HandLandmarks,
    side: Handedness,
    history: &MotionHistory<TipSample>,
    config: &GestureConfig,
) -> bool {
    if !is_bad_pose(hand, side, config) {
        return false;
    }
    match side {
        Handedness::Left => moved_right(history, config.bad_move_min_distance),
        Handedness::Right => moved_left(history, config.bad_move_min_distance),
    }
}

/// "Guten": both hands pinch and pull apart
pub fn good_greeting(
    left: &HandLandmarks,
    right: &HandLandmarks,
    left_history: &MotionHistory<TipSample>,
    right_history: &MotionHistory<TipSample>,
    config: &GestureConfig,
) -> bool {
    let left_good =
        is_how_are_you(left, config) && moved_left(left_history, config.move_min_distance);
    let right_good =
        is_how_are_you(right, config) && moved_right(right_history, config.move_min_distance);

    left_good && right_good
}

/// "Abend": both index fingers sweep down and outward with the thumbs on
/// top. Only the thumb+index traces are inspected.
pub fn evening(
    left_history: &MotionHistory<DualSample>,
    right_history: &MotionHistory<DualSample>,
) -> bool {
    swept_down_outward_left(left_history) && swept_down_outward_right(right_history)
}
