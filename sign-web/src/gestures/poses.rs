//! Static hand poses
//!
//! Single-frame geometric checks on one hand's landmarks. Image y grows
//! downward, so "above" means smaller y. Mirrored checks take the hand's
//! handedness.

use crate::config::GestureConfig;
use crate::hand::landmarks::*;
use crate::hand::{HandLandmarks, Handedness};

/// Tips of the four non-thumb fingers paired with their DIP joints
const TIP_OVER_DIP: [(usize, usize); 4] = [
    (INDEX_TIP, INDEX_DIP),
    (MIDDLE_TIP, MIDDLE_DIP),
    (RING_TIP, RING_DIP),
    (PINKY_TIP, PINKY_DIP),
];

/// Fingertip pairs that must touch for a closed hand
const CLOSED_PAIRS: [(usize, usize); 4] = [
    (THUMB_TIP, INDEX_TIP),
    (INDEX_TIP, MIDDLE_TIP),
    (MIDDLE_TIP, RING_TIP),
    (MIDDLE_TIP, PINKY_TIP),
];

/// Tip is lower on screen than the joint
fn below(hand: &HandLandmarks, tip: usize, joint: usize) -> bool {
    hand[tip].y > hand[joint].y
}

/// |dx| and |dy| both under `tolerance`
fn within(hand: &HandLandmarks, a: usize, b: usize, tolerance: f32) -> bool {
    (hand[a].x - hand[b].x).abs() < tolerance && (hand[a].y - hand[b].y).abs() < tolerance
}

/// Middle, ring and pinky tips below their PIP joints
fn lower_three_curled(hand: &HandLandmarks) -> bool {
    below(hand, MIDDLE_TIP, MIDDLE_PIP)
        && below(hand, RING_TIP, RING_PIP)
        && below(hand, PINKY_TIP, PINKY_PIP)
}

/// Index tip closer to the camera than its PIP and DIP joints
fn index_toward_camera(hand: &HandLandmarks) -> bool {
    hand[INDEX_TIP].z < hand[INDEX_PIP].z && hand[INDEX_TIP].z < hand[INDEX_DIP].z
}

/// All four fingers extended upward
pub fn is_hand_open(hand: &HandLandmarks) -> bool {
    TIP_OVER_DIP.iter().all(|&(tip, dip)| hand[tip].y < hand[dip].y)
}

/// Thumb, index, middle, ring and pinky tips bunched together
pub fn is_hand_closed(hand: &HandLandmarks, config: &GestureConfig) -> bool {
    CLOSED_PAIRS
        .iter()
        .all(|&(a, b)| within(hand, a, b, config.closed_tolerance))
}

/// "Wie geht's": thumb and index tips pinched, middle finger raised above
/// the pinch and the wrist, index and middle tips clearly apart
pub fn is_how_are_you(hand: &HandLandmarks, config: &GestureConfig) -> bool {
    let thumb = hand[THUMB_TIP];
    let index = hand[INDEX_TIP];
    let middle = hand[MIDDLE_TIP];
    let wrist = hand[WRIST];

    let pinched = within(hand, THUMB_TIP, INDEX_TIP, config.pinch_tolerance);
    let middle_up = middle.y < thumb.y && middle.y < index.y && middle.y < wrist.y;
    let spread = (index.x - middle.x).abs() > config.pinch_min_spread
        && (index.y - middle.y).abs() > config.pinch_min_spread;

    pinched && middle_up && spread
}

/// "Ich": index finger up, others curled, thumb tucked toward the palm
pub fn is_self_pose(hand: &HandLandmarks) -> bool {
    let index_up = hand[INDEX_TIP].y < hand[INDEX_PIP].y && hand[INDEX_TIP].y < hand[INDEX_DIP].y;
    let thumb_tucked = hand[THUMB_TIP].x < hand[RING_MCP].x;

    index_up && lower_three_curled(hand) && thumb_tucked
}

/// "Nicht": index pointing toward the camera above the thumb, others curled
pub fn is_not_pose(hand: &HandLandmarks) -> bool {
    let thumb_out = hand[THUMB_TIP].x > hand[RING_MCP].x;
    let thumb_low = hand[INDEX_TIP].y < hand[THUMB_TIP].y;

    index_toward_camera(hand) && lower_three_curled(hand) && thumb_out && thumb_low
}

/// "Du": the pointing pose of [`is_not_pose`] with the index tip
/// foreshortened onto its knuckle (finger aimed straight at the camera)
pub fn is_you_pose(hand: &HandLandmarks, config: &GestureConfig) -> bool {
    is_not_pose(hand) && within(hand, INDEX_MCP, INDEX_TIP, config.you_tolerance)
}

/// "Gut": thumb up above the pinky tip and its own IP joint, fingers folded
/// sideways (every PIP past its MCP in x)
pub fn is_thumbs_up(hand: &HandLandmarks) -> bool {
    let thumb = hand[THUMB_TIP];
    let thumb_up = thumb.y < hand[PINKY_TIP].y && thumb.y < hand[THUMB_IP].y;
    let thumb_inside = thumb.x < hand[INDEX_PIP].x;
    let fingers_folded = hand[INDEX_PIP].x > hand[INDEX_MCP].x
        && hand[MIDDLE_PIP].x > hand[MIDDLE_MCP].x
        && hand[RING_PIP].x > hand[RING_MCP].x
        && hand[PINKY_PIP].x > hand[PINKY_MCP].x;

    thumb_up && thumb_inside && fingers_folded
}

/// "Schlecht": fist with the thumb sticking out past the index knuckle.
/// The outward side depends on the hand.
pub fn is_bad_pose(hand: &HandLandmarks, side: Handedness, config: &GestureConfig) -> bool {
    let fingers_down = below(hand, INDEX_TIP, INDEX_PIP) && lower_three_curled(hand);

    let offset = hand[THUMB_TIP].x - hand[INDEX_MCP].x;
    let thumb_out = match side {
        Handedness::Left => offset > config.bad_thumb_margin,
        Handedness::Right => -offset > config.bad_thumb_margin,
    };

    fingers_down && thumb_out
}
