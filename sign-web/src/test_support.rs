//! Synthetic hands for unit tests
//!
//! Layouts are drawn for a hand facing the camera with the wrist near the
//! bottom of the frame (y grows downward). Each pose is built so that only
//! the classifier it is named after fires.

use crate::hand::landmarks::*;
use crate::hand::HandLandmarks;

type Layout = [(f32, f32, f32); LANDMARK_COUNT];

const OPEN: Layout = [
    (0.50, 0.80, 0.0), // wrist
    (0.45, 0.75, 0.0),
    (0.42, 0.70, 0.0),
    (0.40, 0.66, 0.0),
    (0.38, 0.62, 0.0), // thumb tip
    (0.46, 0.60, 0.0),
    (0.46, 0.52, 0.0),
    (0.46, 0.47, 0.0),
    (0.46, 0.43, 0.0), // index tip
    (0.50, 0.60, 0.0),
    (0.50, 0.52, 0.0),
    (0.50, 0.47, 0.0),
    (0.50, 0.42, 0.0), // middle tip
    (0.54, 0.61, 0.0),
    (0.54, 0.54, 0.0),
    (0.54, 0.49, 0.0),
    (0.54, 0.45, 0.0), // ring tip
    (0.58, 0.63, 0.0),
    (0.58, 0.57, 0.0),
    (0.58, 0.53, 0.0),
    (0.58, 0.50, 0.0), // pinky tip
];

/// Fingers pointing sideways, curled, thumb straight up
const THUMBS_UP: Layout = [
    (0.40, 0.60, 0.0),
    (0.42, 0.50, 0.0),
    (0.43, 0.42, 0.0),
    (0.44, 0.36, 0.0),
    (0.44, 0.30, 0.0),
    (0.45, 0.45, 0.0),
    (0.50, 0.45, 0.0),
    (0.48, 0.47, 0.0),
    (0.46, 0.47, 0.0),
    (0.45, 0.50, 0.0),
    (0.50, 0.50, 0.0),
    (0.48, 0.52, 0.0),
    (0.46, 0.52, 0.0),
    (0.45, 0.55, 0.0),
    (0.50, 0.55, 0.0),
    (0.48, 0.57, 0.0),
    (0.46, 0.57, 0.0),
    (0.45, 0.60, 0.0),
    (0.50, 0.60, 0.0),
    (0.48, 0.62, 0.0),
    (0.46, 0.62, 0.0),
];

fn build(layout: &Layout) -> HandLandmarks {
    let mut points = [HandLandmark::default(); LANDMARK_COUNT];
    for (point, &(x, y, z)) in points.iter_mut().zip(layout.iter()) {
        *point = HandLandmark::new(x, y, z);
    }
    HandLandmarks::new(points)
}

fn with(layout: &Layout, overrides: &[(usize, (f32, f32, f32))]) -> HandLandmarks {
    let mut layout = *layout;
    for &(index, point) in overrides {
        layout[index] = point;
    }
    build(&layout)
}

/// Shift every landmark by (dx, dy)
pub fn translated(hand: &HandLandmarks, dx: f32, dy: f32) -> HandLandmarks {
    let mut points = *hand.points();
    for p in points.iter_mut() {
        p.x += dx;
        p.y += dy;
    }
    HandLandmarks::new(points)
}

/// Shift only the wrist depth
pub fn with_wrist_z(hand: &HandLandmarks, z: f32) -> HandLandmarks {
    let mut points = *hand.points();
    points[WRIST].z = z;
    HandLandmarks::new(points)
}

/// Open hand with its wrist at (x, y)
pub fn hand_at(x: f32, y: f32) -> HandLandmarks {
    translated(&open_hand(), x - OPEN[WRIST].0, y - OPEN[WRIST].1)
}

pub fn open_hand() -> HandLandmarks {
    build(&OPEN)
}

/// All fingertips bunched together in front of the palm
pub fn fist() -> HandLandmarks {
    with(
        &OPEN,
        &[
            (THUMB_TIP, (0.48, 0.62, 0.0)),
            (INDEX_TIP, (0.49, 0.63, 0.0)),
            (MIDDLE_TIP, (0.50, 0.62, 0.0)),
            (RING_TIP, (0.51, 0.63, 0.0)),
            (PINKY_TIP, (0.52, 0.64, 0.0)),
        ],
    )
}

/// Index finger up, others curled, thumb tucked across the palm
pub fn self_pose() -> HandLandmarks {
    with(
        &OPEN,
        &[
            (THUMB_TIP, (0.44, 0.62, 0.0)),
            (MIDDLE_TIP, (0.50, 0.58, 0.0)),
            (RING_TIP, (0.54, 0.59, 0.0)),
            (PINKY_TIP, (0.58, 0.61, 0.0)),
        ],
    )
}

/// Index finger pointing at the camera, tip close to its knuckle
pub fn you_pose() -> HandLandmarks {
    with(
        &OPEN,
        &[
            (THUMB_TIP, (0.56, 0.62, 0.0)),
            (INDEX_PIP, (0.46, 0.58, -0.02)),
            (INDEX_DIP, (0.465, 0.57, -0.05)),
            (INDEX_TIP, (0.47, 0.56, -0.08)),
            (MIDDLE_TIP, (0.50, 0.58, 0.0)),
            (RING_TIP, (0.54, 0.59, 0.0)),
            (PINKY_TIP, (0.58, 0.61, 0.0)),
        ],
    )
}

/// Index finger raised and tilted toward the camera
pub fn not_pose() -> HandLandmarks {
    with(
        &OPEN,
        &[
            (THUMB_TIP, (0.56, 0.62, 0.0)),
            (INDEX_PIP, (0.46, 0.52, -0.02)),
            (INDEX_DIP, (0.46, 0.48, -0.04)),
            (INDEX_TIP, (0.46, 0.44, -0.06)),
            (MIDDLE_TIP, (0.50, 0.58, 0.0)),
            (RING_TIP, (0.54, 0.59, 0.0)),
            (PINKY_TIP, (0.58, 0.61, 0.0)),
        ],
    )
}

/// Thumb and index tips touching, middle finger raised
pub fn how_are_you_pose() -> HandLandmarks {
    with(
        &OPEN,
        &[
            (THUMB_TIP, (0.45, 0.55, 0.0)),
            (INDEX_TIP, (0.455, 0.555, 0.0)),
        ],
    )
}

pub fn thumbs_up() -> HandLandmarks {
    build(&THUMBS_UP)
}

/// Fist with the thumb sticking out sideways. A right hand sticks it out
/// toward smaller x, a left hand toward larger x.
pub fn bad_pose_right() -> HandLandmarks {
    let mut points = *fist().points();
    points[THUMB_TIP] = HandLandmark::new(0.40, 0.62, 0.0);
    HandLandmarks::new(points)
}

pub fn bad_pose_left() -> HandLandmarks {
    let mut points = *fist().points();
    points[THUMB_TIP] = HandLandmark::new(0.56, 0.62, 0.0);
    HandLandmarks::new(points)
}
