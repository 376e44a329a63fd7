//! Hand landmark storage and parsing
//!
//! MediaPipe Hands delivers 21 points per detected hand. JS hands them over
//! as a flat Float32Array (21 × x, y, z); this module turns one hand's slice
//! into a validated, fixed-size landmark set.

use nalgebra::Point2;
use std::fmt;
use std::ops::Index;

// ============================================================================
// HAND LANDMARK INDICES
// ============================================================================

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Points per hand
pub const LANDMARK_COUNT: usize = 21;

/// Floats per hand in the flat JS buffer (x, y, z per point)
pub const FLOATS_PER_HAND: usize = LANDMARK_COUNT * 3;

// ============================================================================
// ERRORS
// ============================================================================

/// Reasons a hand's landmark slice is rejected
#[derive(Debug, Clone, PartialEq)]
pub enum LandmarkError {
    WrongLength { expected: usize, actual: usize },
    NonFinite { index: usize },
}

impl fmt::Display for LandmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LandmarkError::WrongLength { expected, actual } => {
                write!(f, "Invalid landmark data length: {} (expected {})", actual, expected)
            }
            LandmarkError::NonFinite { index } => {
                write!(f, "Landmark {} has a non-finite coordinate", index)
            }
        }
    }
}

impl std::error::Error for LandmarkError {}

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A single hand landmark (x, y normalized to the frame, z relative depth)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HandLandmark {
    pub x: f32,
    pub y: f32,
    /// More negative = closer to the camera
    pub z: f32,
}

impl HandLandmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Position in the image plane (depth dropped)
    pub fn planar(&self) -> Point2<f32> {
        Point2::new(self.x, self.y)
    }
}

/// The 21 landmarks of one detected hand. Immutable once parsed.
#[derive(Clone, Debug, PartialEq)]
pub struct HandLandmarks {
    points: [HandLandmark; LANDMARK_COUNT],
}

impl HandLandmarks {
    pub fn new(points: [HandLandmark; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Parse one hand from 63 floats (x, y, z per landmark)
    pub fn from_flat(data: &[f32]) -> Result<Self, LandmarkError> {
        if data.len() != FLOATS_PER_HAND {
            return Err(LandmarkError::WrongLength {
                expected: FLOATS_PER_HAND,
                actual: data.len(),
            });
        }

        let mut points = [HandLandmark::default(); LANDMARK_COUNT];
        for (i, chunk) in data.chunks_exact(3).enumerate() {
            if !chunk.iter().all(|v| v.is_finite()) {
                return Err(LandmarkError::NonFinite { index: i });
            }
            points[i] = HandLandmark::new(chunk[0], chunk[1], chunk[2]);
        }

        Ok(Self::new(points))
    }

    pub fn points(&self) -> &[HandLandmark; LANDMARK_COUNT] {
        &self.points
    }
}

impl Index<usize> for HandLandmarks {
    type Output = HandLandmark;

    fn index(&self, index: usize) -> &HandLandmark {
        &self.points[index]
    }
}
