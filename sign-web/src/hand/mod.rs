//! Hand module - landmark sets and per-frame left/right sorting
//!
//! Re-exports only. All logic in submodules.

pub mod landmarks;
mod sorter;

pub use landmarks::{HandLandmark, HandLandmarks, LandmarkError, FLOATS_PER_HAND, LANDMARK_COUNT};
pub use sorter::{DetectedFrame, Handedness};
