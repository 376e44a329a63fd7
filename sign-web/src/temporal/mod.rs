//! Temporal gestures - small state machines fed once per frame
//!
//! Every tracker checks its timeout before anything else, so stale state
//! never outlives its window even when frames are skipped.

mod bounce;
mod circle;
mod clap;
mod lunge;
mod pose_sequence;
mod rise_fall;

pub use bounce::BounceTracker;
pub use circle::{mirrored_circle, CircleTracker};
pub use clap::ClapCounter;
pub use lunge::LungeTracker;
pub use pose_sequence::{classify_shape, HandShape, PoseSequence};
pub use rise_fall::RiseFallTracker;
