//! Motion module - rolling position histories and movement tests
//!
//! Re-exports only. All logic in submodules.

mod direction;
mod history;

pub use direction::{
    horizontal_travel, is_waving, moved_left, moved_right, swept_down_outward_left,
    swept_down_outward_right,
};
pub use history::{DualSample, MotionHistory, TipSample};
