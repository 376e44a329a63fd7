//! Sign Web - hand-gesture recognition for a sign-language tutorial
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules
//!
//! The page feeds MediaPipe Hands results in through `process_hands` once per
//! camera frame and shows the returned label.

mod bridge;
pub mod config;
pub mod gestures;
pub mod hand;
pub mod motion;
pub mod recognizer;
pub mod temporal;

#[cfg(test)]
mod test_support;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    allowed_labels, begin_frame, camera_slides, configure, current_label, end_frame,
    process_hands, set_slide, start_recognition, stop_recognition,
};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    bridge::init_logger(log::LevelFilter::Info);
    log::info!("✅ Sign recognizer loaded");
}

/// Turn gesture debug logging on or off
#[wasm_bindgen]
pub fn set_debug_logging(enabled: bool) {
    let level = if enabled {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    log::set_max_level(level);
}
