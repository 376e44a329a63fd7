//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod console;
mod session;

pub use console::init_logger;

pub use session::{
    // WASM entry points
    configure,
    set_slide,
    start_recognition,
    stop_recognition,
    begin_frame,
    end_frame,
    process_hands,
    current_label,
    allowed_labels,
    camera_slides,
};
