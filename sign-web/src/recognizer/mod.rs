//! Recognizer module - dispatch, slide filtering, debouncing, session
//!
//! Re-exports only. All logic in submodules.

mod allow_list;
mod debounce;
mod dispatcher;
mod session;

pub use allow_list::{allowed_words, filter_for_slide, slide_uses_camera, CAMERA_SLIDES};
pub use debounce::OutputDebouncer;
pub use dispatcher::Recognizer;
pub use session::Session;
