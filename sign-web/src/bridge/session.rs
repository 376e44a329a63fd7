//! Recognition session and JS bridge
//!
//! Holds the single recognition session and exposes it to the page. JS
//! sends each MediaPipe Hands result as one flat Float32Array
//! (hands × 21 landmarks × x, y, z) plus the matching handedness labels.

use crate::config::GestureConfig;
use crate::gestures::{Word, ALL_WORDS};
use crate::hand::{DetectedFrame, HandLandmarks, FLOATS_PER_HAND};
use crate::recognizer::{allowed_words, Session, CAMERA_SLIDES};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static SESSION: RefCell<Session> = RefCell::new(Session::new());
}

// ============================================================================
// FRAME PARSING
// ============================================================================

/// Split the flat buffer into hands and sort them by label. Hands that fail
/// to parse are dropped; the rest of the frame is kept.
pub fn parse_frame(data: &[f32], labels: &[String]) -> DetectedFrame {
    let hand_count = data.len() / FLOATS_PER_HAND;
    if data.len() % FLOATS_PER_HAND != 0 || hand_count != labels.len() {
        log::warn!(
            "Landmark buffer of {} floats does not match {} handedness labels",
            data.len(),
            labels.len()
        );
    }

    let hands = data
        .chunks(FLOATS_PER_HAND)
        .zip(labels.iter())
        .filter_map(|(chunk, label)| match HandLandmarks::from_flat(chunk) {
            Ok(hand) => Some((hand, label.as_str())),
            Err(e) => {
                log::warn!("Dropping {} hand: {}", label, e);
                None
            }
        });

    DetectedFrame::sort(hands)
}

fn labels_array<'a>(words: impl IntoIterator<Item = &'a Word>) -> js_sys::Array {
    words
        .into_iter()
        .map(|word| JsValue::from_str(word.label()))
        .collect()
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Replace the gesture configuration with a (partial) JSON object
#[wasm_bindgen]
pub fn configure(json: &str) -> Result<(), JsValue> {
    let config = GestureConfig::from_json(json)?;
    SESSION.with(|session_cell| session_cell.borrow_mut().reconfigure(config));
    Ok(())
}

/// Set the current slide. Returns true when the slide wants the camera.
#[wasm_bindgen]
pub fn set_slide(slide: &str) -> bool {
    SESSION.with(|session_cell| session_cell.borrow_mut().set_slide(slide))
}

#[wasm_bindgen]
pub fn start_recognition() {
    SESSION.with(|session_cell| session_cell.borrow_mut().start());
}

/// Stop and reset all gesture state
#[wasm_bindgen]
pub fn stop_recognition() {
    SESSION.with(|session_cell| session_cell.borrow_mut().stop());
}

/// Call before handing a camera frame to MediaPipe. False means drop the
/// frame (stopped, or the previous frame is still in flight).
#[wasm_bindgen]
pub fn begin_frame() -> bool {
    SESSION.with(|session_cell| session_cell.borrow_mut().try_begin_frame())
}

/// Call once MediaPipe finished with the frame, success or not
#[wasm_bindgen]
pub fn end_frame() {
    SESSION.with(|session_cell| session_cell.borrow_mut().end_frame());
}

/// Recognize one MediaPipe result. Returns the label to display.
#[wasm_bindgen]
pub fn process_hands(data: &[f32], handedness: js_sys::Array) -> String {
    let labels: Vec<String> = handedness
        .iter()
        .map(|label| label.as_string().unwrap_or_default())
        .collect();
    let frame = parse_frame(data, &labels);
    let now = js_sys::Date::now();

    SESSION.with(|session_cell| session_cell.borrow_mut().on_frame(&frame, now).to_string())
}

#[wasm_bindgen]
pub fn current_label() -> String {
    SESSION.with(|session_cell| session_cell.borrow().current_label().to_string())
}

/// Labels accepted on a slide (every label for slides without a list)
#[wasm_bindgen]
pub fn allowed_labels(slide: &str) -> js_sys::Array {
    match allowed_words(slide) {
        Some(words) => labels_array(words),
        None => labels_array(&ALL_WORDS),
    }
}

/// Slide ids on which the page should run the camera
#[wasm_bindgen]
pub fn camera_slides() -> js_sys::Array {
    CAMERA_SLIDES.iter().map(|slide| JsValue::from_str(slide)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::landmarks::WRIST;
    use crate::test_support::{hand_at, self_pose};

    fn flatten(hands: &[HandLandmarks]) -> Vec<f32> {
        hands
            .iter()
            .flat_map(|hand| hand.points().iter().flat_map(|p| [p.x, p.y, p.z]))
            .collect()
    }

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_two_hands() {
        let data = flatten(&[hand_at(0.3, 0.8), hand_at(0.7, 0.8)]);
        let frame = parse_frame(&data, &labels(&["Left", "Right"]));

        assert_eq!(frame.hand_count(), 2);
        assert!((frame.left.unwrap()[WRIST].x - 0.3).abs() < 1e-6);
        assert!((frame.right.unwrap()[WRIST].x - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_bad_hand_is_dropped() {
        let mut data = flatten(&[self_pose(), hand_at(0.7, 0.8)]);
        data[5] = f32::NAN;
        let frame = parse_frame(&data, &labels(&["Left", "Right"]));

        assert!(frame.left.is_none());
        assert!(frame.right.is_some());
    }

    #[test]
    fn test_truncated_buffer() {
        let data = flatten(&[self_pose()]);
        let frame = parse_frame(&data[..FLOATS_PER_HAND - 3], &labels(&["Left"]));
        assert_eq!(frame.hand_count(), 0);
    }

    #[test]
    fn test_missing_label_drops_hand() {
        let data = flatten(&[hand_at(0.3, 0.8), hand_at(0.7, 0.8)]);
        let frame = parse_frame(&data, &labels(&["Right"]));

        assert_eq!(frame.hand_count(), 1);
        assert!((frame.right.unwrap()[WRIST].x - 0.3).abs() < 1e-6);
    }
}
