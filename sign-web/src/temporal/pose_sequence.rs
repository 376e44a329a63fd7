//! Open-then-closed hand sequence ("Verstehen")
//!
//! Each frame's hand is classified as open, closed or neither. Classified
//! frames are logged with their time; an open entry directly followed by a
//! closed entry inside the window completes the sign.

use crate::config::GestureConfig;
use crate::gestures::poses::{is_hand_closed, is_hand_open};
use crate::hand::HandLandmarks;
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandShape {
    Open,
    Closed,
}

/// Classify the coarse hand shape (open wins if both match)
pub fn classify_shape(hand: &HandLandmarks, config: &GestureConfig) -> Option<HandShape> {
    if is_hand_open(hand) {
        Some(HandShape::Open)
    } else if is_hand_closed(hand, config) {
        Some(HandShape::Closed)
    } else {
        None
    }
}

/// Per-hand log of recent hand shapes
#[derive(Clone, Debug, Default)]
pub struct PoseSequence {
    log: VecDeque<(HandShape, f64)>,
}

impl PoseSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one shape observation; true when open -> closed is found
    pub fn observe(&mut self, shape: Option<HandShape>, now_ms: f64, window_ms: f64) -> bool {
        while let Some(&(_, t)) = self.log.front() {
            if now_ms - t > window_ms {
                self.log.pop_front();
            } else {
                break;
            }
        }

        if let Some(shape) = shape {
            self.log.push_back((shape, now_ms));
        }

        let found = self
            .log
            .iter()
            .zip(self.log.iter().skip(1))
            .any(|(a, b)| a.0 == HandShape::Open && b.0 == HandShape::Closed);

        if found {
            log::debug!("Open -> closed sequence completed");
            self.log.clear();
        }
        found
    }

    /// Classify the hand and record it
    pub fn update(&mut self, hand: &HandLandmarks, now_ms: f64, config: &GestureConfig) -> bool {
        self.observe(classify_shape(hand, config), now_ms, config.sequence_window_ms)
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    pub fn reset(&mut self) {
        self.log.clear();
    }
}
