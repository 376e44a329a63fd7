//! Rolling motion history
//!
//! Keeps the last N per-frame samples of a tracked point in chronological
//! order. Gaps (frames without the hand) are skipped, not recorded.

use crate::hand::landmarks::{INDEX_TIP, THUMB_TIP};
use crate::hand::HandLandmarks;
use std::collections::VecDeque;

/// Index fingertip position for one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TipSample {
    pub x: f32,
    pub y: f32,
}

impl TipSample {
    pub fn of(hand: &HandLandmarks) -> Self {
        let tip = hand[INDEX_TIP];
        Self { x: tip.x, y: tip.y }
    }
}

/// Thumb tip and index tip positions for one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DualSample {
    pub thumb_x: f32,
    pub thumb_y: f32,
    pub index_x: f32,
    pub index_y: f32,
}

impl DualSample {
    pub fn of(hand: &HandLandmarks) -> Self {
        let thumb = hand[THUMB_TIP];
        let index = hand[INDEX_TIP];
        Self {
            thumb_x: thumb.x,
            thumb_y: thumb.y,
            index_x: index.x,
            index_y: index.y,
        }
    }
}

/// Bounded FIFO of samples
#[derive(Clone, Debug)]
pub struct MotionHistory<T> {
    samples: VecDeque<T>,
    capacity: usize,
}

impl<T: Copy> MotionHistory<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample, evicting the oldest beyond capacity
    pub fn push(&mut self, sample: T) {
        self.samples.push_back(sample);
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    /// Append the hand's sample if the hand is present
    pub fn record(&mut self, hand: Option<&HandLandmarks>, sample: fn(&HandLandmarks) -> T) {
        if let Some(hand) = hand {
            self.push(sample(hand));
        }
    }

    pub fn oldest(&self) -> Option<&T> {
        self.samples.front()
    }

    pub fn newest(&self) -> Option<&T> {
        self.samples.back()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.samples.get(index)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Whether the window holds `capacity` samples
    pub fn is_full(&self) -> bool {
        self.samples.len() == self.capacity
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}
