//! Output debouncing
//!
//! A recognized word stays on screen for at least `hold_ms`, even if the
//! following frames recognize nothing. A different word replaces it at once
//! and starts a new hold.

use crate::gestures::Word;

#[derive(Clone, Debug)]
pub struct OutputDebouncer {
    shown: Option<Word>,
    /// Hold expiry; `None` while nothing is locked
    locked_until: Option<f64>,
    hold_ms: f64,
}

impl OutputDebouncer {
    pub fn new(hold_ms: f64) -> Self {
        Self {
            shown: None,
            locked_until: None,
            hold_ms,
        }
    }

    fn is_locked(&self, now_ms: f64) -> bool {
        self.locked_until.map_or(false, |until| now_ms < until)
    }

    /// Offer this frame's result; returns what should be displayed
    pub fn offer(&mut self, candidate: Option<Word>, now_ms: f64) -> Option<Word> {
        match candidate {
            None if self.is_locked(now_ms) => {}
            None => {
                self.shown = None;
                self.locked_until = None;
            }
            Some(word) => {
                self.shown = Some(word);
                self.locked_until = Some(now_ms + self.hold_ms);
            }
        }
        self.shown
    }

    pub fn shown(&self) -> Option<Word> {
        self.shown
    }

    pub fn reset(&mut self) {
        self.shown = None;
        self.locked_until = None;
    }
}
