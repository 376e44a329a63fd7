//! Gestures module - vocabulary and per-frame classifiers
//!
//! `poses` holds single-frame checks, `moving` combines them with motion
//! histories. Stateful multi-frame gestures live in `crate::temporal`.

pub mod moving;
pub mod poses;
mod vocabulary;

pub use vocabulary::{label_of, Word, ALL_WORDS, NOTHING_RECOGNIZED};
