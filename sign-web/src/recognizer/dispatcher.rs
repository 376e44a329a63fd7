//! Gesture dispatcher
//!
//! Owns every motion history and gesture state machine, one set per hand
//! slot plus the two-hand trackers. Each frame the rules of the matching
//! hand count are evaluated in order; a later match overrides an earlier
//! one. Every rule runs on every frame so the stateful gestures keep
//! advancing even when a higher-priority word wins.

use crate::config::GestureConfig;
use crate::gestures::{moving, poses, Word};
use crate::hand::{DetectedFrame, HandLandmarks, Handedness};
use crate::motion::{DualSample, MotionHistory, TipSample};
use crate::temporal::{
    mirrored_circle, BounceTracker, CircleTracker, ClapCounter, LungeTracker, PoseSequence,
    RiseFallTracker,
};

// ============================================================================
// PER-SLOT STATE
// ============================================================================

/// Histories and trackers for one hand slot
struct SlotState {
    tips: MotionHistory<TipSample>,
    dual: MotionHistory<DualSample>,
    circle: CircleTracker,
    rise_fall: RiseFallTracker,
    lunge: LungeTracker,
    sequence: PoseSequence,
    /// Hand was present on the previous frame
    present: bool,
}

impl SlotState {
    fn new(config: &GestureConfig) -> Self {
        Self {
            tips: MotionHistory::new(config.fingertip_history_len),
            dual: MotionHistory::new(config.dual_history_len),
            circle: CircleTracker::new(),
            rise_fall: RiseFallTracker::new(),
            lunge: LungeTracker::new(),
            sequence: PoseSequence::new(),
            present: false,
        }
    }

    fn clear(&mut self) {
        self.tips.clear();
        self.dual.clear();
        self.circle.reset();
        self.rise_fall.reset();
        self.lunge.reset();
        self.sequence.reset();
    }

    /// Track presence and record this frame's samples
    fn observe(&mut self, hand: Option<&HandLandmarks>, side: Handedness) {
        let present = hand.is_some();
        if present && !self.present {
            log::debug!("{} hand appeared, clearing its history", side.as_str());
            self.clear();
        }
        self.present = present;

        self.tips.record(hand, TipSample::of);
        self.dual.record(hand, DualSample::of);
    }
}

/// Both slots plus the trackers that need both hands
struct Tracking {
    left: SlotState,
    right: SlotState,
    bounce: BounceTracker,
    clap: ClapCounter,
    pair_present: bool,
}

impl Tracking {
    fn new(config: &GestureConfig) -> Self {
        Self {
            left: SlotState::new(config),
            right: SlotState::new(config),
            bounce: BounceTracker::new(),
            clap: ClapCounter::new(),
            pair_present: false,
        }
    }

    fn slot_mut(&mut self, side: Handedness) -> &mut SlotState {
        match side {
            Handedness::Left => &mut self.left,
            Handedness::Right => &mut self.right,
        }
    }
}

// ============================================================================
// RULES
// ============================================================================

type SingleHandCheck = fn(&mut SlotState, &HandLandmarks, Handedness, f64, &GestureConfig) -> bool;
type TwoHandCheck = fn(&mut Tracking, &HandLandmarks, &HandLandmarks, f64, &GestureConfig) -> bool;

fn check_how_are_you(
    slot: &mut SlotState,
    hand: &HandLandmarks,
    side: Handedness,
    _: f64,
    config: &GestureConfig,
) -> bool {
    moving::how_are_you_moving(hand, side, &slot.tips, config)
}

fn check_not(
    _: &mut SlotState,
    hand: &HandLandmarks,
    _: Handedness,
    _: f64,
    _: &GestureConfig,
) -> bool {
    poses::is_not_pose(hand)
}

fn check_hello(
    slot: &mut SlotState,
    hand: &HandLandmarks,
    _: Handedness,
    _: f64,
    config: &GestureConfig,
) -> bool {
    moving::hello(hand, &slot.tips, config)
}

fn check_understand(
    slot: &mut SlotState,
    hand: &HandLandmarks,
    _: Handedness,
    now_ms: f64,
    config: &GestureConfig,
) -> bool {
    slot.sequence.update(hand, now_ms, config)
}

fn check_me(
    _: &mut SlotState,
    hand: &HandLandmarks,
    _: Handedness,
    _: f64,
    _: &GestureConfig,
) -> bool {
    poses::is_self_pose(hand)
}

fn check_you(
    _: &mut SlotState,
    hand: &HandLandmarks,
    _: Handedness,
    _: f64,
    config: &GestureConfig,
) -> bool {
    poses::is_you_pose(hand, config)
}

fn check_thumbs_up(
    _: &mut SlotState,
    hand: &HandLandmarks,
    _: Handedness,
    _: f64,
    _: &GestureConfig,
) -> bool {
    poses::is_thumbs_up(hand)
}

fn check_bad(
    slot: &mut SlotState,
    hand: &HandLandmarks,
    side: Handedness,
    _: f64,
    config: &GestureConfig,
) -> bool {
    moving::bad_moving(hand, side, &slot.tips, config)
}

fn check_lunge(
    slot: &mut SlotState,
    hand: &HandLandmarks,
    _: Handedness,
    now_ms: f64,
    config: &GestureConfig,
) -> bool {
    slot.lunge.update(hand, now_ms, config.lunge_min_depth, config.lunge_timeout_ms)
}

fn check_rise_fall(
    slot: &mut SlotState,
    hand: &HandLandmarks,
    _: Handedness,
    now_ms: f64,
    config: &GestureConfig,
) -> bool {
    slot.rise_fall.update(hand, now_ms, config.rise_fall_margin, config.rise_fall_timeout_ms)
}

fn check_good_greeting(
    t: &mut Tracking,
    left: &HandLandmarks,
    right: &HandLandmarks,
    _: f64,
    config: &GestureConfig,
) -> bool {
    moving::good_greeting(left, right, &t.left.tips, &t.right.tips, config)
}

fn check_evening(
    t: &mut Tracking,
    _: &HandLandmarks,
    _: &HandLandmarks,
    _: f64,
    _: &GestureConfig,
) -> bool {
    moving::evening(&t.left.dual, &t.right.dual)
}

fn check_again(
    t: &mut Tracking,
    left: &HandLandmarks,
    right: &HandLandmarks,
    now_ms: f64,
    config: &GestureConfig,
) -> bool {
    mirrored_circle(
        &mut t.left.circle,
        &mut t.right.circle,
        left,
        right,
        now_ms,
        config.circle_timeout_ms,
        config.circle_min_changes,
    )
}

fn check_please(
    t: &mut Tracking,
    left: &HandLandmarks,
    right: &HandLandmarks,
    now_ms: f64,
    config: &GestureConfig,
) -> bool {
    t.clap.update(
        left,
        right,
        now_ms,
        config.clap_distance,
        config.clap_count,
        config.clap_timeout_ms,
    )
}

fn check_slower(
    t: &mut Tracking,
    left: &HandLandmarks,
    right: &HandLandmarks,
    now_ms: f64,
    config: &GestureConfig,
) -> bool {
    t.bounce.update(left, right, now_ms, config.bounce_margin, config.bounce_timeout_ms)
}

/// Experimental single-hand words, evaluated before (so below) the defaults
const SINGLE_HAND_EXPERIMENTAL: &[(Word, SingleHandCheck)] = &[
    (Word::Thanks, check_lunge),
    (Word::Good, check_rise_fall),
];

/// Single-hand words, lowest priority first
const SINGLE_HAND: &[(Word, SingleHandCheck)] = &[
    (Word::HowAreYou, check_how_are_you),
    (Word::Not, check_not),
    (Word::Hello, check_hello),
    (Word::Understand, check_understand),
    (Word::Me, check_me),
    (Word::You, check_you),
    (Word::Good, check_thumbs_up),
    (Word::Bad, check_bad),
];

const TWO_HAND_HEAD: &[(Word, TwoHandCheck)] = &[
    (Word::GoodGreeting, check_good_greeting),
    (Word::Evening, check_evening),
    (Word::Again, check_again),
];

const TWO_HAND_EXPERIMENTAL: &[(Word, TwoHandCheck)] = &[(Word::Please, check_please)];

const TWO_HAND_TAIL: &[(Word, TwoHandCheck)] = &[(Word::Slower, check_slower)];

// ============================================================================
// RECOGNIZER
// ============================================================================

/// Per-frame gesture recognition over a persistent tracking state
pub struct Recognizer {
    config: GestureConfig,
    tracking: Tracking,
}

impl Default for Recognizer {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

impl Recognizer {
    pub fn new(config: GestureConfig) -> Self {
        let tracking = Tracking::new(&config);
        Self { config, tracking }
    }

    /// Drop every history and gesture state
    pub fn reset(&mut self) {
        self.tracking = Tracking::new(&self.config);
    }

    /// Recognize one frame. Returns the highest-priority matching word.
    pub fn process(&mut self, frame: &DetectedFrame, now_ms: f64) -> Option<Word> {
        self.tracking.left.observe(frame.left.as_ref(), Handedness::Left);
        self.tracking.right.observe(frame.right.as_ref(), Handedness::Right);

        match (&frame.left, &frame.right) {
            (Some(left), Some(right)) => self.process_two_hands(left, right, now_ms),
            (Some(_), None) | (None, Some(_)) => {
                self.tracking.pair_present = false;
                self.process_single_hand(frame, now_ms)
            }
            (None, None) => {
                self.tracking.pair_present = false;
                None
            }
        }
    }

    fn process_single_hand(&mut self, frame: &DetectedFrame, now_ms: f64) -> Option<Word> {
        let experimental: &[(Word, SingleHandCheck)] = if self.config.experimental_gestures {
            SINGLE_HAND_EXPERIMENTAL
        } else {
            &[]
        };

        let mut candidate = None;
        for &(word, check) in experimental.iter().chain(SINGLE_HAND) {
            for side in [Handedness::Left, Handedness::Right] {
                if let Some(hand) = frame.hand(side) {
                    if check(self.tracking.slot_mut(side), hand, side, now_ms, &self.config) {
                        candidate = Some(word);
                    }
                }
            }
        }
        candidate
    }

    fn process_two_hands(
        &mut self,
        left: &HandLandmarks,
        right: &HandLandmarks,
        now_ms: f64,
    ) -> Option<Word> {
        if !self.tracking.pair_present {
            log::debug!("Both hands in view, resetting two-hand trackers");
            self.tracking.bounce.reset();
            self.tracking.clap.reset();
            self.tracking.left.circle.reset();
            self.tracking.right.circle.reset();
            self.tracking.pair_present = true;
        }

        let experimental: &[(Word, TwoHandCheck)] = if self.config.experimental_gestures {
            TWO_HAND_EXPERIMENTAL
        } else {
            &[]
        };

        let mut candidate = None;
        for &(word, check) in TWO_HAND_HEAD.iter().chain(experimental).chain(TWO_HAND_TAIL) {
            if check(&mut self.tracking, left, right, now_ms, &self.config) {
                candidate = Some(word);
            }
        }
        candidate
    }
}
