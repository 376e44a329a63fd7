//! Per-slide vocabulary
//!
//! Each tutorial slide that shows the camera only accepts the words taught
//! up to that point. Practice slides of the later chapters accept nothing.

use crate::gestures::Word;
use Word::*;

const SMALLTALK_1: &[Word] = &[Hello];
const SMALLTALK_2: &[Word] = &[Hello, GoodGreeting, Evening];
const SMALLTALK_3: &[Word] = &[HowAreYou, Hello, GoodGreeting, Evening];
const SMALLTALK_4: &[Word] = &[HowAreYou, Hello, GoodGreeting, Evening, You];
const SMALLTALK_5: &[Word] = &[HowAreYou, Hello, GoodGreeting, Evening, You, Good];
const SMALLTALK_6: &[Word] = &[HowAreYou, Hello, GoodGreeting, Evening, You, Bad, Good];

const CLARITY_1: &[Word] = &[Slower];
const CLARITY_2: &[Word] = &[Slower, Again];
const CLARITY_3: &[Word] = &[Me, Slower, Again];
const CLARITY_4: &[Word] = &[Me, You, Slower, Again];
const CLARITY_5: &[Word] = &[Me, You, Not, Slower, Again];
const CLARITY_6: &[Word] = &[Me, You, Understand, Not, Slower, Again];

const NONE: &[Word] = &[];

/// Slide id -> accepted words
const ALLOWED_BY_SLIDE: &[(&str, &[Word])] = &[
    // Chapter 1: small talk
    ("page8", SMALLTALK_1),
    ("page10", SMALLTALK_2),
    ("page12", SMALLTALK_3),
    ("page14", SMALLTALK_4),
    ("page16", SMALLTALK_5),
    ("page44", SMALLTALK_6),
    ("page56", SMALLTALK_6),
    // Chapter 2: being understood
    ("page19", CLARITY_1),
    ("page21", CLARITY_2),
    ("page23", CLARITY_2),
    ("page25", CLARITY_2),
    ("page27", CLARITY_3),
    ("page46", CLARITY_4),
    ("page48", CLARITY_5),
    ("page50", CLARITY_6),
    ("page52", CLARITY_6),
    // Chapters 3 and 4: preferences, emergencies
    ("page29", NONE),
    ("page31", NONE),
    ("page33", NONE),
    ("page35", NONE),
    ("page37", NONE),
    ("page54", NONE),
    ("page39", NONE),
    ("page41", NONE),
    ("page58", NONE),
];

/// Slides on which the camera pipeline runs
pub const CAMERA_SLIDES: [&str; 25] = [
    "page8", "page10", "page12", "page14", "page16", "page19", "page21", "page23", "page25",
    "page27", "page29", "page31", "page33", "page35", "page37", "page39", "page41", "page44",
    "page56", "page46", "page48", "page50", "page52", "page54", "page58",
];

/// Accepted words for a slide; `None` for slides without a list
pub fn allowed_words(slide: &str) -> Option<&'static [Word]> {
    ALLOWED_BY_SLIDE
        .iter()
        .find(|(id, _)| *id == slide)
        .map(|(_, words)| *words)
}

/// Whether the slide wants the camera running
pub fn slide_uses_camera(slide: &str) -> bool {
    CAMERA_SLIDES.contains(&slide)
}

/// Drop a candidate the slide does not teach. Slides without a list accept
/// every word.
pub fn filter_for_slide(slide: &str, candidate: Option<Word>) -> Option<Word> {
    let word = candidate?;
    match allowed_words(slide) {
        Some(words) if !words.contains(&word) => None,
        _ => Some(word),
    }
}
