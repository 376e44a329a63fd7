//! Tutorial vocabulary and display labels
//!
//! Labels are the exact strings the page shows (German sign vocabulary).

/// Shown when no word is recognized (or the word is not allowed here)
pub const NOTHING_RECOGNIZED: &str = "Nichts erkannt";

/// Every word the recognizer can emit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Word {
    HowAreYou,
    Hello,
    Not,
    Understand,
    Me,
    You,
    Good,
    Bad,
    GoodGreeting,
    Evening,
    Again,
    Slower,
    Please,
    Thanks,
}

/// All words, in declaration order
pub const ALL_WORDS: [Word; 14] = [
    Word::HowAreYou,
    Word::Hello,
    Word::Not,
    Word::Understand,
    Word::Me,
    Word::You,
    Word::Good,
    Word::Bad,
    Word::GoodGreeting,
    Word::Evening,
    Word::Again,
    Word::Slower,
    Word::Please,
    Word::Thanks,
];

impl Word {
    pub fn label(&self) -> &'static str {
        match self {
            Word::HowAreYou => "Wie geht's!",
            Word::Hello => "Hallo/Tschüss!",
            Word::Not => "Nicht",
            Word::Understand => "Verstehen",
            Word::Me => "Ich",
            Word::You => "Du/Dich/Dir",
            Word::Good => "Gut",
            Word::Bad => "Schlecht",
            Word::GoodGreeting => "Guten",
            Word::Evening => "Abend",
            Word::Again => "Nochmal",
            Word::Slower => "Langsamer",
            Word::Please => "Bitte",
            Word::Thanks => "Danke",
        }
    }
}

/// Display label for an optional word
pub fn label_of(word: Option<Word>) -> &'static str {
    word.map_or(NOTHING_RECOGNIZED, |w| w.label())
}
