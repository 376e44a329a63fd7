//! Hand sorting - splits a frame's detections into left and right slots

use super::landmarks::HandLandmarks;

/// Handedness as reported by the landmark model
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Handedness {
    Left,
    Right,
}

impl Handedness {
    /// Parse the model's label. Anything but "Left"/"Right" is rejected.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Left" => Some(Handedness::Left),
            "Right" => Some(Handedness::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Handedness::Left => "Left",
            Handedness::Right => "Right",
        }
    }
}

/// One frame's hands, at most one per side
#[derive(Clone, Debug, Default)]
pub struct DetectedFrame {
    pub left: Option<HandLandmarks>,
    pub right: Option<HandLandmarks>,
}

impl DetectedFrame {
    /// Sort detections by label. A later detection with the same label
    /// replaces the earlier one; unknown labels are dropped.
    pub fn sort<'a, I>(detections: I) -> Self
    where
        I: IntoIterator<Item = (HandLandmarks, &'a str)>,
    {
        let mut frame = DetectedFrame::default();
        for (hand, label) in detections {
            match Handedness::from_label(label) {
                Some(Handedness::Left) => frame.left = Some(hand),
                Some(Handedness::Right) => frame.right = Some(hand),
                None => log::debug!("Dropping hand with unknown handedness {:?}", label),
            }
        }
        frame
    }

    pub fn hand(&self, side: Handedness) -> Option<&HandLandmarks> {
        match side {
            Handedness::Left => self.left.as_ref(),
            Handedness::Right => self.right.as_ref(),
        }
    }

    pub fn hand_count(&self) -> usize {
        self.left.is_some() as usize + self.right.is_some() as usize
    }
}
