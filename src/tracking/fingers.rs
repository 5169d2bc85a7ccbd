//! Finger extension flags derived from hand landmarks.

use crate::tracking::landmarks::{HandLandmarks, LandmarkIndex};

/// Per-finger extension flags for one observed hand.
///
/// A finger counts as extended when its fingertip sits above its base
/// knuckle in the image, i.e. `tip.y < mcp.y` in normalized coordinates
/// (image y grows downward). The heuristic assumes a roughly upright hand;
/// a hand held sideways or upside down reads differently, and whatever it
/// reads as is what gets classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FingerState {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl FingerState {
    /// Derive the five flags from a single frame's landmarks.
    ///
    /// Stateless: each frame is judged on its own, with no smoothing or
    /// hysteresis across frames.
    pub fn from_landmarks(hand: &HandLandmarks) -> Self {
        let extended =
            |tip: LandmarkIndex, base: LandmarkIndex| hand.get(tip).y < hand.get(base).y;

        Self {
            thumb: extended(LandmarkIndex::ThumbTip, LandmarkIndex::ThumbMcp),
            index: extended(LandmarkIndex::IndexTip, LandmarkIndex::IndexMcp),
            middle: extended(LandmarkIndex::MiddleTip, LandmarkIndex::MiddleMcp),
            ring: extended(LandmarkIndex::RingTip, LandmarkIndex::RingMcp),
            pinky: extended(LandmarkIndex::PinkyTip, LandmarkIndex::PinkyMcp),
        }
    }

    /// The five flags in thumb-to-pinky order.
    pub fn as_array(&self) -> [bool; 5] {
        [self.thumb, self.index, self.middle, self.ring, self.pinky]
    }

    /// How many fingers are extended.
    pub fn extended_count(&self) -> usize {
        self.as_array().iter().filter(|extended| **extended).count()
    }
}
