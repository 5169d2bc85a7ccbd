//! Hand landmark naming and storage.
//!
//! A detected hand is 21 named keypoints in normalized image coordinates,
//! in the standard MediaPipe hand ordering. Landmarks are produced fresh by
//! the detector for every frame and are never persisted past the frame that
//! produced them.

use serde::{Deserialize, Serialize};

/// Number of keypoints in one detected hand.
pub const LANDMARK_COUNT: usize = 21;

/// A single hand keypoint in normalized image coordinates.
///
/// Both axes are in `[0.0, 1.0]` relative to the frame, with y growing
/// downward: a smaller y is higher up in the image.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The 21 hand keypoints, in detector output order.
///
/// Discriminant values match the MediaPipe hand landmark indices, so
/// `LandmarkIndex::IndexTip.index()` is 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum LandmarkIndex {
    Wrist = 0,
    ThumbCmc = 1,
    ThumbMcp = 2,
    ThumbIp = 3,
    ThumbTip = 4,
    IndexMcp = 5,
    IndexPip = 6,
    IndexDip = 7,
    IndexTip = 8,
    MiddleMcp = 9,
    MiddlePip = 10,
    MiddleDip = 11,
    MiddleTip = 12,
    RingMcp = 13,
    RingPip = 14,
    RingDip = 15,
    RingTip = 16,
    PinkyMcp = 17,
    PinkyPip = 18,
    PinkyDip = 19,
    PinkyTip = 20,
}

impl LandmarkIndex {
    /// Position of this keypoint in the detector output array.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The (tip, base knuckle) pair for each finger, thumb to pinky.
    ///
    /// The thumb has no MCP-named tip pair in the MediaPipe layout; its
    /// base comparison point is the ThumbMcp joint at index 2.
    pub fn finger_pairs() -> [(LandmarkIndex, LandmarkIndex); 5] {
        [
            (LandmarkIndex::ThumbTip, LandmarkIndex::ThumbMcp),
            (LandmarkIndex::IndexTip, LandmarkIndex::IndexMcp),
            (LandmarkIndex::MiddleTip, LandmarkIndex::MiddleMcp),
            (LandmarkIndex::RingTip, LandmarkIndex::RingMcp),
            (LandmarkIndex::PinkyTip, LandmarkIndex::PinkyMcp),
        ]
    }
}

/// Full landmark set for one detected hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HandLandmarks {
    points: [Landmark; LANDMARK_COUNT],
}

impl HandLandmarks {
    pub fn new(points: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Look up one keypoint by name.
    pub fn get(&self, index: LandmarkIndex) -> Landmark {
        self.points[index.index()]
    }

    /// The wrist keypoint, used as the cursor anchor.
    pub fn wrist(&self) -> Landmark {
        self.get(LandmarkIndex::Wrist)
    }

    /// Horizontally mirrored copy (x becomes 1 - x).
    ///
    /// Matches the selfie view a user expects from a front-facing camera:
    /// moving the hand right moves the cursor right.
    pub fn mirrored(&self) -> Self {
        let mut points = self.points;
        for point in &mut points {
            point.x = 1.0 - point.x;
        }
        Self { points }
    }

    pub fn points(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_hand(x: f32, y: f32) -> HandLandmarks {
        HandLandmarks::new([Landmark::new(x, y); LANDMARK_COUNT])
    }

    #[test]
    fn test_indices_match_detector_order() {
        assert_eq!(LandmarkIndex::Wrist.index(), 0);
        assert_eq!(LandmarkIndex::ThumbMcp.index(), 2);
        assert_eq!(LandmarkIndex::ThumbTip.index(), 4);
        assert_eq!(LandmarkIndex::IndexMcp.index(), 5);
        assert_eq!(LandmarkIndex::IndexTip.index(), 8);
        assert_eq!(LandmarkIndex::MiddleMcp.index(), 9);
        assert_eq!(LandmarkIndex::MiddleTip.index(), 12);
        assert_eq!(LandmarkIndex::RingMcp.index(), 13);
        assert_eq!(LandmarkIndex::RingTip.index(), 16);
        assert_eq!(LandmarkIndex::PinkyMcp.index(), 17);
        assert_eq!(LandmarkIndex::PinkyTip.index(), 20);
    }

    #[test]
    fn test_get_reads_named_point() {
        let mut points = [Landmark::default(); LANDMARK_COUNT];
        points[LandmarkIndex::IndexTip.index()] = Landmark::new(0.25, 0.75);
        let hand = HandLandmarks::new(points);

        assert_eq!(hand.get(LandmarkIndex::IndexTip), Landmark::new(0.25, 0.75));
        assert_eq!(hand.get(LandmarkIndex::Wrist), Landmark::default());
    }

    #[test]
    fn test_mirrored_flips_x_only() {
        let hand = uniform_hand(0.2, 0.6);
        let mirrored = hand.mirrored();

        for point in mirrored.points() {
            assert!((point.x - 0.8).abs() < 1e-6);
            assert!((point.y - 0.6).abs() < 1e-6);
        }
    }

    #[test]
    fn test_mirror_twice_is_identity() {
        // Dyadic coordinates so 1 - (1 - x) is exact in f32.
        let mut points = [Landmark::default(); LANDMARK_COUNT];
        for (i, point) in points.iter_mut().enumerate() {
            point.x = i as f32 * 0.03125;
            point.y = 1.0 - i as f32 * 0.03125;
        }
        let hand = HandLandmarks::new(points);

        assert_eq!(hand.mirrored().mirrored(), hand);
    }

    #[test]
    fn test_serializes_as_bare_point_array() {
        let hand = uniform_hand(0.5, 0.5);
        let json = serde_json::to_string(&hand).unwrap();

        assert!(json.starts_with('['), "expected a bare array, got {}", json);
        let parsed: HandLandmarks = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, hand);
    }

    #[test]
    fn test_rejects_wrong_point_count() {
        let short = r#"[{"x":0.1,"y":0.2}]"#;
        assert!(serde_json::from_str::<HandLandmarks>(short).is_err());
    }
}
