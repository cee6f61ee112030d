//! Skeleton keypoint types.
//!
//! A pose extractor reports one [`KeypointSet`] per detected person: 17
//! joints in the standard COCO order (0 nose, 1-2 eyes, 3-4 ears,
//! 5-6 shoulders, 7-8 elbows, 9-10 wrists, 11-12 hips, 13-14 knees,
//! 15-16 ankles). A set is read-only once constructed.

use serde::{Deserialize, Serialize};

/// Number of keypoints in a full skeleton.
pub const KEYPOINT_COUNT: usize = 17;

/// Index of the first body keypoint (left shoulder). Indices 0-4 are
/// head/face joints and are ignored by the normalizer.
pub const BODY_START: usize = 5;

/// Number of body keypoints (shoulders through ankles).
pub const BODY_COUNT: usize = KEYPOINT_COUNT - BODY_START;

/// A single detected joint location with its detection confidence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    pub x: f32,
    pub y: f32,
    /// Detection confidence in `[0, 1]`.
    pub confidence: f32,
}

impl Keypoint {
    pub fn new(x: f32, y: f32, confidence: f32) -> Self {
        Self { x, y, confidence }
    }
}

/// A full 17-joint skeleton for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeypointSet {
    points: [Keypoint; KEYPOINT_COUNT],
}

impl KeypointSet {
    pub fn new(points: [Keypoint; KEYPOINT_COUNT]) -> Self {
        Self { points }
    }

    /// All 17 keypoints in COCO order.
    pub fn points(&self) -> &[Keypoint; KEYPOINT_COUNT] {
        &self.points
    }

    /// The 12 body keypoints (indices 5-16), head joints excluded.
    pub fn body(&self) -> &[Keypoint] {
        &self.points[BODY_START..]
    }
}

impl From<[[f32; 3]; KEYPOINT_COUNT]> for KeypointSet {
    /// Build a set from `[x, y, confidence]` rows as emitted by pose models.
    fn from(rows: [[f32; 3]; KEYPOINT_COUNT]) -> Self {
        Self {
            points: rows.map(|[x, y, c]| Keypoint::new(x, y, c)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_slice_skips_head_joints() {
        let mut rows = [[0.0f32; 3]; KEYPOINT_COUNT];
        rows[BODY_START] = [1.0, 2.0, 0.9];
        let set = KeypointSet::from(rows);

        assert_eq!(set.body().len(), BODY_COUNT);
        assert_eq!(set.body()[0], Keypoint::new(1.0, 2.0, 0.9));
    }
}
