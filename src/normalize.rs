//! Embedding normalizer.
//!
//! Turns a raw 17-joint skeleton into a [`PoseEmbedding`] that is invariant
//! to where the person stands and how large they appear: the 12 body
//! keypoints are centered on the torso and divided by a body-scale
//! estimate, then flattened in fixed joint order. Head joints carry no
//! posture signal and are discarded.

use crate::types::{BODY_COUNT, EMBEDDING_LEN, KeypointSet, PoseEmbedding};

/// A keypoint participates in geometry only above this confidence.
pub const MIN_CONFIDENCE: f32 = 0.3;

/// Below this many valid body keypoints the skeleton cannot be normalized.
pub const MIN_VALID_POINTS: usize = 4;

/// Torso lengths at or below this are considered collapsed and fall back
/// to the bounding-box scale.
pub const MIN_TORSO_LENGTH: f32 = 0.05;

// Indices into the 12-point body slice.
const LEFT_SHOULDER: usize = 0;
const RIGHT_SHOULDER: usize = 1;
const LEFT_HIP: usize = 6;
const RIGHT_HIP: usize = 7;

/// Normalize a skeleton into a scale/translation-invariant embedding.
///
/// Returns the all-zero embedding when fewer than [`MIN_VALID_POINTS`]
/// body keypoints are confident enough to use. Invalid keypoints are
/// forced to `(0, 0)` in the output so stale coordinates cannot leak into
/// similarity scores. Deterministic: the same input always produces the
/// same embedding.
pub fn normalize(keypoints: &KeypointSet) -> PoseEmbedding {
    let body = keypoints.body();
    debug_assert_eq!(body.len(), BODY_COUNT);

    let valid: Vec<bool> = body.iter().map(|k| k.confidence > MIN_CONFIDENCE).collect();
    let valid_points: Vec<(f32, f32)> = body
        .iter()
        .zip(&valid)
        .filter(|(_, ok)| **ok)
        .map(|(k, _)| (k.x, k.y))
        .collect();

    if valid_points.len() < MIN_VALID_POINTS {
        return PoseEmbedding::zero();
    }

    let (min, max) = bounding_box(&valid_points);
    let bbox_diagonal = distance(min, max);

    let torso_ok =
        valid[LEFT_SHOULDER] && valid[RIGHT_SHOULDER] && valid[LEFT_HIP] && valid[RIGHT_HIP];

    let (center, scale) = if torso_ok {
        let shoulder_mid = midpoint(
            (body[LEFT_SHOULDER].x, body[LEFT_SHOULDER].y),
            (body[RIGHT_SHOULDER].x, body[RIGHT_SHOULDER].y),
        );
        let hip_mid = midpoint(
            (body[LEFT_HIP].x, body[LEFT_HIP].y),
            (body[RIGHT_HIP].x, body[RIGHT_HIP].y),
        );
        // Mean of the four torso points.
        let center = midpoint(shoulder_mid, hip_mid);
        let torso_len = distance(shoulder_mid, hip_mid);
        let scale = if torso_len > MIN_TORSO_LENGTH {
            torso_len
        } else {
            bbox_diagonal
        };
        (center, scale)
    } else {
        (midpoint(min, max), bbox_diagonal)
    };

    let scale = if scale == 0.0 { 1.0 } else { scale };

    let mut values = [0.0f32; EMBEDDING_LEN];
    for (i, (point, ok)) in body.iter().zip(&valid).enumerate() {
        if *ok {
            values[2 * i] = (point.x - center.0) / scale;
            values[2 * i + 1] = (point.y - center.1) / scale;
        }
    }
    PoseEmbedding::new(values)
}

fn bounding_box(points: &[(f32, f32)]) -> ((f32, f32), (f32, f32)) {
    let mut min = (f32::MAX, f32::MAX);
    let mut max = (f32::MIN, f32::MIN);
    for &(x, y) in points {
        min.0 = min.0.min(x);
        min.1 = min.1.min(y);
        max.0 = max.0.max(x);
        max.1 = max.1.max(y);
    }
    (min, max)
}

fn midpoint(a: (f32, f32), b: (f32, f32)) -> (f32, f32) {
    ((a.0 + b.0) / 2.0, (a.1 + b.1) / 2.0)
}

fn distance(a: (f32, f32), b: (f32, f32)) -> f32 {
    ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
}
