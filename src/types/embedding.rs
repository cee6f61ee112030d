//! Pose embedding type.
//!
//! An embedding is the scale- and translation-invariant fingerprint of one
//! skeleton: 12 body keypoints flattened to 24 floats. It is either a valid
//! normalized vector or the all-zero vector, which signals "not enough
//! valid keypoints to normalize". No other degenerate state exists.

use serde::{Deserialize, Serialize};

use super::keypoint::BODY_COUNT;

/// Length of a flattened pose embedding (12 body keypoints x 2 coordinates).
pub const EMBEDDING_LEN: usize = BODY_COUNT * 2;

/// A fixed-length, scale/translation-invariant pose vector.
///
/// Immutable once produced. Held indefinitely as a reference embedding or
/// transiently as the live embedding for a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoseEmbedding {
    values: [f32; EMBEDDING_LEN],
}

impl PoseEmbedding {
    pub fn new(values: [f32; EMBEDDING_LEN]) -> Self {
        Self { values }
    }

    /// The all-zero embedding: valid but carries no signal, and scores 0
    /// similarity against everything.
    pub fn zero() -> Self {
        Self {
            values: [0.0; EMBEDDING_LEN],
        }
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// True for the all-zero "insufficient valid points" embedding.
    pub fn is_degenerate(&self) -> bool {
        self.values.iter().all(|v| *v == 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_embedding_is_degenerate() {
        assert!(PoseEmbedding::zero().is_degenerate());
    }

    #[test]
    fn nonzero_embedding_is_not_degenerate() {
        let mut values = [0.0; EMBEDDING_LEN];
        values[3] = 0.25;
        assert!(!PoseEmbedding::new(values).is_degenerate());
    }
}
