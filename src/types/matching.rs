//! Reference match result type.

use serde::{Deserialize, Serialize};

/// Outcome of scoring a live embedding against one movement's references.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Whether the best score cleared the match threshold.
    pub is_match: bool,
    /// Best similarity score found, in `[0, 1]`.
    pub score: f32,
    /// Index of the best-scoring reference, `None` when nothing scored
    /// above zero (absent embedding, empty references, or all-zero scores).
    pub index: Option<usize>,
}

impl MatchResult {
    /// The deterministic "no match possible" result.
    pub fn no_match() -> Self {
        Self {
            is_match: false,
            score: 0.0,
            index: None,
        }
    }
}
