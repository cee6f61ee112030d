//! Reference matcher.

use crate::similarity::similarity;
use crate::types::{MatchResult, PoseEmbedding, ReferenceEntry};

/// Find the best-scoring reference for a live embedding within one
/// movement class.
///
/// Linear scan over the references; ties break toward the first index, so
/// the result is stable for a given reference order. `is_match` is true
/// when the best score reaches `threshold`. Absent live embedding or empty
/// references deterministically produce [`MatchResult::no_match`].
///
/// Pure: no side effects, no hidden configuration. Callers supply the
/// threshold explicitly: the engine injects its configured default, and
/// classification passes 0.0 to read raw scores.
pub fn best_match(
    live: Option<&PoseEmbedding>,
    references: &[ReferenceEntry],
    threshold: f32,
) -> MatchResult {
    let Some(live) = live else {
        return MatchResult::no_match();
    };
    if references.is_empty() {
        return MatchResult::no_match();
    }

    let mut best_score = 0.0f32;
    let mut best_index = None;
    for (i, entry) in references.iter().enumerate() {
        let score = similarity(live, &entry.embedding);
        if score > best_score {
            best_score = score;
            best_index = Some(i);
        }
    }

    MatchResult {
        is_match: best_score >= threshold,
        score: best_score,
        index: best_index,
    }
}
