//! Movement classifier.

use crate::matcher::best_match;
use crate::types::{Classification, PoseEmbedding, ReferenceSet};

/// Decide which known movement (if any) the live pose is performing.
///
/// Scores the live embedding against every movement class with a zero
/// threshold (classification reads raw scores, not match decisions) and
/// attributes the pose to the highest-scoring class. A winning score below
/// `floor` is reported as unknown instead. Ties break toward the movement
/// declared first in the reference set.
///
/// Runs on the same live embedding as the target-specific match, so the
/// pose model is invoked once per frame.
pub fn classify(
    live: Option<&PoseEmbedding>,
    references: &ReferenceSet,
    floor: f32,
) -> Classification {
    let scores = references
        .iter()
        .map(|(movement, entries)| {
            let result = best_match(live, entries, 0.0);
            (movement.to_string(), result.score)
        })
        .collect();
    Classification::from_scores(scores, floor)
}
