//! Movement classification types.
//!
//! Classification decides which known movement (if any) a live pose is
//! performing. Low-confidence winners are not attributed to any class and
//! are reported as [`Detected::Unknown`] instead.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The movement attributed to the current pose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Detected {
    /// The named movement won with sufficient confidence.
    Movement(String),
    /// No pose, or the best score fell below the confidence floor.
    Unknown,
}

impl Detected {
    /// The movement name, if one was attributed.
    pub fn movement(&self) -> Option<&str> {
        match self {
            Detected::Movement(name) => Some(name),
            Detected::Unknown => None,
        }
    }

    /// True when this classification names the given movement.
    pub fn is(&self, movement: &str) -> bool {
        self.movement() == Some(movement)
    }
}

impl fmt::Display for Detected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Detected::Movement(name) => f.write_str(name),
            Detected::Unknown => f.write_str("Neutral / Unknown"),
        }
    }
}

/// Result of classifying a live embedding across all movement classes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// The winning movement, or `Unknown` below the confidence floor.
    pub detected: Detected,
    /// Raw best-reference score per movement, in declaration order.
    pub scores: Vec<(String, f32)>,
}

impl Classification {
    /// Build a classification from per-movement scores.
    ///
    /// The winner is the highest score; ties break toward the earlier
    /// entry. A winning score below `floor` is reported as `Unknown`.
    pub fn from_scores(scores: Vec<(String, f32)>, floor: f32) -> Self {
        let mut best: Option<(usize, f32)> = None;
        for (i, (_, score)) in scores.iter().enumerate() {
            if best.is_none_or(|(_, top)| *score > top) {
                best = Some((i, *score));
            }
        }

        let detected = match best {
            Some((i, score)) if score >= floor => Detected::Movement(scores[i].0.clone()),
            _ => Detected::Unknown,
        };
        Self { detected, scores }
    }

    /// An empty classification (no movements known, nothing detected).
    pub fn unknown() -> Self {
        Self {
            detected: Detected::Unknown,
            scores: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn winner_above_floor_is_attributed() {
        let result = Classification::from_scores(
            vec![("A".to_string(), 0.8), ("B".to_string(), 0.3)],
            0.6,
        );
        assert_eq!(result.detected, Detected::Movement("A".to_string()));
    }

    #[test]
    fn winner_below_floor_is_unknown() {
        let result = Classification::from_scores(
            vec![("A".to_string(), 0.55), ("B".to_string(), 0.3)],
            0.6,
        );
        assert_eq!(result.detected, Detected::Unknown);
        assert_eq!(result.scores.len(), 2);
    }

    #[test]
    fn tie_breaks_toward_first_entry() {
        let result = Classification::from_scores(
            vec![("A".to_string(), 0.7), ("B".to_string(), 0.7)],
            0.6,
        );
        assert_eq!(result.detected, Detected::Movement("A".to_string()));
    }

    #[test]
    fn empty_scores_are_unknown() {
        let result = Classification::from_scores(Vec::new(), 0.6);
        assert_eq!(result.detected, Detected::Unknown);
    }

    #[test]
    fn unknown_displays_neutral_label() {
        assert_eq!(Detected::Unknown.to_string(), "Neutral / Unknown");
    }
}
