//! Verification history types.
//!
//! One record is emitted per verified hold or per explicitly-requested
//! one-shot check. The sink's storage layout is its own business.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of a check, as recorded to history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckResult {
    Correct,
    Incorrect,
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckResult::Correct => f.write_str("Correct"),
            CheckResult::Incorrect => f.write_str("Incorrect"),
        }
    }
}

/// A single history entry handed to the [`HistorySink`](crate::HistorySink).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Movement the check was performed against.
    pub movement: String,
    pub result: CheckResult,
    /// Label of the best-matching reference, when one scored above zero.
    pub best_label: Option<String>,
    /// Similarity score of the best match.
    pub score: f32,
}
