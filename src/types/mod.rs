//! Public types for the Heimdall API.

mod classify;
mod embedding;
mod history;
mod keypoint;
mod matching;
mod reference;
mod status;

pub use classify::{Classification, Detected};
pub use embedding::{EMBEDDING_LEN, PoseEmbedding};
pub use history::{CheckResult, HistoryRecord};
pub use keypoint::{BODY_COUNT, BODY_START, KEYPOINT_COUNT, Keypoint, KeypointSet};
pub use matching::MatchResult;
pub use reference::{ReferenceEntry, ReferenceSet};
pub use status::{VerificationPhase, VerificationStatus};
