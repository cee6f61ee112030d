//! Collaborator traits
//!
//! The engine touches the outside world only through these traits: a pose
//! extractor producing keypoints, a reference store it reloads snapshots
//! from, a history sink it records outcomes to, and a threshold source it
//! consults for the match threshold. Concrete transports and storage live
//! with the caller.

use async_trait::async_trait;

use crate::{HistoryRecord, KeypointSet, ReferenceEntry, Result};

/// Produces skeleton keypoints from frames.
///
/// The frame representation is the implementor's choice (decoded image,
/// raw buffer, camera handle); the engine never inspects it. `Ok(None)`
/// means no person was detected, which is a normal outcome, not an error.
#[async_trait]
pub trait PoseExtractor: Send + Sync {
    type Frame: Send + Sync;

    async fn extract(&self, frame: &Self::Frame) -> Result<Option<KeypointSet>>;
}

/// Source of reference embeddings, grouped by movement class.
///
/// Mutations (adding or deleting reference images) happen on the store's
/// side; afterwards the caller triggers a full reload into the engine.
/// The engine never writes back.
#[async_trait]
pub trait ReferenceStore: Send + Sync {
    /// All movement classes, in the order they should classify.
    async fn movements(&self) -> Result<Vec<String>>;

    /// Reference embeddings for one movement, in stable order.
    async fn references(&self, movement: &str) -> Result<Vec<ReferenceEntry>>;
}

/// Receives one record per verified hold or one-shot check.
#[async_trait]
pub trait HistorySink: Send + Sync {
    async fn record(&self, record: &HistoryRecord) -> Result<()>;
}

/// Supplies the match threshold for verification-mode matching.
///
/// Read once per frame or check, so externally-edited settings take effect
/// without a restart. Implementations should return raw values; the engine
/// sanitizes out-of-range readings down to the default.
pub trait ThresholdSource: Send + Sync {
    fn match_threshold(&self) -> f32;
}
