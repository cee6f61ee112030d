//! Heimdall - Pose similarity & verification engine
//!
//! This crate turns raw skeleton keypoints from an external pose model
//! into scale/translation-invariant embeddings, scores them against stored
//! reference embeddings, classifies which movement is being performed, and
//! tracks a continuous-hold timer that promotes a sustained match into a
//! verified event.
//!
//! The engine talks to the outside world only through traits: a
//! [`PoseExtractor`] produces keypoints, a [`ReferenceStore`] supplies
//! reference embeddings, a [`HistorySink`] receives outcomes, and a
//! [`ThresholdSource`] provides the match threshold. Transport, storage,
//! and image handling stay with the caller.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use heimdall::{Heimdall, Result};
//! # use async_trait::async_trait;
//! # use heimdall::{HistoryRecord, HistorySink, KeypointSet, PoseExtractor, ReferenceEntry,
//! #     ReferenceStore};
//! # struct Yolo;
//! # #[async_trait]
//! # impl PoseExtractor for Yolo {
//! #     type Frame = Vec<u8>;
//! #     async fn extract(&self, _frame: &Vec<u8>) -> Result<Option<KeypointSet>> { Ok(None) }
//! # }
//! # struct Db;
//! # #[async_trait]
//! # impl ReferenceStore for Db {
//! #     async fn movements(&self) -> Result<Vec<String>> { Ok(Vec::new()) }
//! #     async fn references(&self, _movement: &str) -> Result<Vec<ReferenceEntry>> {
//! #         Ok(Vec::new())
//! #     }
//! # }
//! # #[async_trait]
//! # impl HistorySink for Db {
//! #     async fn record(&self, _record: &HistoryRecord) -> Result<()> { Ok(()) }
//! # }
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let db = Arc::new(Db);
//!     let engine = Heimdall::builder(Yolo)
//!         .reference_store(db.clone())
//!         .history_sink(db)
//!         .target("Ready Stance")
//!         .build()?;
//!
//!     // Pull the initial reference snapshot from the store.
//!     engine.reload_references().await?;
//!
//!     // Continuous loop: one call per frame.
//!     let frame: Vec<u8> = Vec::new();
//!     let report = engine.process_frame(&frame).await?;
//!     println!("{} | {}", report.detected, report.status.status_text);
//!     Ok(())
//! }
//! ```

pub mod classifier;
pub mod config;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod normalize;
pub mod session;
pub mod similarity;
pub mod telemetry;
pub mod traits;
pub mod types;

// Re-export main types at crate root
pub use config::{
    Config, ConfigThreshold, DEFAULT_CLASSIFIER_FLOOR, DEFAULT_HOLD_DURATION_SECS,
    DEFAULT_MATCH_THRESHOLD, FixedThreshold,
};
pub use engine::{CheckReport, Engine, EngineBuilder, FrameReport, Heimdall};
pub use error::{HeimdallError, Result};
pub use traits::{HistorySink, PoseExtractor, ReferenceStore, ThresholdSource};

// Re-export the core algorithms
pub use classifier::classify;
pub use matcher::best_match;
pub use normalize::normalize;
pub use session::{DEFAULT_HOLD_DURATION, FrameSignal, VerificationSession, VerifiedEvent};
pub use similarity::similarity;

// Re-export all types
pub use types::{
    BODY_COUNT, BODY_START, CheckResult, Classification, Detected, EMBEDDING_LEN, HistoryRecord,
    KEYPOINT_COUNT, Keypoint, KeypointSet, MatchResult, PoseEmbedding, ReferenceEntry,
    ReferenceSet, VerificationPhase, VerificationStatus,
};
