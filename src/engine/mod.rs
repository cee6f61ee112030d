//! The verification engine.
//!
//! [`Engine`] owns the shared mutable state (the current target movement,
//! the verification session, and the last classification) behind a single
//! mutex, and the active reference snapshot behind an atomically-swapped
//! `Arc`. The per-frame loop and on-demand handlers (one-shot checks,
//! target changes, status reads) all go through it, so a movement change
//! can never interleave with an in-flight frame update.

mod builder;

pub use builder::{EngineBuilder, Heimdall};

use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, RwLock};
use tracing::{info, warn};

use crate::classifier::classify;
use crate::config::{Config, sanitize_threshold};
use crate::matcher::best_match;
use crate::normalize::normalize;
use crate::session::{FrameSignal, VerificationSession};
use crate::telemetry;
use crate::traits::{HistorySink, PoseExtractor, ReferenceStore, ThresholdSource};
use crate::types::{
    CheckResult, Classification, Detected, HistoryRecord, MatchResult, ReferenceSet,
    VerificationPhase, VerificationStatus,
};
use crate::{HeimdallError, Result};

/// Everything the engine learned from one continuous-pipeline frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameReport {
    /// The movement attributed by the classifier.
    pub detected: Detected,
    /// Raw per-movement classification scores.
    pub scores: Vec<(String, f32)>,
    /// Match result for the current target movement.
    pub target_match: MatchResult,
    /// Verification session snapshot after this frame.
    pub status: VerificationStatus,
}

/// Result of a stateless one-shot check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckReport {
    /// Movement the check ran against.
    pub movement: String,
    /// False when the extractor saw no person; nothing is recorded then.
    pub person_detected: bool,
    pub is_match: bool,
    pub score: f32,
    /// Label of the best-matching reference, if any.
    pub best_label: Option<String>,
}

/// Shared mutable state, guarded as one mutual-exclusion domain.
struct EngineState {
    session: VerificationSession,
    last_classification: Classification,
}

/// Pose similarity & verification engine.
///
/// Construct via [`Heimdall::builder`]. The engine starts with an empty
/// reference snapshot; call [`Engine::reload_references`] to pull the
/// initial set from the store.
pub struct Engine<X: PoseExtractor> {
    extractor: X,
    store: Arc<dyn ReferenceStore>,
    sink: Arc<dyn HistorySink>,
    threshold: Arc<dyn ThresholdSource>,
    config: Config,
    references: RwLock<Arc<ReferenceSet>>,
    state: Mutex<EngineState>,
}

impl<X: PoseExtractor> Engine<X> {
    pub(crate) fn new(
        extractor: X,
        store: Arc<dyn ReferenceStore>,
        sink: Arc<dyn HistorySink>,
        threshold: Arc<dyn ThresholdSource>,
        config: Config,
        target: String,
    ) -> Self {
        let session = VerificationSession::new(target, config.hold_duration());
        Self {
            extractor,
            store,
            sink,
            threshold,
            config,
            references: RwLock::new(Arc::new(ReferenceSet::new())),
            state: Mutex::new(EngineState {
                session,
                last_classification: Classification::unknown(),
            }),
        }
    }

    /// Run the continuous pipeline for one frame: extract, normalize,
    /// classify, match the target, advance the hold timer.
    ///
    /// A frame advances the hold only when the target matches above
    /// threshold *and* wins classification across all movements. On a
    /// completed hold the verified event is recorded to the history sink
    /// once. An extractor failure leaves all state at its previous value.
    pub async fn process_frame(&self, frame: &X::Frame) -> Result<FrameReport> {
        let started = Instant::now();
        let keypoints = match self.extractor.extract(frame).await {
            Ok(keypoints) => keypoints,
            Err(e) => {
                metrics::counter!(telemetry::FRAMES_TOTAL, "status" => "error").increment(1);
                return Err(e);
            }
        };
        let live = keypoints.as_ref().map(normalize);
        let references = self.references.read().await.clone();
        let classification = classify(live.as_ref(), &references, self.config.classifier_floor);
        let threshold = sanitize_threshold(self.threshold.match_threshold());

        let mut state = self.state.lock().await;
        let target = state.session.target().to_string();
        let target_refs = references.get(&target).unwrap_or_default();
        let target_match = best_match(live.as_ref(), target_refs, threshold);
        let frame_ok = target_match.is_match && classification.detected.is(&target);

        let was_idle = state.session.phase() == VerificationPhase::Idle;
        let event = state.session.update(
            FrameSignal {
                frame_ok,
                score: target_match.score,
                best_index: target_match.index,
            },
            started,
        );
        if was_idle && state.session.phase() == VerificationPhase::Holding {
            info!(movement = %target, score = target_match.score, "match found, hold timer started");
        }
        state.last_classification = classification.clone();
        let status = state.session.status();
        drop(state);

        if let Some(event) = event {
            info!(movement = %event.movement, score = event.score, "hold complete, verified");
            metrics::counter!(telemetry::VERIFIED_TOTAL, "movement" => event.movement.clone())
                .increment(1);
            let best_label = event
                .best_index
                .and_then(|i| target_refs.get(i))
                .map(|entry| entry.label.clone());
            let record = HistoryRecord {
                movement: event.movement,
                result: CheckResult::Correct,
                best_label,
                score: event.score,
            };
            if let Err(e) = self.sink.record(&record).await {
                warn!(error = %e, "failed to record verified event");
            }
        }

        let frame_status = if keypoints.is_some() { "ok" } else { "no_person" };
        metrics::counter!(telemetry::FRAMES_TOTAL, "status" => frame_status).increment(1);
        metrics::histogram!(telemetry::FRAME_DURATION_SECONDS)
            .record(started.elapsed().as_secs_f64());

        Ok(FrameReport {
            detected: classification.detected,
            scores: classification.scores,
            target_match,
            status,
        })
    }

    /// One-shot check of a single frame against a movement, without
    /// touching the continuous session's hold timer.
    ///
    /// Uses the current target when `movement` is `None`. An explicitly
    /// named movement must exist in the active reference snapshot. Every
    /// check with a detected person is recorded to the history sink,
    /// correct or not; no-person frames are reported but not recorded.
    pub async fn check_frame(
        &self,
        frame: &X::Frame,
        movement: Option<&str>,
    ) -> Result<CheckReport> {
        let keypoints = self.extractor.extract(frame).await?;
        let references = self.references.read().await.clone();
        let movement = match movement {
            Some(name) => {
                if references.get(name).is_none() {
                    return Err(HeimdallError::UnknownMovement(name.to_string()));
                }
                name.to_string()
            }
            None => self.state.lock().await.session.target().to_string(),
        };

        let Some(keypoints) = keypoints else {
            return Ok(CheckReport {
                movement,
                person_detected: false,
                is_match: false,
                score: 0.0,
                best_label: None,
            });
        };

        let live = normalize(&keypoints);
        let threshold = sanitize_threshold(self.threshold.match_threshold());
        let target_refs = references.get(&movement).unwrap_or_default();
        let outcome = best_match(Some(&live), target_refs, threshold);
        let best_label = outcome
            .index
            .and_then(|i| target_refs.get(i))
            .map(|entry| entry.label.clone());

        let result = if outcome.is_match {
            CheckResult::Correct
        } else {
            CheckResult::Incorrect
        };
        metrics::counter!(
            telemetry::CHECKS_TOTAL,
            "result" => if outcome.is_match { "correct" } else { "incorrect" },
        )
        .increment(1);
        self.sink
            .record(&HistoryRecord {
                movement: movement.clone(),
                result,
                best_label: best_label.clone(),
                score: outcome.score,
            })
            .await?;

        Ok(CheckReport {
            movement,
            person_detected: true,
            is_match: outcome.is_match,
            score: outcome.score,
            best_label,
        })
    }

    /// Select the movement to verify, starting a fresh session.
    ///
    /// Forces an immediate reset regardless of the current phase: a hold
    /// timer never survives a target switch.
    pub async fn set_target(&self, movement: impl Into<String>) -> VerificationStatus {
        let mut state = self.state.lock().await;
        state.session.set_target(movement);
        info!(movement = state.session.target(), "verification target changed");
        state.session.status()
    }

    /// The movement currently being verified.
    pub async fn target(&self) -> String {
        self.state.lock().await.session.target().to_string()
    }

    /// Snapshot of the verification session.
    pub async fn status(&self) -> VerificationStatus {
        self.state.lock().await.session.status()
    }

    /// The most recent classification from the continuous pipeline.
    pub async fn last_classification(&self) -> Classification {
        self.state.lock().await.last_classification.clone()
    }

    /// The active reference snapshot.
    pub async fn references(&self) -> Arc<ReferenceSet> {
        self.references.read().await.clone()
    }

    /// Rebuild the reference set from the store and swap it in atomically.
    ///
    /// In-flight readers keep the snapshot they already hold; nobody ever
    /// observes a partially-rebuilt set. A store error during the rebuild
    /// leaves the previous snapshot active. Returns the number of entries
    /// loaded.
    pub async fn reload_references(&self) -> Result<usize> {
        let mut set = ReferenceSet::new();
        for movement in self.store.movements().await? {
            let entries = self.store.references(&movement).await?;
            set.insert(movement, entries);
        }
        let total = self.install_references(set).await;
        metrics::counter!(telemetry::REFERENCE_RELOADS_TOTAL).increment(1);
        Ok(total)
    }

    /// Swap in a prebuilt reference snapshot, bypassing the store.
    pub async fn install_references(&self, set: ReferenceSet) -> usize {
        let movements = set.len();
        let total = set.total_entries();
        *self.references.write().await = Arc::new(set);
        metrics::gauge!(telemetry::REFERENCE_ENTRIES).set(total as f64);
        info!(movements, entries = total, "reference set installed");
        total
    }

    /// The engine's sanitized configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}
