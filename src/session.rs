//! Verification state machine.
//!
//! Tracks a continuous hold for the current target movement:
//! `Idle -> Holding -> Verified`. A frame counts toward the hold only when
//! the target pose is above threshold *and* wins classification across all
//! movements; a single failing frame resets the hold to zero. There is no
//! grace period.

use std::time::{Duration, Instant};

use crate::types::{VerificationPhase, VerificationStatus};

/// Default continuous-hold duration before a match is verified.
pub const DEFAULT_HOLD_DURATION: Duration = Duration::from_secs(5);

const INITIAL_STATUS: &str = "Waiting...";

/// Per-frame input to the state machine.
///
/// `frame_ok` must already combine the target match decision with
/// classifier agreement; the session does not re-derive it.
#[derive(Debug, Clone, Copy)]
pub struct FrameSignal {
    /// Target matched above threshold and won classification this frame.
    pub frame_ok: bool,
    /// Target match score this frame.
    pub score: f32,
    /// Index of the best-scoring target reference this frame.
    pub best_index: Option<usize>,
}

/// Fired exactly once per completed hold.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedEvent {
    pub movement: String,
    /// Match score on the frame that completed the hold.
    pub score: f32,
    pub best_index: Option<usize>,
}

/// Continuous-hold tracker for one target movement.
///
/// One session exists at a time; selecting a target replaces it. Time is
/// injected per call, so behaviour is deterministic under test.
#[derive(Debug, Clone)]
pub struct VerificationSession {
    target: String,
    hold_duration: Duration,
    hold_start: Option<Instant>,
    verified: bool,
    elapsed_ratio: f32,
    status_text: String,
}

impl VerificationSession {
    pub fn new(target: impl Into<String>, hold_duration: Duration) -> Self {
        Self {
            target: target.into(),
            hold_duration,
            hold_start: None,
            verified: false,
            elapsed_ratio: 0.0,
            status_text: INITIAL_STATUS.to_string(),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Switch to a new target movement, starting a fresh verification
    /// session. Resets unconditionally, even mid-hold.
    pub fn set_target(&mut self, target: impl Into<String>) {
        self.target = target.into();
        self.reset(INITIAL_STATUS.to_string());
    }

    pub fn phase(&self) -> VerificationPhase {
        if self.verified {
            VerificationPhase::Verified
        } else if self.hold_start.is_some() {
            VerificationPhase::Holding
        } else {
            VerificationPhase::Idle
        }
    }

    /// Snapshot the session for status reporting.
    pub fn status(&self) -> VerificationStatus {
        VerificationStatus {
            target: self.target.clone(),
            phase: self.phase(),
            elapsed_ratio: self.elapsed_ratio,
            verified: self.verified,
            status_text: self.status_text.clone(),
        }
    }

    /// Advance the state machine by one frame.
    ///
    /// Returns the verified event exactly once, on the frame where the
    /// hold reaches the required duration. Subsequent passing frames keep
    /// the session in `Verified` without re-firing. Any failing frame
    /// resets to `Idle` immediately, from any phase.
    pub fn update(&mut self, signal: FrameSignal, now: Instant) -> Option<VerifiedEvent> {
        if !signal.frame_ok {
            self.reset(format!("Incorrect Pose (Need {})", self.target));
            return None;
        }

        let start = *self.hold_start.get_or_insert(now);
        let elapsed = now.duration_since(start);
        self.elapsed_ratio =
            (elapsed.as_secs_f32() / self.hold_duration.as_secs_f32()).min(1.0);

        if elapsed >= self.hold_duration && !self.verified {
            self.verified = true;
            self.status_text = "VERIFIED!".to_string();
            return Some(VerifiedEvent {
                movement: self.target.clone(),
                score: signal.score,
                best_index: signal.best_index,
            });
        }
        if !self.verified {
            self.status_text = format!(
                "Holding {}... {:.1}s",
                self.target,
                elapsed.as_secs_f32()
            );
        }
        None
    }

    fn reset(&mut self, status_text: String) {
        self.hold_start = None;
        self.verified = false;
        self.elapsed_ratio = 0.0;
        self.status_text = status_text;
    }
}
