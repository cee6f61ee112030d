//! Verification session status types.

use serde::{Deserialize, Serialize};

/// Phase of the continuous-hold verification state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerificationPhase {
    /// No hold in progress.
    Idle,
    /// Match sustained, hold timer running.
    Holding,
    /// Hold completed; terminal until the next interruption or target change.
    Verified,
}

/// Snapshot of the verification session, safe to hand to status endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationStatus {
    /// The movement currently being verified.
    pub target: String,
    pub phase: VerificationPhase,
    /// Fraction of the required hold duration completed, in `[0, 1]`.
    pub elapsed_ratio: f32,
    pub verified: bool,
    /// Human-readable progress line, e.g. `"Holding Ready Stance... 2.3s"`.
    pub status_text: String,
}
