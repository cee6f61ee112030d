//! Telemetry metric name constants.
//!
//! Centralised metric names for heimdall operations. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `heimdall_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `movement` — movement class name
//! - `status` — frame outcome: "ok" | "no_person" | "error"
//! - `result` — check outcome: "correct" | "incorrect"

/// Total frames processed through the continuous pipeline.
///
/// Labels: `status` ("ok" | "no_person" | "error").
pub const FRAMES_TOTAL: &str = "heimdall_frames_total";

/// Frame pipeline duration in seconds (normalize + score + classify +
/// session update; extractor time included).
pub const FRAME_DURATION_SECONDS: &str = "heimdall_frame_duration_seconds";

/// Total verified events fired by the hold timer.
///
/// Labels: `movement`.
pub const VERIFIED_TOTAL: &str = "heimdall_verified_total";

/// Total one-shot checks performed.
///
/// Labels: `result` ("correct" | "incorrect").
pub const CHECKS_TOTAL: &str = "heimdall_checks_total";

/// Total wholesale reference reloads.
pub const REFERENCE_RELOADS_TOTAL: &str = "heimdall_reference_reloads_total";

/// Reference entries in the active snapshot (gauge, set on reload).
pub const REFERENCE_ENTRIES: &str = "heimdall_reference_entries";
