//! README-generation job types.
//!
//! The backend exposes jobs as JSON objects with a lowercase `status`
//! string and nullable `prompt` / `error` / `completed_at` fields. This
//! module deserializes them into strongly-typed records.

use serde::{Deserialize, Serialize};

use crate::Timestamp;

/// Payload for creating a README-generation job.
///
/// All fields are free-form text. The backend treats them as prompt
/// material, so no validation beyond non-emptiness is meaningful here;
/// callers are expected to have collected non-empty values already.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRequest {
    pub project_name: String,
    pub tech_stack: String,
    pub languages: String,
    pub description: String,
}

/// Lifecycle state of a README-generation job.
///
/// Transitions are forward-only on the server: `pending` →
/// `processing` → `completed` or `failed`. The client never verifies
/// this; it simply reports each snapshot it fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// Job accepted but generation has not started.
    Pending,
    /// Generation is running; `prompt` may already carry partial output.
    Processing,
    /// Generation finished; `prompt` holds the final README markdown.
    Completed,
    /// Generation failed; `error` holds the reason.
    Failed,
}

impl JobStatus {
    /// Whether no further transitions are expected for this status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

/// A snapshot of a job as returned by the backend.
///
/// Server-owned; the client treats every fetch as an immutable
/// snapshot and keeps no copy beyond the current poll iteration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    /// Server-assigned identifier for the job.
    pub job_id: String,
    pub status: JobStatus,
    /// Generated README markdown. Populated once the job reaches
    /// `processing` or `completed`; a later snapshot may replace an
    /// earlier partial value.
    pub prompt: Option<String>,
    /// Failure reason. Populated only when `status` is `failed`.
    pub error: Option<String>,
    /// When the job reached a terminal status.
    pub completed_at: Option<Timestamp>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
