//! Shared domain types for the README-generation job API.
//!
//! These mirror the JSON shapes exchanged with the job backend and are
//! used by both the client crate and its test fixtures.

pub mod job;

pub use job::{JobRecord, JobRequest, JobStatus};

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
