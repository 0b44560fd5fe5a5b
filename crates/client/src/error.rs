//! Error taxonomy for the job client.
//!
//! Transport and API failures are kept separate from job outcomes: a
//! job the backend marked `failed` is a normal, successfully-fetched
//! record, never an error of this crate. Nothing here is retried or
//! recovered locally; every failure propagates to the caller intact.

use std::time::Duration;

/// A single HTTP request against the job API failed.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend returned a non-2xx status code.
    #[error("job API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// Failure of a [`JobsClient`](crate::JobsClient) operation.
///
/// The variant records which operation failed so callers can tell a
/// dead-on-arrival submission apart from a poll that lost contact.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The job-creation request did not succeed.
    #[error("failed to create job: {0}")]
    Creation(#[source] ApiError),

    /// A status fetch for an existing job did not succeed.
    #[error("failed to fetch status for job {job_id}: {source}")]
    Fetch {
        job_id: String,
        #[source]
        source: ApiError,
    },
}

/// Failure of [`poll_until_terminal`](crate::poll::poll_until_terminal).
#[derive(Debug, thiserror::Error)]
pub enum PollError {
    /// A status fetch failed; the loop stopped without issuing
    /// another fetch.
    #[error(transparent)]
    Fetch(#[from] ClientError),

    /// The caller's cancellation token was triggered before a
    /// terminal status was observed.
    #[error("polling cancelled for job {job_id}")]
    Cancelled { job_id: String },

    /// The configured maximum wait elapsed without a terminal status.
    #[error("job {job_id} did not reach a terminal status within {waited:?}")]
    TimedOut { job_id: String, waited: Duration },
}
