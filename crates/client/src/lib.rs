//! HTTP client for the README-generation job backend.
//!
//! Provides the job-creation and status endpoints as typed calls
//! ([`JobsClient`]), plus a polling loop ([`poll::poll_until_terminal`])
//! that watches a job until it reaches a terminal status, reporting
//! every observed snapshot to the caller along the way.

pub mod api;
pub mod config;
pub mod error;
pub mod poll;

pub use api::JobsClient;
pub use config::ClientConfig;
pub use error::{ApiError, ClientError, PollError};
pub use poll::{poll_until_terminal, PollConfig};
