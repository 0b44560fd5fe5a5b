//! REST wrapper for the job backend's HTTP endpoints.
//!
//! Wraps job creation (`POST /jobs/create`) and status retrieval
//! (`GET /jobs/{job_id}`) using [`reqwest`]. Each call maps to exactly
//! one HTTP request; there is no retry and no local state beyond the
//! connection pool inside the shared [`reqwest::Client`].

use readmegen_core::{JobRecord, JobRequest};
use tokio_util::sync::CancellationToken;

use crate::config::ClientConfig;
use crate::error::{ApiError, ClientError, PollError};
use crate::poll::{poll_until_terminal, PollConfig};

/// HTTP client for a single job backend.
pub struct JobsClient {
    client: reqwest::Client,
    base_url: String,
}

impl JobsClient {
    /// Create a client for the backend named in `config`.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across multiple backends).
    pub fn with_client(client: reqwest::Client, config: ClientConfig) -> Self {
        Self {
            client,
            base_url: config.base_url,
        }
    }

    /// Base HTTP URL of the job API.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit a README-generation job.
    ///
    /// Sends a `POST /jobs/create` request with the project metadata
    /// and returns the initial [`JobRecord`] (expected status
    /// `pending` or `processing`). Failure is surfaced immediately;
    /// nothing is retried.
    pub async fn create_job(&self, request: &JobRequest) -> Result<JobRecord, ClientError> {
        let response = self
            .client
            .post(format!("{}/jobs/create", self.base_url))
            .json(request)
            .send()
            .await
            .map_err(|e| ClientError::Creation(ApiError::Request(e)))?;

        let record = Self::parse_response(response)
            .await
            .map_err(ClientError::Creation)?;

        tracing::info!(
            job_id = %record.job_id,
            status = ?record.status,
            project_name = %request.project_name,
            "Created README job",
        );

        Ok(record)
    }

    /// Fetch the current snapshot of a job.
    ///
    /// Sends a `GET /jobs/{job_id}` request. One request per call; a
    /// transport failure or non-2xx response is returned as
    /// [`ClientError::Fetch`], not retried.
    pub async fn job_status(&self, job_id: &str) -> Result<JobRecord, ClientError> {
        let response = self
            .client
            .get(format!("{}/jobs/{}", self.base_url, job_id))
            .send()
            .await
            .map_err(|e| ClientError::Fetch {
                job_id: job_id.to_string(),
                source: ApiError::Request(e),
            })?;

        let record = Self::parse_response(response)
            .await
            .map_err(|source| ClientError::Fetch {
                job_id: job_id.to_string(),
                source,
            })?;

        tracing::debug!(job_id, status = ?record.status, "Fetched job status");

        Ok(record)
    }

    /// Poll a job until it reaches a terminal status.
    ///
    /// Convenience wrapper around [`poll_until_terminal`]; see that
    /// function for the full contract.
    pub async fn poll_job<F>(
        &self,
        job_id: &str,
        on_update: F,
        config: &PollConfig,
        cancel: &CancellationToken,
    ) -> Result<JobRecord, PollError>
    where
        F: FnMut(&JobRecord),
    {
        poll_until_terminal(self, job_id, on_update, config, cancel).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or an [`ApiError::Status`]
    /// containing the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into a [`JobRecord`].
    async fn parse_response(response: reqwest::Response) -> Result<JobRecord, ApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<JobRecord>().await?)
    }
}
