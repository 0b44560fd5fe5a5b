//! Shared test harness: a scripted in-process job backend.
//!
//! Serves the same two endpoints as the real backend (`POST
//! /api/jobs/create`, `GET /api/jobs/{job_id}`) on an ephemeral port.
//! The status endpoint replays a scripted sequence of replies, one per
//! fetch, so tests control exactly what the poller observes.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use readmegen_client::{ClientConfig, JobsClient};
use readmegen_core::{JobRecord, JobRequest, JobStatus};

/// One scripted reply from the status endpoint.
pub enum StatusReply {
    /// Respond 200 with this record.
    Record(JobRecord),
    /// Respond with this error status and an empty body.
    Error(StatusCode),
}

#[derive(Clone)]
struct MockState {
    /// Status code returned by the create endpoint.
    create_status: StatusCode,
    /// Record returned by a successful create.
    initial: JobRecord,
    /// Requests received by the create endpoint, in order.
    created: Arc<Mutex<Vec<JobRequest>>>,
    /// Remaining scripted status replies.
    replies: Arc<Mutex<VecDeque<StatusReply>>>,
    /// Served once the script runs out; `None` means 404.
    fallback: Option<JobRecord>,
    /// Total requests seen by the status endpoint.
    fetches: Arc<Mutex<u32>>,
}

/// A running mock backend plus accessors for what it observed.
pub struct MockBackend {
    pub base_url: String,
    state: MockState,
}

impl MockBackend {
    /// Start a backend whose create endpoint succeeds with `initial`
    /// and whose status endpoint replays `replies` then `fallback`.
    pub async fn start(
        initial: JobRecord,
        replies: Vec<StatusReply>,
        fallback: Option<JobRecord>,
    ) -> Self {
        Self::start_with_create_status(StatusCode::OK, initial, replies, fallback).await
    }

    /// Start a backend whose create endpoint always answers `status`.
    pub async fn start_with_create_status(
        create_status: StatusCode,
        initial: JobRecord,
        replies: Vec<StatusReply>,
        fallback: Option<JobRecord>,
    ) -> Self {
        let state = MockState {
            create_status,
            initial,
            created: Arc::new(Mutex::new(Vec::new())),
            replies: Arc::new(Mutex::new(replies.into())),
            fallback,
            fetches: Arc::new(Mutex::new(0)),
        };

        let app = Router::new()
            .route("/api/jobs/create", post(create_job))
            .route("/api/jobs/{job_id}", get(job_status))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock backend");
        let addr = listener.local_addr().expect("mock backend addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock backend serve");
        });

        Self {
            base_url: format!("http://{addr}/api"),
            state,
        }
    }

    /// A client pointed at this backend.
    pub fn client(&self) -> JobsClient {
        JobsClient::new(ClientConfig::new(self.base_url.clone()))
    }

    /// Requests the create endpoint has received so far.
    pub fn created(&self) -> Vec<JobRequest> {
        self.state.created.lock().unwrap().clone()
    }

    /// Number of status fetches the backend has served so far.
    pub fn fetches(&self) -> u32 {
        *self.state.fetches.lock().unwrap()
    }
}

async fn create_job(
    State(state): State<MockState>,
    Json(request): Json<JobRequest>,
) -> Result<Json<JobRecord>, StatusCode> {
    state.created.lock().unwrap().push(request);
    if state.create_status.is_success() {
        Ok(Json(state.initial.clone()))
    } else {
        Err(state.create_status)
    }
}

async fn job_status(
    State(state): State<MockState>,
    Path(_job_id): Path<String>,
) -> Result<Json<JobRecord>, StatusCode> {
    *state.fetches.lock().unwrap() += 1;
    match state.replies.lock().unwrap().pop_front() {
        Some(StatusReply::Record(record)) => Ok(Json(record)),
        Some(StatusReply::Error(status)) => Err(status),
        None => match &state.fallback {
            Some(record) => Ok(Json(record.clone())),
            None => Err(StatusCode::NOT_FOUND),
        },
    }
}

// ---- fixtures ----

/// Build a job record; terminal statuses get a `completed_at` stamp.
pub fn record(
    job_id: &str,
    status: JobStatus,
    prompt: Option<&str>,
    error: Option<&str>,
) -> JobRecord {
    JobRecord {
        job_id: job_id.to_string(),
        status,
        prompt: prompt.map(str::to_string),
        error: error.map(str::to_string),
        completed_at: status.is_terminal().then(chrono::Utc::now),
    }
}

/// The request fixture used throughout the suite.
pub fn sample_request() -> JobRequest {
    JobRequest {
        project_name: "Foo".to_string(),
        tech_stack: "React".to_string(),
        languages: "TS".to_string(),
        description: "desc".to_string(),
    }
}
