//! Status polling loop.
//!
//! A job stays on the backend; the client watches it by fetching its
//! status on a fixed cadence until a terminal status appears. Every
//! fetched snapshot is handed to the caller's callback, terminal or
//! not, so partial output (a `prompt` populated mid-generation) can be
//! rendered as soon as it exists.

use std::time::Duration;

use readmegen_core::JobRecord;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::api::JobsClient;
use crate::error::PollError;

/// Tunable parameters for the polling loop.
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Cadence between status fetches. The first fetch is issued
    /// immediately; subsequent fetches are scheduled on this fixed
    /// wall-clock interval regardless of how long the callback takes.
    pub interval: Duration,
    /// Upper bound on total polling time. `None` polls until a
    /// terminal status is observed, the token is cancelled, or a
    /// fetch fails.
    pub max_wait: Option<Duration>,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            max_wait: None,
        }
    }
}

/// Poll a job until it reaches a terminal status.
///
/// `on_update` is invoked once per fetch, in fetch order, with every
/// snapshot observed. Resolves with the first record whose status is
/// terminal; a job the backend marked `failed` resolves normally, with
/// the failure reason in the record's `error` field.
///
/// Exits early with:
/// - [`PollError::Fetch`] if any status fetch fails. The error is not
///   suppressed or retried and no further fetch is issued.
/// - [`PollError::Cancelled`] once `cancel` is triggered. Checked
///   between fetches; an in-flight fetch is not interrupted, but no
///   new fetch starts after cancellation.
/// - [`PollError::TimedOut`] when [`PollConfig::max_wait`] elapses
///   without a terminal status. At least one fetch is always issued.
pub async fn poll_until_terminal<F>(
    client: &JobsClient,
    job_id: &str,
    mut on_update: F,
    config: &PollConfig,
    cancel: &CancellationToken,
) -> Result<JobRecord, PollError>
where
    F: FnMut(&JobRecord),
{
    let started = Instant::now();
    let mut ticker = tokio::time::interval(config.interval);
    // Ticks stay on the original wall-clock cadence even when a fetch
    // plus callback overruns the interval; overrun ticks are skipped
    // instead of fired in a burst.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut attempt = 0u32;

    loop {
        // The first tick completes immediately, so the initial fetch
        // has no delay. `biased` makes a pre-cancelled token win over
        // an already-elapsed tick.
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::info!(job_id, attempt, "Polling cancelled");
                return Err(PollError::Cancelled {
                    job_id: job_id.to_string(),
                });
            }
            _ = ticker.tick() => {}
        }

        attempt += 1;
        let record = client.job_status(job_id).await?;
        on_update(&record);

        if record.status.is_terminal() {
            tracing::info!(
                job_id,
                attempt,
                status = ?record.status,
                "Job reached terminal status",
            );
            return Ok(record);
        }

        tracing::debug!(job_id, attempt, status = ?record.status, "Job still in progress");

        if let Some(max_wait) = config.max_wait {
            let waited = started.elapsed();
            if waited >= max_wait {
                tracing::warn!(
                    job_id,
                    attempt,
                    waited_ms = waited.as_millis() as u64,
                    "Gave up waiting for terminal status",
                );
                return Err(PollError::TimedOut {
                    job_id: job_id.to_string(),
                    waited,
                });
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
