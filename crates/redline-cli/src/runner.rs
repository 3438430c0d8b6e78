//! Wall-clock bounded execution of comparisons.
//!
//! The LCS table has no early exit, so a comparison runs on a blocking
//! worker and the caller stops waiting once the deadline passes. The worker
//! itself cannot be interrupted; the runtime must be shut down without
//! waiting for it.

use std::time::Duration;

use anyhow::{anyhow, Context};

/// Run `work` on the blocking pool and wait at most `timeout` for it.
pub async fn run_bounded<T, F>(timeout: Duration, work: F) -> anyhow::Result<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let task = tokio::task::spawn_blocking(work);
    match tokio::time::timeout(timeout, task).await {
        Ok(joined) => joined.context("comparison worker failed"),
        Err(_) => {
            tracing::warn!(timeout_secs = timeout.as_secs_f64(), "comparison timed out");
            Err(anyhow!("comparison did not finish within {:?}", timeout))
        }
    }
}
