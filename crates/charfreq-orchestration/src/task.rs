//! The background tally task: spawn, await, cancel, dispose.

use std::time::Instant;

use tokio::task::JoinHandle;
use tracing::{debug, error};

use charfreq_core::{tally, CancellationToken, TallyOptions};

use crate::report::{TallyReport, TaskError};

/// Cancels the shared token when dropped, so a worker whose caller went
/// away stops at its next checkpoint instead of running to completion.
struct CancelGuard {
    token: CancellationToken,
}

impl Drop for CancelGuard {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// A request-scoped background tally.
///
/// `spawn` moves the input text into a blocking worker; `wait` resolves
/// with the report or the worker's error. Dropping an unawaited task
/// cancels its token, releasing the worker on every exit path including
/// caller abandonment.
pub struct TallyTask {
    guard: CancelGuard,
    worker: JoinHandle<Result<TallyReport, TaskError>>,
}

impl TallyTask {
    /// Spawn a worker computing the tally for `text`.
    ///
    /// Exactly one worker is created per call; concurrent invocations get
    /// independent workers with independent tokens.
    #[must_use]
    pub fn spawn(text: String, opts: TallyOptions) -> Self {
        let token = CancellationToken::new();
        let worker_token = token.clone();
        let worker = tokio::task::spawn_blocking(move || {
            let start = Instant::now();
            let records = tally(&text, &worker_token, &opts)?;
            let duration = start.elapsed();
            debug!(
                chars = text.chars().count(),
                records = records.len(),
                ?duration,
                "tally complete"
            );
            Ok(TallyReport {
                text,
                records,
                duration,
            })
        });
        Self {
            guard: CancelGuard { token },
            worker,
        }
    }

    /// Request cooperative cancellation of the worker.
    pub fn cancel(&self) {
        self.guard.token.cancel();
    }

    /// The task's cancellation token.
    #[must_use]
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.guard.token
    }

    /// Await the worker's completion.
    ///
    /// A worker panic is logged and surfaced as [`TaskError::Worker`], not
    /// silently dropped.
    pub async fn wait(self) -> Result<TallyReport, TaskError> {
        let Self { guard, worker } = self;
        let result = match worker.await {
            Ok(outcome) => outcome,
            Err(join_err) => {
                error!(error = %join_err, "tally worker did not complete");
                Err(TaskError::Worker(join_err.to_string()))
            }
        };
        // The worker is gone either way; the guard's cancel is a no-op.
        drop(guard);
        result
    }
}

/// Synchronous in-place fallback for callers without a runtime.
///
/// Runs the same tally with the same bounds and post-processing as the
/// worker path.
pub fn tally_blocking(text: String, opts: &TallyOptions) -> Result<TallyReport, TaskError> {
    let start = Instant::now();
    let cancel = CancellationToken::new();
    let records = tally(&text, &cancel, opts)?;
    Ok(TallyReport {
        text,
        records,
        duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn spawn_and_wait() {
        let task = TallyTask::spawn("Hello.".to_string(), TallyOptions::default());
        let report = task.wait().await.unwrap();
        assert_eq!(report.text, "Hello.");
        assert_eq!(report.records.len(), 5);
        assert_eq!(report.records.iter().map(|r| r.count).sum::<u64>(), 6);
    }

    #[tokio::test]
    async fn text_passes_through_unmodified() {
        let text = "wap.txt contents\r\nline two".to_string();
        let task = TallyTask::spawn(text.clone(), TallyOptions::default());
        let report = task.wait().await.unwrap();
        assert_eq!(report.text, text);
    }

    #[tokio::test]
    async fn cancel_aborts_long_run() {
        let text = "a".repeat(5_000_000);
        let opts = TallyOptions {
            max_chars: 5_000_000,
            max_records: 500,
        };
        let task = TallyTask::spawn(text, opts);
        task.cancel();
        assert!(matches!(task.wait().await, Err(TaskError::Cancelled)));
    }

    #[tokio::test]
    async fn drop_cancels_token() {
        let task = TallyTask::spawn("abc".to_string(), TallyOptions::default());
        let token = task.cancellation_token().clone();
        drop(task);
        assert!(token.is_cancelled());
    }

    #[tokio::test]
    async fn concurrent_tasks_are_independent() {
        let a = TallyTask::spawn("aaa".to_string(), TallyOptions::default());
        let b = TallyTask::spawn("bb".to_string(), TallyOptions::default());
        a.cancel();
        let b_report = b.wait().await.unwrap();
        assert_eq!(b_report.records[0].character, 'b');
        assert_eq!(b_report.records[0].count, 2);
    }

    #[tokio::test]
    async fn blocking_fallback_matches_worker_path() {
        let text = "The quick brown fox".to_string();
        let opts = TallyOptions::default();
        let spawned = TallyTask::spawn(text.clone(), opts.clone())
            .wait()
            .await
            .unwrap();
        let blocking = tally_blocking(text, &opts).unwrap();
        assert_eq!(spawned.records, blocking.records);
        assert_eq!(spawned.text, blocking.text);
    }
}
