//! Read-side observer: status queries and completion waits.

use std::time::Duration;

use crate::domain::{HeadwayError, JobId, JobPhase, Progress};
use crate::store::JobStore;

/// Read-only view over a [`JobStore`].
///
/// The observer never mutates job state; it answers "where is this job
/// now" and "tell me when it is done". Completion waits suspend on the
/// job's watch channel, so a waiting task consumes no CPU until the
/// record actually changes.
///
/// # 設計メモ
/// - 未知の ID は待たずに即エラー（待っても現れないため）
/// - 完了済みジョブへの待機は即座に返る
/// - 待機はジョブ本体に影響しない（タイムアウトしてもジョブは進み続ける）
#[derive(Clone)]
pub struct StatusObserver {
    store: JobStore,
}

impl StatusObserver {
    pub fn new(store: JobStore) -> Self {
        Self { store }
    }

    /// Current progress of a job, without waiting.
    pub async fn peek_status(&self, id: JobId) -> Result<Progress, HeadwayError> {
        self.store.progress(id).await
    }

    /// Current lifecycle phase of a job.
    pub async fn phase(&self, id: JobId) -> Result<JobPhase, HeadwayError> {
        Ok(JobPhase::of(self.store.progress(id).await?))
    }

    /// Suspend until the job's progress reaches 100, then return it.
    ///
    /// Unknown ids fail with [`HeadwayError::JobNotFound`] before any
    /// waiting happens. If the job is already complete this returns
    /// immediately. There is no internal deadline; callers that need one
    /// use [`await_completion_within`](StatusObserver::await_completion_within).
    pub async fn await_completion(&self, id: JobId) -> Result<Progress, HeadwayError> {
        let mut rx = self.store.subscribe(id).await?;

        // Reachable only if the store itself was dropped mid-wait; the
        // store never drops a job entry while it is alive.
        let record = rx
            .wait_for(|record| record.progress.is_complete())
            .await
            .map_err(|_| HeadwayError::JobNotFound(id))?;

        Ok(record.progress)
    }

    /// Like [`await_completion`](StatusObserver::await_completion), but
    /// give up after `limit`.
    ///
    /// On timeout the job is untouched: it keeps advancing and can be
    /// awaited again.
    pub async fn await_completion_within(
        &self,
        id: JobId,
        limit: Duration,
    ) -> Result<Progress, HeadwayError> {
        match tokio::time::timeout(limit, self.await_completion(id)).await {
            Ok(result) => result,
            Err(_) => Err(HeadwayError::WaitTimeout { id, waited: limit }),
        }
    }
}
