//! In-memory job store and per-job advancement.

mod advancer;
mod policy;

pub use policy::AdvancePolicy;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock, watch};
use tokio::task::JoinHandle;

use crate::domain::{HeadwayError, JobEvent, JobId, JobRecord, JobSnapshot, Progress};
use crate::observability::StoreCounts;
use crate::ports::{Clock, EventSink, IdGenerator, NoopEventSink, SystemClock, UlidIdGenerator};

use self::advancer::advance_job;

/// Shared store state.
struct StoreInner {
    /// All job records, keyed by id (single source of truth for jobs).
    ///
    /// Each value is the sending side of that job's watch channel. The
    /// advancer task holds a clone for writing; the map entry keeps the
    /// channel alive for late readers, so a receiver obtained here never
    /// observes a closed channel while the store exists.
    jobs: RwLock<HashMap<JobId, Arc<watch::Sender<JobRecord>>>>,

    /// Advancer task handles, awaited on shutdown.
    advancers: Mutex<Vec<JoinHandle<()>>>,

    /// Flipping this to true stops every advancer.
    shutdown_tx: watch::Sender<bool>,

    policy: AdvancePolicy,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    events: Arc<dyn EventSink>,
}

/// Handle to the in-memory job store.
///
/// The store owns every job record and the tasks that advance them.
/// Cloning the handle is cheap and every clone sees the same jobs, so
/// transport layers can keep one per connection or share one globally.
///
/// # ライフサイクル
/// - [`submit`](JobStore::submit) はレコードを progress 0 で登録し、
///   そのジョブ専用の advancer タスクを spawn する
/// - advancer は [`AdvancePolicy`] の間隔ごとに 1 step 進め、100 で終了する
/// - 完了後もレコードは残り続ける（完了ジョブの照会は正常系）
#[derive(Clone)]
pub struct JobStore {
    inner: Arc<StoreInner>,
}

impl JobStore {
    /// Store with the default production wiring: system clock, ULID ids,
    /// no event sink.
    pub fn new(policy: AdvancePolicy) -> Self {
        Self::new_with_parts(
            policy,
            Arc::new(SystemClock),
            Arc::new(UlidIdGenerator::new(SystemClock)),
            Arc::new(NoopEventSink),
        )
    }

    /// Store that reports lifecycle events to the given sink.
    pub fn new_with_sink(policy: AdvancePolicy, events: Arc<dyn EventSink>) -> Self {
        Self::new_with_parts(
            policy,
            Arc::new(SystemClock),
            Arc::new(UlidIdGenerator::new(SystemClock)),
            events,
        )
    }

    /// Fully wired constructor. Tests use this to pin the clock or the
    /// id source.
    pub fn new_with_parts(
        policy: AdvancePolicy,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        let (shutdown_tx, _) = watch::channel(false);
        Self {
            inner: Arc::new(StoreInner {
                jobs: RwLock::new(HashMap::new()),
                advancers: Mutex::new(Vec::new()),
                shutdown_tx,
                policy,
                clock,
                ids,
                events,
            }),
        }
    }

    /// Register a new job at progress 0 and start advancing it.
    ///
    /// Returns the job's unique id. The first step lands one policy
    /// interval after this call.
    pub async fn submit(&self) -> JobId {
        let id = self.inner.ids.next_job_id();
        let now = self.inner.clock.now();
        let record_tx = Arc::new(watch::channel(JobRecord::new(id, now)).0);

        {
            let mut jobs = self.inner.jobs.write().await;
            jobs.insert(id, Arc::clone(&record_tx));
        }

        self.inner
            .events
            .emit(JobEvent::Submitted { id, at: now })
            .await;

        let handle = tokio::spawn(advance_job(
            record_tx,
            self.inner.policy.clone(),
            Arc::clone(&self.inner.clock),
            Arc::clone(&self.inner.events),
            self.inner.shutdown_tx.subscribe(),
        ));
        self.inner.advancers.lock().await.push(handle);

        id
    }

    /// Current progress of a job.
    pub async fn progress(&self, id: JobId) -> Result<Progress, HeadwayError> {
        let jobs = self.inner.jobs.read().await;
        jobs.get(&id)
            .map(|record_tx| record_tx.borrow().progress)
            .ok_or(HeadwayError::JobNotFound(id))
    }

    /// Full serializable view of a job.
    pub async fn snapshot(&self, id: JobId) -> Result<JobSnapshot, HeadwayError> {
        let jobs = self.inner.jobs.read().await;
        jobs.get(&id)
            .map(|record_tx| JobSnapshot::from(&*record_tx.borrow()))
            .ok_or(HeadwayError::JobNotFound(id))
    }

    /// Subscribe to a job's record changes.
    ///
    /// The receiver starts at the current record value; completed jobs
    /// yield a receiver that already holds progress 100.
    pub async fn subscribe(&self, id: JobId) -> Result<watch::Receiver<JobRecord>, HeadwayError> {
        let jobs = self.inner.jobs.read().await;
        jobs.get(&id)
            .map(|record_tx| record_tx.subscribe())
            .ok_or(HeadwayError::JobNotFound(id))
    }

    /// Observability hook: job counts per phase.
    pub async fn counts_by_phase(&self) -> StoreCounts {
        let jobs = self.inner.jobs.read().await;
        let mut counts = StoreCounts::default();
        for record_tx in jobs.values() {
            if record_tx.borrow().progress.is_complete() {
                counts.complete += 1;
            } else {
                counts.pending += 1;
            }
        }
        counts
    }

    /// Request shutdown for all advancers.
    ///
    /// Pending jobs keep their current progress and remain queryable;
    /// they just stop moving. This does not remove any records.
    pub fn request_shutdown(&self) {
        // ignore send error: receivers may already be dropped
        let _ = self.inner.shutdown_tx.send(true);
    }

    /// Shutdown and wait for all advancers to stop.
    ///
    /// After this returns, no progress value changes anymore.
    pub async fn shutdown_and_join(&self) {
        self.request_shutdown();
        let handles: Vec<_> = {
            let mut advancers = self.inner.advancers.lock().await;
            advancers.drain(..).collect()
        };
        for handle in handles {
            let _ = handle.await;
        }
    }
}
