//! Per-job advancement loop.

use std::sync::Arc;

use tokio::sync::watch;

use crate::domain::{JobEvent, JobRecord, Progress};
use crate::ports::{Clock, EventSink};
use crate::store::AdvancePolicy;

/// Drive one job from 0 to 100.
///
/// One tokio task runs this loop per job. Each tick it sleeps for the
/// policy interval, applies one step through the job's watch channel, and
/// exits once the record is complete. Shutdown is a single `select!` arm,
/// so a stop request interrupts the sleep immediately.
///
/// 重要: レコードの変更は watch::Sender 経由のみ。ロックを跨いだ await は
/// 存在しない（sleep 中はロックを一切保持しない）。
pub(crate) async fn advance_job(
    record_tx: Arc<watch::Sender<JobRecord>>,
    policy: AdvancePolicy,
    clock: Arc<dyn Clock>,
    events: Arc<dyn EventSink>,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    let id = record_tx.borrow().id;

    loop {
        // shutdown が来ていたら抜ける（progress はそのまま残る）
        if *shutdown_rx.borrow() {
            break;
        }

        tokio::select! {
            changed = shutdown_rx.changed() => {
                // sender が落ちた場合も止める。それ以外は次のループ先頭で判定
                if changed.is_err() {
                    break;
                }
            }
            _ = tokio::time::sleep(policy.step_interval) => {
                let now = clock.now();
                let mut after = Progress::ZERO;
                record_tx.send_modify(|record| {
                    after = record.advance(policy.step_percent, now);
                });

                events.emit(JobEvent::Advanced { id, progress: after, at: now }).await;

                if after.is_complete() {
                    events.emit(JobEvent::Completed { id, at: now }).await;
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::JobId;
    use crate::ports::{NoopEventSink, SystemClock};
    use chrono::Utc;
    use std::time::Duration;
    use ulid::Ulid;

    fn fast_policy() -> AdvancePolicy {
        AdvancePolicy {
            step_percent: 50,
            step_interval: Duration::from_millis(10),
        }
    }

    fn spawn_advancer(
        policy: AdvancePolicy,
    ) -> (
        Arc<watch::Sender<JobRecord>>,
        watch::Sender<bool>,
        tokio::task::JoinHandle<()>,
    ) {
        let record = JobRecord::new(JobId::from_ulid(Ulid::new()), Utc::now());
        let (record_tx, _) = watch::channel(record);
        let record_tx = Arc::new(record_tx);

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = tokio::spawn(advance_job(
            Arc::clone(&record_tx),
            policy,
            Arc::new(SystemClock),
            Arc::new(NoopEventSink),
            shutdown_rx,
        ));

        (record_tx, shutdown_tx, handle)
    }

    #[tokio::test]
    async fn loop_exits_on_its_own_after_completion() {
        let (record_tx, _shutdown_tx, handle) = spawn_advancer(fast_policy());

        // 2 steps of 50% then the task must end without any shutdown signal
        handle.await.unwrap();

        let record = record_tx.borrow().clone();
        assert!(record.progress.is_complete());
        assert!(record.completed_at.is_some());
    }

    #[tokio::test]
    async fn shutdown_stops_a_pending_job() {
        let slow = AdvancePolicy {
            step_percent: 10,
            step_interval: Duration::from_secs(3600),
        };
        let (record_tx, shutdown_tx, handle) = spawn_advancer(slow);

        shutdown_tx.send(true).unwrap();
        handle.await.unwrap();

        // まだ 1 step も進んでいないはず
        assert_eq!(record_tx.borrow().progress, Progress::ZERO);
    }

    #[tokio::test]
    async fn dropping_the_shutdown_sender_also_stops_the_loop() {
        let slow = AdvancePolicy {
            step_percent: 10,
            step_interval: Duration::from_secs(3600),
        };
        let (_record_tx, shutdown_tx, handle) = spawn_advancer(slow);

        drop(shutdown_tx);
        handle.await.unwrap();
    }
}
