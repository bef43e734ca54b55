//! EventSink port - イベント記録の抽象化
//!
//! # 実装
//! - **NoopEventSink**: 何もしない（デフォルト）
//! - **TracingEventSink**: `tracing` の構造化ログとして記録
//!
//! # 将来の拡張
//! - Kafka へのイベント送信
//! - CloudWatch Logs への記録

use async_trait::async_trait;

use crate::domain::JobEvent;

/// EventSink はドメインイベントを記録
///
/// emit は失敗しない（観測用途であり、イベント記録の失敗でジョブの
/// 進行を止めない）。失敗しうる実装は内部でログに落として握りつぶす。
#[async_trait]
pub trait EventSink: Send + Sync {
    async fn emit(&self, event: JobEvent);
}

/// Sink that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEventSink;

#[async_trait]
impl EventSink for NoopEventSink {
    async fn emit(&self, _event: JobEvent) {}
}

/// Sink that logs every event through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

#[async_trait]
impl EventSink for TracingEventSink {
    async fn emit(&self, event: JobEvent) {
        match event {
            JobEvent::Submitted { id, .. } => {
                tracing::info!(job_id = %id, "job submitted");
            }
            JobEvent::Advanced { id, progress, .. } => {
                tracing::info!(job_id = %id, progress = %progress, "job progress advanced");
            }
            JobEvent::Completed { id, .. } => {
                tracing::info!(job_id = %id, "job completed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::JobId;
    use chrono::Utc;
    use std::sync::{Arc, Mutex};
    use ulid::Ulid;

    /// Test sink that remembers what it saw.
    #[derive(Default)]
    struct CollectingSink {
        events: Mutex<Vec<JobEvent>>,
    }

    #[async_trait]
    impl EventSink for CollectingSink {
        async fn emit(&self, event: JobEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    #[tokio::test]
    async fn sinks_are_usable_as_trait_objects() {
        let collecting = Arc::new(CollectingSink::default());
        let sinks: Vec<Arc<dyn EventSink>> = vec![
            Arc::new(NoopEventSink),
            Arc::new(TracingEventSink),
            Arc::clone(&collecting) as Arc<dyn EventSink>,
        ];

        let event = JobEvent::Submitted {
            id: JobId::from_ulid(Ulid::new()),
            at: Utc::now(),
        };

        for sink in &sinks {
            sink.emit(event.clone()).await;
        }

        assert_eq!(collecting.events.lock().unwrap().len(), 1);
    }
}
