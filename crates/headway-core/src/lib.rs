//! headway-core
//!
//! Core building blocks for the Headway job-progress service.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, progress, record, state, errors, events）
//! - **ports**: 抽象化レイヤー（Clock, IdGenerator, EventSink）
//! - **store**: ジョブの登録と自動前進（JobStore, AdvancePolicy）
//! - **observer**: 読み取り側（peek と完了待ち）
//! - **observability**: status views（StoreCounts）
//!
//! # 全体像
//! ```text
//! submit ──> JobStore ──spawn──> advancer task (1 job = 1 task)
//!              │                      │ +step_percent every step_interval
//!              │ watch::Sender<JobRecord> per job
//!              ▼
//!         StatusObserver ──> peek_status / await_completion
//! ```

pub mod domain;
pub mod observability;
pub mod observer;
pub mod ports;
pub mod store;
