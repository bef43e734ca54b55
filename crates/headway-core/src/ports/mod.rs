//! Ports - 抽象化レイヤー
//!
//! このモジュールは store が依存する外部要素（時刻、ID 生成、イベント記録）
//! への trait を定義します。実装を差し替えることで、テストでは決定的な
//! 時刻・ID を使い、本番ではシステム時刻と ULID を使います。

pub mod clock;
pub mod event_sink;
pub mod id_generator;

// 主要な trait を再エクスポート
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::event_sink::{EventSink, NoopEventSink, TracingEventSink};
pub use self::id_generator::{IdGenerator, UlidIdGenerator};
