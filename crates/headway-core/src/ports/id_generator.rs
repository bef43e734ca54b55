//! IdGenerator port - ID 生成の抽象化
//!
//! IdGenerator は一意な JobId を生成するためのインターフェースです。
//! テスト容易性のために、trait として抽象化しています。
//!
//! # 実装
//! - **UlidIdGenerator**: ULID ベース（本番用）

use ulid::Ulid;

use crate::domain::ids::JobId;
use crate::ports::Clock;

/// IdGenerator は衝突しない JobId を生成
///
/// 同一ミリ秒に複数の submit が来ても、生成される ID は互いに異なる
/// ことが要求されます。時刻だけを ID にすると同時 submit で衝突するため、
/// 実装は必ずランダム成分を持ちます。
///
/// # Thread Safety
/// - `Send + Sync` を要求（複数タスクから使える）
pub trait IdGenerator: Send + Sync {
    /// Job ID を生成
    fn next_job_id(&self) -> JobId;
}

/// UlidIdGenerator は ULID ベースの ID 生成器
///
/// Clock の現在時刻を timestamp 部に、`rand` を 80-bit ランダム部に使います。
/// これにより、テスト時に FixedClock を使っても ID は一意のままです。
pub struct UlidIdGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidIdGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> IdGenerator for UlidIdGenerator<C> {
    fn next_job_id(&self) -> JobId {
        let timestamp_ms = self.clock.now().timestamp_millis() as u64;
        let ulid = Ulid::from_parts(timestamp_ms, rand::random());
        JobId::from(ulid)
    }
}
