//! Domain identifiers (strongly-typed IDs).
//!
//! # ULID ベースの JobId
//! JobId は ULID (Universally Unique Lexicographically Sortable Identifier) を使用します。
//!
//! ## ULID の特性
//! - **時刻でソート可能**: timestamp が先頭にあるため、生成順序でソートできる
//! - **衝突しない**: 80-bit のランダム部があるため、同一ミリ秒の生成でも一意
//! - **UUID互換**: 128-bit で UUID と同じサイズ
//!
//! ## 文字列表現
//! JobId はクエリパラメータとしてクライアントと往復するため、
//! Display / FromStr / serde のすべてで同じ `job-<ULID>` 表現を使います。
//! プレフィックスにより、ログの中で ID の種類が一目で分かります。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use ulid::Ulid;

/// Identifier of a Job (submit/status/await unit).
///
/// # 例
/// ```
/// use headway_core::domain::JobId;
///
/// let id: JobId = "job-01ARZ3NDEKTSV4RRFFQ69G5FAV".parse().unwrap();
/// assert_eq!(id.to_string(), "job-01ARZ3NDEKTSV4RRFFQ69G5FAV");
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JobId(Ulid);

impl JobId {
    /// Display / parse で使うプレフィックス
    pub const PREFIX: &'static str = "job-";

    /// ULID から JobId を作成
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    /// 内部の ULID を取得
    pub fn as_ulid(&self) -> Ulid {
        self.0
    }

    /// ULID の timestamp 部（ミリ秒）を取得
    ///
    /// 観測用途のみ。ID の生成時刻と厳密に一致する保証は
    /// IdGenerator の実装に依存します。
    pub fn timestamp_ms(&self) -> u64 {
        self.0.timestamp_ms()
    }
}

impl From<Ulid> for JobId {
    fn from(ulid: Ulid) -> Self {
        Self::from_ulid(ulid)
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.0)
    }
}

/// Error returned when a string is not a valid `job-<ULID>`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid job id: {input:?}")]
pub struct ParseJobIdError {
    input: String,
}

impl FromStr for JobId {
    type Err = ParseJobIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.strip_prefix(Self::PREFIX).ok_or_else(|| ParseJobIdError {
            input: s.to_string(),
        })?;
        let ulid = Ulid::from_string(raw).map_err(|_| ParseJobIdError {
            input: s.to_string(),
        })?;
        Ok(Self(ulid))
    }
}

// serde は Display/FromStr と同じ文字列表現を使う
impl TryFrom<String> for JobId {
    type Error = ParseJobIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<JobId> for String {
    fn from(id: JobId) -> Self {
        id.to_string()
    }
}
