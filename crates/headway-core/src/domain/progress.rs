//! Progress percentage (0..=100).

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Completion percentage of a job.
///
/// The value is always within `0..=100`. Arithmetic clamps at the upper
/// bound; deserialization rejects out-of-range input.
///
/// Serializes as a bare number (`40`), which is also how [`fmt::Display`]
/// renders it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Progress(u8);

impl Progress {
    /// Freshly submitted job.
    pub const ZERO: Progress = Progress(0);

    /// Terminal value. Once reached, progress never changes again.
    pub const COMPLETE: Progress = Progress(100);

    /// Create a progress value, clamping anything above 100.
    pub fn new(percent: u8) -> Self {
        Self(percent.min(Self::COMPLETE.0))
    }

    /// Raw percentage.
    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// Progress after one advancement step, saturating at 100.
    pub fn advanced_by(self, step: u8) -> Self {
        Self::new(self.0.saturating_add(step))
    }

    /// Whether the terminal value has been reached.
    pub fn is_complete(&self) -> bool {
        self.0 >= Self::COMPLETE.0
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error for percentages outside `0..=100` coming from serialized data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("progress out of range: {0} (expected 0..=100)")]
pub struct ProgressOutOfRange(pub u8);

impl TryFrom<u8> for Progress {
    type Error = ProgressOutOfRange;

    fn try_from(percent: u8) -> Result<Self, Self::Error> {
        if percent > Self::COMPLETE.0 {
            return Err(ProgressOutOfRange(percent));
        }
        Ok(Self(percent))
    }
}

impl From<Progress> for u8 {
    fn from(progress: Progress) -> Self {
        progress.0
    }
}
