//! Status views over the store.

use serde::{Deserialize, Serialize};

/// Job counts per phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreCounts {
    pub pending: usize,
    pub complete: usize,
}

impl StoreCounts {
    /// Total number of jobs ever submitted (nothing is evicted).
    pub fn total(&self) -> usize {
        self.pending + self.complete
    }
}
