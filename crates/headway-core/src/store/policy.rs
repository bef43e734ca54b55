//! Advancement policy: decides step size and cadence.

use std::time::Duration;

/// Policy for automatic progress advancement.
///
/// Every submitted job gains `step_percent` points of progress each
/// `step_interval` until it reaches 100.
#[derive(Debug, Clone)]
pub struct AdvancePolicy {
    /// Progress gained per step, in percent. Must be at least 1;
    /// a zero step would keep jobs pending forever.
    pub step_percent: u8,

    /// Wall-clock time between steps.
    pub step_interval: Duration,
}

impl AdvancePolicy {
    /// Production cadence: +10% every 3 seconds, so a job completes in
    /// 30 seconds.
    pub fn standard() -> Self {
        Self {
            step_percent: 10,
            step_interval: Duration::from_secs(3),
        }
    }

    /// Number of steps a fresh job needs to reach 100 under this policy.
    pub fn steps_to_complete(&self) -> u32 {
        if self.step_percent == 0 {
            return u32::MAX;
        }
        100u32.div_ceil(u32::from(self.step_percent))
    }

    /// Total time from submission to completion under this policy.
    pub fn time_to_complete(&self) -> Duration {
        self.step_interval.saturating_mul(self.steps_to_complete())
    }
}

impl Default for AdvancePolicy {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn standard_policy_completes_in_thirty_seconds() {
        let policy = AdvancePolicy::standard();
        assert_eq!(policy.step_percent, 10);
        assert_eq!(policy.step_interval, Duration::from_secs(3));
        assert_eq!(policy.steps_to_complete(), 10);
        assert_eq!(policy.time_to_complete(), Duration::from_secs(30));
    }

    #[rstest]
    #[case::even_split(10, 10)]
    #[case::coarse(50, 2)]
    #[case::one_shot(100, 1)]
    #[case::remainder_rounds_up(30, 4)]
    #[case::single_percent(1, 100)]
    fn steps_to_complete_rounds_up(#[case] step: u8, #[case] expected: u32) {
        let policy = AdvancePolicy {
            step_percent: step,
            step_interval: Duration::from_millis(10),
        };
        assert_eq!(policy.steps_to_complete(), expected);
    }
}
