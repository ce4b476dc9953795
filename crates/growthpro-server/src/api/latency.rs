//! Cosmetic "processing" delay in front of generated responses.

use std::ops::RangeInclusive;
use std::time::Duration;

use rand::Rng;

/// Bounds of a jittered delay, in milliseconds.
pub(super) type DelayWindow = RangeInclusive<u64>;

pub(super) const REPORT_DELAY_MS: DelayWindow = 1_000..=2_499;
pub(super) const HEADLINE_DELAY_MS: DelayWindow = 500..=1_499;
pub(super) const INSIGHTS_DELAY_MS: DelayWindow = 800..=800;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Latency {
    Simulated,
    Disabled,
}

impl Latency {
    fn sample(self, window: DelayWindow) -> Duration {
        match self {
            Latency::Simulated => Duration::from_millis(rand::rng().random_range(window)),
            Latency::Disabled => Duration::ZERO,
        }
    }

    /// Sleep for a random duration inside `window` without blocking the
    /// runtime. A no-op when latency is disabled.
    pub(super) async fn pause(self, window: DelayWindow) {
        let delay = self.sample(window);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_latency_is_zero() {
        assert_eq!(Latency::Disabled.sample(REPORT_DELAY_MS), Duration::ZERO);
    }

    #[test]
    fn simulated_latency_stays_in_window() {
        for _ in 0..100 {
            let d = Latency::Simulated.sample(HEADLINE_DELAY_MS);
            assert!(
                (500..=1_499).contains(&d.as_millis()),
                "{d:?} outside window"
            );
        }
    }

    #[test]
    fn insights_delay_is_fixed() {
        assert_eq!(
            Latency::Simulated.sample(INSIGHTS_DELAY_MS),
            Duration::from_millis(800)
        );
    }
}
