// SPDX-License-Identifier: MPL-2.0
//! Simulated submission backend.
//!
//! Waits for a fixed delay, then accepts the rating with a configurable
//! probability. Each call draws independently; there is no seed.

use crate::application::port::{SubmissionFuture, SubmissionPort};
use crate::config::{DEFAULT_SUBMIT_DELAY_MS, DEFAULT_SUCCESS_PROBABILITY};
use crate::domain::error::SubmitError;
use crate::domain::rating::RatingOption;
use std::time::Duration;

/// Timer-backed coin flip standing in for a real network call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatedSubmitter {
    delay: Duration,
    success_probability: f64,
}

impl SimulatedSubmitter {
    /// Creates a submitter; `success_probability` is clamped to `0.0..=1.0`.
    #[must_use]
    pub fn new(delay: Duration, success_probability: f64) -> Self {
        let success_probability = if success_probability.is_nan() {
            DEFAULT_SUCCESS_PROBABILITY
        } else {
            success_probability.clamp(0.0, 1.0)
        };
        Self {
            delay,
            success_probability,
        }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    #[must_use]
    pub fn success_probability(&self) -> f64 {
        self.success_probability
    }

    /// Draws one outcome. `random` is uniform in `[0, 1)`, so a probability
    /// of `1.0` always succeeds and `0.0` never does.
    fn roll(&self) -> bool {
        rand::random::<f64>() < self.success_probability
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(DEFAULT_SUBMIT_DELAY_MS),
            DEFAULT_SUCCESS_PROBABILITY,
        )
    }
}

impl SubmissionPort for SimulatedSubmitter {
    fn attempt_submit(&self, _candidate: RatingOption) -> SubmissionFuture {
        let this = *self;
        Box::pin(async move {
            tokio::time::sleep(this.delay).await;
            if this.roll() {
                Ok(())
            } else {
                Err(SubmitError::SimulatedFailure)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rating::RatingId;

    fn candidate() -> RatingOption {
        RatingOption::new(RatingId::new(4))
    }

    #[test]
    fn default_uses_one_second_coin_flip() {
        let submitter = SimulatedSubmitter::default();
        assert_eq!(submitter.delay(), Duration::from_millis(1000));
        assert!((submitter.success_probability() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn probability_is_clamped() {
        assert_eq!(
            SimulatedSubmitter::new(Duration::ZERO, 3.0).success_probability(),
            1.0
        );
        assert_eq!(
            SimulatedSubmitter::new(Duration::ZERO, -1.0).success_probability(),
            0.0
        );
        assert_eq!(
            SimulatedSubmitter::new(Duration::ZERO, f64::NAN).success_probability(),
            DEFAULT_SUCCESS_PROBABILITY
        );
    }

    #[tokio::test(start_paused = true)]
    async fn certain_success_resolves_ok_after_delay() {
        let submitter = SimulatedSubmitter::new(Duration::from_millis(1000), 1.0);
        let started = tokio::time::Instant::now();
        let result = submitter.attempt_submit(candidate()).await;
        assert!(result.is_ok());
        assert!(started.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn certain_failure_resolves_simulated_failure() {
        let submitter = SimulatedSubmitter::new(Duration::from_millis(1000), 0.0);
        let result = submitter.attempt_submit(candidate()).await;
        assert_eq!(result, Err(SubmitError::SimulatedFailure));
    }

    #[tokio::test(start_paused = true)]
    async fn coin_flip_produces_both_outcomes() {
        let submitter = SimulatedSubmitter::new(Duration::ZERO, 0.5);
        let mut successes = 0;
        let mut failures = 0;
        for _ in 0..200 {
            match submitter.attempt_submit(candidate()).await {
                Ok(()) => successes += 1,
                Err(_) => failures += 1,
            }
        }
        assert!(successes > 0);
        assert!(failures > 0);
    }
}
