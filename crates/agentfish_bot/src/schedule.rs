//! Wake-time math behind a clock abstraction.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::Rng;
use std::time::Duration;

/// Time source for the posting loop.
///
/// Production uses [`SystemClock`]; tests substitute an instant clock so
/// scheduling behavior is assertable without real waits.
#[async_trait]
pub trait Clock: Send + Sync {
    /// Current wall-clock time.
    fn now(&self) -> DateTime<Utc>;

    /// Suspend the caller for `duration`.
    async fn sleep(&self, duration: Duration);
}

/// Real wall clock backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[async_trait]
impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Jittered interval schedule.
#[derive(Debug, Clone, Copy)]
pub struct Schedule {
    base: Duration,
    jitter_max: Duration,
}

impl Schedule {
    /// Create a schedule waking every `base` plus up to `jitter_max` extra.
    pub fn new(base: Duration, jitter_max: Duration) -> Self {
        Self { base, jitter_max }
    }

    /// Compute the next wait: `base + uniform_random(0..=jitter_max)`.
    pub fn next_wait<R: Rng>(&self, rng: &mut R) -> Duration {
        let jitter_ms = rng.gen_range(0..=self.jitter_max.as_millis() as u64);
        self.base + Duration::from_millis(jitter_ms)
    }
}
