//! Inter-probe pacing.
//!
//! The scan deliberately throttles itself between ports so it does not
//! overwhelm the target or trip rate-limiting defenses. A token bucket with
//! one token per interval gives the same spacing as a fixed sleep while
//! letting the first port start immediately.

use governor::{Quota, RateLimiter as GovLimiter};
use nonzero_ext::nonzero;
use std::sync::Arc;
use std::time::Duration;

type DirectLimiter = GovLimiter<
    governor::state::NotKeyed,
    governor::state::InMemoryState,
    governor::clock::DefaultClock,
>;

/// Paces the scan loop: one permit per configured interval.
pub struct Pacer {
    limiter: Arc<DirectLimiter>,
}

impl Pacer {
    /// Create a pacer releasing one permit per `interval`.
    ///
    /// Returns `None` for a zero interval, meaning pacing is disabled.
    pub fn from_interval(interval: Duration) -> Option<Self> {
        let quota = Quota::with_period(interval)?.allow_burst(nonzero!(1u32));
        Some(Self {
            limiter: Arc::new(GovLimiter::direct(quota)),
        })
    }

    /// Wait until the next permit is available.
    pub async fn wait(&self) {
        self.limiter.until_ready().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_interval_disables_pacing() {
        assert!(Pacer::from_interval(Duration::ZERO).is_none());
    }

    #[tokio::test]
    async fn test_first_permit_is_immediate() {
        let pacer = Pacer::from_interval(Duration::from_secs(60)).unwrap();
        // Burst of one: the first wait must not block.
        tokio::time::timeout(Duration::from_millis(100), pacer.wait())
            .await
            .expect("first permit should be immediate");
    }

    #[tokio::test]
    async fn test_permits_are_spaced() {
        let pacer = Pacer::from_interval(Duration::from_millis(20)).unwrap();
        pacer.wait().await;
        let start = std::time::Instant::now();
        pacer.wait().await;
        assert!(start.elapsed() >= Duration::from_millis(10));
    }
}
