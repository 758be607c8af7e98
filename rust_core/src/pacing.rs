//! Outbound call pacing for the upstream stats source.
//!
//! Every call waits a fixed pause before it is sent, and no two calls start
//! closer together than that pause. The second rule keeps the courtesy delay
//! intact when fetches are dispatched concurrently. There is no retry or
//! backoff here: a failed call is simply reported by its caller.

use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::trace;

/// Default pause before each upstream call.
pub const DEFAULT_CALL_PAUSE: Duration = Duration::from_secs(1);

/// Fixed-interval pacer shared by all calls to one upstream host.
#[derive(Debug)]
pub struct CallPacer {
    pause: Duration,
    /// Start slot granted to the most recent call
    last_slot: Mutex<Option<Instant>>,
}

impl CallPacer {
    pub fn new(pause: Duration) -> Self {
        Self {
            pause,
            last_slot: Mutex::new(None),
        }
    }

    /// Pacer that never waits (tests, offline sources).
    pub fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn pause(&self) -> Duration {
        self.pause
    }

    /// Reserve the next start slot and sleep until it arrives.
    ///
    /// The lock is held only while reserving, never across the sleep.
    pub async fn wait(&self) {
        if self.pause.is_zero() {
            return;
        }

        let slot = {
            let mut last = self.last_slot.lock().await;
            let earliest = Instant::now() + self.pause;
            let slot = match *last {
                Some(prev) => earliest.max(prev + self.pause),
                None => earliest,
            };
            *last = Some(slot);
            slot
        };

        trace!(
            "Pacing upstream call for {:?}",
            slot.saturating_duration_since(Instant::now())
        );
        tokio::time::sleep_until(slot).await;
    }
}

impl Default for CallPacer {
    fn default() -> Self {
        Self::new(DEFAULT_CALL_PAUSE)
    }
}
