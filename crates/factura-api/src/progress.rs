//! Simulated upload progress.
//!
//! The counter is a cosmetic estimate driven purely by time: it has no
//! causal link to how many items have actually been extracted. Each batch
//! owns its own counter; `read` reports the most recently started batch, so
//! overlapping batches each stay internally monotone instead of interleaving
//! writes into one shared cell.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

const TOTAL_STEPS: u8 = 100;

/// Process-wide progress handle, cheap to clone into handlers and batches.
#[derive(Clone)]
pub struct ProgressTracker {
    current: Arc<Mutex<Arc<AtomicU8>>>,
    tick: Duration,
}

impl ProgressTracker {
    pub fn new(tick: Duration) -> Self {
        Self {
            current: Arc::new(Mutex::new(Arc::new(AtomicU8::new(0)))),
            tick,
        }
    }

    /// Reset progress to 0 and hand out the advance handle for a new batch.
    pub fn start_batch(&self) -> ProgressAdvance {
        let counter = Arc::new(AtomicU8::new(0));
        *self
            .current
            .lock()
            .expect("progress lock poisoned") = counter.clone();
        ProgressAdvance {
            counter,
            tick: self.tick,
        }
    }

    /// Current value of the most recently started batch, 0-100.
    pub fn read(&self) -> u8 {
        self.current
            .lock()
            .expect("progress lock poisoned")
            .load(Ordering::Relaxed)
    }
}

/// Drives one batch's simulated advance: 100 steps of one tick each
/// (~2 seconds at the default 20 ms tick).
pub struct ProgressAdvance {
    counter: Arc<AtomicU8>,
    tick: Duration,
}

impl ProgressAdvance {
    pub async fn run(self) {
        for step in 1..=TOTAL_STEPS {
            self.counter.store(step, Ordering::Relaxed);
            tokio::time::sleep(self.tick).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_is_zero_before_any_batch() {
        let tracker = ProgressTracker::new(Duration::from_millis(1));
        assert_eq!(tracker.read(), 0);
    }

    #[tokio::test]
    async fn test_advance_is_monotone_and_reaches_100() {
        let tracker = ProgressTracker::new(Duration::from_millis(1));
        let advance = tokio::spawn(tracker.start_batch().run());

        let mut last = 0;
        while last < TOTAL_STEPS {
            let value = tracker.read();
            assert!(value >= last, "progress went backwards: {} -> {}", last, value);
            last = value;
            tokio::time::sleep(Duration::from_millis(2)).await;
        }

        advance.await.expect("advance task");
        assert_eq!(tracker.read(), 100);
    }

    #[tokio::test]
    async fn test_new_batch_resets_to_zero() {
        let tracker = ProgressTracker::new(Duration::from_millis(1));
        tracker.start_batch().run().await;
        assert_eq!(tracker.read(), 100);

        let _advance = tracker.start_batch();
        assert_eq!(tracker.read(), 0);
    }

    #[tokio::test]
    async fn test_overlapping_batches_read_the_newest() {
        let tracker = ProgressTracker::new(Duration::from_millis(1));
        let first = tokio::spawn(tracker.start_batch().run());

        tokio::time::sleep(Duration::from_millis(10)).await;
        let _second = tracker.start_batch();
        // The new batch owns the read slot and starts from zero; the first
        // batch's advance keeps running without affecting it.
        assert_eq!(tracker.read(), 0);

        first.await.expect("first advance");
        assert_eq!(tracker.read(), 0);
    }
}
