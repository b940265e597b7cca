//! Test doubles to drive the waiter during integration tests.
use std::sync::atomic::{AtomicU32, Ordering};
use tokio::time::{sleep, Duration};
use wait_for_predicate::WaitTimer;

#[allow(dead_code)]
/// Timer based on `tokio::time::sleep` to drive delays in tests.
pub struct MockTimer;

impl WaitTimer for MockTimer {
    async fn delay_ms(&mut self, millis: u32) {
        sleep(Duration::from_millis(millis as u64)).await;
    }
}

#[allow(dead_code)]
/// Timer that only counts the delays it is asked for, without sleeping.
#[derive(Default)]
pub struct CountingTimer {
    pub delays: u32,
}

impl WaitTimer for CountingTimer {
    async fn delay_ms(&mut self, _millis: u32) {
        self.delays += 1;
    }
}

#[allow(dead_code)]
/// Wrap `check` so that every evaluation increments `calls`.
pub fn counting<'a, F>(calls: &'a AtomicU32, mut check: F) -> impl FnMut() -> bool + 'a
where
    F: FnMut() -> bool + 'a,
{
    move || {
        calls.fetch_add(1, Ordering::SeqCst);
        check()
    }
}

#[allow(dead_code)]
/// Assert that `start.elapsed()` equals `expected_ms`, allowing for the
/// millisecond rounding of the Tokio timer wheel.
pub fn assert_elapsed(start: tokio::time::Instant, expected_ms: u64) {
    let elapsed = start.elapsed();
    let expected = Duration::from_millis(expected_ms);
    assert!(
        elapsed >= expected && elapsed < expected + Duration::from_millis(10),
        "expected ~{:?}, got {:?}",
        expected,
        elapsed
    );
}
