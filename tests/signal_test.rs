//! Outcome publication: a consumer awaiting the signal receives exactly what
//! the wait resolved to.
mod helpers;

use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::signal::Signal;
use futures_util::future::join;
use helpers::MockTimer;
use static_cell::StaticCell;
use std::sync::atomic::{AtomicU32, Ordering};
use wait_for_predicate::waiter::signal::WaitResult;
use wait_for_predicate::{fallible, PredicateWaiter, WaitError, WaitOptions};

static OUTCOME: StaticCell<Signal<NoopRawMutex, WaitResult<core::convert::Infallible>>> =
    StaticCell::new();

#[tokio::test(start_paused = true)]
async fn test_signal_receives_success() {
    let outcome = OUTCOME.init(Signal::new());
    let ticks = AtomicU32::new(0);

    let mut waiter = PredicateWaiter::new(
        || ticks.fetch_add(1, Ordering::SeqCst) >= 2,
        WaitOptions::with_timeout(1000).step(100),
    )
    .expect("valid options");

    let ((), received) = join(
        waiter.wait_and_signal(&mut MockTimer, &*outcome),
        outcome.wait(),
    )
    .await;

    assert!(received.is_ok());
    assert!(!outcome.signaled(), "the outcome is taken by the consumer");
    drop(waiter);
    assert_eq!(ticks.load(Ordering::SeqCst), 3);
}

#[tokio::test(start_paused = true)]
async fn test_signal_receives_timeout() {
    let outcome: Signal<NoopRawMutex, WaitResult<_>> = Signal::new();
    let mut waiter = PredicateWaiter::new(|| false, WaitOptions::with_timeout(300).step(100))
        .expect("valid options");

    let ((), received) = join(
        waiter.wait_and_signal(&mut MockTimer, &outcome),
        outcome.wait(),
    )
    .await;

    assert!(matches!(received, Err(WaitError::TimeoutExpired)));
}

#[tokio::test(start_paused = true)]
async fn test_signal_receives_predicate_error() {
    let outcome: Signal<NoopRawMutex, WaitResult<&'static str>> = Signal::new();
    let mut waiter = PredicateWaiter::new(
        fallible(|| Err::<bool, _>("link down")),
        WaitOptions::with_timeout(300).step(100),
    )
    .expect("valid options");

    waiter.wait_and_signal(&mut MockTimer, &outcome).await;

    assert!(outcome.signaled());
    let received = outcome.wait().await;
    assert!(matches!(received, Err(WaitError::Predicate("link down"))));
}
