//! # Quickstart Example
//!
//! Minimal example demonstrating the basics of wait-for-predicate:
//! - Plug a timer into the waiter
//! - Wait for a flag raised by another task
//! - Tell a timeout apart from a validation error
//!
//! This example uses `std` and Tokio for a quick trial run.
//!
//! ```bash
//! cargo run --example quickstart
//! ```

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;

use tokio::time::{sleep, Duration, Instant};
use wait_for_predicate::{
    fallible, wait_for_predicate, PredicateWaiter, WaitOptions, WaitTimer, TIMEOUT_EXPIRED,
};

/// Timer driven by the Tokio runtime.
struct TokioTimer;

impl WaitTimer for TokioTimer {
    async fn delay_ms(&mut self, millis: u32) {
        sleep(Duration::from_millis(millis as u64)).await;
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    println!("=== wait-for-predicate Quickstart ===\n");

    // ======================================================================
    // 1. Wait for a flag raised by another task
    // ======================================================================
    println!("1. Waiting for a flag raised after 1.2 s (step 250 ms)");

    let ready = Arc::new(AtomicBool::new(false));
    let setter = Arc::clone(&ready);
    tokio::spawn(async move {
        sleep(Duration::from_millis(1_200)).await;
        setter.store(true, Ordering::Release);
    });

    let checks = AtomicU32::new(0);
    let start = Instant::now();
    let result = wait_for_predicate(
        &mut TokioTimer,
        Some(|| {
            checks.fetch_add(1, Ordering::Relaxed);
            ready.load(Ordering::Acquire)
        }),
        WaitOptions::with_timeout(5_000).step(250),
    )
    .await;

    println!(
        "   Result: {:?} after {:?}, {} checks\n",
        result,
        start.elapsed(),
        checks.load(Ordering::Relaxed)
    );

    // ======================================================================
    // 2. Let a wait expire
    // ======================================================================
    println!("2. Waiting for a condition that never holds (timeout 600 ms)");

    let mut waiter = PredicateWaiter::builder()
        .predicate(|| false)
        .timeout_ms(600)
        .step_ms(200)
        .build()
        .expect("options are valid");

    match waiter.wait(&mut TokioTimer).await {
        Ok(()) => println!("   Unexpected success\n"),
        Err(err) => println!(
            "   Error: {} (timeout: {})\n",
            err,
            err.to_string() == TIMEOUT_EXPIRED
        ),
    }

    // ======================================================================
    // 3. Validation errors and failing predicates
    // ======================================================================
    println!("3. Rejected inputs and failing predicates");

    let rejected = wait_for_predicate(
        &mut TokioTimer,
        Some(|| true),
        WaitOptions::with_timeout(1_000).step(0),
    )
    .await;
    if let Err(err) = rejected {
        println!("   Validation: {}", err);
    }

    let mut reads = 0u8;
    let failing = wait_for_predicate(
        &mut TokioTimer,
        Some(fallible(|| {
            reads += 1;
            if reads < 2 {
                Ok(false)
            } else {
                Err("sensor offline")
            }
        })),
        WaitOptions::with_timeout(1_000).step(100),
    )
    .await;
    if let Err(err) = failing {
        println!("   Predicate: {}", err);
    }
}
