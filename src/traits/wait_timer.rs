//! Asynchronous timer abstraction driving the polling schedule.
//!
//! The waiter never reads a clock: it only asks the timer to sleep for one
//! step between two evaluations. Any executor can therefore drive it by
//! implementing [`WaitTimer`] on top of its own sleep primitive.
//!
//! ```rust,ignore
//! use wait_for_predicate::WaitTimer;
//!
//! struct TokioTimer;
//!
//! impl WaitTimer for TokioTimer {
//!     async fn delay_ms(&mut self, millis: u32) {
//!         tokio::time::sleep(tokio::time::Duration::from_millis(millis as u64)).await;
//!     }
//! }
//! ```

/// Timer trait abstraction; must remain thread-safe when applicable.
pub trait WaitTimer {
    /// Asynchronously wait for `millis` milliseconds.
    fn delay_ms<'a>(&'a mut self, millis: u32) -> impl core::future::Future<Output = ()> + 'a;
}

/// [`WaitTimer`] backed by [`embassy_time::Timer`].
///
/// The final binary must provide an `embassy-time` driver (HAL time driver,
/// or the `std` driver on desktop).
#[cfg(feature = "embassy")]
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbassyTimer;

#[cfg(feature = "embassy")]
impl WaitTimer for EmbassyTimer {
    async fn delay_ms(&mut self, millis: u32) {
        embassy_time::Timer::after_millis(u64::from(millis)).await;
    }
}
