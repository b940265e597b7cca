//! Publish the outcome of a wait on an [`embassy_sync::signal::Signal`].
//!
//! Firmware often runs the wait in one task and consumes the outcome in
//! another. The signal is pre-allocated by the firmware (typically a
//! `static`); the library performs no allocation. It is written exactly once
//! per wait, whatever the terminal path.
use embassy_sync::{blocking_mutex::raw::RawMutex, signal::Signal};

use crate::error::WaitError;
use crate::traits::{predicate::Predicate, wait_timer::WaitTimer};
use crate::waiter::PredicateWaiter;

/// Outcome carried by the signal.
pub type WaitResult<E> = Result<(), WaitError<E>>;

/// Signal type able to carry the outcome of a wait on `P`.
pub type WaitSignal<M, P> = Signal<M, WaitResult<<P as Predicate>::Error>>;

impl<P: Predicate> PredicateWaiter<P> {
    /// Run one wait and publish its outcome on `signal`.
    ///
    /// Any value still pending in the signal is replaced.
    pub async fn wait_and_signal<T, M>(&mut self, timer: &mut T, signal: &WaitSignal<M, P>)
    where
        T: WaitTimer,
        M: RawMutex,
        P::Error: Send,
    {
        let outcome = self.wait(timer).await;

        #[cfg(feature = "defmt")]
        defmt::info!("Publishing wait outcome: success={}", outcome.is_ok());

        signal.signal(outcome);
    }
}
