//! Polling loop: evaluate a predicate once per step until it succeeds or the
//! accumulated time reaches the timeout.
//!
//! Schedule of one wait:
//! 1. Validate inputs; nothing is scheduled when they are rejected.
//! 2. Sleep one step (there is no evaluation at `t = 0`).
//! 3. If the accumulated time reached the timeout, fail with
//!    [`WaitError::TimeoutExpired`].
//! 4. Otherwise evaluate the predicate once; stop on success.
//! 5. Add one step to the accumulated time and go back to 2.
//!
//! The timeout check comes before the evaluation on each tick, so a
//! predicate that never succeeds is evaluated `ceil(timeout / step)` times.
//! The pending delay is owned by the wait future and dropped on every exit
//! path, including a failing predicate.
use crate::core::{WaitOptions, WaitSchedule};
use crate::error::{InvalidArgument, WaitError};
use crate::traits::{predicate::Predicate, wait_timer::WaitTimer};

pub mod signal;

/// Predicate bound to a validated schedule.
pub struct PredicateWaiter<P: Predicate> {
    predicate: P,
    schedule: WaitSchedule,
}

impl<P: Predicate> PredicateWaiter<P> {
    /// Start a fluent builder.
    pub fn builder() -> PredicateWaiterBuilder<P> {
        PredicateWaiterBuilder::new()
    }

    /// Validate `options` and bind them to `predicate`.
    pub fn new(predicate: P, options: WaitOptions) -> Result<Self, InvalidArgument> {
        Self::builder()
            .predicate(predicate)
            .options(options)
            .build()
    }

    /// Validated timing parameters.
    #[inline]
    pub fn schedule(&self) -> WaitSchedule {
        self.schedule
    }

    /// Give the predicate back.
    pub fn into_predicate(self) -> P {
        self.predicate
    }

    /// Run one complete wait.
    ///
    /// May be called again after it returns; every call starts from zero
    /// elapsed time.
    ///
    /// # Errors
    ///
    /// - [`WaitError::TimeoutExpired`] when the timeout is reached first
    /// - [`WaitError::Predicate`] when a fallible predicate fails
    pub async fn wait<T: WaitTimer>(&mut self, timer: &mut T) -> Result<(), WaitError<P::Error>> {
        let timeout = u64::from(self.schedule.timeout_ms());
        let step = self.schedule.step_ms();
        let mut elapsed: u64 = 0;

        #[cfg(feature = "defmt")]
        defmt::debug!("Waiting for predicate: timeout={}ms step={}ms", timeout, step);

        loop {
            timer.delay_ms(step).await;

            if elapsed >= timeout {
                #[cfg(feature = "defmt")]
                defmt::warn!("Predicate wait expired after {}ms", elapsed);
                return Err(WaitError::TimeoutExpired);
            }

            #[cfg(feature = "defmt")]
            defmt::trace!("Evaluating predicate, elapsed={}ms", elapsed);

            match self.predicate.check() {
                Ok(true) => {
                    #[cfg(feature = "defmt")]
                    defmt::debug!("Predicate satisfied, elapsed={}ms", elapsed);
                    return Ok(());
                }
                Ok(false) => {}
                Err(err) => {
                    #[cfg(feature = "defmt")]
                    defmt::error!("Predicate evaluation failed, elapsed={}ms", elapsed);
                    return Err(WaitError::Predicate(err));
                }
            }

            elapsed += u64::from(step);
        }
    }
}

//==================================================================================BUILDER
/// Fluent builder collecting the predicate and its options.
///
/// Nothing is checked until [`build`](Self::build).
pub struct PredicateWaiterBuilder<P: Predicate> {
    pub predicate: Option<P>,
    pub options: WaitOptions,
}

impl<P: Predicate> Default for PredicateWaiterBuilder<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Predicate> PredicateWaiterBuilder<P> {
    /// Empty builder: no predicate, no timeout, default step.
    pub fn new() -> Self {
        Self {
            predicate: None,
            options: WaitOptions::default(),
        }
    }

    /// Condition to poll.
    pub fn predicate(mut self, predicate: P) -> Self {
        self.predicate = Some(predicate);
        self
    }

    /// Total time budget (ms).
    pub fn timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.options.timeout_ms = Some(timeout_ms);
        self
    }

    /// Interval between evaluations (ms).
    pub fn step_ms(mut self, step_ms: u32) -> Self {
        self.options.step_ms = Some(step_ms);
        self
    }

    /// Replace every option at once.
    pub fn options(mut self, options: WaitOptions) -> Self {
        self.options = options;
        self
    }

    /// Check the inputs, in this order: presence, timeout, step.
    pub fn build(self) -> Result<PredicateWaiter<P>, InvalidArgument> {
        let predicate = match (self.predicate, self.options.timeout_ms) {
            (Some(predicate), Some(_)) => predicate,
            _ => return Err(InvalidArgument::Undefined),
        };
        let schedule = self.options.validate()?;

        Ok(PredicateWaiter {
            predicate,
            schedule,
        })
    }
}

//==================================================================================ENTRY_POINT
/// Wait for `predicate` to succeed within `options.timeout_ms`.
///
/// Inputs are validated before the timer is touched; a rejected call never
/// evaluates the predicate.
///
/// # Example
///
/// ```rust,ignore
/// use wait_for_predicate::{wait_for_predicate, WaitOptions};
///
/// let ready = AtomicBool::new(false);
/// wait_for_predicate(
///     &mut timer,
///     Some(|| ready.load(Ordering::Acquire)),
///     WaitOptions::with_timeout(10_000).step(500),
/// )
/// .await?;
/// ```
pub async fn wait_for_predicate<T, P>(
    timer: &mut T,
    predicate: Option<P>,
    options: WaitOptions,
) -> Result<(), WaitError<P::Error>>
where
    T: WaitTimer,
    P: Predicate,
{
    let mut builder = PredicateWaiter::builder().options(options);
    builder.predicate = predicate;
    let mut waiter = builder.build()?;
    waiter.wait(timer).await
}
