//! Error definitions shared across library modules.
//! [`InvalidArgument`] covers malformed inputs rejected before any timer
//! starts; [`WaitError`] is what a wait resolves to when it does not succeed.
use core::convert::Infallible;
use core::fmt::Debug;
use thiserror_no_std::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Preconditions violated by the caller. Never retried.
pub enum InvalidArgument {
    /// No predicate or no timeout was supplied.
    #[error("predicate and options.timeout must be defined")]
    Undefined,
    /// Timeout set to zero.
    #[error("options.timeout must be positive")]
    TimeoutNotPositive,
    /// Step (explicit or defaulted) set to zero.
    #[error("options.step must be positive")]
    StepNotPositive,
}

#[derive(Error, Debug)]
/// Reasons a wait did not end with the predicate succeeding.
pub enum WaitError<E: Debug = Infallible> {
    /// Inputs were rejected before polling started.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),

    /// The accumulated time reached the timeout.
    #[error("timeoutExpired")]
    TimeoutExpired,

    /// A fallible predicate returned an error; polling stopped there.
    #[error("predicate failed: {0:?}")]
    Predicate(E),
}

impl<E: Debug> WaitError<E> {
    /// `true` for [`WaitError::TimeoutExpired`].
    pub fn is_timeout(&self) -> bool {
        matches!(self, WaitError::TimeoutExpired)
    }

    /// Validation error carried by this wait error, if any.
    pub fn invalid_argument(&self) -> Option<InvalidArgument> {
        match self {
            WaitError::InvalidArgument(err) => Some(*err),
            _ => None,
        }
    }
}
