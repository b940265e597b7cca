//! Defines the configuration accepted by the waiter and the values it
//! validates into.
//!
//! [`WaitOptions`] mirrors what a caller hands over (every field may be
//! absent). [`WaitSchedule`] is what the polling loop consumes once the
//! options passed validation.
use crate::error::InvalidArgument;

/// Step applied when [`WaitOptions::step_ms`] is left unset (ms).
pub const DEFAULT_STEP_MS: u32 = 1000;

/// Display text of [`WaitError::TimeoutExpired`](crate::error::WaitError::TimeoutExpired).
///
/// Callers that only see the rendered error can compare against this constant
/// to tell a timeout apart from a validation failure.
pub const TIMEOUT_EXPIRED: &str = "timeoutExpired";

/// Raw wait configuration, in milliseconds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WaitOptions {
    /// Total time budget. Mandatory.
    pub timeout_ms: Option<u32>,
    /// Interval between two predicate evaluations. Defaults to [`DEFAULT_STEP_MS`].
    pub step_ms: Option<u32>,
}

impl WaitOptions {
    /// Options with the given timeout and the default step.
    pub const fn with_timeout(timeout_ms: u32) -> Self {
        Self {
            timeout_ms: Some(timeout_ms),
            step_ms: None,
        }
    }

    /// Override the step.
    pub const fn step(mut self, step_ms: u32) -> Self {
        self.step_ms = Some(step_ms);
        self
    }

    /// Validate the options, applying the default step.
    ///
    /// Only the timeout presence is checked here; the predicate presence is
    /// checked by the caller before this runs.
    pub fn validate(&self) -> Result<WaitSchedule, InvalidArgument> {
        let timeout_ms = self.timeout_ms.ok_or(InvalidArgument::Undefined)?;
        if timeout_ms == 0 {
            return Err(InvalidArgument::TimeoutNotPositive);
        }

        let step_ms = self.step_ms.unwrap_or(DEFAULT_STEP_MS);
        if step_ms == 0 {
            return Err(InvalidArgument::StepNotPositive);
        }

        Ok(WaitSchedule {
            timeout_ms,
            step_ms,
        })
    }
}

/// Validated timing parameters: both values are strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WaitSchedule {
    timeout_ms: u32,
    step_ms: u32,
}

impl WaitSchedule {
    /// Total time budget (ms).
    #[inline]
    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }

    /// Interval between evaluations (ms).
    #[inline]
    pub fn step_ms(&self) -> u32 {
        self.step_ms
    }

    /// Number of predicate evaluations performed before the wait expires when
    /// the predicate never succeeds: `ceil(timeout / step)`.
    pub fn max_evaluations(&self) -> u32 {
        self.timeout_ms.div_ceil(self.step_ms)
    }
}
