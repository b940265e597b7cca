//! `wait-for-predicate` library: poll a caller-supplied predicate at a fixed
//! step until it reports success or a timeout elapses, in a `no_std`
//! environment. The crate exposes the configuration types, the timer and
//! predicate abstractions, and the waiter itself.
#![no_std]
//==================================================================================
/// Configuration types and public constants shared by the waiter.
pub mod core;
/// Validation and waiting errors.
pub mod error;
/// Abstractions plugged into the waiter: timer and predicate.
pub mod traits;
/// Polling loop, builder, and one-shot outcome publication.
pub mod waiter;
//==================================================================================
pub use crate::core::{WaitOptions, WaitSchedule, DEFAULT_STEP_MS, TIMEOUT_EXPIRED};
pub use crate::error::{InvalidArgument, WaitError};
pub use crate::traits::predicate::{fallible, Fallible, Predicate, Truthy};
pub use crate::traits::wait_timer::WaitTimer;
#[cfg(feature = "embassy")]
pub use crate::traits::wait_timer::EmbassyTimer;
pub use crate::waiter::{wait_for_predicate, PredicateWaiter, PredicateWaiterBuilder};
