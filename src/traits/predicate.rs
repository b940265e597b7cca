//! Predicate abstraction: anything the waiter can evaluate once per tick.
//!
//! Two shapes are accepted:
//!
//! * plain closures `FnMut() -> R` where `R: Truthy` (never fail);
//! * fallible closures `FnMut() -> Result<R, E>` wrapped with [`fallible`],
//!   whose error stops the wait and is handed back to the caller.
//!
//! A value that is not callable cannot be used as a predicate at all:
//!
//! ```compile_fail
//! use wait_for_predicate::{PredicateWaiter, WaitOptions};
//!
//! let _ = PredicateWaiter::new(true, WaitOptions::with_timeout(5000));
//! ```
use core::convert::Infallible;
use core::fmt::Debug;

/// Conversion of a predicate result into a success flag.
pub trait Truthy {
    /// `true` when the value counts as a success.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl<T> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.is_some()
    }
}

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

macro_rules! truthy_non_zero {
    ($($ty:ty),*) => {
        $(
            impl Truthy for $ty {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

truthy_non_zero!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! truthy_float {
    ($($ty:ty),*) => {
        $(
            impl Truthy for $ty {
                #[inline]
                fn is_truthy(&self) -> bool {
                    // NaN compares unequal to zero but is falsy.
                    *self != 0.0 && !self.is_nan()
                }
            }
        )*
    };
}

truthy_float!(f32, f64);

/// Condition polled by the waiter.
pub trait Predicate {
    /// Error produced by a failing evaluation.
    type Error: Debug;

    /// Evaluate the condition once.
    fn check(&mut self) -> Result<bool, Self::Error>;
}

impl<F, R> Predicate for F
where
    F: FnMut() -> R,
    R: Truthy,
{
    type Error = Infallible;

    #[inline]
    fn check(&mut self) -> Result<bool, Self::Error> {
        Ok(self().is_truthy())
    }
}

/// Predicate whose evaluation may fail. Built with [`fallible`].
pub struct Fallible<F>(F);

/// Wrap a closure returning `Result<R, E>` so it can be polled.
///
/// ```rust,ignore
/// let predicate = fallible(|| sensor.read().map(|level| level > THRESHOLD));
/// ```
pub fn fallible<F, R, E>(f: F) -> Fallible<F>
where
    F: FnMut() -> Result<R, E>,
    R: Truthy,
    E: Debug,
{
    Fallible(f)
}

impl<F, R, E> Predicate for Fallible<F>
where
    F: FnMut() -> Result<R, E>,
    R: Truthy,
    E: Debug,
{
    type Error = E;

    #[inline]
    fn check(&mut self) -> Result<bool, Self::Error> {
        (self.0)().map(|value| value.is_truthy())
    }
}

#[cfg(test)]
mod tests;
