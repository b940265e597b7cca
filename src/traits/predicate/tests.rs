//! Unit tests for `Truthy` conversions and the `Predicate` implementations.
use super::*;

//==================================================================================TRUTHY
#[test]
/// Booleans and options map directly.
fn test_bool_and_option() {
    assert!(true.is_truthy());
    assert!(!false.is_truthy());
    assert!(Some(0u8).is_truthy());
    assert!(!None::<u8>.is_truthy());
}

#[test]
/// Numbers are truthy when non-zero; NaN is falsy.
fn test_numbers() {
    assert!(1u32.is_truthy());
    assert!((-1i64).is_truthy());
    assert!(!0usize.is_truthy());
    assert!(0.5f32.is_truthy());
    assert!(!0.0f64.is_truthy());
    assert!(!(-0.0f64).is_truthy());
    assert!(!f64::NAN.is_truthy());
}

#[test]
/// Strings are truthy when non-empty, through any number of references.
fn test_strings_and_references() {
    assert!("ready".is_truthy());
    assert!(!"".is_truthy());
    let flag = true;
    let by_ref = &&flag;
    assert!(by_ref.is_truthy());
}

//==================================================================================PREDICATE
#[test]
/// Closures are evaluated on every `check` call and keep their own state.
fn test_closure_predicate() {
    let mut calls = 0u32;
    let mut predicate = || {
        calls += 1;
        calls >= 2
    };
    assert_eq!(predicate.check(), Ok(false));
    assert_eq!(predicate.check(), Ok(true));
    drop(predicate);
    assert_eq!(calls, 2);
}

#[test]
/// Closures returning options are polled through `Truthy`.
fn test_closure_returning_option() {
    let mut slot: Option<u8> = None;
    assert_eq!((|| slot).check(), Ok(false));
    slot = Some(7);
    assert_eq!((|| slot).check(), Ok(true));
}

#[test]
/// Fallible predicates forward both the value and the error.
fn test_fallible_predicate() {
    let mut readings = [Ok(0u16), Ok(3), Err("sensor offline")].into_iter();
    let mut predicate = fallible(move || readings.next().unwrap_or(Err("exhausted")));

    assert_eq!(predicate.check(), Ok(false));
    assert_eq!(predicate.check(), Ok(true));
    assert_eq!(predicate.check(), Err("sensor offline"));
}
