//! Abstraction traits plugged into the waiter (timer and predicate).
pub mod predicate;
pub mod wait_timer;
