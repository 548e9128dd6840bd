//! Source of "now" for record timestamps.
//!
//! Writes take a `&dyn Clock` rather than reading the system time so that
//! stored timestamps are reproducible in tests.
use chrono::{NaiveDateTime, Utc};

/// Supplies the current time as a naive UTC timestamp.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// The wall clock, in UTC.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().naive_utc()
    }
}

/// A clock stopped at one instant.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
