//! Calendar clock
//!
//! Scheduling works in calendar days. "Today" comes from a [`Clock`] so the
//! service can be driven deterministically in tests.

use chrono::{Local, NaiveDate};

pub trait Clock: Send + Sync {
    /// Current calendar date (no time-of-day component)
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date of the host
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always returns the same date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
