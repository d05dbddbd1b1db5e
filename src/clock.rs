use chrono::{Local, NaiveDate};

/// Clock abstracts access to the current date so queries remain deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the calendar date to treat as "today".
    fn today(&self) -> NaiveDate;
}

/// Real-time clock. Dates follow the local calendar so "today" matches the user's wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }
}
