#![allow(dead_code)]

use chrono::NaiveDate;
use daily_limit::{Aggregator, Entry, FixedClock};

/// Reference "today" shared by the integration suites.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 8, 30).unwrap()
}

pub fn clock() -> FixedClock {
    FixedClock::new(today())
}

pub fn days_ago(days: u64) -> NaiveDate {
    today() - chrono::Days::new(days)
}

/// Aggregator holding one entry dated today.
pub fn aggregator_with_today(limit: f64, amount: f64) -> Aggregator {
    let mut aggregator = Aggregator::new(limit);
    aggregator.add_record(Entry::on(amount, "today", today()));
    aggregator
}
