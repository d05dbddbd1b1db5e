//! Human-readable messages built from an aggregator balance.
//!
//! Reporters never fail: unknown currencies and exhausted budgets are ordinary
//! report variants whose `Display` output is the message shown to the user.

pub mod calories;
pub mod cash;

use std::fmt;

use chrono::NaiveDate;

use crate::ledger::Aggregator;

pub use calories::{CaloriesReport, CaloriesReporter};
pub use cash::{CashReport, CashReporter};

/// Turns a balance (`limit - today's total`) into a report.
pub trait Reporter {
    type Report: fmt::Display;

    fn report(&self, balance: f64) -> Self::Report;

    /// Reports on `aggregator` as of `today`.
    fn report_on(&self, aggregator: &Aggregator, today: NaiveDate) -> Self::Report {
        self.report(aggregator.balance(today))
    }
}

/// How much money is left today, expressed in the currency named by `currency`.
pub fn today_cash_remained(
    aggregator: &Aggregator,
    today: NaiveDate,
    currency: &str,
) -> CashReport {
    CashReporter::new(currency).report_on(aggregator, today)
}

/// How many calories may still be eaten today.
pub fn calories_remained(aggregator: &Aggregator, today: NaiveDate) -> CaloriesReport {
    CaloriesReporter.report_on(aggregator, today)
}
