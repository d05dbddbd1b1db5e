#![doc(test(attr(deny(warnings))))]

//! Daily Limit tracks dated spending entries against a daily ceiling and reports
//! what is left for today, either as cash in a chosen currency or as calories.

pub mod clock;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod report;
pub mod utils;

pub use clock::{Clock, FixedClock, SystemClock};
pub use currency::Currency;
pub use errors::EntryError;
pub use ledger::{Aggregator, DateWindow, Entry, SharedAggregator};
pub use report::{
    calories_remained, today_cash_remained, CaloriesReport, CaloriesReporter, CashReport,
    CashReporter, Reporter,
};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Daily Limit tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
