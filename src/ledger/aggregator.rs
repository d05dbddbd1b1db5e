use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::clock::Clock;

use super::entry::Entry;
use super::window::DateWindow;

/// Window size for "today only".
pub const TODAY_DAYS: u32 = 0;
/// Window size for the trailing seven days, today included.
pub const WEEK_DAYS: u32 = 6;

/// Holds a daily limit and every recorded entry, and sums them over date windows.
///
/// Every query takes the calendar date to treat as "today"; nothing is cached, so the
/// balance is always recomputed from the current entry list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregator {
    limit: f64,
    entries: Vec<Entry>,
}

impl Aggregator {
    pub fn new(limit: f64) -> Self {
        Self {
            limit,
            entries: Vec::new(),
        }
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Appends an entry. Amount and date are accepted as-is, future dates included.
    pub fn add_record(&mut self, entry: Entry) {
        debug!(
            amount = entry.amount(),
            date = %entry.date(),
            comment = entry.comment(),
            "recording entry"
        );
        self.entries.push(entry);
    }

    /// Sum of amounts dated within `[today - days, today]`.
    pub fn stats(&self, days: u32, today: NaiveDate) -> f64 {
        self.sum_window(DateWindow::trailing(today, days))
    }

    pub fn sum_window(&self, window: DateWindow) -> f64 {
        let total: f64 = self
            .entries
            .iter()
            .filter(|entry| window.contains(entry.date()))
            .map(Entry::amount)
            .sum();
        trace!(start = %window.start, end = %window.end, total, "summed window");
        total
    }

    pub fn today_stats(&self, today: NaiveDate) -> f64 {
        self.stats(TODAY_DAYS, today)
    }

    pub fn week_stats(&self, today: NaiveDate) -> f64 {
        self.stats(WEEK_DAYS, today)
    }

    /// `limit - today_stats(today)`; negative once the limit is exceeded.
    pub fn balance(&self, today: NaiveDate) -> f64 {
        self.limit - self.today_stats(today)
    }

    pub fn today_stats_with(&self, clock: &dyn Clock) -> f64 {
        self.today_stats(clock.today())
    }

    pub fn week_stats_with(&self, clock: &dyn Clock) -> f64 {
        self.week_stats(clock.today())
    }

    pub fn balance_with(&self, clock: &dyn Clock) -> f64 {
        self.balance(clock.today())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_aggregator_balance_is_limit() {
        let aggregator = Aggregator::new(1000.0);
        let today = date(2020, 8, 30);
        assert_eq!(aggregator.today_stats(today), 0.0);
        assert_eq!(aggregator.week_stats(today), 0.0);
        assert_eq!(aggregator.balance(today), 1000.0);
    }

    #[test]
    fn week_includes_sixth_day_back_only() {
        let today = date(2020, 8, 30);
        let mut aggregator = Aggregator::new(1000.0);
        aggregator.add_record(Entry::on(10.0, "six days back", date(2020, 8, 24)));
        aggregator.add_record(Entry::on(1000.0, "seven days back", date(2020, 8, 23)));
        aggregator.add_record(Entry::on(5.0, "today", today));

        assert_eq!(aggregator.week_stats(today), 15.0);
        assert_eq!(aggregator.today_stats(today), 5.0);
    }

    #[test]
    fn future_entries_are_ignored() {
        let today = date(2020, 8, 30);
        let mut aggregator = Aggregator::new(100.0);
        aggregator.add_record(Entry::on(40.0, "tomorrow", date(2020, 8, 31)));
        assert_eq!(aggregator.week_stats(today), 0.0);
        assert_eq!(aggregator.balance(today), 100.0);
    }

    #[test]
    fn negative_amounts_raise_balance() {
        let today = date(2020, 8, 30);
        let mut aggregator = Aggregator::new(100.0);
        aggregator.add_record(Entry::on(-25.0, "refund", today));
        assert_eq!(aggregator.balance(today), 125.0);
    }

    #[test]
    fn today_moves_with_the_query_date() {
        let mut aggregator = Aggregator::new(100.0);
        aggregator.add_record(Entry::on(60.0, "lunch", date(2020, 8, 30)));

        assert_eq!(aggregator.balance(date(2020, 8, 30)), 40.0);
        assert_eq!(aggregator.balance(date(2020, 8, 31)), 100.0);
        assert_eq!(aggregator.week_stats(date(2020, 9, 5)), 60.0);
        assert_eq!(aggregator.week_stats(date(2020, 9, 6)), 0.0);
    }

    #[test]
    fn clock_queries_match_explicit_date() {
        let today = date(2020, 8, 30);
        let clock = FixedClock::new(today);
        let mut aggregator = Aggregator::new(300.0);
        aggregator.add_record(Entry::on(100.0, "a", today));
        aggregator.add_record(Entry::on(50.0, "b", date(2020, 8, 28)));

        assert_eq!(aggregator.today_stats_with(&clock), aggregator.today_stats(today));
        assert_eq!(aggregator.week_stats_with(&clock), 150.0);
        assert_eq!(aggregator.balance_with(&clock), 200.0);
    }
}
