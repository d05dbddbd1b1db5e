use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;

use super::aggregator::Aggregator;
use super::entry::Entry;

/// Cloneable handle to an [`Aggregator`] shared across threads.
///
/// Appends take the write lock; sums iterate the entry list under the read lock.
#[derive(Debug, Clone, Default)]
pub struct SharedAggregator {
    inner: Arc<RwLock<Aggregator>>,
}

impl SharedAggregator {
    pub fn new(limit: f64) -> Self {
        Self::from(Aggregator::new(limit))
    }

    pub fn add_record(&self, entry: Entry) {
        self.write().add_record(entry);
    }

    pub fn stats(&self, days: u32, today: NaiveDate) -> f64 {
        self.read().stats(days, today)
    }

    pub fn today_stats(&self, today: NaiveDate) -> f64 {
        self.read().today_stats(today)
    }

    pub fn week_stats(&self, today: NaiveDate) -> f64 {
        self.read().week_stats(today)
    }

    pub fn balance(&self, today: NaiveDate) -> f64 {
        self.read().balance(today)
    }

    /// Copy of the aggregator as it is right now.
    pub fn snapshot(&self) -> Aggregator {
        self.read().clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, Aggregator> {
        // Entries are pushed whole, so a poisoned lock still guards a consistent list.
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Aggregator> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Aggregator> for SharedAggregator {
    fn from(aggregator: Aggregator) -> Self {
        Self {
            inner: Arc::new(RwLock::new(aggregator)),
        }
    }
}
