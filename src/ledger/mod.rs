//! Dated entries, the summing aggregator, and the date windows it sums over.

pub mod aggregator;
pub mod entry;
pub mod shared;
pub mod window;

pub use aggregator::{Aggregator, TODAY_DAYS, WEEK_DAYS};
pub use entry::{Entry, DATE_FORMAT};
pub use shared::SharedAggregator;
pub use window::DateWindow;
