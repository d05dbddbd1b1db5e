use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::clock::{Clock, SystemClock};
use crate::errors::EntryError;

/// Textual date format accepted by [`Entry::parse`], e.g. `21.08.2020`.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// One recorded amount (money or calories) with a free-text comment.
///
/// Entries are immutable once built; the aggregator only ever reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    amount: f64,
    comment: String,
    date: NaiveDate,
}

impl Entry {
    /// Creates an entry dated today according to the system clock.
    pub fn new(amount: f64, comment: impl Into<String>) -> Self {
        Self::on(amount, comment, SystemClock.today())
    }

    /// Creates an entry for an already resolved calendar date.
    pub fn on(amount: f64, comment: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            amount,
            comment: comment.into(),
            date,
        }
    }

    /// Creates an entry from an optional `DD.MM.YYYY` date, defaulting to today.
    pub fn parse(
        amount: f64,
        comment: impl Into<String>,
        date: Option<&str>,
    ) -> Result<Self, EntryError> {
        Self::parse_with(amount, comment, date, &SystemClock)
    }

    /// Same as [`Entry::parse`], resolving the default date from `clock`.
    pub fn parse_with(
        amount: f64,
        comment: impl Into<String>,
        date: Option<&str>,
        clock: &dyn Clock,
    ) -> Result<Self, EntryError> {
        let date = match date {
            Some(text) => parse_date(text)?,
            None => clock.today(),
        };
        Ok(Self::on(amount, comment, date))
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Parses a `DD.MM.YYYY` date string.
///
/// The input must be exactly two digits, a dot, two digits, a dot and four digits.
pub fn parse_date(input: &str) -> Result<NaiveDate, EntryError> {
    if !has_date_shape(input) {
        return Err(EntryError::InvalidDate {
            input: input.to_string(),
            source: None,
        });
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|source| EntryError::InvalidDate {
        input: input.to_string(),
        source: Some(source),
    })
}

// chrono's `%Y` takes any digit count and a sign, so the layout is checked up front.
fn has_date_shape(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(idx, byte)| match idx {
            2 | 5 => *byte == b'.',
            _ => byte.is_ascii_digit(),
        })
}
