use thiserror::Error;

/// Error type raised while building ledger entries.
#[derive(Debug, Error)]
pub enum EntryError {
    /// `source` is set when the layout matched but chrono rejected the date itself.
    #[error("Invalid date '{input}', expected DD.MM.YYYY")]
    InvalidDate {
        input: String,
        #[source]
        source: Option<chrono::ParseError>,
    },
}
