//! Error code related to data collection.

use thiserror::Error;

/// A type alias for handling collection-related errors.
pub type CollectionResult<T> = std::result::Result<T, CollectionError>;

/// The errors that can happen while sampling the CPU counters.
#[derive(Debug, Error)]
pub enum CollectionError {
    /// The counter source could not be opened.
    #[error(transparent)]
    InvalidIo(std::io::Error),
    /// The stream had no first line to read counters from.
    #[error("no data to read counters from")]
    EmptyInput,
    /// A named counter was missing or was not a valid unsigned integer.
    #[error("failed to parse the '{0}' counter")]
    FieldParse(&'static str),
    /// The stream reported an error part-way through reading.
    #[error("failed to read counter stream, {0}")]
    StreamRead(#[source] std::io::Error),
}

impl CollectionError {
    /// Returns the name of the counter that failed to parse, if that is what
    /// went wrong.
    pub fn counter(&self) -> Option<&'static str> {
        match self {
            CollectionError::FieldParse(name) => Some(*name),
            _ => None,
        }
    }
}
