//! Errors raised while building a where condition.
//!
//! Builders receive input that must already have passed validation, so these
//! errors signal a caller that skipped the `is_error` gate rather than a user
//! mistake.

use crate::parsing::{DateValue, ParseError};

/// Result type for condition building.
pub type QueryResult<T> = Result<T, QueryError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QueryError {
    /// A field could not be parsed.
    #[error("Unvalidated {field} in search query: {source}")]
    InvalidField {
        field: &'static str,
        #[source]
        source: ParseError,
    },

    /// An observation night range whose start is after its end.
    #[error("Observation night range starts after it ends: {start} .. {end}")]
    ReversedDateRange { start: DateValue, end: DateValue },

    /// A date whose night boundary cannot be represented.
    #[error("Observation night boundary out of range for {date}")]
    DateOutOfRange { date: DateValue },

    /// The cone search radius is not a positive number.
    #[error("Unvalidated search cone radius in search query: {value:?}")]
    InvalidRadius { value: String },

    /// The configured observation night convention is unusable.
    #[error("Invalid observation night convention: {0}")]
    InvalidNightConvention(String),
}

impl QueryError {
    pub(crate) fn invalid_field(field: &'static str) -> impl FnOnce(ParseError) -> QueryError {
        move |source| QueryError::InvalidField { field, source }
    }
}
