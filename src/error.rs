//! The one error type returned by every fallible operation.

use thiserror::Error;

use crate::field::{Field, ValueRange};


#[derive(PartialEq, Eq, Debug, Clone, Error)]
pub enum Error {

    /// A scalar was outside the valid range of the field it was meant for.
    #[error("{field} value {value} is outside the valid range {range}")]
    FieldOutOfRange { field: Field, value: i64, range: ValueRange },

    /// The components each passed their own range checks, but together do
    /// not name a real date, such as the 29th of February in a common year.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// A field was read from or written to a value that doesn’t have it.
    #[error("{component} does not support the field {field}")]
    UnsupportedField { field: Field, component: &'static str },

    /// The result of an operation would not fit in the value type.
    #[error("{component}::{operation} overflowed")]
    Overflow { component: &'static str, operation: &'static str },

    /// Malformed text.
    #[error("cannot parse {input:?}: {reason}")]
    Parse { input: String, reason: ParseReason },
}

impl Error {
    pub(crate) fn overflow(component: &'static str, operation: &'static str) -> Self {
        Error::Overflow { component, operation }
    }

    pub(crate) fn parse(input: &str, reason: ParseReason) -> Self {
        Error::Parse { input: input.to_owned(), reason }
    }
}


/// Why a piece of text was rejected. Offsets are byte offsets into the
/// whole input.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Error)]
pub enum ParseReason {

    #[error("input is empty")]
    Empty,

    #[error("expected {what} at offset {offset}")]
    Expected { what: &'static str, offset: usize },

    #[error("{what} at offset {offset} is not a valid number")]
    InvalidNumber { what: &'static str, offset: usize },

    #[error("fraction at offset {offset} has more than nine digits")]
    FractionTooLong { offset: usize },

    #[error("no UTC offset found")]
    MissingOffset,

    #[error("unexpected trailing input at offset {offset}")]
    TrailingInput { offset: usize },
}
