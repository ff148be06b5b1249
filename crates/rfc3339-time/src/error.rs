//! Error types for RFC 3339 parsing, formatting and epoch conversion.

use thiserror::Error;

/// Coarse classification of every error this crate returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input text does not match the RFC 3339 grammar.
    Format,
    /// Destination buffer is too small for the formatted text.
    Buffer,
    /// The civil calendar conversion failed or overflowed.
    Calendar,
}

impl ErrorKind {
    /// Returns a short, stable name for the kind (e.g., "format").
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::Format => "format",
            ErrorKind::Buffer => "buffer",
            ErrorKind::Calendar => "calendar",
        }
    }
}

/// A timestamp component outside its permitted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{component} {value} out of range [{min}, {max}]")]
pub struct RangeError {
    pub component: &'static str,
    pub value: i64,
    pub min: i64,
    pub max: i64,
}

impl RangeError {
    /// Checks `value` against the inclusive range `[min, max]`.
    pub(crate) fn check(component: &'static str, value: i64, min: i64, max: i64) -> Result<(), Self> {
        if value < min || value > max {
            return Err(RangeError {
                component,
                value,
                min,
                max,
            });
        }
        Ok(())
    }
}

/// Error while parsing RFC 3339 text.
///
/// Every variant is a format error: the text does not match
/// `YYYY-MM-DDTHH:MM:SS[.F{1,9}](Z|±HH:MM)`. Positions are byte offsets into
/// the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected end of input at byte {position} while reading {context}")]
    UnexpectedEnd {
        context: &'static str,
        position: usize,
    },

    #[error("expected {expected} at byte {position}, found {found:?}")]
    UnexpectedChar {
        expected: &'static str,
        found: char,
        position: usize,
    },

    #[error("expected a digit in {context} at byte {position}, found {found:?}")]
    ExpectedDigit {
        context: &'static str,
        found: char,
        position: usize,
    },

    #[error("fractional seconds at byte {position} have no digits")]
    EmptyFraction { position: usize },

    #[error("fractional seconds at byte {position} have {digits} digits (maximum 9)")]
    FractionTooLong { digits: usize, position: usize },

    #[error("trailing input at byte {position}")]
    TrailingInput { position: usize },

    #[error(transparent)]
    OutOfRange(#[from] RangeError),
}

/// Destination capacity insufficient while formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("formatted timestamp needs {needed} bytes but the buffer holds {capacity}")]
pub struct BufferError {
    pub needed: usize,
    pub capacity: usize,
}

/// Error from the civil calendar conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("calendar component out of range: {0}")]
    ComponentRange(#[from] time::error::ComponentRange),

    #[error("year {year} cannot be written as a four-digit RFC 3339 year")]
    YearOutOfRange { year: i32 },

    #[error("epoch {unit} value overflows a 64-bit integer")]
    Overflow { unit: &'static str },
}

/// Any error returned by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Format(#[from] ParseError),

    #[error(transparent)]
    Buffer(#[from] BufferError),

    #[error(transparent)]
    Calendar(#[from] CalendarError),

    #[error(transparent)]
    Range(#[from] RangeError),
}

impl Error {
    /// Returns the classification of this error.
    ///
    /// A bare [`RangeError`] comes from constructing a [`crate::Timestamp`]
    /// with an invalid component, which is a calendar problem rather than a
    /// text one.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Format(_) => ErrorKind::Format,
            Error::Buffer(_) => ErrorKind::Buffer,
            Error::Calendar(_) | Error::Range(_) => ErrorKind::Calendar,
        }
    }
}
