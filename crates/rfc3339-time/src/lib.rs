//! RFC 3339 timestamps: strict parsing, canonical formatting and epoch counts.
//!
//! This crate converts between RFC 3339 text, a civil date/time value with a
//! fixed UTC offset, and integer counts of seconds, milliseconds,
//! microseconds or nanoseconds since the Unix epoch.
//!
//! # Quick Start
//!
//! ```rust
//! use rfc3339_time::{epoch, format, parse};
//!
//! let ts = parse("2014-11-12T19:12:14.125-06:30").unwrap();
//! assert_eq!(ts.offset_seconds(), -23_400);
//! assert_eq!(epoch::to_nanos(&ts).unwrap(), 1_415_796_134_125_000_000);
//! assert_eq!(format(&ts), "2014-11-12T19:12:14.125-06:30");
//!
//! let utc = epoch::from_nanos(1_714_560_460_608_800_429).unwrap();
//! assert_eq!(utc.to_string(), "2024-05-01T10:47:40.608800429Z");
//! ```
//!
//! # Modules
//!
//! - [`model`]: The [`Timestamp`] value type
//! - [`codec`]: Parser and formatter
//! - [`epoch`]: Conversion to and from epoch counts
//! - [`error`]: Error types
//!
//! # Grammar
//!
//! Input must match `YYYY-MM-DDTHH:MM:SS[.F{1,9}](Z|±HH:MM)` exactly; `T`
//! and `Z` may be lowercase. Output is canonical: uppercase designators,
//! fractional seconds with trailing zeros stripped (omitted when zero), and
//! `Z` for a zero offset.
//!
//! # Epoch convention
//!
//! The civil fields are local wall-clock time. Epoch counts are computed as
//! the calendar value of those fields plus the stored offset, and counts
//! below one second are split off with floor division, so negative counts
//! always carry a non-negative fraction.
//!
//! # Limitations
//!
//! A seconds value of 60 is accepted and handed to the calendar as is, which
//! rolls it into the following minute. Day-of-month overflow (`02-30`) is
//! normalized the same way.

mod calendar;
pub mod codec;
pub mod epoch;
pub mod error;
pub mod model;


// Re-export commonly used types at crate root
pub use codec::{
    format, format_into, format_into_with_options, format_with_options, parse, FormatOptions,
    FractionDigits, MAX_FORMATTED_LEN,
};
pub use epoch::Unit;
pub use error::{BufferError, CalendarError, Error, ErrorKind, ParseError, RangeError};
pub use model::Timestamp;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
