//! Data model types.
//!
//! A single value type, [`Timestamp`], shared by the parser, the formatter
//! and the epoch converter.

pub mod timestamp;

pub use timestamp::{
    Timestamp, MAX_YEAR, NANOS_PER_SECOND, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};
