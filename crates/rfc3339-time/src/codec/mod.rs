//! RFC 3339 text encoding/decoding.
//!
//! - [`parse`]: strict fixed-width parser
//! - [`format`]: canonical formatter, with a bounded-buffer variant
//! - [`fraction`]: fractional-second digit helpers
//!
//! The scanner and writer behind them are internal. The writer holds
//! exactly [`MAX_FORMATTED_LEN`] bytes, the longest text the formatter emits.
//!
//! ```compile_fail
//! let _ = rfc3339_time::codec::primitives::Writer::new();
//! ```

pub mod format;
pub mod fraction;
pub mod parse;
mod primitives;

pub use format::{
    format, format_into, format_into_with_options, format_with_options, formatted_len,
    FormatOptions, FractionDigits, MAX_FORMATTED_LEN,
};
pub use fraction::MAX_FRACTION_DIGITS;
pub use parse::parse;
