//! RFC 3339 formatting.
//!
//! Output is canonical: two-digit date and time groups, fractional seconds
//! with trailing zeros stripped (omitted entirely when zero), and the offset
//! written as `Z` or `±HH:MM`.

use crate::codec::fraction::{nanos_to_digits, MAX_FRACTION_DIGITS};
use crate::codec::primitives::Writer;
use crate::error::BufferError;
use crate::model::{Timestamp, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

/// Longest possible formatted timestamp:
/// `YYYY-MM-DDTHH:MM:SS` (19) + `.nnnnnnnnn` (10) + `±HH:MM` (6).
pub const MAX_FORMATTED_LEN: usize = 35;

/// How fractional seconds are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FractionDigits {
    /// Nine digits with trailing zeros stripped; omitted when zero.
    #[default]
    Trimmed,
    /// Exactly this many digits (clamped to 9), truncating extra precision.
    /// `Fixed(0)` never writes a fraction.
    Fixed(u8),
}

/// Options for formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatOptions {
    /// Fractional seconds style.
    ///
    /// Only [`FractionDigits::Trimmed`] produces canonical output; fixed
    /// widths are for consumers that expect, say, millisecond precision.
    pub fraction: FractionDigits,
}

impl FormatOptions {
    /// Creates default (canonical) formatting options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates canonical formatting options.
    pub fn canonical() -> Self {
        Self {
            fraction: FractionDigits::Trimmed,
        }
    }

    /// Creates options writing exactly `digits` fractional digits.
    pub fn fixed(digits: u8) -> Self {
        Self {
            fraction: FractionDigits::Fixed(digits),
        }
    }
}

/// Formats a timestamp as canonical RFC 3339 text.
pub fn format(timestamp: &Timestamp) -> String {
    format_with_options(timestamp, FormatOptions::canonical())
}

/// Formats a timestamp with the given options.
pub fn format_with_options(timestamp: &Timestamp, options: FormatOptions) -> String {
    encode(timestamp, options).into_string()
}

/// Formats a timestamp into `buf`, returning the number of bytes written.
///
/// Fails without touching `buf` if it is shorter than the formatted text.
/// A buffer of [`MAX_FORMATTED_LEN`] bytes is always large enough.
pub fn format_into(timestamp: &Timestamp, buf: &mut [u8]) -> Result<usize, BufferError> {
    format_into_with_options(timestamp, FormatOptions::canonical(), buf)
}

/// Formats a timestamp into `buf` with the given options.
pub fn format_into_with_options(
    timestamp: &Timestamp,
    options: FormatOptions,
    buf: &mut [u8],
) -> Result<usize, BufferError> {
    let writer = encode(timestamp, options);
    let needed = writer.len();
    if needed > buf.len() {
        return Err(BufferError {
            needed,
            capacity: buf.len(),
        });
    }
    buf[..needed].copy_from_slice(writer.as_bytes());
    Ok(needed)
}

/// Returns the length of the formatted text without producing it.
pub fn formatted_len(timestamp: &Timestamp, options: FormatOptions) -> usize {
    let fraction = match fraction_digit_count(timestamp.nanosecond(), options.fraction) {
        0 => 0,
        n => n + 1,
    };
    let offset = if timestamp.is_utc() { 1 } else { 6 };
    19 + fraction + offset
}

fn fraction_digit_count(nanos: u32, style: FractionDigits) -> usize {
    match style {
        FractionDigits::Trimmed => nanos_to_digits(nanos).1,
        FractionDigits::Fixed(n) => (n as usize).min(MAX_FRACTION_DIGITS),
    }
}

fn encode(timestamp: &Timestamp, options: FormatOptions) -> Writer {
    let mut writer = Writer::new();

    writer.write_digits(timestamp.year() as u32, 4);
    writer.write_byte(b'-');
    writer.write_digits(timestamp.month() as u32, 2);
    writer.write_byte(b'-');
    writer.write_digits(timestamp.day() as u32, 2);
    writer.write_byte(b'T');
    writer.write_digits(timestamp.hour() as u32, 2);
    writer.write_byte(b':');
    writer.write_digits(timestamp.minute() as u32, 2);
    writer.write_byte(b':');
    writer.write_digits(timestamp.second() as u32, 2);

    write_fraction(&mut writer, timestamp.nanosecond(), options.fraction);
    write_offset(&mut writer, timestamp.offset_seconds());

    writer
}

fn write_fraction(writer: &mut Writer, nanos: u32, style: FractionDigits) {
    let count = fraction_digit_count(nanos, style);
    if count == 0 {
        return;
    }
    // The leading `count` of the nine digits are the truncated fraction.
    let (digits, _) = nanos_to_digits(nanos);
    writer.write_byte(b'.');
    writer.write_bytes(&digits[..count]);
}

fn write_offset(writer: &mut Writer, offset_seconds: i32) {
    if offset_seconds == 0 {
        writer.write_byte(b'Z');
        return;
    }

    let sign = if offset_seconds < 0 { b'-' } else { b'+' };
    let magnitude = offset_seconds.unsigned_abs();
    let hours = magnitude / SECONDS_PER_HOUR as u32;
    let minutes = magnitude % SECONDS_PER_HOUR as u32 / SECONDS_PER_MINUTE as u32;

    writer.write_byte(sign);
    writer.write_digits(hours, 2);
    writer.write_byte(b':');
    writer.write_digits(minutes, 2);
}
