//! RFC 3339 parsing.
//!
//! Accepts exactly `YYYY-MM-DDTHH:MM:SS[.F{1,9}](Z|z|±HH:MM)`, with `T` or
//! `t` between date and time. Fields are read left to right at fixed widths;
//! the first mismatch is returned as a [`ParseError`].

use crate::codec::fraction::{fraction_to_nanos, MAX_FRACTION_DIGITS};
use crate::codec::primitives::Scanner;
use crate::error::ParseError;
use crate::model::Timestamp;

/// A parsed UTC offset designator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Offset {
    Utc,
    Numeric { negative: bool, hours: u8, minutes: u8 },
}

/// Parses an RFC 3339 timestamp.
///
/// The civil fields are kept as written (local time) and the offset is
/// stored alongside them; `-00:00` and `+00:00` are equivalent to `Z`.
pub fn parse(text: &str) -> Result<Timestamp, ParseError> {
    let mut scanner = Scanner::new(text);

    let year = scanner.read_digits(4, "year")?;
    scanner.expect_byte(b'-', "'-' after year")?;
    let month = scanner.read_digits(2, "month")?;
    scanner.expect_byte(b'-', "'-' after month")?;
    let day = scanner.read_digits(2, "day")?;
    scanner.expect_one_of(b"Tt", "'T' between date and time")?;
    let hour = scanner.read_digits(2, "hour")?;
    scanner.expect_byte(b':', "':' after hour")?;
    let minute = scanner.read_digits(2, "minute")?;
    scanner.expect_byte(b':', "':' after minute")?;
    let second = scanner.read_digits(2, "second")?;

    let nanosecond = if scanner.peek() == Some(b'.') {
        scanner.advance();
        parse_fraction(&mut scanner)?
    } else {
        0
    };

    let offset = parse_offset(&mut scanner)?;
    scanner.finish()?;

    // Digit groups are at most four wide, so the narrowing casts are exact.
    let timestamp = Timestamp::new(
        year as i32,
        month as u8,
        day as u8,
        hour as u8,
        minute as u8,
        second as u8,
    )?
    .with_nanosecond(nanosecond)?;

    Ok(match offset {
        Offset::Utc => timestamp,
        Offset::Numeric {
            negative,
            hours,
            minutes,
        } => timestamp.with_offset_hm(negative, hours, minutes)?,
    })
}

/// Parses the digits after the `.` of a fractional second.
fn parse_fraction(scanner: &mut Scanner<'_>) -> Result<u32, ParseError> {
    let position = scanner.position();
    let (digits, count) = scanner.read_digit_run(MAX_FRACTION_DIGITS);
    match count {
        0 => Err(ParseError::EmptyFraction { position }),
        1..=MAX_FRACTION_DIGITS => Ok(fraction_to_nanos(digits, count)),
        _ => Err(ParseError::FractionTooLong {
            digits: count,
            position,
        }),
    }
}

/// Parses `Z`, `z`, `+HH:MM` or `-HH:MM`.
///
/// The UTC designator is checked first so it is never mistaken for the
/// start of a numeric offset.
fn parse_offset(scanner: &mut Scanner<'_>) -> Result<Offset, ParseError> {
    if scanner.peek().is_some_and(|b| b == b'Z' || b == b'z') {
        scanner.advance();
        return Ok(Offset::Utc);
    }

    let sign = scanner.expect_one_of(b"+-", "'Z' or a signed UTC offset")?;
    let hours = scanner.read_digits(2, "offset hour")?;
    scanner.expect_byte(b':', "':' in UTC offset")?;
    let minutes = scanner.read_digits(2, "offset minute")?;

    Ok(Offset::Numeric {
        negative: sign == b'-',
        hours: hours as u8,
        minutes: minutes as u8,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RangeError;

    #[test]
    fn test_parse_negative_offset() {
        let ts = parse("2014-11-12T19:12:14.125-06:30").unwrap();
        assert_eq!(ts.year(), 2014);
        assert_eq!(ts.month(), 11);
        assert_eq!(ts.day(), 12);
        assert_eq!(ts.hour(), 19);
        assert_eq!(ts.minute(), 12);
        assert_eq!(ts.second(), 14);
        assert_eq!(ts.nanosecond(), 125_000_000);
        assert_eq!(ts.offset_seconds(), -(6 * 3600 + 30 * 60));
    }

    #[test]
    fn test_parse_lowercase_designators() {
        let ts = parse("1980-01-01t01:01:60+01:00").unwrap();
        assert_eq!(ts.second(), 60);
        assert_eq!(ts.offset_seconds(), 3600);

        let ts = parse("2014-11-12T19:12:14.125z").unwrap();
        assert!(ts.is_utc());
    }

    #[test]
    fn test_parse_zero_offsets_are_utc() {
        for text in [
            "2024-05-01T10:47:40Z",
            "2024-05-01T10:47:40+00:00",
            "2024-05-01T10:47:40-00:00",
        ] {
            let ts = parse(text).unwrap();
            assert!(ts.is_utc(), "{} should be UTC", text);
        }
    }

    #[test]
    fn test_parse_fraction_precision() {
        let cases = [
            ("5", 500_000_000),
            ("05", 50_000_000),
            ("0500", 50_000_000),
            ("123456", 123_456_000),
            ("000000001", 1),
            ("999999999", 999_999_999),
            ("000000000", 0),
        ];

        for (digits, expected) in cases {
            let text = format!("2014-11-12T19:12:14.{}Z", digits);
            let ts = parse(&text).unwrap();
            assert_eq!(ts.nanosecond(), expected, "failed for {}", text);
        }
    }

    #[test]
    fn test_parse_invalid_format() {
        let invalid = [
            "not a date",
            "2014-11-12T19:12:14.125",
            "2014-11-12 19:12:14.125Z",
            "2014-11-12T19:12",
            "2014-11-12T19:12:14.Z",
            "2014-11-12T19:12:14.0123456789Z",
            "",
            "2014-11-12",
            "2014-11-12T19:12:14",
            "2014-11-12T19:12:14ZZ",
            "2014-11-12T19:12:14.125+0630",
            "2014-11-12T19:12:14.125+6:30",
            "2014-11-12T19:12:14.125 +06:30",
            "2014-11-12T19:12:14,125Z",
            "14-11-12T19:12:14Z",
            "2014/11/12T19:12:14Z",
            "+2014-11-12T19:12:14Z",
            "2014-11-12T19:12:14.125-06:30 ",
            "2014-11-12T19:12:14X",
        ];

        for text in invalid {
            assert!(parse(text).is_err(), "{:?} should be rejected", text);
        }
    }

    #[test]
    fn test_parse_error_details() {
        assert_eq!(
            parse("2014-11-12 19:12:14.125Z"),
            Err(ParseError::UnexpectedChar {
                expected: "'T' between date and time",
                found: ' ',
                position: 10,
            })
        );
        assert!(matches!(
            parse("2014-11-12T19:12"),
            Err(ParseError::UnexpectedEnd { position: 16, .. })
        ));
        assert!(matches!(
            parse("2014-11-12T19:12:14.125"),
            Err(ParseError::UnexpectedEnd { position: 23, .. })
        ));
        assert_eq!(
            parse("2014-11-12T19:12:14.Z"),
            Err(ParseError::EmptyFraction { position: 20 })
        );
        assert_eq!(
            parse("2014-11-12T19:12:14.0123456789Z"),
            Err(ParseError::FractionTooLong {
                digits: 10,
                position: 20,
            })
        );
        assert_eq!(
            parse("2014-11-12T19:12:14Z+01:00"),
            Err(ParseError::TrailingInput { position: 20 })
        );
    }

    #[test]
    fn test_parse_field_ranges() {
        let cases = [
            ("2014-13-12T19:12:14Z", "month"),
            ("2014-00-12T19:12:14Z", "month"),
            ("2014-11-32T19:12:14Z", "day"),
            ("2014-11-00T19:12:14Z", "day"),
            ("2014-11-12T24:12:14Z", "hour"),
            ("2014-11-12T19:60:14Z", "minute"),
            ("2014-11-12T19:12:61Z", "second"),
            ("2014-11-12T19:12:14+24:00", "offset hour"),
            ("2014-11-12T19:12:14-05:60", "offset minute"),
        ];

        for (text, component) in cases {
            match parse(text) {
                Err(ParseError::OutOfRange(RangeError { component: c, .. })) => {
                    assert_eq!(c, component, "wrong component for {}", text)
                }
                other => panic!("{} should be out of range, got {:?}", text, other),
            }
        }
    }

    #[test]
    fn test_parse_accepts_unnormalized_day() {
        // Day-of-month validity is left to the calendar conversion.
        let ts = parse("2023-02-30T00:00:00Z").unwrap();
        assert_eq!((ts.month(), ts.day()), (2, 30));
    }
}
