//! Fractional seconds: digit strings to nanoseconds and back.

use crate::model::NANOS_PER_SECOND;

/// Maximum number of fractional-second digits (nanosecond precision).
pub const MAX_FRACTION_DIGITS: usize = 9;

const POW10: [u32; 10] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
];

/// Scales a fractional digit string, already read as an integer, to nanoseconds.
///
/// `"5"` is `(5, 1)` and yields 500,000,000; `"05"` is `(5, 2)` and yields
/// 50,000,000. `digit_count` must be in `1..=9`.
#[inline]
pub fn fraction_to_nanos(digits: u32, digit_count: usize) -> u32 {
    debug_assert!((1..=MAX_FRACTION_DIGITS).contains(&digit_count));
    digits * POW10[MAX_FRACTION_DIGITS - digit_count]
}

/// Renders `nanos` as nine digits and returns them with the number of
/// significant digits once trailing zeros are stripped.
///
/// A zero fraction has no significant digits.
pub fn nanos_to_digits(nanos: u32) -> ([u8; MAX_FRACTION_DIGITS], usize) {
    debug_assert!(nanos < NANOS_PER_SECOND);
    let mut digits = [b'0'; MAX_FRACTION_DIGITS];
    let mut rest = nanos;
    for slot in digits.iter_mut().rev() {
        *slot = b'0' + (rest % 10) as u8;
        rest /= 10;
    }

    let significant = digits
        .iter()
        .rposition(|&d| d != b'0')
        .map(|i| i + 1)
        .unwrap_or(0);
    (digits, significant)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_to_nanos() {
        assert_eq!(fraction_to_nanos(5, 1), 500_000_000);
        assert_eq!(fraction_to_nanos(5, 2), 50_000_000);
        assert_eq!(fraction_to_nanos(125, 3), 125_000_000);
        assert_eq!(fraction_to_nanos(500, 4), 50_000_000);
        assert_eq!(fraction_to_nanos(123_456_789, 9), 123_456_789);
        assert_eq!(fraction_to_nanos(0, 9), 0);
    }

    #[test]
    fn test_nanos_to_digits() {
        let (digits, len) = nanos_to_digits(500_000_000);
        assert_eq!(&digits[..len], b"5");

        let (digits, len) = nanos_to_digits(50_010_000);
        assert_eq!(&digits[..len], b"05001");

        let (digits, len) = nanos_to_digits(608_800_429);
        assert_eq!(&digits[..len], b"608800429");

        let (digits, len) = nanos_to_digits(1);
        assert_eq!(&digits[..len], b"000000001");
    }

    #[test]
    fn test_zero_has_no_digits() {
        let (digits, len) = nanos_to_digits(0);
        assert_eq!(len, 0);
        assert_eq!(&digits, b"000000000");
    }
}
