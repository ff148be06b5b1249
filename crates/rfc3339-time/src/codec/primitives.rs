//! Primitive scanning and writing for RFC 3339 text.
//!
//! Implements fixed-width digit groups, literal separators and bounded output.

use crate::codec::format::MAX_FORMATTED_LEN;
use crate::error::ParseError;

// =============================================================================
// SCANNING
// =============================================================================

/// Scanner for reading RFC 3339 text.
///
/// Wraps a string slice and provides "expect literal / expect N digits"
/// steps with bounds checking. Nothing is ever backtracked.
#[derive(Debug, Clone)]
pub(crate) struct Scanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner over a string slice.
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// Returns the current byte position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the unread part of the input.
    pub fn remaining(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// Returns true if all input has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Returns the next byte without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    /// Consumes one byte. Callers peek first.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.text.len() {
            self.pos += 1;
        }
    }

    /// The full character at the current position, for error reporting.
    fn current_char(&self) -> char {
        self.remaining().chars().next().unwrap_or('\0')
    }

    /// Reads a single byte.
    #[inline]
    pub fn read_byte(&mut self, context: &'static str) -> Result<u8, ParseError> {
        match self.peek() {
            Some(byte) => {
                self.pos += 1;
                Ok(byte)
            }
            None => Err(ParseError::UnexpectedEnd {
                context,
                position: self.pos,
            }),
        }
    }

    /// Consumes `literal` or fails without consuming anything.
    #[inline]
    pub fn expect_byte(&mut self, literal: u8, expected: &'static str) -> Result<(), ParseError> {
        self.expect_one_of(&[literal], expected).map(|_| ())
    }

    /// Consumes one of `choices` and returns it.
    pub fn expect_one_of(&mut self, choices: &[u8], expected: &'static str) -> Result<u8, ParseError> {
        match self.peek() {
            Some(byte) if choices.contains(&byte) => {
                self.pos += 1;
                Ok(byte)
            }
            Some(_) => Err(ParseError::UnexpectedChar {
                expected,
                found: self.current_char(),
                position: self.pos,
            }),
            None => Err(ParseError::UnexpectedEnd {
                context: expected,
                position: self.pos,
            }),
        }
    }

    /// Reads exactly `width` ASCII digits as a decimal number.
    #[inline]
    pub fn read_digits(&mut self, width: usize, context: &'static str) -> Result<u32, ParseError> {
        let mut value = 0u32;
        for _ in 0..width {
            let position = self.pos;
            let found = self.current_char();
            let byte = self.read_byte(context)?;
            if !byte.is_ascii_digit() {
                return Err(ParseError::ExpectedDigit {
                    context,
                    found,
                    position,
                });
            }
            value = value * 10 + (byte - b'0') as u32;
        }
        Ok(value)
    }

    /// Reads a run of ASCII digits of any length.
    ///
    /// Returns the value of the first `max_value_digits` digits and the total
    /// number of digits consumed; the caller decides whether the count is
    /// acceptable.
    pub fn read_digit_run(&mut self, max_value_digits: usize) -> (u32, usize) {
        let mut value = 0u32;
        let mut count = 0usize;
        while let Some(byte) = self.peek() {
            if !byte.is_ascii_digit() {
                break;
            }
            if count < max_value_digits {
                value = value * 10 + (byte - b'0') as u32;
            }
            count += 1;
            self.pos += 1;
        }
        (value, count)
    }

    /// Succeeds only if the whole input has been consumed.
    pub fn finish(&self) -> Result<(), ParseError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ParseError::TrailingInput { position: self.pos })
        }
    }
}

// =============================================================================
// WRITING
// =============================================================================

/// Writer for formatted timestamps.
///
/// Output lives in a fixed stack buffer sized for the longest timestamp, so
/// callers must never write more than [`MAX_FORMATTED_LEN`] bytes. Only the
/// formatter writes through it.
#[derive(Debug, Clone)]
pub(crate) struct Writer {
    buf: [u8; MAX_FORMATTED_LEN],
    len: usize,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    /// Creates a new, empty writer.
    pub fn new() -> Self {
        Self {
            buf: [0u8; MAX_FORMATTED_LEN],
            len: 0,
        }
    }

    /// Returns the written bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Returns the number of bytes written.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Writes a single byte.
    #[inline]
    pub fn write_byte(&mut self, byte: u8) {
        self.buf[self.len] = byte;
        self.len += 1;
    }

    /// Writes raw bytes.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf[self.len..self.len + bytes.len()].copy_from_slice(bytes);
        self.len += bytes.len();
    }

    /// Writes `value` as exactly `width` zero-padded decimal digits.
    ///
    /// Higher-order digits beyond `width` are dropped.
    #[inline]
    pub fn write_digits(&mut self, mut value: u32, width: usize) {
        for i in (0..width).rev() {
            self.buf[self.len + i] = b'0' + (value % 10) as u8;
            value /= 10;
        }
        self.len += width;
    }

    /// Converts the written ASCII bytes into a `String`.
    pub fn into_string(self) -> String {
        self.as_bytes().iter().map(|&b| b as char).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_digits() {
        let mut scanner = Scanner::new("2014-11");
        assert_eq!(scanner.read_digits(4, "year").unwrap(), 2014);
        assert_eq!(scanner.position(), 4);
        scanner.expect_byte(b'-', "'-'").unwrap();
        assert_eq!(scanner.read_digits(2, "month").unwrap(), 11);
        assert!(scanner.finish().is_ok());
    }

    #[test]
    fn test_read_digits_rejects_non_digit() {
        let mut scanner = Scanner::new("20x4");
        let result = scanner.read_digits(4, "year");
        assert_eq!(
            result,
            Err(ParseError::ExpectedDigit {
                context: "year",
                found: 'x',
                position: 2,
            })
        );
    }

    #[test]
    fn test_read_digits_reports_non_ascii_char() {
        let mut scanner = Scanner::new("1é");
        let result = scanner.read_digits(2, "day");
        assert!(matches!(result, Err(ParseError::ExpectedDigit { found: 'é', position: 1, .. })));
    }

    #[test]
    fn test_unexpected_end() {
        let mut scanner = Scanner::new("19");
        let result = scanner.read_digits(4, "year");
        assert!(matches!(result, Err(ParseError::UnexpectedEnd { position: 2, .. })));

        let mut scanner = Scanner::new("");
        assert!(matches!(
            scanner.expect_byte(b':', "':'"),
            Err(ParseError::UnexpectedEnd { position: 0, .. })
        ));
    }

    #[test]
    fn test_expect_one_of() {
        let mut scanner = Scanner::new("tX");
        assert_eq!(scanner.expect_one_of(b"Tt", "'T'").unwrap(), b't');
        let result = scanner.expect_one_of(b"Tt", "'T'");
        assert!(matches!(result, Err(ParseError::UnexpectedChar { found: 'X', position: 1, .. })));
        // A failed expectation consumes nothing.
        assert_eq!(scanner.position(), 1);
    }

    #[test]
    fn test_read_digit_run() {
        let mut scanner = Scanner::new("0123456789Z");
        let (value, count) = scanner.read_digit_run(9);
        assert_eq!(value, 12_345_678);
        assert_eq!(count, 10);
        assert_eq!(scanner.remaining(), "Z");

        let mut scanner = Scanner::new("Z");
        assert_eq!(scanner.read_digit_run(9), (0, 0));
    }

    #[test]
    fn test_trailing_input() {
        let mut scanner = Scanner::new("12Z");
        scanner.read_digits(2, "hour").unwrap();
        assert_eq!(scanner.finish(), Err(ParseError::TrailingInput { position: 2 }));
    }

    #[test]
    fn test_writer_digits() {
        let mut writer = Writer::new();
        writer.write_digits(7, 4);
        writer.write_byte(b'-');
        writer.write_digits(12, 2);
        writer.write_bytes(b"Z");
        assert_eq!(writer.as_bytes(), b"0007-12Z");
        assert_eq!(writer.len(), 8);
        assert_eq!(writer.into_string(), "0007-12Z");
    }
}
