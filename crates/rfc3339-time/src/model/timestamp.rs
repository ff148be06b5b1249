//! The timestamp value type.

use std::fmt;
use std::str::FromStr;

use crate::calendar::CivilTime;
use crate::error::{CalendarError, ParseError, RangeError};

pub const NANOS_PER_SECOND: u32 = 1_000_000_000;
pub const SECONDS_PER_MINUTE: i32 = 60;
pub const SECONDS_PER_HOUR: i32 = 60 * SECONDS_PER_MINUTE;
pub const SECONDS_PER_DAY: i32 = 24 * SECONDS_PER_HOUR;

/// Largest year representable with four digits.
pub const MAX_YEAR: i32 = 9999;

/// A civil (wall clock) date and time with a fixed UTC offset.
///
/// The date and time fields are local time: when `offset_seconds` is
/// non-zero they are not UTC. The fields are range-checked but not checked
/// against the calendar, so `2023-02-30` is a valid `Timestamp` and is
/// normalized only when converted to an epoch count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timestamp {
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    nanosecond: u32,
    offset_seconds: i32,
}

impl Timestamp {
    /// The Unix epoch, 1970-01-01T00:00:00Z.
    pub const UNIX_EPOCH: Timestamp = Timestamp {
        year: 1970,
        month: 1,
        day: 1,
        hour: 0,
        minute: 0,
        second: 0,
        nanosecond: 0,
        offset_seconds: 0,
    };

    /// Creates a UTC timestamp with whole seconds.
    ///
    /// Accepted ranges: year 0-9999, month 1-12, day 1-31, hour 0-23,
    /// minute 0-59, second 0-60 (a positive leap second).
    pub fn new(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, RangeError> {
        RangeError::check("year", year as i64, 0, MAX_YEAR as i64)?;
        RangeError::check("month", month as i64, 1, 12)?;
        RangeError::check("day", day as i64, 1, 31)?;
        RangeError::check("hour", hour as i64, 0, 23)?;
        RangeError::check("minute", minute as i64, 0, 59)?;
        RangeError::check("second", second as i64, 0, 60)?;

        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            nanosecond: 0,
            offset_seconds: 0,
        })
    }

    /// Builds a UTC timestamp from calendar output.
    ///
    /// The calendar produces in-range fields; only the year needs checking
    /// against the four-digit limit.
    pub(crate) fn from_civil(civil: &CivilTime, nanosecond: u32) -> Result<Self, CalendarError> {
        if !(0..=MAX_YEAR).contains(&civil.year) {
            return Err(CalendarError::YearOutOfRange { year: civil.year });
        }
        debug_assert!(nanosecond < NANOS_PER_SECOND);

        Ok(Self {
            year: civil.year,
            month: civil.month,
            day: civil.day,
            hour: civil.hour,
            minute: civil.minute,
            second: civil.second,
            nanosecond,
            offset_seconds: 0,
        })
    }

    /// The civil fields, for the calendar conversion.
    pub(crate) fn civil(&self) -> CivilTime {
        CivilTime {
            year: self.year,
            month: self.month,
            day: self.day,
            hour: self.hour,
            minute: self.minute,
            second: self.second,
        }
    }

    /// Returns a copy with the sub-second fraction set, in nanoseconds.
    pub fn with_nanosecond(self, nanosecond: u32) -> Result<Self, RangeError> {
        RangeError::check("nanosecond", nanosecond as i64, 0, NANOS_PER_SECOND as i64 - 1)?;
        Ok(Self { nanosecond, ..self })
    }

    /// Returns a copy with the UTC offset set, in seconds.
    ///
    /// The civil fields are left untouched: they are reinterpreted as local
    /// time at the new offset. The offset must be a whole number of minutes
    /// (as written in `±HH:MM`) with magnitude below one day.
    pub fn with_offset_seconds(self, offset_seconds: i32) -> Result<Self, RangeError> {
        let limit = SECONDS_PER_DAY as i64 - SECONDS_PER_MINUTE as i64;
        RangeError::check("offset", offset_seconds as i64, -limit, limit)?;
        RangeError::check("offset second", (offset_seconds % SECONDS_PER_MINUTE) as i64, 0, 0)?;
        Ok(Self {
            offset_seconds,
            ..self
        })
    }

    /// Returns a copy with the UTC offset set from hours and minutes.
    ///
    /// `negative` applies to the combined magnitude, so `-06:30` is
    /// `with_offset_hm(true, 6, 30)`.
    pub fn with_offset_hm(self, negative: bool, hours: u8, minutes: u8) -> Result<Self, RangeError> {
        RangeError::check("offset hour", hours as i64, 0, 23)?;
        RangeError::check("offset minute", minutes as i64, 0, 59)?;
        let magnitude = hours as i32 * SECONDS_PER_HOUR + minutes as i32 * SECONDS_PER_MINUTE;
        self.with_offset_seconds(if negative { -magnitude } else { magnitude })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }

    /// Sub-second fraction in nanoseconds, always in `0..1_000_000_000`.
    pub fn nanosecond(&self) -> u32 {
        self.nanosecond
    }

    /// Offset from UTC in seconds. Zero is written as `Z`.
    pub fn offset_seconds(&self) -> i32 {
        self.offset_seconds
    }

    /// Returns true if the offset is zero.
    pub fn is_utc(&self) -> bool {
        self.offset_seconds == 0
    }

    /// Returns the current time in UTC.
    ///
    /// Falls back to the Unix epoch if the system clock is set before it.
    pub fn now_utc() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as i64)
            .unwrap_or(0);
        crate::epoch::from_nanos(nanos).unwrap_or(Self::UNIX_EPOCH)
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::UNIX_EPOCH
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; crate::codec::MAX_FORMATTED_LEN];
        let len = crate::codec::format_into(self, &mut buf).map_err(|_| fmt::Error)?;
        // Formatter output is pure ASCII.
        let text = std::str::from_utf8(&buf[..len]).map_err(|_| fmt::Error)?;
        f.write_str(text)
    }
}

impl FromStr for Timestamp {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::codec::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Timestamp {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Timestamp {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        crate::codec::parse(&text).map_err(serde::de::Error::custom)
    }
}
