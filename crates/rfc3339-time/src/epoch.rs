//! Conversion between timestamps and integer counts since the Unix epoch.
//!
//! `to_*` functions read the civil fields through the calendar and then add
//! the stored offset: `epoch = calendar(local fields) + offset`. `from_*`
//! functions produce UTC timestamps (offset zero), so a round trip keeps
//! the count but not the original offset or wall-clock fields.
//!
//! Sub-second counts are split with floor division, so negative inputs
//! land on the earlier whole second with a non-negative fraction:
//! `from_nanos(-1)` is `1969-12-31T23:59:59.999999999Z`.

use crate::calendar::{civil_to_unix, unix_to_civil};
use crate::error::CalendarError;
use crate::model::{Timestamp, NANOS_PER_SECOND};

/// Resolution of an epoch count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Seconds,
    Millis,
    Micros,
    Nanos,
}

impl Unit {
    /// Number of this unit in one second.
    pub fn per_second(&self) -> i64 {
        match self {
            Unit::Seconds => 1,
            Unit::Millis => 1_000,
            Unit::Micros => 1_000_000,
            Unit::Nanos => 1_000_000_000,
        }
    }

    /// Returns the unit name (e.g., "milliseconds").
    pub fn name(&self) -> &'static str {
        match self {
            Unit::Seconds => "seconds",
            Unit::Millis => "milliseconds",
            Unit::Micros => "microseconds",
            Unit::Nanos => "nanoseconds",
        }
    }

    fn nanos_per_unit(&self) -> i64 {
        NANOS_PER_SECOND as i64 / self.per_second()
    }
}

/// Seconds since the Unix epoch.
pub fn to_seconds(timestamp: &Timestamp) -> Result<i64, CalendarError> {
    let local = civil_to_unix(&timestamp.civil())?;
    Ok(local + timestamp.offset_seconds() as i64)
}

/// UTC timestamp for `seconds` since the Unix epoch.
pub fn from_seconds(seconds: i64) -> Result<Timestamp, CalendarError> {
    Timestamp::from_civil(&unix_to_civil(seconds)?, 0)
}

/// Count of `unit` since the Unix epoch; the fraction is truncated to the
/// unit's resolution.
pub fn to_unit(timestamp: &Timestamp, unit: Unit) -> Result<i64, CalendarError> {
    let seconds = to_seconds(timestamp)?;
    let fraction = timestamp.nanosecond() as i64 / unit.nanos_per_unit();
    seconds
        .checked_mul(unit.per_second())
        .and_then(|scaled| scaled.checked_add(fraction))
        .ok_or(CalendarError::Overflow { unit: unit.name() })
}

/// UTC timestamp for `value` counted in `unit` since the Unix epoch.
pub fn from_unit(value: i64, unit: Unit) -> Result<Timestamp, CalendarError> {
    let per_second = unit.per_second();
    let seconds = value.div_euclid(per_second);
    let remainder = value.rem_euclid(per_second);
    let nanosecond = (remainder * unit.nanos_per_unit()) as u32;
    Timestamp::from_civil(&unix_to_civil(seconds)?, nanosecond)
}

pub fn to_millis(timestamp: &Timestamp) -> Result<i64, CalendarError> {
    to_unit(timestamp, Unit::Millis)
}

pub fn to_micros(timestamp: &Timestamp) -> Result<i64, CalendarError> {
    to_unit(timestamp, Unit::Micros)
}

pub fn to_nanos(timestamp: &Timestamp) -> Result<i64, CalendarError> {
    to_unit(timestamp, Unit::Nanos)
}

pub fn from_millis(millis: i64) -> Result<Timestamp, CalendarError> {
    from_unit(millis, Unit::Millis)
}

pub fn from_micros(micros: i64) -> Result<Timestamp, CalendarError> {
    from_unit(micros, Unit::Micros)
}

pub fn from_nanos(nanos: i64) -> Result<Timestamp, CalendarError> {
    from_unit(nanos, Unit::Nanos)
}
