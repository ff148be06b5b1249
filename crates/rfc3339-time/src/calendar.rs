//! Civil calendar conversions backed by the `time` crate.
//!
//! Proleptic Gregorian arithmetic only; the day of month and a seconds
//! value of 60 are normalized forward the way `timegm` does (Feb 30 is
//! Mar 2 or Mar 1, `01:01:60` is `01:02:00`).

use time::{Date, Month, OffsetDateTime};

use crate::error::CalendarError;
use crate::model::SECONDS_PER_DAY;

/// Julian day number of 1970-01-01.
const UNIX_EPOCH_JULIAN_DAY: i64 = 2_440_588;

/// Civil date and time fields, without offset or fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CivilTime {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

/// Seconds since the Unix epoch of `civil`, read as if it were UTC.
pub(crate) fn civil_to_unix(civil: &CivilTime) -> Result<i64, CalendarError> {
    let month = Month::try_from(civil.month)?;
    let first_of_month = Date::from_calendar_date(civil.year, month, 1)?;
    let days = first_of_month.to_julian_day() as i64 - UNIX_EPOCH_JULIAN_DAY + (civil.day as i64 - 1);

    Ok(days * SECONDS_PER_DAY as i64
        + civil.hour as i64 * 3600
        + civil.minute as i64 * 60
        + civil.second as i64)
}

/// UTC civil fields of `seconds` since the Unix epoch.
pub(crate) fn unix_to_civil(seconds: i64) -> Result<CivilTime, CalendarError> {
    let datetime = OffsetDateTime::from_unix_timestamp(seconds)?;
    Ok(CivilTime {
        year: datetime.year(),
        month: u8::from(datetime.month()),
        day: datetime.day(),
        hour: datetime.hour(),
        minute: datetime.minute(),
        second: datetime.second(),
    })
}
