//! Fixed-offset approximation of US Pacific time.
//!
//! No timezone database is consulted. The offset is either -7 or -8 hours, picked by a
//! daylight window that starts on the first Sunday on/after March 8 at 10:00 UTC and ends on
//! the first Sunday on/after November 1 at 09:00 UTC. Real transitions happen at 02:00 local
//! time, the fixed UTC hours are kept as they are so the rendered values stay stable.

use time::error::ComponentRange;
use time::Date;
use time::Duration;
use time::Month;
use time::OffsetDateTime;
use time::UtcOffset;

pub const DAYLIGHT_OFFSET_HOURS: i8 = -7;

pub const STANDARD_OFFSET_HOURS: i8 = -8;

#[derive(Debug, thiserror::Error)]
pub enum LocalTimeError {
    #[error("Failed to compute the daylight window")]
    DaylightWindow(#[from] ComponentRange),

    #[error("{instant} has no wall clock reading at offset {offset}")]
    OutOfRange {
        instant: OffsetDateTime,
        offset: UtcOffset,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaylightWindow {
    pub start: OffsetDateTime,
    pub end: OffsetDateTime,
}

impl DaylightWindow {
    pub fn for_year(year: i32) -> Result<Self, ComponentRange> {
        let start = first_sunday_on_or_after(year, Month::March, 8)?
            .with_hms(10, 0, 0)?
            .assume_utc();
        let end = first_sunday_on_or_after(year, Month::November, 1)?
            .with_hms(9, 0, 0)?
            .assume_utc();

        Ok(Self { start, end })
    }

    /// Half-open: the start instant is inside, the end instant is not.
    pub fn contains(&self, instant: OffsetDateTime) -> bool {
        self.start <= instant && instant < self.end
    }
}

fn first_sunday_on_or_after(year: i32, month: Month, day: u8) -> Result<Date, ComponentRange> {
    let date = Date::from_calendar_date(year, month, day)?;
    let days_ahead = (7 - date.weekday().number_days_from_sunday()) % 7;
    Ok(date.saturating_add(Duration::days(days_ahead.into())))
}

fn shifted(
    instant: OffsetDateTime,
    offset: UtcOffset,
) -> Result<OffsetDateTime, LocalTimeError> {
    instant
        .checked_to_offset(offset)
        .ok_or(LocalTimeError::OutOfRange { instant, offset })
}

pub fn utc_offset_at(instant: OffsetDateTime) -> Result<UtcOffset, LocalTimeError> {
    let utc = shifted(instant, UtcOffset::UTC)?;
    let window = DaylightWindow::for_year(utc.year())?;

    let hours = if window.contains(utc) {
        DAYLIGHT_OFFSET_HOURS
    } else {
        STANDARD_OFFSET_HOURS
    };

    Ok(UtcOffset::from_hms(hours, 0, 0)?)
}

/// Maps any instant to the wall clock reading of the approximated zone.
///
/// Fails for instants whose local date lies outside the supported calendar range.
pub fn to_local(instant: OffsetDateTime) -> Result<OffsetDateTime, LocalTimeError> {
    let offset = utc_offset_at(instant)?;
    shifted(instant, offset)
}
