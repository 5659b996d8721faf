//! Gregorian helpers, the zone that calendar fields are read in, and the
//! normalizing field composition that every arithmetic and snap operation goes
//! through.

use chrono::{
    DateTime, Datelike, FixedOffset, Local, NaiveDate, NaiveDateTime, Offset, TimeDelta, TimeZone,
    Timelike, Utc,
};

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    JANUARY, LEAP_YEAR_CYCLE, MONTHS_PER_YEAR, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE,
    MS_PER_SECOND,
};

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` (1-12) of `year`.
///
/// Returns `None` when `month` is outside 1-12.
pub const fn days_in_month(year: i32, month: u32) -> Option<u32> {
    if month < JANUARY || month > DECEMBER {
        return None;
    }

    if month == FEBRUARY && is_leap_year(year) {
        Some(FEBRUARY_DAYS_LEAP)
    } else {
        Some(DAYS_IN_MONTH[month as usize])
    }
}

/// The zone a [`crate::FluentDate`] reads and writes its calendar fields in.
///
/// Dates are built in the host's local zone unless another one is picked.
/// The zone only decides how an instant maps to year, month, day and time of
/// day; the instant itself, equality and ordering do not depend on it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarZone {
    /// The host's local zone, including its daylight saving rules
    #[default]
    Local,
    Utc,
    /// A constant offset from UTC
    Fixed(FixedOffset),
}

impl From<FixedOffset> for CalendarZone {
    fn from(offset: FixedOffset) -> Self {
        Self::Fixed(offset)
    }
}

impl CalendarZone {
    /// Wall-clock reading of `instant` in this zone
    pub(crate) fn naive_local(self, instant: DateTime<Utc>) -> NaiveDateTime {
        match self {
            Self::Local => instant.with_timezone(&Local).naive_local(),
            Self::Utc => instant.naive_utc(),
            Self::Fixed(offset) => instant.with_timezone(&offset).naive_local(),
        }
    }

    /// Instant shown as `naive` on a wall clock in this zone.
    ///
    /// A reading that occurs twice resolves to the earlier instant. A reading
    /// skipped by a forward transition is taken with the offset in force before
    /// the transition, which lands past the gap.
    pub(crate) fn resolve(self, naive: NaiveDateTime) -> Option<DateTime<Utc>> {
        match self {
            Self::Local => resolve_in(&Local, naive),
            Self::Utc => Some(naive.and_utc()),
            Self::Fixed(offset) => resolve_in(&offset, naive),
        }
    }
}

fn resolve_in<Tz: TimeZone>(zone: &Tz, naive: NaiveDateTime) -> Option<DateTime<Utc>> {
    if let Some(instant) = zone.from_local_datetime(&naive).earliest() {
        return Some(instant.with_timezone(&Utc));
    }

    let before = zone
        .from_local_datetime(&naive.checked_sub_signed(TimeDelta::try_days(1)?)?)
        .earliest()?;
    let offset = i64::from(before.offset().fix().local_minus_utc());
    log::trace!("{naive} does not exist locally, reading it at offset {offset}s");
    naive
        .checked_sub_signed(TimeDelta::try_seconds(offset)?)
        .map(|utc| utc.and_utc())
}

/// Calendar decomposition of an instant in some [`CalendarZone`].
///
/// Fields are deliberately wide and signed: callers push them out of their
/// natural ranges (month 12, day 0, hour -5) and [`Fields::compose`] rolls the
/// excess into the next larger field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Fields {
    pub year: i64,
    /// Zero-based month, January = 0
    pub month0: i64,
    pub day: i64,
    pub hour: i64,
    pub minute: i64,
    pub second: i64,
    pub millisecond: i64,
}

impl Fields {
    pub fn of(instant: DateTime<Utc>, zone: CalendarZone) -> Self {
        let local = zone.naive_local(instant);
        Self {
            year: i64::from(local.year()),
            month0: i64::from(local.month0()),
            day: i64::from(local.day()),
            hour: i64::from(local.hour()),
            minute: i64::from(local.minute()),
            second: i64::from(local.second()),
            millisecond: i64::from(instant.timestamp_subsec_millis()),
        }
    }

    /// Recomposes the fields into an instant in `zone`, normalizing overflow in
    /// every field. Returns `None` when the result is not representable.
    pub fn compose(&self, zone: CalendarZone) -> Option<DateTime<Utc>> {
        let months = self
            .year
            .checked_mul(MONTHS_PER_YEAR)?
            .checked_add(self.month0)?;
        let year = i32::try_from(months.div_euclid(MONTHS_PER_YEAR)).ok()?;
        let month = u32::try_from(months.rem_euclid(MONTHS_PER_YEAR)).ok()? + 1;
        let first = NaiveDate::from_ymd_opt(year, month, 1)?.and_hms_opt(0, 0, 0)?;

        let offset = self
            .day
            .checked_sub(1)?
            .checked_mul(MS_PER_DAY)?
            .checked_add(self.hour.checked_mul(MS_PER_HOUR)?)?
            .checked_add(self.minute.checked_mul(MS_PER_MINUTE)?)?
            .checked_add(self.second.checked_mul(MS_PER_SECOND)?)?
            .checked_add(self.millisecond)?;

        let naive = first.checked_add_signed(TimeDelta::try_milliseconds(offset)?)?;
        zone.resolve(naive)
    }

    pub const fn start_of_day(mut self) -> Self {
        self.hour = 0;
        self.minute = 0;
        self.second = 0;
        self.millisecond = 0;
        self
    }

    pub const fn end_of_day(mut self) -> Self {
        self.hour = 23;
        self.minute = 59;
        self.second = 59;
        self.millisecond = 999;
        self
    }
}

/// Earliest representable instant at millisecond precision
pub(crate) fn min_instant() -> DateTime<Utc> {
    truncate_to_millis(DateTime::<Utc>::MIN_UTC)
}

/// Latest representable instant at millisecond precision
pub(crate) fn max_instant() -> DateTime<Utc> {
    truncate_to_millis(DateTime::<Utc>::MAX_UTC)
}

/// Drops everything below the millisecond.
pub(crate) fn truncate_to_millis(instant: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(instant.timestamp_millis()).unwrap_or(instant)
}
