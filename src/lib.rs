mod arithmetic;
mod calendar;
mod clock;
mod compare;
mod consts;
mod diff;
mod format;
mod prelude;

pub use calendar::{CalendarZone, days_in_month, is_leap_year};
pub use clock::{Clock, FixedClock, SystemClock, ToInstant};
pub use consts::*;
pub use diff::HumanUnit;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::time::SystemTime;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, SecondsFormat, Timelike, Utc};

use crate::calendar::{Fields, truncate_to_millis};

/// A calendar date-time: one instant at millisecond precision plus an
/// optional timezone tag.
///
/// Calendar fields are read in the date's [`CalendarZone`], the host's local
/// zone unless another one is picked. The timezone tag is carried along as
/// metadata only; no operation interprets it. Arithmetic and snapping consume
/// the value and return the adjusted one, so calls chain:
///
/// ```
/// use fluent_date::FluentDate;
///
/// let date = FluentDate::create_date(2024, 1, 15)?.add_months(2).end_of_month();
/// assert_eq!(date.to_date_time_string(), "2024-03-31 23:59:59");
/// # Ok::<(), fluent_date::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct FluentDate {
    pub(crate) instant: DateTime<Utc>,
    zone: CalendarZone,
    timezone: Option<String>,
}

/// Error type for building a [`FluentDate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The source could not be resolved to a valid instant.
    #[error("Invalid date input: {0}")]
    InvalidInput(String),
}

fn invalid_input(message: String) -> Error {
    log::debug!("rejecting date input: {message}");
    Error::InvalidInput(message)
}

/// Layouts tried by the string parser after RFC 3339
const NAIVE_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];
const NAIVE_DATE_FORMAT: &str = "%Y-%m-%d";

impl FluentDate {
    /// Captures the current instant from the system clock.
    pub fn now() -> Self {
        Self::now_with(SystemClock)
    }

    /// Captures the current instant from `clock`.
    pub fn now_with(clock: impl Clock) -> Self {
        CalendarZone::Local.now_with(clock)
    }

    /// Today at local midnight.
    pub fn today() -> Self {
        Self::today_with(SystemClock)
    }

    /// Midnight of the local day `clock` reads.
    pub fn today_with(clock: impl Clock) -> Self {
        CalendarZone::Local.today_with(clock)
    }

    /// Tomorrow at local midnight.
    pub fn tomorrow() -> Self {
        Self::tomorrow_with(SystemClock)
    }

    /// Midnight of the local day after the one `clock` reads.
    pub fn tomorrow_with(clock: impl Clock) -> Self {
        Self::today_with(clock).add_day()
    }

    /// Yesterday at local midnight.
    pub fn yesterday() -> Self {
        Self::yesterday_with(SystemClock)
    }

    /// Midnight of the local day before the one `clock` reads.
    pub fn yesterday_with(clock: impl Clock) -> Self {
        Self::today_with(clock).sub_day()
    }

    /// Wraps an instant. Anything below the millisecond is dropped.
    pub fn from_instant(instant: DateTime<Utc>) -> Self {
        CalendarZone::Local.at(instant)
    }

    /// Wraps a Unix timestamp in milliseconds.
    ///
    /// # Errors
    /// Returns `Error::InvalidInput` if the timestamp is outside the representable range.
    pub fn from_timestamp_millis(millis: i64) -> Result<Self, Error> {
        DateTime::from_timestamp_millis(millis)
            .map(Self::from_instant)
            .ok_or_else(|| invalid_input(format!("timestamp {millis}ms is out of range")))
    }

    /// Composes a local date-time from calendar components (month is 1-based).
    ///
    /// Components outside their natural range roll over into the next larger
    /// one: month 13 is January of the following year, day 0 is the last day
    /// of the previous month, hour 24 is midnight of the next day.
    ///
    /// # Errors
    /// Returns `Error::InvalidInput` if the normalized result is outside the representable range.
    pub fn create(
        year: i64,
        month: i64,
        day: i64,
        hour: i64,
        minute: i64,
        second: i64,
    ) -> Result<Self, Error> {
        CalendarZone::Local.create(year, month, day, hour, minute, second)
    }

    /// Local midnight of the given calendar day.
    ///
    /// # Errors
    /// Returns `Error::InvalidInput` if the normalized result is outside the representable range.
    pub fn create_date(year: i64, month: i64, day: i64) -> Result<Self, Error> {
        CalendarZone::Local.create_date(year, month, day)
    }

    /// Parses a date string. See [`FromStr`] for the accepted layouts.
    ///
    /// # Errors
    /// Returns `Error::InvalidInput` if the string is not a recognized date.
    pub fn parse(input: &str) -> Result<Self, Error> {
        input.parse()
    }

    /// The same instant with its calendar fields read in `zone`.
    #[must_use]
    pub fn in_zone(mut self, zone: impl Into<CalendarZone>) -> Self {
        self.zone = zone.into();
        self
    }

    /// Returns the zone calendar fields are read in
    pub const fn zone(&self) -> CalendarZone {
        self.zone
    }

    /// Attaches a timezone tag. The tag is metadata and does not change the instant.
    #[must_use]
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    /// Returns the timezone tag, if one was attached
    pub fn timezone(&self) -> Option<&str> {
        self.timezone.as_deref()
    }

    /// Wall-clock reading of the instant in this date's zone
    pub(crate) fn local(&self) -> NaiveDateTime {
        self.zone.naive_local(self.instant)
    }

    pub(crate) fn fields(&self) -> Fields {
        Fields::of(self.instant, self.zone)
    }

    /// Returns the calendar year
    pub fn year(&self) -> i32 {
        self.local().year()
    }

    /// Returns the month (1-12)
    pub fn month(&self) -> u32 {
        self.local().month()
    }

    /// Returns the day of month (1-31)
    pub fn day(&self) -> u32 {
        self.local().day()
    }

    /// Returns the hour (0-23)
    pub fn hour(&self) -> u32 {
        self.local().hour()
    }

    /// Returns the minute (0-59)
    pub fn minute(&self) -> u32 {
        self.local().minute()
    }

    /// Returns the second (0-59)
    pub fn second(&self) -> u32 {
        self.local().second()
    }

    /// Returns the millisecond (0-999)
    pub fn millisecond(&self) -> u32 {
        self.instant.timestamp_subsec_millis()
    }

    /// Returns the weekday number, Sunday = 0 through Saturday = 6
    pub fn day_of_week(&self) -> u32 {
        self.local().weekday().num_days_from_sunday()
    }

    /// Returns the number of days in this date's month
    pub fn days_in_month(&self) -> u32 {
        // month() is always 1-12
        days_in_month(self.year(), self.month()).unwrap_or_default()
    }

    /// Milliseconds since the Unix epoch
    pub fn timestamp_millis(&self) -> i64 {
        self.instant.timestamp_millis()
    }

    /// Returns a copy of the wrapped instant
    pub fn to_instant(&self) -> DateTime<Utc> {
        self.instant
    }

    /// ISO 8601 in UTC with milliseconds, e.g. `2024-12-25T10:30:00.000Z`
    pub fn to_iso_string(&self) -> String {
        self.instant.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl Default for FluentDate {
    fn default() -> Self {
        Self::now()
    }
}

impl From<DateTime<Utc>> for FluentDate {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::from_instant(instant)
    }
}

impl From<SystemTime> for FluentDate {
    fn from(time: SystemTime) -> Self {
        Self::from_instant(DateTime::<Utc>::from(time))
    }
}

impl From<FluentDate> for DateTime<Utc> {
    fn from(date: FluentDate) -> Self {
        date.instant
    }
}

impl TryFrom<i64> for FluentDate {
    type Error = Error;

    fn try_from(millis: i64) -> Result<Self, Self::Error> {
        Self::from_timestamp_millis(millis)
    }
}

impl CalendarZone {
    /// Wraps an instant, reading its fields in this zone. Anything below the
    /// millisecond is dropped.
    pub fn at(self, instant: DateTime<Utc>) -> FluentDate {
        FluentDate {
            instant: truncate_to_millis(instant),
            zone: self,
            timezone: None,
        }
    }

    /// Captures the current instant from `clock`, read in this zone.
    pub fn now_with(self, clock: impl Clock) -> FluentDate {
        self.at(clock.now())
    }

    /// Midnight, in this zone, of the day `clock` reads.
    pub fn today_with(self, clock: impl Clock) -> FluentDate {
        self.now_with(clock).start_of_day()
    }

    /// Composes a date-time from calendar components in this zone. See
    /// [`FluentDate::create`] for the rollover rules.
    ///
    /// # Errors
    /// Returns `Error::InvalidInput` if the normalized result is outside the representable range.
    pub fn create(
        self,
        year: i64,
        month: i64,
        day: i64,
        hour: i64,
        minute: i64,
        second: i64,
    ) -> Result<FluentDate, Error> {
        let fields = Fields {
            year,
            month0: month.saturating_sub(1),
            day,
            hour,
            minute,
            second,
            millisecond: 0,
        };
        fields.compose(self).map(|instant| self.at(instant)).ok_or_else(|| {
            invalid_input(format!(
                "{year}-{month}-{day} {hour}:{minute}:{second} is out of range"
            ))
        })
    }

    /// Midnight of the given calendar day in this zone.
    ///
    /// # Errors
    /// Returns `Error::InvalidInput` if the normalized result is outside the representable range.
    pub fn create_date(self, year: i64, month: i64, day: i64) -> Result<FluentDate, Error> {
        self.create(year, month, day, 0, 0, 0)
    }

    /// Parses a date string, reading layouts without an offset as wall-clock
    /// time in this zone. See [`FromStr`] for the accepted layouts.
    ///
    /// # Errors
    /// Returns `Error::InvalidInput` if the string is not a recognized date.
    pub fn parse(self, input: &str) -> Result<FluentDate, Error> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(invalid_input("empty date string".to_owned()));
        }

        if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(self.at(instant.with_timezone(&Utc)));
        }

        NAIVE_DATE_TIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(trimmed, NAIVE_DATE_FORMAT)
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
            .and_then(|naive| self.resolve(naive))
            .map(|instant| self.at(instant))
            .ok_or_else(|| invalid_input(format!("unrecognized date string: {trimmed}")))
    }
}

/// Accepts RFC 3339 (any offset), `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS`
/// (both with optional fractional seconds) and `YYYY-MM-DD` (midnight).
/// Layouts without an offset are local time. Surrounding whitespace is
/// ignored.
impl FromStr for FluentDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CalendarZone::Local.parse(s)
    }
}

impl fmt::Display for FluentDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_date_time_string())
    }
}

// Equality, ordering and hashing look at the instant only, like `is_same`.
impl PartialEq for FluentDate {
    fn eq(&self, other: &Self) -> bool {
        self.instant == other.instant
    }
}

impl Eq for FluentDate {}

impl PartialOrd for FluentDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FluentDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.instant.cmp(&other.instant)
    }
}

impl Hash for FluentDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.instant.hash(state);
    }
}

impl serde::Serialize for FluentDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_iso_string())
    }
}

impl<'de> serde::Deserialize<'de> for FluentDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
