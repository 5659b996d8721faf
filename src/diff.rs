//! Differences between dates, numeric and humanized.

use chrono::Datelike;

use crate::{
    FluentDate, MS_PER_AVERAGE_YEAR, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND,
    MS_PER_WEEK, MONTHS_PER_YEAR, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
    SECONDS_PER_MONTH, SECONDS_PER_YEAR, ToInstant, prelude::*,
};

/// Unit chosen by [`FluentDate::diff_for_humans`].
///
/// Months are 30 days and years 365 days; these are approximations, not
/// calendar-accurate lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum HumanUnit {
    #[display(fmt = "second")]
    Second,
    #[display(fmt = "minute")]
    Minute,
    #[display(fmt = "hour")]
    Hour,
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "year")]
    Year,
}

impl HumanUnit {
    /// Length of one unit in seconds
    pub const fn seconds(self) -> i64 {
        match self {
            Self::Second => 1,
            Self::Minute => SECONDS_PER_MINUTE,
            Self::Hour => SECONDS_PER_HOUR,
            Self::Day => SECONDS_PER_DAY,
            Self::Month => SECONDS_PER_MONTH,
            Self::Year => SECONDS_PER_YEAR,
        }
    }

    /// Picks the unit for a duration of `seconds` (sign is ignored).
    pub const fn for_seconds(seconds: i64) -> Self {
        let magnitude = seconds.unsigned_abs();
        if magnitude < SECONDS_PER_MINUTE as u64 {
            Self::Second
        } else if magnitude < SECONDS_PER_HOUR as u64 {
            Self::Minute
        } else if magnitude < SECONDS_PER_DAY as u64 {
            Self::Hour
        } else if magnitude < SECONDS_PER_MONTH as u64 {
            Self::Day
        } else if magnitude < SECONDS_PER_YEAR as u64 {
            Self::Month
        } else {
            Self::Year
        }
    }
}

/// Renders a signed second count: negative is in the past.
fn humanize(seconds: i64) -> String {
    let unit = HumanUnit::for_seconds(seconds);
    let count = seconds.unsigned_abs() / unit.seconds().unsigned_abs();
    let plural = if count == 1 { "" } else { "s" };

    if seconds < 0 {
        format!("{count} {unit}{plural} ago")
    } else {
        format!("in {count} {unit}{plural}")
    }
}

impl FluentDate {
    /// `self - other` in milliseconds, positive when `self` is later
    fn delta_millis(&self, other: impl ToInstant) -> i64 {
        self.timestamp_millis() - other.to_instant().timestamp_millis()
    }

    /// Elapsed average years (365.25 days), floored
    pub fn diff_in_years(&self, other: impl ToInstant) -> i64 {
        self.delta_millis(other).div_euclid(MS_PER_AVERAGE_YEAR)
    }

    /// Calendar month distance. Only year and month take part, so
    /// January 31st to March 1st is two months. `other` is read in this
    /// date's zone.
    pub fn diff_in_months(&self, other: impl ToInstant) -> i64 {
        let other = self.zone().naive_local(other.to_instant());
        (i64::from(self.year()) - i64::from(other.year())) * MONTHS_PER_YEAR
            + (i64::from(self.month()) - i64::from(other.month()))
    }

    /// Elapsed whole weeks, floored
    pub fn diff_in_weeks(&self, other: impl ToInstant) -> i64 {
        self.delta_millis(other).div_euclid(MS_PER_WEEK)
    }

    /// Elapsed whole days, floored: half a day in the past is -1
    pub fn diff_in_days(&self, other: impl ToInstant) -> i64 {
        self.delta_millis(other).div_euclid(MS_PER_DAY)
    }

    /// Elapsed whole hours, floored
    pub fn diff_in_hours(&self, other: impl ToInstant) -> i64 {
        self.delta_millis(other).div_euclid(MS_PER_HOUR)
    }

    /// Elapsed whole minutes, floored
    pub fn diff_in_minutes(&self, other: impl ToInstant) -> i64 {
        self.delta_millis(other).div_euclid(MS_PER_MINUTE)
    }

    /// Elapsed whole seconds, floored
    pub fn diff_in_seconds(&self, other: impl ToInstant) -> i64 {
        self.delta_millis(other).div_euclid(MS_PER_SECOND)
    }

    /// Describes the distance to `other` in words, e.g. `"3 days ago"` or
    /// `"in 1 hour"`. Pass [`crate::SystemClock`] to compare against now.
    ///
    /// ```
    /// use fluent_date::{FixedClock, FluentDate};
    ///
    /// let now = FluentDate::create(2024, 12, 25, 12, 0, 0)?;
    /// let clock = FixedClock::new(now.to_instant());
    /// let earlier = now.clone().sub_minutes(90);
    /// assert_eq!(earlier.diff_for_humans(clock), "1 hour ago");
    /// assert_eq!(now.add_days(3).diff_for_humans(clock), "in 3 days");
    /// # Ok::<(), fluent_date::Error>(())
    /// ```
    pub fn diff_for_humans(&self, other: impl ToInstant) -> String {
        humanize(self.diff_in_seconds(other))
    }
}
