use chrono::{Datelike, NaiveDateTime};

use crate::{
    Clock, FluentDate, SATURDAY, SUNDAY, SystemClock, ToInstant, calendar::is_leap_year,
};

impl FluentDate {
    /// Strictly earlier than `other`, at millisecond precision
    pub fn is_before(&self, other: impl ToInstant) -> bool {
        self.instant < other.to_instant()
    }

    /// Strictly later than `other`, at millisecond precision
    pub fn is_after(&self, other: impl ToInstant) -> bool {
        self.instant > other.to_instant()
    }

    /// Same instant, at millisecond precision
    pub fn is_same(&self, other: impl ToInstant) -> bool {
        self.instant == other.to_instant()
    }

    /// Wall-clock reading of `other` in this date's zone
    fn local_of(&self, other: impl ToInstant) -> NaiveDateTime {
        self.zone().naive_local(other.to_instant())
    }

    /// Same calendar day, ignoring the time of day. `other` is read in this
    /// date's zone.
    pub fn is_same_day(&self, other: impl ToInstant) -> bool {
        self.local().date() == self.local_of(other).date()
    }

    /// Same year and month, read in this date's zone
    pub fn is_same_month(&self, other: impl ToInstant) -> bool {
        let other = self.local_of(other);
        self.year() == other.year() && self.month() == other.month()
    }

    /// Same calendar year, read in this date's zone
    pub fn is_same_year(&self, other: impl ToInstant) -> bool {
        self.year() == self.local_of(other).year()
    }

    /// Whether this date lies between `start` and `end`.
    ///
    /// With `inclusive` the bounds themselves count as between. Bounds are
    /// not reordered; a `start` later than `end` matches nothing.
    pub fn is_between(&self, start: impl ToInstant, end: impl ToInstant, inclusive: bool) -> bool {
        let (start, end) = (start.to_instant(), end.to_instant());
        if inclusive {
            start <= self.instant && self.instant <= end
        } else {
            start < self.instant && self.instant < end
        }
    }

    /// Falls on the current day
    pub fn is_today(&self) -> bool {
        self.is_today_with(SystemClock)
    }

    /// Falls on the day `clock` reads, in this date's zone
    pub fn is_today_with(&self, clock: impl Clock) -> bool {
        self.is_same_day(clock.now())
    }

    /// Falls on the day after the current one
    pub fn is_tomorrow(&self) -> bool {
        self.is_tomorrow_with(SystemClock)
    }

    /// Falls on the day after the one `clock` reads, in this date's zone
    pub fn is_tomorrow_with(&self, clock: impl Clock) -> bool {
        self.is_same_day(self.zone().now_with(clock).add_day())
    }

    /// Falls on the day before the current one
    pub fn is_yesterday(&self) -> bool {
        self.is_yesterday_with(SystemClock)
    }

    /// Falls on the day before the one `clock` reads, in this date's zone
    pub fn is_yesterday_with(&self, clock: impl Clock) -> bool {
        self.is_same_day(self.zone().now_with(clock).sub_day())
    }

    /// Later than now. Repeated calls can disagree as time passes.
    pub fn is_future(&self) -> bool {
        self.is_future_with(SystemClock)
    }

    /// Later than what `clock` reads
    pub fn is_future_with(&self, clock: impl Clock) -> bool {
        self.is_after(clock.now())
    }

    /// Earlier than now. Repeated calls can disagree as time passes.
    pub fn is_past(&self) -> bool {
        self.is_past_with(SystemClock)
    }

    /// Earlier than what `clock` reads
    pub fn is_past_with(&self, clock: impl Clock) -> bool {
        self.is_before(clock.now())
    }

    /// Whether this date's year has a February 29th
    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year())
    }

    /// Monday through Friday
    pub fn is_weekday(&self) -> bool {
        !self.is_weekend()
    }

    /// Saturday or Sunday
    pub fn is_weekend(&self) -> bool {
        matches!(self.day_of_week(), SUNDAY | SATURDAY)
    }
}

#[cfg(test)]
mod tests {
    use std::time::SystemTime;

    use chrono::{FixedOffset, TimeZone, Utc};

    use crate::{CalendarZone, FixedClock, FluentDate};

    fn date_time(year: i64, month: i64, day: i64, hour: i64, minute: i64, second: i64) -> FluentDate {
        CalendarZone::Utc.create(year, month, day, hour, minute, second).unwrap()
    }

    fn christmas_clock() -> FixedClock {
        FixedClock::new(Utc.with_ymd_and_hms(2024, 12, 25, 10, 30, 0).unwrap())
    }

    #[test]
    fn test_before_after_same() {
        let a = date_time(2024, 12, 25, 10, 30, 0);
        let b = FluentDate::from_timestamp_millis(a.timestamp_millis() + 1).unwrap();

        assert!(a.is_before(&b));
        assert!(!b.is_before(&a));
        assert!(b.is_after(&a));
        assert!(!a.is_after(&a));
        assert!(!a.is_before(&a));

        assert!(a.is_same(&a));
        assert!(!a.is_same(&b));
        assert!(a.is_same(a.to_instant()));
    }

    #[test]
    fn test_accepts_raw_instants() {
        let a = date_time(1970, 1, 1, 0, 0, 1);
        assert!(a.is_after(SystemTime::UNIX_EPOCH));
        assert!(a.is_after(Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap()));
        assert!(a.is_same_day(SystemTime::UNIX_EPOCH));
    }

    #[test]
    fn test_same_calendar_components() {
        let morning = date_time(2024, 12, 25, 0, 0, 0);
        let evening = date_time(2024, 12, 25, 23, 59, 59);
        let next_day = date_time(2024, 12, 26, 0, 0, 0);
        let last_year = date_time(2023, 12, 25, 12, 0, 0);

        assert!(morning.is_same_day(&evening));
        assert!(!morning.is_same(&evening));
        assert!(!evening.is_same_day(&next_day));

        assert!(morning.is_same_month(&next_day));
        assert!(!morning.is_same_month(&last_year));
        assert!(!morning.is_same_month(date_time(2024, 11, 25, 0, 0, 0)));

        assert!(morning.is_same_year(date_time(2024, 1, 1, 0, 0, 0)));
        assert!(!morning.is_same_year(&last_year));
    }

    #[test]
    fn test_between() {
        let start = date_time(2024, 1, 1, 0, 0, 0);
        let end = date_time(2024, 12, 31, 0, 0, 0);
        let middle = date_time(2024, 6, 15, 0, 0, 0);

        assert!(middle.is_between(&start, &end, true));
        assert!(middle.is_between(&start, &end, false));

        assert!(start.is_between(&start, &end, true));
        assert!(end.is_between(&start, &end, true));
        assert!(!start.is_between(&start, &end, false));
        assert!(!end.is_between(&start, &end, false));

        let outside = date_time(2025, 1, 1, 0, 0, 0);
        assert!(!outside.is_between(&start, &end, true));

        // Reversed bounds are not reordered
        assert!(!middle.is_between(&end, &start, true));
    }

    #[test]
    fn test_relative_days_with_clock() {
        let clock = christmas_clock();

        let today = date_time(2024, 12, 25, 23, 0, 0);
        assert!(today.is_today_with(clock));
        assert!(!today.is_tomorrow_with(clock));
        assert!(!today.is_yesterday_with(clock));

        let tomorrow = date_time(2024, 12, 26, 1, 0, 0);
        assert!(tomorrow.is_tomorrow_with(clock));
        assert!(!tomorrow.is_today_with(clock));

        let yesterday = date_time(2024, 12, 24, 0, 0, 0);
        assert!(yesterday.is_yesterday_with(clock));
        assert!(!yesterday.is_today_with(clock));
    }

    #[test]
    fn test_relative_days_follow_the_zone() {
        // the clock reads 2024-12-25 10:30 UTC, already 19:30 in Tokyo
        let clock = christmas_clock();
        let tokyo = CalendarZone::from(FixedOffset::east_opt(9 * 3_600).unwrap());

        // 2024-12-26 02:00 in Tokyo is still the 25th in UTC
        let early = tokyo.create(2024, 12, 26, 2, 0, 0).unwrap();
        assert!(early.is_tomorrow_with(clock));
        assert!(!early.is_today_with(clock));
        assert!(early.clone().in_zone(CalendarZone::Utc).is_today_with(clock));
        assert!(early.is_same_day(date_time(2024, 12, 25, 20, 0, 0)));
        assert!(!early.is_same_day(date_time(2024, 12, 26, 20, 0, 0)));
    }

    #[test]
    fn test_relative_days_with_system_clock() {
        assert!(FluentDate::now().is_today());
        assert!(FluentDate::now().add_day().is_tomorrow());
        assert!(FluentDate::now().sub_day().is_yesterday());
        assert!(!FluentDate::now().add_days(2).is_tomorrow());
    }

    #[test]
    fn test_future_and_past() {
        let clock = christmas_clock();
        let now = FluentDate::now_with(clock);
        assert!(!now.is_future_with(clock));
        assert!(!now.is_past_with(clock));
        assert!(now.clone().add_second().is_future_with(clock));
        assert!(now.sub_second().is_past_with(clock));

        assert!(FluentDate::now().add_hour().is_future());
        assert!(FluentDate::now().sub_hour().is_past());
    }

    #[test]
    fn test_leap_year_oracle() {
        for (year, expected) in [
            (1900, false),
            (2000, true),
            (2023, false),
            (2024, true),
            (2100, false),
        ] {
            let date = FluentDate::create_date(year, 6, 1).unwrap();
            assert_eq!(date.is_leap_year(), expected, "year {year}");
        }
    }

    #[test]
    fn test_weekday_and_weekend() {
        // 2024-12-23 is a Monday
        let monday = FluentDate::create_date(2024, 12, 23).unwrap();
        let expected = [true, true, true, true, true, false, false];
        for (offset, weekday) in expected.iter().enumerate() {
            let date = monday.clone().add_days(offset as i64);
            assert_eq!(date.is_weekday(), *weekday, "{date}");
            assert_eq!(date.is_weekend(), !*weekday, "{date}");
        }
    }
}
