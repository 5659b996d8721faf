//! Calendar arithmetic and start/end-of-period snapping.
//!
//! Every operation decomposes the instant into calendar fields, adjusts one
//! field and recomposes with rollover. Month and year arithmetic therefore do
//! not clamp to the last day of a short month: January 31st plus one month is
//! "February 31st", which rolls over to March 2nd (March 3rd outside leap
//! years). Subtracting a month from March 31st lands on the same day, so both
//! directions follow one rule.

use crate::{
    DECEMBER, FluentDate, JANUARY, SUNDAY,
    calendar::{Fields, max_instant, min_instant},
    consts::DAYS_PER_WEEK,
};

impl FluentDate {
    /// Recomposes `fields`, saturating at the representable range when the
    /// result falls outside it.
    fn recompose(mut self, fields: Fields, forward: bool) -> Self {
        self.instant = fields.compose(self.zone()).unwrap_or_else(|| {
            log::trace!("calendar arithmetic left the representable range: {fields:?}");
            if forward { max_instant() } else { min_instant() }
        });
        self
    }

    #[must_use]
    pub fn add_years(self, years: i64) -> Self {
        let mut fields = self.fields();
        fields.year = fields.year.saturating_add(years);
        self.recompose(fields, years >= 0)
    }

    #[must_use]
    pub fn add_months(self, months: i64) -> Self {
        let mut fields = self.fields();
        fields.month0 = fields.month0.saturating_add(months);
        self.recompose(fields, months >= 0)
    }

    #[must_use]
    pub fn add_weeks(self, weeks: i64) -> Self {
        self.add_days(weeks.saturating_mul(DAYS_PER_WEEK))
    }

    #[must_use]
    pub fn add_days(self, days: i64) -> Self {
        let mut fields = self.fields();
        fields.day = fields.day.saturating_add(days);
        self.recompose(fields, days >= 0)
    }

    #[must_use]
    pub fn add_hours(self, hours: i64) -> Self {
        let mut fields = self.fields();
        fields.hour = fields.hour.saturating_add(hours);
        self.recompose(fields, hours >= 0)
    }

    #[must_use]
    pub fn add_minutes(self, minutes: i64) -> Self {
        let mut fields = self.fields();
        fields.minute = fields.minute.saturating_add(minutes);
        self.recompose(fields, minutes >= 0)
    }

    #[must_use]
    pub fn add_seconds(self, seconds: i64) -> Self {
        let mut fields = self.fields();
        fields.second = fields.second.saturating_add(seconds);
        self.recompose(fields, seconds >= 0)
    }

    #[must_use]
    pub fn sub_years(self, years: i64) -> Self {
        self.add_years(years.saturating_neg())
    }

    #[must_use]
    pub fn sub_months(self, months: i64) -> Self {
        self.add_months(months.saturating_neg())
    }

    #[must_use]
    pub fn sub_weeks(self, weeks: i64) -> Self {
        self.add_weeks(weeks.saturating_neg())
    }

    #[must_use]
    pub fn sub_days(self, days: i64) -> Self {
        self.add_days(days.saturating_neg())
    }

    #[must_use]
    pub fn sub_hours(self, hours: i64) -> Self {
        self.add_hours(hours.saturating_neg())
    }

    #[must_use]
    pub fn sub_minutes(self, minutes: i64) -> Self {
        self.add_minutes(minutes.saturating_neg())
    }

    #[must_use]
    pub fn sub_seconds(self, seconds: i64) -> Self {
        self.add_seconds(seconds.saturating_neg())
    }

    #[must_use]
    pub fn add_year(self) -> Self {
        self.add_years(1)
    }

    #[must_use]
    pub fn add_month(self) -> Self {
        self.add_months(1)
    }

    #[must_use]
    pub fn add_week(self) -> Self {
        self.add_weeks(1)
    }

    #[must_use]
    pub fn add_day(self) -> Self {
        self.add_days(1)
    }

    #[must_use]
    pub fn add_hour(self) -> Self {
        self.add_hours(1)
    }

    #[must_use]
    pub fn add_minute(self) -> Self {
        self.add_minutes(1)
    }

    #[must_use]
    pub fn add_second(self) -> Self {
        self.add_seconds(1)
    }

    #[must_use]
    pub fn sub_year(self) -> Self {
        self.sub_years(1)
    }

    #[must_use]
    pub fn sub_month(self) -> Self {
        self.sub_months(1)
    }

    #[must_use]
    pub fn sub_week(self) -> Self {
        self.sub_weeks(1)
    }

    #[must_use]
    pub fn sub_day(self) -> Self {
        self.sub_days(1)
    }

    #[must_use]
    pub fn sub_hour(self) -> Self {
        self.sub_hours(1)
    }

    #[must_use]
    pub fn sub_minute(self) -> Self {
        self.sub_minutes(1)
    }

    #[must_use]
    pub fn sub_second(self) -> Self {
        self.sub_seconds(1)
    }

    /// 00:00:00.000 of the same day
    #[must_use]
    pub fn start_of_day(self) -> Self {
        let fields = self.fields().start_of_day();
        self.recompose(fields, false)
    }

    /// 23:59:59.999 of the same day
    #[must_use]
    pub fn end_of_day(self) -> Self {
        let fields = self.fields().end_of_day();
        self.recompose(fields, true)
    }

    #[must_use]
    pub fn start_of_month(self) -> Self {
        let mut fields = self.fields();
        fields.day = 1;
        self.recompose(fields.start_of_day(), false)
    }

    /// Last day of the month at 23:59:59.999
    #[must_use]
    pub fn end_of_month(self) -> Self {
        let mut fields = self.fields();
        // day 0 of the next month
        fields.month0 += 1;
        fields.day = 0;
        self.recompose(fields.end_of_day(), true)
    }

    #[must_use]
    pub fn start_of_year(self) -> Self {
        let mut fields = self.fields();
        fields.month0 = i64::from(JANUARY) - 1;
        fields.day = 1;
        self.recompose(fields.start_of_day(), false)
    }

    #[must_use]
    pub fn end_of_year(self) -> Self {
        let mut fields = self.fields();
        fields.month0 = i64::from(DECEMBER) - 1;
        fields.day = 31;
        self.recompose(fields.end_of_day(), true)
    }

    /// Monday of the same week at midnight. Weeks run Monday through Sunday.
    #[must_use]
    pub fn start_of_week(self) -> Self {
        let weekday = self.day_of_week();
        let mut fields = self.fields();
        fields.day = if weekday == SUNDAY {
            fields.day - 6
        } else {
            fields.day - i64::from(weekday) + 1
        };
        self.recompose(fields.start_of_day(), false)
    }

    /// Sunday of the same week at 23:59:59.999
    #[must_use]
    pub fn end_of_week(self) -> Self {
        self.start_of_week().add_days(6).end_of_day()
    }
}
