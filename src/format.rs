//! Token-based rendering and the matching format-driven parser.
//!
//! Templates are read one character at a time. Each recognized letter is
//! replaced by its field; everything else is copied through untouched, so a
//! rendered field can never be re-read as a token.

use chrono::{NaiveDate, NaiveDateTime};

use crate::{
    CalendarZone, DATE_FORMAT, DATE_TIME_FORMAT, Error, FluentDate, MONTH_ABBREVIATIONS,
    MONTH_NAMES, NOON, TIME_FORMAT, WEEKDAY_ABBREVIATIONS, WEEKDAY_NAMES, invalid_input,
};

fn push_padded(out: &mut String, value: u32) {
    if value < 10 {
        out.push('0');
    }
    out.push_str(&value.to_string());
}

/// At least four digits, with the sign in front of the padding: `0800`, `-0005`
fn push_year(out: &mut String, year: i32) {
    if year < 0 {
        out.push('-');
    }
    out.push_str(&format!("{:04}", year.unsigned_abs()));
}

/// Hour on a 12-hour clock, where 0 and 12 both read as 12
const fn twelve_hour(hour: u32) -> u32 {
    match hour % NOON {
        0 => NOON,
        h => h,
    }
}

impl FluentDate {
    /// Renders the date through a template.
    ///
    /// | Token | Output |
    /// |---|---|
    /// | `Y` / `y` | year, at least four digits / last two digits |
    /// | `F` / `M` | `January` / `Jan` |
    /// | `m` / `n` | month `01`-`12` / `1`-`12` |
    /// | `d` / `j` | day `01`-`31` / `1`-`31` |
    /// | `l` / `D` | `Monday` / `Mon` |
    /// | `H` / `G` | hour `00`-`23` / `0`-`23` |
    /// | `h` / `g` | hour `01`-`12` / `1`-`12` |
    /// | `i` / `s` | minute / second, padded |
    /// | `A` / `a` | `AM`/`PM` / `am`/`pm` |
    ///
    /// ```
    /// use fluent_date::FluentDate;
    ///
    /// let date = FluentDate::create(2024, 12, 25, 18, 5, 0)?;
    /// assert_eq!(date.format("l, F j, Y g:i a"), "Wednesday, December 25, 2024 6:05 pm");
    /// # Ok::<(), fluent_date::Error>(())
    /// ```
    pub fn format(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len() + 16);
        for token in template.chars() {
            self.render_token(token, &mut out);
        }
        out
    }

    fn render_token(&self, token: char, out: &mut String) {
        let month_index = self.month() as usize - 1;
        let weekday_index = self.day_of_week() as usize;
        match token {
            'Y' => push_year(out, self.year()),
            'y' => push_padded(out, self.year().rem_euclid(100).unsigned_abs()),
            'F' => out.push_str(MONTH_NAMES[month_index]),
            'M' => out.push_str(MONTH_ABBREVIATIONS[month_index]),
            'm' => push_padded(out, self.month()),
            'n' => out.push_str(&self.month().to_string()),
            'd' => push_padded(out, self.day()),
            'j' => out.push_str(&self.day().to_string()),
            'l' => out.push_str(WEEKDAY_NAMES[weekday_index]),
            'D' => out.push_str(WEEKDAY_ABBREVIATIONS[weekday_index]),
            'H' => push_padded(out, self.hour()),
            'G' => out.push_str(&self.hour().to_string()),
            'h' => push_padded(out, twelve_hour(self.hour())),
            'g' => out.push_str(&twelve_hour(self.hour()).to_string()),
            'i' => push_padded(out, self.minute()),
            's' => push_padded(out, self.second()),
            'A' => out.push_str(if self.hour() < NOON { "AM" } else { "PM" }),
            'a' => out.push_str(if self.hour() < NOON { "am" } else { "pm" }),
            other => out.push(other),
        }
    }

    /// `Y-m-d`
    pub fn to_date_string(&self) -> String {
        self.format(DATE_FORMAT)
    }

    /// `H:i:s`
    pub fn to_time_string(&self) -> String {
        self.format(TIME_FORMAT)
    }

    /// `Y-m-d H:i:s`
    pub fn to_date_time_string(&self) -> String {
        self.format(DATE_TIME_FORMAT)
    }

    /// Parses `input` laid out according to `template`, using the same
    /// tokens as [`FluentDate::format`]. The result is local time; templates
    /// without time tokens give midnight.
    ///
    /// # Errors
    /// Returns `Error::InvalidInput` if `input` does not match the template
    /// or names a date that does not exist.
    pub fn create_from_format(template: &str, input: &str) -> Result<Self, Error> {
        CalendarZone::Local.create_from_format(template, input)
    }
}

impl CalendarZone {
    /// [`FluentDate::create_from_format`], reading the wall-clock time in
    /// this zone.
    ///
    /// # Errors
    /// Returns `Error::InvalidInput` if `input` does not match the template
    /// or names a date that does not exist.
    pub fn create_from_format(self, template: &str, input: &str) -> Result<FluentDate, Error> {
        let mut pattern = String::with_capacity(template.len() * 2);
        let mut has_time = false;
        for token in template.chars() {
            let specifier = match token {
                'Y' => "%Y",
                'y' => "%y",
                'F' => "%B",
                'M' => "%b",
                'm' | 'n' => "%m",
                'd' | 'j' => "%d",
                'l' => "%A",
                'D' => "%a",
                'H' | 'G' => "%H",
                'h' | 'g' => "%I",
                'i' => "%M",
                's' => "%S",
                'A' | 'a' => "%p",
                '%' => "%%",
                literal => {
                    pattern.push(literal);
                    continue;
                }
            };
            has_time |= matches!(token, 'H' | 'G' | 'h' | 'g' | 'i' | 's');
            pattern.push_str(specifier);
        }

        let parsed = if has_time {
            NaiveDateTime::parse_from_str(input, &pattern).ok()
        } else {
            NaiveDate::parse_from_str(input, &pattern)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        };

        parsed
            .and_then(|naive| self.resolve(naive))
            .map(|instant| self.at(instant))
            .ok_or_else(|| invalid_input(format!("{input:?} does not match format {template:?}")))
    }
}
