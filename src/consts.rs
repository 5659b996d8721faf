/// Month number for January
pub const JANUARY: u32 = 1;
/// Month number for February
pub const FEBRUARY: u32 = 2;
/// Month number for December
pub const DECEMBER: u32 = 12;

/// Months in a year
pub const MONTHS_PER_YEAR: i64 = 12;
/// Days in a week
pub const DAYS_PER_WEEK: i64 = 7;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u32 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u32; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Full English month names, January first
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Abbreviated English month names, January first
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Full English weekday names, Sunday first
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Abbreviated English weekday names, Sunday first
pub const WEEKDAY_ABBREVIATIONS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Weekday number of Sunday
pub const SUNDAY: u32 = 0;
/// Weekday number of Saturday
pub const SATURDAY: u32 = 6;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

pub const MS_PER_SECOND: i64 = 1_000;
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;
pub const MS_PER_WEEK: i64 = DAYS_PER_WEEK * MS_PER_DAY;
/// Average Julian year (365.25 days), used by `diff_in_years`
pub const MS_PER_AVERAGE_YEAR: i64 = 36_525 * MS_PER_DAY / 100;

/// First hour rendered as PM
pub const NOON: u32 = 12;

pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 3_600;
pub const SECONDS_PER_DAY: i64 = 86_400;
/// 30-day month used by humanized differences
pub const SECONDS_PER_MONTH: i64 = 30 * SECONDS_PER_DAY;
/// 365-day year used by humanized differences
pub const SECONDS_PER_YEAR: i64 = 365 * SECONDS_PER_DAY;

/// Template behind `to_date_string`
pub const DATE_FORMAT: &str = "Y-m-d";
/// Template behind `to_time_string`
pub const TIME_FORMAT: &str = "H:i:s";
/// Template behind `to_date_time_string` and `Display`
pub const DATE_TIME_FORMAT: &str = "Y-m-d H:i:s";
