use chrono::{Datelike, NaiveDate, Weekday};
use std::ops::RangeInclusive;

pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// First year offered by the year selector.
pub const FIRST_CANDIDATE_YEAR: i32 = 2023;

/// ISO `YYYY-MM-DD` key of a calendar date. No timezone is involved.
pub fn date_key(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a zero-padded `YYYY-MM-DD` date. Anything chrono would also tolerate
/// (missing padding, signs, surrounding whitespace) is refused.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if s.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .filter(|d| date_key(d) == s)
}

/// Short English name for a 1-based month.
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month.wrapping_sub(1) as usize)
        .copied()
        .unwrap_or("???")
}

/// Day 0 of the following month, i.e. the last day of `month`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(31)
}

/// Column of `date` in a week that starts on `week_start`, in `0..=6`.
pub fn weekday_offset(date: NaiveDate, week_start: Weekday) -> u32 {
    (date.weekday().num_days_from_sunday() + 7 - week_start.num_days_from_sunday()) % 7
}

/// Single-letter weekday labels, beginning at `week_start`.
pub fn weekday_labels(week_start: Weekday) -> [&'static str; 7] {
    const BY_SUNDAY: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];
    let shift = week_start.num_days_from_sunday() as usize;
    std::array::from_fn(|i| BY_SUNDAY[(i + shift) % 7])
}

/// Fraction of the year covered up to the end of the reference month.
pub fn year_progress(today: NaiveDate) -> f64 {
    today.month() as f64 / 12.0
}

pub fn candidate_years(today: NaiveDate) -> RangeInclusive<i32> {
    FIRST_CANDIDATE_YEAR.min(today.year())..=today.year()
}
