//! Working day counting for leave ranges.

use chrono::{Datelike, NaiveDate, Weekday};

/// Returns true for Monday through Friday.
pub fn is_working_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Counts Monday–Friday dates in the inclusive range `start..=end`.
///
/// Returns 0 when `end` is before `start`.
///
/// # Example
///
/// ```
/// use attendance_engine::attendance::count_working_days;
/// use chrono::NaiveDate;
///
/// // 2026-03-02 is a Monday; the range runs to the following Sunday.
/// let start = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 3, 8).unwrap();
/// assert_eq!(count_working_days(start, end), 5);
/// ```
pub fn count_working_days(start: NaiveDate, end: NaiveDate) -> u32 {
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter(|d| is_working_day(*d))
        .count() as u32
}
