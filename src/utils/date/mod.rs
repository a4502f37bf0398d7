//! Pure calendar arithmetic for the year grid.
//!
//! Weekdays use the ISO numbering 1 = Monday .. 7 = Sunday throughout the
//! crate. All functions here are pure; "today" comparisons go through the
//! [`Clock`] capability so a whole repaint sees one consistent date.

use chrono::{Datelike, Local, NaiveDate};
use thiserror::Error;

/// ISO weekday constants (1 = Monday .. 7 = Sunday).
pub const MONDAY: u32 = 1;
pub const TUESDAY: u32 = 2;
pub const WEDNESDAY: u32 = 3;
pub const THURSDAY: u32 = 4;
pub const FRIDAY: u32 = 5;
pub const SATURDAY: u32 = 6;
pub const SUNDAY: u32 = 7;

/// Error raised for calendar inputs that do not name a real Gregorian date.
///
/// The rendering engine only ever passes day indices in `[1, days_in_month]`,
/// so seeing this at runtime indicates a layout bug upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}

/// Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the given month (1..=12).
pub fn days_in_month(year: i32, month: u32) -> Result<u32, DateError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(DateError::InvalidDate { year, month, day: 1 })?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or(DateError::InvalidDate { year, month, day: 1 })?;
    Ok(next.signed_duration_since(first).num_days() as u32)
}

/// Weekday of a date, 1 = Monday .. 7 = Sunday.
pub fn weekday_of(year: i32, month: u32, day: u32) -> Result<u32, DateError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .map(|d| d.weekday().number_from_monday())
        .ok_or(DateError::InvalidDate { year, month, day })
}

/// Column of the 1st of the month when `first_day_of_week` occupies column 0.
///
/// Used to left-pad the day grid with blank cells.
pub fn first_weekday_offset(year: i32, month: u32, first_day_of_week: u32) -> Result<u32, DateError> {
    let weekday = weekday_of(year, month, 1)?;
    Ok((weekday as i32 - first_day_of_week as i32).rem_euclid(7) as u32)
}

/// Weekday shown in column `position` (0..7) of the header row.
pub fn weekday_at_column(position: u32, first_day_of_week: u32) -> u32 {
    (first_day_of_week.max(MONDAY) - 1 + position) % 7 + 1
}

/// Membership test against the configured weekend set.
///
/// An empty set means no day is a weekend day; there is no built-in
/// Saturday/Sunday default.
pub fn is_weekend(weekday: u32, weekend_days: &[u32]) -> bool {
    weekend_days.contains(&weekday)
}

/// True when `(year, month, day)` names the clock's current date. Over a
/// whole rendered year this holds for exactly one triple when `year` is
/// the current year, and for none otherwise.
pub fn is_today(today: NaiveDate, year: i32, month: u32, day: u32) -> bool {
    today.year() == year && today.month() == month && today.day() == day
}

/// Source of the current date, sampled once per repaint.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock time in the local timezone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Fixed date, for tests and screenshots.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Locale-sensitive month and day names.
///
/// The engine never hardcodes names; hosts targeting other locales provide
/// their own implementation.
pub trait NameProvider {
    /// Full month name for month 1..=12.
    fn month_name(&self, month: u32) -> String;

    /// Single-grapheme initial of the weekday (1 = Monday .. 7 = Sunday),
    /// drawn in the header row of every month cell.
    fn day_initial(&self, weekday: u32) -> String;
}

/// Default English names.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishNames;

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

const DAY_NAMES: [&str; 7] = [
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
];

impl NameProvider for EnglishNames {
    fn month_name(&self, month: u32) -> String {
        debug_assert!((1..=12).contains(&month), "month {month} outside 1..=12");
        MONTH_NAMES[(month as usize).saturating_sub(1).min(11)].to_string()
    }

    fn day_initial(&self, weekday: u32) -> String {
        debug_assert!((1..=7).contains(&weekday), "weekday {weekday} outside 1..=7");
        let name = DAY_NAMES[(weekday as usize).saturating_sub(1).min(6)];
        name.chars().next().map(String::from).unwrap_or_default()
    }
}
