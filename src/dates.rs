//! Day-granularity calendar arithmetic shared by all picker kinds
use crate::error::{OutOfTimeError, PickerError};
use crate::kind::Unit;
use std::iter::successors;
use time::{
    format_description::FormatItem, macros::format_description, Date, Duration, Month, Weekday,
};

static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> Result<Date, PickerError> {
    Date::parse(s, &YMD_FMT).map_err(|source| PickerError::ParseDate {
        input: s.to_owned(),
        source,
    })
}

pub(crate) trait WeekdayExt {
    /// Column of the weekday in a Sunday-first week
    fn index0(&self) -> usize;
}

impl WeekdayExt for Weekday {
    fn index0(&self) -> usize {
        self.number_days_from_sunday().into()
    }
}

pub(crate) fn first_of_month(date: Date) -> Date {
    Date::from_calendar_date(date.year(), date.month(), 1)
        .expect("the first of an existing month should be valid")
}

pub(crate) fn first_of_year(year: i32) -> Result<Date, OutOfTimeError> {
    Date::from_calendar_date(year, Month::January, 1).map_err(|_| OutOfTimeError)
}

/// Reduce `date` to the first day of the unit containing it, so that two dates
/// in the same unit compare equal.
pub(crate) fn truncate(date: Date, unit: Unit) -> Date {
    match unit {
        Unit::Day => date,
        Unit::Month => first_of_month(date),
        Unit::Year => Date::from_calendar_date(date.year(), Month::January, 1)
            .expect("January 1 of an existing year should be valid"),
    }
}

/// The date `day` in the given month, or the month's last day when the month
/// is shorter than that
fn clamped_date(year: i32, month: Month, day: u8) -> Result<Date, OutOfTimeError> {
    (1..=day)
        .rev()
        .find_map(|d| Date::from_calendar_date(year, month, d).ok())
        .ok_or(OutOfTimeError)
}

/// Move `date` by `delta` calendar months, keeping the day of the month where
/// the target month has it and falling back to the target's last day
/// otherwise
pub(crate) fn shift_months(date: Date, delta: i32) -> Result<Date, OutOfTimeError> {
    let month0 = i32::from(u8::from(date.month())) - 1;
    let total = date
        .year()
        .checked_mul(12)
        .and_then(|m| m.checked_add(month0))
        .and_then(|m| m.checked_add(delta))
        .ok_or(OutOfTimeError)?;
    let year = total.div_euclid(12);
    let month = u8::try_from(total.rem_euclid(12) + 1)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .ok_or(OutOfTimeError)?;
    clamped_date(year, month, date.day())
}

pub(crate) fn shift_years(date: Date, delta: i32) -> Result<Date, OutOfTimeError> {
    shift_months(date, delta.checked_mul(12).ok_or(OutOfTimeError)?)
}

pub(crate) fn n_days_before(date: Date, n: usize) -> Result<Date, OutOfTimeError> {
    let n = i64::try_from(n).map_err(|_| OutOfTimeError)?;
    date.checked_sub(Duration::days(n)).ok_or(OutOfTimeError)
}

pub(crate) fn iter_days_from(date: Date) -> impl Iterator<Item = Date> {
    successors(Some(date), |&d| d.next_day())
}
