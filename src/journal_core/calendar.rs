//! Six-week date-picker grid.
//!
//! # Invariants
//! - A grid always has 42 consecutive days.
//! - The first cell is the Sunday on or before the 1st of the reference month.
//! - In-month cells form exactly one contiguous run.

use crate::constants::CALENDAR_CELL_COUNT;
use chrono::{Datelike, Days, Months, NaiveDate};

/// One day in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    /// The day belongs to the reference month.
    pub in_month: bool,
    /// The day equals the date currently set on the edited entry.
    pub is_selected: bool,
    /// The day is today.
    pub is_today: bool,
}

/// Direction for month navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthStep {
    Previous,
    Next,
}

fn first_of_month(reference: NaiveDate) -> NaiveDate {
    reference
        .checked_sub_days(Days::new(u64::from(reference.day0())))
        .unwrap_or(reference)
}

/// The Sunday on or before the 1st of `reference`'s month.
pub fn grid_start(reference: NaiveDate) -> NaiveDate {
    let first = first_of_month(reference);
    let offset = u64::from(first.weekday().num_days_from_sunday());
    first.checked_sub_days(Days::new(offset)).unwrap_or(first)
}

/// Builds the grid for `reference`'s month.
///
/// # Examples
///
/// ```
/// use moodlog::journal_core::calendar::generate;
/// use chrono::{Datelike, NaiveDate, Weekday};
///
/// let reference = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();
/// let today = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
/// let cells = generate(reference, Some(reference), today);
///
/// assert_eq!(cells.len(), 42);
/// assert_eq!(cells[0].date, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
/// assert_eq!(cells[0].date.weekday(), Weekday::Sun);
/// assert!(cells.iter().any(|c| c.is_selected && c.date == reference));
/// ```
pub fn generate(
    reference: NaiveDate,
    selected: Option<NaiveDate>,
    today: NaiveDate,
) -> Vec<CalendarCell> {
    let (year, month) = (reference.year(), reference.month());
    grid_start(reference)
        .iter_days()
        .take(CALENDAR_CELL_COUNT)
        .map(|date| CalendarCell {
            date,
            in_month: date.year() == year && date.month() == month,
            is_selected: selected == Some(date),
            is_today: date == today,
        })
        .collect()
}

/// Shifts by one month. The day is clamped to the target month's length.
pub fn previous_month(reference: NaiveDate) -> NaiveDate {
    reference
        .checked_sub_months(Months::new(1))
        .unwrap_or(reference)
}

/// Shifts by one month. The day is clamped to the target month's length.
pub fn next_month(reference: NaiveDate) -> NaiveDate {
    reference
        .checked_add_months(Months::new(1))
        .unwrap_or(reference)
}

pub fn navigate(reference: NaiveDate, step: MonthStep) -> NaiveDate {
    match step {
        MonthStep::Previous => previous_month(reference),
        MonthStep::Next => next_month(reference),
    }
}
