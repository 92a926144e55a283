use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, Timelike};

/// The "now" that chart categories are generated relative to.
///
/// Kept as plain fields so callers and tests can pin the calendar
/// explicitly instead of reading the system clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarAnchor {
    /// Hour of day (0-23).
    pub hour: u32,
    /// Day of week (0 = Monday, 6 = Sunday).
    pub weekday: u32,
    /// Day of month (1-31).
    pub day_of_month: u32,
    /// Month of year (0 = January, 11 = December).
    pub month: u32,
    /// Day count of the calendar month before the current one.
    pub days_in_previous_month: u32,
}

impl CalendarAnchor {
    /// Anchor at the given local date-time.
    pub fn from_datetime(at: &NaiveDateTime) -> Self {
        let date = at.date();
        Self {
            hour: at.hour(),
            weekday: date.weekday().num_days_from_monday(),
            day_of_month: date.day(),
            month: date.month0(),
            days_in_previous_month: days_in_previous_month(date),
        }
    }

    /// Anchor at the current local time.
    pub fn now() -> Self {
        Self::from_datetime(&Local::now().naive_local())
    }
}

/// Number of days in the month preceding `date`'s month.
pub fn days_in_previous_month(date: NaiveDate) -> u32 {
    date.with_day(1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}
