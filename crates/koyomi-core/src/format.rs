//! Canonical string rendering and date-only comparison.
//!
//! Formatters accept an optional instant and render absence as the empty
//! string; comparators treat absence as `false`. Missing data is not an
//! error here, unlike the malformed inputs rejected in [`parse`].
//!
//! [`parse`]: crate::parse

use std::fmt;

use crate::constants::DAY_OF_WEEK_LABELS;
use crate::instant::CalendarInstant;

/// `YYYY<sep>MM<sep>DD`, zero-padded; `""` when absent. An empty
/// separator yields the compact `yyyyMMdd` form.
#[must_use]
pub fn format_date(instant: Option<&CalendarInstant>, separator: &str) -> String {
    instant.map_or_else(String::new, |i| {
        format!(
            "{:04}{separator}{:02}{separator}{:02}",
            i.year(),
            i.month(),
            i.day()
        )
    })
}

/// `YYYY<sep>MM`; `""` when absent.
#[must_use]
pub fn format_month(instant: Option<&CalendarInstant>, separator: &str) -> String {
    instant.map_or_else(String::new, |i| {
        format!("{:04}{separator}{:02}", i.year(), i.month())
    })
}

/// `MM<sep>DD`; `""` when absent.
#[must_use]
pub fn format_month_day(instant: Option<&CalendarInstant>, separator: &str) -> String {
    instant.map_or_else(String::new, |i| {
        format!("{:02}{separator}{:02}", i.month(), i.day())
    })
}

/// The unpadded day number; `""` when absent.
#[must_use]
pub fn format_day_of_month(instant: Option<&CalendarInstant>) -> String {
    instant.map_or_else(String::new, |i| i.day().to_string())
}

/// `MM<sep>DD(<dow>)` with the fixed Sunday-first label table; `""` when
/// absent.
#[must_use]
pub fn format_date_with_day_of_week(
    instant: Option<&CalendarInstant>,
    separator: &str,
) -> String {
    instant.map_or_else(String::new, |i| {
        let label = DAY_OF_WEEK_LABELS[i.weekday_index()];
        format!("{:02}{separator}{:02}({label})", i.month(), i.day())
    })
}

/// `YYYY/MM/DD HH:MM` in 24-hour time; `""` when absent.
#[must_use]
pub fn format_date_time(instant: Option<&CalendarInstant>) -> String {
    instant.map_or_else(String::new, |i| {
        format!(
            "{:04}/{:02}/{:02} {:02}:{:02}",
            i.year(),
            i.month(),
            i.day(),
            i.hour(),
            i.minute()
        )
    })
}

/// `YYYY/MM/DD HH:MM:SS`; `""` when absent.
#[must_use]
pub fn format_date_time_seconds(instant: Option<&CalendarInstant>) -> String {
    instant.map_or_else(String::new, ToString::to_string)
}

/// `HH:MM` of the time-of-day alone; `""` when absent.
#[must_use]
pub fn format_time(instant: Option<&CalendarInstant>) -> String {
    instant.map_or_else(String::new, |i| {
        format!("{:02}:{:02}", i.hour(), i.minute())
    })
}

/// True iff year, month, and day-of-month all match; `false` when either
/// side is absent.
#[must_use]
pub fn is_same_date(a: Option<&CalendarInstant>, b: Option<&CalendarInstant>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.year() == b.year() && a.month() == b.month() && a.day() == b.day(),
        _ => false,
    }
}

/// Date-only equality against `reference`, or against the current time
/// when `reference` is `None`.
#[must_use]
pub fn is_today(instant: Option<&CalendarInstant>, reference: Option<&CalendarInstant>) -> bool {
    let today = reference.copied().unwrap_or_else(CalendarInstant::now);
    is_same_date(instant, Some(&today))
}

impl fmt::Display for CalendarInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}/{:02}/{:02} {:02}:{:02}:{:02}",
            self.year(),
            self.month(),
            self.day(),
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}
