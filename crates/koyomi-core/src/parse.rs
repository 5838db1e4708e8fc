//! Strict parsing and validation of human-entered dates and times.
//!
//! Validity is defined operationally: a field triple is valid iff setting
//! it on an instant and reading the fields back reproduces the identical
//! triple. The calendar arithmetic is the single source of truth; there is
//! no separate month-length table to drift out of sync with it.

use crate::arith::Field;
use crate::error::{DateError, DateResult};
use crate::instant::CalendarInstant;

/// Parses `yyyyMMdd`, or the same with `/` separators, into an instant
/// with the time fields cleared.
///
/// Parsing is strict: a structurally numeric string naming a date the
/// calendar cannot represent, such as `"20130230"`, is rejected rather
/// than rolled forward into March.
///
/// ## Errors
///
/// [`DateError::Malformed`] when the input is empty, is not 8 digits after
/// separator removal, or contains non-digits in the year/month/day slices;
/// [`DateError::InvalidCalendarDate`] when the digits do not name a real
/// date.
pub fn parse_date(raw: &str) -> DateResult<CalendarInstant> {
    parse_date_with_separator(raw, "/")
}

/// Like [`parse_date`], with a caller-chosen separator stripped before the
/// digits are examined.
///
/// ## Errors
///
/// Same as [`parse_date`].
#[tracing::instrument]
pub fn parse_date_with_separator(raw: &str, separator: &str) -> DateResult<CalendarInstant> {
    let compact = if separator.is_empty() {
        raw.to_string()
    } else {
        raw.replace(separator, "")
    };

    let Some((year, month, day)) = split_ymd(&compact) else {
        tracing::warn!(input = raw, "rejected malformed date string");
        return Err(DateError::Malformed {
            input: raw.to_string(),
        });
    };

    if !is_valid_date(year, month, day) {
        tracing::warn!(input = raw, "rejected impossible calendar date");
        return Err(DateError::InvalidCalendarDate { year, month, day });
    }

    Ok(CalendarInstant::from_ymd(year, month, day))
}

/// Splits an 8-digit string into its numeric (year, month, day) slices.
fn split_ymd(compact: &str) -> Option<(i32, u32, u32)> {
    if compact.len() != 8 || !compact.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = compact[0..4].parse().ok()?;
    let month = compact[4..6].parse().ok()?;
    let day = compact[6..8].parse().ok()?;
    Some((year, month, day))
}

/// Round-trip date validity: true iff setting the triple and reading it
/// back reproduces the identical triple.
///
/// This is the canonical validity test; [`parse_date`] and the string
/// variants all route through it.
#[must_use]
pub fn is_valid_date(year: i32, month: u32, day: u32) -> bool {
    CalendarInstant::checked_from_ymd(year, month, day)
        .is_some_and(|set| set.year() == year && set.month() == month && set.day() == day)
}

/// String-triple variant of [`is_valid_date`]; numeric-parse failure is
/// `false`, never an error.
#[must_use]
pub fn is_valid_date_str(year: &str, month: &str, day: &str) -> bool {
    let (Ok(y), Ok(m), Ok(d)) = (
        year.parse::<i32>(),
        month.parse::<u32>(),
        day.parse::<u32>(),
    ) else {
        return false;
    };
    is_valid_date(y, m, d)
}

/// Validates a separated date string by splitting on `separator` into
/// exactly three numeric parts.
#[must_use]
pub fn is_valid_date_separated(raw: &str, separator: &str) -> bool {
    if raw.is_empty() || separator.is_empty() {
        return false;
    }
    let parts: Vec<&str> = raw.split(separator).collect();
    let [year, month, day] = parts.as_slice() else {
        return false;
    };
    is_valid_date_str(year, month, day)
}

/// Validates an `hhmm` time-of-day string by setting the fields and
/// formatting them back: exactly four digits that survive the round trip.
///
/// Out-of-range values roll over when set (hour 24 lands on the next day
/// as 00), so they fail the reformat comparison without a range table.
#[must_use]
pub fn is_valid_hhmm(raw: &str) -> bool {
    if raw.len() != 4 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let (Ok(hour), Ok(minute)) = (raw[0..2].parse::<i32>(), raw[2..4].parse::<i32>()) else {
        return false;
    };
    let set = CalendarInstant::cleared()
        .add(Field::Hour, hour)
        .add(Field::Minute, minute);
    format!("{:02}{:02}", set.hour(), set.minute()) == raw
}

/// Validates a two-character day-of-month string (`"01"` through `"31"`).
#[must_use]
pub fn is_valid_day_of_month(raw: &str) -> bool {
    if raw.len() != 2 {
        return false;
    }
    raw.parse::<u32>().is_ok_and(|d| (1..=31).contains(&d))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_requires_eight_digits() {
        assert_eq!(split_ymd("20240605"), Some((2024, 6, 5)));
        assert_eq!(split_ymd("2024065"), None);
        assert_eq!(split_ymd("202406050"), None);
        assert_eq!(split_ymd("202406ab"), None);
        assert_eq!(split_ymd(""), None);
    }

    #[test]
    fn valid_date_accepts_real_dates() {
        assert!(is_valid_date(2024, 6, 5));
        assert!(is_valid_date(2012, 2, 29));
        assert!(is_valid_date(2023, 4, 30));
    }

    #[test]
    fn valid_date_rejects_rollover_candidates() {
        assert!(!is_valid_date(2013, 2, 29));
        assert!(!is_valid_date(2013, 2, 30));
        assert!(!is_valid_date(2023, 4, 31));
        assert!(!is_valid_date(2024, 13, 1));
        assert!(!is_valid_date(2024, 0, 1));
        assert!(!is_valid_date(2024, 6, 0));
    }

    #[test]
    fn valid_date_rejects_unrepresentable_years() {
        assert!(!is_valid_date(999_999_999, 1, 1));
    }

    #[test]
    fn valid_date_str_swallows_parse_failures() {
        assert!(is_valid_date_str("2024", "06", "05"));
        assert!(!is_valid_date_str("20x4", "06", "05"));
        assert!(!is_valid_date_str("2024", "", "05"));
    }

    #[test]
    fn hhmm_round_trip() {
        assert!(is_valid_hhmm("0000"));
        assert!(is_valid_hhmm("0915"));
        assert!(is_valid_hhmm("2359"));
        assert!(!is_valid_hhmm("2400"));
        assert!(!is_valid_hhmm("2505"));
        assert!(!is_valid_hhmm("0061"));
        assert!(!is_valid_hhmm("915"));
        assert!(!is_valid_hhmm("09:15"));
        assert!(!is_valid_hhmm(""));
    }

    #[test]
    fn day_of_month_is_two_digit_range_check() {
        assert!(is_valid_day_of_month("01"));
        assert!(is_valid_day_of_month("31"));
        assert!(!is_valid_day_of_month("00"));
        assert!(!is_valid_day_of_month("32"));
        assert!(!is_valid_day_of_month("1"));
        assert!(!is_valid_day_of_month("ab"));
    }
}
