//! Field-relative calendar arithmetic.
//!
//! Every operation copies its input and returns a new instant; the
//! received value is never modified. Month addition clamps to the end of
//! the target month, which makes it non-invertible at month ends: Jan 31
//! plus one month is Feb 28, and subtracting one month from that yields
//! Jan 28, not Jan 31. That is standard calendar semantics, documented and
//! tested rather than corrected.

use chrono::{DateTime, Datelike, Duration, FixedOffset, Months, NaiveDate};

use crate::constants::MILLIS_PER_DAY;
use crate::instant::CalendarInstant;

/// A calendar field that arithmetic can address.
///
/// The set is closed and dispatch matches on it exhaustively, so there is
/// no "unknown field" failure mode for callers to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl Field {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl CalendarInstant {
    /// A copy with `amount` added to `field`, using calendar roll-over.
    ///
    /// Month and year amounts clamp to the last valid day of the target
    /// month (one month after Jan 31 is Feb 28 or 29, never an
    /// out-of-range date). Day and time amounts are exact offsets.
    ///
    /// # Panics
    ///
    /// Panics if the result falls outside the supported year range.
    #[must_use]
    pub fn add(self, field: Field, amount: i32) -> Self {
        let dt = self.as_datetime();
        let shifted = match field {
            Field::Year => shift_months(dt, i64::from(amount) * 12),
            Field::Month => shift_months(dt, i64::from(amount)),
            Field::Day => dt.checked_add_signed(Duration::days(i64::from(amount))),
            Field::Hour => dt.checked_add_signed(Duration::hours(i64::from(amount))),
            Field::Minute => dt.checked_add_signed(Duration::minutes(i64::from(amount))),
            Field::Second => dt.checked_add_signed(Duration::seconds(i64::from(amount))),
        };
        Self::from_datetime(shifted.expect("calendar arithmetic stays within the supported range"))
    }

    /// A copy `amount` days later (earlier when negative).
    #[must_use]
    pub fn add_days(self, amount: i32) -> Self {
        self.add(Field::Day, amount)
    }

    /// One month later, clamped to the end of the target month.
    #[must_use]
    pub fn next_month(self) -> Self {
        self.add(Field::Month, 1)
    }

    /// One month earlier, clamped to the end of the target month.
    #[must_use]
    pub fn prev_month(self) -> Self {
        self.add(Field::Month, -1)
    }

    /// A copy with the day-of-month moved to the month's actual maximum;
    /// every other field is unchanged.
    #[must_use]
    pub fn end_of_month(self) -> Self {
        let last = days_in_month(self.year(), self.month());
        Self::from_datetime(
            self.as_datetime()
                .with_day(last)
                .expect("the last day of a month is always valid"),
        )
    }
}

fn shift_months(dt: DateTime<FixedOffset>, months: i64) -> Option<DateTime<FixedOffset>> {
    let magnitude = u32::try_from(months.unsigned_abs()).ok()?;
    if months >= 0 {
        dt.checked_add_months(Months::new(magnitude))
    } else {
        dt.checked_sub_months(Months::new(magnitude))
    }
}

/// Number of days in the given month, derived from the calendar arithmetic
/// rather than a duplicate month-length table.
fn days_in_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .and_then(|next| next.pred_opt())
        .expect("instant months are always in range")
        .day()
}

/// Whole days from `from` to `to`, with both cleared to date-only first;
/// negative when `to` precedes `from`.
#[must_use]
pub fn day_difference(from: CalendarInstant, to: CalendarInstant) -> i64 {
    let from_ms = from.date_only().epoch_millis();
    let to_ms = to.date_only().epoch_millis();
    (to_ms - from_ms) / MILLIS_PER_DAY
}

/// The chronologically earlier of the two instants; `a` wins ties.
#[must_use]
pub fn min_of(a: CalendarInstant, b: CalendarInstant) -> CalendarInstant {
    if a.epoch_millis() <= b.epoch_millis() { a } else { b }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_month_clamps_to_month_end() {
        let jan_31 = CalendarInstant::from_ymd(2013, 1, 31);
        let feb = jan_31.add(Field::Month, 1);
        assert_eq!((feb.month(), feb.day()), (2, 28));

        let leap_feb = CalendarInstant::from_ymd(2012, 1, 31).add(Field::Month, 1);
        assert_eq!((leap_feb.month(), leap_feb.day()), (2, 29));
    }

    #[test]
    fn add_month_round_trips_away_from_month_end() {
        let mid = CalendarInstant::from_ymd(2024, 6, 5);
        assert_eq!(mid.add(Field::Month, 1).add(Field::Month, -1), mid);
    }

    #[test]
    fn add_month_is_not_invertible_at_month_end() {
        // Jan 31 -> Feb 28 -> Mar 28: the clamp loses the original day.
        let jan_31 = CalendarInstant::from_ymd(2013, 1, 31);
        let back = jan_31.add(Field::Month, 1).add(Field::Month, 1);
        assert_eq!((back.month(), back.day()), (3, 28));
    }

    #[test]
    fn add_year_clamps_leap_day() {
        let leap_day = CalendarInstant::from_ymd(2012, 2, 29);
        let next = leap_day.add(Field::Year, 1);
        assert_eq!((next.year(), next.month(), next.day()), (2013, 2, 28));
    }

    #[test]
    fn add_time_fields_rolls_exactly() {
        let base = CalendarInstant::from_ymd(2024, 6, 5);
        let shifted = base.add(Field::Hour, 25);
        assert_eq!((shifted.day(), shifted.hour()), (6, 1));

        let minute = base.add(Field::Minute, 61);
        assert_eq!((minute.hour(), minute.minute()), (1, 1));
    }

    #[test]
    fn next_and_prev_month_are_single_steps() {
        let base = CalendarInstant::from_ymd(2024, 3, 31);
        assert_eq!((base.next_month().month(), base.next_month().day()), (4, 30));
        assert_eq!((base.prev_month().month(), base.prev_month().day()), (2, 29));
    }

    #[test]
    fn end_of_month_tracks_leap_years() {
        let leap = CalendarInstant::from_ymd(2012, 2, 10).end_of_month();
        assert_eq!(leap.day(), 29);
        let plain = CalendarInstant::from_ymd(2013, 2, 10).end_of_month();
        assert_eq!(plain.day(), 28);
        let june = CalendarInstant::from_ymd(2024, 6, 1).end_of_month();
        assert_eq!(june.day(), 30);
    }

    #[test]
    fn end_of_month_keeps_other_fields() {
        let base = CalendarInstant::from_ymd(2024, 6, 5).add(Field::Hour, 13);
        let end = base.end_of_month();
        assert_eq!((end.year(), end.month(), end.day()), (2024, 6, 30));
        assert_eq!(end.hour(), 13);
    }

    #[test]
    fn day_difference_counts_whole_days() {
        let from = CalendarInstant::from_ymd(2024, 6, 1);
        let to = CalendarInstant::from_ymd(2024, 6, 10);
        assert_eq!(day_difference(from, to), 9);
        assert_eq!(day_difference(to, from), -9);
    }

    #[test]
    fn day_difference_ignores_time_of_day() {
        let from = CalendarInstant::from_ymd(2024, 6, 1).add(Field::Hour, 23);
        let to = CalendarInstant::from_ymd(2024, 6, 2).add(Field::Minute, 5);
        assert_eq!(day_difference(from, to), 1);
    }

    #[test]
    fn min_of_prefers_the_earlier_instant() {
        let early = CalendarInstant::from_ymd(2024, 6, 1);
        let late = CalendarInstant::from_ymd(2024, 6, 2);
        assert_eq!(min_of(early, late), early);
        assert_eq!(min_of(late, early), early);
        assert_eq!(min_of(early, early), early);
    }
}
