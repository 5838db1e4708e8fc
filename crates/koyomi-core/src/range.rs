//! Anchored time-of-day range construction.
//!
//! A range pair is built by assigning a time-of-day onto anchor days. The
//! anchor's date component must survive the assignment: if setting an hour
//! moves the day, the time-setting primitive itself is broken (the classic
//! 12-hour-field AM/PM inversion), and silently correcting it would
//! reintroduce exactly the defect this module exists to prevent. The
//! invariant is therefore asserted, not returned as an error.

use chrono::Duration;

use crate::instant::CalendarInstant;

/// Start and end of the calendar day containing `instant`:
/// 00:00:00.000 through 23:59:59.999 on the same date, each built from an
/// independent copy of the input.
#[must_use]
pub fn day_bounds(instant: CalendarInstant) -> (CalendarInstant, CalendarInstant) {
    time_range(instant, (0, 0), instant, (23, 59))
}

/// Builds a (start, end) pair anchored to two (possibly equal) days: the
/// start carries `from_hm` at second 0, millisecond 0; the end carries
/// `to_hm` at second 59, millisecond 999.
///
/// # Panics
///
/// Panics if assigning the time-of-day changed either anchor's
/// day-of-month, which can only happen when the caller passes an
/// out-of-range hour or minute and the offset rolls the date.
#[must_use]
pub fn time_range(
    from_day: CalendarInstant,
    from_hm: (u32, u32),
    to_day: CalendarInstant,
    to_hm: (u32, u32),
) -> (CalendarInstant, CalendarInstant) {
    let start = at_time_of_day(from_day, from_hm.0, from_hm.1, 0, 0);
    let end = at_time_of_day(to_day, to_hm.0, to_hm.1, 59, 999);

    assert_eq!(
        start.day(),
        from_day.day(),
        "assigning a time-of-day must not move the start anchor's day"
    );
    assert_eq!(
        end.day(),
        to_day.day(),
        "assigning a time-of-day must not move the end anchor's day"
    );

    (start, end)
}

/// Time-of-day assignment as an offset from the anchor's midnight.
/// Additive on purpose: an out-of-range hour rolls the date and trips the
/// caller's day assertion instead of being clamped out of sight.
fn at_time_of_day(
    day: CalendarInstant,
    hour: u32,
    minute: u32,
    second: u32,
    milli: u32,
) -> CalendarInstant {
    let offset = Duration::hours(i64::from(hour))
        + Duration::minutes(i64::from(minute))
        + Duration::seconds(i64::from(second))
        + Duration::milliseconds(i64::from(milli));
    let shifted = day
        .date_only()
        .as_datetime()
        .checked_add_signed(offset)
        .expect("time-of-day offsets stay within the supported range");
    CalendarInstant::from_datetime(shifted)
}

/// True when the `(hour, minute)` window start is not after its end.
#[must_use]
pub fn is_from_before_to(from_hour: u32, from_minute: u32, to_hour: u32, to_minute: u32) -> bool {
    (from_hour, from_minute) <= (to_hour, to_minute)
}
