//! Process-wide calendar constants.
//!
//! Every instant in this crate lives in one canonical UTC offset. The
//! offset is a compile-time constant, not configuration: no operation may
//! construct an instant in any other zone.

use chrono::FixedOffset;

/// Seconds east of UTC for the canonical offset (+09:00).
pub const UTC_OFFSET_SECS: i32 = 9 * 60 * 60;

/// Milliseconds in one calendar day.
pub const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Day-of-week labels, Sunday first.
pub const DAY_OF_WEEK_LABELS: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

/// Returns the canonical fixed offset shared by every
/// [`CalendarInstant`](crate::CalendarInstant).
#[must_use]
pub fn fixed_offset() -> FixedOffset {
    FixedOffset::east_opt(UTC_OFFSET_SECS).expect("+09:00 is a representable offset")
}
