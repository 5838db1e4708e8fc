//! The calendar instant value type and its factory constructors.

use chrono::{
    DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::fixed_offset;

/// A point in time in the canonical +09:00 offset.
///
/// `CalendarInstant` replaces the mutable, field-setter calendar object of
/// platform APIs with an immutable value: every transformation returns a
/// new instant and never touches its input. The type is `Copy`, so no two
/// components can share a mutable instance.
///
/// Ordering and equality compare the full timestamp. Use
/// [`is_same_date`](crate::format::is_same_date) for date-only comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarInstant {
    inner: DateTime<FixedOffset>,
}

impl CalendarInstant {
    /// The current date and time in the canonical offset.
    #[must_use]
    pub fn now() -> Self {
        Self {
            inner: Utc::now().with_timezone(&fixed_offset()),
        }
    }

    /// Today's date with the time-of-day fields cleared to 00:00:00.000.
    #[must_use]
    pub fn today() -> Self {
        Self::now().date_only()
    }

    /// The cleared instant: every field at its epoch-zero value in the
    /// canonical offset, 1970-01-01 00:00:00.000 +09:00.
    ///
    /// Note that this is a different instant from
    /// [`from_epoch_millis(0)`](Self::from_epoch_millis), which lands at
    /// 09:00 local time.
    #[must_use]
    pub fn cleared() -> Self {
        Self::from_ymd(1970, 1, 1)
    }

    /// Builds an instant for the given date with the time fields cleared.
    ///
    /// This constructor is lenient: out-of-range fields normalize by
    /// calendar roll-over, so month 13 becomes January of the following
    /// year and Feb 30 rolls into March. Use [`parse_date`] or
    /// [`is_valid_date`] when roll-over must be rejected instead.
    ///
    /// # Panics
    ///
    /// Panics if the normalized date falls outside the year range the
    /// calendar backend can represent.
    ///
    /// [`parse_date`]: crate::parse::parse_date
    /// [`is_valid_date`]: crate::parse::is_valid_date
    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Self {
        Self::checked_from_ymd(year, month, day)
            .expect("normalized date is within the supported year range")
    }

    /// Lenient construction that reports unrepresentable results instead
    /// of panicking; the validator leans on this so extreme inputs come
    /// back as "not a valid date" rather than an abort.
    pub(crate) fn checked_from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        let months = i64::from(year) * 12 + i64::from(month) - 1;
        let y = i32::try_from(months.div_euclid(12)).ok()?;
        let m = u32::try_from(months.rem_euclid(12) + 1).ok()?;
        let first = NaiveDate::from_ymd_opt(y, m, 1)?;
        let date = first.checked_add_signed(Duration::days(i64::from(day) - 1))?;
        let naive = date.and_hms_opt(0, 0, 0)?;
        Some(Self::from_local(naive))
    }

    /// The instant `ms` milliseconds after the Unix epoch, decomposed in
    /// the canonical offset.
    #[must_use]
    pub fn from_epoch_millis(ms: i64) -> Self {
        let inner = fixed_offset()
            .timestamp_millis_opt(ms)
            .single()
            .expect("a fixed offset maps every timestamp to exactly one local time");
        Self { inner }
    }

    /// Converts an optional epoch value; absent stays absent.
    #[must_use]
    pub fn from_optional_millis(ms: Option<i64>) -> Option<Self> {
        ms.map(Self::from_epoch_millis)
    }

    pub(crate) fn from_local(naive: NaiveDateTime) -> Self {
        let inner = naive
            .and_local_timezone(fixed_offset())
            .single()
            .expect("a fixed offset maps every local time to exactly one instant");
        Self { inner }
    }

    pub(crate) fn from_datetime(inner: DateTime<FixedOffset>) -> Self {
        Self { inner }
    }

    pub(crate) fn as_datetime(self) -> DateTime<FixedOffset> {
        self.inner
    }

    /// Returns the year.
    #[must_use]
    pub fn year(self) -> i32 {
        self.inner.year()
    }

    /// Returns the month (1..=12).
    #[must_use]
    pub fn month(self) -> u32 {
        self.inner.month()
    }

    /// Returns the day within the month (1..=31).
    #[must_use]
    pub fn day(self) -> u32 {
        self.inner.day()
    }

    /// Returns the hour of day (0..=23).
    #[must_use]
    pub fn hour(self) -> u32 {
        self.inner.hour()
    }

    /// Returns the minute (0..=59).
    #[must_use]
    pub fn minute(self) -> u32 {
        self.inner.minute()
    }

    /// Returns the second (0..=59).
    #[must_use]
    pub fn second(self) -> u32 {
        self.inner.second()
    }

    /// Returns the millisecond (0..=999).
    #[must_use]
    pub fn millisecond(self) -> u32 {
        self.inner.timestamp_subsec_millis()
    }

    /// Milliseconds since the Unix epoch.
    #[must_use]
    pub fn epoch_millis(self) -> i64 {
        self.inner.timestamp_millis()
    }

    /// Day of week as a Sunday-first index (0 = Sunday .. 6 = Saturday).
    #[must_use]
    pub fn weekday_index(self) -> usize {
        self.inner.weekday().num_days_from_sunday() as usize
    }

    /// A copy with the time-of-day fields cleared to 00:00:00.000.
    #[must_use]
    pub fn date_only(self) -> Self {
        let naive = self
            .inner
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .expect("midnight is a valid time of day");
        Self::from_local(naive)
    }
}

impl Serialize for CalendarInstant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.inner.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CalendarInstant {
    /// Deserializes an RFC 3339 timestamp, re-anchoring whatever offset it
    /// carried to the canonical +09:00 so persisted values cannot smuggle
    /// in a foreign zone.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let parsed = DateTime::<FixedOffset>::deserialize(deserializer)?;
        Ok(Self {
            inner: parsed.with_timezone(&fixed_offset()),
        })
    }
}
