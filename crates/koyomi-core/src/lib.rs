//! # koyomi-core
//!
//! Fixed-offset calendar core: normalized instant construction, strict
//! parsing and validation of human-entered dates, field-level arithmetic,
//! anchored time-of-day ranges, and date-only comparison and formatting.
//!
//! Every instant lives in the single canonical UTC+09:00 offset; no
//! operation can produce one in another zone. All values are immutable:
//! transformations return a new [`CalendarInstant`] and never mutate their
//! input, which makes concurrent use safe by construction.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `instant` | The `CalendarInstant` value type and factory constructors |
//! | `parse` | Strict date/time parsing and round-trip validation |
//! | `arith` | Field-relative arithmetic with month-end clamping |
//! | `range` | Day bounds and anchored from/to time windows |
//! | `format` | Canonical rendering and date-only comparison |
//! | `error` | Error types |
//! | `constants` | The fixed offset and day-of-week label table |

pub mod arith;
pub mod constants;
pub mod error;
pub mod format;
pub mod instant;
pub mod parse;
pub mod range;

pub use arith::{Field, day_difference, min_of};
pub use error::{DateError, DateResult};
pub use format::{
    format_date, format_date_time, format_date_time_seconds, format_date_with_day_of_week,
    format_day_of_month, format_month, format_month_day, format_time, is_same_date, is_today,
};
pub use instant::CalendarInstant;
pub use parse::{
    is_valid_date, is_valid_date_separated, is_valid_date_str, is_valid_day_of_month,
    is_valid_hhmm, parse_date, parse_date_with_separator,
};
pub use range::{day_bounds, is_from_before_to, time_range};
