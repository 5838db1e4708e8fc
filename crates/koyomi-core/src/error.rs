//! Date input error types.

use thiserror::Error;

/// Result type for date parsing operations.
pub type DateResult<T> = Result<T, DateError>;

/// An error describing why a human-entered date was rejected.
///
/// The two variants are deliberately distinct so callers can give
/// different feedback for "not the right format" and "not a real date".
/// Absent input is never an error; formatters and comparators handle it
/// as empty output instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// Wrong length, wrong separator placement, or non-numeric characters
    /// where digits are required.
    #[error("malformed date string: {input:?}")]
    Malformed {
        /// The rejected input, as received.
        input: String,
    },

    /// Structurally numeric but not a date the calendar can represent,
    /// such as day 30 in February.
    #[error("no such calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidCalendarDate {
        /// The year slice of the rejected input.
        year: i32,
        /// The month slice of the rejected input.
        month: u32,
        /// The day slice of the rejected input.
        day: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_display() {
        let err = DateError::Malformed {
            input: "2013023".to_string(),
        };
        assert_eq!(err.to_string(), "malformed date string: \"2013023\"");
    }

    #[test]
    fn invalid_calendar_date_display() {
        let err = DateError::InvalidCalendarDate {
            year: 2013,
            month: 2,
            day: 30,
        };
        assert_eq!(err.to_string(), "no such calendar date: 2013-02-30");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<DateError>();
    }
}
