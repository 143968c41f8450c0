//! Parsing of the engine's day-naive date and time formats.
//!
//! Clock times are `HH:mm` (24-hour, zero-padded) and calendar days are
//! `yyyy-MM-dd`. Both are parsed strictly: chrono alone accepts unpadded
//! fields, so the shape is checked before handing the string to chrono.

use chrono::{NaiveDate, NaiveTime};

use crate::error::{EngineError, EngineResult};

const CLOCK_TIME_FORMAT: &str = "HH:mm";
const CALENDAR_DAY_FORMAT: &str = "yyyy-MM-dd";

fn parse_error(field: &str, value: &str, expected: &str) -> EngineError {
    EngineError::ParseError {
        field: field.to_string(),
        value: value.to_string(),
        expected: expected.to_string(),
    }
}

/// Returns true if `value` has digits everywhere except at `separators`.
fn has_shape(value: &str, len: usize, separators: &[(usize, u8)]) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == len
        && bytes.iter().enumerate().all(|(i, b)| {
            match separators.iter().find(|(pos, _)| *pos == i) {
                Some((_, sep)) => b == sep,
                None => b.is_ascii_digit(),
            }
        })
}

/// Parses a zero-padded 24-hour `HH:mm` clock time.
///
/// # Examples
///
/// ```
/// use salon_scheduler::scheduling::parse_clock_time;
/// use chrono::NaiveTime;
///
/// assert_eq!(parse_clock_time("09:30").unwrap(), NaiveTime::from_hms_opt(9, 30, 0).unwrap());
/// assert!(parse_clock_time("9:30").is_err());
/// assert!(parse_clock_time("24:00").is_err());
/// ```
pub fn parse_clock_time(value: &str) -> EngineResult<NaiveTime> {
    if !has_shape(value, 5, &[(2, b':')]) {
        return Err(parse_error("time", value, CLOCK_TIME_FORMAT));
    }

    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| parse_error("time", value, CLOCK_TIME_FORMAT))
}

/// Parses a `yyyy-MM-dd` calendar day.
///
/// # Examples
///
/// ```
/// use salon_scheduler::scheduling::parse_calendar_day;
/// use chrono::NaiveDate;
///
/// assert_eq!(
///     parse_calendar_day("2024-06-01").unwrap(),
///     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
/// );
/// assert!(parse_calendar_day("2024-6-1").is_err());
/// ```
pub fn parse_calendar_day(value: &str) -> EngineResult<NaiveDate> {
    if !has_shape(value, 10, &[(4, b'-'), (7, b'-')]) {
        return Err(parse_error("date", value, CALENDAR_DAY_FORMAT));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| parse_error("date", value, CALENDAR_DAY_FORMAT))
}

/// Formats a clock time as `HH:mm`.
pub fn format_clock_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_parse_valid_clock_times() {
        assert_eq!(parse_clock_time("00:00").unwrap(), time(0, 0));
        assert_eq!(parse_clock_time("10:30").unwrap(), time(10, 30));
        assert_eq!(parse_clock_time("23:59").unwrap(), time(23, 59));
    }

    #[test]
    fn test_reject_malformed_clock_times() {
        for value in ["", "9:30", "09:3", "0930", "09-30", "24:00", "12:60", "ab:cd", " 09:30"] {
            match parse_clock_time(value) {
                Err(EngineError::ParseError {
                    field,
                    value: raw,
                    expected,
                }) => {
                    assert_eq!(field, "time");
                    assert_eq!(raw, value);
                    assert_eq!(expected, "HH:mm");
                }
                other => panic!("Expected ParseError for {:?}, got {:?}", value, other),
            }
        }
    }

    #[test]
    fn test_parse_valid_calendar_days() {
        assert_eq!(
            parse_calendar_day("2024-06-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        );
        assert_eq!(
            parse_calendar_day("2024-02-29").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn test_reject_malformed_calendar_days() {
        for value in ["", "2024-6-01", "2024/06/01", "01-06-2024", "2023-02-29", "2024-13-01"] {
            assert!(
                matches!(
                    parse_calendar_day(value),
                    Err(EngineError::ParseError { ref field, .. }) if field == "date"
                ),
                "{:?} should not parse",
                value
            );
        }
    }

    #[test]
    fn test_format_clock_time_is_zero_padded() {
        assert_eq!(format_clock_time(time(9, 5)), "09:05");
        assert_eq!(format_clock_time(time(18, 30)), "18:30");
    }
}
