//! Calendar-day parsing, arithmetic and boundary formatting.
//!
//! # Responsibility
//! - Turn raw store date strings into UTC calendar days.
//! - Provide the only day-difference function used by geometry code.
//! - Keep human-readable date labels behind the `DateLabels` seam.
//!
//! # Invariants
//! - All engine dates are `NaiveDate` values in UTC; time of day is dropped.
//! - Timestamps carrying an offset are converted to UTC before truncation.
//! - Parsing never fails loudly: unusable input yields `None`.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4})-(\d{2})-(\d{2})(?:$|[T ])").expect("valid leading date regex")
});

/// Parses a store date string into a UTC calendar day.
///
/// Accepted forms:
/// - RFC 3339 timestamps (`2025-02-01T23:30:00-05:00`), converted to UTC.
/// - Plain dates (`2025-02-01`).
/// - Date-prefixed timestamps without a parseable offset
///   (`2025-02-01 10:00:00+00`, `2025-02-01T10:00:00`), truncated as-is.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(timestamp.with_timezone(&Utc).date_naive());
    }

    let caps = LEADING_DATE_RE.captures(trimmed)?;
    let year = caps.get(1)?.as_str().parse::<i32>().ok()?;
    let month = caps.get(2)?.as_str().parse::<u32>().ok()?;
    let day = caps.get(3)?.as_str().parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parses an optional raw field, treating absence like garbage.
pub fn parse_optional_date(raw: Option<&str>) -> Option<NaiveDate> {
    raw.and_then(parse_calendar_date)
}

/// Whole calendar days from `from` to `to` (negative when `to` is earlier).
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Shifts `date` by a signed number of days, saturating at the calendar range.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    let saturated = if days < 0 {
        NaiveDate::MIN
    } else {
        NaiveDate::MAX
    };
    Duration::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .unwrap_or(saturated)
}

/// Current UTC calendar day.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Locale boundary for every human-readable date string the engine emits.
pub trait DateLabels {
    /// Label for the month band starting at `first_day`.
    fn month_label(&self, first_day: NaiveDate) -> String;
    /// Day-of-month label for a header cell.
    fn day_label(&self, date: NaiveDate) -> String;
    /// Abbreviated weekday name for a header cell.
    fn day_name(&self, date: NaiveDate) -> String;
    /// Full date used in hover summaries.
    fn long_date(&self, date: NaiveDate) -> String;
}

/// English (en-US) labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnglishLabels;

impl DateLabels for EnglishLabels {
    fn month_label(&self, first_day: NaiveDate) -> String {
        first_day.format("%b %Y").to_string()
    }

    fn day_label(&self, date: NaiveDate) -> String {
        date.day().to_string()
    }

    fn day_name(&self, date: NaiveDate) -> String {
        date.format("%a").to_string()
    }

    fn long_date(&self, date: NaiveDate) -> String {
        date.format("%b %-d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{
        add_days, days_between, is_weekend, parse_calendar_date, DateLabels, EnglishLabels,
    };
    use chrono::NaiveDate;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn parses_plain_and_prefixed_dates() {
        assert_eq!(parse_calendar_date("2025-02-01"), Some(ymd(2025, 2, 1)));
        assert_eq!(
            parse_calendar_date("2025-02-01T10:00:00"),
            Some(ymd(2025, 2, 1))
        );
        assert_eq!(
            parse_calendar_date("2025-02-01 10:00:00+00"),
            Some(ymd(2025, 2, 1))
        );
    }

    #[test]
    fn rfc3339_offsets_are_normalized_to_utc() {
        assert_eq!(
            parse_calendar_date("2025-02-01T23:30:00-05:00"),
            Some(ymd(2025, 2, 2))
        );
        assert_eq!(
            parse_calendar_date("2025-02-01T00:30:00+02:00"),
            Some(ymd(2025, 1, 31))
        );
    }

    #[test]
    fn rejects_garbage_and_impossible_dates() {
        assert_eq!(parse_calendar_date(""), None);
        assert_eq!(parse_calendar_date("   "), None);
        assert_eq!(parse_calendar_date("next tuesday"), None);
        assert_eq!(parse_calendar_date("2025-02-30"), None);
        assert_eq!(parse_calendar_date("2025-02-011"), None);
    }

    #[test]
    fn day_arithmetic_is_whole_days() {
        assert_eq!(days_between(ymd(2025, 2, 1), ymd(2025, 2, 10)), 9);
        assert_eq!(days_between(ymd(2025, 2, 10), ymd(2025, 2, 1)), -9);
        // Spans the US daylight-saving change without drifting.
        assert_eq!(days_between(ymd(2025, 3, 1), ymd(2025, 4, 1)), 31);
        assert_eq!(add_days(ymd(2025, 1, 15), -21), ymd(2024, 12, 25));
    }

    #[test]
    fn add_days_saturates_instead_of_overflowing() {
        assert_eq!(add_days(ymd(2025, 1, 15), 9_000_000_000_000), NaiveDate::MAX);
        assert_eq!(add_days(ymd(2025, 1, 15), i64::MIN), NaiveDate::MIN);
        assert_eq!(add_days(NaiveDate::MAX, 1), NaiveDate::MAX);
    }

    #[test]
    fn weekend_detection() {
        assert!(is_weekend(ymd(2025, 1, 18)));
        assert!(is_weekend(ymd(2025, 1, 19)));
        assert!(!is_weekend(ymd(2025, 1, 20)));
    }

    #[test]
    fn english_labels() {
        let labels = EnglishLabels;
        assert_eq!(labels.month_label(ymd(2025, 1, 1)), "Jan 2025");
        assert_eq!(labels.day_label(ymd(2025, 1, 5)), "5");
        assert_eq!(labels.day_name(ymd(2025, 1, 15)), "Wed");
        assert_eq!(labels.long_date(ymd(2025, 2, 10)), "Feb 10, 2025");
    }
}
