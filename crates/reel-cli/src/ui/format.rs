//! String formatting utilities for UI rendering.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use reel_core::Rating;
use uuid::Uuid;

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// Format a short ID from a UUID (first 8 characters).
pub fn short_id(id: &Uuid) -> String {
    id.to_string()[..8].to_string()
}

/// Format a datetime for display.
///
/// Pretty output uses the configured timezone (UTC when unset); plain
/// output is always RFC 3339 UTC.
pub fn format_datetime(dt: &DateTime<Utc>, timezone: Option<Tz>, pretty: bool) -> String {
    if !pretty {
        return dt.to_rfc3339();
    }
    match timezone {
        Some(tz) => dt.with_timezone(&tz).format("%Y-%m-%d %H:%M %Z").to_string(),
        None => dt.format("%Y-%m-%d %H:%M UTC").to_string(),
    }
}

/// Calendar date only, in the display timezone.
pub fn format_date(dt: &DateTime<Utc>, timezone: Option<Tz>) -> String {
    match timezone {
        Some(tz) => dt.with_timezone(&tz).format("%Y-%m-%d").to_string(),
        None => dt.format("%Y-%m-%d").to_string(),
    }
}

pub fn format_rating(rating: Option<Rating>) -> String {
    rating.map(|r| r.to_string()).unwrap_or_else(|| "-".to_string())
}

pub fn format_year(year: Option<u16>) -> String {
    year.map(|y| y.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Sanitize a string for single-line output (replace newlines with spaces).
pub fn single_line(s: &str) -> String {
    s.replace('\n', " ").replace('\r', "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("hello", 2), "he");
    }

    #[test]
    fn test_short_id() {
        let id = Uuid::parse_str("7a2e3c0b-1234-5678-9abc-def012345678").unwrap();
        assert_eq!(short_id(&id), "7a2e3c0b");
    }

    #[test]
    fn test_format_datetime_modes() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 15, 23, 30, 0).unwrap();
        assert_eq!(format_datetime(&dt, None, true), "2024-01-15 23:30 UTC");
        assert_eq!(format_datetime(&dt, None, false), "2024-01-15T23:30:00+00:00");
        assert_eq!(
            format_datetime(&dt, Some(chrono_tz::Europe::Berlin), true),
            "2024-01-16 00:30 CET"
        );
    }

    #[test]
    fn test_format_date_uses_timezone() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 15, 23, 30, 0).unwrap();
        assert_eq!(format_date(&dt, None), "2024-01-15");
        assert_eq!(format_date(&dt, Some(chrono_tz::Asia::Tokyo)), "2024-01-16");
    }

    #[test]
    fn test_optional_fields() {
        assert_eq!(format_rating(None), "-");
        assert_eq!(format_rating(Some(Rating::new(4.5).unwrap())), "4.5");
        assert_eq!(format_year(Some(1994)), "1994");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("a\nb\r"), "a b");
    }
}
