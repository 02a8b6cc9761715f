//! Parsing helpers for flag values.

use reel_core::{Rating, SortKey, SortOrder, StatusFilter};

use crate::errors::CliError;

/// Validate `--format` and its combination with `--json`.
pub fn check_output_flags(json: bool, format: Option<&str>) -> anyhow::Result<()> {
    match format {
        None => Ok(()),
        Some(_) if json => Err(CliError::invalid_input("--format cannot be used with --json").into()),
        Some("table") | Some("plain") => Ok(()),
        Some(other) => Err(CliError::invalid_input(format!(
            "Unsupported format: {} (use table or plain)",
            other
        ))
        .into()),
    }
}

pub fn parse_rating(value: &str) -> anyhow::Result<Rating> {
    Ok(value.parse::<Rating>()?)
}

/// Parse a release year. Range checks happen in the core validation.
pub fn parse_year(value: &str) -> anyhow::Result<u16> {
    let trimmed = value.trim();
    if trimmed.len() != 4 || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(CliError::invalid_input(format!(
            "Invalid year: {} (expected YYYY)",
            value
        ))
        .into());
    }
    Ok(trimmed.parse()?)
}

/// An edit flag: absent leaves the field alone, empty clears it.
pub fn optional_edit<T>(
    value: Option<&str>,
    parse: impl Fn(&str) -> anyhow::Result<T>,
) -> anyhow::Result<Option<Option<T>>> {
    match value {
        None => Ok(None),
        Some(text) if text.trim().is_empty() => Ok(Some(None)),
        Some(text) => Ok(Some(Some(parse(text)?))),
    }
}

pub fn parse_status(value: &str) -> anyhow::Result<StatusFilter> {
    Ok(value.parse()?)
}

pub fn parse_sort_key(value: &str) -> anyhow::Result<SortKey> {
    Ok(value.parse()?)
}

pub fn parse_sort_order(value: &str) -> anyhow::Result<SortOrder> {
    Ok(value.parse()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_output_flags() {
        assert!(check_output_flags(false, None).is_ok());
        assert!(check_output_flags(false, Some("plain")).is_ok());
        assert!(check_output_flags(true, Some("plain")).is_err());
        assert!(check_output_flags(false, Some("csv")).is_err());
    }

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("1994").unwrap(), 1994);
        assert_eq!(parse_year(" 2021 ").unwrap(), 2021);
        assert!(parse_year("94").is_err());
        assert!(parse_year("19x4").is_err());
    }

    #[test]
    fn test_parse_rating() {
        assert_eq!(parse_rating("4.5").unwrap().value(), 4.5);
        assert!(parse_rating("6").is_err());
        assert!(parse_rating("great").is_err());
    }

    #[test]
    fn test_optional_edit() {
        assert!(optional_edit(None, parse_year).unwrap().is_none());
        assert_eq!(optional_edit(Some(""), parse_year).unwrap(), Some(None));
        assert_eq!(optional_edit(Some("2010"), parse_year).unwrap(), Some(Some(2010)));
        assert!(optional_edit(Some("abc"), parse_year).is_err());
    }

    #[test]
    fn test_filter_values() {
        assert_eq!(parse_status("watchlist").unwrap(), StatusFilter::Unwatched);
        assert_eq!(parse_sort_key("Title").unwrap(), SortKey::Title);
        assert_eq!(parse_sort_order("asc").unwrap(), SortOrder::Asc);
        assert!(parse_sort_key("length").is_err());
    }
}
