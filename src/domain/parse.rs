// src/domain/parse.rs

use chrono::NaiveDate;

/// Extracts the numeric magnitude from a free-text quantity like
/// "1,020 acres". Every non-digit character is stripped before parsing, so
/// thousand separators are removed rather than interpreted: "1,020 acres"
/// yields 1020. Returns 0 when no digits remain.
pub fn parse_acres(text: &str) -> i64 {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Parses a slash- or dash-delimited month/day/year date ("10/01/2025",
/// "10-01-2025"). Returns None for anything that does not resolve to a real
/// calendar date.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let mut parts = text.trim().split(['/', '-']);
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    let year: i32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Formats an optional raw date string as MM/DD/YYYY, or "-" when absent.
/// Unparseable input is passed through untouched rather than dropped.
pub fn format_mmddyyyy(input: Option<&str>) -> String {
    let Some(raw) = input else {
        return "-".to_string();
    };
    match parse_date(raw) {
        Some(date) => date.format("%m/%d/%Y").to_string(),
        None => raw.to_string(),
    }
}

/// Formats an optional raw date string as MM-DD-YY, or "-" when absent.
pub fn format_mmddyy(input: Option<&str>) -> String {
    let Some(raw) = input else {
        return "-".to_string();
    };
    match parse_date(raw) {
        Some(date) => date.format("%m-%d-%y").to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acres_extraction_strips_separators() {
        assert_eq!(parse_acres("1,020 acres"), 1020);
        assert_eq!(parse_acres("2 acres"), 2);
        assert_eq!(parse_acres(""), 0);
        assert_eq!(parse_acres("acres"), 0);
    }

    #[test]
    fn dates_parse_with_slash_or_dash_delimiters() {
        let expected = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
        assert_eq!(parse_date("10/01/2025"), Some(expected));
        assert_eq!(parse_date("10-01-2025"), Some(expected));
        assert_eq!(parse_date("10-1-2025"), Some(expected));
    }

    #[test]
    fn bad_dates_parse_to_none() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("13/40/2025"), None);
        assert_eq!(parse_date("10/01"), None);
        assert_eq!(parse_date("not a date"), None);
    }

    #[test]
    fn formatting_falls_back_to_dash_for_missing_dates() {
        assert_eq!(format_mmddyyyy(None), "-");
        assert_eq!(format_mmddyy(None), "-");
        assert_eq!(format_mmddyyyy(Some("10/17/2025")), "10/17/2025");
        assert_eq!(format_mmddyy(Some("10/17/2025")), "10-17-25");
    }
}
