//! # Date Formats
//!
//! Cards print dates as `DD/Mon/YYYY` (e.g. `05/Jan/2025`) while the form edits
//! them as canonical ISO `YYYY-MM-DD`. This module converts between the two.
//!
//! Both directions degrade instead of failing: a malformed input yields an
//! empty string, which the form shows as a blank date control and the card
//! shows as an empty value. Unknown months collapse to January.
//!
//! Only the English three-letter month abbreviations are supported, matched
//! case-sensitively.

use chrono::NaiveDate;

const MONTHS: [(&str, &str); 12] = [
    ("01", "Jan"),
    ("02", "Feb"),
    ("03", "Mar"),
    ("04", "Apr"),
    ("05", "May"),
    ("06", "Jun"),
    ("07", "Jul"),
    ("08", "Aug"),
    ("09", "Sep"),
    ("10", "Oct"),
    ("11", "Nov"),
    ("12", "Dec"),
];

fn month_abbr(code: &str) -> &'static str {
    MONTHS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, abbr)| *abbr)
        .unwrap_or("Jan")
}

fn month_code(abbr: &str) -> &'static str {
    MONTHS
        .iter()
        .find(|(_, a)| *a == abbr)
        .map(|(code, _)| *code)
        .unwrap_or("01")
}

/// Left-pads `s` with zeros up to `width` characters. Longer input is kept as is.
fn pad_start(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }
    format!("{}{}", "0".repeat(width - len), s)
}

/// Converts an ISO date (`YYYY-MM-DD`) into the display form `DD/Mon/YYYY`.
///
/// Empty input, or input without three `-` separated parts, yields `""`.
pub fn to_display(iso: &str) -> String {
    if iso.is_empty() {
        return String::new();
    }
    let mut parts = iso.split('-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return String::new();
    };
    format!("{}/{}/{}", pad_start(day, 2), month_abbr(month), year)
}

/// Converts a display date (`DD/Mon/YYYY`) back into ISO `YYYY-MM-DD`.
///
/// A slash-separated date without letters in the middle part is taken to be
/// ISO-ordered already (`2025/1/5` becomes `2025-01-05`). Anything that is not
/// exactly three slash-separated parts yields `""`.
pub fn to_iso(display: &str) -> String {
    if display.is_empty() {
        return String::new();
    }
    let parts: Vec<&str> = display.split('/').collect();
    let [first, middle, last] = parts.as_slice() else {
        return String::new();
    };

    if middle.chars().any(|c| c.is_ascii_alphabetic()) {
        let abbr: String = middle.chars().take(3).collect();
        return format!("{}-{}-{}", last, month_code(&abbr), pad_start(first, 2));
    }

    format!(
        "{}-{}-{}",
        pad_start(first, 4),
        pad_start(middle, 2),
        pad_start(last, 2)
    )
}

/// True when `iso` names a real calendar day. Used for form warnings only.
pub fn is_calendar_date(iso: &str) -> bool {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn to_display_formats_iso() {
        assert_eq!(to_display("2025-01-05"), "05/Jan/2025");
        assert_eq!(to_display("2025-09-30"), "30/Sep/2025");
        assert_eq!(to_display("2025-12-1"), "01/Dec/2025");
    }

    #[test]
    fn to_display_unknown_month_is_january() {
        assert_eq!(to_display("2025-13-05"), "05/Jan/2025");
        assert_eq!(to_display("2025-1-05"), "05/Jan/2025");
    }

    #[test]
    fn to_display_degrades_to_empty() {
        assert_eq!(to_display(""), "");
        assert_eq!(to_display("2025-01"), "");
        assert_eq!(to_display("garbage"), "");
    }

    #[test]
    fn to_iso_parses_abbreviated_month() {
        assert_eq!(to_iso("05/Jan/2025"), "2025-01-05");
        assert_eq!(to_iso("30/Sep/2025"), "2025-09-30");
        assert_eq!(to_iso("5/Dec/2025"), "2025-12-05");
    }

    #[test]
    fn to_iso_uses_first_three_letters_case_sensitively() {
        assert_eq!(to_iso("05/September/2025"), "2025-09-05");
        assert_eq!(to_iso("05/sep/2025"), "2025-01-05");
        assert_eq!(to_iso("05/Xyz/2025"), "2025-01-05");
    }

    #[test]
    fn to_iso_pads_iso_ordered_input() {
        assert_eq!(to_iso("2025/1/5"), "2025-01-05");
        assert_eq!(to_iso("25/1/5"), "0025-01-05");
    }

    #[test]
    fn to_iso_degrades_to_empty() {
        assert_eq!(to_iso(""), "");
        assert_eq!(to_iso("not-a-date"), "");
        assert_eq!(to_iso("2025-01-05"), "");
        assert_eq!(to_iso("01/Jan/2025/extra"), "");
    }

    #[test]
    fn iso_round_trips_through_display_for_a_whole_year() {
        let mut day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        while day.year() == 2024 {
            let iso = day.format("%Y-%m-%d").to_string();
            assert_eq!(to_iso(&to_display(&iso)), iso);
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn display_round_trips_through_iso() {
        let mut day = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        while day.year() == 2023 {
            let display = day.format("%d/%b/%Y").to_string();
            assert_eq!(to_display(&to_iso(&display)), display);
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn display_round_trip_normalizes_day_padding() {
        assert_eq!(to_display(&to_iso("5/Mar/2025")), "05/Mar/2025");
    }

    #[test]
    fn calendar_date_check() {
        assert!(is_calendar_date("2024-02-29"));
        assert!(!is_calendar_date("2023-02-29"));
        assert!(!is_calendar_date("05/Jan/2025"));
        assert!(!is_calendar_date(""));
    }
}
