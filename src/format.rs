//! The fixed storage and display formats.
//!
//! Storage formats are the big-endian forms persisted with the record
//! (`2024-03-01`, `2024-03-01 10:00:00`). Display formats are the
//! day-first forms shown outside persistence (`01/03/2024`,
//! `01/03/2024 10:00:00`).

use chrono::{NaiveDate, NaiveDateTime};

/// Storage date pattern: `YYYY-MM-DD`.
pub const STORAGE_DATE: &str = "%Y-%m-%d";
/// Storage date-time pattern: `YYYY-MM-DD HH:MM:SS`.
pub const STORAGE_DATETIME: &str = "%Y-%m-%d %H:%M:%S";
/// Display date pattern: `DD/MM/YYYY`.
pub const DISPLAY_DATE: &str = "%d/%m/%Y";
/// Display date-time pattern: `DD/MM/YYYY HH:MM:SS`.
pub const DISPLAY_DATETIME: &str = "%d/%m/%Y %H:%M:%S";

/// One of the four canonical string formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateFormat {
    StorageDate,
    StorageDateTime,
    DisplayDate,
    DisplayDateTime,
}

impl DateFormat {
    /// Returns the storage format for a date or date-time field.
    pub fn storage(is_date_time: bool) -> Self {
        if is_date_time {
            DateFormat::StorageDateTime
        } else {
            DateFormat::StorageDate
        }
    }

    /// Returns the display format for a date or date-time field.
    pub fn display(is_date_time: bool) -> Self {
        if is_date_time {
            DateFormat::DisplayDateTime
        } else {
            DateFormat::DisplayDate
        }
    }

    /// Returns the chrono pattern for this format.
    pub fn pattern(&self) -> &'static str {
        match self {
            DateFormat::StorageDate => STORAGE_DATE,
            DateFormat::StorageDateTime => STORAGE_DATETIME,
            DateFormat::DisplayDate => DISPLAY_DATE,
            DateFormat::DisplayDateTime => DISPLAY_DATETIME,
        }
    }

    /// Returns true if this format carries a time component.
    pub fn has_time(&self) -> bool {
        matches!(self, DateFormat::StorageDateTime | DateFormat::DisplayDateTime)
    }

    /// Parse a string in this format.
    ///
    /// Returns `None` when the input does not match. Date-only formats
    /// produce a value at midnight.
    ///
    /// Matching follows chrono's parser and is intentionally lenient: leading
    /// spaces, a signed year and a missing date/time separator are accepted.
    pub fn parse(&self, input: &str) -> Option<NaiveDateTime> {
        if self.has_time() {
            NaiveDateTime::parse_from_str(input, self.pattern()).ok()
        } else {
            NaiveDate::parse_from_str(input, self.pattern())
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        }
    }

    /// Format a value in this format.
    pub fn format(&self, value: &NaiveDateTime) -> String {
        value.format(self.pattern()).to_string()
    }

    /// Parse `input` in this format and re-render it in `target`.
    pub fn convert(&self, input: &str, target: DateFormat) -> Option<String> {
        self.parse(input).map(|value| target.format(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_only_parse_is_midnight() {
        let value = DateFormat::StorageDate.parse("2024-03-01").unwrap();
        assert_eq!(
            DateFormat::StorageDateTime.format(&value),
            "2024-03-01 00:00:00"
        );
    }

    #[test]
    fn test_parse_rejects_trailing_input() {
        assert!(DateFormat::StorageDate.parse("2024-03-01 10:00:00").is_none());
        assert!(DateFormat::DisplayDate.parse("01/03/2024x").is_none());
    }

    #[test]
    fn test_parse_is_lenient_like_chrono() {
        assert!(DateFormat::DisplayDate.parse(" 01/03/2024").is_some());
        assert!(DateFormat::DisplayDate.parse("01/03/+2024").is_some());
        assert!(DateFormat::StorageDateTime
            .parse("2024-03-0110:00:00")
            .is_some());
    }

    #[test]
    fn test_parse_rejects_impossible_day() {
        assert!(DateFormat::DisplayDate.parse("31/02/2024").is_none());
        assert!(DateFormat::StorageDateTime
            .parse("2024-01-01 25:00:00")
            .is_none());
    }
}
