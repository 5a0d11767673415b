// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! ISO-8601 calendar date handling.
//!
//! Stage due dates and report delivery dates are stored as `YYYY-MM-DD`
//! text and parsed back into [`time::Date`] whenever a record is loaded.

use crate::error::DomainError;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// The `YYYY-MM-DD` format used for every persisted and rendered date.
pub const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parses a `YYYY-MM-DD` string into a date.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid
/// calendar date in ISO-8601 form.
pub fn parse_iso_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value.trim(), ISO_DATE).map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// Formats a date as `YYYY-MM-DD`.
///
/// Falls back to the `Display` form of the date if formatting fails.
#[must_use]
pub fn format_iso_date(date: Date) -> String {
    date.format(ISO_DATE).unwrap_or_else(|_| format!("{date}"))
}

/// Serde adapter that stores a [`Date`] as ISO-8601 text.
pub mod iso_date {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};
    use time::Date;

    /// Serializes a date as `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns the serializer's error if writing fails.
    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_iso_date(*date))
    }

    /// Deserializes a `YYYY-MM-DD` string into a date.
    ///
    /// # Errors
    ///
    /// Returns a deserializer error if the text is not a valid date.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let raw: String = String::deserialize(deserializer)?;
        super::parse_iso_date(&raw).map_err(D::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use time::Month;

    #[test]
    fn test_parse_and_format_iso_date() {
        let date = parse_iso_date("2026-01-20").unwrap();
        assert_eq!(date, Date::from_calendar_date(2026, Month::January, 20).unwrap());
        assert_eq!(format_iso_date(date), "2026-01-20");
    }

    #[test]
    fn test_parse_rejects_non_iso_text() {
        let result = parse_iso_date("20/01/2026");
        assert!(matches!(result, Err(DomainError::DateParseError { .. })));
    }

    #[test]
    fn test_parse_rejects_impossible_date() {
        assert!(parse_iso_date("2026-02-30").is_err());
    }
}
