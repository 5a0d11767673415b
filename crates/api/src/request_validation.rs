// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Parsing and validation of raw request fields.
//!
//! Requests carry text as typed by the user. Everything is checked and
//! converted here before a command is built.

use std::str::FromStr;

use aerocode_domain::{DomainError, parse_iso_date};
use thiserror::Error;
use time::Date;

/// Request field errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestValidationError {
    /// A required field was blank.
    #[error("Field '{field}' is required")]
    MissingField { field: &'static str },

    /// A date was not `YYYY-MM-DD`.
    #[error("Field '{field}' must be a date in YYYY-MM-DD form, got '{value}'")]
    InvalidDate { field: &'static str, value: String },

    /// A value was not one of the accepted names.
    #[error("Field '{field}' has unknown value '{value}'")]
    UnknownValue { field: &'static str, value: String },
}

impl RequestValidationError {
    /// Returns the offending field name.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field }
            | Self::InvalidDate { field, .. }
            | Self::UnknownValue { field, .. } => field,
        }
    }
}

/// Returns the trimmed value, or an error if it is blank.
///
/// # Errors
///
/// Returns `RequestValidationError::MissingField` for blank input.
pub fn require_text(field: &'static str, value: &str) -> Result<String, RequestValidationError> {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        return Err(RequestValidationError::MissingField { field });
    }
    Ok(trimmed.to_string())
}

/// Parses an ISO calendar date.
///
/// # Errors
///
/// Returns `RequestValidationError::InvalidDate` if the text is not a valid date.
pub fn parse_date(field: &'static str, value: &str) -> Result<Date, RequestValidationError> {
    parse_iso_date(value.trim()).map_err(|_| RequestValidationError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// Parses an enumerated value by its stored name.
///
/// Matching ignores case, and spaces or dashes count as underscores, so
/// `"In Progress"` and `"in-progress"` both read as `in_progress`.
///
/// # Errors
///
/// Returns `RequestValidationError::UnknownValue` if no variant matches.
pub fn parse_enum<T>(field: &'static str, value: &str) -> Result<T, RequestValidationError>
where
    T: FromStr<Err = DomainError>,
{
    let normalized: String = value
        .trim()
        .to_lowercase()
        .replace([' ', '-'], "_");
    T::from_str(&normalized).map_err(|_| RequestValidationError::UnknownValue {
        field,
        value: value.to_string(),
    })
}
