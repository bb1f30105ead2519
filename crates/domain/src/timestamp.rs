// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Timestamp parsing for backend records.

use chrono::{DateTime, NaiveDateTime};

use crate::error::DomainError;

/// The backend's native `DATETIME` rendering.
pub const BACKEND_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const ISO_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parses a timestamp as sent by the backend.
///
/// Accepts `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS[.fff]` and RFC 3339.
/// RFC 3339 values are converted to UTC.
///
/// # Errors
///
/// Returns `DomainError::TimestampParseError` if no format matches.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, DomainError> {
    let trimmed: &str = value.trim();

    NaiveDateTime::parse_from_str(trimmed, BACKEND_TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, ISO_LOCAL_FORMAT))
        .or_else(|_| DateTime::parse_from_rfc3339(trimmed).map(|dt| dt.naive_utc()))
        .map_err(|_| DomainError::TimestampParseError {
            value: value.to_string(),
        })
}

/// Renders a timestamp the way the backend stores it.
#[must_use]
pub fn format_timestamp(value: &NaiveDateTime) -> String {
    value.format(BACKEND_TIMESTAMP_FORMAT).to_string()
}
