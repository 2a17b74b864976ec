//! Date resolution for entries
//!
//! Accepts only zero-padded `YYYY-MM-DD` strings naming a real calendar day.

use chrono::{Datelike, NaiveDate};

use crate::error::{PostError, Result};

/// Format used for entry dates and file names
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Resolve the entry date: the explicit input when given, `today` otherwise.
pub fn resolve(input: Option<&str>, today: NaiveDate) -> Result<NaiveDate> {
    match input {
        Some(raw) => parse_strict(raw),
        None => Ok(today),
    }
}

/// Parse a `YYYY-MM-DD` date, rejecting unpadded fields and impossible days.
pub fn parse_strict(raw: &str) -> Result<NaiveDate> {
    let invalid = || PostError::InvalidDateFormat(raw.to_string());

    // chrono accepts `2025-6-1`, so check the shape first
    let bytes = raw.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(invalid());
    }

    let date = NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| invalid())?;

    // chrono's proleptic calendar has a year 0, the Gregorian one does not
    if date.year() < 1 {
        return Err(invalid());
    }

    Ok(date)
}
