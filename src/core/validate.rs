//! Boundary validation helpers.
//!
//! Amounts arrive as raw form strings and must parse to a positive finite
//! number before anything is written; required text fields must be non-empty
//! after trimming. A failure here means no write was attempted.

use crate::errors::{Error, Result};

/// Parses a raw amount string, accepting only positive finite numbers.
/// Zero, negative, non-numeric, and non-finite input is rejected.
pub fn parse_amount(raw: &str) -> Result<f64> {
    let parsed: f64 = raw
        .trim()
        .parse()
        .map_err(|_| Error::InvalidAmount { input: raw.to_string() })?;

    if !parsed.is_finite() || parsed <= 0.0 {
        return Err(Error::InvalidAmount { input: raw.to_string() });
    }

    Ok(parsed)
}

/// Requires a non-empty (after trimming) text field, returning the trimmed
/// value. The field name is carried into the error for the user-facing notice.
pub fn require(field: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::MissingField { field });
    }
    Ok(trimmed.to_string())
}
