//! The numeric-field rule.
//!
//! A field is numeric iff it is non-empty and made only of ASCII digits `0-9`.
//! Signs, decimal points, exponents and whitespace all fail the rule. Callers
//! are expected to have trimmed the field already.

use crate::error::CoreError;

/// Returns `true` when `field` is a non-empty run of ASCII decimal digits.
pub fn is_numeric_field(field: &str) -> bool {
    !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a numeric field into a `u64`.
///
/// Fails with `NotNumeric` when the field does not satisfy
/// [`is_numeric_field`], and with `Overflow` when it does but the value is too
/// large to represent.
pub fn parse_numeric(field: &str) -> Result<u64, CoreError> {
    if !is_numeric_field(field) {
        return Err(CoreError::NotNumeric(field.to_string()));
    }
    field
        .parse::<u64>()
        .map_err(|_| CoreError::Overflow(field.to_string()))
}

/// Strips leading zeros from a numeric field so that two fields holding the
/// same integer compare equal as strings, whatever their length.
///
/// Returns `None` for non-numeric input. An all-zero field canonicalizes to `"0"`.
pub fn canonical_digits(field: &str) -> Option<&str> {
    if !is_numeric_field(field) {
        return None;
    }
    let trimmed = field.trim_start_matches('0');
    Some(if trimmed.is_empty() { "0" } else { trimmed })
}
