//! Shared validation helpers.
//!
//! Request DTOs derive [`validator::Validate`] for field-level rules
//! (lengths, emails, URLs, ranges). This module turns the resulting
//! [`ValidationErrors`] into a single readable message and holds the few
//! checks that are not expressible as derive attributes.

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// Lowest accepted feedback rating.
pub const MIN_RATING: i16 = 1;

/// Highest accepted feedback rating.
pub const MAX_RATING: i16 = 5;

/// Run derive-based validation and map failures to [`CoreError::Validation`].
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(describe_errors(&errors)))
}

/// Flatten validation errors into `"field: message; field: message"`.
///
/// Fields are listed alphabetically so the message is stable. A failing
/// rule without a custom message is reported by its code.
pub fn describe_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let msg = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                format!("{field}: {msg}")
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validate a value against a fixed set of allowed names.
pub fn validate_one_of(field: &str, value: &str, allowed: &[&str]) -> Result<(), CoreError> {
    if !allowed.contains(&value) {
        return Err(CoreError::Validation(format!(
            "Invalid {field} '{value}'. Valid values: {}",
            allowed.join(", ")
        )));
    }
    Ok(())
}

/// Reject strings that are empty once trimmed.
pub fn require_non_blank(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be blank")));
    }
    Ok(())
}

/// Validate a list of short labels (features, technologies).
pub fn validate_labels(
    field: &str,
    labels: &[String],
    max_count: usize,
    max_len: usize,
) -> Result<(), CoreError> {
    if labels.len() > max_count {
        return Err(CoreError::Validation(format!(
            "{field} may contain at most {max_count} entries (got {})",
            labels.len()
        )));
    }
    for label in labels {
        if label.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "{field} entries must not be blank"
            )));
        }
        if label.chars().count() > max_len {
            return Err(CoreError::Validation(format!(
                "{field} entry '{label}' exceeds {max_len} characters"
            )));
        }
    }
    Ok(())
}
