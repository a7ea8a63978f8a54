//! Field-level validators and serde helpers shared by every entity.
//!
//! Each entity's `validate` is a list of calls into this module, one per
//! constrained field, so the error always names the wire key at fault.

use crate::error::{ValidationError, ValidationErrorType};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Check that `value` has between `min` and `max` characters.
pub fn validate_length(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let len = value.chars().count();

    if (min..=max).contains(&len) {
        Ok(())
    } else {
        Err(ValidationError::new(ValidationErrorType::Length {
            field,
            min,
            max,
            len,
        }))
    }
}

/// [`validate_length`] for optional strings; `None` always passes.
pub fn validate_optional_length(
    field: &'static str,
    value: Option<&str>,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    value.map_or(Ok(()), |value| validate_length(field, value, min, max))
}

/// Check that `value` lies within `min..=max`.
pub fn validate_range(
    field: &'static str,
    value: i64,
    min: i64,
    max: i64,
) -> Result<(), ValidationError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::new(ValidationErrorType::Range {
            field,
            min,
            max,
            value,
        }))
    }
}

/// Check that a collection holds at most `max` elements.
pub fn validate_count(field: &'static str, len: usize, max: usize) -> Result<(), ValidationError> {
    if len <= max {
        Ok(())
    } else {
        Err(ValidationError::new(ValidationErrorType::Count {
            field,
            max,
            len,
        }))
    }
}

/// Build a [`ValidationErrorType::Format`] error.
pub const fn format_error(field: &'static str, reason: &'static str) -> ValidationError {
    ValidationError::new(ValidationErrorType::Format { field, reason })
}

/// Build a [`ValidationErrorType::Conflict`] error.
pub const fn conflict_error(field: &'static str, reason: &'static str) -> ValidationError {
    ValidationError::new(ValidationErrorType::Conflict { field, reason })
}

/// Whether a serialized field holds its default and may be left out.
///
/// `null`, `false`, empty strings, empty arrays and empty objects count as
/// defaults. Numbers never do: `0` is meaningful for most numeric fields.
pub fn is_default_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(value) => !value,
        Value::String(value) => value.is_empty(),
        Value::Array(values) => values.is_empty(),
        Value::Object(values) => values.is_empty(),
        Value::Number(_) => false,
    }
}

/// Deserialize a nullable string, treating `""` the same as `null`.
pub fn empty_as_none<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let value = Option::<String>::deserialize(deserializer)?;

    Ok(value.filter(|value| !value.is_empty()))
}

/// Deserialize a possibly `null` value into its default.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
