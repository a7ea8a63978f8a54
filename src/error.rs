//! Errors raised while building, decoding or encoding entities.

use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
};

/// A field held a value outside of what Discord accepts.
#[derive(Debug)]
pub struct ValidationError {
    kind: ValidationErrorType,
}

impl ValidationError {
    pub(crate) const fn new(kind: ValidationErrorType) -> Self {
        Self { kind }
    }

    /// Immutable reference to the type of error that occurred.
    #[must_use = "retrieving the type has no effect if left unused"]
    pub const fn kind(&self) -> &ValidationErrorType {
        &self.kind
    }

    /// Consume the error, returning the owned error type.
    #[must_use = "consuming the error into its parts has no effect if left unused"]
    pub fn into_kind(self) -> ValidationErrorType {
        self.kind
    }

    /// Name of the wire field that failed validation.
    pub const fn field(&self) -> &'static str {
        match &self.kind {
            ValidationErrorType::Length { field, .. }
            | ValidationErrorType::Range { field, .. }
            | ValidationErrorType::Count { field, .. }
            | ValidationErrorType::Format { field, .. }
            | ValidationErrorType::Conflict { field, .. } => field,
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match &self.kind {
            ValidationErrorType::Length {
                field,
                min,
                max,
                len,
            } => write!(
                f,
                "`{field}` length must be in range {min}..={max}, got {len}"
            ),
            ValidationErrorType::Range {
                field,
                min,
                max,
                value,
            } => write!(f, "`{field}` must be in range {min}..={max}, got {value}"),
            ValidationErrorType::Count { field, max, len } => {
                write!(f, "`{field}` can hold at most {max} elements, got {len}")
            }
            ValidationErrorType::Format { field, reason } => {
                write!(f, "`{field}` is malformed: {reason}")
            }
            ValidationErrorType::Conflict { field, reason } => {
                write!(f, "`{field}` conflicts with the rest of the entity: {reason}")
            }
        }
    }
}

impl Error for ValidationError {}

/// Type of [`ValidationError`] that occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationErrorType {
    /// String length, counted in characters, is out of bounds.
    Length {
        field: &'static str,
        min: usize,
        max: usize,
        len: usize,
    },
    /// Numeric value is out of bounds.
    Range {
        field: &'static str,
        min: i64,
        max: i64,
        value: i64,
    },
    /// Collection holds too many elements.
    Count {
        field: &'static str,
        max: usize,
        len: usize,
    },
    /// Value has the right type but an invalid shape.
    Format {
        field: &'static str,
        reason: &'static str,
    },
    /// Value is fine on its own but not allowed together with another field.
    Conflict {
        field: &'static str,
        reason: &'static str,
    },
}

/// Decoding or encoding an entity failed.
#[derive(Debug)]
pub struct EntityError {
    kind: EntityErrorType,
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl EntityError {
    pub(crate) const NOT_AN_OBJECT: EntityError = EntityError {
        kind: EntityErrorType::NotAnObject,
        source: None,
    };

    /// Immutable reference to the type of error that occurred.
    #[must_use = "retrieving the type has no effect if left unused"]
    pub const fn kind(&self) -> &EntityErrorType {
        &self.kind
    }

    /// Consume the error, returning the source error if there is any.
    #[must_use = "consuming the error and retrieving the source has no effect if left unused"]
    pub fn into_source(self) -> Option<Box<dyn Error + Send + Sync>> {
        self.source
    }

    /// Consume the error, returning the owned error type and the source error.
    #[must_use = "consuming the error into its parts has no effect if left unused"]
    pub fn into_parts(self) -> (EntityErrorType, Option<Box<dyn Error + Send + Sync>>) {
        (self.kind, self.source)
    }

    pub(crate) fn deserialize(source: serde_json::Error) -> Self {
        Self {
            kind: EntityErrorType::Deserialize,
            source: Some(Box::new(source)),
        }
    }

    pub(crate) fn serialize(source: serde_json::Error) -> Self {
        Self {
            kind: EntityErrorType::Serialize,
            source: Some(Box::new(source)),
        }
    }
}

impl Display for EntityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match &self.kind {
            EntityErrorType::NotAnObject => f.write_str("entity data is not a json object"),
            EntityErrorType::Deserialize => f.write_str("entity data could not be decoded"),
            EntityErrorType::Serialize => f.write_str("entity could not be encoded"),
            EntityErrorType::Validation => f.write_str("entity data failed validation"),
        }
    }
}

impl Error for EntityError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|source| &**source as &(dyn Error + 'static))
    }
}

impl From<ValidationError> for EntityError {
    fn from(source: ValidationError) -> Self {
        Self {
            kind: EntityErrorType::Validation,
            source: Some(Box::new(source)),
        }
    }
}

/// Type of [`EntityError`] that occurred.
#[derive(Debug)]
#[non_exhaustive]
pub enum EntityErrorType {
    /// Payload is not a JSON object.
    NotAnObject,
    /// Payload doesn't match the entity's wire shape.
    Deserialize,
    /// Entity couldn't be written as JSON.
    Serialize,
    /// Payload decoded, but a field is out of range.
    Validation,
}
