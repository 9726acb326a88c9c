use thiserror::Error;

use crate::{Field, RangeError};

#[doc = r#"
An event of a request failed validation
"#]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validating event {index}, {kind}")]
pub struct ValidationError {
    index: usize,
    pub(crate) kind: ValidationErrorKind,
}

/// The reason an event failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationErrorKind {
    /// A field was outside of its range
    #[error("{0}")]
    OutOfRange(#[from] RangeError),
    /// A field required by the event's kind was absent
    #[error("{kind} requires `{field}`")]
    MissingField {
        /// The event kind
        kind: &'static str,
        /// The absent field
        field: Field,
    },
}

impl ValidationError {
    /// Create a validation error for the event at `index`
    pub const fn new(index: usize, kind: ValidationErrorKind) -> Self {
        Self { index, kind }
    }
    /// True if a field was out of range
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self.kind, ValidationErrorKind::OutOfRange(_))
    }
    /// Returns the error kind of the validation.
    pub fn error_kind(&self) -> &ValidationErrorKind {
        &self.kind
    }
    /// Returns the position of the offending event in the request.
    pub fn index(&self) -> usize {
        self.index
    }
}

/// The Validation Result type (see [`ValidationError`])
pub type ValidationResult<T> = Result<T, ValidationError>;
