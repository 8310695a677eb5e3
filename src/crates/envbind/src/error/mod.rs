//! Error types for binding environment values into records
//!
//! Binding failures come in two layers:
//!
//! - [`BindError`] describes why a single field could not be bound.
//! - [`Error`] is what a bind call returns: either the fatal
//!   [`Error::NotARecordReference`] or every field failure collected into
//!   [`Diagnostics`].
//!
//! # Example
//!
//! ```rust,ignore
//! use envbind::{EnvRecord, Error};
//!
//! match AppConfig::from_env() {
//!     Ok(config) => run(config),
//!     Err(Error::Fields(diagnostics)) => {
//!         for failure in diagnostics.iter() {
//!             eprintln!("{}: {}", failure.field, failure.error);
//!         }
//!     }
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

mod chain;
mod diagnostics;

pub use chain::{error_chain_length, format_error_chain, root_cause};
pub use diagnostics::{DiagnosticSummary, Diagnostics, FieldError};

use crate::parse::DurationError;
use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

/// Failure of a bind call as a whole
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The target is not a record the binder knows how to fill.
    ///
    /// Checked once, before any field is looked at.
    #[error("input must be a mutable reference to a registered record")]
    NotARecordReference,

    /// One or more fields failed; every failure is listed in declaration order
    #[error("{0}")]
    Fields(Diagnostics),
}

impl Error {
    /// Field diagnostics, if this is a per-field failure
    pub fn diagnostics(&self) -> Option<&Diagnostics> {
        match self {
            Error::Fields(diagnostics) => Some(diagnostics),
            Error::NotARecordReference => None,
        }
    }
}

/// Result type for bind operations
pub type Result<T> = std::result::Result<T, Error>;

/// Which bound override a [`BindError::InvalidBoundTag`] refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundTag {
    Min,
    Max,
}

impl BoundTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoundTag::Min => "min",
            BoundTag::Max => "max",
        }
    }
}

impl std::fmt::Display for BoundTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a literal could not be read in the field's representation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    #[error(transparent)]
    Int(#[from] ParseIntError),

    #[error(transparent)]
    Float(#[from] ParseFloatError),

    /// A finite literal that does not fit the field's width
    #[error("value out of range")]
    OutOfRange,

    #[error("invalid boolean literal")]
    Bool,

    #[error(transparent)]
    Duration(#[from] DurationError),
}

/// Failure to bind a single field
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BindError {
    /// The `required` metadata is not a boolean literal
    #[error("'required' on {field} must be either true or false (got {value:?})")]
    InvalidRequiredTag { field: String, value: String },

    /// Required field with neither an environment value nor a default
    #[error("missing required variable [{key}]")]
    MissingRequiredVariable { key: String },

    #[error("unsupported type {kind}")]
    UnsupportedFieldType { kind: String },

    #[error("unsupported slice type {element}")]
    UnsupportedSliceType { element: String },

    #[error("unsupported pointer type {pointee}")]
    UnsupportedPointerType { pointee: String },

    /// A `min`/`max` override does not parse in the field's representation
    #[error("unable to parse tag {tag} on {field}: {source}")]
    InvalidBoundTag {
        tag: BoundTag,
        field: String,
        #[source]
        source: LiteralError,
    },

    #[error("invalid value {value:?}: {source}")]
    MalformedValue {
        value: String,
        #[source]
        source: LiteralError,
    },

    #[error("{field} must be at least {min}")]
    BelowMinimum { field: String, min: String },

    #[error("{field} must be no more than {max}")]
    AboveMaximum { field: String, max: String },

    #[error("invalid URL {value:?}: {source}")]
    MalformedUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    /// Several tokens of one sequence field failed
    #[error("{}", join_tokens(.0))]
    Tokens(Vec<BindError>),
}

fn join_tokens(errors: &[BindError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl BindError {
    /// Stable machine-readable code for this failure
    pub fn code(&self) -> &'static str {
        match self {
            BindError::InvalidRequiredTag { .. } => "invalid_required_tag",
            BindError::MissingRequiredVariable { .. } => "missing_required_variable",
            BindError::UnsupportedFieldType { .. } => "unsupported_field_type",
            BindError::UnsupportedSliceType { .. } => "unsupported_slice_type",
            BindError::UnsupportedPointerType { .. } => "unsupported_pointer_type",
            BindError::InvalidBoundTag { .. } => "invalid_bound_tag",
            BindError::MalformedValue { .. } => "malformed_value",
            BindError::BelowMinimum { .. } => "below_minimum",
            BindError::AboveMaximum { .. } => "above_maximum",
            BindError::MalformedUrl { .. } => "malformed_url",
            BindError::Tokens(_) => "invalid_tokens",
        }
    }

    pub(crate) fn malformed(value: &str, source: impl Into<LiteralError>) -> Self {
        BindError::MalformedValue {
            value: value.to_string(),
            source: source.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_value_keeps_source() {
        let source = "abc".parse::<i32>().unwrap_err();
        let error = BindError::malformed("abc", source.clone());

        assert_eq!(error.code(), "malformed_value");
        assert!(error.to_string().contains("\"abc\""));
        assert_eq!(
            std::error::Error::source(&error).map(ToString::to_string),
            Some(source.to_string())
        );
    }

    #[test]
    fn test_bound_messages() {
        let below = BindError::BelowMinimum {
            field: "port".into(),
            min: "1024".into(),
        };
        let above = BindError::AboveMaximum {
            field: "port".into(),
            max: "65535".into(),
        };

        assert_eq!(below.to_string(), "port must be at least 1024");
        assert_eq!(above.to_string(), "port must be no more than 65535");
    }

    #[test]
    fn test_tokens_join_in_order() {
        let error = BindError::Tokens(vec![
            BindError::MissingRequiredVariable { key: "A".into() },
            BindError::UnsupportedFieldType { kind: "map".into() },
        ]);

        assert_eq!(
            error.to_string(),
            "missing required variable [A], unsupported type map"
        );
    }

    #[test]
    fn test_not_a_record_has_no_diagnostics() {
        assert!(Error::NotARecordReference.diagnostics().is_none());
    }
}
