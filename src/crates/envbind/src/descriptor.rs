//! Per-field binding metadata
//!
//! A [`FieldDescriptor`] carries the raw metadata for one record field:
//! which variable to read, whether it is required, the fallback value,
//! bound overrides and the sequence delimiter. Values are kept as raw
//! strings and only interpreted when the field is bound, so a malformed
//! `required`, `min` or `max` surfaces as a diagnostic for that field.

use serde::{Deserialize, Serialize};

/// Raw metadata for one record field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldDescriptor {
    /// Environment key; absent, empty or the skip sentinel skips the field
    pub env: Option<String>,
    /// `true`/`false` literal
    pub required: Option<String>,
    /// Used when the variable is absent or blank
    pub default: Option<String>,
    /// Lower bound override, in the field's own representation
    pub min: Option<String>,
    /// Upper bound override, in the field's own representation
    pub max: Option<String>,
    /// Sequence separator
    pub delimiter: Option<String>,
}

/// Descriptor reading from `env`
///
/// ```rust
/// use envbind::field;
///
/// let port = field("PORT").default_value("8080").min("1024").max("65535");
/// assert_eq!(port.env.as_deref(), Some("PORT"));
/// assert_eq!(port.max.as_deref(), Some("65535"));
/// ```
pub fn field(env: impl Into<String>) -> FieldDescriptor {
    FieldDescriptor::new().env(env)
}

impl FieldDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Descriptor for a field that is never read from the environment
    pub fn skip() -> Self {
        Self::default()
    }

    pub fn env(mut self, key: impl Into<String>) -> Self {
        self.env = Some(key.into());
        self
    }

    pub fn required(self, required: bool) -> Self {
        self.required_literal(required.to_string())
    }

    /// Set `required` from a raw literal, validated at bind time
    pub fn required_literal(mut self, literal: impl Into<String>) -> Self {
        self.required = Some(literal.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn min(mut self, min: impl Into<String>) -> Self {
        self.min = Some(min.into());
        self
    }

    pub fn max(mut self, max: impl Into<String>) -> Self {
        self.max = Some(max.into());
        self
    }

    /// Inclusive range override
    pub fn range(self, min: impl Into<String>, max: impl Into<String>) -> Self {
        self.min(min).max(max)
    }

    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }

    /// Delimiter for this field, falling back to `default`
    pub fn delimiter_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.delimiter.as_deref().unwrap_or(default)
    }
}
