//! Aggregated per-field failures of one bind call

use super::BindError;
use serde::Serialize;
use std::fmt;

/// A single field that failed to bind
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    /// Field name as declared on the record
    pub field: String,
    /// Environment key the field reads, if any
    pub env: Option<String>,
    pub error: BindError,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.error)
    }
}

/// Serializable view of a [`FieldError`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticSummary {
    pub field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<String>,
    pub code: &'static str,
    pub message: String,
}

/// Every field failure from one bind call, in field declaration order
///
/// An empty set means the bind succeeded. `Display` joins the entries with
/// the configured separator (`", "` unless overridden through
/// [`BindOptions`](crate::BindOptions)).
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostics {
    entries: Vec<FieldError>,
    separator: String,
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::with_separator(", ")
    }
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            entries: Vec::new(),
            separator: separator.into(),
        }
    }

    pub fn push(&mut self, entry: FieldError) {
        self.entries.push(entry);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.entries.iter()
    }

    /// First failure recorded for `field`
    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.entries.iter().find(|entry| entry.field == field)
    }

    /// Names of the failed fields, in order
    pub fn fields(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.field.as_str()).collect()
    }

    pub fn into_vec(self) -> Vec<FieldError> {
        self.entries
    }

    pub fn summary(&self) -> Vec<DiagnosticSummary> {
        self.entries
            .iter()
            .map(|entry| DiagnosticSummary {
                field: entry.field.clone(),
                env: entry.env.clone(),
                code: entry.error.code(),
                message: entry.error.to_string(),
            })
            .collect()
    }

    /// Render [`summary`](Self::summary) as pretty JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.summary())
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(&self.separator)?;
            }
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Diagnostics {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
