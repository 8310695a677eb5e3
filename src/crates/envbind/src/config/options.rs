//! Options controlling how records are bound

use serde::{Deserialize, Serialize};

/// Binder-wide settings
///
/// Per-field metadata always wins; these only supply the fallbacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BindOptions {
    /// Sequence delimiter for fields that don't declare one
    pub default_delimiter: String,
    /// Environment key that marks a field as skipped
    pub skip_sentinel: String,
    /// Separator used when rendering diagnostics as one message
    pub separator: String,
}

impl Default for BindOptions {
    fn default() -> Self {
        Self {
            default_delimiter: ",".to_string(),
            skip_sentinel: "-".to_string(),
            separator: ", ".to_string(),
        }
    }
}

impl BindOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.default_delimiter = delimiter.into();
        self
    }

    pub fn with_skip_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.skip_sentinel = sentinel.into();
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}
