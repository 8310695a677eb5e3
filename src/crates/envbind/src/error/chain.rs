//! Error chain helpers
//!
//! Walk `source()` chains so that a failure such as
//! `MalformedValue -> ParseIntError` can be reported in full.

use std::error::Error as StdError;

/// Format an error chain as a multi-line string
///
/// Each cause is placed on its own line, indented one level deeper than
/// the error it caused.
///
/// # Example
///
/// ```rust
/// use envbind::error::{format_error_chain, BindError};
///
/// let error = BindError::MalformedValue {
///     value: "abc".into(),
///     source: "abc".parse::<u8>().unwrap_err().into(),
/// };
/// let report = format_error_chain(&error);
/// assert!(report.starts_with("Error: invalid value"));
/// assert!(report.contains("Caused by:"));
/// ```
pub fn format_error_chain(error: &dyn StdError) -> String {
    let mut result = format!("Error: {}", error);
    let mut current = error.source();
    let mut level = 1;

    while let Some(source) = current {
        result.push_str(&format!("\n{:indent$}Caused by: {}", "", source, indent = level * 2));
        current = source.source();
        level += 1;
    }

    result
}

/// Get the root cause of an error chain
pub fn root_cause(error: &dyn StdError) -> &dyn StdError {
    let mut current = error;
    while let Some(source) = current.source() {
        current = source;
    }
    current
}

/// Count the number of errors in an error chain (minimum 1)
pub fn error_chain_length(error: &dyn StdError) -> usize {
    let mut count = 1;
    let mut current = error.source();

    while let Some(source) = current {
        count += 1;
        current = source.source();
    }

    count
}
