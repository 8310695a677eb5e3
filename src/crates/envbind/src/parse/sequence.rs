//! Sequence fields
//!
//! A raw string is split on the field's delimiter, every token is trimmed
//! and parsed as the element type, and the order of tokens is preserved.
//! A blank raw string yields no tokens at all, never a single empty one.
//!
//! Every token is parsed even after a failure so that one diagnostic lists
//! all bad tokens of the field.

use crate::error::BindError;
use crate::parse::{FieldContext, Scalar};

/// Split `raw` on `delimiter` and trim every token
///
/// An empty delimiter splits between characters.
///
/// ```rust
/// use envbind::parse::split_tokens;
///
/// assert_eq!(split_tokens(" 1, 2 ,3 ", ","), vec!["1", "2", "3"]);
/// assert!(split_tokens("", ",").is_empty());
/// ```
pub fn split_tokens<'a>(raw: &'a str, delimiter: &str) -> Vec<&'a str> {
    if raw.is_empty() {
        return Vec::new();
    }

    if delimiter.is_empty() {
        return raw
            .char_indices()
            .map(|(i, c)| raw[i..i + c.len_utf8()].trim())
            .collect();
    }

    raw.split(delimiter).map(str::trim).collect()
}

/// Parse every token of `raw` as `T`
///
/// When exactly one token fails its error is returned as is; when several
/// fail they are returned together as [`BindError::Tokens`].
pub fn parse_sequence<T: Scalar>(raw: &str, field: &FieldContext<'_>) -> Result<Vec<T>, BindError> {
    let tokens = split_tokens(raw, field.delimiter);
    let mut values = Vec::with_capacity(tokens.len());
    let mut errors = Vec::new();

    for token in tokens {
        match T::parse(token, field) {
            Ok(value) => values.push(value),
            Err(error) => errors.push(error),
        }
    }

    match errors.len() {
        0 => Ok(values),
        1 => Err(errors.remove(0)),
        _ => Err(BindError::Tokens(errors)),
    }
}
