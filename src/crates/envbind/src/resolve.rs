//! Field resolution: which raw string a field is parsed from
//!
//! 1. A malformed `required` literal fails the field outright.
//! 2. No env key, an empty key, or the skip sentinel skips the field.
//! 3. A non-blank environment value always wins.
//! 4. Otherwise the default is used; a blank default on a required field
//!    fails with [`BindError::MissingRequiredVariable`].
//!
//! Both the environment value and the default are trimmed. A blank result
//! on an optional field is passed on as `""`, which parsers treat as "leave
//! the field as it is".

use crate::config::{BindOptions, EnvSource};
use crate::descriptor::FieldDescriptor;
use crate::error::BindError;
use crate::logging::redact_value;
use crate::parse::parse_bool_literal;
use tracing::{debug, trace};

/// Outcome of resolving one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// The field is not bound from the environment
    Skip,
    /// Raw string to parse, possibly empty
    Raw(String),
}

/// Decide the raw string for `name`
///
/// # Arguments
///
/// * `name` - Field name, used in diagnostics
/// * `descriptor` - The field's metadata
/// * `source` - Environment to read the variable from
/// * `options` - Supplies the skip sentinel
///
/// # Returns
///
/// * `Ok(Resolved::Skip)` if the field is not bound from the environment
/// * `Ok(Resolved::Raw(value))` with the trimmed value or default, possibly empty
/// * `Err` if `required` is malformed or a required variable has no value
pub fn resolve_field(
    name: &str,
    descriptor: &FieldDescriptor,
    source: &dyn EnvSource,
    options: &BindOptions,
) -> Result<Resolved, BindError> {
    let required = is_required(name, descriptor)?;

    let key = match descriptor.env.as_deref().map(str::trim) {
        Some(key) if !key.is_empty() && key != options.skip_sentinel => key,
        _ => {
            debug!("Skipping field {}", name);
            return Ok(Resolved::Skip);
        }
    };

    if let Some(value) = source.lookup(key) {
        let value = value.trim();
        if !value.is_empty() {
            trace!(
                field = name,
                env = key,
                value = redact_value(key, value),
                "Using environment value"
            );
            return Ok(Resolved::Raw(value.to_string()));
        }
    }

    let default = descriptor.default.as_deref().map_or("", str::trim);
    if default.is_empty() && required {
        return Err(BindError::MissingRequiredVariable {
            key: key.to_string(),
        });
    }

    trace!(
        field = name,
        env = key,
        value = redact_value(key, default),
        "Using default value"
    );
    Ok(Resolved::Raw(default.to_string()))
}

fn is_required(name: &str, descriptor: &FieldDescriptor) -> Result<bool, BindError> {
    let raw = descriptor.required.as_deref().map_or("", str::trim);
    if raw.is_empty() {
        return Ok(false);
    }
    parse_bool_literal(raw).map_err(|_| BindError::InvalidRequiredTag {
        field: name.to_string(),
        value: raw.to_string(),
    })
}
