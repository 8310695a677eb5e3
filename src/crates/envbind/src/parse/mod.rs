//! Scalar and sequence parsers
//!
//! Each supported primitive implements [`Scalar`]: it turns one raw token
//! into a validated value for a field. Numeric kinds (integers, floats,
//! durations) also implement [`Bounded`](crate::validation::Bounded) and go
//! through [`parse_bounded`], which parses the literal at the field's width
//! and then checks it against the effective `[min, max]`.
//!
//! [`sequence`] splits a raw string on the field's delimiter and maps every
//! token through the element type's [`Scalar`] impl.

mod boolean;
mod duration;
mod float;
mod int;
pub mod sequence;
mod text;
mod urls;

pub use boolean::parse_bool_literal;
pub use duration::{format_duration, parse_duration, DurationError};
pub use sequence::{parse_sequence, split_tokens};

use crate::config::BindOptions;
use crate::descriptor::FieldDescriptor;
use crate::error::BindError;
use crate::shape::Kind;
use crate::validation::{Bounded, Bounds};

/// Everything a parser needs to know about the field it is filling
#[derive(Debug, Clone, Copy)]
pub struct FieldContext<'a> {
    /// Field name, used in diagnostics
    pub name: &'a str,
    pub descriptor: &'a FieldDescriptor,
    /// Effective sequence delimiter
    pub delimiter: &'a str,
}

impl<'a> FieldContext<'a> {
    pub fn new(name: &'a str, descriptor: &'a FieldDescriptor, options: &'a BindOptions) -> Self {
        Self {
            name,
            descriptor,
            delimiter: descriptor.delimiter_or(&options.default_delimiter),
        }
    }
}

/// A primitive that can be parsed from a single raw token
pub trait Scalar: Sized {
    const KIND: Kind;

    /// Parse and validate one non-blank token
    fn parse(raw: &str, field: &FieldContext<'_>) -> Result<Self, BindError>;

    /// Value a blank raw string stands for; `None` leaves the field as is
    fn from_empty() -> Option<Self> {
        None
    }
}

/// Parse a numeric literal and check it against the field's bounds
pub fn parse_bounded<T: Bounded>(raw: &str, field: &FieldContext<'_>) -> Result<T, BindError> {
    let value = T::parse_literal(raw).map_err(|source| BindError::malformed(raw, source))?;
    Bounds::<T>::resolve(field)?.check(value, field.name)
}
