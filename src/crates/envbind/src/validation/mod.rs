//! Bound resolution and range checks
//!
//! Every numeric field is checked against an inclusive `[min, max]`. The
//! bounds come from the field's `min`/`max` overrides when present, parsed
//! in the same representation and width as the value itself, and otherwise
//! from the natural range of the type (see [`bounds`]).
//!
//! `min <= max` is not enforced: a contradictory override simply rejects
//! every value.
//!
//! # Example
//!
//! ```rust
//! use envbind::validation::Bounds;
//!
//! let bounds = Bounds::new(1u16, 10);
//! assert_eq!(bounds.check(10, "retries"), Ok(10));
//! assert!(bounds.check(11, "retries").is_err());
//! ```

pub mod bounds;

use crate::error::{BindError, BoundTag, LiteralError};
use crate::parse::FieldContext;

/// A numeric representation with a natural range
pub trait Bounded: Copy + PartialOrd {
    fn natural_min() -> Self;
    fn natural_max() -> Self;

    /// Parse a literal in this representation, without range checks
    fn parse_literal(raw: &str) -> Result<Self, LiteralError>;

    /// Render a bound for diagnostics
    fn render(&self) -> String;
}

/// Effective inclusive range for a field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T> {
    pub min: T,
    pub max: T,
}

impl<T: Bounded> Bounds<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// The full range of `T`
    pub fn natural() -> Self {
        Self::new(T::natural_min(), T::natural_max())
    }

    /// Bounds for `field`: overrides from its descriptor, natural otherwise
    pub fn resolve(field: &FieldContext<'_>) -> Result<Self, BindError> {
        let descriptor = field.descriptor;
        Ok(Self {
            min: resolve_bound(BoundTag::Min, descriptor.min.as_deref(), T::natural_min(), field)?,
            max: resolve_bound(BoundTag::Max, descriptor.max.as_deref(), T::natural_max(), field)?,
        })
    }

    /// Ensure `value` lies within the bounds (inclusive)
    pub fn check(&self, value: T, field_name: &str) -> Result<T, BindError> {
        if value < self.min {
            return Err(BindError::BelowMinimum {
                field: field_name.to_string(),
                min: self.min.render(),
            });
        }
        if value > self.max {
            return Err(BindError::AboveMaximum {
                field: field_name.to_string(),
                max: self.max.render(),
            });
        }
        Ok(value)
    }

    pub fn contains(&self, value: T) -> bool {
        !(value < self.min || value > self.max)
    }
}

fn resolve_bound<T: Bounded>(
    tag: BoundTag,
    raw: Option<&str>,
    natural: T,
    field: &FieldContext<'_>,
) -> Result<T, BindError> {
    match raw {
        Some(raw) => T::parse_literal(raw.trim()).map_err(|source| BindError::InvalidBoundTag {
            tag,
            field: field.name.to_string(),
            source,
        }),
        None => Ok(natural),
    }
}
