//! Routing a raw string into a field by its shape
//!
//! Scalars are parsed and assigned; a blank raw value assigns the type's
//! empty value (`""` for text, `false` for booleans) or leaves the field
//! untouched. Sequences are only assigned when they produce at least one
//! element, and optional URLs stay `None` when the raw value is blank.

use crate::error::BindError;
use crate::parse::{parse_sequence, FieldContext, Scalar};
use crate::shape::{for_each_scalar, Slot};
use url::Url;

/// Parse `raw` and store it through `slot`
///
/// On failure the field keeps its previous value.
pub fn dispatch(slot: Slot<'_>, raw: &str, field: &FieldContext<'_>) -> Result<(), BindError> {
    macro_rules! route {
        ($( $variant:ident($ty:ty) / $seq:ident ),* $(,)?) => {
            match slot {
                $(
                    Slot::$variant(target) => scalar::<$ty>(target, raw, field),
                    Slot::$seq(target) => sequence::<$ty>(target, raw, field),
                )*
                Slot::Url(target) => optional_url(target, raw, field),
                Slot::UrlSeq(target) => sequence::<Url>(target, raw, field),
                Slot::Unsupported(unsupported) => Err(unsupported.into_error()),
            }
        };
    }

    for_each_scalar!(route)
}

fn scalar<T: Scalar>(target: &mut T, raw: &str, field: &FieldContext<'_>) -> Result<(), BindError> {
    if raw.is_empty() {
        if let Some(value) = T::from_empty() {
            *target = value;
        }
        return Ok(());
    }

    *target = T::parse(raw, field)?;
    Ok(())
}

fn sequence<T: Scalar>(
    target: &mut Vec<T>,
    raw: &str,
    field: &FieldContext<'_>,
) -> Result<(), BindError> {
    let values = parse_sequence::<T>(raw, field)?;
    if !values.is_empty() {
        *target = values;
    }
    Ok(())
}

fn optional_url(
    target: &mut Option<Url>,
    raw: &str,
    field: &FieldContext<'_>,
) -> Result<(), BindError> {
    if raw.is_empty() {
        return Ok(());
    }

    *target = Some(<Url as Scalar>::parse(raw, field)?);
    Ok(())
}
