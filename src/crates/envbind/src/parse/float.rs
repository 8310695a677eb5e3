use crate::error::{BindError, LiteralError};
use crate::parse::{parse_bounded, FieldContext, Scalar};
use crate::shape::{Kind, Width};
use crate::validation::bounds::float_range;
use crate::validation::Bounded;

/// `inf` or `infinity` in any case, optionally signed
fn is_infinity_literal(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(&['+', '-'][..]).unwrap_or(raw);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

macro_rules! float {
    ($( $ty:ty => $width:expr; )*) => {$(
        impl Bounded for $ty {
            fn natural_min() -> Self {
                float_range($width).0 as $ty
            }

            fn natural_max() -> Self {
                float_range($width).1 as $ty
            }

            fn parse_literal(raw: &str) -> Result<Self, LiteralError> {
                let value = raw.parse::<$ty>()?;
                if value.is_infinite() && !is_infinity_literal(raw) {
                    return Err(LiteralError::OutOfRange);
                }
                Ok(value)
            }

            fn render(&self) -> String {
                self.to_string()
            }
        }

        impl Scalar for $ty {
            const KIND: Kind = Kind::Float($width);

            fn parse(raw: &str, field: &FieldContext<'_>) -> Result<Self, BindError> {
                parse_bounded(raw, field)
            }
        }
    )*};
}

float! {
    f32 => Width::W32;
    f64 => Width::W64;
}
