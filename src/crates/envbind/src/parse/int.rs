//! Signed and unsigned integers of every width
//!
//! Literals are base 10 with an optional sign. A literal that does not fit
//! the field's width is malformed; a literal that fits but falls outside
//! the effective bounds is reported against the bound.

use crate::error::{BindError, LiteralError};
use crate::parse::{parse_bounded, FieldContext, Scalar};
use crate::shape::{Kind, Width};
use crate::validation::bounds::{signed_range, unsigned_range};
use crate::validation::Bounded;

macro_rules! integer {
    ($( $ty:ty => $kind:ident($width:expr), $range:ident; )*) => {$(
        impl Bounded for $ty {
            fn natural_min() -> Self {
                $range($width).0 as $ty
            }

            fn natural_max() -> Self {
                $range($width).1 as $ty
            }

            fn parse_literal(raw: &str) -> Result<Self, LiteralError> {
                Ok(raw.parse::<$ty>()?)
            }

            fn render(&self) -> String {
                self.to_string()
            }
        }

        impl Scalar for $ty {
            const KIND: Kind = Kind::$kind($width);

            fn parse(raw: &str, field: &FieldContext<'_>) -> Result<Self, BindError> {
                parse_bounded(raw, field)
            }
        }
    )*};
}

integer! {
    i8 => Int(Width::W8), signed_range;
    i16 => Int(Width::W16), signed_range;
    i32 => Int(Width::W32), signed_range;
    i64 => Int(Width::W64), signed_range;
    isize => Int(Width::of_bits(usize::BITS)), signed_range;
    u8 => Uint(Width::W8), unsigned_range;
    u16 => Uint(Width::W16), unsigned_range;
    u32 => Uint(Width::W32), unsigned_range;
    u64 => Uint(Width::W64), unsigned_range;
    usize => Uint(Width::of_bits(usize::BITS)), unsigned_range;
}
