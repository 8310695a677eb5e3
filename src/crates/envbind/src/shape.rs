//! Field shapes
//!
//! Every bindable field is exposed to the binder as a [`Slot`]: a mutable
//! borrow of the field tagged with its shape. The set of slots is closed;
//! [`IntoSlot`] maps each supported Rust type onto its variant, and a few
//! common but unsupported types onto [`Slot::Unsupported`] so they fail
//! with a diagnostic rather than a compile error deep inside a macro.
//!
//! | Rust type | Shape |
//! |-----------|-------|
//! | `bool`, `String` | scalar |
//! | `i8`..`i64`, `isize`, `u8`..`u64`, `usize` | scalar, width from the type |
//! | `f32`, `f64` | scalar |
//! | `chrono::Duration`, `std::time::Duration` | scalar duration (nanoseconds) |
//! | `Option<url::Url>` | optional URL |
//! | `Vec<T>` for any of the above, `Vec<url::Url>` | sequence |

use crate::error::BindError;
use crate::parse::Scalar;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use url::Url;

/// Bit width of a numeric field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    W8,
    W16,
    W32,
    W64,
}

impl Width {
    pub const fn bits(self) -> u32 {
        match self {
            Width::W8 => 8,
            Width::W16 => 16,
            Width::W32 => 32,
            Width::W64 => 64,
        }
    }

    /// Width of a platform-sized integer with `bits` bits
    pub const fn of_bits(bits: u32) -> Width {
        match bits {
            8 => Width::W8,
            16 => Width::W16,
            32 => Width::W32,
            _ => Width::W64,
        }
    }
}

/// Primitive kind of a scalar or sequence element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Bool,
    Text,
    Int(Width),
    Uint(Width),
    Float(Width),
    Duration,
    Url,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Bool => f.write_str("bool"),
            Kind::Text => f.write_str("string"),
            Kind::Int(width) => write!(f, "int{}", width.bits()),
            Kind::Uint(width) => write!(f, "uint{}", width.bits()),
            Kind::Float(width) => write!(f, "float{}", width.bits()),
            Kind::Duration => f.write_str("duration"),
            Kind::Url => f.write_str("url"),
        }
    }
}

/// Declared shape of a field
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Shape {
    Scalar(Kind),
    Sequence(Kind),
    Optional(Kind),
    Unsupported(String),
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Scalar(kind) => write!(f, "{}", kind),
            Shape::Sequence(kind) => write!(f, "sequence<{}>", kind),
            Shape::Optional(kind) => write!(f, "optional<{}>", kind),
            Shape::Unsupported(name) => write!(f, "unsupported<{}>", name),
        }
    }
}

/// A shape no handler is registered for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unsupported {
    Field(String),
    Sequence(String),
    Pointer(String),
}

impl Unsupported {
    pub fn name(&self) -> &str {
        match self {
            Unsupported::Field(name) | Unsupported::Sequence(name) | Unsupported::Pointer(name) => {
                name
            }
        }
    }

    pub fn into_error(self) -> BindError {
        match self {
            Unsupported::Field(kind) => BindError::UnsupportedFieldType { kind },
            Unsupported::Sequence(element) => BindError::UnsupportedSliceType { element },
            Unsupported::Pointer(pointee) => BindError::UnsupportedPointerType { pointee },
        }
    }
}

/// Invoke `$callback!` with the table of scalar slot variants
///
/// Each entry is `Variant(type) / SequenceVariant`. The table drives both
/// the [`Slot`] definition and the dispatcher, so adding a scalar type is a
/// one-line change here plus its [`Scalar`] impl.
macro_rules! for_each_scalar {
    ($callback:ident) => {
        $callback! {
            Bool(bool) / BoolSeq,
            Text(String) / TextSeq,
            I8(i8) / I8Seq,
            I16(i16) / I16Seq,
            I32(i32) / I32Seq,
            I64(i64) / I64Seq,
            Isize(isize) / IsizeSeq,
            U8(u8) / U8Seq,
            U16(u16) / U16Seq,
            U32(u32) / U32Seq,
            U64(u64) / U64Seq,
            Usize(usize) / UsizeSeq,
            F32(f32) / F32Seq,
            F64(f64) / F64Seq,
            Duration(chrono::Duration) / DurationSeq,
            StdDuration(std::time::Duration) / StdDurationSeq,
        }
    };
}

pub(crate) use for_each_scalar;

macro_rules! define_slots {
    ($( $variant:ident($ty:ty) / $seq:ident ),* $(,)?) => {
        /// Mutable borrow of one record field, tagged with its shape
        pub enum Slot<'a> {
            $(
                $variant(&'a mut $ty),
                $seq(&'a mut Vec<$ty>),
            )*
            /// Optional URL; left as `None` when the raw value is empty
            Url(&'a mut Option<Url>),
            UrlSeq(&'a mut Vec<Url>),
            Unsupported(Unsupported),
        }

        impl Slot<'_> {
            pub fn shape(&self) -> Shape {
                match self {
                    $(
                        Slot::$variant(_) => Shape::Scalar(<$ty as Scalar>::KIND),
                        Slot::$seq(_) => Shape::Sequence(<$ty as Scalar>::KIND),
                    )*
                    Slot::Url(_) => Shape::Optional(Kind::Url),
                    Slot::UrlSeq(_) => Shape::Sequence(Kind::Url),
                    Slot::Unsupported(unsupported) => {
                        Shape::Unsupported(unsupported.name().to_string())
                    }
                }
            }
        }

        $(
            impl IntoSlot for $ty {
                fn slot(&mut self) -> Slot<'_> {
                    Slot::$variant(self)
                }
            }

            impl IntoSlot for Vec<$ty> {
                fn slot(&mut self) -> Slot<'_> {
                    Slot::$seq(self)
                }
            }

            impl IntoSlot for Option<$ty> {
                fn slot(&mut self) -> Slot<'_> {
                    Slot::Unsupported(Unsupported::Pointer(<$ty as Scalar>::KIND.to_string()))
                }
            }
        )*
    };
}

for_each_scalar!(define_slots);

impl<'a> Slot<'a> {
    /// Slot for a field type with no registered handler
    pub fn unsupported(kind: impl Into<String>) -> Slot<'a> {
        Slot::Unsupported(Unsupported::Field(kind.into()))
    }
}

impl fmt::Debug for Slot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Slot").field(&self.shape()).finish()
    }
}

/// Types that can be bound as a record field
pub trait IntoSlot {
    fn slot(&mut self) -> Slot<'_>;
}

impl IntoSlot for Option<Url> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Url(self)
    }
}

impl IntoSlot for Vec<Url> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::UrlSeq(self)
    }
}

impl<T> IntoSlot for Vec<Vec<T>> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported(Unsupported::Sequence("sequence".to_string()))
    }
}

impl<T> IntoSlot for Vec<Option<T>> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported(Unsupported::Sequence("optional".to_string()))
    }
}

impl<K, V, S> IntoSlot for HashMap<K, V, S> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::unsupported("map")
    }
}

impl<K, V> IntoSlot for BTreeMap<K, V> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::unsupported("map")
    }
}
