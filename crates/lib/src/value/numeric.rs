//! Lossless numeric coercion between the numeric node kinds.
//!
//! A stored number is converted to the requested type with an `as` cast, then
//! cast back to its original type. The conversion is accepted only when that
//! round trip reproduces the original value and the converted value denotes
//! the same number. The second check catches saturating casts, for example
//! `i64::MAX` as `f64` rounds up to 2^63 and saturates back to `i64::MAX`.
//!
//! NaN never survives a cross-type conversion.

use std::fmt;

use crate::node::{Node, NodeError, NodeKind};

mod private {
    /// Widest lossless carrier for any supported primitive.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub enum Wide {
        Int(i128),
        Float(f64),
    }

    pub trait Sealed: Sized {
        fn widen(self) -> Wide;

        /// Converts with `as` semantics: wrapping for integers, rounding and
        /// saturation for floats.
        fn narrow(wide: Wide) -> Self;
    }
}

use private::{Sealed, Wide};

/// A primitive that numeric nodes can be coerced into.
///
/// Implemented for every integer and float primitive. The trait is sealed.
pub trait Numeric:
    Sealed + Copy + Default + PartialEq + fmt::Debug + Into<Node> + for<'n> TryFrom<&'n Node, Error = NodeError>
{
    /// The node kind holding this primitive unchanged.
    const KIND: NodeKind;
}

macro_rules! numeric {
    ($($ty:ty => $kind:ident, $carrier:ident);* $(;)?) => {
        $(
            impl Sealed for $ty {
                fn widen(self) -> Wide {
                    Wide::$carrier(self.into_carrier())
                }

                fn narrow(wide: Wide) -> Self {
                    match wide {
                        Wide::Int(v) => v as $ty,
                        Wide::Float(v) => v as $ty,
                    }
                }
            }

            impl Numeric for $ty {
                const KIND: NodeKind = NodeKind::$kind;
            }
        )*
    };
}

/// Infallible widening into the carrier payloads.
trait IntoCarrier<T> {
    fn into_carrier(self) -> T;
}

macro_rules! carrier {
    ($target:ty: $($ty:ty),*) => {
        $(
            impl IntoCarrier<$target> for $ty {
                fn into_carrier(self) -> $target {
                    self as $target
                }
            }
        )*
    };
}

carrier!(i128: i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
carrier!(f64: f32, f64);

numeric! {
    i8 => I8, Int;
    i16 => I16, Int;
    i32 => I32, Int;
    i64 => I64, Int;
    isize => Isize, Int;
    u8 => U8, Int;
    u16 => U16, Int;
    u32 => U32, Int;
    u64 => U64, Int;
    usize => Usize, Int;
    f32 => F32, Float;
    f64 => F64, Float;
}

/// Casts `wide` into `S` and back, modelling a round trip through `S`.
fn recast<S: Numeric>(wide: Wide) -> Wide {
    S::narrow(wide).widen()
}

/// Splits a numeric node into its widened value and the round trip through
/// its own type.
fn numeric_parts(node: &Node) -> Option<(Wide, fn(Wide) -> Wide)> {
    let parts: (Wide, fn(Wide) -> Wide) = match *node {
        Node::I8(v) => (v.widen(), recast::<i8>),
        Node::I16(v) => (v.widen(), recast::<i16>),
        Node::I32(v) => (v.widen(), recast::<i32>),
        Node::I64(v) => (v.widen(), recast::<i64>),
        Node::Isize(v) => (v.widen(), recast::<isize>),
        Node::U8(v) => (v.widen(), recast::<u8>),
        Node::U16(v) => (v.widen(), recast::<u16>),
        Node::U32(v) => (v.widen(), recast::<u32>),
        Node::U64(v) => (v.widen(), recast::<u64>),
        Node::Usize(v) => (v.widen(), recast::<usize>),
        Node::F32(v) => (v.widen(), recast::<f32>),
        Node::F64(v) => (v.widen(), recast::<f64>),
        _ => return None,
    };
    Some(parts)
}

/// Whether two carriers denote the same number.
fn same_number(a: Wide, b: Wide) -> bool {
    // Every i128 the carriers hold comes from a 64-bit primitive
    const LIMIT: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

    match (a, b) {
        (Wide::Int(x), Wide::Int(y)) => x == y,
        (Wide::Float(x), Wide::Float(y)) => x == y,
        (Wide::Int(i), Wide::Float(f)) | (Wide::Float(f), Wide::Int(i)) => {
            f.is_finite() && f.fract() == 0.0 && f.abs() < LIMIT && f as i128 == i
        }
    }
}

/// Converts a numeric node into `T` if no information is lost.
///
/// A node already holding a `T` is returned unchanged. Any other numeric kind
/// goes through the round-trip check described in the module docs.
///
/// ```
/// use pathwise::{Node, value::numeric::coerce};
///
/// assert_eq!(coerce::<u8>(&Node::I64(200)), Ok(200));
/// assert_eq!(coerce::<f32>(&Node::F64(0.5)), Ok(0.5));
/// assert!(coerce::<i8>(&Node::I64(1_111_111_111_111_111_111)).is_err());
/// assert!(coerce::<i32>(&Node::F64(2.5)).is_err());
/// ```
///
/// # Errors
/// [`NodeError::TypeMismatch`] when the node is not a number and
/// [`NodeError::LossyConversion`] when the round trip fails.
pub fn coerce<T: Numeric>(node: &Node) -> Result<T, NodeError> {
    if let Ok(exact) = T::try_from(node) {
        return Ok(exact);
    }

    let Some((original, round_trip)) = numeric_parts(node) else {
        return Err(NodeError::TypeMismatch {
            expected: T::KIND,
            actual: node.kind(),
        });
    };

    let converted = T::narrow(original);
    let widened = converted.widen();
    if round_trip(widened) == original && same_number(widened, original) {
        Ok(converted)
    } else {
        tracing::trace!(from = %node.kind(), to = %T::KIND, "rejecting lossy numeric conversion");
        Err(NodeError::LossyConversion {
            expected: T::KIND,
            actual: node.kind(),
        })
    }
}
