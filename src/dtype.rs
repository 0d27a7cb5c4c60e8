//! Element types a tensor can hold

use std::fmt;
use std::ops::{Add, AddAssign};

/// Runtime tag for an element type
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DType {
    F32,
    F64,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
}

impl DType {
    /// Size of one element in bytes
    pub const fn size_in_bytes(self) -> usize {
        match self {
            Self::I8 | Self::U8 => 1,
            Self::I16 | Self::U16 => 2,
            Self::F32 | Self::I32 | Self::U32 => 4,
            Self::F64 | Self::I64 | Self::U64 => 8,
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
        };
        f.write_str(name)
    }
}

/// Trait for types that can be elements of a [`Tensor4D`](crate::Tensor4D)
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - elements are plain values, copied bit-for-bit
/// - `Add + AddAssign` - the native addition used by broadcasting add
/// - `PartialEq + Debug` - comparisons and diagnostics
///
/// Addition is whatever `T` does natively: exact for integers (with Rust's
/// usual overflow checks in debug builds), IEEE-754 rounding for floats.
pub trait Element:
    Copy + Send + Sync + 'static + Add<Output = Self> + AddAssign + PartialEq + fmt::Debug
{
    /// The corresponding DType for this Rust type
    const DTYPE: DType;
}

macro_rules! impl_element {
    ($($ty:ty => $dtype:ident;)*) => {
        $(
            impl Element for $ty {
                const DTYPE: DType = DType::$dtype;
            }
        )*
    };
}

impl_element! {
    f32 => F32;
    f64 => F64;
    i8 => I8;
    i16 => I16;
    i32 => I32;
    i64 => I64;
    u8 => U8;
    u16 => U16;
    u32 => U32;
    u64 => U64;
}
