//! Index width abstraction
//!
//! The same kernels serve a narrow (`i32`) and a wide (`i64`) index type; the
//! caller picks the width by choosing the instantiation.

use crate::error::{Result, SparseError};
use std::fmt::Debug;
use std::ops::{Add, AddAssign};

/// Integer type usable for `indptr` and `indices`.
pub trait SpIndex:
    Copy + Ord + Default + Debug + Send + Sync + Add<Output = Self> + AddAssign + 'static
{
    const ZERO: Self;
    const ONE: Self;
    const BITS: u32;

    /// Convert to `usize`. Negative values are a caller bug; checked in debug builds only.
    fn index(self) -> usize;

    fn try_index(self) -> Option<usize>;

    /// Convert from `usize`. Values that do not fit are a caller bug; checked in debug builds only.
    fn from_usize(x: usize) -> Self;

    fn try_from_usize(x: usize) -> Option<Self>;

    fn to_i64(self) -> i64;

    #[inline]
    fn checked_from_usize(x: usize) -> Result<Self> {
        Self::try_from_usize(x).ok_or(SparseError::IndexOverflow {
            value: x,
            width: Self::BITS,
        })
    }
}

macro_rules! impl_sp_index {
    ($($t:ty),*) => {$(
        impl SpIndex for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const BITS: u32 = <$t>::BITS;

            #[inline]
            fn index(self) -> usize {
                debug_assert!(self >= 0, "index must be non-negative");
                #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
                {
                    self as usize
                }
            }

            #[inline]
            fn try_index(self) -> Option<usize> {
                usize::try_from(self).ok()
            }

            #[inline]
            fn from_usize(x: usize) -> Self {
                debug_assert!(<$t>::try_from(x).is_ok(), "value must fit the index type");
                #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
                {
                    x as $t
                }
            }

            #[inline]
            fn try_from_usize(x: usize) -> Option<Self> {
                <$t>::try_from(x).ok()
            }

            #[inline]
            fn to_i64(self) -> i64 {
                i64::from(self)
            }
        }
    )*};
}

impl_sp_index!(i32, i64);
