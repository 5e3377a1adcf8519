use std::fmt::{Debug, Display};

/// Primitive integer usable by the Euclidean loop
pub trait Integer: Copy + Eq + Debug + Display {
    /// Type holding the absolute value of `Self` without overflow
    type Unsigned: Integer<Unsigned = Self::Unsigned>;

    const ZERO: Self;

    #[inline]
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Remainder truncated toward zero (sign follows `self`).
    ///
    /// `MIN rem -1` yields `0` instead of overflowing. `rhs` must be nonzero.
    fn rem_trunc(self, rhs: Self) -> Self;

    /// Absolute value
    fn magnitude(self) -> Self::Unsigned;
}

macro_rules! impl_signed {
    ($($t: ty => $u: ty),* $(,)?) => {
        $(
            impl Integer for $t {
                type Unsigned = $u;
                const ZERO: Self = 0;

                #[inline]
                fn rem_trunc(self, rhs: Self) -> Self {
                    self.wrapping_rem(rhs)
                }

                #[inline]
                fn magnitude(self) -> $u {
                    self.unsigned_abs()
                }
            }
        )*
    };
}

macro_rules! impl_unsigned {
    ($($t: ty),* $(,)?) => {
        $(
            impl Integer for $t {
                type Unsigned = $t;
                const ZERO: Self = 0;

                #[inline]
                fn rem_trunc(self, rhs: Self) -> Self {
                    self % rhs
                }

                #[inline]
                fn magnitude(self) -> $t {
                    self
                }
            }
        )*
    };
}

impl_signed! {
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize,
}

impl_unsigned!(u8, u16, u32, u64, u128, usize);
