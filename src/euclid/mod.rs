//! Euclidean greatest common divisor
mod int;

pub use int::Integer;

/// Iterative Euclidean algorithm over truncating remainders.
///
/// The sign of the result follows the remainder sign propagation, so
/// `euclid(-12, 18) == -6` and `euclid(a, 0) == a` for every `a`.
/// `euclid(0, 0)` is `0`.
pub fn euclid<T: Integer>(mut a: T, mut b: T) -> T {
    while !b.is_zero() {
        let c = a.rem_trunc(b);
        a = b;
        b = c;
    }
    a
}

/// Greatest common divisor, always nonnegative.
///
/// Computed over the magnitudes of `a` and `b`, so `gcd(i64::MIN, 0)` is
/// `2^63` rather than an overflow.
pub fn gcd<T: Integer>(a: T, b: T) -> T::Unsigned {
    euclid(a.magnitude(), b.magnitude())
}
