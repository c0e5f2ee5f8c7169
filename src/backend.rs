//! Provides the seam between the summer and the dot-product kernel.
//!
//! A backend is anything that can evaluate the BLAS Level 1 `sdot` routine with the C calling
//! shape `(n, x, incx, y, incy)`. See [frameworks][frameworks] for the shipped implementations.
//!
//! [frameworks]: ../frameworks/index.html
#![allow(unsafe_code)]

use num::{cast, NumCast};

/// Signed integer type the kernel uses for lengths and strides (`blasint` in `cblas.h`).
#[cfg(not(feature = "ilp64"))]
pub type BlasInt = i32;

/// Signed integer type the kernel uses for lengths and strides (`blasint` in `cblas.h`).
#[cfg(feature = "ilp64")]
pub type BlasInt = i64;

/// The backend used when none is named explicitly.
#[cfg(feature = "blas")]
pub type DefaultBackend = ::frameworks::Cblas;

/// The backend used when none is named explicitly.
#[cfg(not(feature = "blas"))]
pub type DefaultBackend = ::frameworks::Native;

/// Single-precision dot product with explicit strides.
pub trait Dot {
    /// Returns `sum(x[i * incx] * y[i * incy])` for `i` in `0..n`.
    ///
    /// Negative strides walk the operand backwards starting at `(1 - n) * inc`, a stride of
    /// zero reads the same element `n` times. If `n <= 0` no memory is read and `0.0` is
    /// returned.
    ///
    /// The order in which products are accumulated is up to the implementation.
    ///
    /// # Safety
    ///
    /// For `n > 0`, every element addressed by `x`/`incx` and `y`/`incy` must be valid for
    /// reads.
    unsafe fn sdot(&self, n: BlasInt, x: *const f32, incx: BlasInt, y: *const f32, incy: BlasInt) -> f32;
}

impl<'b, D: Dot + ?Sized> Dot for &'b D {
    unsafe fn sdot(&self, n: BlasInt, x: *const f32, incx: BlasInt, y: *const f32, incy: BlasInt) -> f32 {
        (**self).sdot(n, x, incx, y, incy)
    }
}

/// Converts an element count into the kernel index type.
///
/// Returns `None` if the count does not fit.
pub fn to_blas_int(len: usize) -> Option<BlasInt> {
    <BlasInt as NumCast>::from(len)
}

/// Largest number of elements a single kernel call accepts.
///
/// This is `BlasInt::MAX`, saturated to `usize::MAX` on targets where it does not fit.
pub fn max_length() -> usize {
    cast::<BlasInt, usize>(BlasInt::MAX).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(not(feature = "ilp64"))]
    fn max_length_is_i32_max() {
        assert_eq!(2_147_483_647, max_length());
    }

    #[test]
    fn max_length_round_trips() {
        assert_eq!(Some(BlasInt::MAX), to_blas_int(max_length()));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn to_blas_int_rejects_overflow() {
        assert_eq!(None, to_blas_int(usize::MAX));
    }

    #[test]
    fn to_blas_int_accepts_zero() {
        assert_eq!(Some(0), to_blas_int(0));
    }
}
