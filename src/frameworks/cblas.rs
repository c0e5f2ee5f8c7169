//! Provides the `cblas_sdot` routine of a system BLAS library.
//!
//! Which library gets linked is decided by `build.rs`. With the `ilp64` feature the binding
//! expects a BLAS built with 64-bit integers.
#![allow(unsafe_code)]

use backend::{BlasInt, Dot};

extern "C" {
    fn cblas_sdot(n: BlasInt, x: *const f32, incx: BlasInt, y: *const f32, incy: BlasInt) -> f32;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Backend calling into the linked CBLAS.
pub struct Cblas;

impl Dot for Cblas {
    unsafe fn sdot(&self, n: BlasInt, x: *const f32, incx: BlasInt, y: *const f32, incy: BlasInt) -> f32 {
        cblas_sdot(n, x, incx, y, incy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_stride_repeats_one_element() {
        let x = [1f32, 2., 3., 4.];
        let ones = [1f32];
        assert_eq!(10f32, unsafe { Cblas.sdot(4, x.as_ptr(), 1, ones.as_ptr(), 0) });
    }

    #[test]
    fn contiguous_operands() {
        let x = [1f32, 2., 3.];
        let y = [4f32, 5., 6.];
        assert_eq!(32f32, unsafe { Cblas.sdot(3, x.as_ptr(), 1, y.as_ptr(), 1) });
    }
}
