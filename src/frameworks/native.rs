//! Provides a host-CPU `sdot` written in Rust.
//!
//! The loop structure follows the reference BLAS implementation: contiguous operands are
//! processed five elements per iteration after a scalar prologue, everything else walks both
//! operands by their strides one element at a time.
#![allow(unsafe_code)]

use std::slice;
use backend::{BlasInt, Dot};

/// Number of products accumulated per iteration of the contiguous loop.
const UNROLL: usize = 5;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Native host-CPU backend.
pub struct Native;

impl Dot for Native {
    unsafe fn sdot(&self, n: BlasInt, x: *const f32, incx: BlasInt, y: *const f32, incy: BlasInt) -> f32 {
        if n <= 0 {
            return 0f32;
        }
        if incx == 1 && incy == 1 {
            let len = n as usize;
            return contiguous_dot(slice::from_raw_parts(x, len), slice::from_raw_parts(y, len));
        }

        let n = n as isize;
        let (incx, incy) = (incx as isize, incy as isize);
        let mut ix = start_offset(n, incx);
        let mut iy = start_offset(n, incy);
        let mut acc = 0f32;
        for _ in 0..n {
            acc += *x.offset(ix) * *y.offset(iy);
            ix += incx;
            iy += incy;
        }
        acc
    }
}

/// Index of the first element visited for a stride of `inc`.
///
/// Negative strides start at the far end so that `n` steps land back on index `0`.
fn start_offset(n: isize, inc: isize) -> isize {
    if inc < 0 { (1 - n) * inc } else { 0 }
}

fn contiguous_dot(x: &[f32], y: &[f32]) -> f32 {
    let head = x.len() % UNROLL;
    let mut acc = 0f32;
    for (a, b) in x[..head].iter().zip(&y[..head]) {
        acc += a * b;
    }
    for (a, b) in x[head..].chunks(UNROLL).zip(y[head..].chunks(UNROLL)) {
        acc = acc + a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3] + a[4] * b[4];
    }
    acc
}
