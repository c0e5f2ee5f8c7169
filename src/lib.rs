//! reduce-blas sums a range of `f32` values by handing it to a BLAS dot-product kernel.
//!
//! BLAS has no "sum" routine, but every Level 1 routine takes a stride for each of its
//! operands. Setting the stride of the second operand of `sdot` to **zero** makes the kernel
//! read the same element over and over, so a single `1.0` turns into a vector of ones as long
//! as the first operand:
//!
//! ```text
//! sdot(n, x, 1, [1.0], 0) = x[0] * 1.0 + x[1] * 1.0 + ... + x[n - 1] * 1.0
//! ```
//!
//! ## Architecture
//!
//! The [BlasDot][blas_dot] summer captures a half-open range `[begin, end)` once and checks at
//! construction time that its length fits into the index type of the kernel. A summer that
//! exists is always valid; [sum][sum] performs no further checks and can be called as often as
//! needed.
//!
//! The kernel itself lives behind the [Dot][dot] trait. Two implementations ship with the
//! crate and are selected with Cargo features:
//!
//! * __native__ (default):</br>
//! A Rust port of the reference BLAS `sdot` loop. Needs nothing from the host.
//! * __blas__:</br>
//! Binds `cblas_sdot` from a vendor library. `build.rs` links `Accelerate` on macOS and
//! `openblas` elsewhere; set `REDUCE_BLAS_LIB` (and optionally `REDUCE_BLAS_LIB_DIR`) to link
//! another library.
//!
//! Enable __ilp64__ when the BLAS library was built with 64-bit indices.
//!
//! Ranges longer than the index type allows are rejected with a
//! [RangeTooLargeError][error]. The [chunks][chunks] module splits such ranges for you.
//!
//! ## Examples
//!
//! ```
//! # extern crate reduce_blas;
//! # use reduce_blas::BlasDot;
//! # fn main() {
//! let data = [1.0f32, 2.0, 3.0, 4.0];
//! let summer = BlasDot::new(&data).unwrap();
//! assert_eq!(summer.sum(), 10.0);
//! # }
//! ```
//!
//! [blas_dot]: ./blas_dot/struct.BlasDot.html
//! [sum]: ./blas_dot/struct.BlasDot.html#method.sum
//! [dot]: ./backend/trait.Dot.html
//! [error]: ./error/struct.RangeTooLargeError.html
//! [chunks]: ./chunks/index.html
#![deny(missing_docs,
        missing_debug_implementations, missing_copy_implementations,
        trivial_casts, trivial_numeric_casts,
        unsafe_code,
        unused_import_braces, unused_qualifications)]

#[cfg(not(any(feature = "native", feature = "blas")))]
compile_error!("enable at least one of the `native` or `blas` features");

#[macro_use]
extern crate log;
extern crate num;

pub mod backend;
pub mod blas_dot;
pub mod chunks;
pub mod error;
pub mod frameworks;

pub use backend::{max_length, BlasInt, DefaultBackend, Dot};
pub use blas_dot::BlasDot;
pub use chunks::{sum_all, sum_in_chunks};
pub use error::RangeTooLargeError;
