//! Provides the kernels a [BlasDot][blas_dot] can delegate to.
//!
//! Each framework implements the [Dot][dot] trait and is compiled in by the Cargo feature of
//! the same name:
//!
//! * [Native][native] (`native`): a Rust port of the reference BLAS kernel.
//! * [Cblas][cblas] (`blas`): the `cblas_sdot` routine of the linked BLAS library.
//!
//! Both follow the same stride rules, but they are free to accumulate in different orders, so
//! their results can differ in the last bits.
//!
//! [blas_dot]: ../blas_dot/struct.BlasDot.html
//! [dot]: ../backend/trait.Dot.html
//! [native]: ./native/struct.Native.html
//! [cblas]: ./cblas/struct.Cblas.html
#[cfg(feature = "native")]
pub use self::native::Native;
#[cfg(feature = "blas")]
pub use self::cblas::Cblas;

#[cfg(feature = "native")]
pub mod native;
#[cfg(feature = "blas")]
pub mod cblas;
