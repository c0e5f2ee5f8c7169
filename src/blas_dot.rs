//! Provides the [BlasDot][1] summer.
//!
//! A `BlasDot` is built once over a range of `f32` values and can then be asked for the sum of
//! that range any number of times. Construction is the only place where anything is checked:
//! the number of elements has to fit into [BlasInt][2], the index type of the kernel. Ranges that
//! do not fit are rejected with a [RangeTooLargeError][3] and no summer is created.
//!
//! [1]: ./struct.BlasDot.html
//! [2]: ../backend/type.BlasInt.html
//! [3]: ../error/struct.RangeTooLargeError.html
#![allow(unsafe_code)]

use std::marker::PhantomData;
use std::ptr::NonNull;
use backend::{max_length, to_blas_int, BlasInt, DefaultBackend, Dot};
use error::RangeTooLargeError;

#[derive(Debug, Clone, Copy)]
/// Sums a borrowed range of `f32` values with a BLAS dot product.
///
/// The summer does not own the data it points at. When created from a slice the borrow checker
/// keeps the data alive; when created from raw pointers that is up to the caller.
pub struct BlasDot<'a, B: Dot = DefaultBackend> {
    begin: *const f32,
    end: *const f32,
    len: BlasInt,
    backend: B,
    range: PhantomData<&'a [f32]>,
}

// The summer only ever reads through its pointers, exactly like a `&'a [f32]`.
unsafe impl<'a, B: Dot + Send> Send for BlasDot<'a, B> {}
unsafe impl<'a, B: Dot + Sync> Sync for BlasDot<'a, B> {}

impl<'a> BlasDot<'a, DefaultBackend> {
    /// Create a summer over `data` using the [DefaultBackend][1].
    ///
    /// Fails if `data` is longer than [max_length][2].
    ///
    /// [1]: ../backend/type.DefaultBackend.html
    /// [2]: ../backend/fn.max_length.html
    pub fn new(data: &'a [f32]) -> Result<BlasDot<'a, DefaultBackend>, RangeTooLargeError> {
        BlasDot::with_backend(data, DefaultBackend::default())
    }

    /// Create a summer over the half-open range `[begin, end)` using the default backend.
    ///
    /// See [from_raw_parts_with_backend][1].
    ///
    /// # Safety
    ///
    /// Same as [from_raw_parts_with_backend][1].
    ///
    /// [1]: #method.from_raw_parts_with_backend
    pub unsafe fn from_raw_parts(begin: *const f32, end: *const f32) -> Result<BlasDot<'a, DefaultBackend>, RangeTooLargeError> {
        BlasDot::from_raw_parts_with_backend(begin, end, DefaultBackend::default())
    }
}

impl<'a, B: Dot> BlasDot<'a, B> {
    /// Create a summer over `data` that sums with `backend`.
    pub fn with_backend(data: &'a [f32], backend: B) -> Result<BlasDot<'a, B>, RangeTooLargeError> {
        let range = data.as_ptr_range();
        unsafe { BlasDot::from_raw_parts_with_backend(range.start, range.end, backend) }
    }

    /// Create a summer over the half-open range `[begin, end)` that sums with `backend`.
    ///
    /// The length of the range is the distance between the two pointers in elements. Nothing
    /// but that length is checked: if it exceeds [max_length][1] a `RangeTooLargeError` is
    /// returned. A negative distance is reinterpreted as unsigned, so an inverted range
    /// (`end < begin`) turns into a huge length and is rejected the same way on 64-bit
    /// targets.
    ///
    /// # Safety
    ///
    /// `begin` and `end` must point into the same allocation of `f32` values. If a summer is
    /// returned, every element in `[begin, end)` must stay valid for reads and unmodified for
    /// as long as the summer is used. The returned lifetime `'a` is unbounded.
    ///
    /// [1]: ../backend/fn.max_length.html
    pub unsafe fn from_raw_parts_with_backend(begin: *const f32, end: *const f32, backend: B) -> Result<BlasDot<'a, B>, RangeTooLargeError> {
        let count = element_count(begin, end);
        match to_blas_int(count) {
            Some(len) => {
                trace!("BlasDot over {} elements", count);
                Ok(BlasDot {
                    begin: begin,
                    end: end,
                    len: len,
                    backend: backend,
                    range: PhantomData,
                })
            }
            None => {
                debug!("Rejecting range of {} elements (BLAS index limit {})", count, max_length());
                Err(RangeTooLargeError::new(count, max_length()))
            }
        }
    }

    /// Return the sum of all elements in the range.
    ///
    /// The sum is whatever the backend's dot product accumulates, so rounding depends on the
    /// backend and may differ from a left-to-right sum. An empty range sums to `0.0`.
    pub fn sum(&self) -> f32 {
        // With a stride of zero the kernel reads `ones[0]` for every element of the range,
        // so the dot product degenerates into a plain sum.
        let ones = [1f32];
        debug_assert_eq!(self.begin.wrapping_add(self.len()), self.end);
        unsafe { self.backend.sdot(self.len, self.begin, 1, ones.as_ptr(), 0) }
    }

    /// Number of elements in the range.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Returns true if the range holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The backend this summer delegates to.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<'a, B: Dot + Default> Default for BlasDot<'a, B> {
    /// An empty summer; its sum is `0.0`.
    fn default() -> BlasDot<'a, B> {
        let dangling: *const f32 = NonNull::<f32>::dangling().as_ptr();
        BlasDot {
            begin: dangling,
            end: dangling,
            len: 0,
            backend: B::default(),
            range: PhantomData,
        }
    }
}

/// Distance from `begin` to `end` in elements, computed on the raw addresses.
///
/// A negative distance is reinterpreted as unsigned.
fn element_count(begin: *const f32, end: *const f32) -> usize {
    let bytes = (end as isize).wrapping_sub(begin as isize);
    (bytes / size_of::<f32>() as isize) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_count_of_slice() {
        let data = [0f32; 7];
        let range = data.as_ptr_range();
        assert_eq!(7, element_count(range.start, range.end));
        assert_eq!(0, element_count(range.start, range.start));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn element_count_wraps_for_inverted_range() {
        let data = [0f32; 2];
        let range = data.as_ptr_range();
        assert!(element_count(range.end, range.start) > max_length());
    }

    #[test]
    #[cfg(all(target_pointer_width = "64", not(feature = "ilp64")))]
    fn count_above_limit_does_not_fit() {
        let anchor = [0f32];
        let begin = anchor.as_ptr();
        let count = element_count(begin, begin.wrapping_add(max_length() + 1));
        assert_eq!(2_147_483_648, count);
        assert_eq!(None, to_blas_int(count));
    }

    #[test]
    #[cfg(all(target_pointer_width = "64", not(feature = "ilp64")))]
    fn count_at_limit_fits() {
        let anchor = [0f32];
        let begin = anchor.as_ptr();
        let count = element_count(begin, begin.wrapping_add(max_length()));
        assert_eq!(max_length(), count);
        assert_eq!(Some(BlasInt::MAX), to_blas_int(count));
    }

    #[test]
    fn sub_range_keeps_its_end() {
        let data = [1f32, 2., 3., 4., 5.];
        let summer = unsafe { BlasDot::from_raw_parts(data.as_ptr().add(1), data.as_ptr().add(4)) }.unwrap();
        assert_eq!(data.as_ptr().wrapping_add(4), summer.end);
        assert_eq!(9f32, summer.sum());
        assert_eq!(9f32, summer.sum());
    }

    #[test]
    fn default_is_empty() {
        let summer: BlasDot = BlasDot::default();
        assert!(summer.is_empty());
        assert_eq!(0, summer.len());
        assert_eq!(0f32, summer.sum());
    }

    #[test]
    fn len_matches_slice() {
        let data = [1f32, 2., 3.];
        let summer = BlasDot::new(&data).unwrap();
        assert_eq!(3, summer.len());
        assert!(!summer.is_empty());
    }
}
