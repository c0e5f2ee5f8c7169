//! Provides summation of ranges that are too long for a single kernel call.
//!
//! A [BlasDot][1] refuses ranges longer than [max_length][2]. The functions here split such a
//! range into pieces the kernel accepts, sum every piece with its own `BlasDot` and add up the
//! partial sums in `f32`.
//!
//! [1]: ../blas_dot/struct.BlasDot.html
//! [2]: ../backend/fn.max_length.html
use backend::{max_length, DefaultBackend, Dot};
use blas_dot::BlasDot;

/// Sum `data` in pieces of at most `chunk_len` elements using `backend`.
///
/// `chunk_len` is clamped to `1..=max_length()`, see [max_length][1], so every piece fits
/// into a single kernel call.
///
/// [1]: ../backend/fn.max_length.html
pub fn sum_in_chunks<B: Dot>(data: &[f32], chunk_len: usize, backend: B) -> f32 {
    let chunk_len = chunk_len.max(1).min(max_length());
    debug!("Summing {} elements in {} chunks of up to {}",
           data.len(), data.len().div_ceil(chunk_len), chunk_len);

    let mut total = 0f32;
    for chunk in data.chunks(chunk_len) {
        total += match BlasDot::with_backend(chunk, &backend) {
            Ok(summer) => summer.sum(),
            // chunks are never longer than `max_length`
            Err(_) => unreachable!(),
        };
    }
    total
}

/// Sum `data` of any length with the [DefaultBackend][1].
///
/// Ranges up to [max_length][2] are summed with a single kernel call.
///
/// [1]: ../backend/type.DefaultBackend.html
/// [2]: ../backend/fn.max_length.html
pub fn sum_all(data: &[f32]) -> f32 {
    sum_in_chunks(data, max_length(), DefaultBackend::default())
}
