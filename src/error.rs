//! Provides the error returned when a range cannot be handed to the kernel.
use std::error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// The range holds more elements than the kernel's index type can count.
///
/// Returned when constructing a [BlasDot][1]. The caller decides whether to split the range,
/// e.g. with [sum_in_chunks][2], or to give up.
///
/// [1]: ../blas_dot/struct.BlasDot.html
/// [2]: ../chunks/fn.sum_in_chunks.html
pub struct RangeTooLargeError {
    len: usize,
    max: usize,
}

impl RangeTooLargeError {
    /// Create the error for a range of `len` elements with a limit of `max`.
    pub fn new(len: usize, max: usize) -> RangeTooLargeError {
        RangeTooLargeError { len: len, max: max }
    }

    /// Number of elements in the rejected range.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Largest number of elements the kernel accepts.
    pub fn max(&self) -> usize {
        self.max
    }
}

impl fmt::Display for RangeTooLargeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "range of {} elements exceeds the BLAS index limit of {}", self.len, self.max)?;
        if cfg!(not(feature = "ilp64")) {
            write!(f, "; BLAS not configured for 64-bit sizes")?;
        }
        Ok(())
    }
}

impl error::Error for RangeTooLargeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_len_and_max() {
        let err = RangeTooLargeError::new(10, 7);
        assert_eq!(10, err.len());
        assert_eq!(7, err.max());
    }

    #[test]
    fn display_names_both_sizes() {
        let msg = RangeTooLargeError::new(10, 7).to_string();
        assert!(msg.starts_with("range of 10 elements exceeds the BLAS index limit of 7"));
    }
}
