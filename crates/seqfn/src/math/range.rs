// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.


//! # Integer Ranges
//!
//! Materializes the half-open interval `[start, end)` as a `Vec<T>` for any
//! primitive integer `T`, stepping by one. Requests with `end <= start` are
//! degenerate and yield an empty vector.
//!
//! ## Overflow
//!
//! - Stepping never overflows: the cursor only advances while it is strictly
//!   below `end`, so `end == T::max_value()` is fine.
//! - The length is computed without forming `end - start` when that
//!   difference would overflow `T` (signed spans crossing zero), see
//!   [`range_len`].
//! - A length above `usize::MAX` makes [`try_range`] return
//!   [`RangeError::LengthOverflow`] and [`range`] panic.
//!
//! ```rust
//! use seqfn::math::range::{range, try_range};
//!
//! assert_eq!(range(0, 5), vec![0, 1, 2, 3, 4]);
//! assert_eq!(range(5, 5), Vec::<i32>::new());
//! assert_eq!(range(250u8, u8::MAX), vec![250, 251, 252, 253, 254]);
//! assert!(try_range(i128::MIN, i128::MAX).is_err());
//! ```

use crate::error::RangeError;
use num_traits::PrimInt;

/// Returns the number of elements in `[start, end)`, or `None` if that count
/// exceeds `usize::MAX`. Degenerate ranges (`end <= start`) have length zero.
///
/// # Examples
///
/// ```rust
/// # use seqfn::math::range::range_len;
///
/// assert_eq!(range_len(3, 10), Some(7));
/// assert_eq!(range_len(10, 3), Some(0));
/// assert_eq!(range_len(-100i8, 100i8), Some(200));
/// assert_eq!(range_len(i128::MIN, i128::MAX), None);
/// ```
#[inline]
pub fn range_len<T>(start: T, end: T) -> Option<usize>
where
    T: PrimInt,
{
    if end <= start {
        return Some(0);
    }
    match end.checked_sub(&start) {
        Some(span) => span.to_usize(),
        None => {
            // Only a signed span with start < 0 < end overflows. Split it at zero:
            // [start, 0) has -(start + 1) + 1 elements, [0, end) has `end`.
            let below_zero = (T::zero() - (start + T::one())).to_usize()?;
            end.to_usize()?.checked_add(below_zero)?.checked_add(1)
        }
    }
}

/// Returns `[start, start + 1, ..., end - 1]`, or [`RangeError::LengthOverflow`]
/// if the range has more than `usize::MAX` elements.
///
/// # Examples
///
/// ```rust
/// # use seqfn::math::range::try_range;
/// # use seqfn::RangeError;
///
/// assert_eq!(try_range(-2i64, 2i64), Ok(vec![-2, -1, 0, 1]));
/// assert_eq!(try_range(5, 2), Ok(Vec::<i32>::new()));
/// assert!(matches!(
///     try_range(0u128, u128::MAX),
///     Err(RangeError::LengthOverflow { .. })
/// ));
/// ```
pub fn try_range<T>(start: T, end: T) -> Result<Vec<T>, RangeError>
where
    T: PrimInt + std::fmt::Display,
{
    let Some(len) = range_len(start, end) else {
        tracing::debug!(%start, %end, "rejected range longer than usize::MAX");
        return Err(RangeError::length_overflow(start, end));
    };
    if len == 0 {
        tracing::trace!(%start, %end, "degenerate range");
        return Ok(Vec::new());
    }

    let mut values = Vec::with_capacity(len);
    let mut current = start;
    while current < end {
        values.push(current);
        current = current + T::one();
    }
    debug_assert_eq!(values.len(), len, "range produced an unexpected length");
    Ok(values)
}

/// Returns `[start, start + 1, ..., end - 1]`; empty when `end <= start`.
///
/// # Panics
///
/// Panics if the range has more than `usize::MAX` elements. Use
/// [`try_range`] to handle that case.
///
/// # Examples
///
/// ```rust
/// # use seqfn::math::range::range;
///
/// assert_eq!(range(0, 5), vec![0, 1, 2, 3, 4]);
/// assert_eq!(range(3, 3), Vec::<i32>::new());
/// assert_eq!(range(5, 2), Vec::<i32>::new());
/// assert_eq!(range(-2, 1), vec![-2, -1, 0]);
/// ```
#[inline]
#[track_caller]
pub fn range<T>(start: T, end: T) -> Vec<T>
where
    T: PrimInt + std::fmt::Display,
{
    match try_range(start, end) {
        Ok(values) => values,
        Err(err) => panic!("{err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_counts_up_from_start() {
        assert_eq!(range(0, 5), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_range_empty_when_bounds_equal() {
        assert!(range(5, 5).is_empty());
        assert!(range(3, 3).is_empty());
    }

    #[test]
    fn test_range_empty_when_end_before_start() {
        assert!(range(5, 2).is_empty());
        assert!(range(0u32, 0u32).is_empty());
        assert!(range(i64::MAX, i64::MIN).is_empty());
    }

    #[test]
    fn test_range_negative_bounds() {
        assert_eq!(range(-3, 2), vec![-3, -2, -1, 0, 1]);
    }

    #[test]
    fn test_range_up_to_type_max_does_not_overflow() {
        assert_eq!(range(253u8, u8::MAX), vec![253, 254]);
        assert_eq!(range(i8::MAX - 1, i8::MAX), vec![126]);
    }

    #[test]
    fn test_range_signed_span_wider_than_type() {
        let values = range(-100i8, 100i8);
        assert_eq!(values.len(), 200);
        assert_eq!(values.first(), Some(&-100));
        assert_eq!(values.last(), Some(&99));
    }

    #[test]
    fn test_range_full_i8_domain() {
        let values = range(i8::MIN, i8::MAX);
        assert_eq!(values.len(), 255);
        assert!(values.windows(2).all(|w| w[1] == w[0] + 1));
    }

    #[test]
    fn test_range_len() {
        assert_eq!(range_len(0, 5), Some(5));
        assert_eq!(range_len(5, 0), Some(0));
        assert_eq!(range_len(i16::MIN, i16::MAX), Some(65_535));
        assert_eq!(range_len(i32::MIN, 0), Some(1 << 31));
        assert_eq!(range_len(-1i64, 1i64), Some(2));
        assert_eq!(range_len(u128::MIN, u128::MAX), None);
        assert_eq!(range_len(i128::MIN, i128::MAX), None);
    }

    #[test]
    fn test_try_range_overflow() {
        let err = try_range(i128::MIN, i128::MAX).unwrap_err();
        assert_eq!(err, RangeError::length_overflow(i128::MIN, i128::MAX));
    }

    #[test]
    #[should_panic(expected = "has more than usize::MAX elements")]
    fn test_range_panics_on_overflow() {
        let _ = range(0u128, u128::MAX);
    }
}
