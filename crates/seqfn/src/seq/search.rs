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


//! # Short-Circuiting Searches
//!
//! `position` and `find_index` locate the first element matching a
//! predicate; `every` checks that all elements match. All three stop at the
//! first element that decides the answer and never call the predicate on
//! later elements.

/// Sentinel returned by [`find_index`] when no element matches.
pub const NOT_FOUND: isize = -1;

/// Returns the index of the first element for which `predicate` holds, or
/// `None` if there is none.
///
/// # Examples
///
/// ```rust
/// # use seqfn::seq::search::position;
///
/// assert_eq!(position(&[5, 8, 13, 8], |&x| x == 8), Some(1));
/// assert_eq!(position(&[5, 13], |&x| x == 8), None);
/// ```
#[inline]
pub fn position<A, P>(items: &[A], mut predicate: P) -> Option<usize>
where
    P: FnMut(&A) -> bool,
{
    for (i, item) in items.iter().enumerate() {
        if predicate(item) {
            return Some(i);
        }
    }
    None
}

/// Returns the index of the first element for which `predicate` holds, or
/// [`NOT_FOUND`] (`-1`) if no element matches or `items` is empty.
///
/// # Panics
///
/// Panics if the matching index does not fit in `isize`. Slices of sized,
/// non-zero-sized elements never reach that length.
///
/// # Examples
///
/// ```rust
/// # use seqfn::seq::search::{find_index, NOT_FOUND};
///
/// assert_eq!(find_index(&["a", "b", "c"], |&s| s == "c"), 2);
/// assert_eq!(find_index(&["a", "b"], |&s| s == "z"), NOT_FOUND);
/// ```
#[inline]
pub fn find_index<A, P>(items: &[A], predicate: P) -> isize
where
    P: FnMut(&A) -> bool,
{
    match position(items, predicate) {
        Some(i) => isize::try_from(i).expect("find_index: matching index exceeds isize::MAX"),
        None => NOT_FOUND,
    }
}

/// Returns `true` if `predicate` holds for every element of `items`.
///
/// An empty slice is vacuously `true`. Evaluation stops at the first element
/// for which the predicate is `false`.
///
/// # Examples
///
/// ```rust
/// # use seqfn::seq::search::every;
///
/// assert!(every(&[2, 4, 6], |x| x % 2 == 0));
/// assert!(!every(&[2, 3, 6], |x| x % 2 == 0));
///
/// let empty: [i32; 0] = [];
/// assert!(every(&empty, |_| false));
/// ```
#[inline]
pub fn every<A, P>(items: &[A], mut predicate: P) -> bool
where
    P: FnMut(&A) -> bool,
{
    for item in items {
        if !predicate(item) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_first_match() {
        assert_eq!(position(&[1, 4, 6, 4], |&x| x > 3), Some(1));
    }

    #[test]
    fn test_position_no_match() {
        assert_eq!(position(&[1, 2, 3], |&x| x > 3), None);
    }

    #[test]
    fn test_find_index_returns_smallest_index() {
        assert_eq!(find_index(&[0, 7, 7, 7], |&x| x == 7), 1);
    }

    #[test]
    fn test_find_index_sentinel_when_absent() {
        assert_eq!(find_index(&[1, 2, 3], |&x| x == 9), NOT_FOUND);
        assert_eq!(NOT_FOUND, -1);
    }

    #[test]
    fn test_find_index_empty_input() {
        let empty: [u32; 0] = [];
        assert_eq!(find_index(&empty, |_| true), -1);
    }

    #[test]
    fn test_find_index_short_circuits() {
        let mut calls = 0;
        let idx = find_index(&[1, 2, 3, 4, 5], |&x| {
            calls += 1;
            x == 2
        });
        assert_eq!(idx, 1);
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_every_all_match() {
        assert!(every(&[2, 4, 6], |&x| x % 2 == 0));
    }

    #[test]
    fn test_every_vacuous_truth() {
        let empty: [i32; 0] = [];
        assert!(every(&empty, |_| false));
    }

    #[test]
    fn test_every_short_circuits_on_first_failure() {
        let mut seen = Vec::new();
        let all = every(&[2, 4, 5, 6, 7], |&x| {
            seen.push(x);
            x % 2 == 0
        });
        assert!(!all);
        assert_eq!(seen, vec![2, 4, 5]);
    }

    #[test]
    fn test_every_agrees_with_find_index_of_negation() {
        let data = [3, 6, 9, 12];
        let divisible_by_three = |x: &i32| x % 3 == 0;
        assert_eq!(
            every(&data, divisible_by_three),
            find_index(&data, |x| !divisible_by_three(x)) == NOT_FOUND
        );
    }
}
