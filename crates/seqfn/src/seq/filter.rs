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


/// Returns the elements of `items` for which `predicate` returns `true`,
/// cloned into a new vector in their original relative order.
///
/// The predicate is called exactly once per element, front to back.
///
/// # Examples
///
/// ```rust
/// # use seqfn::seq::filter::filter;
///
/// let evens = filter(&[1, 2, 3, 4, 5, 6], |x| x % 2 == 0);
/// assert_eq!(evens, vec![2, 4, 6]);
///
/// let empty: [i32; 0] = [];
/// assert!(filter(&empty, |_| true).is_empty());
/// ```
#[inline]
pub fn filter<A, P>(items: &[A], mut predicate: P) -> Vec<A>
where
    A: Clone,
    P: FnMut(&A) -> bool,
{
    let mut kept = Vec::new();
    for item in items {
        if predicate(item) {
            kept.push(item.clone());
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_even(x: &i32) -> bool {
        x % 2 == 0
    }

    #[test]
    fn test_filter_keeps_matching_in_order() {
        assert_eq!(filter(&[1, 2, 3, 4, 5, 6], is_even), vec![2, 4, 6]);
    }

    #[test]
    fn test_filter_empty_input() {
        let empty: [i32; 0] = [];
        assert!(filter(&empty, is_even).is_empty());
    }

    #[test]
    fn test_filter_nothing_matches() {
        assert!(filter(&[1, 3, 5], is_even).is_empty());
    }

    #[test]
    fn test_filter_does_not_mutate_input() {
        let data = vec![String::from("a"), String::from("bb"), String::from("ccc")];
        let long = filter(&data, |s| s.len() > 1);

        assert_eq!(long, vec!["bb", "ccc"]);
        assert_eq!(data, vec!["a", "bb", "ccc"]);
    }

    #[test]
    fn test_filter_calls_predicate_once_per_element_in_order() {
        let mut seen = Vec::new();
        let _ = filter(&[10, 20, 30], |&x| {
            seen.push(x);
            x > 15
        });
        assert_eq!(seen, vec![10, 20, 30]);
    }

    #[test]
    fn test_filter_keeps_duplicates() {
        assert_eq!(filter(&[2, 2, 1, 2], is_even), vec![2, 2, 2]);
    }
}
