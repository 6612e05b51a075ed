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


/// Folds `items` from left to right, threading an accumulator through `f`.
///
/// Computes `acc_0 = start` and `acc_i = f(acc_{i-1}, &items[i])`, returning
/// the final accumulator. An empty input returns `start` unchanged. The
/// evaluation order is fixed, so `f` need be neither associative nor
/// commutative.
///
/// # Examples
///
/// ```rust
/// # use seqfn::seq::reduce::reduce;
///
/// assert_eq!(reduce(&[1, 2, 3, 4], |acc, x| acc + x, 0), 10);
///
/// // Subtraction is not associative; left-to-right order gives ((10 - 1) - 2) - 3.
/// assert_eq!(reduce(&[1, 2, 3], |acc, x| acc - x, 10), 4);
/// ```
#[inline]
pub fn reduce<A, B, F>(items: &[A], mut f: F, start: B) -> B
where
    F: FnMut(B, &A) -> B,
{
    let mut acc = start;
    for item in items {
        acc = f(acc, item);
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_sum() {
        assert_eq!(reduce(&[1, 2, 3, 4], |acc, x| acc + x, 0), 10);
    }

    #[test]
    fn test_reduce_empty_returns_start() {
        let empty: [i32; 0] = [];
        assert_eq!(reduce(&empty, |acc, x| acc + x, 42), 42);
    }

    #[test]
    fn test_reduce_is_left_to_right() {
        let out = reduce(&["b", "c", "d"], |acc, s| format!("({acc}{s})"), String::from("a"));
        assert_eq!(out, "(((ab)c)d)");
    }

    #[test]
    fn test_reduce_non_commutative() {
        assert_eq!(reduce(&[1, 2, 3], |acc, x| acc - x, 10), 4);
    }

    #[test]
    fn test_reduce_rebuilds_sequence() {
        let data = vec![7, 8, 9];
        let rebuilt = reduce(
            &data,
            |mut acc: Vec<i32>, &x| {
                acc.push(x);
                acc
            },
            Vec::new(),
        );
        assert_eq!(rebuilt, data);
    }

    #[test]
    fn test_reduce_accumulator_type_differs() {
        let total_len = reduce(&["ab", "cde", ""], |acc: usize, s| acc + s.len(), 0);
        assert_eq!(total_len, 5);
    }
}
