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


/// Applies `f` to every element of `items` and collects the results.
///
/// The output has the same length as the input and `result[i] == f(&items[i])`.
/// `f` is called exactly once per element, front to back.
///
/// # Examples
///
/// ```rust
/// # use seqfn::seq::map::map;
///
/// assert_eq!(map(&[1, 2, 3], |x| x * 2), vec![2, 4, 6]);
///
/// let lengths = map(&["a", "bb", "ccc"], |s| s.len());
/// assert_eq!(lengths, vec![1, 2, 3]);
/// ```
#[inline]
pub fn map<A, B, F>(items: &[A], mut f: F) -> Vec<B>
where
    F: FnMut(&A) -> B,
{
    let mut mapped = Vec::with_capacity(items.len());
    for item in items {
        mapped.push(f(item));
    }
    mapped
}
