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


//! # Method Syntax
//!
//! `SequenceExt` exposes the sequence operations as methods on `[A]`, so
//! they chain naturally on slices, arrays and `Vec`s through auto-deref.
//!
//! ```rust
//! use seqfn::SequenceExt;
//!
//! let words = vec!["apple", "kiwi", "banana", "fig"];
//! let long = words.filtered(|w| w.len() > 3);
//! assert_eq!(long.mapped(|w| w.len()), vec![5, 4, 6]);
//! assert_eq!(words.find_index(|&w| w == "fig"), 3);
//! ```

use crate::seq::{filter, map, reduce, search};

/// Sequence operations as methods on slices.
///
/// Every method delegates to the free function of the same meaning and has
/// identical semantics, including evaluation order and short-circuiting.
pub trait SequenceExt<A> {
    /// See [`filter::filter`].
    fn filtered<P>(&self, predicate: P) -> Vec<A>
    where
        A: Clone,
        P: FnMut(&A) -> bool;

    /// See [`map::map`].
    fn mapped<B, F>(&self, f: F) -> Vec<B>
    where
        F: FnMut(&A) -> B;

    /// See [`reduce::reduce`].
    fn reduced<B, F>(&self, f: F, start: B) -> B
    where
        F: FnMut(B, &A) -> B;

    /// See [`search::find_index`].
    fn find_index<P>(&self, predicate: P) -> isize
    where
        P: FnMut(&A) -> bool;

    /// See [`search::position`].
    fn position_of<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&A) -> bool;

    /// See [`search::every`].
    fn every<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&A) -> bool;
}

impl<A> SequenceExt<A> for [A] {
    #[inline]
    fn filtered<P>(&self, predicate: P) -> Vec<A>
    where
        A: Clone,
        P: FnMut(&A) -> bool,
    {
        filter::filter(self, predicate)
    }

    #[inline]
    fn mapped<B, F>(&self, f: F) -> Vec<B>
    where
        F: FnMut(&A) -> B,
    {
        map::map(self, f)
    }

    #[inline]
    fn reduced<B, F>(&self, f: F, start: B) -> B
    where
        F: FnMut(B, &A) -> B,
    {
        reduce::reduce(self, f, start)
    }

    #[inline]
    fn find_index<P>(&self, predicate: P) -> isize
    where
        P: FnMut(&A) -> bool,
    {
        search::find_index(self, predicate)
    }

    #[inline]
    fn position_of<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&A) -> bool,
    {
        search::position(self, predicate)
    }

    #[inline]
    fn every<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        search::every(self, predicate)
    }
}
