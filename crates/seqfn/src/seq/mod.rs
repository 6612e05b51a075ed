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


//! # Sequence Operations
//!
//! Eager higher-order functions over borrowed slices. None of them mutate
//! their input; results are new `Vec`s or scalars.
//!
//! ## Submodules
//!
//! - `filter`: keep the elements matching a predicate, in order.
//! - `map`: transform each element, preserving length and index.
//! - `reduce`: strictly left-to-right fold with an initial accumulator.
//! - `search`: `position`/`find_index` (first match, `-1` sentinel) and
//!   `every` (universal quantification). Both short-circuit.
//! - `ext`: `SequenceExt`, the same operations as methods on `[A]`.
//!
//! Closures are `FnMut` and are called exactly once per visited element, in
//! index order. Searches stop at the deciding element, which is observable
//! when the predicate has side effects.

pub mod ext;
pub mod filter;
pub mod map;
pub mod reduce;
pub mod search;
