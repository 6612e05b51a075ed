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


//! # seqfn
//!
//! Generic higher-order functions over sequences. Every operation borrows its
//! input immutably, evaluates eagerly, and returns a freshly allocated result
//! or a scalar.
//!
//! ## Modules
//!
//! - `seq`: `filter`, `map`, `reduce`, `find_index`/`position` and `every`
//!   over slices, plus the `SequenceExt` trait for method-call syntax.
//! - `math`: half-open integer ranges `[start, end)` generic over every
//!   primitive integer type, with a fallible `try_range` counterpart.
//! - `error`: `RangeError`, the single failure mode in the crate.
//!
//! ## Usage
//!
//! ```rust
//! use seqfn::{every, filter, find_index, map, range, reduce};
//!
//! let xs = range(1, 7);
//! assert_eq!(filter(&xs, |x| x % 2 == 0), vec![2, 4, 6]);
//! assert_eq!(map(&xs[..3], |x| x * 2), vec![2, 4, 6]);
//! assert_eq!(reduce(&xs[..4], |acc, x| acc + x, 0), 10);
//! assert_eq!(find_index(&xs, |&x| x > 3), 3);
//! assert!(every(&xs, |&x| x > 0));
//! ```

pub mod error;
pub mod math;
pub mod seq;

pub use error::RangeError;
pub use math::range::{range, range_len, try_range};
pub use seq::ext::SequenceExt;
pub use seq::filter::filter;
pub use seq::map::map;
pub use seq::reduce::reduce;
pub use seq::search::{NOT_FOUND, every, find_index, position};
