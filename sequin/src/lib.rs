//! Deferred-execution sequence operators.
//!
//! A [`Sequence`] is a recipe for items, not a collection: composing
//! operators performs no traversal, and numeric preconditions are the only
//! work done up front. Traversal happens when a cursor is pulled, either
//! directly through [`Sequence::cursor`] or by a terminal query such as
//! [`SequenceExt::count`].
//!
//! ```
//! use sequin::{range, SequenceExt};
//!
//! let evens = range(1, 10)?.filter(|n| n % 2 == 0);
//! assert_eq!(evens.to_vec(), vec![2, 4, 6, 8, 10]);
//! # Ok::<(), sequin::Error>(())
//! ```

pub mod error;
mod sequence;

pub use error::{Error, Result};
pub use sequence::{
    empty, range, repeat, Concat, ConcatCursor, DefaultIfEmpty, DefaultIfEmptyCursor, Distinct,
    DistinctCursor, Empty, Filter, FilterCursor, FilterIndexed, FilterIndexedCursor, FlatMap,
    FlatMapCursor, FlatMapIndexed, FlatMapIndexedCursor, FlatMapIndexedWith,
    FlatMapIndexedWithCursor, FlatMapWith, FlatMapWithCursor, Items, ItemsCursor, Map, MapCursor,
    MapIndexed, MapIndexedCursor, Range, RangeCursor, Repeat, RepeatCursor, Sequence, SequenceExt,
    Union, UnionCursor,
};

pub use sequin_compare::{AsciiCaseInsensitive, Comparer, Natural, SeenSet};
