//! The deferred sequence abstraction.
//!
//! A sequence produces a fresh cursor per enumeration pass; all position
//! state lives in the cursor. The `variant` module holds the concrete
//! backings a sequence can start from, the `adapter` module the lazy
//! operator wrappers that chain on top of them.

mod adapter;
mod traits;
mod variant;

pub use adapter::{
    Concat, ConcatCursor, DefaultIfEmpty, DefaultIfEmptyCursor, Distinct, DistinctCursor, Filter,
    FilterCursor, FilterIndexed, FilterIndexedCursor, FlatMap, FlatMapCursor, FlatMapIndexed,
    FlatMapIndexedCursor, FlatMapIndexedWith, FlatMapIndexedWithCursor, FlatMapWith,
    FlatMapWithCursor, Map, MapCursor, MapIndexed, MapIndexedCursor, Union, UnionCursor,
};
pub use traits::{Sequence, SequenceExt};
pub use variant::{empty, range, repeat, Empty, Items, ItemsCursor, Range, RangeCursor, Repeat, RepeatCursor};
