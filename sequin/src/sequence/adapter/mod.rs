mod concat;
mod default_if_empty;
mod distinct;
mod filter;
mod flatten;
mod map;

pub use concat::{Concat, ConcatCursor};
pub use default_if_empty::{DefaultIfEmpty, DefaultIfEmptyCursor};
pub use distinct::{Distinct, DistinctCursor, Union, UnionCursor};
pub use filter::{Filter, FilterCursor, FilterIndexed, FilterIndexedCursor};
pub use flatten::{
    FlatMap, FlatMapCursor, FlatMapIndexed, FlatMapIndexedCursor, FlatMapIndexedWith,
    FlatMapIndexedWithCursor, FlatMapWith, FlatMapWithCursor,
};
pub use map::{Map, MapCursor, MapIndexed, MapIndexedCursor};
