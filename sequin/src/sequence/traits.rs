use std::hash::Hash;

use sequin_compare::{Comparer, Natural};

use crate::error::{Error, Result};
use crate::sequence::adapter::{
    Concat, DefaultIfEmpty, Distinct, Filter, FilterIndexed, FlatMap, FlatMapIndexed,
    FlatMapIndexedWith, FlatMapWith, Map, MapIndexed, Union,
};

/// The core sequence interface: a deferred, restartable source of items.
///
/// A sequence is a recipe, not a collection. It holds no per-enumeration
/// state and performs no traversal until [`cursor`](Sequence::cursor) is
/// called. Every call builds an independent cursor chain, so a sequence
/// whose backing source is restartable can be enumerated any number of
/// times, and interleaved cursors over the same pipeline never interfere.
///
/// A cursor is an owned [`Iterator`] holding at most one upstream cursor
/// plus whatever accumulator its operator needs. Dropping a cursor
/// releases the whole upstream chain, also on early abandonment and
/// unwinding.
pub trait Sequence {
    /// The element type.
    type Item;

    /// The cursor type produced for one enumeration pass.
    type Cursor: Iterator<Item = Self::Item>;

    /// Begin a fresh enumeration pass.
    fn cursor(&self) -> Self::Cursor;
}

/// Operators over any [`Sequence`].
///
/// Combinators consume the receiver and wrap it in a further deferred
/// sequence; nothing is traversed until a cursor is pulled. Terminal
/// queries take `&self`, traverse through a cursor of their own, and drop
/// it before returning. Numeric preconditions fail at construction;
/// everything else fails (or succeeds) during traversal.
pub trait SequenceExt: Sequence {
    /// Keep the items `predicate` accepts.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool + Clone,
    {
        Filter::new(self, predicate)
    }

    /// Keep the items `predicate` accepts; the predicate also receives the
    /// zero-based position of the item in the input, which advances once
    /// per input item whether or not it matches.
    fn filter_indexed<P>(self, predicate: P) -> FilterIndexed<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item, usize) -> bool + Clone,
    {
        FilterIndexed::new(self, predicate)
    }

    /// Transform every item through `selector`. One output per input,
    /// order preserved.
    fn map<F, R>(self, selector: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> R + Clone,
    {
        Map::new(self, selector)
    }

    /// Like [`map`](SequenceExt::map), with the input position passed to
    /// the selector. Same index semantics as
    /// [`filter_indexed`](SequenceExt::filter_indexed).
    fn map_indexed<F, R>(self, selector: F) -> MapIndexed<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item, usize) -> R + Clone,
    {
        MapIndexed::new(self, selector)
    }

    /// Obtain an inner sequence for every item and yield all inner items
    /// in order before moving to the next outer item.
    fn flat_map<F, R>(self, selector: F) -> FlatMap<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> R + Clone,
        R: Sequence,
    {
        FlatMap::new(self, selector)
    }

    /// Like [`flat_map`](SequenceExt::flat_map), with the outer position
    /// passed to the selector, advancing once per outer item.
    fn flat_map_indexed<F, R>(self, selector: F) -> FlatMapIndexed<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item, usize) -> R + Clone,
        R: Sequence,
    {
        FlatMapIndexed::new(self, selector)
    }

    /// Obtain an inner sequence for every item and combine the outer item
    /// with each inner item through `result`.
    fn flat_map_with<F, G, R, T>(self, selector: F, result: G) -> FlatMapWith<Self, F, G>
    where
        Self: Sized,
        F: Fn(&Self::Item) -> R + Clone,
        R: Sequence,
        G: Fn(&Self::Item, R::Item) -> T + Clone,
    {
        FlatMapWith::new(self, selector, result)
    }

    /// Like [`flat_map_with`](SequenceExt::flat_map_with), with a position
    /// passed to the selector. The position advances once per emitted
    /// inner item, inside the inner loop: each outer item observes the
    /// number of items emitted so far, not its own ordinal.
    fn flat_map_indexed_with<F, G, R, T>(
        self,
        selector: F,
        result: G,
    ) -> FlatMapIndexedWith<Self, F, G>
    where
        Self: Sized,
        F: Fn(&Self::Item, usize) -> R + Clone,
        R: Sequence,
        G: Fn(&Self::Item, R::Item) -> T + Clone,
    {
        FlatMapIndexedWith::new(self, selector, result)
    }

    /// All items of `self`, then all items of `other`. The first cursor is
    /// released the moment it is exhausted, before the second is pulled;
    /// nothing is buffered.
    fn concat<S>(self, other: S) -> Concat<Self, S>
    where
        Self: Sized,
        S: Sequence<Item = Self::Item>,
    {
        Concat::new(self, other)
    }

    /// Pass items through unchanged; an empty source yields exactly one
    /// default item instead. Decided lazily, on the first advance.
    fn default_if_empty(self) -> DefaultIfEmpty<Self>
    where
        Self: Sized,
        Self::Item: Default + Clone,
    {
        DefaultIfEmpty::new(self, Default::default())
    }

    /// [`default_if_empty`](SequenceExt::default_if_empty) with an
    /// explicit fallback item.
    fn default_if_empty_with(self, fallback: Self::Item) -> DefaultIfEmpty<Self>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        DefaultIfEmpty::new(self, fallback)
    }

    /// Suppress duplicates under the item's natural equality, yielding
    /// first occurrences in their original order.
    fn distinct(self) -> Distinct<Self, Natural>
    where
        Self: Sized,
        Self::Item: Hash + Eq + Clone,
    {
        Distinct::new(self, Natural::new())
    }

    /// [`distinct`](SequenceExt::distinct) under a caller-supplied
    /// [`Comparer`].
    fn distinct_with<C>(self, comparer: C) -> Distinct<Self, C>
    where
        Self: Sized,
        Self::Item: Clone,
        C: Comparer<Self::Item> + Clone,
    {
        Distinct::new(self, comparer)
    }

    /// Set union with `other`: each first occurrence from `self`, then
    /// each item of `other` not already seen from either side, in
    /// concatenated first-occurrence order.
    fn union<S>(self, other: S) -> Union<Self, S, Natural>
    where
        Self: Sized,
        S: Sequence<Item = Self::Item>,
        Self::Item: Hash + Eq + Clone,
    {
        Union::new(self, other, Natural::new())
    }

    /// [`union`](SequenceExt::union) under a caller-supplied [`Comparer`].
    fn union_with<S, C>(self, other: S, comparer: C) -> Union<Self, S, C>
    where
        Self: Sized,
        S: Sequence<Item = Self::Item>,
        Self::Item: Clone,
        C: Comparer<Self::Item> + Clone,
    {
        Union::new(self, other, comparer)
    }

    /// Number of items, counted with a checked 32-bit increment. Walks the
    /// whole sequence; overflow is an error, never a silent wrap.
    fn count(&self) -> Result<i32> {
        let mut n: i32 = 0;
        for _ in self.cursor() {
            n = n.checked_add(1).ok_or(Error::CountOverflow)?;
        }
        Ok(n)
    }

    /// Number of items `predicate` accepts, with the same checked
    /// increment as [`count`](SequenceExt::count).
    fn count_where<P>(&self, predicate: P) -> Result<i32>
    where
        P: Fn(&Self::Item) -> bool,
    {
        let mut n: i32 = 0;
        for item in self.cursor() {
            if predicate(&item) {
                n = n.checked_add(1).ok_or(Error::CountOverflow)?;
            }
        }
        Ok(n)
    }

    /// [`count`](SequenceExt::count) with a 64-bit counter.
    fn long_count(&self) -> Result<i64> {
        let mut n: i64 = 0;
        for _ in self.cursor() {
            n = n.checked_add(1).ok_or(Error::CountOverflow)?;
        }
        Ok(n)
    }

    /// [`count_where`](SequenceExt::count_where) with a 64-bit counter.
    fn long_count_where<P>(&self, predicate: P) -> Result<i64>
    where
        P: Fn(&Self::Item) -> bool,
    {
        let mut n: i64 = 0;
        for item in self.cursor() {
            if predicate(&item) {
                n = n.checked_add(1).ok_or(Error::CountOverflow)?;
            }
        }
        Ok(n)
    }

    /// Whether the sequence has at least one item. Pulls at most one item
    /// and drops the cursor immediately.
    fn any(&self) -> bool {
        self.cursor().next().is_some()
    }

    /// Whether any item satisfies `predicate`; stops at the first match.
    fn any_where<P>(&self, predicate: P) -> bool
    where
        P: Fn(&Self::Item) -> bool,
    {
        for item in self.cursor() {
            if predicate(&item) {
                return true;
            }
        }
        false
    }

    /// Whether every item satisfies `predicate`; stops at the first
    /// non-match. Vacuously true on an empty sequence.
    fn all<P>(&self, predicate: P) -> bool
    where
        P: Fn(&Self::Item) -> bool,
    {
        for item in self.cursor() {
            if !predicate(&item) {
                return false;
            }
        }
        true
    }

    /// Negation of [`any`](SequenceExt::any).
    fn is_empty(&self) -> bool {
        !self.any()
    }

    /// The first item.
    fn first(&self) -> Result<Self::Item> {
        self.cursor().next().ok_or(Error::EmptySequence)
    }

    /// The first item `predicate` accepts.
    fn first_where<P>(&self, predicate: P) -> Result<Self::Item>
    where
        P: Fn(&Self::Item) -> bool,
    {
        for item in self.cursor() {
            if predicate(&item) {
                return Ok(item);
            }
        }
        Err(Error::NoMatch)
    }

    /// The first item, or the type's default when there is none.
    fn first_or_default(&self) -> Self::Item
    where
        Self::Item: Default,
    {
        self.cursor().next().unwrap_or_default()
    }

    /// The first matching item, or the type's default when none matches.
    fn first_or_default_where<P>(&self, predicate: P) -> Self::Item
    where
        Self::Item: Default,
        P: Fn(&Self::Item) -> bool,
    {
        for item in self.cursor() {
            if predicate(&item) {
                return item;
            }
        }
        Default::default()
    }

    /// The final item. A forward-only cursor cannot know the last item
    /// without walking the whole sequence, so this is O(n) even though it
    /// returns a single element.
    fn last(&self) -> Result<Self::Item> {
        let mut last = None;
        for item in self.cursor() {
            last = Some(item);
        }
        last.ok_or(Error::EmptySequence)
    }

    /// The final item `predicate` accepts; tracks the most recent match
    /// across a full traversal.
    fn last_where<P>(&self, predicate: P) -> Result<Self::Item>
    where
        P: Fn(&Self::Item) -> bool,
    {
        let mut last = None;
        for item in self.cursor() {
            if predicate(&item) {
                last = Some(item);
            }
        }
        last.ok_or(Error::NoMatch)
    }

    /// The final item, or the type's default when there is none.
    fn last_or_default(&self) -> Self::Item
    where
        Self::Item: Default,
    {
        let mut last = None;
        for item in self.cursor() {
            last = Some(item);
        }
        last.unwrap_or_default()
    }

    /// The final matching item, or the type's default when none matches.
    fn last_or_default_where<P>(&self, predicate: P) -> Self::Item
    where
        Self::Item: Default,
        P: Fn(&Self::Item) -> bool,
    {
        let mut last = None;
        for item in self.cursor() {
            if predicate(&item) {
                last = Some(item);
            }
        }
        last.unwrap_or_default()
    }

    /// The only item. The sequence is materialized fully first;
    /// uniqueness cannot be confirmed without inspecting every element.
    fn single(&self) -> Result<Self::Item> {
        let mut items = self.to_vec();
        if items.len() > 1 {
            return Err(Error::MultipleElements);
        }
        items.pop().ok_or(Error::EmptySequence)
    }

    /// The only item `predicate` accepts, after a full traversal.
    fn single_where<P>(&self, predicate: P) -> Result<Self::Item>
    where
        P: Fn(&Self::Item) -> bool,
    {
        let mut matches = Vec::new();
        for item in self.cursor() {
            if predicate(&item) {
                matches.push(item);
            }
        }
        if matches.len() > 1 {
            return Err(Error::MultipleElements);
        }
        matches.pop().ok_or(Error::NoMatch)
    }

    /// The only item, or the type's default when there is none. More than
    /// one item is still an error.
    fn single_or_default(&self) -> Result<Self::Item>
    where
        Self::Item: Default,
    {
        let mut items = self.to_vec();
        if items.len() > 1 {
            return Err(Error::MultipleElements);
        }
        Ok(items.pop().unwrap_or_default())
    }

    /// The only matching item, or the type's default when none matches.
    /// More than one match is still an error.
    fn single_or_default_where<P>(&self, predicate: P) -> Result<Self::Item>
    where
        Self::Item: Default,
        P: Fn(&Self::Item) -> bool,
    {
        let mut matches = Vec::new();
        for item in self.cursor() {
            if predicate(&item) {
                matches.push(item);
            }
        }
        if matches.len() > 1 {
            return Err(Error::MultipleElements);
        }
        Ok(matches.pop().unwrap_or_default())
    }

    /// Seedless left fold: the first item is the initial accumulator, and
    /// `f` folds in the rest, left to right.
    fn reduce<F>(&self, f: F) -> Result<Self::Item>
    where
        F: Fn(Self::Item, Self::Item) -> Self::Item,
    {
        let mut cursor = self.cursor();
        let mut accumulator = cursor.next().ok_or(Error::EmptySequence)?;
        for item in cursor {
            accumulator = f(accumulator, item);
        }
        Ok(accumulator)
    }

    /// Materialize the sequence into a vector.
    fn to_vec(&self) -> Vec<Self::Item> {
        self.cursor().collect()
    }
}

impl<S> SequenceExt for S where S: Sequence {}
