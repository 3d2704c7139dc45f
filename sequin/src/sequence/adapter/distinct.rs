use sequin_compare::{Comparer, SeenSet};

use crate::sequence::Sequence;

/// Deferred deduplication: yields each item the first time the comparer
/// sees it, preserving first-occurrence order.
///
/// The seen-set lives in the cursor and grows with the number of distinct
/// items encountered.
#[derive(Clone)]
pub struct Distinct<S, C> {
    source: S,
    comparer: C,
}

impl<S, C> Distinct<S, C> {
    pub(crate) fn new(source: S, comparer: C) -> Self {
        Distinct { source, comparer }
    }
}

impl<S, C> Sequence for Distinct<S, C>
where
    S: Sequence,
    S::Item: Clone,
    C: Comparer<S::Item> + Clone,
{
    type Item = S::Item;
    type Cursor = DistinctCursor<S::Cursor, C>;

    fn cursor(&self) -> Self::Cursor {
        DistinctCursor {
            source: self.source.cursor(),
            seen: SeenSet::new(self.comparer.clone()),
        }
    }
}

pub struct DistinctCursor<Cur, C>
where
    Cur: Iterator,
    C: Comparer<Cur::Item>,
{
    source: Cur,
    seen: SeenSet<Cur::Item, C>,
}

impl<Cur, C> Iterator for DistinctCursor<Cur, C>
where
    Cur: Iterator,
    Cur::Item: Clone,
    C: Comparer<Cur::Item>,
{
    type Item = Cur::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.source.next()?;
            if self.seen.insert(item.clone()) {
                return Some(item);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.source.size_hint();
        (0, upper)
    }
}

/// Deferred set union of two sequences under one comparer.
///
/// One seen-set spans both inputs, so an item of the second sequence
/// already produced by the first is suppressed.
#[derive(Clone)]
pub struct Union<A, B, C> {
    first: A,
    second: B,
    comparer: C,
}

impl<A, B, C> Union<A, B, C> {
    pub(crate) fn new(first: A, second: B, comparer: C) -> Self {
        Union {
            first,
            second,
            comparer,
        }
    }
}

impl<A, B, C> Sequence for Union<A, B, C>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    A::Item: Clone,
    C: Comparer<A::Item> + Clone,
{
    type Item = A::Item;
    type Cursor = UnionCursor<A::Cursor, B::Cursor, C>;

    fn cursor(&self) -> Self::Cursor {
        UnionCursor {
            first: Some(self.first.cursor()),
            second: self.second.cursor(),
            seen: SeenSet::new(self.comparer.clone()),
        }
    }
}

pub struct UnionCursor<C1, C2, C>
where
    C1: Iterator,
    C: Comparer<C1::Item>,
{
    first: Option<C1>,
    second: C2,
    seen: SeenSet<C1::Item, C>,
}

impl<C1, C2, C> Iterator for UnionCursor<C1, C2, C>
where
    C1: Iterator,
    C2: Iterator<Item = C1::Item>,
    C1::Item: Clone,
    C: Comparer<C1::Item>,
{
    type Item = C1::Item;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(first) = &mut self.first {
            match first.next() {
                Some(item) => {
                    if self.seen.insert(item.clone()) {
                        return Some(item);
                    }
                }
                None => self.first = None,
            }
        }
        loop {
            let item = self.second.next()?;
            if self.seen.insert(item.clone()) {
                return Some(item);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, first_upper) = match &self.first {
            Some(first) => first.size_hint(),
            None => (0, Some(0)),
        };
        let (_, second_upper) = self.second.size_hint();
        let upper = match (first_upper, second_upper) {
            (Some(a), Some(b)) => a.checked_add(b),
            _ => None,
        };
        (0, upper)
    }
}
