use std::marker::PhantomData;

use crate::sequence::Sequence;

/// The zero-length sequence.
///
/// A zero-sized value: holding it, copying it, and re-enumerating it
/// allocate nothing.
#[derive(Debug, PartialEq, Eq)]
pub struct Empty<T> {
    marker: PhantomData<T>,
}

/// A sequence with no items of type `T`.
pub fn empty<T>() -> Empty<T> {
    Empty {
        marker: PhantomData,
    }
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        empty()
    }
}

impl<T> Copy for Empty<T> {}

impl<T> Default for Empty<T> {
    fn default() -> Self {
        empty()
    }
}

impl<T> Sequence for Empty<T> {
    type Item = T;
    type Cursor = std::iter::Empty<T>;

    #[inline]
    fn cursor(&self) -> Self::Cursor {
        std::iter::empty()
    }
}
