use crate::sequence::Sequence;

/// Passes the source through; an empty source yields one fallback item.
pub struct DefaultIfEmpty<S>
where
    S: Sequence,
{
    source: S,
    fallback: S::Item,
}

impl<S> DefaultIfEmpty<S>
where
    S: Sequence,
{
    pub(crate) fn new(source: S, fallback: S::Item) -> Self {
        DefaultIfEmpty { source, fallback }
    }
}

impl<S> Clone for DefaultIfEmpty<S>
where
    S: Sequence + Clone,
    S::Item: Clone,
{
    fn clone(&self) -> Self {
        DefaultIfEmpty {
            source: self.source.clone(),
            fallback: self.fallback.clone(),
        }
    }
}

impl<S> Sequence for DefaultIfEmpty<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = S::Item;
    type Cursor = DefaultIfEmptyCursor<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        DefaultIfEmptyCursor {
            source: self.source.cursor(),
            fallback: Some(self.fallback.clone()),
        }
    }
}

/// Cursor that decides between source and fallback on the first advance.
pub struct DefaultIfEmptyCursor<C>
where
    C: Iterator,
{
    source: C,
    fallback: Option<C::Item>,
}

impl<C> Iterator for DefaultIfEmptyCursor<C>
where
    C: Iterator,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self.source.next() {
            Some(item) => {
                // a non-empty source never needs the fallback
                self.fallback = None;
                Some(item)
            }
            None => self.fallback.take(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.source.size_hint();
        if self.fallback.is_some() {
            (lower.max(1), upper.map(|u| u.max(1)))
        } else {
            (lower, upper)
        }
    }
}
