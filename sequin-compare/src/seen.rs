use ahash::HashMap;

use crate::Comparer;

/// Membership set keyed by a [`Comparer`]'s hash and equality.
///
/// Items whose comparer hash collides land in the same bucket and are told
/// apart by `equals`. Memory grows with the number of distinct items
/// inserted.
pub struct SeenSet<T, C> {
    comparer: C,
    buckets: HashMap<u64, Vec<T>>,
}

impl<T, C> SeenSet<T, C>
where
    C: Comparer<T>,
{
    pub fn new(comparer: C) -> Self {
        SeenSet {
            comparer,
            buckets: HashMap::default(),
        }
    }

    /// Insert an item, reporting whether it was new to the set.
    pub fn insert(&mut self, value: T) -> bool {
        let comparer = &self.comparer;
        let bucket = self.buckets.entry(comparer.hash(&value)).or_default();
        if bucket.iter().any(|seen| comparer.equals(seen, &value)) {
            return false;
        }
        bucket.push(value);
        true
    }

    /// Whether an equal item has been inserted before.
    pub fn contains(&self, value: &T) -> bool {
        match self.buckets.get(&self.comparer.hash(value)) {
            Some(bucket) => bucket.iter().any(|seen| self.comparer.equals(seen, value)),
            None => false,
        }
    }

    /// Number of distinct items inserted so far.
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
