use std::hash::{BuildHasher, Hash};

/// Equality and hashing as an explicit capability.
///
/// The hash contract is the usual one: items that compare equal must hash to
/// the same value. A comparer is cloned into every cursor that needs one, so
/// a clone must keep hashing consistently with its original.
pub trait Comparer<T> {
    /// Whether two items count as the same.
    fn equals(&self, a: &T, b: &T) -> bool;

    /// A hash code for an item, consistent with
    /// [`equals`](Comparer::equals).
    fn hash(&self, value: &T) -> u64;
}

/// The natural equality of a type: `==` plus the type's own `Hash`.
#[derive(Debug, Clone)]
pub struct Natural {
    state: ahash::RandomState,
}

impl Natural {
    pub fn new() -> Self {
        Natural {
            state: ahash::RandomState::new(),
        }
    }
}

impl Default for Natural {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Comparer<T> for Natural
where
    T: Hash + Eq,
{
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }

    #[inline]
    fn hash(&self, value: &T) -> u64 {
        self.state.hash_one(value)
    }
}

/// Compares string items ignoring ASCII case.
#[derive(Debug, Clone)]
pub struct AsciiCaseInsensitive {
    state: ahash::RandomState,
}

impl AsciiCaseInsensitive {
    pub fn new() -> Self {
        AsciiCaseInsensitive {
            state: ahash::RandomState::new(),
        }
    }
}

impl Default for AsciiCaseInsensitive {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Comparer<T> for AsciiCaseInsensitive
where
    T: AsRef<str>,
{
    fn equals(&self, a: &T, b: &T) -> bool {
        a.as_ref().eq_ignore_ascii_case(b.as_ref())
    }

    fn hash(&self, value: &T) -> u64 {
        // hash the folded form so equal items collide
        self.state.hash_one(value.as_ref().to_ascii_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_equal_items_hash_alike() {
        let comparer = Natural::new();
        assert!(Comparer::<i64>::equals(&comparer, &42, &42));
        assert_eq!(
            Comparer::<i64>::hash(&comparer, &42),
            Comparer::<i64>::hash(&comparer, &42)
        );
    }

    #[test]
    fn test_natural_clone_hashes_consistently() {
        let comparer = Natural::new();
        let clone = comparer.clone();
        assert_eq!(
            Comparer::<&str>::hash(&comparer, &"value"),
            Comparer::<&str>::hash(&clone, &"value")
        );
    }

    #[test]
    fn test_ascii_case_insensitive() {
        let comparer = AsciiCaseInsensitive::new();
        assert!(comparer.equals(&"Alpha", &"ALPHA"));
        assert!(!comparer.equals(&"Alpha", &"Beta"));
        assert_eq!(comparer.hash(&"Alpha"), comparer.hash(&"alpha"));
    }
}
