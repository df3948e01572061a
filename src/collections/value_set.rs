//! Small set with a caller-supplied equality predicate.

/// A set whose membership test is a predicate fixed at construction.
///
/// Lookups are linear, which suits the small working sets it holds (grid
/// walls, candidate moves).
#[derive(Debug, Clone)]
pub struct ValueSet<T> {
    items: Vec<T>,
    equals: fn(&T, &T) -> bool,
}

impl<T: PartialEq> Default for ValueSet<T> {
    fn default() -> Self {
        Self::structural()
    }
}

impl<T: PartialEq> ValueSet<T> {
    /// Create an empty set comparing elements with `PartialEq`.
    #[must_use]
    pub fn structural() -> Self {
        Self::new(<T as PartialEq>::eq)
    }
}

impl<T> ValueSet<T> {
    /// Create an empty set using the given equality predicate.
    #[must_use]
    pub fn new(equals: fn(&T, &T) -> bool) -> Self {
        Self {
            items: Vec::new(),
            equals,
        }
    }

    /// Add an item. Returns `false` if an equal item was already present.
    pub fn add(&mut self, item: T) -> bool {
        if self.has(&item) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Check whether an equal item is present.
    #[must_use]
    pub fn has(&self, item: &T) -> bool {
        self.position(item).is_some()
    }

    /// Remove the item equal to `item`. Returns `true` if one was removed.
    pub fn delete(&mut self, item: &T) -> bool {
        match self.position(item) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in insertion order.
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.items
    }

    /// Iterate over items in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    fn position(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|existing| (self.equals)(existing, item))
    }
}
