//! Generic in-memory collection of domain objects.

/// Ordered, owned collection with copy-on-read access.
///
/// Items are kept in insertion order. `all()` hands out a clone so callers can
/// never mutate the stored sequence through a read.
#[derive(Debug, Clone, PartialEq)]
pub struct Repository<T> {
    items: Vec<T>,
}

impl<T> Default for Repository<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Repository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Clone> Repository<T> {
    /// Snapshot of every stored item, in insertion order.
    pub fn all(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<T> Extend<T> for Repository<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<T> for Repository<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
