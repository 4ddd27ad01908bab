//! Fixed-capacity record blocks.

use crate::item::ItemBuilder;

/// A block of up to `capacity` records.
///
/// Records fill the chunk from index 0 and are never removed or replaced.
/// Once a chunk is full it is never mutated again, which is what lets
/// snapshots share full chunks by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> Chunk<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Builds a record from `data` into the next free slot.
    ///
    /// Returns false, leaving the chunk untouched, when the builder rejects
    /// the input or the chunk is already full.
    pub(crate) fn push<B>(&mut self, builder: &B, data: &[u8]) -> bool
    where
        B: ItemBuilder<T> + ?Sized,
    {
        if self.is_full() {
            return false;
        }
        match builder.build(data) {
            Some(item) => {
                self.items.push(item);
                true
            }
            None => false,
        }
    }

    /// Returns true if the chunk holds `capacity` records.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// Returns the number of records in the chunk.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the chunk holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the maximum number of records.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the record at `index`, if filled.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Returns the filled records.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Iterates over the filled records.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a Chunk<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
