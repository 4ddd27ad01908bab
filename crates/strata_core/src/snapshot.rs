//! Point-in-time views of a chunk list.

use crate::chunk::Chunk;
use std::sync::Arc;

/// Returns the number of records in a chunk sequence.
///
/// Every chunk but the last is assumed full, so this is
/// `capacity × (n − 1) + last.len()`, or 0 for an empty sequence.
#[must_use]
pub fn count_items<T>(chunks: &[Arc<Chunk<T>>]) -> usize {
    match chunks.last() {
        None => 0,
        Some(last) => last.capacity() * (chunks.len() - 1) + last.len(),
    }
}

/// An immutable view of every record a chunk list held at one instant.
///
/// Full chunks are shared with the list and with other snapshots; the last
/// chunk is a private copy. Later pushes, clears and mode changes on the
/// list never show through.
#[derive(Debug)]
pub struct Snapshot<T> {
    chunks: Vec<Arc<Chunk<T>>>,
    count: usize,
}

impl<T> Snapshot<T> {
    pub(crate) fn new(chunks: Vec<Arc<Chunk<T>>>) -> Self {
        let count = count_items(&chunks);
        Self { chunks, count }
    }

    /// Returns the chunks in push order.
    #[must_use]
    pub fn chunks(&self) -> &[Arc<Chunk<T>>] {
        &self.chunks
    }

    /// Returns the total number of records.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns true if the snapshot holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the record at `index` in push order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        let capacity = self.chunks.first()?.capacity();
        self.chunks.get(index / capacity)?.get(index % capacity)
    }

    /// Iterates over the records in push order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.chunks.iter().flat_map(|chunk| chunk.iter())
    }

    /// Splits the snapshot into its chunks and record count.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Arc<Chunk<T>>>, usize) {
        (self.chunks, self.count)
    }
}

impl<T> Clone for Snapshot<T> {
    fn clone(&self) -> Self {
        Self {
            chunks: self.chunks.clone(),
            count: self.count,
        }
    }
}

impl<T: PartialEq> PartialEq for Snapshot<T> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Snapshot<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk_of(capacity: usize, items: &[&str]) -> Arc<Chunk<String>> {
        let verbatim = |data: &[u8]| Some(String::from_utf8_lossy(data).into_owned());
        let mut chunk = Chunk::with_capacity(capacity);
        for item in items {
            chunk.push(&verbatim, item.as_bytes());
        }
        Arc::new(chunk)
    }

    #[test]
    fn count_empty_sequence() {
        let chunks: Vec<Arc<Chunk<String>>> = Vec::new();
        assert_eq!(count_items(&chunks), 0);
    }

    #[test]
    fn count_uses_capacity_for_leading_chunks() {
        let chunks = vec![
            chunk_of(2, &["a", "b"]),
            chunk_of(2, &["c", "d"]),
            chunk_of(2, &["e"]),
        ];
        assert_eq!(count_items(&chunks), 5);
    }

    #[test]
    fn get_and_iter_follow_push_order() {
        let snapshot = Snapshot::new(vec![chunk_of(2, &["a", "b"]), chunk_of(2, &["c"])]);
        assert_eq!(snapshot.count(), 3);
        assert_eq!(snapshot.get(0).map(String::as_str), Some("a"));
        assert_eq!(snapshot.get(2).map(String::as_str), Some("c"));
        assert_eq!(snapshot.get(3), None);

        let all: Vec<&str> = snapshot.iter().map(String::as_str).collect();
        assert_eq!(all, ["a", "b", "c"]);
    }

    #[test]
    fn empty_snapshot() {
        let snapshot: Snapshot<String> = Snapshot::new(Vec::new());
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.get(0), None);
        assert_eq!(snapshot.iter().count(), 0);
    }

    #[test]
    fn equality_is_by_value() {
        let a = Snapshot::new(vec![chunk_of(2, &["a", "b"]), chunk_of(2, &["c"])]);
        let b = Snapshot::new(vec![chunk_of(2, &["a", "b"]), chunk_of(2, &["c"])]);
        assert_eq!(a, b);
        assert!(!Arc::ptr_eq(&a.chunks()[1], &b.chunks()[1]));
    }

    #[test]
    fn clone_shares_chunks() {
        let a = Snapshot::new(vec![chunk_of(2, &["a", "b"])]);
        let b = a.clone();
        assert!(Arc::ptr_eq(&a.chunks()[0], &b.chunks()[0]));
        let (chunks, count) = b.into_parts();
        assert_eq!(chunks.len(), 1);
        assert_eq!(count, 2);
    }
}
