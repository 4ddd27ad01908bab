//! Chunk list statistics.
//!
//! Counters are atomic and can be read while pushes and snapshots are in
//! progress. All values are monotonically increasing.
//!
//! # Usage
//!
//! ```rust
//! use strata_core::{ChunkList, LineBuilder};
//!
//! let list = ChunkList::new(LineBuilder::new());
//! list.push(b"hello");
//! let _ = list.snapshot();
//!
//! let stats = list.stats().snapshot();
//! assert_eq!(stats.pushed, 1);
//! assert_eq!(stats.snapshots, 1);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

/// Ingestion and snapshot counters for one chunk list.
#[derive(Debug, Default)]
pub struct ListStats {
    /// Records accepted by the builder.
    pushed: AtomicU64,
    /// Inputs rejected by the builder.
    rejected: AtomicU64,
    /// Snapshots taken, plain or tokenized.
    snapshots: AtomicU64,
    /// Snapshots served from a token projection.
    tokenized_snapshots: AtomicU64,
    /// Calls to clear.
    clears: AtomicU64,
    /// Records skipped because the tokenizer failed on their text.
    tokenize_errors: AtomicU64,
}

impl ListStats {
    /// Creates a new stats instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_push(&self, accepted: bool) {
        if accepted {
            self.pushed.fetch_add(1, Ordering::Relaxed);
        } else {
            self.rejected.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub(crate) fn record_snapshot(&self, tokenized: bool) {
        self.snapshots.fetch_add(1, Ordering::Relaxed);
        if tokenized {
            self.tokenized_snapshots.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub(crate) fn record_clear(&self) {
        self.clears.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_tokenize_error(&self) {
        self.tokenize_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns the number of records accepted by the builder.
    pub fn pushed(&self) -> u64 {
        self.pushed.load(Ordering::Relaxed)
    }

    /// Returns the number of inputs rejected by the builder.
    pub fn rejected(&self) -> u64 {
        self.rejected.load(Ordering::Relaxed)
    }

    /// Returns the number of snapshots taken.
    pub fn snapshots(&self) -> u64 {
        self.snapshots.load(Ordering::Relaxed)
    }

    /// Returns the number of tokenized snapshots taken.
    pub fn tokenized_snapshots(&self) -> u64 {
        self.tokenized_snapshots.load(Ordering::Relaxed)
    }

    /// Returns the number of clears.
    pub fn clears(&self) -> u64 {
        self.clears.load(Ordering::Relaxed)
    }

    /// Returns the number of records the tokenizer failed on.
    pub fn tokenize_errors(&self) -> u64 {
        self.tokenize_errors.load(Ordering::Relaxed)
    }

    /// Returns a snapshot of all counters.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            pushed: self.pushed(),
            rejected: self.rejected(),
            snapshots: self.snapshots(),
            tokenized_snapshots: self.tokenized_snapshots(),
            clears: self.clears(),
            tokenize_errors: self.tokenize_errors(),
        }
    }
}

/// A point-in-time copy of [`ListStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsSnapshot {
    /// Records accepted by the builder.
    pub pushed: u64,
    /// Inputs rejected by the builder.
    pub rejected: u64,
    /// Snapshots taken, plain or tokenized.
    pub snapshots: u64,
    /// Snapshots served from a token projection.
    pub tokenized_snapshots: u64,
    /// Calls to clear.
    pub clears: u64,
    /// Records skipped because the tokenizer failed on their text.
    pub tokenize_errors: u64,
}
