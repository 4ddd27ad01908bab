//! # Strata Core
//!
//! Ingestion store for interactive, line-oriented search.
//!
//! This crate provides:
//! - [`ChunkList`]: an append-only store of records in fixed-size chunks
//! - [`Snapshot`]: cheap, immutable point-in-time views of a chunk list
//! - Token mode: snapshots served as the unique tokens of the current
//!   records, extracted by a [`TokenKind`] tokenizer
//!
//! ## Concurrency
//!
//! A chunk list is shared between threads behind an `Arc`. One lock
//! serializes pushes, clears, snapshots and mode changes. Full chunks are
//! immutable and shared by reference; only the open chunk is copied into a
//! snapshot.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use std::thread;
//! use strata_core::{ChunkList, LineBuilder};
//!
//! let list = Arc::new(ChunkList::new(LineBuilder::new()));
//!
//! let producer = {
//!     let list = Arc::clone(&list);
//!     thread::spawn(move || {
//!         for line in ["alpha\n", "beta\n", "gamma\n"] {
//!             list.push(line.as_bytes());
//!         }
//!     })
//! };
//! producer.join().unwrap();
//!
//! let snapshot = list.snapshot();
//! assert_eq!(snapshot.count(), 3);
//! assert_eq!(snapshot.get(1).unwrap().as_str(), "beta");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod chunk;
mod config;
mod error;
mod item;
mod list;
mod mode;
mod projection;
mod snapshot;
mod stats;

pub use chunk::Chunk;
pub use config::{Config, DEFAULT_CHUNK_SIZE};
pub use error::{CoreError, CoreResult};
pub use item::{Item, ItemBuilder, LineBuilder, Record};
pub use list::ChunkList;
pub use mode::TokenMode;
pub use snapshot::{count_items, Snapshot};
pub use stats::{ListStats, StatsSnapshot};
pub use strata_tokenize::{TokenKind, Tokenizer};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
