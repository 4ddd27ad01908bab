//! Token projections.
//!
//! A projection re-tokenizes every record currently held by a chunk list
//! and returns a snapshot of a fresh list whose records are the unique
//! tokens. Nothing is cached between calls: each projection starts from an
//! empty token set, so tokens from cleared data or a previous kind can never
//! leak into a later one.

use crate::chunk::Chunk;
use crate::config::Config;
use crate::item::{ItemBuilder, Record};
use crate::list::ChunkList;
use crate::snapshot::Snapshot;
use crate::stats::ListStats;
use std::sync::Arc;
use strata_tokenize::{tokenize, Tokenizer, Tokens};
use tracing::trace;

/// Projects `chunks` through `tokenizer`.
///
/// Records the tokenizer fails on contribute nothing and are counted in
/// `stats`. Each unique token is pushed as bytes through `builder`; tokens
/// the builder rejects are absent from the result.
pub(crate) fn project<'a, T, I>(
    chunks: I,
    tokenizer: &dyn Tokenizer,
    builder: Arc<dyn ItemBuilder<T>>,
    chunk_size: usize,
    stats: &ListStats,
) -> Snapshot<T>
where
    T: Record + 'static,
    I: IntoIterator<Item = &'a Chunk<T>>,
{
    let mut tokens = Tokens::new();
    let mut records = 0usize;
    let mut skipped = 0usize;

    for chunk in chunks {
        for item in chunk.iter() {
            records += 1;
            match tokenize(&item.text(), tokenizer) {
                Ok(found) => tokens.extend(found),
                Err(err) => {
                    skipped += 1;
                    stats.record_tokenize_error();
                    trace!(error = %err, "skipping record in token projection");
                }
            }
        }
    }

    trace!(records, skipped, tokens = tokens.len(), "built token projection");

    let projected = ChunkList::from_parts(builder, Config::new().chunk_size(chunk_size));
    for token in tokens {
        projected.push(token.as_bytes());
    }
    projected.plain_snapshot()
}
