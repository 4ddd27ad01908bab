//! Count command implementation.

use serde::Serialize;
use std::path::Path;
use strata_core::{ChunkList, Item};

/// Record and chunk counts after ingestion.
#[derive(Debug, Serialize)]
pub struct CountResult {
    /// Records held.
    pub records: usize,
    /// Chunks holding them.
    pub chunks: usize,
    /// Records per chunk.
    pub chunk_size: usize,
    /// Lines the builder rejected.
    pub rejected: u64,
}

impl CountResult {
    /// Counts the current contents of `list`.
    pub fn from_list(list: &ChunkList<Item>) -> Self {
        let snapshot = list.plain_snapshot();
        Self {
            records: snapshot.count(),
            chunks: snapshot.chunks().len(),
            chunk_size: list.config().chunk_size,
            rejected: list.stats().rejected(),
        }
    }
}

/// Runs the count command.
pub fn run(
    input: Option<&Path>,
    chunk_size: usize,
    skip_empty: bool,
    format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let list = super::load(input, chunk_size, skip_empty)?;
    let result = CountResult::from_list(&list);

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        _ => {
            println!("Records: {}", result.records);
            println!("Chunks:  {} (size {})", result.chunks, result.chunk_size);
            if result.rejected > 0 {
                println!("Skipped: {}", result.rejected);
            }
        }
    }

    Ok(())
}
