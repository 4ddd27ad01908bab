//! Stats command implementation.

use serde::Serialize;
use std::path::Path;
use strata_core::{ChunkList, Item, TokenKind};

/// List statistics report.
#[derive(Debug, Serialize)]
pub struct StatsReport {
    /// Records held.
    pub records: usize,
    /// Records per chunk.
    pub chunk_size: usize,
    /// Token mode after the command ran.
    pub token_mode: String,
    /// Unique tokens in the tokenized snapshot (if requested).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<usize>,
    /// Records accepted by the builder.
    pub pushed: u64,
    /// Inputs rejected by the builder.
    pub rejected: u64,
    /// Snapshots taken.
    pub snapshots: u64,
    /// Snapshots served from a token projection.
    pub tokenized_snapshots: u64,
    /// Records the tokenizer failed on.
    pub tokenize_errors: u64,
}

impl StatsReport {
    /// Builds a report for `list`, taking one tokenized snapshot first if
    /// `kind` is given.
    pub fn collect(list: &ChunkList<Item>, kind: Option<TokenKind>) -> Self {
        let tokens = kind.map(|kind| {
            list.toggle_tokenize(kind);
            list.snapshot().count()
        });

        let stats = list.stats().snapshot();
        Self {
            records: list.len(),
            chunk_size: list.config().chunk_size,
            token_mode: list.token_mode().to_string(),
            tokens,
            pushed: stats.pushed,
            rejected: stats.rejected,
            snapshots: stats.snapshots,
            tokenized_snapshots: stats.tokenized_snapshots,
            tokenize_errors: stats.tokenize_errors,
        }
    }
}

/// Runs the stats command.
pub fn run(
    input: Option<&Path>,
    chunk_size: usize,
    kind: Option<TokenKind>,
    format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let list = super::load(input, chunk_size, false)?;
    let report = StatsReport::collect(&list, kind);

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => print_text_output(&report),
    }

    Ok(())
}

fn print_text_output(report: &StatsReport) {
    println!("Records:             {}", report.records);
    println!("Chunk size:          {}", report.chunk_size);
    println!("Token mode:          {}", report.token_mode);
    if let Some(tokens) = report.tokens {
        println!("Unique tokens:       {tokens}");
    }
    println!();
    println!("Pushed:              {}", report.pushed);
    println!("Rejected:            {}", report.rejected);
    println!("Snapshots:           {}", report.snapshots);
    println!("Tokenized snapshots: {}", report.tokenized_snapshots);
    println!("Tokenize errors:     {}", report.tokenize_errors);
}
