//! CLI command implementations.

pub mod count;
pub mod stats;
pub mod tokens;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use strata_core::{ChunkList, Config, Item, LineBuilder};
use tracing::info;

/// Opens `path`, or stdin when no path is given.
fn open_input(path: Option<&Path>) -> io::Result<Box<dyn BufRead>> {
    match path {
        Some(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
        None => Ok(Box::new(io::stdin().lock())),
    }
}

/// Pushes every line of `reader`, newline included, and returns the number
/// of lines read.
fn ingest<R: BufRead>(list: &ChunkList<Item>, mut reader: R) -> io::Result<usize> {
    let mut line = Vec::new();
    let mut lines = 0;

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        lines += 1;
        list.push(&line);
    }

    Ok(lines)
}

/// Builds a list with `chunk_size` and fills it from `input`.
pub fn load(
    input: Option<&Path>,
    chunk_size: usize,
    skip_empty: bool,
) -> Result<ChunkList<Item>, Box<dyn std::error::Error>> {
    let builder = LineBuilder::new().skip_empty(skip_empty);
    let list = ChunkList::with_config(builder, Config::new().chunk_size(chunk_size))?;

    let reader = open_input(input)?;
    let lines = ingest(&list, reader)?;

    let source = input.map_or_else(|| "stdin".to_string(), |p| p.display().to_string());
    info!(lines, records = list.len(), %source, "ingested input");

    Ok(list)
}
