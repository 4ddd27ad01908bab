//! Tokens command implementation.

use std::path::Path;
use strata_core::{ChunkList, Item, TokenKind, TokenMode};
use tracing::debug;

/// Switches `list` into token mode for `kind` and returns its sorted tokens.
pub fn collect_tokens(list: &ChunkList<Item>, kind: TokenKind) -> Vec<String> {
    if list.token_mode() != TokenMode::On(kind) {
        list.toggle_tokenize(kind);
    }

    let snapshot = list.snapshot();
    let mut tokens: Vec<String> = snapshot.iter().map(|item| item.as_str().to_owned()).collect();
    tokens.sort_unstable();

    debug!(%kind, tokens = tokens.len(), "collected tokens");
    tokens
}

/// Runs the tokens command.
pub fn run(
    input: Option<&Path>,
    chunk_size: usize,
    kind: TokenKind,
    format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let list = super::load(input, chunk_size, false)?;
    let tokens = collect_tokens(&list, kind);

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&tokens)?);
        }
        _ => {
            for token in &tokens {
                println!("{token}");
            }
        }
    }

    Ok(())
}
