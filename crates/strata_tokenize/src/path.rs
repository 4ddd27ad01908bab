//! Filesystem path tokenizer.

use crate::error::TokenizeResult;
use crate::{check_len, Tokenizer};
use regex::Regex;
use std::sync::LazyLock;

static PATH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\w.@+~-]*(?:/[\w.@+~-]+)+/?").expect("path pattern is valid")
});

/// Extracts `/`-separated paths.
///
/// Absolute (`/var/log/syslog`), home-relative (`~/src`), dot-relative
/// (`./build.sh`, `../lib`) and plain relative (`src/main.rs`) paths are
/// reported. A single trailing `.` closing a sentence is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathTokenizer;

impl PathTokenizer {
    /// Creates a new path tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for PathTokenizer {
    fn tokenize(&self, text: &str) -> TokenizeResult<Vec<String>> {
        check_len(text)?;
        Ok(PATH_RE
            .find_iter(text)
            .map(|m| trim_sentence_dot(m.as_str()).to_owned())
            .collect())
    }
}

fn trim_sentence_dot(path: &str) -> &str {
    match path.strip_suffix('.') {
        Some(rest) if !rest.ends_with('.') && !rest.ends_with('/') => rest,
        _ => path,
    }
}
