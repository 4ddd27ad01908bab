//! Regex-backed tokenizers.

use crate::error::TokenizeResult;
use crate::{check_len, Tokenizer};
use regex::Regex;
use std::sync::LazyLock;

/// Runs of 5 or more ASCII digits.
pub const NUM_PATTERN: &str = r"[0-9]{5,}";

/// Whole-word hex strings between 7 and 128 digits long.
///
/// Covers abbreviated and full git object ids, MD5, SHA-1, SHA-256 and
/// SHA-512 digests. Word boundaries are ASCII: a letter like `é` next to the
/// digits does not glue them into a longer word.
pub const HASH_PATTERN: &str = r"(?-u:\b)[0-9a-fA-F]{7,128}(?-u:\b)";

/// Runs of 5 or more ASCII word characters (`[0-9A-Za-z_]`).
pub const WORD_PATTERN: &str = r"(?-u:\w){5,}";

static NUM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NUM_PATTERN).expect("NUM_PATTERN is a valid regex"));
static HASH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HASH_PATTERN).expect("HASH_PATTERN is a valid regex"));
static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(WORD_PATTERN).expect("WORD_PATTERN is a valid regex"));

/// A tokenizer that returns every non-overlapping match of a regex.
#[derive(Debug, Clone)]
pub struct RegexTokenizer {
    regex: Regex,
}

impl RegexTokenizer {
    /// Compiles `pattern` into a tokenizer.
    pub fn new(pattern: &str) -> TokenizeResult<Self> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    /// Tokenizer for the `num` kind.
    #[must_use]
    pub fn num() -> Self {
        Self {
            regex: NUM_RE.clone(),
        }
    }

    /// Tokenizer for the `hash` kind.
    #[must_use]
    pub fn hash() -> Self {
        Self {
            regex: HASH_RE.clone(),
        }
    }

    /// Tokenizer for the `word` kind.
    #[must_use]
    pub fn word() -> Self {
        Self {
            regex: WORD_RE.clone(),
        }
    }

    /// Returns the source pattern.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> TokenizeResult<Vec<String>> {
        check_len(text)?;
        Ok(self
            .regex
            .find_iter(text)
            .map(|m| m.as_str().to_owned())
            .collect())
    }
}
