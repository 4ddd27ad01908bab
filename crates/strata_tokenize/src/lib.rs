//! # Strata Tokenize
//!
//! Pattern tokenizers used to build token projections of a Strata chunk list.
//!
//! A tokenizer turns one record's text into zero or more candidate
//! substrings. This crate provides one implementation per [`TokenKind`]:
//!
//! | kind   | extracts                                   |
//! |--------|--------------------------------------------|
//! | `ip`   | IPv4 and IPv6 addresses                    |
//! | `path` | filesystem paths                           |
//! | `num`  | runs of 5 or more ASCII digits             |
//! | `hash` | hex fingerprints (commit ids, digests)     |
//! | `word` | runs of 5 or more ASCII word characters    |
//!
//! ## Example
//!
//! ```rust
//! use strata_tokenize::{tokenize, TokenKind, Tokens};
//!
//! let tokenizer = "word".parse::<TokenKind>().unwrap().tokenizer();
//! let mut tokens = Tokens::new();
//! tokens.extend(tokenize("connection refused by upstream", tokenizer.as_ref()).unwrap());
//! assert!(tokens.contains("refused"));
//! assert!(!tokens.contains("by"));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod ip;
mod kind;
mod path;
mod pattern;
mod tokens;

pub use error::{TokenizeError, TokenizeResult};
pub use ip::IpTokenizer;
pub use kind::TokenKind;
pub use path::PathTokenizer;
pub use pattern::{RegexTokenizer, HASH_PATTERN, NUM_PATTERN, WORD_PATTERN};
pub use tokens::Tokens;

/// Largest text, in bytes, the built-in tokenizers accept.
pub const MAX_INPUT_LEN: usize = 1024 * 1024;

/// Extracts candidate substrings from a record's text.
///
/// Implementations must be deterministic: the same text always yields the
/// same tokens. An error means this text contributes nothing; callers
/// building a projection skip it and continue.
pub trait Tokenizer: Send + Sync {
    /// Returns the tokens found in `text`, possibly with duplicates.
    fn tokenize(&self, text: &str) -> TokenizeResult<Vec<String>>;
}

/// Runs `tokenizer` over `text`.
pub fn tokenize(text: &str, tokenizer: &dyn Tokenizer) -> TokenizeResult<Vec<String>> {
    tokenizer.tokenize(text)
}

pub(crate) fn check_len(text: &str) -> TokenizeResult<()> {
    if text.len() > MAX_INPUT_LEN {
        return Err(TokenizeError::InputTooLong {
            len: text.len(),
            max: MAX_INPUT_LEN,
        });
    }
    Ok(())
}
