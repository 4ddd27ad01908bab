//! Error types for tokenizers.

use thiserror::Error;

/// Result type for tokenizer operations.
pub type TokenizeResult<T> = Result<T, TokenizeError>;

/// Errors that can occur while selecting or running a tokenizer.
#[derive(Debug, Error)]
pub enum TokenizeError {
    /// The tokenizer kind tag is not one of the supported kinds.
    #[error("unknown token type: {kind:?} (expected one of ip, path, num, hash, word)")]
    UnknownKind {
        /// The rejected tag.
        kind: String,
    },

    /// The input text is too long to tokenize.
    #[error("input too long to tokenize: {len} bytes, limit {max}")]
    InputTooLong {
        /// Length of the rejected text in bytes.
        len: usize,
        /// The configured limit.
        max: usize,
    },

    /// A user-supplied pattern failed to compile.
    #[error("invalid token pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

impl TokenizeError {
    /// Creates an unknown kind error.
    pub fn unknown_kind(kind: impl Into<String>) -> Self {
        Self::UnknownKind { kind: kind.into() }
    }
}
