//! Error types for Strata core.

use strata_tokenize::TokenizeError;
use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in Strata core operations.
///
/// Rejected input is not an error: [`ChunkList::push`](crate::ChunkList::push)
/// reports it as `false`.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The configuration cannot be used to build a chunk list.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the problem.
        message: String,
    },

    /// Tokenizer selection failed.
    #[error("tokenizer error: {0}")]
    Tokenize(#[from] TokenizeError),
}

impl CoreError {
    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
