//! Chunk list configuration.

use crate::error::{CoreError, CoreResult};
use strata_tokenize::TokenKind;

/// Default number of records per chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 100;

/// Configuration for a [`ChunkList`](crate::ChunkList).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of records a chunk holds before a new one is started.
    pub chunk_size: usize,

    /// Tokenizer kind used when token mode is switched on without naming one.
    pub token_kind: TokenKind,

    /// Whether token mode starts switched on.
    pub tokenize: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            token_kind: TokenKind::Word,
            tokenize: false,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the chunk capacity.
    #[must_use]
    pub const fn chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size;
        self
    }

    /// Sets the default tokenizer kind.
    #[must_use]
    pub const fn token_kind(mut self, kind: TokenKind) -> Self {
        self.token_kind = kind;
        self
    }

    /// Sets whether token mode starts switched on.
    #[must_use]
    pub const fn tokenize(mut self, value: bool) -> Self {
        self.tokenize = value;
        self
    }

    /// Checks that the configuration can be used.
    pub fn validate(&self) -> CoreResult<()> {
        if self.chunk_size == 0 {
            return Err(CoreError::invalid_config("chunk_size must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.chunk_size, DEFAULT_CHUNK_SIZE);
        assert_eq!(config.token_kind, TokenKind::Word);
        assert!(!config.tokenize);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_pattern() {
        let config = Config::new()
            .chunk_size(2)
            .token_kind(TokenKind::Ip)
            .tokenize(true);

        assert_eq!(config.chunk_size, 2);
        assert_eq!(config.token_kind, TokenKind::Ip);
        assert!(config.tokenize);
    }

    #[test]
    fn zero_chunk_size_is_rejected() {
        let result = Config::new().chunk_size(0).validate();
        assert!(matches!(result, Err(CoreError::InvalidConfig { .. })));
    }
}
