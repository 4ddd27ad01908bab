//! Tokenizer kind tags.

use crate::error::TokenizeError;
use crate::ip::IpTokenizer;
use crate::path::PathTokenizer;
use crate::pattern::RegexTokenizer;
use crate::Tokenizer;
use std::fmt;
use std::str::FromStr;

/// The closed set of tokenizers a chunk list can project through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TokenKind {
    /// IPv4 and IPv6 addresses.
    Ip,
    /// Filesystem paths.
    Path,
    /// Runs of 5 or more digits.
    Num,
    /// Hex fingerprints.
    Hash,
    /// Runs of 5 or more word characters.
    #[default]
    Word,
}

impl TokenKind {
    /// Every kind, in tag order.
    pub const ALL: [TokenKind; 5] = [
        TokenKind::Ip,
        TokenKind::Path,
        TokenKind::Num,
        TokenKind::Hash,
        TokenKind::Word,
    ];

    /// Returns the configuration tag for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::Ip => "ip",
            TokenKind::Path => "path",
            TokenKind::Num => "num",
            TokenKind::Hash => "hash",
            TokenKind::Word => "word",
        }
    }

    /// Returns a tokenizer instance for this kind.
    #[must_use]
    pub fn tokenizer(self) -> Box<dyn Tokenizer> {
        match self {
            TokenKind::Ip => Box::new(IpTokenizer::new()),
            TokenKind::Path => Box::new(PathTokenizer::new()),
            TokenKind::Num => Box::new(RegexTokenizer::num()),
            TokenKind::Hash => Box::new(RegexTokenizer::hash()),
            TokenKind::Word => Box::new(RegexTokenizer::word()),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenKind {
    type Err = TokenizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ip" => Ok(TokenKind::Ip),
            "path" => Ok(TokenKind::Path),
            "num" => Ok(TokenKind::Num),
            "hash" => Ok(TokenKind::Hash),
            "word" => Ok(TokenKind::Word),
            other => Err(TokenizeError::unknown_kind(other)),
        }
    }
}
