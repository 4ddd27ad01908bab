//! Token mode state machine.

use std::fmt;
use strata_tokenize::TokenKind;

/// Whether snapshots are served from a token projection, and through which
/// tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenMode {
    /// Snapshots return the ingested records.
    Off,
    /// Snapshots return the unique tokens of the given kind.
    On(TokenKind),
}

impl TokenMode {
    /// Returns true if token mode is on.
    #[must_use]
    pub const fn is_on(self) -> bool {
        matches!(self, TokenMode::On(_))
    }

    /// Returns the active kind, if on.
    #[must_use]
    pub const fn kind(self) -> Option<TokenKind> {
        match self {
            TokenMode::On(kind) => Some(kind),
            TokenMode::Off => None,
        }
    }
}

impl fmt::Display for TokenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenMode::Off => f.write_str("off"),
            TokenMode::On(kind) => write!(f, "on({kind})"),
        }
    }
}

/// The flag plus the remembered kind.
///
/// The kind survives switching the mode off so that a later
/// `set(true)` resumes with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ModeState {
    enabled: bool,
    kind: TokenKind,
}

impl ModeState {
    pub(crate) fn new(kind: TokenKind, enabled: bool) -> Self {
        Self { enabled, kind }
    }

    pub(crate) fn mode(self) -> TokenMode {
        if self.enabled {
            TokenMode::On(self.kind)
        } else {
            TokenMode::Off
        }
    }

    pub(crate) fn set(&mut self, enabled: bool) -> TokenMode {
        self.enabled = enabled;
        self.mode()
    }

    /// Same kind while on switches off; anything else switches on with `kind`.
    pub(crate) fn toggle(&mut self, kind: TokenKind) -> TokenMode {
        self.enabled = !(self.enabled && self.kind == kind);
        self.kind = kind;
        self.mode()
    }
}
