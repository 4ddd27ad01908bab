//! Deduplicated token sets.

use std::collections::hash_set::{self, HashSet};

/// A set of unique tokens, deduplicated by value.
///
/// Iteration order is unspecified. Use [`Tokens::into_sorted_vec`] when a
/// stable order is needed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens {
    set: HashSet<String>,
}

impl Tokens {
    /// Creates an empty token set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one token. Returns false if it was already present.
    pub fn insert(&mut self, token: impl Into<String>) -> bool {
        self.set.insert(token.into())
    }

    /// Adds every token from `tokens`.
    pub fn extend<I>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.set.extend(tokens);
    }

    /// Returns true if `token` is in the set.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.set.contains(token)
    }

    /// Returns the number of unique tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// Returns true if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Iterates over the tokens in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.set.iter().map(String::as_str)
    }

    /// Consumes the set, returning its tokens in lexicographic order.
    #[must_use]
    pub fn into_sorted_vec(self) -> Vec<String> {
        let mut tokens: Vec<String> = self.set.into_iter().collect();
        tokens.sort_unstable();
        tokens
    }
}

impl IntoIterator for Tokens {
    type Item = String;
    type IntoIter = hash_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.set.into_iter()
    }
}

impl FromIterator<String> for Tokens {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            set: iter.into_iter().collect(),
        }
    }
}
