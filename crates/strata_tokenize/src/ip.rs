//! IP address tokenizer.

use crate::error::TokenizeResult;
use crate::{check_len, Tokenizer};
use regex::Regex;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;

static V4_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:[0-9]{1,3}\.){3}[0-9]{1,3}\b").expect("IPv4 candidate pattern is valid")
});

static V6_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:[0-9A-Fa-f]{0,4}:){2,7}[0-9A-Fa-f]{0,4}")
        .expect("IPv6 candidate pattern is valid")
});

/// Extracts IPv4 and IPv6 addresses.
///
/// Candidates are found by pattern and then validated with the standard
/// library parsers, so `999.1.1.1` or `12:30:45` are not reported. A
/// candidate glued to surrounding word characters, dots or colons (a
/// version string like `1.2.3.4.5`, a Rust path like `std::io`) is skipped.
/// A dot that ends a sentence, as in `refused by 10.0.0.1.`, is not glue.
#[derive(Debug, Clone, Copy, Default)]
pub struct IpTokenizer;

impl IpTokenizer {
    /// Creates a new IP tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for IpTokenizer {
    fn tokenize(&self, text: &str) -> TokenizeResult<Vec<String>> {
        check_len(text)?;

        let mut found: Vec<(usize, String)> = Vec::new();

        for m in V4_RE.find_iter(text) {
            // A trailing ":port" is fine for IPv4.
            if standalone(text, m.start(), m.end(), false)
                && m.as_str().parse::<Ipv4Addr>().is_ok()
            {
                found.push((m.start(), m.as_str().to_owned()));
            }
        }

        for m in V6_RE.find_iter(text) {
            let candidate = m.as_str();
            if candidate.chars().any(|c| c.is_ascii_hexdigit())
                && standalone(text, m.start(), m.end(), true)
                && candidate.parse::<Ipv6Addr>().is_ok()
            {
                found.push((m.start(), candidate.to_owned()));
            }
        }

        // Report in text order regardless of family.
        found.sort_by_key(|(start, _)| *start);
        Ok(found.into_iter().map(|(_, ip)| ip).collect())
    }
}

fn standalone(text: &str, start: usize, end: usize, colon_glues: bool) -> bool {
    let glued = |c: char| c.is_alphanumeric() || c == '_' || (colon_glues && c == ':');

    let before = text[..start].chars().next_back();
    if before.is_some_and(|c| glued(c) || c == '.') {
        return false;
    }

    let mut after = text[end..].chars();
    match after.next() {
        // Only another digit makes a trailing dot part of a longer number.
        Some('.') => !after.next().is_some_and(|c| c.is_ascii_digit()),
        next => !next.is_some_and(glued),
    }
}
