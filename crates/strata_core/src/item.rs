//! Records and the builders that construct them from raw bytes.

use std::borrow::Cow;
use std::sync::atomic::{AtomicU64, Ordering};

/// A record stored in a chunk.
///
/// Records are opaque to the store apart from their text, which the token
/// projection feeds to a tokenizer. Records are immutable once built.
pub trait Record: Clone + Send + Sync {
    /// Returns the text of this record.
    fn text(&self) -> Cow<'_, str>;
}

impl Record for String {
    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

/// Builds a record from raw input bytes.
///
/// Returning `None` rejects the input: nothing is stored and the push
/// reports `false`. Builders must not keep `data` beyond the call; the
/// caller reuses the buffer.
///
/// Every `Fn(&[u8]) -> Option<T> + Send + Sync` closure is a builder.
pub trait ItemBuilder<T>: Send + Sync {
    /// Builds a record from `data`, or rejects it.
    fn build(&self, data: &[u8]) -> Option<T>;
}

impl<T, F> ItemBuilder<T> for F
where
    F: Fn(&[u8]) -> Option<T> + Send + Sync,
{
    fn build(&self, data: &[u8]) -> Option<T> {
        self(data)
    }
}

/// One line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    index: u64,
    text: Box<str>,
}

impl Item {
    /// Creates an item.
    pub fn new(index: u64, text: impl Into<Box<str>>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }

    /// Returns the ingestion index assigned by the builder.
    #[must_use]
    pub fn index(&self) -> u64 {
        self.index
    }

    /// Returns the line text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Record for Item {
    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.text)
    }
}

/// Builds [`Item`]s from raw lines.
///
/// Strips one trailing `\n` and then one trailing `\r`, decodes the rest as
/// UTF-8 (invalid sequences become U+FFFD) and stamps each accepted line
/// with the next index. Indices increase in push order but are not dense
/// when the builder is shared with a token projection.
#[derive(Debug, Default)]
pub struct LineBuilder {
    next_index: AtomicU64,
    skip_empty: bool,
}

impl LineBuilder {
    /// Creates a builder that accepts every line.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether empty lines are rejected.
    #[must_use]
    pub fn skip_empty(mut self, value: bool) -> Self {
        self.skip_empty = value;
        self
    }
}

impl ItemBuilder<Item> for LineBuilder {
    fn build(&self, data: &[u8]) -> Option<Item> {
        let line = data.strip_suffix(b"\n").unwrap_or(data);
        let line = line.strip_suffix(b"\r").unwrap_or(line);

        if self.skip_empty && line.is_empty() {
            return None;
        }

        let index = self.next_index.fetch_add(1, Ordering::Relaxed);
        Some(Item::new(index, String::from_utf8_lossy(line)))
    }
}
