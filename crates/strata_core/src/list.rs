//! The chunk list: a growable, mutex-guarded sequence of chunks.

use crate::chunk::Chunk;
use crate::config::Config;
use crate::error::CoreResult;
use crate::item::{ItemBuilder, Record};
use crate::mode::{ModeState, TokenMode};
use crate::projection;
use crate::snapshot::Snapshot;
use crate::stats::ListStats;
use parking_lot::Mutex;
use std::sync::Arc;
use strata_tokenize::{TokenKind, Tokenizer};
use tracing::debug;

/// An append-only record store that hands out consistent snapshots.
///
/// One or more producers call [`push`](Self::push) while any number of
/// readers call [`snapshot`](Self::snapshot). Every operation takes the same
/// lock, so operations are totally ordered: a snapshot contains exactly the
/// pushes that completed before it acquired the lock.
///
/// Full chunks are sealed behind an `Arc` and shared with every snapshot
/// taken afterwards. The one open chunk is owned by the list alone and is
/// copied, never shared, when a snapshot is taken, so a snapshot costs one
/// chunk copy no matter how much history the list holds.
///
/// # Token mode
///
/// While token mode is on, [`snapshot`](Self::snapshot) returns a token
/// projection instead of the records: every record's text is run through
/// the active tokenizer and the unique tokens are built into a fresh list
/// with the same builder. The projection is recomputed from scratch on every
/// call and runs under the lock, stalling producers for its duration.
///
/// # Example
///
/// ```rust
/// use strata_core::{ChunkList, Config, LineBuilder, TokenKind, TokenMode};
///
/// let list = ChunkList::with_config(LineBuilder::new(), Config::new().chunk_size(2)).unwrap();
/// list.push(b"GET /index.html");
/// list.push(b"GET /about.html");
/// list.push(b"GET /index.html");
///
/// assert_eq!(list.snapshot().count(), 3);
///
/// assert_eq!(list.toggle_tokenize(TokenKind::Path), TokenMode::On(TokenKind::Path));
/// assert_eq!(list.snapshot().count(), 2);
/// ```
pub struct ChunkList<T> {
    inner: Mutex<Inner<T>>,
    builder: Arc<dyn ItemBuilder<T>>,
    config: Config,
    stats: ListStats,
}

struct Inner<T> {
    /// Full chunks, never mutated again.
    sealed: Vec<Arc<Chunk<T>>>,
    /// The open chunk, if any. Never full.
    open: Option<Chunk<T>>,
    mode: ModeState,
}

impl<T> Inner<T> {
    fn chunks(&self) -> impl Iterator<Item = &Chunk<T>> {
        self.sealed
            .iter()
            .map(|chunk| chunk.as_ref())
            .chain(self.open.iter())
    }

    fn len(&self) -> usize {
        self.chunks().map(Chunk::len).sum()
    }
}

impl<T: Record + 'static> ChunkList<T> {
    /// Creates an empty list with the default configuration.
    pub fn new<B>(builder: B) -> Self
    where
        B: ItemBuilder<T> + 'static,
    {
        Self::from_parts(Arc::new(builder), Config::default())
    }

    /// Creates an empty list with `config`.
    pub fn with_config<B>(builder: B, config: Config) -> CoreResult<Self>
    where
        B: ItemBuilder<T> + 'static,
    {
        config.validate()?;
        Ok(Self::from_parts(Arc::new(builder), config))
    }

    pub(crate) fn from_parts(builder: Arc<dyn ItemBuilder<T>>, config: Config) -> Self {
        let mode = ModeState::new(config.token_kind, config.tokenize);
        Self {
            inner: Mutex::new(Inner {
                sealed: Vec::new(),
                open: None,
                mode,
            }),
            builder,
            config,
            stats: ListStats::new(),
        }
    }

    /// Builds a record from `data` and appends it.
    ///
    /// Returns false if the builder rejected the input; nothing is stored.
    pub fn push(&self, data: &[u8]) -> bool {
        let mut inner = self.inner.lock();
        let capacity = self.config.chunk_size;

        let open = inner
            .open
            .get_or_insert_with(|| Chunk::with_capacity(capacity));
        let accepted = open.push(self.builder.as_ref(), data);

        if open.is_full() {
            if let Some(full) = inner.open.take() {
                inner.sealed.push(Arc::new(full));
            }
        }

        drop(inner);
        self.stats.record_push(accepted);
        accepted
    }

    /// Discards every record.
    ///
    /// Snapshots already handed out are unaffected. The token mode is kept.
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        let dropped = inner.len();
        inner.sealed = Vec::new();
        inner.open = None;
        drop(inner);

        self.stats.record_clear();
        debug!(dropped, "cleared chunk list");
    }

    /// Returns a snapshot, tokenized if token mode is on.
    pub fn snapshot(&self) -> Snapshot<T> {
        let inner = self.inner.lock();
        match inner.mode.mode() {
            TokenMode::Off => {
                let snapshot = Self::snapshot_locked(&inner);
                drop(inner);
                self.stats.record_snapshot(false);
                snapshot
            }
            TokenMode::On(kind) => {
                let tokenizer = kind.tokenizer();
                let snapshot = self.project_locked(&inner, tokenizer.as_ref());
                drop(inner);
                self.stats.record_snapshot(true);
                snapshot
            }
        }
    }

    /// Returns a snapshot of the records, ignoring token mode.
    pub fn plain_snapshot(&self) -> Snapshot<T> {
        let snapshot = Self::snapshot_locked(&self.inner.lock());
        self.stats.record_snapshot(false);
        snapshot
    }

    /// Returns a token projection through `tokenizer`, ignoring token mode.
    pub fn project_with(&self, tokenizer: &dyn Tokenizer) -> Snapshot<T> {
        let snapshot = self.project_locked(&self.inner.lock(), tokenizer);
        self.stats.record_snapshot(true);
        snapshot
    }

    fn snapshot_locked(inner: &Inner<T>) -> Snapshot<T> {
        let mut chunks = Vec::with_capacity(inner.sealed.len() + 1);
        chunks.extend(inner.sealed.iter().cloned());

        // The last chunk is always a private copy, even when it is sealed.
        match inner.open.as_ref().filter(|open| !open.is_empty()) {
            Some(open) => chunks.push(Arc::new(open.clone())),
            None => {
                if let Some(last) = chunks.last_mut() {
                    *last = Arc::new(last.as_ref().clone());
                }
            }
        }

        Snapshot::new(chunks)
    }

    fn project_locked(&self, inner: &Inner<T>, tokenizer: &dyn Tokenizer) -> Snapshot<T> {
        projection::project(
            inner.chunks(),
            tokenizer,
            Arc::clone(&self.builder),
            self.config.chunk_size,
            &self.stats,
        )
    }

    /// Switches token mode on with the remembered kind, or off.
    pub fn set_tokenize(&self, enabled: bool) -> TokenMode {
        let mode = self.inner.lock().mode.set(enabled);
        debug!(%mode, "set token mode");
        mode
    }

    /// Toggles token mode for `kind`.
    ///
    /// If token mode is on with `kind`, it is switched off. Otherwise it is
    /// switched on with `kind`. Either way `kind` is remembered for later
    /// calls to [`set_tokenize`](Self::set_tokenize).
    pub fn toggle_tokenize(&self, kind: TokenKind) -> TokenMode {
        let mode = self.inner.lock().mode.toggle(kind);
        debug!(%mode, "toggled token mode");
        mode
    }

    /// Parses `tag` and toggles token mode for that kind.
    ///
    /// An unknown tag fails before the mode is touched.
    pub fn toggle_tokenize_tag(&self, tag: &str) -> CoreResult<TokenMode> {
        let kind: TokenKind = tag.parse()?;
        Ok(self.toggle_tokenize(kind))
    }

    /// Returns the current token mode.
    pub fn token_mode(&self) -> TokenMode {
        self.inner.lock().mode.mode()
    }

    /// Returns true if snapshots are currently tokenized.
    pub fn is_tokenized(&self) -> bool {
        self.token_mode().is_on()
    }

    /// Returns the number of records currently held.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns true if the list holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> ChunkList<T> {
    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the statistics counters.
    pub fn stats(&self) -> &ListStats {
        &self.stats
    }
}

impl<T> std::fmt::Debug for ChunkList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("ChunkList")
            .field("chunk_size", &self.config.chunk_size)
            .field("sealed", &inner.sealed.len())
            .field("open", &inner.open.as_ref().map_or(0, Chunk::len))
            .field("mode", &inner.mode.mode())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::snapshot::count_items;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::thread;
    use strata_tokenize::TokenizeError;

    fn verbatim(data: &[u8]) -> Option<String> {
        Some(String::from_utf8_lossy(data).into_owned())
    }

    fn list(chunk_size: usize) -> ChunkList<String> {
        ChunkList::with_config(verbatim, Config::new().chunk_size(chunk_size)).unwrap()
    }

    fn texts(snapshot: &Snapshot<String>) -> Vec<&str> {
        snapshot.iter().map(String::as_str).collect()
    }

    #[test]
    fn new_list_is_empty() {
        let list = list(4);
        assert!(list.is_empty());
        let snapshot = list.snapshot();
        assert_eq!(snapshot.count(), 0);
        assert!(snapshot.chunks().is_empty());
    }

    #[test]
    fn zero_chunk_size_is_rejected() {
        let result = ChunkList::with_config(verbatim, Config::new().chunk_size(0));
        assert!(matches!(result, Err(CoreError::InvalidConfig { .. })));
    }

    #[test]
    fn three_pushes_into_two_chunks() {
        let list = list(2);
        for data in [b"a", b"b", b"c"] {
            assert!(list.push(data));
        }

        let snapshot = list.snapshot();
        let chunks = snapshot.chunks();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].items(), ["a", "b"]);
        assert_eq!(chunks[1].items(), ["c"]);
        assert_eq!(count_items(chunks), 3);
        assert_eq!(snapshot.count(), 3);
    }

    #[test]
    fn later_push_does_not_alter_returned_snapshot() {
        let list = list(2);
        list.push(b"a");
        list.push(b"b");
        list.push(b"c");

        let before = list.snapshot();
        list.push(b"d");
        list.push(b"e");

        assert_eq!(before.chunks()[1].len(), 1);
        assert_eq!(texts(&before), ["a", "b", "c"]);
        assert_eq!(before.count(), 3);
        assert_eq!(texts(&list.snapshot()), ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn snapshots_without_pushes_are_equal_but_distinct() {
        let list = list(2);
        list.push(b"a");
        list.push(b"b");
        list.push(b"c");

        let first = list.snapshot();
        let second = list.snapshot();

        assert_eq!(first, second);
        assert!(Arc::ptr_eq(&first.chunks()[0], &second.chunks()[0]));
        assert!(!Arc::ptr_eq(&first.chunks()[1], &second.chunks()[1]));
    }

    #[test]
    fn last_chunk_is_copied_even_when_full() {
        let list = list(2);
        for data in [b"a", b"b", b"c", b"d"] {
            list.push(data);
        }

        let first = list.snapshot();
        let second = list.snapshot();
        let (a, b) = (first.chunks(), second.chunks());
        assert_eq!(a.len(), 2);
        assert!(Arc::ptr_eq(&a[0], &b[0]));
        assert!(!Arc::ptr_eq(&a[1], &b[1]));
        assert_eq!(first, second);
        assert_eq!(texts(&first), ["a", "b", "c", "d"]);
    }

    #[test]
    fn single_full_chunk_is_not_shared() {
        let list = list(2);
        list.push(b"a");
        list.push(b"b");

        let first = list.snapshot();
        let second = list.snapshot();
        assert_eq!(first.chunks().len(), 1);
        assert!(!Arc::ptr_eq(&first.chunks()[0], &second.chunks()[0]));
        assert_eq!(first.chunks()[0].items(), ["a", "b"]);
    }

    #[test]
    fn rejected_push_is_not_counted() {
        let list = ChunkList::with_config(
            |data: &[u8]| (!data.is_empty()).then(|| String::from_utf8_lossy(data).into_owned()),
            Config::new().chunk_size(2),
        )
        .unwrap();

        assert!(list.push(b"a"));
        assert!(!list.push(b""));
        assert!(list.push(b"b"));
        assert!(!list.push(b""));

        let snapshot = list.snapshot();
        assert_eq!(texts(&snapshot), ["a", "b"]);
        assert_eq!(snapshot.chunks().len(), 1);
        assert_eq!(list.stats().rejected(), 2);
        assert_eq!(list.stats().pushed(), 2);
    }

    #[test]
    fn rejection_into_fresh_chunk_leaves_no_empty_chunk_in_snapshot() {
        let list = ChunkList::with_config(
            |data: &[u8]| (data != b"x").then(|| String::from_utf8_lossy(data).into_owned()),
            Config::new().chunk_size(1),
        )
        .unwrap();

        list.push(b"a");
        assert!(!list.push(b"x"));

        let snapshot = list.snapshot();
        assert_eq!(snapshot.chunks().len(), 1);
        assert_eq!(snapshot.count(), 1);
    }

    #[test]
    fn clear_empties_the_list() {
        let list = list(2);
        for data in [b"a", b"b", b"c"] {
            list.push(data);
        }
        let before = list.snapshot();

        list.clear();

        let after = list.snapshot();
        assert_eq!(after.count(), 0);
        assert!(after.chunks().is_empty());
        assert!(list.is_empty());
        assert_eq!(before.count(), 3);
        assert_eq!(list.stats().clears(), 1);
    }

    #[test]
    fn push_after_clear_starts_over() {
        let list = list(2);
        list.push(b"old");
        list.clear();
        list.push(b"new");
        assert_eq!(texts(&list.snapshot()), ["new"]);
    }

    #[test]
    fn fullness_invariant() {
        let list = list(3);
        for i in 0..10 {
            list.push(format!("{i}").as_bytes());
            let snapshot = list.snapshot();
            let chunks = snapshot.chunks();
            for chunk in &chunks[..chunks.len().saturating_sub(1)] {
                assert!(chunk.is_full());
            }
            assert_eq!(snapshot.count(), i + 1);
        }
    }

    #[test]
    fn len_tracks_pushes() {
        let list = list(2);
        for data in [b"a", b"b", b"c"] {
            list.push(data);
        }
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn toggle_semantics() {
        let list = list(2);
        assert_eq!(list.token_mode(), TokenMode::Off);
        assert_eq!(list.toggle_tokenize(TokenKind::Word), TokenMode::On(TokenKind::Word));
        assert_eq!(list.toggle_tokenize(TokenKind::Word), TokenMode::Off);
        assert_eq!(list.toggle_tokenize(TokenKind::Ip), TokenMode::On(TokenKind::Ip));
        assert!(list.is_tokenized());
    }

    #[test]
    fn set_tokenize_uses_configured_kind() {
        let list = ChunkList::with_config(verbatim, Config::new().token_kind(TokenKind::Num)).unwrap();
        assert_eq!(list.set_tokenize(true), TokenMode::On(TokenKind::Num));
        assert_eq!(list.set_tokenize(false), TokenMode::Off);
    }

    #[test]
    fn tokenize_config_starts_on() {
        let list = ChunkList::with_config(
            verbatim,
            Config::new().token_kind(TokenKind::Hash).tokenize(true),
        )
        .unwrap();
        assert_eq!(list.token_mode(), TokenMode::On(TokenKind::Hash));
    }

    #[test]
    fn toggle_by_tag() {
        let list = list(2);
        assert_eq!(list.toggle_tokenize_tag("path").unwrap(), TokenMode::On(TokenKind::Path));

        let err = list.toggle_tokenize_tag("uuid").unwrap_err();
        assert!(matches!(err, CoreError::Tokenize(TokenizeError::UnknownKind { .. })));
        assert_eq!(list.token_mode(), TokenMode::On(TokenKind::Path));
    }

    #[test]
    fn tokenized_snapshot_is_unique_tokens() {
        let list = list(2);
        list.push(b"disk quota exceeded for 10.0.0.1");
        list.push(b"disk quota exceeded for 10.0.0.2");
        list.push(b"again 10.0.0.1");

        list.toggle_tokenize(TokenKind::Ip);
        let snapshot = list.snapshot();
        let mut tokens = texts(&snapshot);
        tokens.sort_unstable();
        assert_eq!(tokens, ["10.0.0.1", "10.0.0.2"]);

        list.toggle_tokenize(TokenKind::Word);
        let snapshot = list.snapshot();
        let mut tokens = texts(&snapshot);
        tokens.sort_unstable();
        assert_eq!(tokens, ["again", "exceeded", "quota"]);

        assert_eq!(list.stats().tokenized_snapshots(), 2);
    }

    #[test]
    fn tokenized_snapshot_does_not_touch_records() {
        let list = list(2);
        list.push(b"alpha bravo charlie");
        list.set_tokenize(true);
        let _ = list.snapshot();
        list.set_tokenize(false);
        assert_eq!(texts(&list.snapshot()), ["alpha bravo charlie"]);
    }

    #[test]
    fn tokenized_snapshot_after_clear_has_no_stale_tokens() {
        let list = list(2);
        list.push(b"stale tokens here");
        list.set_tokenize(true);
        assert_eq!(list.snapshot().count(), 2);

        list.clear();
        assert!(list.snapshot().is_empty());

        list.push(b"fresh");
        assert_eq!(texts(&list.snapshot()), ["fresh"]);
    }

    #[test]
    fn project_with_custom_tokenizer() {
        struct Fields;
        impl Tokenizer for Fields {
            fn tokenize(&self, text: &str) -> strata_tokenize::TokenizeResult<Vec<String>> {
                Ok(text.split(',').map(str::to_owned).collect())
            }
        }

        let list = list(4);
        list.push(b"a,b");
        list.push(b"b,c");
        let mut tokens: Vec<String> = list.project_with(&Fields).iter().cloned().collect();
        tokens.sort();
        assert_eq!(tokens, ["a", "b", "c"]);
        assert_eq!(list.token_mode(), TokenMode::Off);
    }

    #[test]
    fn snapshot_never_sees_later_pushes() {
        let list = Arc::new(list(8));
        let done = Arc::new(AtomicBool::new(false));
        let pushed = Arc::new(AtomicUsize::new(0));

        let producer = {
            let list = Arc::clone(&list);
            let done = Arc::clone(&done);
            let pushed = Arc::clone(&pushed);
            thread::spawn(move || {
                for i in 0..2_000 {
                    list.push(format!("{i}").as_bytes());
                    pushed.store(i + 1, Ordering::SeqCst);
                }
                done.store(true, Ordering::SeqCst);
            })
        };

        let mut last_count = 0;
        while !done.load(Ordering::SeqCst) {
            let completed_before = pushed.load(Ordering::SeqCst);
            let snapshot = list.snapshot();
            let count = snapshot.count();

            // Every push that completed before the call is visible.
            assert!(count >= completed_before);
            // Records arrive in push order with no gaps.
            for (i, item) in snapshot.iter().enumerate() {
                assert_eq!(item, &i.to_string());
            }
            assert!(count >= last_count);
            last_count = count;
        }

        producer.join().unwrap();
        assert_eq!(list.snapshot().count(), 2_000);
    }

    #[test]
    fn concurrent_producers() {
        let list = Arc::new(list(16));
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let list = Arc::clone(&list);
                thread::spawn(move || {
                    for i in 0..500 {
                        assert!(list.push(format!("{t}-{i}").as_bytes()));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let snapshot = list.snapshot();
        assert_eq!(snapshot.count(), 2_000);
        let chunks = snapshot.chunks();
        assert!(chunks[..chunks.len() - 1].iter().all(|c| c.is_full()));
    }

    proptest::proptest! {
        #[test]
        fn count_is_accepted_pushes(
            chunk_size in 1usize..6,
            inputs in proptest::collection::vec("[a-c]{0,3}", 0..40),
        ) {
            let list = ChunkList::with_config(
                |data: &[u8]| (!data.is_empty()).then(|| String::from_utf8_lossy(data).into_owned()),
                Config::new().chunk_size(chunk_size),
            )
            .unwrap();

            let accepted = inputs.iter().filter(|input| list.push(input.as_bytes())).count();
            let snapshot = list.snapshot();

            proptest::prop_assert_eq!(snapshot.count(), accepted);
            proptest::prop_assert_eq!(count_items(snapshot.chunks()), accepted);
            let chunks = snapshot.chunks();
            for chunk in &chunks[..chunks.len().saturating_sub(1)] {
                proptest::prop_assert!(chunk.is_full());
            }
        }
    }

    #[test]
    fn debug_output() {
        let list = list(2);
        list.push(b"a");
        list.push(b"b");
        list.push(b"c");
        let debug = format!("{list:?}");
        assert!(debug.contains("sealed: 1"));
        assert!(debug.contains("open: 1"));
    }
}
