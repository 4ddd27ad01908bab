//! Property-based test generators using proptest.
//!
//! Provides strategies for generating input lines and operation sequences
//! against a chunk list, plus the property tests that run them against a
//! simple `Vec` model.

use proptest::prelude::*;
use strata_core::TokenKind;

/// Strategy for generating a single input line.
///
/// Lines mix short words, long words, digit runs, dotted quads and paths so
/// that every tokenizer kind has something to find.
pub fn line_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            3 => "[a-z]{1,9}",
            1 => "[0-9]{1,7}",
            1 => (0u8..=255, 0u8..=255, 0u8..=255, 0u8..=255)
                .prop_map(|(a, b, c, d)| format!("{a}.{b}.{c}.{d}")),
            1 => prop::collection::vec("[a-z]{1,6}", 1..4)
                .prop_map(|parts| format!("/{}", parts.join("/"))),
        ],
        0..6,
    )
    .prop_map(|words| words.join(" "))
}

/// Strategy for generating a batch of input lines.
pub fn lines_strategy(max_lines: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(line_strategy(), 0..max_lines)
}

/// Strategy for generating a chunk size, small enough to exercise
/// chunk boundaries.
pub fn chunk_size_strategy() -> impl Strategy<Value = usize> {
    1usize..8
}

/// Strategy for generating a tokenizer kind.
pub fn token_kind_strategy() -> impl Strategy<Value = TokenKind> {
    prop::sample::select(TokenKind::ALL.to_vec())
}

/// An operation against a chunk list.
#[derive(Debug, Clone)]
pub enum ListOperation {
    /// Push a line
    Push(String),
    /// Clear the list
    Clear,
    /// Take a plain snapshot
    Snapshot,
    /// Toggle token mode for a kind
    Toggle(TokenKind),
    /// Switch token mode on or off
    SetTokenize(bool),
}

/// Strategy for generating list operations.
pub fn list_operation_strategy() -> impl Strategy<Value = ListOperation> {
    prop_oneof![
        8 => line_strategy().prop_map(ListOperation::Push),
        1 => Just(ListOperation::Clear),
        3 => Just(ListOperation::Snapshot),
        1 => token_kind_strategy().prop_map(ListOperation::Toggle),
        1 => any::<bool>().prop_map(ListOperation::SetTokenize),
    ]
}

/// Strategy for generating a sequence of operations.
pub fn operation_sequence_strategy(
    min_ops: usize,
    max_ops: usize,
) -> impl Strategy<Value = Vec<ListOperation>> {
    prop::collection::vec(list_operation_strategy(), min_ops..max_ops)
}

/// Configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self::with_cases(256)
    }
}

impl PropTestConfig {
    /// Creates a configuration running `cases` cases, with a shrink budget
    /// proportional to it.
    #[must_use]
    pub fn with_cases(cases: u32) -> Self {
        Self {
            cases,
            max_shrink_iters: cases.saturating_mul(4),
        }
    }

    /// Creates a configuration for quick tests.
    #[must_use]
    pub fn quick() -> Self {
        Self::with_cases(32)
    }

    /// Creates a configuration for thorough tests.
    #[must_use]
    pub fn thorough() -> Self {
        Self::with_cases(1024)
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}
