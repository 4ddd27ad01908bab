//! # Strata Testkit
//!
//! Test utilities for Strata.
//!
//! This crate provides:
//! - Fixtures: ready-made chunk lists and builders
//! - Property-based test generators using proptest
//! - Stress harnesses for concurrent producers and snapshot readers
//!
//! ## Usage
//!
//! ```rust
//! use strata_testkit::prelude::*;
//!
//! let list = verbatim_list(2);
//! push_all(&list, ["a", "b", "c"]);
//! assert_eq!(snapshot_texts(&list.snapshot()), ["a", "b", "c"]);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod stress;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::stress::*;
}

pub use fixtures::*;
pub use generators::*;
pub use stress::*;
