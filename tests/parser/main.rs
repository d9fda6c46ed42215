//! Integration tests for the towerindex_parser crate.
//!
//! Tests for the command parsing pipeline:
//! - Tokenization
//! - Per-kind entity parsers
//! - Ordered alternation
//! - Result merging
//! - Whole-command parsing

mod entity_parser_tests;
mod or_parser_tests;

use towerindex_aliases::AliasRegistry;

/// The standard registry shared by these tests.
pub fn registry() -> AliasRegistry {
    AliasRegistry::standard().unwrap()
}
