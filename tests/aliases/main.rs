//! Integration tests for Layer 1: Aliases
//!
//! Tests for corpus loading, registry configuration, canonicalization, and
//! kind and category queries over the standard corpus.

mod corpus;
mod registry;
