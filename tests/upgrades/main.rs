//! Integration tests for Layer 2: Upgrades
//!
//! Tests for the upgrade-set codec, tower helpers over the standard corpus,
//! and cost calculation against literal cost tables.

mod codec;
mod cost;
