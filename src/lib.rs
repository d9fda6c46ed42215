//! Towerindex - Alias resolution and upgrade arithmetic for tower defense index lookups
//!
//! This crate re-exports all layers of the towerindex system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: towerindex_parser     — Entity parsers, OrParser, Parsed, CommandParser
//! Layer 2: towerindex_upgrades   — Upgrade-set codec, tower helpers, cost calculation
//! Layer 1: towerindex_aliases    — Alias corpus, registry config, AliasRegistry
//! Layer 0: towerindex_foundation — Core types (EntityKind, Error, normal forms)
//! ```

pub use towerindex_aliases as aliases;
pub use towerindex_foundation as foundation;
pub use towerindex_parser as parser;
pub use towerindex_upgrades as upgrades;
