//! Alias corpus and canonical-name registry for towerindex.
//!
//! User-typed names ("dart", "Spike-O-Pult", "wiz 0-3-0") resolve to one
//! canonical string per entity through an [`AliasRegistry`] built once from
//! an [`AliasCorpus`].
//!
//! # Modules
//!
//! - [`corpus`] - TOML corpus records and tower record expansion
//! - [`config`] - Category representatives, water entities, directory roots
//! - [`group`] - The alias group value type
//! - [`registry`] - Canonicalization and kind/category queries
//! - [`stdlib`] - The embedded standard corpus

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod corpus;
pub mod group;
pub mod registry;
pub mod stdlib;

pub use config::{CategoryRepresentative, DirectoryRoots, RegistryConfig};
pub use corpus::{AliasCorpus, GroupRecord, PATH_COUNT, TIER_COUNT, TowerRecord};
pub use group::AliasGroup;
pub use registry::{AliasRegistry, PERSON_PREFIX};
pub use stdlib::standard_corpus;
