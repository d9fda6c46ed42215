//! Core types, entity kinds, normal forms, and errors for towerindex.
//!
//! This crate provides:
//! - [`EntityKind`] - The closed set of entity kinds a canonical can belong to
//! - [`TowerCategory`] - Tower groupings (primary, military, magic, support)
//! - [`Error`] - Rich error types with context
//! - Normal form helpers ([`to_alias_normal_form`], [`to_index_normal_form`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod kind;
pub mod normal;

pub use error::{Error, ErrorContext, ErrorKind};
pub use kind::{EntityKind, TowerCategory, TowerPathName};
pub use normal::{to_alias_normal_form, to_index_normal_form, to_title_case};

/// Result type for towerindex operations.
pub type Result<T> = std::result::Result<T, Error>;
