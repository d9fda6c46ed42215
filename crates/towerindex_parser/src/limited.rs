//! Restricted-set parsing.

use std::collections::HashSet;

use towerindex_aliases::AliasRegistry;
use towerindex_foundation::{EntityKind, to_alias_normal_form};
use tracing::debug;

use crate::entity::{EntityMatch, EntityParser, NoMatch};

/// Matches canonicals of one kind, optionally limited to a permitted subset.
///
/// The per-kind parsers are thin wrappers over this one.
#[derive(Clone, Debug)]
pub struct LimitedSetParser<'r> {
    registry: &'r AliasRegistry,
    kind: EntityKind,
    permitted: Option<HashSet<String>>,
}

impl<'r> LimitedSetParser<'r> {
    /// Creates a parser that accepts every canonical of `kind`.
    #[must_use]
    pub fn new(registry: &'r AliasRegistry, kind: EntityKind) -> Self {
        Self {
            registry,
            kind,
            permitted: None,
        }
    }

    /// Restricts the parser to the given values.
    ///
    /// Values may be canonicals or aliases; aliases are canonicalized. An
    /// empty list permits nothing.
    #[must_use]
    pub fn permitting<I, S>(mut self, permitted: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let registry = self.registry;
        self.permitted = Some(
            permitted
                .into_iter()
                .map(|value| {
                    let value = value.as_ref();
                    registry
                        .canonical_form_of(value)
                        .map_or_else(|| to_alias_normal_form(value), str::to_string)
                })
                .collect(),
        );
        self
    }

    /// The kind this parser produces.
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Returns true if `canonical` passes the restriction.
    #[must_use]
    pub fn is_permitted(&self, canonical: &str) -> bool {
        self.permitted.as_ref().is_none_or(|p| p.contains(canonical))
    }
}

impl EntityParser for LimitedSetParser<'_> {
    fn kinds(&self) -> Vec<EntityKind> {
        vec![self.kind]
    }

    fn parse(&self, token: &str) -> Result<EntityMatch, NoMatch> {
        let value = token.trim().to_lowercase();
        if self.registry.is_of_kind(self.kind, &value) && self.is_permitted(&value) {
            Ok(EntityMatch::new(self.kind, value))
        } else {
            debug!(token, kind = %self.kind, "token not in permitted set");
            Err(NoMatch::new(token, self.kinds()))
        }
    }
}
