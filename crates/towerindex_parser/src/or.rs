//! Ordered alternation over entity parsers.

use std::fmt;

use towerindex_foundation::EntityKind;
use tracing::debug;

use crate::entity::{EntityMatch, EntityParser, NoMatch};

/// Tries each parser in order and returns the first match.
///
/// Order is priority: a token two parsers would both accept goes to the one
/// added first. When nothing matches, a single [`NoMatch`] lists every kind
/// that was tried.
#[derive(Default)]
pub struct OrParser<'p> {
    parsers: Vec<Box<dyn EntityParser + 'p>>,
}

impl<'p> OrParser<'p> {
    /// Creates an empty alternation, which matches nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parser with lower priority than the ones already present.
    #[must_use]
    pub fn or(mut self, parser: impl EntityParser + 'p) -> Self {
        self.parsers.push(Box::new(parser));
        self
    }

    /// Number of alternatives.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    /// Returns true if there are no alternatives.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }
}

impl<'p> FromIterator<Box<dyn EntityParser + 'p>> for OrParser<'p> {
    fn from_iter<I: IntoIterator<Item = Box<dyn EntityParser + 'p>>>(iter: I) -> Self {
        Self {
            parsers: iter.into_iter().collect(),
        }
    }
}

impl fmt::Debug for OrParser<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrParser").field("kinds", &self.kinds()).finish()
    }
}

impl EntityParser for OrParser<'_> {
    fn kinds(&self) -> Vec<EntityKind> {
        self.parsers.iter().flat_map(|p| p.kinds()).collect()
    }

    fn parse(&self, token: &str) -> Result<EntityMatch, NoMatch> {
        if let Some(found) = self.parsers.iter().find_map(|p| p.parse(token).ok()) {
            return Ok(found);
        }
        let expected = self.kinds();
        debug!(token, ?expected, "no alternative matched");
        Err(NoMatch::new(token, expected))
    }
}
