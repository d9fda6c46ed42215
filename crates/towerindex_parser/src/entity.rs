//! The entity parser contract.

use std::fmt;

use thiserror::Error;
use towerindex_foundation::{EntityKind, Error};

/// A canonical value tagged with its kind.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EntityMatch {
    /// The kind the parser matched.
    pub kind: EntityKind,
    /// The matched value: a canonical, or the name of a person.
    pub value: String,
}

impl EntityMatch {
    /// Creates a new match.
    #[must_use]
    pub fn new(kind: EntityKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// A token no parser accepted.
///
/// This is an expected outcome, not a failure of the parser.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("`{token}` is not a permitted {}", KindList(.expected))]
pub struct NoMatch {
    /// The token as given.
    pub token: String,
    /// Every kind that was tried, in order.
    pub expected: Vec<EntityKind>,
}

impl NoMatch {
    /// Creates a no-match outcome.
    #[must_use]
    pub fn new(token: impl Into<String>, expected: Vec<EntityKind>) -> Self {
        Self {
            token: token.into(),
            expected,
        }
    }
}

impl From<NoMatch> for Error {
    fn from(no_match: NoMatch) -> Self {
        let expected = match no_match.expected.as_slice() {
            [kind] => Some(*kind),
            _ => None,
        };
        Error::not_found(no_match.token, expected)
    }
}

struct KindList<'a>(&'a [EntityKind]);

impl fmt::Display for KindList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            [] => f.write_str("value"),
            [only] => write!(f, "{only}"),
            [first, second] => write!(f, "{first} or {second}"),
            [kinds @ .., last] => {
                for kind in kinds {
                    write!(f, "{kind}, ")?;
                }
                write!(f, "or {last}")
            }
        }
    }
}

/// Parses one canonical token into one kind of entity.
///
/// Parsers expect tokens that have already been canonicalized by the alias
/// registry. A token outside a parser's permitted set is a [`NoMatch`], even
/// when it names a real entity.
pub trait EntityParser: Send + Sync {
    /// The kinds this parser can produce, in the order it tries them.
    fn kinds(&self) -> Vec<EntityKind>;

    /// Parses a single token.
    ///
    /// # Errors
    ///
    /// Returns [`NoMatch`] when the token is not a permitted value.
    fn parse(&self, token: &str) -> Result<EntityMatch, NoMatch>;
}

impl<P: EntityParser + ?Sized> EntityParser for Box<P> {
    fn kinds(&self) -> Vec<EntityKind> {
        (**self).kinds()
    }

    fn parse(&self, token: &str) -> Result<EntityMatch, NoMatch> {
        (**self).parse(token)
    }
}

impl<P: EntityParser + ?Sized> EntityParser for &P {
    fn kinds(&self) -> Vec<EntityKind> {
        (**self).kinds()
    }

    fn parse(&self, token: &str) -> Result<EntityMatch, NoMatch> {
        (**self).parse(token)
    }
}
