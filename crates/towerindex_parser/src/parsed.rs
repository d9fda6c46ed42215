//! Accumulated parse results.
//!
//! A [`Parsed`] holds at most one value per [`EntityKind`] plus the problems
//! found while parsing. Results from several arguments are combined with
//! [`Parsed::merge`].

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use thiserror::Error;
use towerindex_foundation::{EntityKind, Error};
use tracing::debug;

use crate::entity::{EntityMatch, NoMatch};

/// A problem recorded while parsing command arguments.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParsedError {
    /// No parser accepted the token.
    #[error(transparent)]
    NoMatch(#[from] NoMatch),

    /// The raw argument did not canonicalize.
    #[error("canonical not found for `{token}`")]
    CanonicalNotFound {
        /// The raw argument.
        token: String,
    },

    /// Two arguments produced different values of the same kind.
    #[error("conflicting {kind} values: `{left}` and `{right}`")]
    Conflict {
        /// The contested kind.
        kind: EntityKind,
        /// Value already present.
        left: String,
        /// Value being merged in.
        right: String,
    },
}

/// Values and errors gathered from one or more parsed arguments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Parsed {
    values: BTreeMap<EntityKind, String>,
    errors: Vec<ParsedError>,
    // Kinds that saw two different values, with the first of them. A
    // contested kind never holds a value again.
    contested: BTreeMap<EntityKind, String>,
}

impl Parsed {
    /// Creates an empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a result holding one error.
    #[must_use]
    pub fn from_error(error: ParsedError) -> Self {
        Self {
            errors: vec![error],
            ..Self::default()
        }
    }

    /// Adds an error.
    pub fn add_error(&mut self, error: ParsedError) {
        self.errors.push(error);
    }

    /// Builder form of [`add_error`](Self::add_error).
    #[must_use]
    pub fn with_error(mut self, error: ParsedError) -> Self {
        self.add_error(error);
        self
    }

    /// Combines two results.
    ///
    /// A kind populated on one side only is taken from that side. Equal
    /// values are kept. Different values are dropped and recorded as a
    /// [`ParsedError::Conflict`], and the kind stays contested: any later
    /// different value for it is another conflict, never a fill. Errors from
    /// `self` come first, then errors from `other`, then new conflicts.
    #[must_use]
    pub fn merge(self, other: Parsed) -> Parsed {
        let Parsed {
            mut values,
            mut errors,
            mut contested,
        } = self;
        errors.extend(other.errors);

        for (kind, first) in other.contested {
            let left = values.remove(&kind);
            if let Entry::Vacant(entry) = contested.entry(kind) {
                match left {
                    Some(left) => {
                        record_conflict(&mut errors, kind, &left, first);
                        entry.insert(left);
                    }
                    None => {
                        entry.insert(first);
                    }
                }
            }
        }

        for (kind, right) in other.values {
            if let Some(first) = contested.get(&kind) {
                record_conflict(&mut errors, kind, first, right);
                continue;
            }
            match values.entry(kind) {
                Entry::Vacant(entry) => {
                    entry.insert(right);
                }
                Entry::Occupied(entry) if *entry.get() == right => {}
                Entry::Occupied(entry) => {
                    let left = entry.remove();
                    record_conflict(&mut errors, kind, &left, right);
                    contested.insert(kind, left);
                }
            }
        }

        Parsed {
            values,
            errors,
            contested,
        }
    }

    /// Merges every result in order, starting from empty.
    #[must_use]
    pub fn merge_all<I: IntoIterator<Item = Parsed>>(results: I) -> Parsed {
        results.into_iter().fold(Parsed::new(), Parsed::merge)
    }

    /// Returns the value of a kind, if populated.
    #[must_use]
    pub fn get(&self, kind: EntityKind) -> Option<&str> {
        self.values.get(&kind).map(String::as_str)
    }

    /// Returns every populated kind and value, in kind order.
    pub fn values(&self) -> impl Iterator<Item = (EntityKind, &str)> {
        self.values.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// The recorded errors, in merge order.
    #[must_use]
    pub fn errors(&self) -> &[ParsedError] {
        &self.errors
    }

    /// Returns true if any error was recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns true if two arguments disagreed on `kind`.
    #[must_use]
    pub fn is_contested(&self, kind: EntityKind) -> bool {
        self.contested.contains_key(&kind)
    }

    /// Returns true if any kind is populated.
    #[must_use]
    pub fn has_any(&self) -> bool {
        !self.values.is_empty()
    }

    /// The base tower, if parsed.
    #[must_use]
    pub fn tower(&self) -> Option<&str> {
        self.get(EntityKind::Tower)
    }

    /// The tower upgrade, if parsed.
    #[must_use]
    pub fn tower_upgrade(&self) -> Option<&str> {
        self.get(EntityKind::TowerUpgrade)
    }

    /// The tower path, if parsed.
    #[must_use]
    pub fn tower_path(&self) -> Option<&str> {
        self.get(EntityKind::TowerPath)
    }

    /// The hero, if parsed.
    #[must_use]
    pub fn hero(&self) -> Option<&str> {
        self.get(EntityKind::Hero)
    }

    /// The map, if parsed.
    #[must_use]
    pub fn map(&self) -> Option<&str> {
        self.get(EntityKind::Map)
    }

    /// The map difficulty, if parsed.
    #[must_use]
    pub fn map_difficulty(&self) -> Option<&str> {
        self.get(EntityKind::MapDifficulty)
    }

    /// The person's name, if parsed.
    #[must_use]
    pub fn person(&self) -> Option<&str> {
        self.get(EntityKind::Person)
    }
}

fn record_conflict(errors: &mut Vec<ParsedError>, kind: EntityKind, left: &str, right: String) {
    if left != right {
        debug!(%kind, %left, %right, "conflicting parsed values");
        errors.push(ParsedError::Conflict {
            kind,
            left: left.to_string(),
            right,
        });
    }
}

impl From<ParsedError> for Error {
    fn from(error: ParsedError) -> Self {
        match error {
            ParsedError::NoMatch(no_match) => no_match.into(),
            ParsedError::CanonicalNotFound { token } => Error::not_found(token, None),
            ParsedError::Conflict { kind, left, right } => Error::conflict(kind, left, right),
        }
    }
}

impl From<EntityMatch> for Parsed {
    fn from(matched: EntityMatch) -> Self {
        Self {
            values: BTreeMap::from([(matched.kind, matched.value)]),
            ..Self::default()
        }
    }
}

impl From<NoMatch> for Parsed {
    fn from(no_match: NoMatch) -> Self {
        Self::from_error(no_match.into())
    }
}

impl From<Result<EntityMatch, NoMatch>> for Parsed {
    fn from(result: Result<EntityMatch, NoMatch>) -> Self {
        result.map_or_else(Parsed::from, Parsed::from)
    }
}
