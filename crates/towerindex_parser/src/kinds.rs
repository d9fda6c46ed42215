//! One parser per entity kind.

use std::collections::HashSet;

use towerindex_aliases::{AliasRegistry, PERSON_PREFIX};
use towerindex_foundation::EntityKind;
use tracing::debug;

use crate::entity::{EntityMatch, EntityParser, NoMatch};
use crate::limited::LimitedSetParser;

macro_rules! kind_parser {
    ($(#[$doc:meta])* $name:ident, $kind:expr) => {
        $(#[$doc])*
        #[derive(Clone, Debug)]
        pub struct $name<'r>(LimitedSetParser<'r>);

        impl<'r> $name<'r> {
            /// Creates a parser over every canonical of this kind.
            #[must_use]
            pub fn new(registry: &'r AliasRegistry) -> Self {
                Self(LimitedSetParser::new(registry, $kind))
            }

            /// Restricts the parser to the given canonicals or aliases.
            #[must_use]
            pub fn permitting<I, S>(self, permitted: I) -> Self
            where
                I: IntoIterator<Item = S>,
                S: AsRef<str>,
            {
                Self(self.0.permitting(permitted))
            }
        }

        impl EntityParser for $name<'_> {
            fn kinds(&self) -> Vec<EntityKind> {
                self.0.kinds()
            }

            fn parse(&self, token: &str) -> Result<EntityMatch, NoMatch> {
                self.0.parse(token)
            }
        }
    };
}

kind_parser!(
    /// Matches base towers (`dart_monkey`).
    TowerParser,
    EntityKind::Tower
);

kind_parser!(
    /// Matches tower upgrades (`dart_monkey#300`).
    TowerUpgradeParser,
    EntityKind::TowerUpgrade
);

kind_parser!(
    /// Matches tower paths (`dart_monkey#top-path`).
    TowerPathParser,
    EntityKind::TowerPath
);

kind_parser!(
    /// Matches heroes.
    HeroParser,
    EntityKind::Hero
);

kind_parser!(
    /// Matches maps.
    MapParser,
    EntityKind::Map
);

kind_parser!(
    /// Matches map difficulties.
    MapDifficultyParser,
    EntityKind::MapDifficulty
);

/// Matches `user#name` tokens and yields the lower-cased name.
///
/// Persons are open-ended, so no registry is needed.
#[derive(Clone, Debug, Default)]
pub struct PersonParser {
    permitted: Option<HashSet<String>>,
}

impl PersonParser {
    /// Creates a parser that accepts any name.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the parser to the given names (without the prefix).
    #[must_use]
    pub fn permitting<I, S>(mut self, permitted: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.permitted = Some(
            permitted
                .into_iter()
                .map(|name| name.as_ref().trim().to_lowercase())
                .collect(),
        );
        self
    }
}

impl EntityParser for PersonParser {
    fn kinds(&self) -> Vec<EntityKind> {
        vec![EntityKind::Person]
    }

    fn parse(&self, token: &str) -> Result<EntityMatch, NoMatch> {
        let lower = token.trim().to_lowercase();
        lower
            .strip_prefix(PERSON_PREFIX)
            .filter(|name| !name.is_empty())
            .filter(|name| self.permitted.as_ref().is_none_or(|p| p.contains(*name)))
            .map(|name| EntityMatch::new(EntityKind::Person, name))
            .ok_or_else(|| {
                debug!(token, "not a permitted person");
                NoMatch::new(token, self.kinds())
            })
    }
}
