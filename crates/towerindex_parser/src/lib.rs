//! Entity parsers for towerindex commands.
//!
//! Command arguments go through the alias registry, then through parsers that
//! accept one kind of entity each, and the per-argument results are merged.
//!
//! # Architecture
//!
//! ```text
//! "\"spike-o-pult\" logs user#someone"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ARG TOKENIZER   │  → ["spike-o-pult", "logs", "user#someone"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ CANONICALIZE    │  → ["dart_monkey#300", "logs", "user#someone"]
//! │ (AliasRegistry) │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ENTITY PARSERS  │  → TowerUpgrade(dart_monkey#300), Map(logs), Person(someone)
//! │ (OrParser)      │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MERGE           │  → Parsed { tower_upgrade, map, person }
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`entity`] - The parser contract and its match/no-match values
//! - [`limited`] - Restricted-set matching shared by the per-kind parsers
//! - [`kinds`] - Tower, upgrade, path, hero, map, difficulty, and person parsers
//! - [`or`] - Ordered alternation
//! - [`parsed`] - Mergeable results
//! - [`command`] - Whole-command parsing
//! - [`tokenizer`] - Command line splitting

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod entity;
pub mod kinds;
pub mod limited;
pub mod or;
pub mod parsed;
pub mod tokenizer;

pub use command::CommandParser;
pub use entity::{EntityMatch, EntityParser, NoMatch};
pub use kinds::{
    HeroParser, MapDifficultyParser, MapParser, PersonParser, TowerParser, TowerPathParser,
    TowerUpgradeParser,
};
pub use limited::LimitedSetParser;
pub use or::OrParser;
pub use parsed::{Parsed, ParsedError};
pub use tokenizer::{ArgToken, ArgTokenizer};
