//! Alias corpus format.
//!
//! A corpus is a TOML document holding two arrays of records:
//!
//! ```toml
//! [[group]]
//! canonical = "quincy"
//! aliases = ["quincy", "q"]
//! directory = "heroes"
//!
//! [[tower]]
//! canonical = "dart_monkey"
//! aliases = ["dart monkey", "dart"]
//! directory = "towers/primary"
//! upgrades = [
//!     ["sharp shots", "razor sharp shots", "spike-o-pult", "juggernaut", "ultra-juggernaut"],
//!     ["quick shots", "very quick shots", "triple shot", "super monkey fan club", "plasma monkey fan club"],
//!     ["long range darts", "enhanced eyesight", "crossbow", "sharp shooter", "crossbow master"],
//! ]
//! ```
//!
//! Tower records are compact: [`AliasCorpus::expand`] turns each into the
//! tower group, fifteen single-path upgrade groups, the `#222` base-line
//! group, and three tower path groups.

use serde::{Deserialize, Serialize};
use towerindex_foundation::{Error, ErrorContext, Result, TowerPathName, to_alias_normal_form};

/// Number of upgrade paths per tower.
pub const PATH_COUNT: usize = 3;

/// Number of upgrade tiers per path.
pub const TIER_COUNT: usize = 5;

/// A plain alias record: one canonical, its aliases, and its directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRecord {
    /// Canonical form, already in alias normal form.
    pub canonical: String,
    /// User-facing synonyms. The first one is the display name.
    pub aliases: Vec<String>,
    /// Slash-separated directory position (`towers/primary`, `heroes`).
    pub directory: String,
}

/// A compact tower record with upgrade names for every path and tier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TowerRecord {
    /// Tower canonical (`dart_monkey`).
    pub canonical: String,
    /// Tower aliases. The first one is the display name.
    pub aliases: Vec<String>,
    /// Directory position (`towers/primary`).
    pub directory: String,
    /// Upgrade names, `upgrades[path - 1][tier - 1]`.
    pub upgrades: Vec<Vec<String>>,
}

/// The raw alias corpus as deserialized from static data.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasCorpus {
    /// Plain alias groups.
    #[serde(default, rename = "group")]
    pub groups: Vec<GroupRecord>,
    /// Compact tower records.
    #[serde(default, rename = "tower")]
    pub towers: Vec<TowerRecord>,
}

impl AliasCorpus {
    /// Creates an empty corpus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a corpus from TOML source.
    ///
    /// # Errors
    ///
    /// Returns a `Deserialize` error if the source is not a valid corpus.
    pub fn from_toml(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| Error::deserialize("toml", e))
    }

    /// Appends every record of `other` after this corpus's records.
    pub fn extend(&mut self, other: AliasCorpus) {
        self.groups.extend(other.groups);
        self.towers.extend(other.towers);
    }

    /// Builder form of [`extend`](Self::extend).
    #[must_use]
    pub fn with(mut self, other: AliasCorpus) -> Self {
        self.extend(other);
        self
    }

    /// Adds a plain group record.
    #[must_use]
    pub fn with_group(
        mut self,
        canonical: impl Into<String>,
        aliases: &[&str],
        directory: impl Into<String>,
    ) -> Self {
        self.groups.push(GroupRecord {
            canonical: canonical.into(),
            aliases: aliases.iter().map(|a| (*a).to_string()).collect(),
            directory: directory.into(),
        });
        self
    }

    /// Expands the corpus into flat group records, towers first.
    ///
    /// # Errors
    ///
    /// Returns a `MalformedCorpus` error if a tower record does not carry
    /// exactly three paths of five upgrade names.
    pub fn expand(&self) -> Result<Vec<GroupRecord>> {
        let mut out = Vec::with_capacity(self.groups.len() + self.towers.len() * 20);
        for tower in &self.towers {
            expand_tower(tower, &mut out).map_err(|e| {
                e.with_context(ErrorContext::new().with_frame(format!("tower {}", tower.canonical)))
            })?;
        }
        out.extend(self.groups.iter().cloned());
        Ok(out)
    }
}

fn expand_tower(tower: &TowerRecord, out: &mut Vec<GroupRecord>) -> Result<()> {
    if tower.upgrades.len() != PATH_COUNT
        || tower.upgrades.iter().any(|names| names.len() != TIER_COUNT)
    {
        return Err(Error::malformed_corpus(format!(
            "tower {} must list {PATH_COUNT} paths of {TIER_COUNT} upgrades",
            tower.canonical
        )));
    }

    out.push(GroupRecord {
        canonical: tower.canonical.clone(),
        aliases: tower.aliases.clone(),
        directory: tower.directory.clone(),
    });

    for (path_index, names) in tower.upgrades.iter().enumerate() {
        for (tier_index, name) in names.iter().enumerate() {
            out.push(GroupRecord {
                canonical: format!(
                    "{}#{}",
                    tower.canonical,
                    single_path_digits(path_index, tier_index + 1)
                ),
                aliases: vec![name.clone()],
                directory: tower.directory.clone(),
            });
        }
    }

    let display = tower.aliases.first().unwrap_or(&tower.canonical);
    out.push(GroupRecord {
        canonical: format!("{}#222", tower.canonical),
        aliases: vec![format!("{display} 2-2-2")],
        directory: tower.directory.clone(),
    });

    for path in TowerPathName::ALL {
        let word = path.word();
        let aliases = tower
            .aliases
            .iter()
            .map(|a| to_alias_normal_form(a))
            .flat_map(|a| {
                [
                    format!("{a}_{word}"),
                    format!("{a}_{word}_path"),
                    format!("{word}_path_{a}"),
                ]
            })
            .collect();
        out.push(GroupRecord {
            canonical: format!("{}#{}", tower.canonical, path.suffix()),
            aliases,
            directory: tower.directory.clone(),
        });
    }

    Ok(())
}

/// Digit string with `tier` at `path_index` and zero elsewhere.
fn single_path_digits(path_index: usize, tier: usize) -> String {
    (0..PATH_COUNT)
        .map(|i| if i == path_index { tier.to_string() } else { "0".to_string() })
        .collect()
}
