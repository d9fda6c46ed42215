//! The alias registry.
//!
//! Answers canonicalization, group-membership, and kind-membership queries
//! over an immutable, validated alias corpus. Derived indices are built on
//! first use and memoized for the lifetime of the registry.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use towerindex_foundation::{
    EntityKind, Error, ErrorContext, Result, TowerCategory, TowerPathName, to_alias_normal_form,
};
use tracing::{debug, info, trace, warn};

use crate::config::{DirectoryRoots, RegistryConfig};
use crate::corpus::{AliasCorpus, GroupRecord};
use crate::group::AliasGroup;

/// Prefix that marks a person token (`user#name`).
pub const PERSON_PREFIX: &str = "user#";

/// Canonicals per kind, in corpus order, with membership sets.
#[derive(Debug, Default)]
struct KindIndex {
    canonicals: HashMap<EntityKind, Vec<String>>,
    members: HashMap<EntityKind, HashSet<String>>,
}

impl KindIndex {
    fn build(groups: &[AliasGroup]) -> Self {
        let mut index = Self::default();
        for group in groups {
            match group.kind {
                // Tower paths are derived from the towers below.
                Some(EntityKind::TowerPath) | None => {}
                Some(kind) => index.push(kind, &group.canonical),
            }
        }
        let towers = index.canonicals.get(&EntityKind::Tower).cloned().unwrap_or_default();
        for tower in towers {
            for path in TowerPathName::ALL {
                index.push(EntityKind::TowerPath, &format!("{tower}#{}", path.suffix()));
            }
        }
        index
    }

    fn push(&mut self, kind: EntityKind, canonical: &str) {
        if self.members.entry(kind).or_default().insert(canonical.to_string()) {
            self.canonicals.entry(kind).or_default().push(canonical.to_string());
        }
    }
}

/// Registry of alias groups loaded once at startup.
///
/// The registry is read-only after construction and can be shared across
/// threads by reference.
#[derive(Debug)]
pub struct AliasRegistry {
    groups: Vec<AliasGroup>,
    /// Normalized alias -> group index. The first group to claim an alias keeps it.
    by_alias: HashMap<String, usize>,
    /// Canonical -> first group index with that canonical.
    by_canonical: HashMap<String, usize>,
    /// Category -> directory of its representative tower.
    category_directories: Vec<(TowerCategory, String)>,
    water_towers: Vec<String>,
    config: RegistryConfig,
    kind_index: OnceLock<KindIndex>,
    directory_index: OnceLock<HashMap<String, Vec<usize>>>,
}

impl AliasRegistry {
    /// Builds a registry from a corpus and configuration.
    ///
    /// # Errors
    ///
    /// Returns a `MalformedCorpus` error if a record is malformed, a
    /// canonical is repeated within one kind, or a configured representative
    /// does not resolve to a tower, or a water entry resolves to neither a
    /// tower nor a hero.
    pub fn new(corpus: &AliasCorpus, config: RegistryConfig) -> Result<Self> {
        let records = corpus.expand()?;
        let mut groups = Vec::with_capacity(records.len());
        let mut seen: HashSet<(Option<EntityKind>, String)> = HashSet::new();
        let mut by_canonical = HashMap::new();

        for record in records {
            let group = build_group(record, &config.directories)?;
            if !seen.insert((group.kind, group.canonical.clone())) {
                return Err(Error::malformed_corpus(format!(
                    "duplicate canonical `{}` in {}",
                    group.canonical, group.directory
                )));
            }
            by_canonical.entry(group.canonical.clone()).or_insert(groups.len());
            groups.push(group);
        }

        // Canonicals claim themselves before any alias is registered so that
        // canonicalizing a canonical always returns it unchanged.
        let mut by_alias: HashMap<String, usize> = by_canonical.clone();
        for (index, group) in groups.iter().enumerate() {
            for alias in &group.aliases {
                match by_alias.entry(alias.clone()) {
                    Entry::Vacant(entry) => {
                        entry.insert(index);
                    }
                    Entry::Occupied(entry) if *entry.get() != index => {
                        warn!(
                            alias = %alias,
                            kept = %groups[*entry.get()].canonical,
                            ignored = %group.canonical,
                            "alias shared by multiple groups"
                        );
                    }
                    Entry::Occupied(_) => {}
                }
            }
        }

        let mut registry = Self {
            groups,
            by_alias,
            by_canonical,
            category_directories: Vec::new(),
            water_towers: Vec::new(),
            config,
            kind_index: OnceLock::new(),
            directory_index: OnceLock::new(),
        };

        let category_directories = registry
            .config
            .categories
            .iter()
            .map(|rep| {
                let group = registry.resolve_configured_tower(&rep.representative)?;
                debug!(category = %rep.category, directory = %group.directory, "category resolved");
                Ok((rep.category, group.directory.clone()))
            })
            .collect::<Result<Vec<_>>>()?;
        let water_towers = registry
            .config
            .water_towers
            .iter()
            .map(|alias| registry.resolve_water_entity(alias).map(|g| g.canonical.clone()))
            .collect::<Result<Vec<_>>>()?;
        registry.category_directories = category_directories;
        registry.water_towers = water_towers;

        info!(
            groups = registry.groups.len(),
            aliases = registry.by_alias.len(),
            "alias registry loaded"
        );
        Ok(registry)
    }

    /// Builds a registry from TOML corpus and optional TOML configuration.
    ///
    /// # Errors
    ///
    /// Returns a `Deserialize` error for invalid TOML, or any error
    /// [`new`](Self::new) returns.
    pub fn from_toml(corpus: &str, config: Option<&str>) -> Result<Self> {
        let corpus = AliasCorpus::from_toml(corpus)?;
        let config = config.map(RegistryConfig::from_toml).transpose()?.unwrap_or_default();
        Self::new(&corpus, config)
    }

    fn resolve_configured_tower(&self, alias: &str) -> Result<&AliasGroup> {
        self.canonical_form_of(alias)
            .and_then(|c| self.group_of_kind(c, EntityKind::Tower))
            .ok_or_else(|| {
                Error::malformed_corpus(format!("`{alias}` does not resolve to a tower"))
                    .with_context(ErrorContext::new().with_source("registry config"))
            })
    }

    fn resolve_water_entity(&self, alias: &str) -> Result<&AliasGroup> {
        self.canonical_form_of(alias)
            .and_then(|c| {
                self.group_of_kind(c, EntityKind::Tower)
                    .or_else(|| self.group_of_kind(c, EntityKind::Hero))
            })
            .ok_or_else(|| {
                Error::malformed_corpus(format!("`{alias}` does not resolve to a tower or hero"))
                    .with_context(ErrorContext::new().with_source("registry config"))
            })
    }

    // =========================================================================
    // Canonicalization
    // =========================================================================

    /// Returns the canonical form of a raw token.
    ///
    /// The token is trimmed and normalized before lookup; the first group to
    /// claim the normalized alias wins.
    #[must_use]
    pub fn canonical_form_of(&self, raw: &str) -> Option<&str> {
        let normal = to_alias_normal_form(raw);
        let found = self.lookup(&normal);
        trace!(raw, canonical = ?found, "canonical lookup");
        found
    }

    /// Canonicalizes a command argument.
    ///
    /// Like [`canonical_form_of`](Self::canonical_form_of), but also accepts
    /// `user#name` person tokens and tower upgrade shorthand written with any
    /// tower alias (`dart 3-0-0`, `wiz#030`).
    #[must_use]
    pub fn canonicalize_arg(&self, raw: &str) -> Option<String> {
        let normal = to_alias_normal_form(raw);
        if let Some(canonical) = self.lookup(&normal) {
            return Some(canonical.to_string());
        }
        if Self::is_person(&normal) {
            return Some(normal);
        }
        self.upgrade_shorthand(&normal)
    }

    fn lookup(&self, normal: &str) -> Option<&str> {
        self.by_alias
            .get(normal)
            .map(|&index| self.groups[index].canonical.as_str())
    }

    fn upgrade_shorthand(&self, normal: &str) -> Option<String> {
        let split = normal.rfind(['#', '_'])?;
        let digits: String = normal[split + 1..].chars().filter(|&c| c != '-').collect();
        if digits.len() != 3 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let tower = self.lookup(&normal[..split]).filter(|c| self.is_tower(c))?;
        let candidate = format!("{tower}#{digits}");
        self.is_tower_upgrade(&candidate).then_some(candidate)
    }

    // =========================================================================
    // Groups
    // =========================================================================

    /// Returns every group, in corpus order.
    pub fn groups(&self) -> impl Iterator<Item = &AliasGroup> {
        self.groups.iter()
    }

    /// Returns the first group with the given canonical.
    #[must_use]
    pub fn group(&self, canonical: &str) -> Option<&AliasGroup> {
        self.by_canonical.get(canonical).map(|&index| &self.groups[index])
    }

    /// Returns the group with the given canonical and kind.
    #[must_use]
    pub fn group_of_kind(&self, canonical: &str, kind: EntityKind) -> Option<&AliasGroup> {
        self.groups
            .iter()
            .find(|g| g.kind == Some(kind) && g.canonical == canonical)
    }

    /// Returns the canonical followed by its aliases.
    #[must_use]
    pub fn alias_set(&self, canonical: &str) -> Option<Vec<&str>> {
        self.group(canonical).map(|g| g.alias_set().collect())
    }

    /// Returns every group in the same directory as the group `name`
    /// canonicalizes to, in corpus order.
    ///
    /// # Errors
    ///
    /// Returns a `NotFound` error if `name` does not canonicalize.
    pub fn alias_groups_in_same_category_as(&self, name: &str) -> Result<Vec<&AliasGroup>> {
        let group = self
            .canonical_form_of(name)
            .and_then(|c| self.group(c))
            .ok_or_else(|| Error::not_found(name, None))?;
        Ok(self.groups_in_directory(&group.directory))
    }

    fn groups_in_directory(&self, directory: &str) -> Vec<&AliasGroup> {
        let index = self.directory_index.get_or_init(|| {
            let mut index: HashMap<String, Vec<usize>> = HashMap::new();
            for (i, group) in self.groups.iter().enumerate() {
                index.entry(group.directory.clone()).or_default().push(i);
            }
            index
        });
        index
            .get(directory)
            .map(|ixs| ixs.iter().map(|&i| &self.groups[i]).collect())
            .unwrap_or_default()
    }

    // =========================================================================
    // Kinds
    // =========================================================================

    fn kind_index(&self) -> &KindIndex {
        self.kind_index.get_or_init(|| KindIndex::build(&self.groups))
    }

    /// Returns every canonical of a kind, in corpus order.
    ///
    /// Persons are open-ended and always yield an empty slice.
    #[must_use]
    pub fn canonicals_of_kind(&self, kind: EntityKind) -> &[String] {
        self.kind_index()
            .canonicals
            .get(&kind)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns true if `candidate` (case-insensitive) is a canonical of `kind`.
    #[must_use]
    pub fn is_of_kind(&self, kind: EntityKind, candidate: &str) -> bool {
        let lower = candidate.to_lowercase();
        if kind == EntityKind::Person {
            return Self::is_person(&lower);
        }
        self.kind_index()
            .members
            .get(&kind)
            .is_some_and(|m| m.contains(&lower))
    }

    /// Returns the kind of a canonical, preferring the first group that
    /// claims it.
    #[must_use]
    pub fn kind_of(&self, canonical: &str) -> Option<EntityKind> {
        if Self::is_person(canonical) {
            return Some(EntityKind::Person);
        }
        self.group(canonical)
            .and_then(|g| g.kind)
            .or_else(|| self.is_tower_path(canonical).then_some(EntityKind::TowerPath))
    }

    /// Returns true for a base tower canonical.
    #[must_use]
    pub fn is_tower(&self, candidate: &str) -> bool {
        self.is_of_kind(EntityKind::Tower, candidate)
    }

    /// Returns true for a tower upgrade canonical.
    #[must_use]
    pub fn is_tower_upgrade(&self, candidate: &str) -> bool {
        self.is_of_kind(EntityKind::TowerUpgrade, candidate)
    }

    /// Returns true for a tower path canonical.
    #[must_use]
    pub fn is_tower_path(&self, candidate: &str) -> bool {
        self.is_of_kind(EntityKind::TowerPath, candidate)
    }

    /// Returns true for a hero canonical.
    #[must_use]
    pub fn is_hero(&self, candidate: &str) -> bool {
        self.is_of_kind(EntityKind::Hero, candidate)
    }

    /// Returns true for a map canonical.
    #[must_use]
    pub fn is_map(&self, candidate: &str) -> bool {
        self.is_of_kind(EntityKind::Map, candidate)
    }

    /// Returns true for a map difficulty canonical.
    #[must_use]
    pub fn is_map_difficulty(&self, candidate: &str) -> bool {
        self.is_of_kind(EntityKind::MapDifficulty, candidate)
    }

    /// Returns true for a `user#name` token with a non-empty name.
    #[must_use]
    pub fn is_person(candidate: &str) -> bool {
        candidate
            .strip_prefix(PERSON_PREFIX)
            .is_some_and(|name| !name.is_empty())
    }

    /// All base towers.
    #[must_use]
    pub fn all_towers(&self) -> &[String] {
        self.canonicals_of_kind(EntityKind::Tower)
    }

    /// All tower upgrades.
    #[must_use]
    pub fn all_tower_upgrades(&self) -> &[String] {
        self.canonicals_of_kind(EntityKind::TowerUpgrade)
    }

    /// All tower paths: three per tower.
    #[must_use]
    pub fn all_tower_paths(&self) -> &[String] {
        self.canonicals_of_kind(EntityKind::TowerPath)
    }

    /// All heroes.
    #[must_use]
    pub fn all_heroes(&self) -> &[String] {
        self.canonicals_of_kind(EntityKind::Hero)
    }

    /// All maps.
    #[must_use]
    pub fn all_maps(&self) -> &[String] {
        self.canonicals_of_kind(EntityKind::Map)
    }

    /// All map difficulties.
    #[must_use]
    pub fn all_map_difficulties(&self) -> &[String] {
        self.canonicals_of_kind(EntityKind::MapDifficulty)
    }

    // =========================================================================
    // Categories
    // =========================================================================

    /// Categories in configured order.
    pub fn categories(&self) -> impl Iterator<Item = TowerCategory> + '_ {
        self.category_directories.iter().map(|(c, _)| *c)
    }

    fn category_directory(&self, category: TowerCategory) -> Option<&str> {
        self.category_directories
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, d)| d.as_str())
    }

    fn canonicals_in_category(&self, category: TowerCategory, kind: EntityKind) -> Vec<&str> {
        self.category_directory(category)
            .map(|dir| {
                self.groups_in_directory(dir)
                    .into_iter()
                    .filter(|g| g.kind == Some(kind))
                    .map(|g| g.canonical.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Base towers in a category, in corpus order.
    #[must_use]
    pub fn towers_in_category(&self, category: TowerCategory) -> Vec<&str> {
        self.canonicals_in_category(category, EntityKind::Tower)
    }

    /// Tower upgrades in a category, in corpus order.
    #[must_use]
    pub fn tower_upgrades_in_category(&self, category: TowerCategory) -> Vec<&str> {
        self.canonicals_in_category(category, EntityKind::TowerUpgrade)
    }

    /// Returns the category a tower (or tower upgrade) belongs to.
    #[must_use]
    pub fn category_of(&self, canonical: &str) -> Option<TowerCategory> {
        let group = self.group(canonical)?;
        self.category_directories
            .iter()
            .find(|(_, dir)| *dir == group.directory)
            .map(|(c, _)| *c)
    }

    /// Towers and heroes that can only be placed on water.
    #[must_use]
    pub fn all_water_towers(&self) -> &[String] {
        &self.water_towers
    }

    /// The configuration this registry was built with.
    #[must_use]
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }
}

fn build_group(record: GroupRecord, directories: &DirectoryRoots) -> Result<AliasGroup> {
    let context = || ErrorContext::new().with_frame(format!("group {}", record.canonical));

    if record.canonical.is_empty() || to_alias_normal_form(&record.canonical) != record.canonical {
        return Err(Error::malformed_corpus(format!(
            "canonical `{}` is not in alias normal form",
            record.canonical
        ))
        .with_context(context()));
    }
    if record.aliases.is_empty() {
        return Err(Error::malformed_corpus(format!(
            "canonical `{}` has no aliases",
            record.canonical
        ))
        .with_context(context()));
    }

    let aliases: Vec<String> = record.aliases.iter().map(|a| to_alias_normal_form(a)).collect();
    if aliases.iter().any(String::is_empty) {
        return Err(
            Error::malformed_corpus(format!("canonical `{}` has a blank alias", record.canonical))
                .with_context(context()),
        );
    }

    let root = record.directory.split('/').next().unwrap_or_default();
    let kind = if root == directories.towers {
        Some(EntityKind::classify_tower_canonical(&record.canonical).ok_or_else(|| {
            Error::malformed_corpus(format!(
                "tower canonical `{}` has an unrecognized suffix",
                record.canonical
            ))
            .with_context(context())
        })?)
    } else if root == directories.heroes {
        Some(EntityKind::Hero)
    } else if root == directories.maps {
        Some(EntityKind::Map)
    } else if root == directories.map_difficulties {
        Some(EntityKind::MapDifficulty)
    } else {
        None
    };

    Ok(AliasGroup {
        canonical: record.canonical,
        aliases,
        directory: record.directory,
        kind,
    })
}
