//! Registry configuration.
//!
//! Loaded alongside the alias corpus. Names the representative tower of each
//! category, the entities that must be placed on water, and which directory
//! roots hold which entity kinds.

use serde::{Deserialize, Serialize};
use towerindex_foundation::{Error, Result, TowerCategory};

/// A category and the alias of the tower whose directory defines it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRepresentative {
    /// The category.
    pub category: TowerCategory,
    /// Any alias of a tower in that category.
    pub representative: String,
}

/// Directory roots that assign entity kinds to corpus groups.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryRoots {
    /// Root for towers, tower upgrades, and tower paths.
    pub towers: String,
    /// Root for heroes.
    pub heroes: String,
    /// Root for maps.
    pub maps: String,
    /// Root for map difficulties.
    pub map_difficulties: String,
}

impl Default for DirectoryRoots {
    fn default() -> Self {
        Self {
            towers: "towers".to_string(),
            heroes: "heroes".to_string(),
            maps: "maps".to_string(),
            map_difficulties: "map_difficulties".to_string(),
        }
    }
}

/// Configuration for an [`AliasRegistry`](crate::AliasRegistry).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Category representatives, in enumeration order.
    pub categories: Vec<CategoryRepresentative>,
    /// Aliases of towers (or heroes) that can only be placed on water.
    pub water_towers: Vec<String>,
    /// Directory roots.
    pub directories: DirectoryRoots,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            categories: vec![
                CategoryRepresentative {
                    category: TowerCategory::Primary,
                    representative: "dart".to_string(),
                },
                CategoryRepresentative {
                    category: TowerCategory::Military,
                    representative: "heli".to_string(),
                },
                CategoryRepresentative {
                    category: TowerCategory::Magic,
                    representative: "wiz".to_string(),
                },
                CategoryRepresentative {
                    category: TowerCategory::Support,
                    representative: "farm".to_string(),
                },
            ],
            water_towers: vec!["sub".to_string(), "bucc".to_string(), "brick".to_string()],
            directories: DirectoryRoots::default(),
        }
    }
}

impl RegistryConfig {
    /// Parses a configuration from TOML source. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns a `Deserialize` error if the source is not valid TOML.
    pub fn from_toml(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| Error::deserialize("toml", e))
    }

    /// Builder method to set (or replace) a category's representative.
    #[must_use]
    pub fn with_category(mut self, category: TowerCategory, representative: impl Into<String>) -> Self {
        let representative = representative.into();
        match self.categories.iter_mut().find(|c| c.category == category) {
            Some(existing) => existing.representative = representative,
            None => self.categories.push(CategoryRepresentative {
                category,
                representative,
            }),
        }
        self
    }

    /// Builder method to set the water tower aliases.
    #[must_use]
    pub fn with_water_towers<I, S>(mut self, towers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.water_towers = towers.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method to set the directory roots.
    #[must_use]
    pub fn with_directories(mut self, directories: DirectoryRoots) -> Self {
        self.directories = directories;
        self
    }

    /// Returns the representative alias for a category, if configured.
    #[must_use]
    pub fn representative(&self, category: TowerCategory) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.representative.as_str())
    }
}
