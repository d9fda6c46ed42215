//! Entity kinds and tower groupings.
//!
//! Every canonical string belongs to exactly one [`EntityKind`]. Tower
//! upgrades and tower paths share the tower's canonical as a prefix and are
//! told apart by their `#` suffix: three digits for an upgrade
//! (`dart_monkey#300`), a named path for a tower path (`dart_monkey#top-path`).

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The closed set of entity kinds the parsers can produce.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EntityKind {
    /// A base tower (`dart_monkey`).
    Tower,
    /// A tower at a specific upgrade set (`dart_monkey#300`).
    TowerUpgrade,
    /// One of a tower's three upgrade paths (`dart_monkey#top-path`).
    TowerPath,
    /// A hero (`quincy`).
    Hero,
    /// A map (`logs`).
    Map,
    /// A map difficulty (`beginner`).
    MapDifficulty,
    /// A player name (`user#name`).
    Person,
}

impl EntityKind {
    /// All kinds, in declaration order.
    pub const ALL: [EntityKind; 7] = [
        EntityKind::Tower,
        EntityKind::TowerUpgrade,
        EntityKind::TowerPath,
        EntityKind::Hero,
        EntityKind::Map,
        EntityKind::MapDifficulty,
        EntityKind::Person,
    ];

    /// Returns the snake-case name of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tower => "tower",
            Self::TowerUpgrade => "tower_upgrade",
            Self::TowerPath => "tower_path",
            Self::Hero => "hero",
            Self::Map => "map",
            Self::MapDifficulty => "map_difficulty",
            Self::Person => "person",
        }
    }

    /// Classifies a canonical found under the towers directory by its suffix.
    ///
    /// Returns `None` when the suffix is neither three digits nor a path name.
    #[must_use]
    pub fn classify_tower_canonical(canonical: &str) -> Option<EntityKind> {
        match canonical.split_once('#') {
            None => Some(Self::Tower),
            Some((_, suffix)) if suffix.len() == 3 && suffix.bytes().all(|b| b.is_ascii_digit()) => {
                Some(Self::TowerUpgrade)
            }
            Some((_, suffix)) if suffix.parse::<TowerPathName>().is_ok() => Some(Self::TowerPath),
            Some(_) => None,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tower groupings used to enumerate "all towers of the same type".
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TowerCategory {
    /// Primary towers (dart, boomerang, bomb, ...).
    Primary,
    /// Military towers (sniper, sub, heli, ...).
    Military,
    /// Magic towers (wizard, super, ninja, ...).
    Magic,
    /// Support towers (farm, spike factory, village, ...).
    Support,
}

impl TowerCategory {
    /// All categories, in display order.
    pub const ALL: [TowerCategory; 4] = [
        TowerCategory::Primary,
        TowerCategory::Military,
        TowerCategory::Magic,
        TowerCategory::Support,
    ];
}

impl fmt::Display for TowerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Primary => "primary",
            Self::Military => "military",
            Self::Magic => "magic",
            Self::Support => "support",
        })
    }
}

/// Named upgrade path of a tower.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TowerPathName {
    /// Path 1.
    Top,
    /// Path 2.
    Middle,
    /// Path 3.
    Bottom,
}

impl TowerPathName {
    /// All paths, in path-number order.
    pub const ALL: [TowerPathName; 3] = [Self::Top, Self::Middle, Self::Bottom];

    /// Returns the 1-based path number.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Top => 1,
            Self::Middle => 2,
            Self::Bottom => 3,
        }
    }

    /// Returns the path for a 1-based path number.
    #[must_use]
    pub const fn from_number(path: u8) -> Option<Self> {
        match path {
            1 => Some(Self::Top),
            2 => Some(Self::Middle),
            3 => Some(Self::Bottom),
            _ => None,
        }
    }

    /// Returns the single-word name (`top`).
    #[must_use]
    pub const fn word(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Middle => "middle",
            Self::Bottom => "bottom",
        }
    }

    /// Returns the canonical suffix used after `#` (`top-path`).
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Top => "top-path",
            Self::Middle => "middle-path",
            Self::Bottom => "bottom-path",
        }
    }
}

impl FromStr for TowerPathName {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|p| p.suffix() == s).ok_or(())
    }
}
