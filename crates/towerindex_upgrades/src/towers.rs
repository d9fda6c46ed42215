//! Tower and tower upgrade helpers over an [`AliasRegistry`].

use towerindex_aliases::AliasRegistry;
use towerindex_foundation::{
    EntityKind, Error, Result, TowerPathName, to_index_normal_form, to_title_case,
};

use crate::codec::UpgradeSet;

/// Returns the base tower of a tower upgrade or tower path.
///
/// Accepts anything [`AliasRegistry::canonicalize_arg`] accepts; a base tower
/// resolves to itself.
///
/// # Errors
///
/// Returns a `NotFound` error if `upgrade` does not resolve to a tower,
/// tower upgrade, or tower path.
pub fn tower_from_tower_upgrade(registry: &AliasRegistry, upgrade: &str) -> Result<String> {
    let not_found = || Error::not_found(upgrade, Some(EntityKind::TowerUpgrade));
    let canonical = registry.canonicalize_arg(upgrade).ok_or_else(not_found)?;
    let tower = canonical.split_once('#').map_or(canonical.as_str(), |(tower, _)| tower);
    if registry.is_tower(tower) {
        Ok(tower.to_string())
    } else {
        Err(not_found())
    }
}

/// Builds the tower upgrade canonical with `tier` on `path`.
///
/// Without a path the result is the `#222` base-line canonical.
///
/// # Errors
///
/// Returns an `InvalidArgument` error if `tower` does not resolve to a tower,
/// `path` is not 1, 2, or 3, or `tier` is above 5.
pub fn tower_upgrade_from_tower_path_tier(
    registry: &AliasRegistry,
    tower: &str,
    path: Option<u8>,
    tier: u8,
) -> Result<String> {
    let canonical = registry
        .canonical_form_of(tower)
        .filter(|c| registry.is_tower(c))
        .ok_or_else(|| Error::invalid_argument("tower", format!("`{tower}` is not a tower")))?;

    let set = match path {
        Some(path) => UpgradeSet::from_path_tier(path, tier)?,
        None => UpgradeSet::BASE_LINE,
    };
    Ok(format!("{canonical}#{set}"))
}

/// Returns the upgrade set of a tower upgrade canonical (`dart_monkey#300`).
///
/// # Errors
///
/// Returns an `InvalidUpgradeSet` error if the canonical has no three-digit
/// suffix.
pub fn upgrade_set_of(canonical: &str) -> Result<UpgradeSet> {
    canonical
        .split_once('#')
        .ok_or_else(|| Error::invalid_upgrade_set(canonical))?
        .1
        .parse()
}

/// Returns the display name of a tower or tower upgrade in index normal form.
///
/// Single-path upgrades display their upgrade name (`Spike-o-pult`); the
/// `#222` base line displays as its tower.
///
/// # Errors
///
/// Returns a `NotFound` error if `canonical` names no group.
pub fn tower_upgrade_to_index_normal_form(
    registry: &AliasRegistry,
    canonical: &str,
) -> Result<String> {
    let lookup = match canonical.split_once('#') {
        Some((tower, suffix)) if suffix.parse::<UpgradeSet>().ok() == Some(UpgradeSet::BASE_LINE) => tower,
        _ => canonical,
    };
    registry
        .group(lookup)
        .map(|g| to_index_normal_form(g.display_alias()))
        .ok_or_else(|| Error::not_found(canonical, None))
}

/// Returns the user-facing name of a tower, tower path, tower upgrade, or
/// hero.
///
/// ```text
/// dart_monkey              -> Dart Monkey
/// dart_monkey#top-path     -> Top Path Dart Monkey
/// dart_monkey#300          -> Spike-o-pult
/// striker_jones            -> Striker Jones
/// ```
///
/// # Errors
///
/// Returns an `InvalidArgument` error for any other canonical.
pub fn format_tower(registry: &AliasRegistry, canonical: &str) -> Result<String> {
    match registry.kind_of(canonical) {
        Some(EntityKind::Tower | EntityKind::TowerUpgrade) => {
            tower_upgrade_to_index_normal_form(registry, canonical)
        }
        Some(EntityKind::TowerPath) => {
            let (tower, path) = canonical
                .split_once('#')
                .and_then(|(tower, suffix)| Some((tower, suffix.parse::<TowerPathName>().ok()?)))
                .ok_or_else(|| Error::not_found(canonical, Some(EntityKind::TowerPath)))?;
            let path = to_title_case(&path.suffix().replace('-', " "));
            Ok(format!("{path} {}", tower_upgrade_to_index_normal_form(registry, tower)?))
        }
        Some(EntityKind::Hero) => Ok(to_index_normal_form(canonical)),
        _ => Err(Error::invalid_argument(
            "tower",
            format!("`{canonical}` is not a tower, tower path, tower upgrade, or hero"),
        )),
    }
}

/// Returns true if `canonical` is a water hero, or a tower, upgrade, or path
/// of a water tower.
#[must_use]
pub fn is_water_tower_upgrade(registry: &AliasRegistry, canonical: &str) -> bool {
    let water = registry.all_water_towers();
    if registry.is_hero(canonical) {
        return water.iter().any(|w| w == canonical);
    }
    tower_from_tower_upgrade(registry, canonical).is_ok_and(|tower| water.contains(&tower))
}
