//! Upgrade cost calculation.
//!
//! Costs come from an external JSON table keyed by tower canonical:
//!
//! ```json
//! {
//!   "wizard_monkey": {
//!     "cost": 375,
//!     "upgrades": {
//!       "1": [150, 600, 1300, 10900, 32000],
//!       "2": [300, 900, 3000, 4000, 54000],
//!       "3": [300, 300, 1500, 2800, 26500]
//!     }
//!   }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use towerindex_foundation::{Error, Result};
use tracing::debug;

use crate::codec::UpgradeSet;

/// Hard difficulty multiplies every upgrade price by this many hundredths.
pub const HARD_MODE_PERCENT: u64 = 108;

/// Prices for one tower.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TowerCosts {
    /// Price of the tower itself.
    pub cost: u64,
    /// Per-tier prices keyed by path number (`"1"`, `"2"`, `"3"`).
    pub upgrades: BTreeMap<String, Vec<u64>>,
}

impl TowerCosts {
    /// Returns the price of a single tier, if the table lists it.
    #[must_use]
    pub fn tier_cost(&self, path: u8, tier: u8) -> Option<u64> {
        let index = usize::from(tier.checked_sub(1)?);
        self.upgrades.get(&path.to_string())?.get(index).copied()
    }
}

/// Cost table for every tower.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CostTable {
    towers: BTreeMap<String, TowerCosts>,
}

impl CostTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a cost table from JSON.
    ///
    /// # Errors
    ///
    /// Returns a `Deserialize` error if the source is not a valid table.
    pub fn from_json(source: &str) -> Result<Self> {
        serde_json::from_str(source).map_err(|e| Error::deserialize("json", e))
    }

    /// Adds or replaces a tower's prices.
    #[must_use]
    pub fn with_tower(mut self, tower: impl Into<String>, costs: TowerCosts) -> Self {
        self.towers.insert(tower.into(), costs);
        self
    }

    /// Returns a tower's prices.
    #[must_use]
    pub fn get(&self, tower: &str) -> Option<&TowerCosts> {
        self.towers.get(tower)
    }

    /// Returns the cumulative price of tiers `1..=tier` on one path.
    ///
    /// # Errors
    ///
    /// Returns an `UnknownTower` error if the tower is not in the table, an
    /// `IncompleteCostTable` error if a needed tier price is missing, and a
    /// `CostOverflow` error if the sum does not fit in a `u64`.
    pub fn path_cost(&self, tower: &str, path: u8, tier: u8, hard_mode: bool) -> Result<u64> {
        let costs = self.get(tower).ok_or_else(|| Error::unknown_tower(tower))?;
        path_cost(tower, costs, path, tier, hard_mode)
    }

    /// Returns the base price plus every tier on the main and cross paths of
    /// `set`, without checking that the set is reachable in game.
    ///
    /// In hard mode each upgrade tier is scaled; the base price is not.
    ///
    /// # Errors
    ///
    /// Returns an `UnknownTower` error if the tower is not in the table, an
    /// `IncompleteCostTable` error if a needed tier price is missing, and a
    /// `CostOverflow` error if the total does not fit in a `u64`.
    pub fn upgrade_spend(&self, tower: &str, set: UpgradeSet, hard_mode: bool) -> Result<u64> {
        let costs = self.get(tower).ok_or_else(|| Error::unknown_tower(tower))?;
        let (path, tier) = set.path_tier();
        let (cross_path, cross_tier) = set.cross_path_tier();
        let main = path_cost(tower, costs, path, tier, hard_mode)?;
        let cross = path_cost(tower, costs, cross_path, cross_tier, hard_mode)?;
        let total = costs
            .cost
            .checked_add(main)
            .and_then(|t| t.checked_add(cross))
            .ok_or_else(|| Error::cost_overflow(tower))?;

        debug!(tower, %set, hard_mode, total, "upgrade cost computed");
        Ok(total)
    }
}

fn path_cost(tower: &str, costs: &TowerCosts, path: u8, tier: u8, hard_mode: bool) -> Result<u64> {
    (1..=tier).try_fold(0u64, |total, t| {
        let cost = costs
            .tier_cost(path, t)
            .ok_or_else(|| Error::incomplete_cost_table(tower, path, t))?;
        let cost = if hard_mode { hard_mode_price(cost) } else { Some(cost) };
        cost.and_then(|c| total.checked_add(c)).ok_or_else(|| Error::cost_overflow(tower))
    })
}

/// Scales a price for hard difficulty, rounding half up.
///
/// Returns `None` if the scaled price does not fit in a `u64`.
#[must_use]
pub fn hard_mode_price(cost: u64) -> Option<u64> {
    cost.checked_mul(HARD_MODE_PERCENT)?
        .checked_add(50)
        .map(|scaled| scaled / 100)
}

/// Returns the total spent on a tower at a valid upgrade set.
///
/// See [`CostTable::upgrade_spend`] for how the total is formed.
///
/// # Errors
///
/// Returns an `InvalidUpgradeSet` error if `upgrade_set` is not a valid set
/// (checked before the table is consulted), an `UnknownTower` error if
/// `tower` is not in the table, an `IncompleteCostTable` error if a needed
/// tier price is missing, and a `CostOverflow` error if the total does not
/// fit in a `u64`.
pub fn total_upgrade_cost(
    table: &CostTable,
    tower: &str,
    upgrade_set: &str,
    hard_mode: bool,
) -> Result<u64> {
    let set = upgrade_set
        .parse::<UpgradeSet>()
        .ok()
        .filter(|s| s.is_valid())
        .ok_or_else(|| Error::invalid_upgrade_set(upgrade_set))?;
    table.upgrade_spend(tower, set, hard_mode)
}
