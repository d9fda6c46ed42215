//! Upgrade-set codec and upgrade cost calculation for towerindex.
//!
//! This crate provides:
//! - [`UpgradeSet`] - Three per-path tiers, with main and cross path decoding
//! - Tower helpers over an [`AliasRegistry`](towerindex_aliases::AliasRegistry)
//!   ([`tower_from_tower_upgrade`], [`tower_upgrade_from_tower_path_tier`], [`format_tower`])
//! - [`CostTable`] and [`total_upgrade_cost`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod codec;
pub mod cost;
pub mod towers;

pub use codec::{
    UpgradeSet, cross_path_tier_from_upgrade_set, is_valid_upgrade_set, path_tier_from_upgrade_set,
};
pub use cost::{CostTable, TowerCosts, hard_mode_price, total_upgrade_cost};
pub use towers::{
    format_tower, is_water_tower_upgrade, tower_from_tower_upgrade, tower_upgrade_from_tower_path_tier,
    tower_upgrade_to_index_normal_form, upgrade_set_of,
};
