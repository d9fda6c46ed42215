//! Integration tests for the upgrade-set codec

use proptest::prelude::*;
use towerindex_aliases::AliasRegistry;
use towerindex_upgrades::{
    UpgradeSet, cross_path_tier_from_upgrade_set, is_valid_upgrade_set, path_tier_from_upgrade_set,
    tower_upgrade_from_tower_path_tier, upgrade_set_of,
};

// =============================================================================
// Validity
// =============================================================================

#[test]
fn documented_validity_cases() {
    assert!(is_valid_upgrade_set("302"));
    assert!(!is_valid_upgrade_set("550"));
    assert!(!is_valid_upgrade_set("006"));
    assert!(is_valid_upgrade_set("000"));
}

#[test]
fn validity_rejects_non_digit_strings() {
    for s in ["", "30", "3000", "abc", "3 0", "٣٠٠"] {
        assert!(!is_valid_upgrade_set(s), "{s:?}");
    }
}

#[test]
fn valid_set_count() {
    // 000, fifteen single path sets, and 3 * 16 sets with two non-zero
    // paths (pairs from 1..=5 whose smaller tier is at most 2).
    let count = (0..1000).filter(|n| is_valid_upgrade_set(&format!("{n:03}"))).count();
    assert_eq!(count, 1 + 15 + 48);
}

// =============================================================================
// Decoding
// =============================================================================

#[test]
fn cross_path_of_230() {
    assert_eq!(path_tier_from_upgrade_set("230").unwrap(), (2, 3));
    assert_eq!(cross_path_tier_from_upgrade_set("230").unwrap(), (1, 2));
}

#[test]
fn main_and_cross_paths_of_every_single_path_set() {
    for path in 1..=3u8 {
        for tier in 1..=5u8 {
            let set = UpgradeSet::from_path_tier(path, tier).unwrap();
            assert_eq!(set.path_tier(), (path, tier));
            assert_eq!(set.cross_path_tier().1, 0);
        }
    }
}

proptest! {
    #[test]
    fn round_trip_through_tower_canonical(path in 1u8..=3, tier in 1u8..=5) {
        let registry = AliasRegistry::standard().unwrap();
        let canonical = tower_upgrade_from_tower_path_tier(&registry, "dart", Some(path), tier).unwrap();
        let set = upgrade_set_of(&canonical).unwrap();
        prop_assert_eq!(path_tier_from_upgrade_set(&set.to_string()).unwrap(), (path, tier));
        prop_assert!(registry.is_tower_upgrade(&canonical));
    }
}

proptest! {
    // Only 64 of the 1000 inputs are valid sets, so the default reject budget
    // (1024) is exhausted long before 256 cases are collected.
    #![proptest_config(ProptestConfig { max_global_rejects: 1 << 16, ..ProptestConfig::default() })]

    #[test]
    fn valid_sets_decode_within_limits(n in 0u32..1000) {
        let s = format!("{n:03}");
        prop_assume!(is_valid_upgrade_set(&s));
        let (path, tier) = path_tier_from_upgrade_set(&s).unwrap();
        let (cross_path, cross_tier) = cross_path_tier_from_upgrade_set(&s).unwrap();
        prop_assert!((1..=3).contains(&path));
        prop_assert!(tier <= 5);
        prop_assert!(cross_tier <= 2);
        prop_assert_ne!(path, cross_path);
    }
}
