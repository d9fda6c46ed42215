//! Integration tests for upgrade cost calculation

use towerindex_foundation::ErrorKind;
use towerindex_upgrades::{CostTable, UpgradeSet, hard_mode_price, total_upgrade_cost};

const COSTS: &str = include_str!("costs.json");

fn table() -> CostTable {
    CostTable::from_json(COSTS).unwrap()
}

// =============================================================================
// Normal Mode
// =============================================================================

#[test]
fn wizard_303_is_base_plus_both_paths() {
    let set: UpgradeSet = "303".parse().unwrap();
    let spend = table().upgrade_spend("wizard_monkey", set, false).unwrap();
    assert_eq!(spend, 375 + (150 + 600 + 1300) + (300 + 300 + 1500));
}

#[test]
fn valid_sets() {
    let table = table();
    let cases = [
        ("dart_monkey", "000", 200),
        ("dart_monkey", "300", 200 + 140 + 220 + 300),
        ("dart_monkey", "025", 200 + (100 + 190) + (90 + 200 + 575 + 2050 + 21500)),
        ("wizard_monkey", "302", 375 + (150 + 600 + 1300) + (300 + 300)),
        ("wizard_monkey", "220", 375 + (150 + 600) + (300 + 900)),
        ("monkey_sub", "005", 325 + 380 + 1000 + 1100 + 3000 + 25000),
    ];
    for (tower, set, expected) in cases {
        assert_eq!(total_upgrade_cost(&table, tower, set, false).unwrap(), expected, "{tower} {set}");
    }
}

#[test]
fn cross_path_order_does_not_matter() {
    let table = table();
    let a = total_upgrade_cost(&table, "dart_monkey", "320", false).unwrap();
    let b = total_upgrade_cost(&table, "dart_monkey", "302", false).unwrap();
    assert_eq!(a - (100 + 190), b - (90 + 200));
}

// =============================================================================
// Hard Mode
// =============================================================================

#[test]
fn hard_mode_scales_each_tier() {
    let table = table();
    let hard = total_upgrade_cost(&table, "wizard_monkey", "302", true).unwrap();
    let expected = 375
        + [150, 600, 1300, 300, 300]
            .into_iter()
            .map(|c| hard_mode_price(c).unwrap())
            .sum::<u64>();
    assert_eq!(hard, expected);
    assert!(hard > total_upgrade_cost(&table, "wizard_monkey", "302", false).unwrap());
}

#[test]
fn hard_mode_leaves_base_cost_alone() {
    assert_eq!(total_upgrade_cost(&table(), "monkey_sub", "000", true).unwrap(), 325);
}

#[test]
fn hard_mode_rounding() {
    assert_eq!(hard_mode_price(2050), Some(2214));
    assert_eq!(hard_mode_price(575), Some(621));
    // 97.2
    assert_eq!(hard_mode_price(90), Some(97));
    assert_eq!(hard_mode_price(75), Some(81));
    // 12.96
    assert_eq!(hard_mode_price(12), Some(13));
}

// =============================================================================
// Preconditions
// =============================================================================

#[test]
fn invalid_sets_fail_before_lookup() {
    for set in ["303", "550", "006", "30", "x00"] {
        let err = total_upgrade_cost(&table(), "not_in_table", set, false).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidUpgradeSet(_)), "{set}");
    }
}

#[test]
fn unknown_tower() {
    let err = total_upgrade_cost(&table(), "druid", "300", false).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownTower(ref t) if t == "druid"));
}

#[test]
fn overflowing_table_is_an_error() {
    let table = CostTable::from_json(
        r#"{ "dart_monkey": { "cost": 200, "upgrades": { "1": [18446744073709551615, 1, 1, 1, 1] } } }"#,
    )
    .unwrap();
    for hard_mode in [false, true] {
        let err = total_upgrade_cost(&table, "dart_monkey", "100", hard_mode).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::CostOverflow(_)), "hard mode {hard_mode}");
    }
    assert!(table.path_cost("dart_monkey", 1, 2, false).is_err());
}

#[test]
fn path_cost_is_cumulative() {
    let table = table();
    assert_eq!(table.path_cost("dart_monkey", 3, 2, false).unwrap(), 290);
    assert_eq!(table.path_cost("dart_monkey", 3, 0, false).unwrap(), 0);
    assert!(table.path_cost("dart_monkey", 3, 6, false).is_err());
}
