//! Integration tests for entity kinds and path names

use towerindex_foundation::{EntityKind, TowerCategory, TowerPathName};

#[test]
fn every_kind_has_a_distinct_name() {
    let mut names: Vec<&str> = EntityKind::ALL.iter().map(|k| k.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), EntityKind::ALL.len());
}

#[test]
fn tower_canonicals_classify_by_suffix() {
    let cases = [
        ("wizard_monkey", Some(EntityKind::Tower)),
        ("wizard_monkey#025", Some(EntityKind::TowerUpgrade)),
        ("wizard_monkey#bottom-path", Some(EntityKind::TowerPath)),
        ("wizard_monkey#25", None),
        ("wizard_monkey#side-path", None),
    ];
    for (canonical, expected) in cases {
        assert_eq!(EntityKind::classify_tower_canonical(canonical), expected, "{canonical}");
    }
}

#[test]
fn path_names_round_trip_through_numbers_and_suffixes() {
    for path in TowerPathName::ALL {
        assert_eq!(TowerPathName::from_number(path.number()), Some(path));
        assert_eq!(path.suffix().parse::<TowerPathName>(), Ok(path));
    }
    assert_eq!(TowerPathName::from_number(0), None);
    assert_eq!(TowerPathName::from_number(4), None);
}

#[test]
fn categories_display_lowercase() {
    let names: Vec<String> = TowerCategory::ALL.iter().map(ToString::to_string).collect();
    assert_eq!(names, vec!["primary", "military", "magic", "support"]);
}
