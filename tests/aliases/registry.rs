//! Integration tests for canonicalization and kind queries

use towerindex_aliases::AliasRegistry;
use towerindex_foundation::{EntityKind, TowerCategory};

fn registry() -> AliasRegistry {
    AliasRegistry::standard().unwrap()
}

// =============================================================================
// Canonicalization
// =============================================================================

#[test]
fn canonical_form_trims_and_ignores_case() {
    let registry = registry();
    assert_eq!(registry.canonical_form_of("  WIZ  "), Some("wizard_monkey"));
    assert_eq!(registry.canonical_form_of("Wizard   Monkey"), Some("wizard_monkey"));
    assert_eq!(registry.canonical_form_of("Glaive Lord"), Some("boomerang_monkey#500"));
    assert_eq!(registry.canonical_form_of("gwen"), Some("gwendolin"));
}

#[test]
fn canonical_form_miss_is_none() {
    let registry = registry();
    assert_eq!(registry.canonical_form_of("definitely not a tower"), None);
    assert_eq!(registry.canonical_form_of(""), None);
}

#[test]
fn canonical_form_is_idempotent() {
    let registry = registry();
    for group in registry.groups() {
        assert_eq!(
            registry.canonical_form_of(&group.canonical),
            Some(group.canonical.as_str()),
            "{}",
            group.canonical
        );
    }
}

#[test]
fn shared_upgrade_names_keep_the_first_tower() {
    let registry = registry();
    // Listed for both the tack shooter and the buccaneer.
    assert_eq!(registry.canonical_form_of("faster shooting"), Some("tack_shooter#100"));
}

#[test]
fn path_aliases() {
    let registry = registry();
    assert_eq!(registry.canonical_form_of("dart top"), Some("dart_monkey#top-path"));
    assert_eq!(registry.canonical_form_of("wiz middle path"), Some("wizard_monkey#middle-path"));
    assert_eq!(registry.canonical_form_of("bottom path sub"), Some("monkey_sub#bottom-path"));
}

#[test]
fn canonicalize_arg_accepts_shorthand() {
    let registry = registry();
    let cases = [
        ("dart 3-0-0", Some("dart_monkey#300")),
        ("Dart Monkey 300", Some("dart_monkey#300")),
        ("wiz#025", None),
        ("wiz#005", Some("wizard_monkey#005")),
        ("ninja 2-2-2", Some("ninja_monkey#222")),
        ("quincy 300", None),
        ("dart 3-0", None),
        ("dart 6-0-0", None),
    ];
    for (raw, expected) in cases {
        assert_eq!(registry.canonicalize_arg(raw).as_deref(), expected, "{raw}");
    }
}

#[test]
fn canonicalize_arg_accepts_persons() {
    let registry = registry();
    assert_eq!(registry.canonicalize_arg("user#Someone").as_deref(), Some("user#someone"));
    assert_eq!(registry.canonicalize_arg("user#"), None);
}

// =============================================================================
// Kinds
// =============================================================================

#[test]
fn membership_predicates() {
    let registry = registry();
    assert!(registry.is_tower("dart_monkey"));
    assert!(registry.is_tower("DART_MONKEY"));
    assert!(!registry.is_tower("dart"));
    assert!(registry.is_tower_upgrade("dart_monkey#030"));
    assert!(registry.is_tower_upgrade("dart_monkey#222"));
    assert!(!registry.is_tower_upgrade("dart_monkey#330"));
    assert!(registry.is_tower_path("druid#top-path"));
    assert!(registry.is_hero("adora"));
    assert!(!registry.is_hero("adoras_temple"));
    assert!(registry.is_map("adoras_temple"));
    assert!(registry.is_map_difficulty("intermediate"));
    assert!(AliasRegistry::is_person("user#x"));
    assert!(!AliasRegistry::is_person("x"));
}

#[test]
fn every_canonical_has_exactly_one_kind() {
    let registry = registry();
    for group in registry.groups() {
        let kinds: Vec<EntityKind> = EntityKind::ALL
            .into_iter()
            .filter(|&k| registry.is_of_kind(k, &group.canonical))
            .collect();
        assert_eq!(kinds.len(), 1, "{} is {kinds:?}", group.canonical);
        assert_eq!(Some(kinds[0]), group.kind);
    }
}

#[test]
fn kind_of_canonicals() {
    let registry = registry();
    assert_eq!(registry.kind_of("spike_factory"), Some(EntityKind::Tower));
    assert_eq!(registry.kind_of("spike_factory#400"), Some(EntityKind::TowerUpgrade));
    assert_eq!(registry.kind_of("spike_factory#top-path"), Some(EntityKind::TowerPath));
    assert_eq!(registry.kind_of("sauda"), Some(EntityKind::Hero));
    assert_eq!(registry.kind_of("user#bob"), Some(EntityKind::Person));
    assert_eq!(registry.kind_of("sauda#300"), None);
}

#[test]
fn alias_set_starts_with_canonical() {
    let registry = registry();
    assert_eq!(
        registry.alias_set("ezili").unwrap(),
        vec!["ezili", "ezili", "ez"]
    );
    assert!(registry.alias_set("nobody").is_none());
}

// =============================================================================
// Categories
// =============================================================================

#[test]
fn same_category_groups() {
    let registry = registry();
    let groups = registry.alias_groups_in_same_category_as("dart").unwrap();
    // 6 towers, each with 1 + 15 + 1 + 3 groups.
    assert_eq!(groups.len(), 6 * 20);
    assert!(groups.iter().all(|g| g.directory == "towers/primary"));
    assert_eq!(groups[0].canonical, "dart_monkey");

    let err = registry.alias_groups_in_same_category_as("nothing").unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn towers_by_category() {
    let registry = registry();
    assert_eq!(
        registry.towers_in_category(TowerCategory::Magic),
        vec!["wizard_monkey", "super_monkey", "ninja_monkey", "alchemist", "druid"]
    );
    assert_eq!(registry.towers_in_category(TowerCategory::Support).len(), 4);
    assert_eq!(
        registry.tower_upgrades_in_category(TowerCategory::Military).len(),
        7 * 16
    );
    assert_eq!(registry.category_of("heli_pilot#005"), Some(TowerCategory::Military));
    assert_eq!(registry.category_of("quincy"), None);
}

#[test]
fn categories_in_configured_order() {
    let registry = registry();
    let categories: Vec<TowerCategory> = registry.categories().collect();
    assert_eq!(categories, TowerCategory::ALL.to_vec());
}

#[test]
fn water_entities() {
    let registry = registry();
    assert_eq!(
        registry.all_water_towers(),
        &["monkey_sub", "monkey_buccaneer", "admiral_brickell"]
    );
}
