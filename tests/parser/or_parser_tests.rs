//! Ordered alternation tests.

use towerindex_aliases::{AliasCorpus, AliasRegistry, RegistryConfig};
use towerindex_foundation::{EntityKind, ErrorKind};
use towerindex_parser::{
    EntityMatch, EntityParser, HeroParser, MapParser, OrParser, PersonParser, TowerParser,
    TowerUpgradeParser,
};

use crate::registry;

/// A corpus where `pat` names both a tower and a hero.
fn ambiguous() -> AliasRegistry {
    let corpus = AliasCorpus::new()
        .with_group("dart_monkey", &["dart monkey", "dart"], "towers/primary")
        .with_group("pat", &["pat"], "towers/primary")
        .with_group("heli_pilot", &["heli"], "towers/military")
        .with_group("wizard_monkey", &["wiz"], "towers/magic")
        .with_group("banana_farm", &["farm"], "towers/support")
        .with_group("pat", &["pat fusty"], "heroes")
        .with_group("quincy", &["quincy", "q"], "heroes");
    AliasRegistry::new(&corpus, RegistryConfig::default().with_water_towers(Vec::<String>::new()))
        .unwrap()
}

#[test]
fn first_alternative_wins() {
    let registry = ambiguous();
    let tower_first = OrParser::new()
        .or(TowerParser::new(&registry))
        .or(HeroParser::new(&registry));
    let hero_first = OrParser::new()
        .or(HeroParser::new(&registry))
        .or(TowerParser::new(&registry));

    assert_eq!(tower_first.parse("pat").unwrap().kind, EntityKind::Tower);
    assert_eq!(hero_first.parse("pat").unwrap().kind, EntityKind::Hero);
}

#[test]
fn falls_through_to_later_alternatives() {
    let registry = registry();
    let parser = OrParser::new()
        .or(TowerParser::new(&registry))
        .or(TowerUpgradeParser::new(&registry))
        .or(HeroParser::new(&registry));
    assert_eq!(
        parser.parse("obyn_greenfoot"),
        Ok(EntityMatch::new(EntityKind::Hero, "obyn_greenfoot"))
    );
}

#[test]
fn miss_lists_every_kind_in_order() {
    let registry = registry();
    let parser = OrParser::new()
        .or(TowerParser::new(&registry))
        .or(HeroParser::new(&registry))
        .or(PersonParser::new());
    let miss = parser.parse("logs").unwrap_err();
    assert_eq!(
        miss.expected,
        vec![EntityKind::Tower, EntityKind::Hero, EntityKind::Person]
    );
    assert_eq!(miss.to_string(), "`logs` is not a permitted tower, hero, or person");
}

#[test]
fn miss_converts_to_not_found() {
    let registry = registry();
    let single = OrParser::new().or(MapParser::new(&registry));
    let err: towerindex_foundation::Error = single.parse("quincy").unwrap_err().into();
    assert!(matches!(
        err.kind,
        ErrorKind::NotFound { expected: Some(EntityKind::Map), .. }
    ));
}

#[test]
fn empty_alternation_matches_nothing() {
    let parser = OrParser::new();
    assert!(parser.is_empty());
    assert!(parser.parse("anything").unwrap_err().expected.is_empty());
}
