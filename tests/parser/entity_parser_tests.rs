//! Per-kind entity parser tests.

use towerindex_foundation::EntityKind;
use towerindex_parser::{
    EntityMatch, EntityParser, HeroParser, MapDifficultyParser, MapParser, PersonParser,
    TowerParser, TowerPathParser, TowerUpgradeParser,
};

use crate::registry;

#[test]
fn every_canonical_parses_as_its_kind() {
    let registry = registry();
    let parsers: Vec<(Box<dyn EntityParser + '_>, &[String])> = vec![
        (Box::new(TowerParser::new(&registry)), registry.all_towers()),
        (Box::new(TowerUpgradeParser::new(&registry)), registry.all_tower_upgrades()),
        (Box::new(TowerPathParser::new(&registry)), registry.all_tower_paths()),
        (Box::new(HeroParser::new(&registry)), registry.all_heroes()),
        (Box::new(MapParser::new(&registry)), registry.all_maps()),
        (Box::new(MapDifficultyParser::new(&registry)), registry.all_map_difficulties()),
    ];
    for (parser, canonicals) in &parsers {
        let kind = parser.kinds()[0];
        for canonical in *canonicals {
            assert_eq!(
                parser.parse(canonical),
                Ok(EntityMatch::new(kind, canonical.as_str())),
                "{kind} {canonical}"
            );
        }
    }
}

#[test]
fn parsers_reject_other_kinds() {
    let registry = registry();
    let tower = TowerParser::new(&registry);
    for token in ["dart_monkey#300", "dart_monkey#top-path", "quincy", "logs", "expert", "user#bob"] {
        let miss = tower.parse(token).unwrap_err();
        assert_eq!(miss.token, token);
        assert_eq!(miss.expected, vec![EntityKind::Tower]);
    }
}

#[test]
fn parsers_match_canonicals_not_aliases() {
    let registry = registry();
    assert!(HeroParser::new(&registry).parse("q").is_err());
    assert!(HeroParser::new(&registry).parse(" Quincy ").is_ok());
}

#[test]
fn permitted_set_accepts_aliases() {
    let registry = registry();
    let parser = MapParser::new(&registry).permitting(["meadow", "dark_castle"]);
    assert!(parser.parse("monkey_meadow").is_ok());
    assert!(parser.parse("dark_castle").is_ok());
    assert!(parser.parse("logs").is_err());
}

#[test]
fn empty_permitted_set_matches_nothing() {
    let registry = registry();
    let parser = TowerParser::new(&registry).permitting(Vec::<&str>::new());
    assert!(parser.parse("dart_monkey").is_err());
}

#[test]
fn person_parser() {
    let parser = PersonParser::new();
    assert_eq!(
        parser.parse("User#SomeOne"),
        Ok(EntityMatch::new(EntityKind::Person, "someone"))
    );
    assert!(parser.parse("user#").is_err());
    assert!(parser.parse("someone").is_err());

    let limited = PersonParser::new().permitting(["Alice"]);
    assert!(limited.parse("user#alice").is_ok());
    assert!(limited.parse("user#bob").is_err());
}

#[test]
fn no_match_display() {
    let registry = registry();
    let miss = MapDifficultyParser::new(&registry).parse("logs").unwrap_err();
    assert_eq!(miss.to_string(), "`logs` is not a permitted map_difficulty");
}
