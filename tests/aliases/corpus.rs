//! Integration tests for corpus loading and validation

use towerindex_aliases::{AliasCorpus, AliasRegistry, RegistryConfig};
use towerindex_foundation::ErrorKind;

const MINIMAL: &str = r#"
[[group]]
canonical = "dart_monkey"
aliases = ["dart monkey", "dart"]
directory = "towers/primary"

[[group]]
canonical = "heli_pilot"
aliases = ["heli"]
directory = "towers/military"

[[group]]
canonical = "wizard_monkey"
aliases = ["wiz"]
directory = "towers/magic"

[[group]]
canonical = "banana_farm"
aliases = ["farm"]
directory = "towers/support"
"#;

const NO_WATER: &str = "water_towers = []";

fn is_malformed(err: &towerindex_foundation::Error) -> bool {
    matches!(err.kind, ErrorKind::MalformedCorpus(_))
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn loads_from_toml_with_config() {
    let registry = AliasRegistry::from_toml(MINIMAL, Some(NO_WATER)).unwrap();
    assert_eq!(registry.all_towers().len(), 4);
    assert!(registry.all_water_towers().is_empty());
}

#[test]
fn default_config_requires_water_towers() {
    let err = AliasRegistry::from_toml(MINIMAL, None).unwrap_err();
    assert!(is_malformed(&err));
    assert!(format!("{err}").contains("sub"));
    assert_eq!(
        err.context.and_then(|c| c.source),
        Some("registry config".to_string())
    );
}

#[test]
fn invalid_toml_is_a_deserialize_error() {
    let err = AliasRegistry::from_toml("[[group]", None).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Deserialize { format: "toml", .. }));
}

// =============================================================================
// Validation
// =============================================================================

fn load(extra: &AliasCorpus) -> towerindex_foundation::Result<AliasRegistry> {
    let corpus = AliasCorpus::from_toml(MINIMAL).unwrap().with(extra.clone());
    AliasRegistry::new(&corpus, RegistryConfig::from_toml(NO_WATER).unwrap())
}

#[test]
fn rejects_empty_canonical() {
    let extra = AliasCorpus::new().with_group("", &["nothing"], "heroes");
    assert!(is_malformed(&load(&extra).unwrap_err()));
}

#[test]
fn rejects_empty_alias_list() {
    let extra = AliasCorpus::new().with_group("quincy", &[], "heroes");
    assert!(is_malformed(&load(&extra).unwrap_err()));
}

#[test]
fn rejects_blank_alias() {
    let extra = AliasCorpus::new().with_group("quincy", &["  "], "heroes");
    assert!(is_malformed(&load(&extra).unwrap_err()));
}

#[test]
fn rejects_unknown_tower_suffix() {
    let extra = AliasCorpus::new().with_group("dart_monkey#9", &["dart nine"], "towers/primary");
    assert!(is_malformed(&load(&extra).unwrap_err()));
}

#[test]
fn rejects_duplicate_canonical_in_one_kind() {
    let extra = AliasCorpus::new().with_group("heli_pilot", &["chopper"], "towers/primary");
    let err = load(&extra).unwrap_err();
    assert!(format!("{err}").contains("duplicate canonical `heli_pilot`"));
}

#[test]
fn allows_same_canonical_in_different_kinds() {
    let extra = AliasCorpus::new().with_group("heli_pilot", &["heli pilot hero"], "heroes");
    let registry = load(&extra).unwrap();
    assert!(registry.is_tower("heli_pilot"));
    assert!(registry.is_hero("heli_pilot"));
}

#[test]
fn shared_alias_keeps_first_group() {
    let extra = AliasCorpus::new()
        .with_group("quincy", &["quincy", "archer"], "heroes")
        .with_group("obyn_greenfoot", &["obyn", "archer"], "heroes");
    let registry = load(&extra).unwrap();
    assert_eq!(registry.canonical_form_of("archer"), Some("quincy"));
    assert_eq!(registry.canonical_form_of("obyn"), Some("obyn_greenfoot"));
}

#[test]
fn canonical_beats_an_alias_of_another_group() {
    let extra = AliasCorpus::new()
        .with_group("quincy", &["quincy", "logs"], "heroes")
        .with_group("logs", &["logs"], "maps/beginner");
    let registry = load(&extra).unwrap();
    assert_eq!(registry.canonical_form_of("logs"), Some("logs"));
}
