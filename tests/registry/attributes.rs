//! Integration tests for attribute aliases and locale fallback.

use std::collections::HashMap;

use monquery_foundation::{ErrorKind, Value};
use monquery_registry::{AliasRegistry, AttributePath, Locale, RegistryConfig, ValueKind};

fn odin() -> Value {
    Value::record([
        ("monster_no", Value::Int(4412)),
        ("name_en", Value::from("")),
        ("name_ja", Value::from("転生オーディン")),
        ("hp_max", Value::Int(5000)),
        (
            "leader_skill",
            Value::record([("name_en", Value::from("Heart Cross")), ("name_ja", Value::from("ハートクロス"))]),
        ),
        ("series", Value::record([("series_id", Value::Int(131)), ("name_en", Value::from("Norse"))])),
        ("series_id", Value::Int(131)),
    ])
}

#[test]
fn numeric_aliases_resolve() {
    let registry = AliasRegistry::standard().unwrap();
    let mon = odin();

    assert_eq!(registry.resolve_attribute("hp", ValueKind::Numeric, &mon).unwrap(), Some(Value::Int(5000)));
    assert_eq!(registry.resolve_attribute("MaxHP", ValueKind::Numeric, &mon).unwrap(), Some(Value::Int(5000)));
    assert_eq!(
        registry.resolve_attribute("monster#", ValueKind::Numeric, &mon).unwrap(),
        Some(Value::Int(4412))
    );
}

#[test]
fn series_aliases_point_at_distinct_fields() {
    let registry = AliasRegistry::standard().unwrap();
    assert_eq!(
        registry.resolve_attribute_path("sid", ValueKind::Numeric).unwrap(),
        &[AttributePath::new(["series", "series_id"])]
    );
    assert_eq!(
        registry.resolve_attribute_path("seriesid", ValueKind::Numeric).unwrap(),
        &[AttributePath::new(["series_id"])]
    );
    assert_eq!(
        registry.resolve_attribute("sid", ValueKind::Numeric, &odin()).unwrap(),
        Some(Value::Int(131))
    );
}

#[test]
fn string_alias_falls_back_to_second_locale() {
    let registry = AliasRegistry::standard().unwrap();
    let mon = odin();

    assert_eq!(
        registry.resolve_attribute("monstername", ValueKind::String, &mon).unwrap(),
        Some(Value::from("転生オーディン"))
    );
    assert_eq!(
        registry.resolve_attribute("lsname", ValueKind::String, &mon).unwrap(),
        Some(Value::from("Heart Cross"))
    );
}

#[test]
fn english_only_has_no_fallback() {
    let registry = AliasRegistry::with_config(&RegistryConfig::english_only()).unwrap();
    assert_eq!(registry.resolve_attribute("monstername", ValueKind::String, &odin()).unwrap(), None);
}

#[test]
fn locale_order_is_configurable() {
    let config = RegistryConfig::default().with_locales([Locale::Ja, Locale::En]);
    let registry = AliasRegistry::with_config(&config).unwrap();
    assert_eq!(
        registry.resolve_attribute("lsname", ValueKind::String, &odin()).unwrap(),
        Some(Value::from("ハートクロス"))
    );
}

#[test]
fn skillname_tries_leader_then_active() {
    let registry = AliasRegistry::standard().unwrap();
    let paths = registry.resolve_attribute_path("skillname", ValueKind::String).unwrap();
    let rendered: Vec<String> = paths.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            "leader_skill.name_en",
            "leader_skill.name_ja",
            "active_skill.name_en",
            "active_skill.name_ja",
        ]
    );
}

#[test]
fn unknown_attribute_alias_is_not_found() {
    let registry = AliasRegistry::standard().unwrap();
    let err = registry
        .resolve_attribute("hp", ValueKind::Boolean, &odin())
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(
        err.kind,
        ErrorKind::AttributeAliasNotFound {
            alias: "hp".into(),
            kind: "boolean".into(),
        }
    );
}

#[test]
fn plain_map_is_an_attribute_source() {
    let registry = AliasRegistry::standard().unwrap();
    let mut mon = HashMap::new();
    mon.insert("rarity".to_string(), Value::Int(7));
    assert_eq!(registry.resolve_attribute("rare", ValueKind::Numeric, &mon).unwrap(), Some(Value::Int(7)));
    assert_eq!(registry.resolve_attribute("cost", ValueKind::Numeric, &mon).unwrap(), None);
}

#[test]
fn attribute_aliases_are_listed() {
    let registry = AliasRegistry::standard().unwrap();
    let numeric = registry.attribute_aliases(ValueKind::Numeric);
    assert!(numeric.contains("minrcv"));
    assert!(numeric.contains("series#"));
    assert!(registry.attribute_aliases(ValueKind::Boolean).is_empty());
}
