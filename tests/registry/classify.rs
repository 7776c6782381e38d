//! Integration tests for query tokenization and classification.

use monquery_registry::{
    AliasRegistry, CanonicalTag, CreatureType, EvoStage, InputToken, InputTokenizer, MiscModifier, TokenClass,
};

fn registry() -> &'static AliasRegistry {
    AliasRegistry::standard().unwrap()
}

fn tags(input: &str) -> Vec<Option<CanonicalTag>> {
    registry()
        .classify_query(input)
        .iter()
        .map(|t| t.tag())
        .collect()
}

#[test]
fn phrases_before_words() {
    let classified = registry().classify_query("super reincarnated orb skin sonia");
    let texts: Vec<String> = classified.iter().map(|t| t.text()).collect();
    assert_eq!(texts, vec!["super reincarnated", "orb skin", "sonia"]);

    assert_eq!(classified[0].tag(), Some(CanonicalTag::from(EvoStage::SuperReincarnated)));
    assert_eq!(classified[1].tag(), Some(CanonicalTag::from(MiscModifier::OrbSkin)));
    assert_eq!(classified[2].class, TokenClass::ProblematicSeries);
}

#[test]
fn single_words_when_no_phrase_matches() {
    assert_eq!(
        tags("super dragon"),
        vec![
            Some(CanonicalTag::from(EvoStage::SuperReincarnated)),
            Some(CanonicalTag::from(CreatureType::Dragon)),
        ]
    );
}

#[test]
fn unknown_words_are_unrecognized() {
    let classified = registry().classify_query("tamadra uvo");
    assert_eq!(classified[0].class, TokenClass::Unrecognized);
    assert_eq!(classified[0].alias(), "tamadra");
    assert_eq!(classified[1].tag(), Some(CanonicalTag::from(EvoStage::Ultimate)));
}

#[test]
fn punctuation_is_stripped_but_alias_symbols_kept() {
    assert_eq!(
        tags("(7*gfeshop), 3ping!!!"),
        vec![Some(CanonicalTag::from(MiscModifier::GfeShop7Star)), None]
    );
    assert_eq!(tags("!!!"), vec![Some(CanonicalTag::from(MiscModifier::NoNullAttribute))]);
}

#[test]
fn inner_punctuation_separates_modifiers() {
    assert_eq!(
        tags("dra,uvo"),
        vec![Some(CanonicalTag::from(CreatureType::Dragon)), Some(CanonicalTag::from(EvoStage::Ultimate))]
    );

    let classified = registry().classify_query("evoof(tamadra) uvo");
    let texts: Vec<String> = classified.iter().map(|t| t.text()).collect();
    assert_eq!(texts, vec!["evoof", "tamadra", "uvo"]);
    assert_eq!(classified[2].tag(), Some(CanonicalTag::from(EvoStage::Ultimate)));

    assert_eq!(
        registry().infer_from_name("Pixel.Chibi Dragon"),
        vec![
            CanonicalTag::from(EvoStage::Pixel),
            CanonicalTag::from(EvoStage::Chibi),
            CanonicalTag::from(CreatureType::Dragon),
        ]
    );
}

#[test]
fn quoted_strings_are_never_modifiers() {
    let tokens = InputTokenizer::tokenize("\"dragon\" god");
    assert_eq!(tokens[0], InputToken::QuotedString("dragon".into()));
    assert_eq!(tags("\"dragon\" god"), vec![Some(CanonicalTag::from(CreatureType::God))]);
}

#[test]
fn infer_from_name_ignores_hazardous_tokens() {
    let registry = registry();
    assert!(registry.infer_from_name("Awoken Sonia").is_empty());
    assert!(registry.infer_from_name("Reincarnated Odin").is_empty());
    assert!(registry.infer_from_name("Equip Kali").is_empty());
    assert_eq!(
        registry.infer_from_name("Pixel Dragon"),
        vec![CanonicalTag::from(EvoStage::Pixel), CanonicalTag::from(CreatureType::Dragon)]
    );
}

#[test]
fn hidden_tokens_are_types_and_evos() {
    let registry = registry();
    let hidden: Vec<bool> = registry
        .classify_query("mech srevo farmable")
        .iter()
        .map(|t| registry.is_hidden_token(&t.alias()))
        .collect();
    assert_eq!(hidden, vec![true, true, false]);
}
