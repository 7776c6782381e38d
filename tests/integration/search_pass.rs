//! A miniature search pass: classify a query with the registry, match a
//! small corpus, aggregate subqueries, and explain the result.

use monquery::foundation::{MonsterId, Value};
use monquery::registry::{AliasRegistry, CanonicalTag, CreatureType, EvoStage, TokenClass, ValueKind};
use monquery::subquery::{ExtraInfo, MatchRecord, ModifierMatch, Monster, SubqueryToken, build_extra_info};

#[derive(Clone, Debug, PartialEq)]
struct Card {
    id: u32,
    attrs: Value,
    tags: Vec<CanonicalTag>,
    base: Option<u32>,
}

impl Monster for Card {
    fn monster_id(&self) -> MonsterId {
        MonsterId::new(self.id)
    }
}

fn card(id: u32, name_en: &str, base: Option<u32>, tags: Vec<CanonicalTag>) -> Card {
    Card {
        id,
        attrs: Value::record([
            ("monster_no", Value::Int(i64::from(id))),
            ("name_en", Value::from(name_en)),
            ("name_ja", Value::from(format!("{name_en} (ja)"))),
        ]),
        tags,
        base,
    }
}

fn corpus() -> Vec<Card> {
    let dragon = CanonicalTag::from(CreatureType::Dragon);
    vec![
        card(1, "Tamadra", None, vec![]),
        card(2, "King Tamadra", Some(1), vec![dragon]),
        card(3, "Reincarnated King Tamadra", Some(1), vec![dragon, EvoStage::Reincarnated.into()]),
        card(10, "Odin", None, vec![]),
        card(11, "Awoken Odin", Some(10), vec![dragon, EvoStage::Awakened.into()]),
    ]
}

/// Matches every card that evolves from a card named like `subquery` and
/// carries every tag the query names.
fn search(query_tags: &[CanonicalTag], subquery: &str, cards: &[Card]) -> Vec<MatchRecord<Card>> {
    let token = SubqueryToken::new("evoof", subquery);
    let bases: Vec<&Card> = cards
        .iter()
        .filter(|c| {
            c.attrs
                .field("name_en")
                .and_then(Value::as_str)
                .is_some_and(|n| n.eq_ignore_ascii_case(subquery))
        })
        .collect();

    cards
        .iter()
        .filter(|c| query_tags.iter().all(|t| c.tags.contains(t)))
        .filter_map(|c| {
            let base = bases.iter().find(|b| Some(b.id) == c.base)?;
            let mut mods: Vec<ModifierMatch<Card>> = query_tags
                .iter()
                .map(|t| ModifierMatch::plain(t.to_string()))
                .collect();
            mods.push(ModifierMatch::resolved("evoof", token.clone(), (*base).clone()));
            Some(MatchRecord::new(c.id, mods))
        })
        .collect()
}

#[test]
fn query_to_explanation() {
    let registry = AliasRegistry::standard().unwrap();
    let classified = registry.classify_query("dra \"tamadra\"");

    let query_tags: Vec<CanonicalTag> = classified.iter().filter_map(|t| t.tag()).collect();
    assert_eq!(query_tags, vec![CanonicalTag::from(CreatureType::Dragon)]);

    let cards = corpus();
    let records = search(&query_tags, "tamadra", &cards);
    assert_eq!(records.len(), 2);

    let info: ExtraInfo<Card> = build_extra_info(&records);
    assert_eq!(info.status(), 0);

    let child = info.get_subquery_mon(MonsterId::new(3)).unwrap();
    assert_eq!(child, MonsterId::new(1));

    let base = info.get_monster(child).unwrap();
    assert_eq!(
        registry.resolve_attribute("monstername", ValueKind::String, &base.attrs).unwrap(),
        Some(Value::from("Tamadra"))
    );

    let explanation = info.explain(MonsterId::new(2)).unwrap();
    assert_eq!(explanation.subquery(), "tamadra");
    assert_eq!(explanation.weight(), 2);
}

#[test]
fn problematic_series_is_a_subquery_not_a_modifier() {
    let registry = AliasRegistry::standard().unwrap();
    let classified = registry.classify_query("awoken odin");
    assert_eq!(classified[0].tag(), Some(CanonicalTag::from(EvoStage::Awakened)));
    assert_eq!(classified[1].class, TokenClass::ProblematicSeries);

    let query_tags: Vec<CanonicalTag> = classified.iter().filter_map(|t| t.tag()).collect();
    let records = search(&query_tags, &classified[1].text(), &corpus());
    let info = build_extra_info(&records);

    assert_eq!(info.get_subquery_mon(MonsterId::new(11)).unwrap(), MonsterId::new(10));
    assert!(info.get_subquery_mon(MonsterId::new(3)).unwrap_err().is_not_found());
}

#[test]
fn names_do_not_imply_hazardous_modifiers() {
    let registry = AliasRegistry::standard().unwrap();
    for card in corpus() {
        let name = card.attrs.field("name_en").and_then(Value::as_str).unwrap_or_default();
        for tag in registry.infer_from_name(name) {
            assert_ne!(tag, CanonicalTag::from(EvoStage::Reincarnated), "{name}");
            assert_ne!(tag, CanonicalTag::from(EvoStage::Awakened), "{name}");
        }
    }
}
