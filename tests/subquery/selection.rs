//! Integration tests for most-specific subquery selection and NotFound.

use monquery_foundation::{ErrorKind, MonsterId};
use monquery_subquery::{ExtraInfo, MatchRecord, ModifierMatch, SubqueryToken, build_extra_info};

fn id(raw: u32) -> MonsterId {
    MonsterId::new(raw)
}

/// E1 matches T1 (3 parents, child 11) and T2 (1 parent, child 12).
fn restrictiveness_pass() -> (SubqueryToken, SubqueryToken, Vec<MatchRecord<MonsterId>>) {
    let t1 = SubqueryToken::new("evoof", "tamadra");
    let t2 = SubqueryToken::new("evoof", "king metal dragon");
    let records = vec![
        MatchRecord::new(
            id(1),
            vec![
                ModifierMatch::resolved("evoof", t1.clone(), id(11)),
                ModifierMatch::resolved("evoof", t2.clone(), id(12)),
                ModifierMatch::plain("dragon"),
            ],
        ),
        MatchRecord::new(id(2), vec![ModifierMatch::resolved("evoof", t1.clone(), id(11))]),
        MatchRecord::new(id(3), vec![ModifierMatch::resolved("evoof", t1.clone(), id(11))]),
    ];
    (t1, t2, records)
}

#[test]
fn strictly_smaller_map_wins() {
    let (t1, t2, records) = restrictiveness_pass();
    let info = build_extra_info(&records);

    assert_eq!(info.subquery(&t1).unwrap().weight(), 3);
    assert_eq!(info.subquery(&t2).unwrap().weight(), 1);
    assert_eq!(info.get_subquery_mon(id(1)).unwrap(), id(12));
}

#[test]
fn smaller_map_wins_regardless_of_input_order() {
    let (_, _, mut records) = restrictiveness_pass();
    records.reverse();
    for record in &mut records {
        record.mods.reverse();
    }
    let info = build_extra_info(&records);
    assert_eq!(info.get_subquery_mon(id(1)).unwrap(), id(12));
}

#[test]
fn ties_are_deterministic() {
    let a = SubqueryToken::new("evoof", "alpha");
    let b = SubqueryToken::new("evoof", "beta");
    let forward = vec![MatchRecord::new(
        id(1),
        vec![
            ModifierMatch::resolved("evoof", a.clone(), id(100)),
            ModifierMatch::resolved("evoof", b.clone(), id(200)),
        ],
    )];
    let backward = vec![MatchRecord::new(
        id(1),
        vec![
            ModifierMatch::resolved("evoof", b, id(200)),
            ModifierMatch::resolved("evoof", a, id(100)),
        ],
    )];

    assert_eq!(build_extra_info(&forward).get_subquery_mon(id(1)).unwrap(), id(100));
    assert_eq!(build_extra_info(&backward).get_subquery_mon(id(1)).unwrap(), id(100));
}

#[test]
fn parent_without_subquery_is_not_found() {
    let (_, _, records) = restrictiveness_pass();
    let info = build_extra_info(&records);

    let err = info.get_subquery_mon(id(42)).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.kind, ErrorKind::NoSubqueryMatch(id(42)));
}

#[test]
fn undiscovered_child_is_not_found() {
    let (_, _, records) = restrictiveness_pass();
    let info = build_extra_info(&records);

    assert_eq!(*info.get_monster(id(11)).unwrap(), id(11));
    let err = info.get_monster(id(13)).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.kind, ErrorKind::SubqueryMonsterNotFound(id(13)));
}

#[test]
fn explanation_names_subquery_and_alternatives() {
    let (t1, t2, records) = restrictiveness_pass();
    let info = build_extra_info(&records);

    let explanation = info.explain(id(1)).unwrap();
    assert_eq!(explanation.label(), "evoof");
    assert_eq!(explanation.subquery(), t2.subquery);
    assert_eq!(explanation.weight(), 1);
    assert_eq!(*explanation.monster, id(12));
    assert!(explanation.is_contested());
    assert_eq!(explanation.alternatives[0].data.token, t1);
    assert_eq!(
        explanation.to_string(),
        "#1 via evoof(king metal dragon) [1 match] -> #12\n  also evoof(tamadra) [3 matches] -> #11"
    );

    let single = info.explain(id(2)).unwrap();
    assert!(!single.is_contested());
    assert_eq!(single.child(), id(11));
}

#[test]
fn empty_info_finds_nothing() {
    let info: ExtraInfo<MonsterId> = ExtraInfo::empty();
    assert!(info.get_subquery_mon(id(1)).unwrap_err().is_not_found());
    assert!(info.get_monster(id(1)).unwrap_err().is_not_found());
    assert!(info.explain(id(1)).unwrap_err().is_not_found());
}
