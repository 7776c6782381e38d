//! Integration tests for frozen collections
//!
//! Tests FrozenMap construction, ordering, and equality.

use std::collections::{BTreeMap, HashMap};

use monquery_foundation::{FrozenMap, MonsterId};

fn ids(pairs: &[(u32, u32)]) -> FrozenMap<MonsterId, MonsterId> {
    pairs
        .iter()
        .map(|&(k, v)| (MonsterId::new(k), MonsterId::new(v)))
        .collect()
}

#[test]
fn map_empty() {
    let m: FrozenMap<MonsterId, MonsterId> = FrozenMap::new();
    assert!(m.is_empty());
    assert_eq!(m.len(), 0);
    assert_eq!(m, FrozenMap::default());
}

#[test]
fn map_iterates_in_key_order() {
    let m = ids(&[(30, 1), (10, 2), (20, 3)]);
    let keys: Vec<u32> = m.keys().map(|k| k.get()).collect();
    assert_eq!(keys, vec![10, 20, 30]);
    let values: Vec<u32> = m.values().map(|v| v.get()).collect();
    assert_eq!(values, vec![2, 3, 1]);
}

#[test]
fn map_later_keys_win() {
    let m = ids(&[(1, 10), (1, 11)]);
    assert_eq!(m.len(), 1);
    assert_eq!(m.get(&MonsterId::new(1)), Some(&MonsterId::new(11)));
}

#[test]
fn map_equality_ignores_insertion_order() {
    assert_eq!(ids(&[(1, 2), (3, 4)]), ids(&[(3, 4), (1, 2)]));
    assert_ne!(ids(&[(1, 2)]), ids(&[(1, 3)]));
}

#[test]
fn map_from_std_maps() {
    let mut hash = HashMap::new();
    hash.insert("b", 2);
    hash.insert("a", 1);
    let from_hash = FrozenMap::from(hash);

    let btree: BTreeMap<_, _> = [("a", 1), ("b", 2)].into_iter().collect();
    let from_btree = FrozenMap::from(btree);

    assert_eq!(from_hash, from_btree);
    assert!(from_hash.contains_key("a"));
}

#[test]
fn map_clone_is_equal() {
    let m = ids(&(0..1000).map(|i| (i, i + 1)).collect::<Vec<_>>());
    let copy = m.clone();
    assert_eq!(m, copy);
    assert_eq!(copy.len(), 1000);
}
