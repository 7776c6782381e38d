//! Per-request subquery index.
//!
//! [`ExtraInfo`] is built once from the match records of a search and then
//! only read. It answers two questions for the presentation layer: which
//! nested monster explains why a parent matched, and what that nested
//! monster is.

use std::collections::BTreeMap;

use monquery_foundation::{Error, FrozenMap, MonsterId, Result};

use crate::explain::{SubqueryCandidate, SubqueryExplanation};
use crate::record::{MatchRecord, Monster, SubqueryToken};

// =============================================================================
// Aggregated Entries
// =============================================================================

/// Every parent a subquery matched in one pass, with the child it resolved to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubqueryData {
    /// The subquery these matches came from.
    pub token: SubqueryToken,
    /// Parent monster to resolved child monster.
    pub map: FrozenMap<MonsterId, MonsterId>,
}

impl SubqueryData {
    /// The modifier label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.token.label
    }

    /// The original subquery text.
    #[must_use]
    pub fn subquery(&self) -> &str {
        &self.token.subquery
    }

    /// Restrictiveness weight: the number of distinct parents matched.
    /// Smaller is more specific.
    #[must_use]
    pub fn weight(&self) -> usize {
        self.map.len()
    }

    /// The child this subquery resolved to for `parent`.
    #[must_use]
    pub fn child_of(&self, parent: MonsterId) -> Option<MonsterId> {
        self.map.get(&parent).copied()
    }
}

/// A nested monster discovered by some subquery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubqueryMonsters<M> {
    /// The child id.
    pub id: MonsterId,
    /// The first resolved monster seen for that id.
    pub monster: M,
}

// =============================================================================
// ExtraInfo
// =============================================================================

/// Immutable subquery index for one search request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtraInfo<M: Monster> {
    subquery_data: FrozenMap<SubqueryToken, SubqueryData>,
    subquery_monsters: FrozenMap<MonsterId, SubqueryMonsters<M>>,
    status: i32,
}

impl<M: Monster> Default for ExtraInfo<M> {
    fn default() -> Self {
        Self {
            subquery_data: FrozenMap::new(),
            subquery_monsters: FrozenMap::new(),
            status: 0,
        }
    }
}

/// Builds the subquery index for one match pass.
///
/// Each modifier match with a resolved subquery records `parent -> child`
/// under its token. A child id is stored with the first monster seen for it;
/// later discoveries of the same id are ignored.
pub fn build_extra_info<'a, M, I>(records: I) -> ExtraInfo<M>
where
    M: Monster + 'a,
    I: IntoIterator<Item = &'a MatchRecord<M>>,
{
    let mut accumulator: BTreeMap<&SubqueryToken, BTreeMap<MonsterId, MonsterId>> = BTreeMap::new();
    let mut children: BTreeMap<MonsterId, &M> = BTreeMap::new();
    let mut parents = 0usize;

    for record in records {
        parents += 1;
        for (token, child) in record.mods.iter().filter_map(|m| m.subquery_result()) {
            let child_id = child.monster_id();
            accumulator
                .entry(token)
                .or_default()
                .insert(record.monster_id, child_id);
            children.entry(child_id).or_insert(child);
        }
    }

    let subquery_data: FrozenMap<_, _> = accumulator
        .into_iter()
        .map(|(token, map)| {
            (
                token.clone(),
                SubqueryData {
                    token: token.clone(),
                    map: map.into_iter().collect(),
                },
            )
        })
        .collect();
    let subquery_monsters: FrozenMap<_, _> = children
        .into_iter()
        .map(|(id, monster)| {
            (
                id,
                SubqueryMonsters {
                    id,
                    monster: monster.clone(),
                },
            )
        })
        .collect();

    tracing::debug!(
        records = parents,
        subqueries = subquery_data.len(),
        children = subquery_monsters.len(),
        "extra info built"
    );

    ExtraInfo {
        subquery_data,
        subquery_monsters,
        status: 0,
    }
}

impl<M: Monster> ExtraInfo<M> {
    /// Builds the index from match records. See [`build_extra_info`].
    pub fn build<'a, I>(records: I) -> Self
    where
        M: 'a,
        I: IntoIterator<Item = &'a MatchRecord<M>>,
    {
        build_extra_info(records)
    }

    /// Creates an empty index.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Reserved status code. Always `0`.
    #[must_use]
    pub fn status(&self) -> i32 {
        self.status
    }

    /// Returns true if no subquery resolved in this pass.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subquery_data.is_empty()
    }

    /// Returns every subquery entry, ordered by token.
    pub fn subquery_data(&self) -> impl Iterator<Item = &SubqueryData> {
        self.subquery_data.values()
    }

    /// Returns the entry for one subquery token.
    #[must_use]
    pub fn subquery(&self, token: &SubqueryToken) -> Option<&SubqueryData> {
        self.subquery_data.get(token)
    }

    /// Returns every discovered child monster, ordered by id.
    pub fn subquery_monsters(&self) -> impl Iterator<Item = &SubqueryMonsters<M>> {
        self.subquery_monsters.values()
    }

    /// Every subquery that matched `parent`, most specific first.
    ///
    /// Ordered by weight, then by token (label, then subquery text).
    #[must_use]
    pub fn candidates(&self, parent: MonsterId) -> Vec<SubqueryCandidate<'_>> {
        let mut candidates: Vec<_> = self
            .subquery_data
            .values()
            .filter_map(|data| data.child_of(parent).map(|child| SubqueryCandidate { data, child }))
            .collect();
        // Stable sort keeps token order among equal weights.
        candidates.sort_by_key(|c| c.data.weight());
        candidates
    }

    fn best_match(&self, parent: MonsterId) -> Option<SubqueryCandidate<'_>> {
        let mut best: Option<SubqueryCandidate<'_>> = None;
        for data in self.subquery_data.values() {
            let Some(child) = data.child_of(parent) else {
                continue;
            };
            let replace = match &best {
                None => true,
                Some(current) => {
                    if current.data.weight() == data.weight() {
                        tracing::trace!(
                            %parent,
                            kept = %current.data.token,
                            skipped = %data.token,
                            weight = data.weight(),
                            "subquery tie broken by token order"
                        );
                    }
                    data.weight() < current.data.weight()
                }
            };
            if replace {
                best = Some(SubqueryCandidate { data, child });
            }
        }
        best
    }

    /// The child monster of the most specific subquery that matched
    /// `parent`.
    ///
    /// The subquery with the fewest matched parents wins. Ties go to the
    /// smallest token (label, then subquery text).
    ///
    /// # Errors
    ///
    /// Returns `NoSubqueryMatch` if no subquery matched `parent`.
    pub fn get_subquery_mon(&self, parent: MonsterId) -> Result<MonsterId> {
        self.best_match(parent)
            .map(|c| c.child)
            .ok_or_else(|| Error::no_subquery_match(parent))
    }

    /// The resolved monster for a child id.
    ///
    /// # Errors
    ///
    /// Returns `SubqueryMonsterNotFound` if no subquery discovered `child`.
    pub fn get_monster(&self, child: MonsterId) -> Result<&M> {
        self.subquery_monsters
            .get(&child)
            .map(|entry| &entry.monster)
            .ok_or_else(|| Error::subquery_monster_not_found(child))
    }

    /// Explains why `parent` matched: the chosen subquery, its child, and
    /// the competing subqueries.
    ///
    /// # Errors
    ///
    /// Returns `NoSubqueryMatch` if no subquery matched `parent`.
    pub fn explain(&self, parent: MonsterId) -> Result<SubqueryExplanation<'_, M>> {
        let chosen = self
            .best_match(parent)
            .ok_or_else(|| Error::no_subquery_match(parent))?;
        let monster = self.get_monster(chosen.child)?;
        let alternatives = self
            .candidates(parent)
            .into_iter()
            .filter(|c| c.data.token != chosen.data.token)
            .collect();

        Ok(SubqueryExplanation {
            parent,
            chosen,
            monster,
            alternatives,
        })
    }
}
