//! Match records produced by one match pass.
//!
//! These are the aggregator's input. The matcher emits one [`MatchRecord`]
//! per matched monster; each of its [`ModifierMatch`]es may carry a
//! [`SubqueryMatch`] when the modifier needed a nested monster (e.g. "evo of
//! tamadra").

use std::fmt;

use monquery_foundation::MonsterId;

/// A resolved monster from the corpus.
pub trait Monster: Clone {
    /// Stable identity of the monster.
    fn monster_id(&self) -> MonsterId;
}

impl Monster for MonsterId {
    fn monster_id(&self) -> MonsterId {
        *self
    }
}

/// Identity of a subquery: the modifier label and the original subquery text.
///
/// Ordered by label, then text.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubqueryToken {
    /// The modifier label, e.g. `evoof`.
    pub label: String,
    /// The nested query as the user typed it.
    pub subquery: String,
}

impl SubqueryToken {
    /// Creates a subquery token.
    pub fn new(label: impl Into<String>, subquery: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            subquery: subquery.into(),
        }
    }
}

impl fmt::Display for SubqueryToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.label, self.subquery)
    }
}

/// The subquery part of a modifier match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubqueryMatch<M> {
    /// The subquery the modifier came from.
    pub token: SubqueryToken,
    /// The nested monster the subquery resolved to, if it resolved.
    pub result: Option<M>,
}

/// One modifier that matched a monster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModifierMatch<M> {
    /// Label of the matched token.
    pub label: String,
    /// Present when the modifier came from a subquery.
    pub subquery: Option<SubqueryMatch<M>>,
}

impl<M> ModifierMatch<M> {
    /// A plain modifier match with no subquery.
    pub fn plain(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            subquery: None,
        }
    }

    /// A modifier match produced by a subquery that resolved to `result`.
    pub fn resolved(label: impl Into<String>, token: SubqueryToken, result: M) -> Self {
        Self {
            label: label.into(),
            subquery: Some(SubqueryMatch {
                token,
                result: Some(result),
            }),
        }
    }

    /// A modifier match produced by a subquery that did not resolve.
    pub fn unresolved(label: impl Into<String>, token: SubqueryToken) -> Self {
        Self {
            label: label.into(),
            subquery: Some(SubqueryMatch { token, result: None }),
        }
    }

    /// The subquery token and resolved monster, if both are present.
    #[must_use]
    pub fn subquery_result(&self) -> Option<(&SubqueryToken, &M)> {
        let sub = self.subquery.as_ref()?;
        sub.result.as_ref().map(|m| (&sub.token, m))
    }
}

/// Every modifier match of one matched monster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchRecord<M> {
    /// The matched monster.
    pub monster_id: MonsterId,
    /// Modifier matches, in match order.
    pub mods: Vec<ModifierMatch<M>>,
}

impl<M> MatchRecord<M> {
    /// Creates a record.
    pub fn new(monster_id: impl Into<MonsterId>, mods: Vec<ModifierMatch<M>>) -> Self {
        Self {
            monster_id: monster_id.into(),
            mods,
        }
    }
}
