//! Collision-checked alias tables.
//!
//! Every lookup space in the registry (each tag domain, the combined modifier
//! space, each attribute value kind) is an [`AliasTable`]. Building one is the
//! only place an alias can be bound to a target, and building fails if any
//! alias would be bound to two different targets.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

use monquery_foundation::{Error, Result};

/// Anything an alias can resolve to.
pub trait AliasTarget: Clone + Ord + fmt::Display {}

impl<T: Clone + Ord + fmt::Display> AliasTarget for T {}

/// Normalizes an alias for storage and lookup.
#[must_use]
pub fn normalize_alias(alias: &str) -> String {
    alias.trim().to_lowercase()
}

/// Immutable mapping from alias strings to exactly one target each.
#[derive(Clone, Debug)]
pub struct AliasTable<T: AliasTarget> {
    by_alias: HashMap<String, T>,
    by_target: BTreeMap<T, BTreeSet<String>>,
}

impl<T: AliasTarget> AliasTable<T> {
    /// Builds a table from `(target, aliases)` entries.
    ///
    /// Aliases are normalized to lowercase. Repeating an alias under the same
    /// target is harmless. An alias bound to two or more distinct targets fails
    /// with a configuration collision naming every target; when several
    /// aliases collide the alphabetically first is reported.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationCollision` on an ambiguous alias.
    pub fn build<I, A, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (T, A)>,
        A: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut bindings: BTreeMap<String, BTreeSet<T>> = BTreeMap::new();
        let mut by_target: BTreeMap<T, BTreeSet<String>> = BTreeMap::new();

        for (target, aliases) in entries {
            let names = by_target.entry(target.clone()).or_default();
            for alias in aliases {
                let alias = normalize_alias(alias.as_ref());
                names.insert(alias.clone());
                bindings.entry(alias).or_default().insert(target.clone());
            }
        }

        if let Some((alias, targets)) = bindings.iter().find(|(_, targets)| targets.len() > 1) {
            return Err(Error::collision(
                alias.clone(),
                targets.iter().map(ToString::to_string).collect(),
            ));
        }

        let by_alias = bindings
            .into_iter()
            .filter_map(|(alias, targets)| targets.into_iter().next().map(|t| (alias, t)))
            .collect();

        Ok(Self { by_alias, by_target })
    }

    /// Creates an empty table.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            by_alias: HashMap::new(),
            by_target: BTreeMap::new(),
        }
    }

    /// Looks up the target of an alias.
    #[must_use]
    pub fn get(&self, alias: &str) -> Option<&T> {
        self.by_alias
            .get(alias)
            .or_else(|| self.by_alias.get(&normalize_alias(alias)))
    }

    /// Returns true if the alias is bound.
    #[must_use]
    pub fn contains(&self, alias: &str) -> bool {
        self.get(alias).is_some()
    }

    /// Returns every alias bound to `target`, in alphabetical order.
    ///
    /// Targets registered with no aliases yield an empty iterator.
    pub fn aliases_of(&self, target: &T) -> impl Iterator<Item = &str> {
        self.by_target
            .get(target)
            .into_iter()
            .flat_map(|names| names.iter().map(String::as_str))
    }

    /// Returns every bound alias (unordered).
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.by_alias.keys().map(String::as_str)
    }

    /// Returns every registered target in order.
    pub fn targets(&self) -> impl Iterator<Item = &T> {
        self.by_target.keys()
    }

    /// Returns the number of bound aliases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_alias.len()
    }

    /// Returns true if no alias is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_alias.is_empty()
    }
}

impl<T: AliasTarget> Default for AliasTable<T> {
    fn default() -> Self {
        Self::empty()
    }
}
