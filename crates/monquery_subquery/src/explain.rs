//! Explanations of subquery matches for the presentation layer.
//!
//! # Example
//!
//! ```text
//! "evoof(tamadra) evoof(king metal dragon)" matched #4412
//! ;; => #4412 via evoof(king metal dragon) [1 match] -> #1703
//! ;;    also evoof(tamadra) [12 matches] -> #1283
//! ```

use std::fmt;

use monquery_foundation::MonsterId;

use crate::extra_info::SubqueryData;

// =============================================================================
// Candidate
// =============================================================================

/// One subquery that matched a parent, and the child it resolved to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SubqueryCandidate<'a> {
    /// The subquery entry.
    pub data: &'a SubqueryData,
    /// The child resolved for the parent.
    pub child: MonsterId,
}

impl fmt::Display for SubqueryCandidate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let weight = self.data.weight();
        let noun = if weight == 1 { "match" } else { "matches" };
        write!(f, "{} [{weight} {noun}] -> {}", self.data.token, self.child)
    }
}

// =============================================================================
// Explanation
// =============================================================================

/// Why a parent monster matched through a subquery.
#[derive(Clone, Debug)]
pub struct SubqueryExplanation<'a, M> {
    /// The matched parent.
    pub parent: MonsterId,

    /// The most specific subquery.
    pub chosen: SubqueryCandidate<'a>,

    /// The resolved child of the chosen subquery.
    pub monster: &'a M,

    /// Other subqueries that matched the parent, most specific first.
    pub alternatives: Vec<SubqueryCandidate<'a>>,
}

impl<M> SubqueryExplanation<'_, M> {
    /// The chosen subquery's label.
    #[must_use]
    pub fn label(&self) -> &str {
        self.chosen.data.label()
    }

    /// The chosen subquery's original text.
    #[must_use]
    pub fn subquery(&self) -> &str {
        self.chosen.data.subquery()
    }

    /// Restrictiveness weight of the chosen subquery.
    #[must_use]
    pub fn weight(&self) -> usize {
        self.chosen.data.weight()
    }

    /// The chosen child id.
    #[must_use]
    pub fn child(&self) -> MonsterId {
        self.chosen.child
    }

    /// Returns true if more than one subquery matched the parent.
    #[must_use]
    pub fn is_contested(&self) -> bool {
        !self.alternatives.is_empty()
    }
}

impl<M> fmt::Display for SubqueryExplanation<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} via {}", self.parent, self.chosen)?;
        for alt in &self.alternatives {
            write!(f, "\n  also {alt}")?;
        }
        Ok(())
    }
}
