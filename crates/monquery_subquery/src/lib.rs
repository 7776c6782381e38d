//! Subquery aggregation for monster search.
//!
//! Some modifiers carry a nested query ("evo of tamadra"). After a match
//! pass, this crate indexes which parent matched through which subquery and
//! picks the most specific one to show the user.
//!
//! This crate provides:
//! - [`MatchRecord`] - Match pass output consumed by the aggregator
//! - [`ExtraInfo`] - Immutable per-request subquery index
//! - [`SubqueryExplanation`] - Why a monster matched through a subquery

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod explain;
pub mod extra_info;
pub mod record;

pub use explain::{SubqueryCandidate, SubqueryExplanation};
pub use extra_info::{ExtraInfo, SubqueryData, SubqueryMonsters, build_extra_info};
pub use record::{MatchRecord, ModifierMatch, Monster, SubqueryMatch, SubqueryToken};
