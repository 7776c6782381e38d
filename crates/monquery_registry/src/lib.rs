//! Alias registry for monster search modifiers.
//!
//! Users type short, informal modifiers ("uvo", "mech", "srevo") next to a
//! monster name. This crate maps those aliases onto canonical tags, checks
//! that no alias is ambiguous, and answers the questions a query tokenizer
//! asks about each word.
//!
//! # Architecture
//!
//! ```text
//! built-in tables + RegistryConfig
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ALIAS TABLES    │  → one per domain, one combined (collision-checked)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ALIAS REGISTRY  │  → tag_of, match_phrase_prefix, is_hazardous_in_name, ...
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ CLASSIFY        │  → [Modifier(evo/Ultimate), Unrecognized, ...]
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tags`] - Canonical tag enumerations
//! - [`table`] - Collision-checked alias tables
//! - [`tables`] - Built-in alias data
//! - [`attributes`] - Attribute aliases and path resolution
//! - [`config`] - Registry configuration
//! - [`registry`] - The validated registry
//! - [`tokenizer`] - Query tokenization
//! - [`awakening`] - Equivalent awakening skills

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

#[macro_use]
mod macros;

pub mod attributes;
pub mod awakening;
pub mod config;
pub mod registry;
pub mod table;
pub mod tables;
pub mod tags;
pub mod tokenizer;

// Re-export main types for convenience
pub use attributes::{AttributeAliasEntry, AttributePath, AttributeSource, AttributeTables, CandidatePaths, ValueKind};
pub use awakening::{AwokenSkill, EquivalentAwakening, count_awakenings, equivalent_awakening};
pub use config::{Locale, RegistryConfig};
pub use registry::{AliasRegistry, ClassifiedToken, RegistryTables, TokenClass};
pub use table::{AliasTable, AliasTarget, normalize_alias};
pub use tags::{CanonicalTag, CreatureType, EvoStage, MiscModifier, TagDomain};
pub use tokenizer::{InputToken, InputTokenizer};
