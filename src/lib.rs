//! Monquery - Search-modifier aliases and subquery aggregation for monster search
//!
//! This crate re-exports all layers of the Monquery system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: monquery_subquery   — Subquery aggregation (ExtraInfo), explanations
//! Layer 1: monquery_registry   — Alias registry, attribute aliases, tokenizer
//! Layer 0: monquery_foundation — Core types (Value, MonsterId, Error)
//! ```

pub use monquery_foundation as foundation;
pub use monquery_registry as registry;
pub use monquery_subquery as subquery;
