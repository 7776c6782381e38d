//! Core types, values, and frozen collections for monquery.
//!
//! This crate provides:
//! - [`MonsterId`] - Stable integer identity of a monster in the corpus
//! - [`Value`] - Attribute values read from monsters
//! - [`FrozenMap`] - Immutable ordered map with structural sharing
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod monster;
pub mod value;

pub use collections::FrozenMap;
pub use error::{Error, ErrorContext, ErrorKind};
pub use monster::MonsterId;
pub use value::Value;

/// Result type for monquery operations.
pub type Result<T> = std::result::Result<T, Error>;
