//! Error types for monquery.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Two families matter to callers: configuration errors, raised only while
//! alias tables are built and fatal to startup, and not-found errors, which are
//! ordinary outcomes on the query path (see [`Error::is_not_found`]).

use std::fmt;

use thiserror::Error;

use crate::monster::MonsterId;

/// The main error type for monquery operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a configuration collision error.
    ///
    /// `tags` is sorted so the message is stable regardless of table order.
    #[must_use]
    pub fn collision(alias: impl Into<String>, mut tags: Vec<String>) -> Self {
        tags.sort();
        tags.dedup();
        Self::new(ErrorKind::ConfigurationCollision {
            alias: alias.into(),
            tags,
        })
    }

    /// Creates an attribute alias collision error.
    #[must_use]
    pub fn attribute_collision(alias: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::new(ErrorKind::AttributeAliasCollision {
            alias: alias.into(),
            kind: kind.into(),
        })
    }

    /// Creates an unknown alias error for a configuration table.
    #[must_use]
    pub fn unknown_alias(alias: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownAlias(alias.into()))
    }

    /// Creates an alias not found error.
    #[must_use]
    pub fn alias_not_found(alias: impl Into<String>) -> Self {
        Self::new(ErrorKind::AliasNotFound(alias.into()))
    }

    /// Creates a phrase not found error.
    #[must_use]
    pub fn phrase_not_found<S: AsRef<str>>(words: &[S]) -> Self {
        Self::new(ErrorKind::PhraseNotFound(
            words.iter().map(|w| w.as_ref().to_string()).collect(),
        ))
    }

    /// Creates an attribute alias not found error.
    #[must_use]
    pub fn attribute_not_found(alias: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::new(ErrorKind::AttributeAliasNotFound {
            alias: alias.into(),
            kind: kind.into(),
        })
    }

    /// Creates an error for a monster that no subquery produced.
    #[must_use]
    pub fn no_subquery_match(id: MonsterId) -> Self {
        Self::new(ErrorKind::NoSubqueryMatch(id))
    }

    /// Creates an error for a child monster that was never discovered.
    #[must_use]
    pub fn subquery_monster_not_found(id: MonsterId) -> Self {
        Self::new(ErrorKind::SubqueryMonsterNotFound(id))
    }

    /// Returns true if this is one of the not-found kinds.
    ///
    /// Not-found errors are expected on the query path (an alias that is not a
    /// modifier, a monster without a nested subquery) and should be handled
    /// quietly rather than surfaced to end users.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::AliasNotFound(_)
                | ErrorKind::PhraseNotFound(_)
                | ErrorKind::AttributeAliasNotFound { .. }
                | ErrorKind::NoSubqueryMatch(_)
                | ErrorKind::SubqueryMonsterNotFound(_)
        )
    }

    /// Returns true if this error came from validating configuration tables.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::ConfigurationCollision { .. }
                | ErrorKind::AttributeAliasCollision { .. }
                | ErrorKind::UnknownAlias(_)
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// An alias was registered under two or more canonical tags.
    #[error("configuration collision: alias {alias:?} is registered under {}", .tags.join(", "))]
    ConfigurationCollision {
        /// The ambiguous alias.
        alias: String,
        /// Every tag the alias was registered under.
        tags: Vec<String>,
    },

    /// An attribute alias maps to two different path lists in one partition.
    #[error("configuration collision: {kind} attribute alias {alias:?} is registered twice")]
    AttributeAliasCollision {
        /// The ambiguous alias.
        alias: String,
        /// The value kind partition.
        kind: String,
    },

    /// A configuration table references an alias that is not registered.
    #[error("unknown alias in configuration: {0:?}")]
    UnknownAlias(String),

    /// No canonical tag is registered for the alias.
    #[error("alias not found: {0:?}")]
    AliasNotFound(String),

    /// The word sequence is not a registered multi-word alias.
    #[error("multi-word alias not found: {:?}", .0.join(" "))]
    PhraseNotFound(Vec<String>),

    /// No attribute alias of the given kind exists.
    #[error("{kind} attribute alias not found: {alias:?}")]
    AttributeAliasNotFound {
        /// The alias that was looked up.
        alias: String,
        /// The value kind partition.
        kind: String,
    },

    /// The monster was not produced by any subquery.
    #[error("no subquery matched monster {0}")]
    NoSubqueryMatch(MonsterId),

    /// No subquery discovered the child monster.
    #[error("subquery monster not found: {0}")]
    SubqueryMonsterNotFound(MonsterId),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Table or component that raised the error.
    pub source: Option<String>,
    /// Stages the error passed through, innermost first.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source table or component.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Adds a stage frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "in {source}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  during {frame}")?;
            }
        }
        Ok(())
    }
}
