//! Attribute values read from monsters.

use std::fmt;
use std::sync::Arc;

use crate::collections::FrozenMap;
use crate::monster::MonsterId;

/// Value of a monster attribute.
///
/// Values are immutable and cheaply cloneable. Nested records (a leader skill,
/// a series) are `Record`s keyed by field name, so an attribute path is a walk
/// through nested records.
#[derive(Clone, PartialEq)]
pub enum Value {
    /// The nil value (represents absence).
    Nil,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    String(Arc<str>),
    /// Reference to another monster.
    MonsterRef(MonsterId),
    /// Nested record of named fields.
    Record(FrozenMap<Arc<str>, Value>),
}

impl Value {
    /// Builds a record from `(field, value)` pairs.
    pub fn record<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = (S, Value)>,
        S: Into<Arc<str>>,
    {
        Self::Record(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Returns true if this value counts as present for attribute fallback.
    ///
    /// Nil and the empty string are absent; every other value, including
    /// `0` and `false`, is present.
    #[must_use]
    pub fn is_present(&self) -> bool {
        match self {
            Self::Nil => false,
            Self::String(s) => !s.is_empty(),
            _ => true,
        }
    }

    /// Attempts to extract a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to extract an integer value.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a number as f64 (converts int to float).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(*n as f64),
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a string reference.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a monster reference.
    #[must_use]
    pub const fn as_monster(&self) -> Option<MonsterId> {
        match self {
            Self::MonsterRef(id) => Some(*id),
            _ => None,
        }
    }

    /// Attempts to extract a nested record.
    #[must_use]
    pub const fn as_record(&self) -> Option<&FrozenMap<Arc<str>, Value>> {
        match self {
            Self::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Looks up a field of a record. Non-records have no fields.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.as_record()?.get(name)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::MonsterRef(id) => write!(f, "{id:?}"),
            Self::Record(r) => write!(f, "{r:?}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
            Self::MonsterRef(id) => write!(f, "{id}"),
            Self::Record(r) => {
                write!(f, "{{")?;
                for (i, (k, v)) in r.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(Arc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(Arc::from(s))
    }
}

impl From<MonsterId> for Value {
    fn from(id: MonsterId) -> Self {
        Self::MonsterRef(id)
    }
}
