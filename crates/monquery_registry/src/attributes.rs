//! Attribute aliases for numeric, string, and boolean monster fields.
//!
//! An attribute alias such as `hp` or `lsname` names an ordered list of
//! candidate [`AttributePath`]s. Resolution walks the candidates in order and
//! uses the first one that yields a present value, which is how a Japanese
//! name is used when the English one is missing.

use std::collections::HashMap;
use std::fmt;

use monquery_foundation::Value;

use crate::config::{Locale, RegistryConfig};

/// Placeholder replaced by a locale suffix in localized path templates.
const LOCALE_PLACEHOLDER: &str = "{locale}";

/// The kind of value an attribute alias produces. Each kind is an
/// independent lookup space.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueKind {
    /// Integer-valued fields (`hp`, `rarity`, ...).
    Numeric,
    /// Text fields (`lsname`, `seriesname`, ...).
    String,
    /// Flag fields.
    Boolean,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Numeric => "numeric",
            Self::String => "string",
            Self::Boolean => "boolean",
        })
    }
}

/// Something attribute values can be read from, usually a monster.
pub trait AttributeSource {
    /// Returns the top-level attribute called `name`, if the source has it.
    fn attribute(&self, name: &str) -> Option<Value>;
}

impl AttributeSource for Value {
    fn attribute(&self, name: &str) -> Option<Value> {
        self.field(name).cloned()
    }
}

impl AttributeSource for HashMap<String, Value> {
    fn attribute(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

/// A nested field access sequence, e.g. `leader_skill.name_en`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AttributePath(Vec<String>);

impl AttributePath {
    /// Creates a path from its segments.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Returns the path segments.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Reads the value at this path.
    ///
    /// Returns `None` when any segment is missing or the final value is not
    /// present (nil or empty string).
    pub fn resolve<S: AttributeSource + ?Sized>(&self, source: &S) -> Option<Value> {
        let (first, rest) = self.0.split_first()?;
        let mut value = source.attribute(first)?;
        for segment in rest {
            value = value.field(segment)?.clone();
        }
        value.is_present().then_some(value)
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

/// Ordered candidate paths for one attribute alias.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CandidatePaths(Vec<AttributePath>);

impl CandidatePaths {
    /// Creates a candidate list.
    #[must_use]
    pub fn new(paths: Vec<AttributePath>) -> Self {
        Self(paths)
    }

    /// Creates a candidate list with a single path.
    pub fn single<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(vec![AttributePath::new(segments)])
    }

    /// Expands path templates for each locale, in order.
    ///
    /// A template with a `{locale}` segment placeholder yields one path per
    /// locale; a template without one yields itself.
    #[must_use]
    pub fn localized(templates: &[&[&str]], locales: &[Locale]) -> Self {
        let mut paths = Vec::new();
        for template in templates {
            if template.iter().any(|s| s.contains(LOCALE_PLACEHOLDER)) {
                for locale in locales {
                    paths.push(AttributePath::new(
                        template
                            .iter()
                            .map(|s| s.replace(LOCALE_PLACEHOLDER, locale.suffix())),
                    ));
                }
            } else {
                paths.push(AttributePath::new(template.iter().copied()));
            }
        }
        Self(paths)
    }

    /// Returns the candidate paths in order.
    #[must_use]
    pub fn paths(&self) -> &[AttributePath] {
        &self.0
    }

    /// Returns the value at the first candidate that has one.
    pub fn first_present<S: AttributeSource + ?Sized>(&self, source: &S) -> Option<Value> {
        self.0.iter().find_map(|path| path.resolve(source))
    }
}

impl fmt::Display for CandidatePaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, path) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{path}")?;
        }
        Ok(())
    }
}

/// One row of an attribute alias table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeAliasEntry {
    /// Candidate paths, in fallback order.
    pub paths: CandidatePaths,
    /// Aliases that name these paths.
    pub aliases: Vec<String>,
}

impl AttributeAliasEntry {
    /// Creates an entry.
    pub fn new<S: Into<String>>(paths: CandidatePaths, aliases: impl IntoIterator<Item = S>) -> Self {
        Self {
            paths,
            aliases: aliases.into_iter().map(Into::into).collect(),
        }
    }
}

/// Attribute alias tables, one per value kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttributeTables {
    /// Numeric field aliases.
    pub numeric: Vec<AttributeAliasEntry>,
    /// String field aliases.
    pub string: Vec<AttributeAliasEntry>,
    /// Boolean field aliases.
    pub boolean: Vec<AttributeAliasEntry>,
}

/// Built-in numeric aliases: field path and aliases.
const NUMERIC_ATTRIBUTES: &[(&[&str], &[&str])] = &[
    (&["monster_no"], &["monsterid", "monsterno", "monster#"]),
    (&["base_evo_id"], &["baseid"]),
    (&["superawakening_count"], &["sacount"]),
    (&["leader_skill", "leader_skill_id"], &["lsid"]),
    (&["active_skill", "active_skill_id"], &["asid"]),
    (&["series", "series_id"], &["sid"]),
    (&["rarity"], &["rarity", "rare"]),
    (&["series_id"], &["seriesid", "series#"]),
    (&["buy_mp"], &["buymp"]),
    (&["sell_mp"], &["sellmp"]),
    (&["sell_gold"], &["gold", "coins"]),
    (&["cost"], &["cost", "teamcost"]),
    (&["exp"], &["exp", "exptomax", "xptomax"]),
    (&["fodder_exp"], &["fodderexp"]),
    (&["level"], &["maxlvl", "maxlevel"]),
    (&["latent_slots"], &["latentslots"]),
    (&["hp_max"], &["hp", "maxhp"]),
    (&["atk_max"], &["atk", "maxatk"]),
    (&["rcv_max"], &["rcv", "maxrcv"]),
    (&["hp_min"], &["minhp"]),
    (&["atk_min"], &["minatk"]),
    (&["rcv_min"], &["minrcv"]),
];

/// Built-in string aliases: localized path templates and aliases.
const STRING_ATTRIBUTES: &[(&[&[&str]], &[&str])] = &[
    (&[&["name_{locale}"]], &["monstername", "cardname"]),
    (
        &[&["leader_skill", "name_{locale}"], &["active_skill", "name_{locale}"]],
        &["skillname"],
    ),
    (
        &[&["leader_skill", "desc_{locale}"], &["active_skill", "desc_{locale}"]],
        &["skilltext"],
    ),
    (&[&["leader_skill", "name_{locale}"]], &["lsname"]),
    (&[&["leader_skill", "desc_{locale}"]], &["lsdesc"]),
    (&[&["active_skill", "name_{locale}"]], &["asname"]),
    (&[&["active_skill", "desc_{locale}"]], &["asdesc"]),
    (&[&["series", "name_{locale}"]], &["seriesname"]),
    (&[&["history_us"]], &["regdate", "dateadded"]),
];

impl AttributeTables {
    /// Creates empty tables.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Built-in tables, with localized string paths expanded in the
    /// configured locale order. An empty locale list falls back to English.
    #[must_use]
    pub fn standard(config: &RegistryConfig) -> Self {
        let locales: &[Locale] = if config.locales.is_empty() {
            &[Locale::En]
        } else {
            &config.locales
        };

        Self {
            numeric: NUMERIC_ATTRIBUTES
                .iter()
                .map(|(path, aliases)| {
                    AttributeAliasEntry::new(CandidatePaths::single(path.iter().copied()), aliases.iter().copied())
                })
                .collect(),
            string: STRING_ATTRIBUTES
                .iter()
                .map(|(templates, aliases)| {
                    AttributeAliasEntry::new(CandidatePaths::localized(templates, locales), aliases.iter().copied())
                })
                .collect(),
            boolean: Vec::new(),
        }
    }

    /// Returns the entries of one kind.
    #[must_use]
    pub fn entries(&self, kind: ValueKind) -> &[AttributeAliasEntry] {
        match kind {
            ValueKind::Numeric => &self.numeric,
            ValueKind::String => &self.string,
            ValueKind::Boolean => &self.boolean,
        }
    }
}
