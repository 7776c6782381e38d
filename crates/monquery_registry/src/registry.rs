//! The alias registry.
//!
//! Built once from [`RegistryTables`], validated, then shared read-only by
//! every search for the life of the process.
//!
//! ```text
//! "mega awoken dragon odin"
//!          │ InputTokenizer
//!          ▼
//! ["mega", "awoken", "dragon", "odin"]
//!          │ classify: phrases first, then single words
//!          ▼
//! [Modifier(evo/Mega Awakened) ×2 words, Modifier(type/Dragon), ProblematicSeries]
//! ```

use std::collections::{BTreeSet, HashMap, HashSet};

use monquery_foundation::{Error, ErrorContext, ErrorKind, Result, Value};
use once_cell::sync::OnceCell;

use crate::attributes::{AttributePath, AttributeSource, AttributeTables, CandidatePaths, ValueKind};
use crate::config::RegistryConfig;
use crate::table::{AliasTable, normalize_alias};
use crate::tables;
use crate::tags::{CanonicalTag, CreatureType, EvoStage, MiscModifier, TagDomain};
use crate::tokenizer::InputTokenizer;

// =============================================================================
// Input Tables
// =============================================================================

/// Raw tables a registry is built from.
#[derive(Clone, Debug)]
pub struct RegistryTables<'a> {
    /// Aliases per creature type.
    pub creature_types: &'a [(CreatureType, &'a [&'a str])],
    /// Aliases per evolution stage.
    pub evo_stages: &'a [(EvoStage, &'a [&'a str])],
    /// Aliases per miscellaneous modifier.
    pub misc_modifiers: &'a [(MiscModifier, &'a [&'a str])],
    /// Space-separated phrases recognized as one alias.
    pub multi_word: &'a [&'a str],
    /// Modifiers never inferred from a monster name.
    pub hazardous_in_name: &'a [&'a str],
    /// Modifiers allowed to end a query.
    pub legal_end: &'a [&'a str],
    /// Tokens that are also series names.
    pub problematic_series: Vec<&'a str>,
    /// Attribute alias tables.
    pub attributes: AttributeTables,
}

impl RegistryTables<'static> {
    /// Tables with nothing in them.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            creature_types: &[],
            evo_stages: &[],
            misc_modifiers: &[],
            multi_word: &[],
            hazardous_in_name: &[],
            legal_end: &[],
            problematic_series: Vec::new(),
            attributes: AttributeTables::empty(),
        }
    }
}

impl<'a> RegistryTables<'a> {
    /// The built-in tables, adjusted by `config`.
    #[must_use]
    pub fn standard(config: &'a RegistryConfig) -> Self {
        Self {
            creature_types: tables::CREATURE_TYPE_ALIASES,
            evo_stages: tables::EVO_STAGE_ALIASES,
            misc_modifiers: tables::MISC_MODIFIER_ALIASES,
            multi_word: tables::MULTI_WORD_ALIASES,
            hazardous_in_name: tables::HAZARDOUS_IN_NAME,
            legal_end: tables::LEGAL_END_TOKENS,
            problematic_series: tables::PROBLEMATIC_SERIES
                .iter()
                .copied()
                .chain(config.extra_problematic_series.iter().map(String::as_str))
                .collect(),
            attributes: AttributeTables::standard(config),
        }
    }
}

// =============================================================================
// Classified Tokens
// =============================================================================

/// What a query token (or phrase) was recognized as.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TokenClass {
    /// A search modifier.
    Modifier(CanonicalTag),
    /// A series name that must not be read as a modifier.
    ProblematicSeries,
    /// Not a modifier; part of the monster name.
    Unrecognized,
}

/// A word, or a multi-word phrase, with its classification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassifiedToken {
    /// The words covered, in order. More than one for a phrase.
    pub words: Vec<String>,
    /// What the words were recognized as.
    pub class: TokenClass,
}

impl ClassifiedToken {
    /// The covered words joined by spaces.
    #[must_use]
    pub fn text(&self) -> String {
        self.words.join(" ")
    }

    /// The alias form (words concatenated).
    #[must_use]
    pub fn alias(&self) -> String {
        self.words.concat()
    }

    /// The tag, if the token is a modifier.
    #[must_use]
    pub fn tag(&self) -> Option<CanonicalTag> {
        match self.class {
            TokenClass::Modifier(tag) => Some(tag),
            TokenClass::ProblematicSeries | TokenClass::Unrecognized => None,
        }
    }

    /// Returns true if the token covers more than one word.
    #[must_use]
    pub fn is_phrase(&self) -> bool {
        self.words.len() > 1
    }
}

// =============================================================================
// Registry
// =============================================================================

static STANDARD: OnceCell<AliasRegistry> = OnceCell::new();

/// Validated, read-only alias registry.
#[derive(Clone, Debug)]
pub struct AliasRegistry {
    creature_types: AliasTable<CreatureType>,
    evo_stages: AliasTable<EvoStage>,
    misc_modifiers: AliasTable<MiscModifier>,
    /// Every modifier alias across all domains
    modifiers: AliasTable<CanonicalTag>,
    phrases: HashMap<Vec<String>, CanonicalTag>,
    /// Distinct phrase lengths, longest first
    phrase_lengths: Vec<usize>,
    hazardous_in_name: HashSet<String>,
    legal_end: HashSet<String>,
    problematic_series: HashSet<String>,
    numeric_attributes: AliasTable<CandidatePaths>,
    string_attributes: AliasTable<CandidatePaths>,
    boolean_attributes: AliasTable<CandidatePaths>,
}

fn in_table(source: &str) -> impl FnOnce(Error) -> Error + '_ {
    move |err| err.with_context(ErrorContext::new().with_source(source).with_frame("registry build"))
}

fn known_token_set(tokens: &[&str], modifiers: &AliasTable<CanonicalTag>, source: &str) -> Result<HashSet<String>> {
    tokens
        .iter()
        .map(|token| {
            let token = normalize_alias(token);
            if modifiers.contains(&token) {
                Ok(token)
            } else {
                Err(in_table(source)(Error::unknown_alias(token)))
            }
        })
        .collect()
}

fn attribute_table(tables: &AttributeTables, kind: ValueKind) -> Result<AliasTable<CandidatePaths>> {
    AliasTable::build(
        tables
            .entries(kind)
            .iter()
            .map(|entry| (entry.paths.clone(), entry.aliases.iter())),
    )
    .map_err(|err| match err.kind {
        ErrorKind::ConfigurationCollision { alias, .. } => Error::attribute_collision(alias, kind.to_string()),
        _ => err,
    })
    .map_err(in_table("attribute aliases"))
}

impl AliasRegistry {
    /// Builds and validates a registry.
    ///
    /// # Errors
    ///
    /// - `ConfigurationCollision` if an alias is bound to two or more tags,
    ///   within a domain or across domains.
    /// - `AttributeAliasCollision` if an attribute alias names two different
    ///   path lists within one value kind.
    /// - `UnknownAlias` if a phrase does not concatenate to a registered
    ///   alias, or a hazardous or legal-end token is not a modifier.
    pub fn build(tables: &RegistryTables<'_>) -> Result<Self> {
        let creature_types = AliasTable::build(tables.creature_types.iter().map(|(t, a)| (*t, a.iter())))
            .map_err(in_table("creature type aliases"))?;
        let evo_stages = AliasTable::build(tables.evo_stages.iter().map(|(t, a)| (*t, a.iter())))
            .map_err(in_table("evolution stage aliases"))?;
        let misc_modifiers = AliasTable::build(tables.misc_modifiers.iter().map(|(t, a)| (*t, a.iter())))
            .map_err(in_table("misc modifier aliases"))?;

        let modifiers = AliasTable::build(
            tables
                .creature_types
                .iter()
                .map(|(t, a)| (CanonicalTag::from(*t), a.iter()))
                .chain(tables.evo_stages.iter().map(|(t, a)| (CanonicalTag::from(*t), a.iter())))
                .chain(tables.misc_modifiers.iter().map(|(t, a)| (CanonicalTag::from(*t), a.iter()))),
        )
        .map_err(in_table("modifier aliases"))?;

        let mut phrases = HashMap::new();
        for phrase in tables.multi_word {
            let words: Vec<String> = phrase.split_whitespace().map(normalize_alias).collect();
            if words.len() < 2 {
                return Err(in_table("multi-word aliases")(Error::unknown_alias(*phrase)));
            }
            let tag = *modifiers
                .get(&words.concat())
                .ok_or_else(|| in_table("multi-word aliases")(Error::unknown_alias(*phrase)))?;
            phrases.insert(words, tag);
        }
        let mut phrase_lengths: Vec<usize> = phrases.keys().map(Vec::len).collect();
        phrase_lengths.sort_unstable_by(|a, b| b.cmp(a));
        phrase_lengths.dedup();

        let hazardous_in_name = known_token_set(tables.hazardous_in_name, &modifiers, "hazardous name tokens")?;
        let legal_end = known_token_set(tables.legal_end, &modifiers, "legal end tokens")?;
        let problematic_series = tables
            .problematic_series
            .iter()
            .map(|t| normalize_alias(t))
            .collect();

        let registry = Self {
            creature_types,
            evo_stages,
            misc_modifiers,
            modifiers,
            phrases,
            phrase_lengths,
            hazardous_in_name,
            legal_end,
            problematic_series,
            numeric_attributes: attribute_table(&tables.attributes, ValueKind::Numeric)?,
            string_attributes: attribute_table(&tables.attributes, ValueKind::String)?,
            boolean_attributes: attribute_table(&tables.attributes, ValueKind::Boolean)?,
        };

        tracing::debug!(
            modifiers = registry.modifiers.len(),
            phrases = registry.phrases.len(),
            numeric_attributes = registry.numeric_attributes.len(),
            string_attributes = registry.string_attributes.len(),
            boolean_attributes = registry.boolean_attributes.len(),
            "alias registry built"
        );

        Ok(registry)
    }

    /// Builds a registry from the built-in tables adjusted by `config`.
    ///
    /// # Errors
    ///
    /// Fails like [`AliasRegistry::build`]; the built-in tables are valid, so
    /// an error here points at `config`.
    pub fn with_config(config: &RegistryConfig) -> Result<Self> {
        Self::build(&RegistryTables::standard(config))
    }

    /// The process-wide registry built from the built-in tables and the
    /// default configuration. Built on first use.
    ///
    /// # Errors
    ///
    /// Returns the build error if the built-in tables fail validation. The
    /// next call retries the build.
    pub fn standard() -> Result<&'static Self> {
        STANDARD.get_or_try_init(|| Self::with_config(&RegistryConfig::default()))
    }

    // -------------------------------------------------------------------------
    // Modifier lookups
    // -------------------------------------------------------------------------

    /// Resolves an alias to its canonical tag.
    ///
    /// # Errors
    ///
    /// Returns `AliasNotFound` if the alias is not a modifier.
    pub fn tag_of(&self, alias: &str) -> Result<CanonicalTag> {
        self.lookup(alias).ok_or_else(|| Error::alias_not_found(alias))
    }

    /// Resolves an alias to its canonical tag without building an error.
    #[must_use]
    pub fn lookup(&self, alias: &str) -> Option<CanonicalTag> {
        self.modifiers.get(alias).copied()
    }

    /// Resolves an alias to a creature type.
    #[must_use]
    pub fn creature_type_of(&self, alias: &str) -> Option<CreatureType> {
        self.creature_types.get(alias).copied()
    }

    /// Resolves an alias to an evolution stage.
    #[must_use]
    pub fn evo_stage_of(&self, alias: &str) -> Option<EvoStage> {
        self.evo_stages.get(alias).copied()
    }

    /// Resolves an alias to a miscellaneous modifier.
    #[must_use]
    pub fn misc_modifier_of(&self, alias: &str) -> Option<MiscModifier> {
        self.misc_modifiers.get(alias).copied()
    }

    /// Returns every alias of `tag`.
    #[must_use]
    pub fn aliases_of(&self, tag: CanonicalTag) -> BTreeSet<&str> {
        self.modifiers.aliases_of(&tag).collect()
    }

    /// Returns every alias of one domain.
    #[must_use]
    pub fn tokens_of_domain(&self, domain: TagDomain) -> BTreeSet<&str> {
        match domain {
            TagDomain::CreatureType => self.creature_types.aliases().collect(),
            TagDomain::EvoStage => self.evo_stages.aliases().collect(),
            TagDomain::Misc => self.misc_modifiers.aliases().collect(),
        }
    }

    /// Returns true if `token` is a modifier in any domain.
    #[must_use]
    pub fn is_known_modifier(&self, token: &str) -> bool {
        self.modifiers.contains(token)
    }

    /// Returns true if `token` must not be inferred from a monster name.
    #[must_use]
    pub fn is_hazardous_in_name(&self, token: &str) -> bool {
        contains_normalized(&self.hazardous_in_name, token)
    }

    /// Returns true if `token` is also a series name.
    #[must_use]
    pub fn is_problematic_series(&self, token: &str) -> bool {
        contains_normalized(&self.problematic_series, token)
    }

    /// Returns true if `token` may end a query after the monster name.
    #[must_use]
    pub fn is_legal_end_token(&self, token: &str) -> bool {
        contains_normalized(&self.legal_end, token)
    }

    /// Returns true if `token` is a creature type or evolution stage alias.
    /// These are left out when listing the modifiers a name matched.
    #[must_use]
    pub fn is_hidden_token(&self, token: &str) -> bool {
        matches!(
            self.lookup(token).map(CanonicalTag::domain),
            Some(TagDomain::CreatureType | TagDomain::EvoStage)
        )
    }

    /// Returns the hazardous tokens.
    pub fn hazardous_tokens(&self) -> impl Iterator<Item = &str> {
        self.hazardous_in_name.iter().map(String::as_str)
    }

    // -------------------------------------------------------------------------
    // Multi-word aliases
    // -------------------------------------------------------------------------

    /// Resolves an exact multi-word phrase.
    ///
    /// # Errors
    ///
    /// Returns `PhraseNotFound` if `words` is not a registered phrase.
    pub fn is_multi_word_alias<S: AsRef<str>>(&self, words: &[S]) -> Result<CanonicalTag> {
        self.phrase_lookup(words)
            .ok_or_else(|| Error::phrase_not_found(words))
    }

    fn phrase_lookup<S: AsRef<str>>(&self, words: &[S]) -> Option<CanonicalTag> {
        let key: Vec<String> = words.iter().map(|w| normalize_alias(w.as_ref())).collect();
        self.phrases.get(&key).copied()
    }

    /// Matches the longest registered phrase at the start of `words`.
    ///
    /// Returns the tag and the number of words the phrase covers.
    #[must_use]
    pub fn match_phrase_prefix<S: AsRef<str>>(&self, words: &[S]) -> Option<(CanonicalTag, usize)> {
        self.phrase_lengths
            .iter()
            .filter(|&&len| len <= words.len())
            .find_map(|&len| {
                self.phrase_lookup(&words[..len]).map(|tag| (tag, len))
            })
    }

    /// Classifies a word sequence, recognizing phrases before single words.
    #[must_use]
    pub fn classify<S: AsRef<str>>(&self, words: &[S]) -> Vec<ClassifiedToken> {
        let mut out = Vec::with_capacity(words.len());
        let mut i = 0;
        while i < words.len() {
            if let Some((tag, len)) = self.match_phrase_prefix(&words[i..]) {
                out.push(ClassifiedToken {
                    words: words[i..i + len].iter().map(|w| normalize_alias(w.as_ref())).collect(),
                    class: TokenClass::Modifier(tag),
                });
                i += len;
                continue;
            }

            let word = normalize_alias(words[i].as_ref());
            let class = if self.is_problematic_series(&word) {
                TokenClass::ProblematicSeries
            } else if let Some(tag) = self.lookup(&word) {
                TokenClass::Modifier(tag)
            } else {
                TokenClass::Unrecognized
            };
            out.push(ClassifiedToken {
                words: vec![word],
                class,
            });
            i += 1;
        }
        out
    }

    /// Tokenizes and classifies a raw query.
    #[must_use]
    pub fn classify_query(&self, input: &str) -> Vec<ClassifiedToken> {
        self.classify(&InputTokenizer::words(input))
    }

    /// Tags a monster's display name implies on its own.
    ///
    /// Hazardous tokens never count here; they only match when a user types
    /// them as a modifier. Tags are returned once each, in name order.
    #[must_use]
    pub fn infer_from_name(&self, name: &str) -> Vec<CanonicalTag> {
        let mut seen = HashSet::new();
        self.classify_query(name)
            .into_iter()
            .filter(|token| !self.is_hazardous_in_name(&token.alias()))
            .filter_map(|token| token.tag())
            .filter(|tag| seen.insert(*tag))
            .collect()
    }

    // -------------------------------------------------------------------------
    // Attribute aliases
    // -------------------------------------------------------------------------

    fn attribute_table(&self, kind: ValueKind) -> &AliasTable<CandidatePaths> {
        match kind {
            ValueKind::Numeric => &self.numeric_attributes,
            ValueKind::String => &self.string_attributes,
            ValueKind::Boolean => &self.boolean_attributes,
        }
    }

    /// Returns the candidate paths of an attribute alias, in fallback order.
    ///
    /// # Errors
    ///
    /// Returns `AttributeAliasNotFound` if `alias` is not an attribute alias
    /// of `kind`.
    pub fn resolve_attribute_path(&self, alias: &str, kind: ValueKind) -> Result<&[AttributePath]> {
        self.attribute_table(kind)
            .get(alias)
            .map(CandidatePaths::paths)
            .ok_or_else(|| Error::attribute_not_found(alias, kind.to_string()))
    }

    /// Reads an attribute through its alias, using the first candidate path
    /// with a present value. `Ok(None)` means every candidate was absent.
    ///
    /// # Errors
    ///
    /// Returns `AttributeAliasNotFound` if `alias` is not an attribute alias
    /// of `kind`.
    pub fn resolve_attribute<S: AttributeSource + ?Sized>(
        &self,
        alias: &str,
        kind: ValueKind,
        source: &S,
    ) -> Result<Option<Value>> {
        let paths = self.resolve_attribute_path(alias, kind)?;
        Ok(paths.iter().find_map(|path| path.resolve(source)))
    }

    /// Returns true if `alias` is an attribute alias of `kind`.
    #[must_use]
    pub fn is_attribute_alias(&self, alias: &str, kind: ValueKind) -> bool {
        self.attribute_table(kind).contains(alias)
    }

    /// Returns every attribute alias of `kind`, sorted.
    #[must_use]
    pub fn attribute_aliases(&self, kind: ValueKind) -> BTreeSet<&str> {
        self.attribute_table(kind).aliases().collect()
    }
}

fn contains_normalized(set: &HashSet<String>, token: &str) -> bool {
    set.contains(token) || set.contains(&normalize_alias(token))
}
