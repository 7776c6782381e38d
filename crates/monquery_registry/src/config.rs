//! Configuration for building the alias registry.

use std::fmt;

/// A locale whose localized monster fields can be searched.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Locale {
    /// English (`*_en` fields).
    En,
    /// Japanese (`*_ja` fields).
    Ja,
    /// Korean (`*_ko` fields).
    Ko,
}

impl Locale {
    /// Field suffix used by the corpus for this locale.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ja => "ja",
            Self::Ko => "ko",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Configuration for the alias registry.
///
/// Controls the locale fallback order of string attribute aliases and extra
/// series names that collide with modifiers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Locales tried, in order, when a string attribute has localized fields.
    pub locales: Vec<Locale>,

    /// Series tokens to special-case in addition to the built-in ones.
    pub extra_problematic_series: Vec<String>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            locales: vec![Locale::En, Locale::Ja],
            extra_problematic_series: Vec::new(),
        }
    }
}

impl RegistryConfig {
    /// Creates a configuration that only searches English fields.
    #[must_use]
    pub fn english_only() -> Self {
        Self {
            locales: vec![Locale::En],
            ..Self::default()
        }
    }

    /// Builder method to set the locale fallback order.
    ///
    /// Duplicates are dropped, keeping the first occurrence.
    #[must_use]
    pub fn with_locales(mut self, locales: impl IntoIterator<Item = Locale>) -> Self {
        self.locales.clear();
        for locale in locales {
            if !self.locales.contains(&locale) {
                self.locales.push(locale);
            }
        }
        self
    }

    /// Builder method to add problematic series tokens.
    #[must_use]
    pub fn with_problematic_series<S: Into<String>>(mut self, tokens: impl IntoIterator<Item = S>) -> Self {
        self.extra_problematic_series
            .extend(tokens.into_iter().map(Into::into));
        self
    }
}
