//! Query tokenization.
//!
//! Converts a raw search string into lowercase words for classification.

/// A token from a search query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputToken {
    /// A lowercase word
    Word(String),
    /// A quoted string (preserved as-is, never a modifier)
    QuotedString(String),
}

impl InputToken {
    /// Returns the word, if this token is one.
    #[must_use]
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Self::Word(w) => Some(w),
            Self::QuotedString(_) => None,
        }
    }
}

/// Tokenizes search queries and monster names.
pub struct InputTokenizer;

impl InputTokenizer {
    /// Tokenizes a raw input string into tokens.
    ///
    /// - Converts words to lowercase
    /// - Splits words on whitespace and sentence punctuation (`,` `;` `:`
    ///   `?` `.` and parentheses); `*`, `#` and `!` are kept because aliases
    ///   such as `6*gfeshop`, `monster#` and `!!!` contain them
    /// - Strips apostrophes at the edges of a word only
    /// - Preserves quoted strings as atomic units
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<InputToken> {
        let mut tokens = Vec::new();
        let mut chars = input.chars();
        let mut current_word = String::new();

        while let Some(ch) = chars.next() {
            match ch {
                '"' => {
                    Self::flush_word(&mut current_word, &mut tokens);
                    let mut quoted = String::new();
                    for c in chars.by_ref() {
                        if c == '"' {
                            break;
                        }
                        quoted.push(c);
                    }
                    tokens.push(InputToken::QuotedString(quoted));
                }
                c if c.is_whitespace() || Self::is_separator(c) => {
                    Self::flush_word(&mut current_word, &mut tokens);
                }
                _ => current_word.push(ch),
            }
        }

        Self::flush_word(&mut current_word, &mut tokens);
        tokens
    }

    const fn is_separator(c: char) -> bool {
        matches!(c, ',' | ';' | ':' | '?' | '.' | '(' | ')')
    }

    fn flush_word(current_word: &mut String, tokens: &mut Vec<InputToken>) {
        let word = current_word.trim_matches('\'');
        if !word.is_empty() {
            tokens.push(InputToken::Word(word.to_lowercase()));
        }
        current_word.clear();
    }

    /// Tokenizes and keeps only the words.
    #[must_use]
    pub fn words(input: &str) -> Vec<String> {
        Self::tokenize(input)
            .into_iter()
            .filter_map(|t| match t {
                InputToken::Word(w) => Some(w),
                InputToken::QuotedString(_) => None,
            })
            .collect()
    }
}
