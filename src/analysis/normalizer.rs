//! Normalization pipeline shared by dictionaries and matchers.
//!
//! The [`Normalizer`] applies processing in this order:
//! 1. Char filters: lower-casing, diacritic folding, obfuscation folding,
//!    repeat collapsing (each optional, per [`NormalizerConfig`])
//! 2. Tokenizer: splits the filtered characters into tokens
//!
//! Offsets are carried by every character through the whole chain, so token
//! offsets always refer to the raw input.
//!
//! # Examples
//!
//! ```
//! use profanity::analysis::normalizer::Normalizer;
//!
//! let normalizer = Normalizer::default();
//! assert_eq!(normalizer.normalize("  Fuuuuck   YOU!! "), "fuuck you");
//! assert_eq!(normalizer.normalize("Sh1t, Pérez"), "shit perez");
//! ```

use std::sync::Arc;

use crate::analysis::char_filter::diacritic::DiacriticFoldingCharFilter;
use crate::analysis::char_filter::lowercase::LowercaseCharFilter;
use crate::analysis::char_filter::obfuscation::ObfuscationCharFilter;
use crate::analysis::char_filter::repeat::RepeatCollapseCharFilter;
use crate::analysis::char_filter::{CharFilter, NormalizedChar};
use crate::analysis::token::Token;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use crate::config::NormalizerConfig;

/// A tokenizer preceded by a chain of char filters.
#[derive(Clone)]
pub struct Normalizer {
    tokenizer: Arc<dyn Tokenizer>,
    char_filters: Vec<Arc<dyn CharFilter>>,
}

impl Normalizer {
    /// Create a normalizer with the given tokenizer and no char filters.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        Normalizer {
            tokenizer,
            char_filters: Vec::new(),
        }
    }

    /// Build the standard pipeline described by `config`.
    pub fn from_config(config: &NormalizerConfig) -> Self {
        let mut normalizer = Normalizer::new(Arc::new(UnicodeWordTokenizer::new()));
        if config.lowercase {
            normalizer = normalizer.add_char_filter(Arc::new(LowercaseCharFilter::new()));
        }
        if config.fold_diacritics {
            normalizer = normalizer.add_char_filter(Arc::new(DiacriticFoldingCharFilter::new()));
        }
        if config.fold_obfuscation {
            normalizer = normalizer.add_char_filter(Arc::new(ObfuscationCharFilter::new()));
        }
        if config.max_repeat > 0 {
            normalizer = normalizer
                .add_char_filter(Arc::new(RepeatCollapseCharFilter::new(config.max_repeat)));
        }
        normalizer
    }

    /// Add a char filter to the end of the chain.
    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    /// Get the char filters used by this normalizer.
    pub fn char_filters(&self) -> &[Arc<dyn CharFilter>] {
        &self.char_filters
    }

    /// Run only the char filters.
    pub fn filter_chars(&self, text: &str) -> Vec<NormalizedChar> {
        self.char_filters
            .iter()
            .fold(NormalizedChar::from_text(text), |chars, filter| {
                filter.filter(chars)
            })
    }

    /// Run the full pipeline and return tokens with raw-text offsets.
    pub fn analyze(&self, text: &str) -> Vec<Token> {
        self.tokenizer.tokenize(&self.filter_chars(text))
    }

    /// Normalized form of `text`: its tokens joined by single spaces.
    ///
    /// Normalizing an already normalized string returns it unchanged.
    pub fn normalize(&self, text: &str) -> String {
        join_tokens(&self.analyze(text))
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Normalizer::from_config(&NormalizerConfig::default())
    }
}

/// Join token texts with single spaces.
pub fn join_tokens(tokens: &[Token]) -> String {
    let mut joined = String::new();
    for token in tokens {
        if !joined.is_empty() {
            joined.push(' ');
        }
        joined.push_str(&token.text);
    }
    joined
}

impl std::fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalizer")
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "char_filters",
                &self
                    .char_filters
                    .iter()
                    .map(|f| f.name())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
