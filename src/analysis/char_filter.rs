//! Char filter implementations for text normalization.
//!
//! Char filters run before tokenization. Unlike a plain string rewrite, each
//! filter works on a sequence of [`NormalizedChar`]s, every one of which
//! remembers the byte range of the raw input it came from. Filters may
//! expand, replace or drop characters; offsets survive all of it, so token
//! spans map back to the raw text exactly.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseCharFilter`] - Unicode lower-casing
//! - [`diacritic::DiacriticFoldingCharFilter`] - accent stripping for Latin, Greek and Cyrillic
//! - [`obfuscation::ObfuscationCharFilter`] - leetspeak folding ("4" → "a", "$" → "s")
//! - [`repeat::RepeatCollapseCharFilter`] - elongation collapsing ("fuuuck" → "fuuck")
//!
//! # Examples
//!
//! ```
//! use profanity::analysis::char_filter::{CharFilter, NormalizedChar, collect_text};
//! use profanity::analysis::char_filter::lowercase::LowercaseCharFilter;
//!
//! let chars = NormalizedChar::from_text("HeLLo");
//! let lowered = LowercaseCharFilter::new().filter(chars);
//! assert_eq!(collect_text(&lowered), "hello");
//! ```

pub mod diacritic;
pub mod lowercase;
pub mod obfuscation;
pub mod repeat;

/// A character of normalized text together with its raw-text origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedChar {
    /// The normalized character.
    pub ch: char,
    /// Byte offset (inclusive) of the raw text this character came from.
    pub start: usize,
    /// Byte offset (exclusive) of the raw text this character came from.
    pub end: usize,
    /// Set when obfuscation folding produced this character.
    pub substituted: bool,
}

impl NormalizedChar {
    pub fn new(ch: char, start: usize, end: usize) -> Self {
        Self {
            ch,
            start,
            end,
            substituted: false,
        }
    }

    /// Same origin, different character.
    pub fn replace(self, ch: char) -> Self {
        Self { ch, ..self }
    }

    /// Split raw text into characters, each covering its own bytes.
    pub fn from_text(text: &str) -> Vec<NormalizedChar> {
        text.char_indices()
            .map(|(idx, ch)| NormalizedChar::new(ch, idx, idx + ch.len_utf8()))
            .collect()
    }
}

/// Render a character sequence as a string.
pub fn collect_text(chars: &[NormalizedChar]) -> String {
    chars.iter().map(|c| c.ch).collect()
}

/// Trait for character filters that transform text before tokenization.
///
/// The trait requires `Send + Sync` so a normalizer can be shared between
/// threads behind an `Arc`.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to a character sequence.
    fn filter(&self, input: Vec<NormalizedChar>) -> Vec<NormalizedChar>;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}
