//! Token type produced by the normalization pipeline.
//!
//! A [`Token`] carries its normalized text together with the byte offsets of
//! the raw input it was produced from, so a match found in normalized space
//! can be reported against the text the caller actually passed in.
//!
//! # Examples
//!
//! ```
//! use profanity::analysis::normalizer::Normalizer;
//!
//! let normalizer = Normalizer::default();
//! let tokens = normalizer.analyze("Ça VA, id10t");
//!
//! assert_eq!(tokens[0].text, "ca");
//! assert_eq!(tokens[2].text, "idiot");
//! // "id10t" starts at byte 8 of the raw text ("Ç" is two bytes).
//! assert_eq!(tokens[2].start_offset, 8);
//! assert_eq!(tokens[2].end_offset, 13);
//! assert_eq!(tokens[2].substituted, vec![false, false, true, true, false]);
//! ```

use serde::{Deserialize, Serialize};

/// A normalized word with its raw-text offsets.
///
/// # Fields
///
/// - `text` - normalized token text
/// - `start_offset` / `end_offset` - byte range in the raw input
/// - `substituted` - one flag per character of `text`, set when the
///   character was produced by obfuscation folding (e.g. `0` → `o`)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The normalized text content of the token
    pub text: String,

    /// The byte offset where this token starts in the raw text
    pub start_offset: usize,

    /// The byte offset where this token ends in the raw text
    pub end_offset: usize,

    /// Per-character obfuscation markers, aligned with `text.chars()`
    pub substituted: Vec<bool>,
}

impl Token {
    /// Create a token without substitution markers.
    pub fn with_offsets<S: Into<String>>(text: S, start_offset: usize, end_offset: usize) -> Self {
        let text = text.into();
        let substituted = vec![false; text.chars().count()];
        Token {
            text,
            start_offset,
            end_offset,
            substituted,
        }
    }

    /// Attach per-character substitution markers.
    pub fn with_substituted(mut self, substituted: Vec<bool>) -> Self {
        debug_assert_eq!(substituted.len(), self.text.chars().count());
        self.substituted = substituted;
        self
    }
}
