//! Unicode word tokenizer implementation.
//!
//! This module provides a tokenizer that splits text using Unicode word boundary
//! rules (UAX #29). Segments without any alphanumeric character (whitespace,
//! punctuation, emoji) are dropped. Ideographic scripts come out one
//! character per token, which keeps multi-character terms comparable as
//! token windows.

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::char_filter::NormalizedChar;
use crate::analysis::token::Token;
use crate::analysis::tokenizer::Tokenizer;

/// A tokenizer that splits text on Unicode word boundaries.
///
/// # Examples
///
/// ```
/// use profanity::analysis::char_filter::NormalizedChar;
/// use profanity::analysis::tokenizer::Tokenizer;
/// use profanity::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
///
/// let tokenizer = UnicodeWordTokenizer::new();
/// let tokens = tokenizer.tokenize(&NormalizedChar::from_text("café résumé"));
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].text, "café");
/// assert_eq!(tokens[1].text, "résumé");
/// ```
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, chars: &[NormalizedChar]) -> Vec<Token> {
        let mut text = String::with_capacity(chars.len());
        // Byte offset in `text` of every character in `chars`.
        let mut char_starts = Vec::with_capacity(chars.len());
        for c in chars {
            char_starts.push(text.len());
            text.push(c.ch);
        }

        let char_index = |byte: usize| -> usize {
            if byte == text.len() {
                chars.len()
            } else {
                char_starts.binary_search(&byte).unwrap_or_else(|i| i)
            }
        };

        let mut tokens = Vec::new();
        for (byte_start, word) in text.split_word_bound_indices() {
            // Only keep actual words (not whitespace or punctuation)
            if !word.chars().any(|c| c.is_alphanumeric()) {
                continue;
            }

            let covered = &chars[char_index(byte_start)..char_index(byte_start + word.len())];
            let start_offset = covered.iter().map(|c| c.start).min().unwrap_or(0);
            let end_offset = covered.iter().map(|c| c.end).max().unwrap_or(start_offset);
            let substituted = covered.iter().map(|c| c.substituted).collect();

            tokens.push(
                Token::with_offsets(word, start_offset, end_offset)
                    .with_substituted(substituted),
            );
        }

        tokens
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}
