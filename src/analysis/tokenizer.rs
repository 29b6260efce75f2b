//! Tokenizer implementations for text analysis.
//!
//! A tokenizer turns the filtered character sequence into [`Token`]s. Every
//! token's offsets are taken from the characters it covers, so they point at
//! the raw input even when char filters rewrote the text.
//!
//! # Available Tokenizers
//!
//! - [`unicode_word::UnicodeWordTokenizer`] - Unicode word boundaries (UAX #29)
//!
//! # Examples
//!
//! ```
//! use profanity::analysis::char_filter::NormalizedChar;
//! use profanity::analysis::tokenizer::Tokenizer;
//! use profanity::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
//!
//! let tokenizer = UnicodeWordTokenizer::new();
//! let tokens = tokenizer.tokenize(&NormalizedChar::from_text("Hello, world"));
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[1].text, "world");
//! ```

use crate::analysis::char_filter::NormalizedChar;
use crate::analysis::token::Token;

/// Trait for tokenizers that split normalized characters into tokens.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given characters.
    fn tokenize(&self, chars: &[NormalizedChar]) -> Vec<Token>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod unicode_word;
