//! Text analysis: the normalization pipeline applied identically to
//! dictionary terms and to scanned text.
//!
//! Raw text → char filters (lower-case, diacritics, obfuscation, repeats)
//! → Unicode word tokenizer → tokens with raw-text offsets.

pub mod char_filter;
pub mod normalizer;
pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use normalizer::Normalizer;
pub use token::Token;
