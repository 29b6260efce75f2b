//! # Profanity
//!
//! Multilingual fuzzy profanity detection.
//!
//! ## Features
//!
//! - Per-language dictionaries parsed from plain word lists
//! - Normalization of case, accents, leetspeak and elongated spellings
//! - Weighted edit-distance scoring with a tunable threshold
//! - Exact byte spans of every match in the caller's text
//! - Immutable, thread-safe matchers built once at startup
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use profanity::prelude::*;
//!
//! let dictionary = Arc::new(Dictionary::read("en", "idiot\nmoron\texact\n".as_bytes()).unwrap());
//! let matcher = dictionary.matcher(0.9).unwrap();
//!
//! let found = matcher.find("you are an idi0t").unwrap();
//! assert_eq!(found.term, "idiot");
//! assert_eq!((found.start, found.end), (11, 16));
//! assert!(!matcher.matches("you are a moran"));
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod filter;
pub mod matcher;
pub mod util;

pub mod prelude {
    pub use crate::config::{DictionaryConfig, FilterConfig, MatcherConfig, NormalizerConfig};
    pub use crate::dictionary::{Dictionary, Term, TermFlags};
    pub use crate::error::{ProfanityError, Result};
    pub use crate::filter::{DirectoryLoader, ProfanityFilter, ResourceLoader, language_of};
    pub use crate::matcher::{Matcher, Profanity};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
