//! Multilingual profanity filter.
//!
//! [`ProfanityFilter`] keeps one [`Matcher`] per language, all built once
//! from a [`ResourceLoader`] and sharing the same threshold. It is a plain
//! value: build it at startup and pass it (or an `Arc` of it) to whoever
//! needs it.
//!
//! Language codes are canonicalized with [`language_of`], so `"en-US"`,
//! `"EN_gb"` and `"en"` all select the English matcher.
//!
//! # Examples
//!
//! ```
//! use profanity::config::FilterConfig;
//! use profanity::filter::{MemoryLoader, ProfanityFilter};
//!
//! let loader = MemoryLoader::new()
//!     .with("en", "idiot\n")
//!     .with("it", "cretino\n");
//! let config = FilterConfig {
//!     languages: vec!["en".into(), "it".into()],
//!     ..FilterConfig::default()
//! };
//!
//! let filter = ProfanityFilter::new(&loader, &config).unwrap();
//! assert!(filter.test("en-US", "what an idi0t"));
//! assert!(filter.test("it", "sei un cretino"));
//! assert!(!filter.test("de", "idiot"));
//! assert!(filter.test_default("IDIOT"));
//! ```

pub mod loader;

pub use loader::{DirectoryLoader, MemoryLoader, ResourceLoader};

use std::sync::Arc;

use ahash::AHashMap;
use rayon::prelude::*;

use crate::config::FilterConfig;
use crate::dictionary::Dictionary;
use crate::error::{ProfanityError, Result};
use crate::matcher::{Matcher, Profanity};

/// Languages with a bundled dictionary.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "ar", "az", "bg", "bs", "ca", "cs", "da", "de", "el", "en", "es", "et", "fi", "fr", "ga", "he",
    "hi", "hr", "hu", "hy", "id", "is", "it", "ja", "ka", "ko", "lt", "lv", "mk", "ms", "mt", "no",
    "nl", "pl", "pt", "ro", "ru", "sk", "sl", "sq", "sr", "sv", "sw", "th", "tl", "tr", "uk", "vi",
    "xh", "zh", "zu",
];

/// Language used when the caller does not name one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Canonical language code: region suffix dropped, lower-cased, Norwegian
/// variants merged.
///
/// ```
/// use profanity::filter::language_of;
///
/// assert_eq!(language_of("en-US"), "en");
/// assert_eq!(language_of("pt_BR"), "pt");
/// assert_eq!(language_of("nb"), "no");
/// assert_eq!(language_of("NN-NO"), "no");
/// ```
pub fn language_of(code: &str) -> String {
    let base = code
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase();
    match base.as_str() {
        "nn" | "nb" => "no".to_string(),
        _ => base,
    }
}

/// Per-language matchers behind one lookup.
#[derive(Clone, Debug)]
pub struct ProfanityFilter {
    matchers: AHashMap<String, Matcher>,
    default_language: String,
}

impl ProfanityFilter {
    /// Load every configured language from `loader` and build its matcher.
    ///
    /// Dictionaries are parsed in parallel. A missing or unreadable resource
    /// fails the whole construction unless [`FilterConfig::skip_missing`] is
    /// set, in which case missing languages are skipped with a warning.
    pub fn new<L>(loader: &L, config: &FilterConfig) -> Result<ProfanityFilter>
    where
        L: ResourceLoader + ?Sized,
    {
        config.validate()?;

        let mut languages: Vec<String> = config.languages.iter().map(|l| language_of(l)).collect();
        languages.sort();
        languages.dedup();

        let loaded = languages
            .par_iter()
            .map(|language| Self::load_matcher(loader, language, config))
            .collect::<Result<Vec<_>>>()?;

        let matchers: AHashMap<String, Matcher> = languages
            .into_iter()
            .zip(loaded)
            .filter_map(|(language, matcher)| matcher.map(|matcher| (language, matcher)))
            .collect();

        if matchers.is_empty() {
            return Err(ProfanityError::config("no dictionary could be loaded"));
        }
        tracing::debug!(
            languages = matchers.len(),
            threshold = config.threshold,
            "profanity filter ready"
        );

        Ok(ProfanityFilter {
            matchers,
            default_language: language_of(&config.default_language),
        })
    }

    fn load_matcher<L>(loader: &L, language: &str, config: &FilterConfig) -> Result<Option<Matcher>>
    where
        L: ResourceLoader + ?Sized,
    {
        let reader = match loader.load(language) {
            Ok(reader) => reader,
            Err(ProfanityError::Io(err))
                if config.skip_missing && err.kind() == std::io::ErrorKind::NotFound =>
            {
                tracing::warn!(language, error = %err, "skipping language without dictionary");
                return Ok(None);
            }
            Err(err) => return Err(err),
        };

        let dictionary = Arc::new(Dictionary::read_with_config(
            language,
            reader,
            &config.dictionary,
        )?);
        dictionary
            .matcher_with_config(config.threshold, &config.matcher)
            .map(Some)
    }

    /// Build a filter from ready-made matchers, keyed by canonical language.
    pub fn from_matchers<I>(matchers: I, default_language: &str) -> ProfanityFilter
    where
        I: IntoIterator<Item = Matcher>,
    {
        let matchers = matchers
            .into_iter()
            .map(|matcher| (language_of(matcher.dictionary().language()), matcher))
            .collect();
        ProfanityFilter {
            matchers,
            default_language: language_of(default_language),
        }
    }

    /// Loaded languages, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.matchers.keys().map(String::as_str).collect();
        languages.sort_unstable();
        languages
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Matcher of `language`, after canonicalization.
    pub fn matcher(&self, language: &str) -> Option<&Matcher> {
        self.matchers.get(&language_of(language))
    }

    /// Whether `text` contains a term of `language`. Unknown languages never
    /// match.
    pub fn test(&self, language: &str, text: &str) -> bool {
        self.matcher(language)
            .is_some_and(|matcher| matcher.matches(text))
    }

    /// [`test`](Self::test) with the default language.
    pub fn test_default(&self, text: &str) -> bool {
        self.test(&self.default_language, text)
    }

    /// First term of `language` found in `text`.
    pub fn find(&self, language: &str, text: &str) -> Option<Profanity> {
        self.matcher(language)?.find(text)
    }
}
