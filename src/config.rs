//! Configuration for normalization, dictionary loading, matching and the
//! per-language filter registry.
//!
//! Every struct here is serde-compatible so the whole setup can be kept in
//! a JSON file next to the dictionaries:
//!
//! ```json
//! {
//!   "threshold": 0.85,
//!   "default_language": "en",
//!   "languages": ["en", "it", "de"],
//!   "skip_missing": true
//! }
//! ```
//!
//! Missing fields fall back to their defaults.
//!
//! # Examples
//!
//! ```
//! use profanity::config::FilterConfig;
//!
//! let config = FilterConfig::from_json(r#"{"threshold": 0.9, "languages": ["en"]}"#).unwrap();
//! assert_eq!(config.threshold, 0.9);
//! assert_eq!(config.default_language, "en");
//! assert!(config.dictionary.normalizer.fold_obfuscation);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ProfanityError, Result};
use crate::filter::{DEFAULT_LANGUAGE, SUPPORTED_LANGUAGES};

/// Default similarity threshold used by [`FilterConfig`].
pub const DEFAULT_THRESHOLD: f64 = 0.8;

/// Settings for the text normalization pipeline.
///
/// The same settings are applied to dictionary terms and to scanned text;
/// a matcher always reuses the normalizer of its dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Apply Unicode lower-casing.
    pub lowercase: bool,

    /// Strip accents from Latin, Greek and Cyrillic letters ("é" → "e").
    pub fold_diacritics: bool,

    /// Map look-alike digits and symbols to letters ("f4ck" → "fack").
    ///
    /// Only applied inside whitespace-delimited runs that already contain a
    /// letter, so plain numbers are left alone.
    pub fold_obfuscation: bool,

    /// Longest run of one repeated character kept; longer runs are cut down
    /// ("fuuuck" → "fuuck" with the default of 2). Zero disables collapsing.
    pub max_repeat: usize,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            fold_diacritics: true,
            fold_obfuscation: true,
            max_repeat: 2,
        }
    }
}

/// Settings for parsing a dictionary resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Lines starting with this prefix (after trimming) are comments.
    pub comment_prefix: String,

    /// Separates the term text from its flags.
    pub flag_delimiter: char,

    /// Normalization applied to terms and, later, to matched text.
    pub normalizer: NormalizerConfig,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            comment_prefix: "#".to_string(),
            flag_delimiter: '\t',
            normalizer: NormalizerConfig::default(),
        }
    }
}

/// Settings for the matcher scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Narrow candidates with the dictionary's first-character index when
    /// that cannot lose a match.
    ///
    /// The matcher only takes the index when no non-exact term is long
    /// enough to absorb an edit of its first character at the threshold.
    /// Otherwise, or when this is `false`, every term is compared at every
    /// position, which costs O(text × dictionary × term length).
    pub first_char_index: bool,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            first_char_index: true,
        }
    }
}

/// Settings for [`ProfanityFilter`](crate::filter::ProfanityFilter).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Similarity threshold shared by every language matcher.
    pub threshold: f64,

    /// Language used by [`ProfanityFilter::test_default`](crate::filter::ProfanityFilter::test_default).
    pub default_language: String,

    /// Languages to load. Defaults to every supported language.
    pub languages: Vec<String>,

    /// Skip languages whose resource is missing instead of failing.
    pub skip_missing: bool,

    /// Dictionary parsing settings.
    pub dictionary: DictionaryConfig,

    /// Matcher settings.
    pub matcher: MatcherConfig,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            default_language: DEFAULT_LANGUAGE.to_string(),
            languages: SUPPORTED_LANGUAGES.iter().map(|l| l.to_string()).collect(),
            skip_missing: false,
            dictionary: DictionaryConfig::default(),
            matcher: MatcherConfig::default(),
        }
    }
}

impl FilterConfig {
    /// Parse a configuration from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: FilterConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        validate_threshold(self.threshold)?;
        if self.languages.is_empty() {
            return Err(ProfanityError::config("no languages configured"));
        }
        if self.dictionary.comment_prefix.is_empty() {
            return Err(ProfanityError::config("comment_prefix must not be empty"));
        }
        Ok(())
    }
}

/// Reject thresholds outside `[0.0, 1.0]`, including NaN.
pub(crate) fn validate_threshold(threshold: f64) -> Result<()> {
    if (0.0..=1.0).contains(&threshold) {
        Ok(())
    } else {
        Err(ProfanityError::invalid_argument(format!(
            "threshold must be within [0.0, 1.0], got {threshold}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FilterConfig::default();
        assert_eq!(config.threshold, DEFAULT_THRESHOLD);
        assert_eq!(config.default_language, "en");
        assert_eq!(config.languages.len(), SUPPORTED_LANGUAGES.len());
        assert_eq!(config.dictionary.comment_prefix, "#");
        assert_eq!(config.dictionary.flag_delimiter, '\t');
        assert_eq!(config.dictionary.normalizer.max_repeat, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = FilterConfig::from_json(
            r#"{"languages": ["en", "it"], "dictionary": {"normalizer": {"max_repeat": 3}}}"#,
        )
        .unwrap();

        assert_eq!(config.languages, vec!["en", "it"]);
        assert_eq!(config.dictionary.normalizer.max_repeat, 3);
        assert!(config.dictionary.normalizer.fold_diacritics);
        assert_eq!(config.matcher, MatcherConfig::default());
        assert!(config.matcher.first_char_index);
    }

    #[test]
    fn test_matcher_config_from_json() {
        let config = FilterConfig::from_json(r#"{"matcher": {"first_char_index": false}}"#).unwrap();
        assert!(!config.matcher.first_char_index);
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let result = FilterConfig::from_json(r#"{"threshold": 1.5}"#);
        assert!(matches!(result, Err(ProfanityError::InvalidArgument(_))));

        assert!(validate_threshold(f64::NAN).is_err());
        assert!(validate_threshold(-0.1).is_err());
        assert!(validate_threshold(0.0).is_ok());
        assert!(validate_threshold(1.0).is_ok());
    }

    #[test]
    fn test_empty_languages_rejected() {
        let result = FilterConfig::from_json(r#"{"languages": []}"#);
        assert!(matches!(result, Err(ProfanityError::Config(_))));
    }

    #[test]
    fn test_malformed_json() {
        let result = FilterConfig::from_json("{not json");
        assert!(matches!(result, Err(ProfanityError::Json(_))));
    }
}
