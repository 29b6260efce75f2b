//! Per-language dictionaries of offensive terms.
//!
//! A [`Dictionary`] is parsed once from a line-oriented UTF-8 resource:
//!
//! ```text
//! # comments and blank lines are skipped
//! idiot
//! son of a bitch
//! moron<TAB>exact
//! ```
//!
//! Every line holds one term, optionally followed by the flag delimiter
//! (a tab by default) and comma-separated flags. Malformed lines are skipped
//! with a warning; only an unreadable stream fails the load.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use profanity::dictionary::Dictionary;
//!
//! let resource = "idiot\n# comment\n\nmoron\texact\n";
//! let dictionary = Arc::new(Dictionary::read("en", resource.as_bytes()).unwrap());
//! assert_eq!(dictionary.len(), 2);
//!
//! let matcher = dictionary.matcher(0.9).unwrap();
//! assert!(matcher.matches("you are an idi0t"));
//! ```

pub mod term;

pub use term::{Term, TermFlags};

use std::io::{BufRead, BufReader, Read};
use std::sync::Arc;

use ahash::AHashMap;

use crate::analysis::normalizer::Normalizer;
use crate::config::{DictionaryConfig, MatcherConfig, NormalizerConfig};
use crate::error::Result;
use crate::matcher::Matcher;

const BOM: char = '\u{feff}';

/// An immutable, indexed set of terms for one language.
#[derive(Clone, Debug)]
pub struct Dictionary {
    language: String,
    terms: Vec<Term>,
    /// First character of a term's match form → term indices, in load order.
    index: AHashMap<char, Vec<usize>>,
    by_form: AHashMap<String, usize>,
    normalizer: Normalizer,
    skipped: usize,
}

impl Dictionary {
    /// Parse a dictionary resource with the default [`DictionaryConfig`].
    pub fn read<R: Read>(language: &str, reader: R) -> Result<Dictionary> {
        Self::read_with_config(language, reader, &DictionaryConfig::default())
    }

    /// Parse a dictionary resource.
    ///
    /// Fails with [`ProfanityError::Io`](crate::error::ProfanityError::Io)
    /// if the stream cannot be read to the end or is not valid UTF-8. Lines
    /// that do not yield a term are skipped and counted in
    /// [`skipped_lines`](Self::skipped_lines); later duplicates of a term are
    /// ignored.
    pub fn read_with_config<R: Read>(
        language: &str,
        reader: R,
        config: &DictionaryConfig,
    ) -> Result<Dictionary> {
        let normalizer = Normalizer::from_config(&config.normalizer);
        let canonicalizer = Normalizer::from_config(&NormalizerConfig {
            fold_obfuscation: false,
            max_repeat: 0,
            ..config.normalizer.clone()
        });

        let mut dictionary = Dictionary::empty(language, normalizer);
        let mut duplicates = 0;

        for (idx, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;
            let line = if idx == 0 {
                line.trim_start_matches(BOM)
            } else {
                line.as_str()
            };

            let trimmed = line.trim();
            if trimmed.is_empty()
                || (!config.comment_prefix.is_empty() && trimmed.starts_with(&config.comment_prefix))
            {
                continue;
            }

            let (raw, flags) = match line.split_once(config.flag_delimiter) {
                Some((raw, flags)) => (raw, flags),
                None => (line, ""),
            };

            let term = TermFlags::parse(flags, line_no).and_then(|flags| {
                Term::new(raw, flags, &canonicalizer, &dictionary.normalizer, line_no)
            });

            match term {
                Ok(term) => {
                    if !dictionary.insert(term) {
                        duplicates += 1;
                    }
                }
                Err(err) => {
                    tracing::warn!(language, error = %err, "skipping dictionary line");
                    dictionary.skipped += 1;
                }
            }
        }

        if dictionary.is_empty() {
            tracing::warn!(language, "dictionary has no terms");
        }
        tracing::debug!(
            language,
            terms = dictionary.len(),
            skipped = dictionary.skipped,
            duplicates,
            "dictionary loaded"
        );

        Ok(dictionary)
    }

    fn empty(language: &str, normalizer: Normalizer) -> Dictionary {
        Dictionary {
            language: language.trim().to_lowercase(),
            terms: Vec::new(),
            index: AHashMap::new(),
            by_form: AHashMap::new(),
            normalizer,
            skipped: 0,
        }
    }

    /// Add a term unless one with the same match form exists.
    fn insert(&mut self, term: Term) -> bool {
        if self.by_form.contains_key(term.form()) {
            return false;
        }
        let idx = self.terms.len();
        if let Some(first) = term.first_char() {
            self.index.entry(first).or_default().push(idx);
        }
        self.by_form.insert(term.form().to_string(), idx);
        self.terms.push(term);
        true
    }

    /// Create a matcher over this dictionary with the default
    /// [`MatcherConfig`].
    ///
    /// Fails with [`ProfanityError::InvalidArgument`](crate::error::ProfanityError::InvalidArgument)
    /// unless `threshold` is within `[0.0, 1.0]`.
    pub fn matcher(self: &Arc<Self>, threshold: f64) -> Result<Matcher> {
        self.matcher_with_config(threshold, &MatcherConfig::default())
    }

    /// Create a matcher with explicit matcher settings.
    pub fn matcher_with_config(
        self: &Arc<Self>,
        threshold: f64,
        config: &MatcherConfig,
    ) -> Result<Matcher> {
        Matcher::new(Arc::clone(self), threshold, config)
    }

    /// Language code this dictionary was loaded for, lower-cased.
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms in load order.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Whether `text` normalizes to the match form of a stored term.
    pub fn contains(&self, text: &str) -> bool {
        self.get(text).is_some()
    }

    /// The term whose match form equals the normalized `text`.
    pub fn get(&self, text: &str) -> Option<&Term> {
        let form = self.normalizer.normalize(text);
        self.by_form.get(&form).map(|&idx| &self.terms[idx])
    }

    /// Normalizer shared with every matcher of this dictionary.
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Number of lines rejected while loading.
    pub fn skipped_lines(&self) -> usize {
        self.skipped
    }

    /// Indices of the terms whose match form starts with `first`.
    pub(crate) fn candidates(&self, first: char) -> &[usize] {
        self.index
            .get(&first)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProfanityError;

    fn load(resource: &str) -> Dictionary {
        Dictionary::read("en", resource.as_bytes()).unwrap()
    }

    #[test]
    fn test_read_scenario() {
        let dictionary = load("idiot\n# comment\n\nmoron\texact\n");

        assert_eq!(dictionary.language(), "en");
        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.terms()[0].text(), "idiot");
        assert!(!dictionary.terms()[0].is_exact());
        assert_eq!(dictionary.terms()[1].text(), "moron");
        assert!(dictionary.terms()[1].is_exact());
        assert_eq!(dictionary.skipped_lines(), 0);
    }

    #[test]
    fn test_duplicates_first_wins() {
        let dictionary = load("Idiot\tEXACT\nidiot\nIDI0T\n  idiot  \n");
        assert_eq!(dictionary.len(), 1);
        assert!(dictionary.terms()[0].is_exact());
    }

    #[test]
    fn test_malformed_lines_skipped() {
        let dictionary = load("idiot\tshouty\n!!!\nmoron\n\texact\n88\n");
        assert_eq!(dictionary.len(), 1);
        assert_eq!(dictionary.terms()[0].text(), "moron");
        assert_eq!(dictionary.skipped_lines(), 4);
        assert!(!dictionary.contains("88"));
    }

    #[test]
    fn test_language_is_lowercased() {
        let dictionary = Dictionary::read(" EN ", "idiot\n".as_bytes()).unwrap();
        assert_eq!(dictionary.language(), "en");
        let dictionary = Dictionary::read("Pt", "".as_bytes()).unwrap();
        assert_eq!(dictionary.language(), "pt");
    }

    #[test]
    fn test_bom_and_crlf() {
        let dictionary = load("\u{feff}idiot\r\nmoron\texact\r\n");
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains("idiot"));
        assert!(dictionary.terms()[1].is_exact());
    }

    #[test]
    fn test_empty_resource() {
        let dictionary = load("# only comments\n\n");
        assert!(dictionary.is_empty());
        assert!(!dictionary.contains("anything"));
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let bytes: &[u8] = b"idiot\n\xff\xfe\n";
        let result = Dictionary::read("en", bytes);
        assert!(matches!(result, Err(ProfanityError::Io(_))));
    }

    #[test]
    fn test_index() {
        let dictionary = load("ass\narse\nbastard\n4sshole\n");
        assert_eq!(dictionary.candidates('a'), &[0, 1, 3]);
        assert_eq!(dictionary.candidates('b'), &[2]);
        assert!(dictionary.candidates('z').is_empty());
    }

    #[test]
    fn test_contains_uses_normalization() {
        let dictionary = load("son of a bitch\n");
        assert!(dictionary.contains("Son of a B1tch"));
        assert!(dictionary.contains("son  of  a  bitch!!"));
        assert!(!dictionary.contains("son of a"));
        assert_eq!(dictionary.get("SON OF A BITCH").map(Term::text), Some("son of a bitch"));
    }

    #[test]
    fn test_custom_config() {
        let config = DictionaryConfig {
            comment_prefix: "//".to_string(),
            flag_delimiter: '|',
            ..DictionaryConfig::default()
        };
        let resource = "// comment\n# not a comment\nmoron|exact\n";
        let dictionary = Dictionary::read_with_config("en", resource.as_bytes(), &config).unwrap();

        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.terms()[0].text(), "# not a comment");
        assert!(dictionary.terms()[1].is_exact());
    }

    #[test]
    fn test_matcher_rejects_bad_threshold() {
        let dictionary = Arc::new(load("idiot\n"));
        for threshold in [-0.1, 1.01, f64::NAN] {
            assert!(matches!(
                dictionary.matcher(threshold),
                Err(ProfanityError::InvalidArgument(_))
            ));
        }
        assert!(dictionary.matcher(0.0).is_ok());
        assert!(dictionary.matcher(1.0).is_ok());
    }
}
