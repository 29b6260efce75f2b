//! Dictionary terms and their flags.

use serde::Serialize;

use crate::analysis::char_filter::collect_text;
use crate::analysis::normalizer::{Normalizer, join_tokens};
use crate::error::{ProfanityError, Result};

/// Per-term annotations read from the flag column of a dictionary line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TermFlags {
    /// Only an exact match of the normalized form is accepted, whatever the
    /// matcher threshold. Meant for short words prone to false positives.
    pub exact: bool,
}

impl TermFlags {
    /// Parse a comma-separated flag list such as `"exact"`.
    ///
    /// Empty entries are ignored; unknown flags are a format error for the
    /// given 1-based line.
    pub fn parse(flags: &str, line: usize) -> Result<TermFlags> {
        let mut parsed = TermFlags::default();
        for flag in flags.split(',').map(str::trim).filter(|f| !f.is_empty()) {
            match flag.to_lowercase().as_str() {
                "exact" => parsed.exact = true,
                other => {
                    return Err(ProfanityError::format(
                        line,
                        format!("unknown flag '{other}'"),
                    ));
                }
            }
        }
        Ok(parsed)
    }
}

/// One canonical offensive expression of a dictionary.
///
/// A term keeps two renditions of its text: the canonical form reported to
/// callers (lower-cased, accents stripped, whitespace collapsed) and the
/// match form compared against scanned text, which additionally goes
/// through obfuscation and repeat folding and is split into tokens.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Term {
    text: String,
    form: String,
    #[serde(skip)]
    chars: Vec<char>,
    token_count: usize,
    flags: TermFlags,
}

impl Term {
    /// Build a term from raw dictionary text.
    ///
    /// `canonicalizer` produces the reported form and `normalizer` the match
    /// form. Text without any word content or without any letter is
    /// rejected, since scanning never looks at text without letters.
    pub(crate) fn new(
        raw: &str,
        flags: TermFlags,
        canonicalizer: &Normalizer,
        normalizer: &Normalizer,
        line: usize,
    ) -> Result<Term> {
        let tokens = normalizer.analyze(raw);
        if tokens.is_empty() {
            return Err(ProfanityError::format(line, "term has no word content"));
        }
        if !tokens.iter().any(|t| t.text.chars().any(char::is_alphabetic)) {
            return Err(ProfanityError::format(line, "term has no alphabetic content"));
        }

        let canonical = collect_text(&canonicalizer.filter_chars(raw));
        let text = canonical.split_whitespace().collect::<Vec<_>>().join(" ");
        let form = join_tokens(&tokens);
        let chars = form.chars().collect();

        Ok(Term {
            text,
            form,
            chars,
            token_count: tokens.len(),
            flags,
        })
    }

    /// Canonical text of the term, as reported in matches.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Normalized form compared against scanned text (tokens joined by one
    /// space).
    pub fn form(&self) -> &str {
        &self.form
    }

    /// Number of tokens in the match form.
    pub fn token_count(&self) -> usize {
        self.token_count
    }

    pub fn flags(&self) -> TermFlags {
        self.flags
    }

    pub fn is_exact(&self) -> bool {
        self.flags.exact
    }

    pub(crate) fn chars(&self) -> &[char] {
        &self.chars
    }

    /// First character of the match form, the key of the dictionary index.
    pub(crate) fn first_char(&self) -> Option<char> {
        self.chars.first().copied()
    }
}
