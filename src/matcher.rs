//! Fuzzy scanning of text against a dictionary.
//!
//! A [`Matcher`] normalizes the input with its dictionary's normalizer and
//! walks the resulting tokens left to right. At every token it compares
//! each candidate term of k tokens against the windows of 1 to k following
//! tokens, joined by single spaces, so `sonofabitch` can still match
//! `son of a bitch`:
//!
//! - the cost is a Levenshtein distance in characters, except that
//!   substituting a character produced by obfuscation folding costs
//!   [`SOFT_SUBSTITUTION_COST`];
//! - the score is `1 - cost / max(window length, term length)`;
//! - a window is accepted when its score reaches the threshold, or for
//!   `exact` terms only when the cost is zero.
//!
//! The reported match is the first accepted one in scan order: the earliest
//! starting token wins, then the window with more tokens, then the higher
//! score, then the term loaded first. This favours deterministic output
//! over the highest-scoring match in the text.
//!
//! A differing first character costs at least [`SOFT_SUBSTITUTION_COST`].
//! When no non-exact term has that much budget at the threshold, candidates
//! come from the dictionary's first-character index. Otherwise every term
//! is compared at every token, which costs O(text × dictionary × term
//! length); typical thresholds with terms of five or more characters take
//! this path.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use profanity::dictionary::Dictionary;
//!
//! let dictionary = Arc::new(Dictionary::read("en", "fuck\n".as_bytes()).unwrap());
//! let matcher = dictionary.matcher(0.8).unwrap();
//!
//! let found = matcher.find("what the f4ck").unwrap();
//! assert_eq!(found.term, "fuck");
//! assert_eq!(found.text, "f4ck");
//! assert_eq!((found.start, found.end), (9, 13));
//! assert!(found.score >= 0.8);
//!
//! assert!(!matcher.matches("hello"));
//! ```

use std::sync::Arc;

use serde::Serialize;

use crate::analysis::token::Token;
use crate::config::{MatcherConfig, validate_threshold};
use crate::dictionary::{Dictionary, Term};
use crate::util::levenshtein::{similarity, weighted_distance_bounded};

#[doc(no_inline)]
pub use crate::util::levenshtein::SOFT_SUBSTITUTION_COST;

/// Tolerance for comparing scores against the threshold.
const SCORE_EPSILON: f64 = 1e-9;

/// One detected occurrence of a dictionary term.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Profanity {
    /// Canonical text of the matched term.
    pub term: String,
    /// The matched slice of the input, `&input[start..end]`.
    pub text: String,
    /// Byte offset where the match starts in the input.
    pub start: usize,
    /// Byte offset where the match ends in the input.
    pub end: usize,
    /// Similarity in `[threshold, 1.0]`.
    pub score: f64,
}

/// Scans text for terms of one dictionary at a fixed threshold.
///
/// Matchers hold no per-call state and are cheap to clone; share one behind
/// an `Arc` or clone it freely across threads.
#[derive(Clone, Debug)]
pub struct Matcher {
    dictionary: Arc<Dictionary>,
    threshold: f64,
    use_index: bool,
}

/// An accepted window: term index, token range and score.
#[derive(Clone, Copy, Debug)]
struct Hit {
    term: usize,
    first: usize,
    len: usize,
    score: f64,
}

impl Hit {
    /// Whether `self` should be reported instead of `other`, both starting
    /// at the same token. `len` counts window tokens, not term tokens.
    fn beats(&self, other: &Hit) -> bool {
        (self.len, self.score) > (other.len, other.score)
            || (self.len == other.len && self.score == other.score && self.term < other.term)
    }
}

impl Matcher {
    pub(crate) fn new(
        dictionary: Arc<Dictionary>,
        threshold: f64,
        config: &MatcherConfig,
    ) -> crate::error::Result<Matcher> {
        validate_threshold(threshold)?;
        let use_index = config.first_char_index && index_is_lossless(&dictionary, threshold);
        tracing::trace!(threshold, use_index, "matcher created");
        Ok(Matcher {
            dictionary,
            threshold,
            use_index,
        })
    }

    pub fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dictionary
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Whether `text` contains any term; equivalent to `find(text).is_some()`
    /// but stops at the first accepted window.
    pub fn matches(&self, text: &str) -> bool {
        self.scan(text, true).is_some()
    }

    /// Find the first term occurring in `text`.
    ///
    /// Returns `None` for empty text, text without any letter, or when no
    /// window reaches the threshold.
    pub fn find(&self, text: &str) -> Option<Profanity> {
        let (tokens, hit) = self.scan(text, false)?;
        let start = tokens[hit.first].start_offset;
        let end = tokens[hit.first + hit.len - 1].end_offset;
        Some(Profanity {
            term: self.dictionary.terms()[hit.term].text().to_string(),
            text: text[start..end].to_string(),
            start,
            end,
            score: hit.score,
        })
    }

    fn scan(&self, text: &str, first_hit: bool) -> Option<(Vec<Token>, Hit)> {
        if self.dictionary.is_empty() || !text.chars().any(char::is_alphabetic) {
            return None;
        }

        let tokens = self.dictionary.normalizer().analyze(text);
        let terms = self.dictionary.terms();

        for first in 0..tokens.len() {
            let candidates: Box<dyn Iterator<Item = usize> + '_> = if self.use_index {
                match tokens[first].text.chars().next() {
                    Some(ch) => Box::new(self.dictionary.candidates(ch).iter().copied()),
                    None => continue,
                }
            } else {
                Box::new(0..terms.len())
            };

            let mut windows = WindowCache::new(&tokens[first..]);
            let mut best: Option<Hit> = None;

            for idx in candidates {
                let term = &terms[idx];

                // Longest window first; a longer window beats any shorter one.
                for len in (1..=term.token_count()).rev() {
                    let Some(window) = windows.get(len) else {
                        continue;
                    };
                    let Some(score) = self.score(window, term) else {
                        continue;
                    };

                    let hit = Hit {
                        term: idx,
                        first,
                        len,
                        score,
                    };
                    if first_hit {
                        return Some((tokens, hit));
                    }
                    if best.is_none_or(|b| hit.beats(&b)) {
                        best = Some(hit);
                    }
                    break;
                }
            }

            if let Some(hit) = best {
                tracing::trace!(position = first, score = hit.score, "window accepted");
                return Some((tokens, hit));
            }
        }

        None
    }

    /// Score of `window` against `term`, if accepted.
    fn score(&self, window: &Window, term: &Term) -> Option<f64> {
        let window_len = window.chars.len();
        let term_len = term.chars().len();

        let budget = if term.is_exact() {
            0.0
        } else {
            (1.0 - self.threshold) * window_len.max(term_len) as f64 + SCORE_EPSILON
        };

        if window.chars.first() != term.chars().first() {
            let edit = match window.soft.first() {
                Some(true) => SOFT_SUBSTITUTION_COST,
                _ => 1.0,
            };
            if budget < edit {
                return None;
            }
        }

        let cost = weighted_distance_bounded(&window.chars, &window.soft, term.chars(), budget)?;
        let score = similarity(cost, window_len, term_len);

        if term.is_exact() {
            return (cost == 0.0).then_some(score);
        }
        (score + SCORE_EPSILON >= self.threshold).then_some(score)
    }
}

/// Whether skipping terms whose first character differs from the token's
/// can never drop an accepted window.
///
/// An accepted window has at most `term length / threshold` characters, so a
/// non-exact term never has more budget than `(1 - t) / t × term length`.
/// Exact terms have none.
fn index_is_lossless(dictionary: &Dictionary, threshold: f64) -> bool {
    if threshold <= 0.0 {
        return false;
    }
    let longest = dictionary
        .terms()
        .iter()
        .filter(|term| !term.is_exact())
        .map(|term| term.chars().len())
        .max()
        .unwrap_or(0);
    (1.0 - threshold) / threshold * longest as f64 + SCORE_EPSILON < SOFT_SUBSTITUTION_COST
}

/// Joined characters of a token window and their soft-substitution flags.
#[derive(Debug, Default)]
struct Window {
    chars: Vec<char>,
    soft: Vec<bool>,
}

/// Windows starting at one token, built on first use per length.
struct WindowCache<'a> {
    tokens: &'a [Token],
    windows: Vec<Option<Window>>,
}

impl<'a> WindowCache<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        WindowCache {
            tokens,
            windows: Vec::new(),
        }
    }

    /// Window of `len` tokens, or `None` when the text is too short.
    fn get(&mut self, len: usize) -> Option<&Window> {
        if len == 0 || len > self.tokens.len() {
            return None;
        }
        if self.windows.len() < len {
            self.windows.resize_with(len, || None);
        }

        let tokens = self.tokens;
        let slot = &mut self.windows[len - 1];
        Some(slot.get_or_insert_with(|| {
            let mut window = Window::default();
            for (i, token) in tokens[..len].iter().enumerate() {
                if i > 0 {
                    window.chars.push(' ');
                    window.soft.push(false);
                }
                window.chars.extend(token.text.chars());
                window.soft.extend_from_slice(&token.substituted);
            }
            window
        }))
    }
}
