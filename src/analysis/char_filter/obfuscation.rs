//! Obfuscation (leetspeak) folding char filter.
//!
//! Digits and symbols commonly used as look-alike letters are mapped back to
//! the letter they imitate. Folded characters are marked as substituted so
//! the matcher can charge a reduced edit cost when the guess is wrong
//! ("f4ck" folds to "fack", one soft edit away from "fuck").
//!
//! Folding only happens inside whitespace-delimited runs that contain at
//! least one letter: "sh1t" and "$hit" are folded, "2013" and "100 $" are
//! not.

use super::{CharFilter, NormalizedChar};

/// Default look-alike table.
pub const DEFAULT_SUBSTITUTIONS: &[(char, char)] = &[
    ('4', 'a'),
    ('@', 'a'),
    ('3', 'e'),
    ('1', 'i'),
    ('0', 'o'),
    ('$', 's'),
    ('5', 's'),
    ('7', 't'),
];

/// A char filter that folds look-alike digits and symbols into letters.
#[derive(Clone, Debug)]
pub struct ObfuscationCharFilter {
    substitutions: Vec<(char, char)>,
}

impl Default for ObfuscationCharFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl ObfuscationCharFilter {
    /// Create a filter with [`DEFAULT_SUBSTITUTIONS`].
    pub fn new() -> Self {
        Self::with_substitutions(DEFAULT_SUBSTITUTIONS.to_vec())
    }

    /// Create a filter with a custom table. Targets must be letters that are
    /// not themselves sources, or folding would not be idempotent.
    pub fn with_substitutions(substitutions: Vec<(char, char)>) -> Self {
        debug_assert!(
            substitutions
                .iter()
                .all(|(_, to)| !substitutions.iter().any(|(from, _)| from == to))
        );
        Self { substitutions }
    }

    fn lookup(&self, ch: char) -> Option<char> {
        self.substitutions
            .iter()
            .find(|(from, _)| *from == ch)
            .map(|(_, to)| *to)
    }
}

impl CharFilter for ObfuscationCharFilter {
    fn filter(&self, mut input: Vec<NormalizedChar>) -> Vec<NormalizedChar> {
        let mut run_start = 0;
        while run_start < input.len() {
            if input[run_start].ch.is_whitespace() {
                run_start += 1;
                continue;
            }

            let run_end = input[run_start..]
                .iter()
                .position(|c| c.ch.is_whitespace())
                .map_or(input.len(), |len| run_start + len);

            let run = &mut input[run_start..run_end];
            if run.iter().any(|c| c.ch.is_alphabetic()) {
                for c in run.iter_mut() {
                    if let Some(letter) = self.lookup(c.ch) {
                        c.ch = letter;
                        c.substituted = true;
                    }
                }
            }

            run_start = run_end;
        }

        input
    }

    fn name(&self) -> &'static str {
        "obfuscation"
    }
}
