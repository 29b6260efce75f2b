//! Diacritic folding char filter.
//!
//! Letters of scripts with canonical accent decomposition (Latin, Greek,
//! Cyrillic) are decomposed and their combining marks dropped, so "é",
//! "e\u{301}" and "e" all compare equal. Other scripts are left untouched:
//! stripping marks there (Devanagari vowel signs, Japanese dakuten, Hangul
//! jamo) would change letters rather than accents.

use unicode_normalization::char::{decompose_canonical, is_combining_mark};

use super::{CharFilter, NormalizedChar};

/// A char filter that strips accents from Latin, Greek and Cyrillic letters.
#[derive(Clone, Debug, Default)]
pub struct DiacriticFoldingCharFilter;

impl DiacriticFoldingCharFilter {
    pub fn new() -> Self {
        DiacriticFoldingCharFilter
    }

    fn is_foldable_script(ch: char) -> bool {
        matches!(ch,
            '\u{0041}'..='\u{024F}' | // Basic Latin letters through Latin Extended-B
            '\u{0370}'..='\u{052F}' | // Greek, Coptic, Cyrillic, Cyrillic Supplement
            '\u{1E00}'..='\u{1FFF}'   // Latin Extended Additional, Greek Extended
        )
    }
}

impl CharFilter for DiacriticFoldingCharFilter {
    fn filter(&self, input: Vec<NormalizedChar>) -> Vec<NormalizedChar> {
        let mut output: Vec<NormalizedChar> = Vec::with_capacity(input.len());

        for c in input {
            if is_combining_mark(c.ch) {
                // A standalone mark after a foldable letter belongs to that letter.
                if let Some(prev) = output.last_mut()
                    && Self::is_foldable_script(prev.ch)
                {
                    prev.end = prev.end.max(c.end);
                    continue;
                }
                output.push(c);
                continue;
            }

            if !Self::is_foldable_script(c.ch) {
                output.push(c);
                continue;
            }

            decompose_canonical(c.ch, |d| {
                if !is_combining_mark(d) {
                    output.push(c.replace(d));
                }
            });
        }

        output
    }

    fn name(&self) -> &'static str {
        "diacritic_folding"
    }
}
