//! Repeated-character collapsing char filter.
//!
//! Runs of the same character longer than `max_repeat` are cut down to
//! `max_repeat` characters. The last kept character absorbs the raw bytes of
//! the dropped ones, so a token built from "fuuuuck" still spans the whole
//! elongated word.

use super::{CharFilter, NormalizedChar};

/// A char filter that collapses elongated character runs.
#[derive(Clone, Debug)]
pub struct RepeatCollapseCharFilter {
    max_repeat: usize,
}

impl RepeatCollapseCharFilter {
    /// Create a filter keeping at most `max_repeat` consecutive copies of a
    /// character. `max_repeat` of zero is treated as one.
    pub fn new(max_repeat: usize) -> Self {
        Self {
            max_repeat: max_repeat.max(1),
        }
    }

    pub fn max_repeat(&self) -> usize {
        self.max_repeat
    }
}

impl CharFilter for RepeatCollapseCharFilter {
    fn filter(&self, input: Vec<NormalizedChar>) -> Vec<NormalizedChar> {
        let mut output: Vec<NormalizedChar> = Vec::with_capacity(input.len());
        let mut run_len = 0;

        for c in input {
            match output.last_mut() {
                Some(prev) if prev.ch == c.ch => {
                    run_len += 1;
                    if run_len > self.max_repeat {
                        prev.end = prev.end.max(c.end);
                        prev.substituted &= c.substituted;
                        continue;
                    }
                }
                _ => run_len = 1,
            }
            output.push(c);
        }

        output
    }

    fn name(&self) -> &'static str {
        "repeat_collapse"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::char_filter::collect_text;

    fn collapse(text: &str, max_repeat: usize) -> Vec<NormalizedChar> {
        RepeatCollapseCharFilter::new(max_repeat).filter(NormalizedChar::from_text(text))
    }

    #[test]
    fn test_collapse_elongation() {
        assert_eq!(collect_text(&collapse("fuuuuck", 2)), "fuuck");
        assert_eq!(collect_text(&collapse("good", 2)), "good");
        assert_eq!(collect_text(&collapse("aaa bbb", 1)), "a b");
    }

    #[test]
    fn test_dropped_bytes_absorbed() {
        let result = collapse("xoooo", 2);
        assert_eq!(collect_text(&result), "xoo");
        assert_eq!((result[2].start, result[2].end), (2, 5));
    }

    #[test]
    fn test_zero_treated_as_one() {
        let filter = RepeatCollapseCharFilter::new(0);
        assert_eq!(filter.max_repeat(), 1);
    }

    #[test]
    fn test_idempotent() {
        let once = collapse("shiiiiit!!!!", 2);
        let twice = RepeatCollapseCharFilter::new(2).filter(once.clone());
        assert_eq!(once, twice);
    }
}
