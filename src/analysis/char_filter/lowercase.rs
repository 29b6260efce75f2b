//! Lowercase char filter implementation.
//!
//! Lower-casing may expand one character into several ("İ" → "i̇"); every
//! produced character keeps the origin of the character it came from.

use super::{CharFilter, NormalizedChar};

/// A char filter that converts text to lowercase.
#[derive(Clone, Debug, Default)]
pub struct LowercaseCharFilter;

impl LowercaseCharFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseCharFilter
    }
}

impl CharFilter for LowercaseCharFilter {
    fn filter(&self, input: Vec<NormalizedChar>) -> Vec<NormalizedChar> {
        let mut output = Vec::with_capacity(input.len());
        for c in input {
            if c.ch.is_ascii() {
                output.push(c.replace(c.ch.to_ascii_lowercase()));
            } else {
                output.extend(c.ch.to_lowercase().map(|lower| c.replace(lower)));
            }
        }
        output
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
