//! Utility modules.

pub mod levenshtein;
