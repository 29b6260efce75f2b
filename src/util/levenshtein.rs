//! Levenshtein distance algorithms used for fuzzy term matching.
//!
//! [`weighted_distance_bounded`] is a two-row Levenshtein variant that
//! charges a reduced cost for substituting characters produced by
//! obfuscation folding and gives up as soon as a row exceeds the caller's
//! budget. Without soft characters it is the classic unit-cost distance.

/// Cost of substituting a character that came from obfuscation folding.
pub const SOFT_SUBSTITUTION_COST: f64 = 0.5;

/// Weighted edit distance between a candidate window and a term, or `None`
/// once it is certain to exceed `budget`.
///
/// `soft` holds one flag per candidate character; substituting a flagged
/// character costs [`SOFT_SUBSTITUTION_COST`] instead of 1. Insertions and
/// deletions always cost 1.
#[allow(clippy::needless_range_loop)]
pub fn weighted_distance_bounded(
    candidate: &[char],
    soft: &[bool],
    term: &[char],
    budget: f64,
) -> Option<f64> {
    debug_assert_eq!(candidate.len(), soft.len());
    let len1 = candidate.len();
    let len2 = term.len();

    // Early termination if length difference exceeds budget
    if len1.abs_diff(len2) as f64 > budget {
        return None;
    }

    let mut prev_row: Vec<f64> = (0..=len2).map(|j| j as f64).collect();
    let mut curr_row = vec![0.0; len2 + 1];

    for i in 1..=len1 {
        curr_row[0] = i as f64;
        let mut min_in_row = curr_row[0];

        for j in 1..=len2 {
            let cost = if candidate[i - 1] == term[j - 1] {
                0.0
            } else if soft[i - 1] {
                SOFT_SUBSTITUTION_COST
            } else {
                1.0
            };

            curr_row[j] = (prev_row[j] + 1.0) // deletion
                .min(curr_row[j - 1] + 1.0) // insertion
                .min(prev_row[j - 1] + cost); // substitution

            min_in_row = min_in_row.min(curr_row[j]);
        }

        // Early termination if minimum in row exceeds budget
        if min_in_row > budget {
            return None;
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[len2];
    (distance <= budget).then_some(distance)
}

/// Similarity in `[0.0, 1.0]` for an edit cost between strings of the given
/// character lengths: `1 - cost / max(len1, len2)`. Two empty strings are
/// identical.
pub fn similarity(cost: f64, len1: usize, len2: usize) -> f64 {
    let max_len = len1.max(len2);
    if max_len == 0 {
        return 1.0;
    }
    (1.0 - cost / max_len as f64).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn hard(s: &str) -> Vec<bool> {
        vec![false; s.chars().count()]
    }

    #[test]
    fn test_unit_costs() {
        let pairs = [
            ("kitten", "sitting", 3.0),
            ("search", "serach", 2.0), // transposition
            ("fuuck", "fuck", 1.0),
            ("moron", "moran", 1.0),
            ("", "abc", 3.0),
            ("abc", "def", 3.0),
            ("son of a bitch", "sonofabitch", 3.0),
        ];
        for (a, b, expected) in pairs {
            let got = weighted_distance_bounded(&chars(a), &hard(a), &chars(b), 100.0);
            assert_eq!(got, Some(expected), "{a} vs {b}");
        }
    }

    #[test]
    fn test_soft_substitution() {
        // "fack" where 'a' came from '4'
        let soft = vec![false, true, false, false];
        let cost = weighted_distance_bounded(&chars("fack"), &soft, &chars("fuck"), 4.0);
        assert_eq!(cost, Some(SOFT_SUBSTITUTION_COST));

        // Soft flags do not discount insertions or deletions.
        let soft = vec![false, true, false, false, false];
        let cost = weighted_distance_bounded(&chars("faack"), &soft, &chars("fck"), 4.0);
        assert_eq!(cost, Some(2.0));
    }

    #[test]
    fn test_budget() {
        assert_eq!(
            weighted_distance_bounded(&chars("kitten"), &hard("kitten"), &chars("sitting"), 3.0),
            Some(3.0)
        );
        assert_eq!(
            weighted_distance_bounded(&chars("kitten"), &hard("kitten"), &chars("sitting"), 2.5),
            None
        );
        assert_eq!(
            weighted_distance_bounded(&chars("a"), &hard("a"), &chars("abc"), 1.0),
            None
        );
        assert_eq!(
            weighted_distance_bounded(&chars("idiot"), &hard("idiot"), &chars("idiot"), 0.0),
            Some(0.0)
        );
    }

    #[test]
    fn test_similarity() {
        assert_eq!(similarity(0.0, 0, 0), 1.0);
        assert_eq!(similarity(0.0, 5, 5), 1.0);
        assert!((similarity(1.0, 4, 5) - 0.8).abs() < 1e-12);
        assert_eq!(similarity(10.0, 3, 4), 0.0);
    }
}
