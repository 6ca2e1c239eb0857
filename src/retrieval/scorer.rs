//! Lexical similarity scoring
//!
//! Jaccard index over lowercased word sets. No stemming, no stopword
//! removal, no language-specific normalization; the tokenization contract
//! is plain lowercase plus whitespace split.

use std::collections::HashSet;

/// Score a chunk against a query, in [0.0, 1.0].
///
/// Both strings are lowercased and whitespace-tokenized into sets of unique
/// words (duplicates collapse; this is deliberately a set, not a multiset).
/// Returns `|A ∩ B| / |A ∪ B|`, or 0.0 when either side has no tokens.
/// Symmetric; 1.0 only when the token sets are identical, 0.0 only when
/// disjoint.
pub fn score(chunk: &str, query: &str) -> f64 {
    let chunk_words = word_set(chunk);
    let query_words = word_set(query);

    if chunk_words.is_empty() || query_words.is_empty() {
        return 0.0;
    }

    let intersection = chunk_words.intersection(&query_words).count();
    let union = chunk_words.union(&query_words).count();

    intersection as f64 / union as f64
}

fn word_set(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_overlapping_sentences() {
        // Shared tokens: {the, is}. Union has 9 tokens ("hot." and "hot",
        // "sun" and "sun?" stay distinct with punctuation attached).
        let s = score("The sun is bright and hot.", "How hot is the sun?");
        assert!((s - 2.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_disjoint_is_zero() {
        assert_eq!(score("Bananas are yellow.", "How do airplanes fly?"), 0.0);
    }

    #[test]
    fn test_score_identical_is_one() {
        assert_eq!(score("the sun is hot", "the sun is hot"), 1.0);
    }

    #[test]
    fn test_score_case_insensitive() {
        assert_eq!(score("HELLO World", "hello WORLD"), 1.0);
    }

    #[test]
    fn test_score_duplicates_collapse() {
        assert_eq!(score("the the the", "the"), 1.0);
    }

    #[test]
    fn test_score_empty_inputs() {
        assert_eq!(score("", "anything"), 0.0);
        assert_eq!(score("anything", ""), 0.0);
        assert_eq!(score("", ""), 0.0);
        assert_eq!(score("   ", "anything"), 0.0);
    }

    #[test]
    fn test_score_symmetry() {
        let a = "The red car is speeding down the road.";
        let b = "What color is the car?";
        assert_eq!(score(a, b), score(b, a));
    }

    #[test]
    fn test_score_in_range() {
        for (a, b) in [
            ("a b c", "c d e"),
            ("one", "two"),
            ("x", "x"),
            ("many words here now", "here"),
        ] {
            let s = score(a, b);
            assert!((0.0..=1.0).contains(&s), "score {} out of range", s);
        }
    }
}
