//! # Relname Match
//!
//! Decides whether two titles name the same work. Titles are normalized to
//! lowercase alphanumeric words with common English stopwords removed, then
//! compared by Dice similarity over their word sets.
//!
//! ```rust
//! use relname_match::{DEFAULT_MATCH_THRESHOLD, match_titles, normalize_title};
//!
//! assert_eq!(normalize_title("The.Lord.of.the.Rings"), "lord rings");
//! assert!(match_titles("The Matrix", "Matrix", DEFAULT_MATCH_THRESHOLD));
//! assert!(!match_titles("Matrix Reloaded", "Matrix Revolutions", DEFAULT_MATCH_THRESHOLD));
//! ```

use std::collections::HashSet;

use tracing::trace;

/// Similarity at or above which two titles are considered the same work.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.8;

/// Words dropped during normalization.
pub const STOPWORDS: [&str; 6] = ["the", "a", "an", "and", "or", "of"];

/// Lowercases `title`, turns every non-alphanumeric character into a space,
/// drops stopwords and rejoins the remaining words with single spaces.
///
/// Idempotent: normalizing a normalized title returns it unchanged.
#[must_use]
pub fn normalize_title(title: &str) -> String {
    let spaced: String = title
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();

    spaced
        .split_whitespace()
        .filter(|word| !STOPWORDS.contains(word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Dice coefficient of the whitespace-separated word sets of `a` and `b`.
///
/// Duplicate words count once. Returns 0.0 when either side has no words.
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    let left: HashSet<&str> = a.split_whitespace().collect();
    let right: HashSet<&str> = b.split_whitespace().collect();

    if left.is_empty() || right.is_empty() {
        return 0.0;
    }

    let shared = left.intersection(&right).count();
    // Word counts are tiny; the casts are exact.
    (2 * shared) as f64 / (left.len() + right.len()) as f64
}

/// Returns `true` if `a` and `b` normalize to the same title or their
/// normalized similarity reaches `threshold`.
///
/// Two titles that both normalize to nothing are a match.
#[must_use]
pub fn match_titles(a: &str, b: &str, threshold: f64) -> bool {
    let a = normalize_title(a);
    let b = normalize_title(b);
    if a == b {
        return true;
    }

    let score = similarity(&a, &b);
    trace!(%a, %b, score, threshold, "title similarity");
    score >= threshold
}
