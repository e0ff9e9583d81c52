//! Shannon entropy calculation for feedback patterns
//!
//! Given a guess and set of candidates, computes the expected information gain
//! and the expected number of candidates left after playing the guess.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;

/// Metrics for evaluating a guess against a candidate set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Largest pattern bucket (worst-case remaining candidates)
    pub max_partition: usize,
}

impl GuessMetrics {
    pub const EMPTY: Self = Self {
        entropy: 0.0,
        expected_remaining: 0.0,
        max_partition: 0,
    };
}

/// Calculate Shannon entropy for a guess against candidates
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the share of candidates producing pattern x.
///
/// # Examples
/// ```
/// use wordle_advisor::core::Word;
/// use wordle_advisor::solver::entropy::calculate_entropy;
///
/// let guess = Word::new("slate").unwrap();
/// let candidates = vec![Word::new("slate").unwrap(), Word::new("zzzzz").unwrap()];
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// let entropy = calculate_entropy(&guess, &candidate_refs);
/// assert!((entropy - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, candidates: &[&Word]) -> f64 {
    calculate_metrics(guess, candidates).entropy
}

/// Group candidates by the pattern they produce with the guess
#[must_use]
pub fn pattern_distribution(guess: &Word, candidates: &[&Word]) -> FxHashMap<Pattern, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        let pattern = Pattern::calculate(guess, candidate);
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}

/// Calculate Shannon entropy from pattern distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for certain outcome (one pattern with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n patterns
#[must_use]
pub fn shannon_entropy<S>(pattern_counts: &std::collections::HashMap<Pattern, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = pattern_counts.values().sum::<usize>();
    entropy_of_buckets(&sorted_buckets(pattern_counts.values().copied()), total)
}

/// Calculate entropy, expected remaining and worst bucket for a guess
///
/// Empty candidate sets score zero on every metric.
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[&Word]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics::EMPTY;
    }

    let distribution = pattern_distribution(guess, candidates);
    let buckets = sorted_buckets(distribution.values().copied());
    let total = candidates.len();
    let n = total as f64;

    // Σ p·c = Σ c²/n
    let expected_remaining = buckets.iter().map(|&c| (c * c) as f64).sum::<f64>() / n;

    GuessMetrics {
        entropy: entropy_of_buckets(&buckets, total),
        expected_remaining,
        max_partition: buckets.last().copied().unwrap_or(0),
    }
}

/// Bucket sizes in ascending order
///
/// Sums run in this order so that equal distributions score bit-identically,
/// whatever order the hash map yields them in.
fn sorted_buckets(counts: impl Iterator<Item = usize>) -> Vec<usize> {
    let mut buckets: Vec<usize> = counts.filter(|&c| c > 0).collect();
    buckets.sort_unstable();
    buckets
}

fn entropy_of_buckets(buckets: &[usize], total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;

    buckets
        .iter()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}
