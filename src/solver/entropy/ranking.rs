//! Entropy-ranked guess search
//!
//! Scores every word of a guess pool against the candidate set and orders the
//! results by information content.

use super::calculator::calculate_metrics;
use crate::core::Word;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use serde::Serialize;

/// A guess with its scores against the current candidates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredGuess {
    pub word: Word,
    pub entropy_bits: f64,
    pub expected_remaining: f64,
    /// Whether the guess could itself be the answer
    pub is_candidate: bool,
}

/// Optional approximations for large searches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Score against an evenly strided subsample of at most this many candidates
    pub answer_sample: Option<usize>,
    /// Score only the first this-many pool words
    pub pool_limit: Option<usize>,
}

impl SearchLimits {
    /// No approximation: every pool word against every candidate
    pub const EXACT: Self = Self {
        answer_sample: None,
        pool_limit: None,
    };

    /// Candidate counts above this are subsampled
    pub const SAMPLE_THRESHOLD: usize = 1000;

    /// Pool sizes above this are capped
    pub const POOL_THRESHOLD: usize = 2000;

    /// Approximations for a search of the given size
    ///
    /// - more than 1000 candidates: sample `clamp(n / 2, 500, 2000)` of them
    /// - more than 2000 pool words: score only `clamp(pool / 2, 1000, 3000)`
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::solver::entropy::SearchLimits;
    ///
    /// let limits = SearchLimits::for_sizes(1200, 5000);
    /// assert_eq!(limits.answer_sample, Some(600));
    /// assert_eq!(limits.pool_limit, Some(2500));
    /// assert_eq!(SearchLimits::for_sizes(1000, 2000), SearchLimits::EXACT);
    /// ```
    #[must_use]
    pub fn for_sizes(candidate_count: usize, pool_size: usize) -> Self {
        Self {
            answer_sample: (candidate_count > Self::SAMPLE_THRESHOLD)
                .then(|| (candidate_count / 2).clamp(500, 2000)),
            pool_limit: (pool_size > Self::POOL_THRESHOLD)
                .then(|| (pool_size / 2).clamp(1000, 3000)),
        }
    }

    const fn sample(self) -> Option<usize> {
        match self.answer_sample {
            Some(0) | None => None,
            size => size,
        }
    }

    const fn limit(self) -> Option<usize> {
        match self.pool_limit {
            Some(0) | None => None,
            limit => limit,
        }
    }
}

/// Deterministic strided subsample of the candidates
///
/// When there are more candidates than `sample_size`, takes every
/// `len / sample_size`-th word starting from the first, up to `sample_size`
/// words. Otherwise all candidates are returned.
#[must_use]
pub fn sample_candidates(candidates: &[Word], sample_size: Option<usize>) -> Vec<&Word> {
    match sample_size {
        Some(size) if size > 0 && candidates.len() > size => {
            let step = (candidates.len() / size).max(1);
            candidates.iter().step_by(step).take(size).collect()
        }
        _ => candidates.iter().collect(),
    }
}

/// Sort by entropy descending, then expected remaining ascending
///
/// The sort is stable: exact ties keep their pool order.
pub fn sort_by_information(scored: &mut [ScoredGuess]) {
    scored.sort_by(|a, b| {
        b.entropy_bits
            .total_cmp(&a.entropy_bits)
            .then(a.expected_remaining.total_cmp(&b.expected_remaining))
    });
}

/// Rank pool words by expected information gain
///
/// Returns at most `top_k` guesses, best first, or an empty list when either
/// the pool or the candidate set is empty.
///
/// # Examples
/// ```
/// use wordle_advisor::core::Word;
/// use wordle_advisor::solver::entropy::{SearchLimits, rank_guesses};
///
/// let pool = vec![Word::new("zzzzz").unwrap(), Word::new("crate").unwrap()];
/// let candidates = vec![
///     Word::new("crate").unwrap(),
///     Word::new("crane").unwrap(),
///     Word::new("grade").unwrap(),
/// ];
/// let pool_refs: Vec<&Word> = pool.iter().collect();
///
/// let ranked = rank_guesses(&pool_refs, &candidates, 5, SearchLimits::EXACT);
/// assert_eq!(ranked[0].word.text(), "crate");
/// assert!(ranked[0].is_candidate);
/// assert_eq!(ranked.len(), 2);
/// ```
#[must_use]
pub fn rank_guesses(
    guess_pool: &[&Word],
    candidates: &[Word],
    top_k: usize,
    limits: SearchLimits,
) -> Vec<ScoredGuess> {
    if guess_pool.is_empty() || candidates.is_empty() {
        return Vec::new();
    }

    let evaluated = sample_candidates(candidates, limits.sample());
    let pool = match limits.limit() {
        Some(limit) => &guess_pool[..limit.min(guess_pool.len())],
        None => guess_pool,
    };
    let membership: FxHashSet<&str> = candidates.iter().map(Word::text).collect();

    // Parallel map keeps pool order, so ties stay deterministic
    let mut scored: Vec<ScoredGuess> = pool
        .par_iter()
        .map(|&guess| {
            let metrics = calculate_metrics(guess, &evaluated);
            ScoredGuess {
                word: guess.clone(),
                entropy_bits: metrics.entropy,
                expected_remaining: metrics.expected_remaining,
                is_candidate: membership.contains(guess.text()),
            }
        })
        .collect();

    sort_by_information(&mut scored);
    scored.truncate(top_k);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn ranks_by_entropy_descending() {
        let pool = words(&["aaaaa", "aeros", "slate"]);
        let candidates = words(&["slate", "irate", "crate", "grate"]);
        let pool_refs: Vec<&Word> = pool.iter().collect();

        let ranked = rank_guesses(&pool_refs, &candidates, 10, SearchLimits::EXACT);

        assert_eq!(ranked.len(), 3);
        assert!(
            ranked
                .windows(2)
                .all(|pair| pair[0].entropy_bits >= pair[1].entropy_bits)
        );
        assert_eq!(ranked.last().unwrap().word.text(), "aaaaa");
    }

    #[test]
    fn equal_entropy_prefers_fewer_expected_remaining() {
        let mut scored = vec![
            ScoredGuess {
                word: Word::new("first").unwrap(),
                entropy_bits: 1.5,
                expected_remaining: 3.0,
                is_candidate: false,
            },
            ScoredGuess {
                word: Word::new("other").unwrap(),
                entropy_bits: 1.5,
                expected_remaining: 2.0,
                is_candidate: false,
            },
            ScoredGuess {
                word: Word::new("third").unwrap(),
                entropy_bits: 2.0,
                expected_remaining: 9.0,
                is_candidate: false,
            },
        ];

        sort_by_information(&mut scored);
        let order: Vec<&str> = scored.iter().map(|s| s.word.text()).collect();
        assert_eq!(order, vec!["third", "other", "first"]);
    }

    #[test]
    fn truncates_to_top_k() {
        let pool = words(&["crane", "slate", "irate", "trace", "raise"]);
        let candidates = words(&["crate", "grate", "plate"]);
        let pool_refs: Vec<&Word> = pool.iter().collect();

        assert_eq!(
            rank_guesses(&pool_refs, &candidates, 2, SearchLimits::EXACT).len(),
            2
        );
    }

    #[test]
    fn empty_inputs_yield_nothing() {
        let pool = words(&["crane"]);
        let pool_refs: Vec<&Word> = pool.iter().collect();
        let candidates = words(&["slate"]);

        assert!(rank_guesses(&[], &candidates, 5, SearchLimits::EXACT).is_empty());
        assert!(rank_guesses(&pool_refs, &[], 5, SearchLimits::EXACT).is_empty());
    }

    #[test]
    fn pool_limit_scores_only_the_prefix() {
        let pool = words(&["aaaaa", "bbbbb", "crate"]);
        let candidates = words(&["crate", "crane"]);
        let pool_refs: Vec<&Word> = pool.iter().collect();
        let limits = SearchLimits {
            answer_sample: None,
            pool_limit: Some(2),
        };

        let ranked = rank_guesses(&pool_refs, &candidates, 5, limits);
        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|s| s.word.text() != "crate"));
    }

    #[test]
    fn zero_limits_mean_no_limit() {
        let pool = words(&["aaaaa", "crate"]);
        let candidates = words(&["crate", "crane"]);
        let pool_refs: Vec<&Word> = pool.iter().collect();
        let limits = SearchLimits {
            answer_sample: Some(0),
            pool_limit: Some(0),
        };

        assert_eq!(rank_guesses(&pool_refs, &candidates, 5, limits).len(), 2);
    }

    #[test]
    fn strided_sample_is_deterministic() {
        let candidates = words(&[
            "aaaaa", "bbbbb", "ccccc", "ddddd", "eeeee", "fffff", "ggggg",
        ]);

        let sample = sample_candidates(&candidates, Some(3));
        let texts: Vec<&str> = sample.iter().map(|w| w.text()).collect();
        // step = 7 / 3 = 2
        assert_eq!(texts, vec!["aaaaa", "ccccc", "eeeee"]);
        assert_eq!(sample, sample_candidates(&candidates, Some(3)));
    }

    #[test]
    fn sample_is_full_set_when_small_enough() {
        let candidates = words(&["aaaaa", "bbbbb"]);
        assert_eq!(sample_candidates(&candidates, Some(5)).len(), 2);
        assert_eq!(sample_candidates(&candidates, None).len(), 2);
    }

    #[test]
    fn limits_follow_size_thresholds() {
        assert_eq!(SearchLimits::for_sizes(0, 0), SearchLimits::EXACT);
        assert_eq!(SearchLimits::for_sizes(1001, 10).answer_sample, Some(500));
        assert_eq!(SearchLimits::for_sizes(9000, 10).answer_sample, Some(2000));
        assert_eq!(SearchLimits::for_sizes(10, 2001).pool_limit, Some(1000));
        assert_eq!(SearchLimits::for_sizes(10, 30000).pool_limit, Some(3000));
    }

    #[test]
    fn marks_candidate_membership() {
        let pool = words(&["crate", "slate"]);
        let candidates = words(&["crate", "crane"]);
        let pool_refs: Vec<&Word> = pool.iter().collect();

        let ranked = rank_guesses(&pool_refs, &candidates, 5, SearchLimits::EXACT);
        for guess in ranked {
            assert_eq!(guess.is_candidate, guess.word.text() == "crate");
        }
    }
}
