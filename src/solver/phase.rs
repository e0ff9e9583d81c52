//! Phase-aware strategy
//!
//! Chooses which pool words get scored depending on how far the game has
//! progressed, and reorders the ranking late in the game so that words which
//! could actually win are tried first.

use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

use super::entropy::{ScoredGuess, SearchLimits, rank_guesses, sort_by_information};
use crate::core::Word;

/// Stage of the game, derived from the number of recorded guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    /// At most one guess recorded
    Early,
    /// Two or three guesses recorded
    Mid,
    /// More than three guesses recorded
    End,
}

impl GamePhase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Early => "early",
            Self::Mid => "mid",
            Self::End => "end",
        }
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Thresholds driving pool selection and late re-ranking
///
/// ```text
/// attempts <= early_max_attempts  → Early: diversity-ordered pool
/// attempts <= mid_max_attempts    → Mid:   full pool
/// otherwise                       → End:   candidates + entropy probes
///                                          once <= end_game_candidates remain
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseStrategy {
    /// Attempts at or below this are early game (default: 1)
    pub early_max_attempts: usize,

    /// Attempts at or below this are mid game (default: 3)
    pub mid_max_attempts: usize,

    /// End game narrows the pool once this few candidates remain (default: 10)
    pub end_game_candidates: usize,

    /// Leading pool words probed for high-entropy extras (default: 500)
    pub probe_pool_size: usize,

    /// High-entropy extras added to the end-game pool (default: 10)
    pub probe_count: usize,

    /// End-game candidate count at which candidates are ranked first (default: 5)
    pub rerank_candidates: usize,
}

impl Default for PhaseStrategy {
    fn default() -> Self {
        Self {
            early_max_attempts: 1,
            mid_max_attempts: 3,
            end_game_candidates: 10,
            probe_pool_size: 500,
            probe_count: 10,
            rerank_candidates: 5,
        }
    }
}

impl PhaseStrategy {
    #[must_use]
    pub const fn phase(&self, attempts: usize) -> GamePhase {
        if attempts <= self.early_max_attempts {
            GamePhase::Early
        } else if attempts <= self.mid_max_attempts {
            GamePhase::Mid
        } else {
            GamePhase::End
        }
    }

    /// Words to score for this phase
    ///
    /// - one candidate left: that candidate alone
    /// - early: pool ordered by [`diversity_score`], cut to the pool limit
    /// - end with few candidates: candidates present in the pool, followed by
    ///   the best entropy probes from the head of the pool, without repeats
    /// - otherwise the whole pool (the pool limit is applied while ranking)
    #[must_use]
    pub fn evaluation_pool<'w>(
        &self,
        phase: GamePhase,
        guess_pool: &'w [Word],
        candidates: &'w [Word],
        limits: SearchLimits,
    ) -> Vec<&'w Word> {
        if let [only] = candidates {
            return vec![only];
        }

        match phase {
            GamePhase::Early => diverse_words(guess_pool, candidates, limits.pool_limit),
            GamePhase::End if candidates.len() <= self.end_game_candidates => self
                .end_game_pool(guess_pool, candidates, limits)
                .unwrap_or_else(|| guess_pool.iter().collect()),
            GamePhase::Mid | GamePhase::End => guess_pool.iter().collect(),
        }
    }

    /// Candidates that are valid guesses plus the top entropy probes
    ///
    /// `None` when no candidate appears in the pool.
    fn end_game_pool<'w>(
        &self,
        guess_pool: &'w [Word],
        candidates: &[Word],
        limits: SearchLimits,
    ) -> Option<Vec<&'w Word>> {
        let by_text: FxHashMap<&str, &'w Word> =
            guess_pool.iter().map(|word| (word.text(), word)).collect();
        let find_in_pool = |word: &Word| by_text.get(word.text()).copied();

        let candidate_guesses: Vec<&'w Word> =
            candidates.iter().filter_map(find_in_pool).collect();
        if candidate_guesses.is_empty() {
            return None;
        }

        let head: Vec<&Word> = guess_pool.iter().take(self.probe_pool_size).collect();
        let probe_limits = SearchLimits {
            answer_sample: limits.answer_sample,
            pool_limit: None,
        };
        let probes = rank_guesses(&head, candidates, self.probe_count, probe_limits);

        let mut seen = FxHashSet::default();
        let pool = candidate_guesses
            .into_iter()
            .chain(probes.iter().filter_map(|scored| find_in_pool(&scored.word)))
            .filter(|&word| seen.insert(word.text()))
            .collect();

        Some(pool)
    }

    /// Move winning candidates ahead of pure probes late in the game
    ///
    /// Applies in the end phase with at most `rerank_candidates` candidates
    /// left, and only when the ranking contains a candidate at all. Each half
    /// keeps the entropy ordering.
    #[must_use]
    pub fn rerank(
        &self,
        phase: GamePhase,
        ranked: Vec<ScoredGuess>,
        candidate_count: usize,
    ) -> Vec<ScoredGuess> {
        if phase != GamePhase::End
            || candidate_count > self.rerank_candidates
            || !ranked.iter().any(|scored| scored.is_candidate)
        {
            return ranked;
        }

        let (mut winners, mut probes): (Vec<_>, Vec<_>) =
            ranked.into_iter().partition(|scored| scored.is_candidate);
        sort_by_information(&mut winners);
        sort_by_information(&mut probes);
        winners.extend(probes);
        winners
    }
}

/// Number of candidates containing each letter, counted once per word
fn letter_frequencies(candidates: &[Word]) -> [usize; 26] {
    let mut freq = [0usize; 26];
    for word in candidates {
        for letter in word.distinct_letters() {
            freq[usize::from(letter - b'a')] += 1;
        }
    }
    freq
}

/// Early-game desirability of a word
///
/// `2 × distinct letters + Σ freq(distinct letter) / candidate_count`, where
/// `freq` comes from counting each letter once per candidate. Repeated
/// letters lower the first term; letters common among candidates raise the
/// second.
#[must_use]
pub fn diversity_score(word: &Word, letter_freq: &[usize; 26], candidate_count: usize) -> f64 {
    let distinct = word.distinct_letters();
    let base = 2.0 * distinct.len() as f64;
    if candidate_count == 0 {
        return base;
    }

    let freq_sum: usize = distinct
        .iter()
        .map(|&letter| letter_freq[usize::from(letter - b'a')])
        .sum();
    base + freq_sum as f64 / candidate_count as f64
}

/// Pool words ordered by [`diversity_score`], best first
///
/// The sort is stable. With a `limit`, only that many words are returned.
/// Empty words or candidates leave the pool as it is.
///
/// # Examples
/// ```
/// use wordle_advisor::core::Word;
/// use wordle_advisor::solver::diverse_words;
///
/// let pool: Vec<Word> = ["sassy", "slate", "crane"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let candidates = vec![Word::new("slate").unwrap()];
///
/// let ordered = diverse_words(&pool, &candidates, Some(2));
/// assert_eq!(ordered[0].text(), "slate");
/// assert_eq!(ordered.len(), 2);
/// ```
#[must_use]
pub fn diverse_words<'w>(
    words: &'w [Word],
    candidates: &[Word],
    limit: Option<usize>,
) -> Vec<&'w Word> {
    if words.is_empty() || candidates.is_empty() {
        return words.iter().collect();
    }

    let freq = letter_frequencies(candidates);
    let mut scored: Vec<(&Word, f64)> = words
        .iter()
        .map(|word| (word, diversity_score(word, &freq, candidates.len())))
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    let take = match limit {
        Some(limit) if limit > 0 => limit,
        _ => scored.len(),
    };
    scored.into_iter().take(take).map(|(word, _)| word).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn scored(word: &str, entropy_bits: f64, expected: f64, is_candidate: bool) -> ScoredGuess {
        ScoredGuess {
            word: Word::new(word).unwrap(),
            entropy_bits,
            expected_remaining: expected,
            is_candidate,
        }
    }

    #[test]
    fn phase_boundaries() {
        let strategy = PhaseStrategy::default();

        assert_eq!(strategy.phase(0), GamePhase::Early);
        assert_eq!(strategy.phase(1), GamePhase::Early);
        assert_eq!(strategy.phase(2), GamePhase::Mid);
        assert_eq!(strategy.phase(3), GamePhase::Mid);
        assert_eq!(strategy.phase(4), GamePhase::End);
        assert_eq!(strategy.phase(9), GamePhase::End);
    }

    #[test]
    fn phase_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&GamePhase::Mid).unwrap(), "\"mid\"");
        assert_eq!(GamePhase::End.to_string(), "end");
    }

    #[test]
    fn diversity_score_matches_formula() {
        let candidates = words(&["slate", "crate", "sassy"]);
        let freq = letter_frequencies(&candidates);

        // a appears in all three, s in two (once per word), t and e in two
        assert_eq!(freq[usize::from(b'a' - b'a')], 3);
        assert_eq!(freq[usize::from(b's' - b'a')], 2);

        let word = Word::new("seats").unwrap();
        // distinct s,e,a,t → 2×4 + (2 + 2 + 3 + 2) / 3
        let expected = 8.0 + 9.0 / 3.0;
        assert!((diversity_score(&word, &freq, 3) - expected).abs() < 1e-12);
    }

    #[test]
    fn repeated_letters_rank_lower() {
        let pool = words(&["sassy", "slate"]);
        let candidates = words(&["slate", "sassy", "crate"]);

        let ordered = diverse_words(&pool, &candidates, None);
        assert_eq!(ordered[0].text(), "slate");
    }

    #[test]
    fn diversity_sort_is_stable_for_ties() {
        let pool = words(&["abcde", "fghij", "klmno"]);
        let candidates = words(&["zzzzz"]);

        let ordered: Vec<&str> = diverse_words(&pool, &candidates, None)
            .iter()
            .map(|w| w.text())
            .collect();
        assert_eq!(ordered, vec!["abcde", "fghij", "klmno"]);
    }

    #[test]
    fn diverse_words_without_candidates_is_identity() {
        let pool = words(&["sassy", "slate"]);
        let ordered = diverse_words(&pool, &[], Some(1));
        assert_eq!(ordered.len(), 2);
        assert_eq!(ordered[0].text(), "sassy");
    }

    #[test]
    fn single_candidate_is_the_whole_pool() {
        let strategy = PhaseStrategy::default();
        let pool = words(&["crane", "slate"]);
        let candidates = words(&["grade"]);

        for phase in [GamePhase::Early, GamePhase::Mid, GamePhase::End] {
            let chosen = strategy.evaluation_pool(phase, &pool, &candidates, SearchLimits::EXACT);
            assert_eq!(chosen, vec![&candidates[0]]);
        }
    }

    #[test]
    fn mid_game_uses_full_pool() {
        let strategy = PhaseStrategy::default();
        let pool = words(&["crane", "slate", "sassy"]);
        let candidates = words(&["crate", "grate"]);

        let chosen =
            strategy.evaluation_pool(GamePhase::Mid, &pool, &candidates, SearchLimits::EXACT);
        assert_eq!(chosen.len(), 3);
        assert_eq!(chosen[2].text(), "sassy");
    }

    #[test]
    fn end_game_pool_puts_candidates_first_without_repeats() {
        let strategy = PhaseStrategy {
            probe_count: 2,
            ..PhaseStrategy::default()
        };
        let pool = words(&["crate", "grate", "slate", "zzzzz", "tramp"]);
        let candidates = words(&["grate", "crate", "frate"]);

        let chosen =
            strategy.evaluation_pool(GamePhase::End, &pool, &candidates, SearchLimits::EXACT);
        let texts: Vec<&str> = chosen.iter().map(|w| w.text()).collect();

        assert_eq!(&texts[..2], &["grate", "crate"]);
        let unique: FxHashSet<&str> = texts.iter().copied().collect();
        assert_eq!(unique.len(), texts.len());
        assert!(texts.len() <= 4);
    }

    #[test]
    fn end_game_without_pool_candidates_falls_back_to_pool() {
        let strategy = PhaseStrategy::default();
        let pool = words(&["slate", "zzzzz"]);
        let candidates = words(&["grate", "crate"]);

        let chosen =
            strategy.evaluation_pool(GamePhase::End, &pool, &candidates, SearchLimits::EXACT);
        assert_eq!(chosen.len(), 2);
    }

    #[test]
    fn rerank_puts_candidates_first_in_end_game() {
        let strategy = PhaseStrategy::default();
        let ranked = vec![
            scored("slant", 1.5, 1.0, false),
            scored("grate", 1.0, 2.0, true),
            scored("plonk", 1.2, 1.5, false),
            scored("crate", 1.0, 1.5, true),
        ];

        let reordered = strategy.rerank(GamePhase::End, ranked, 3);
        let order: Vec<&str> = reordered.iter().map(|s| s.word.text()).collect();
        assert_eq!(order, vec!["crate", "grate", "slant", "plonk"]);
    }

    #[test]
    fn rerank_leaves_other_cases_alone() {
        let strategy = PhaseStrategy::default();
        let ranked = vec![
            scored("slant", 1.5, 1.0, false),
            scored("grate", 1.0, 2.0, true),
        ];

        assert_eq!(strategy.rerank(GamePhase::Mid, ranked.clone(), 3), ranked);
        assert_eq!(strategy.rerank(GamePhase::End, ranked.clone(), 6), ranked);

        let probes_only = vec![scored("slant", 1.5, 1.0, false)];
        assert_eq!(
            strategy.rerank(GamePhase::End, probes_only.clone(), 2),
            probes_only
        );
    }
}
