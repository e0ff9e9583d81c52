//! Main advisor engine
//!
//! Ties the phase strategy, guess search and candidate analysis together for
//! one snapshot of a game. The engine never mutates anything: callers hand it
//! borrowed state and get owned results back.

use std::collections::BTreeMap;

use log::debug;
use serde::Serialize;

use super::analysis::{CandidateAnalysis, analyze_candidates};
use super::entropy::{
    ScoredGuess, SearchLimits, calculate_metrics, pattern_distribution, rank_guesses,
};
use super::phase::{GamePhase, PhaseStrategy};
use crate::core::{HistoryEntry, Pattern, Word};
use crate::error::{AdvisorError, Result};

/// Upper bound on guesses scored before re-ranking
const MAX_RANKED: usize = 20;

/// Knobs for a single suggestion request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestOptions {
    /// Number of ranked guesses to return (at least one is always returned)
    pub top_k: usize,
    /// Allow candidate subsampling and pool capping on large searches
    pub approximate_when_large: bool,
    /// Attach a [`DebugInfo`] block
    pub debug: bool,
}

impl Default for SuggestOptions {
    fn default() -> Self {
        Self {
            top_k: 5,
            approximate_when_large: true,
            debug: false,
        }
    }
}

/// Ranked recommendation for the next guess
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub phase: GamePhase,
    pub attempts: usize,
    pub candidate_count: usize,
    pub best: ScoredGuess,
    /// Full ranking, `best` included
    pub alternatives: Vec<ScoredGuess>,
    pub explanation: String,
    pub analysis: CandidateAnalysis,
    pub history: Vec<HistoryEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<DebugInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DebugInfo {
    /// Up to ten candidates; long lists show five from each end around "..."
    pub candidate_sample: Vec<String>,
    pub guess_pool_size: usize,
    pub history_count: usize,
    pub evaluation_pool_size: usize,
}

/// How a specific guess would split the current candidates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Explanation {
    pub guess: Word,
    pub entropy_bits: f64,
    pub expected_remaining: f64,
    pub max_partition: usize,
    /// `1 - max_partition / candidates`: share eliminated in the worst case
    pub estimated_pruning: f64,
    /// Probability of each feedback pattern
    pub pattern_distribution: BTreeMap<Pattern, f64>,
}

/// Advisor engine over one game snapshot
///
/// Coordinates the phase strategy and the entropy search for a guess pool,
/// the candidates still consistent with the feedback, and the history that
/// produced them.
pub struct Solver<'a> {
    strategy: PhaseStrategy,
    guess_pool: &'a [Word],
    candidates: &'a [Word],
    history: &'a [HistoryEntry],
}

impl<'a> Solver<'a> {
    /// Create a solver for the given snapshot
    ///
    /// # Parameters
    /// - `strategy`: Phase thresholds to apply
    /// - `guess_pool`: Words eligible to be suggested
    /// - `candidates`: Words still consistent with every entry of `history`
    /// - `history`: Guesses recorded so far, oldest first
    #[must_use]
    pub const fn new(
        strategy: PhaseStrategy,
        guess_pool: &'a [Word],
        candidates: &'a [Word],
        history: &'a [HistoryEntry],
    ) -> Self {
        Self {
            strategy,
            guess_pool,
            candidates,
            history,
        }
    }

    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        self.strategy.phase(self.attempts())
    }

    /// Recommend the next guess
    ///
    /// # Errors
    /// - `NoCandidates` when the candidate set is empty
    /// - `NoGuessesEvaluated` when nothing could be scored
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::Word;
    /// use wordle_advisor::solver::{PhaseStrategy, Solver, SuggestOptions};
    ///
    /// let words: Vec<Word> = ["crate", "crane", "grade", "slate"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    /// let solver = Solver::new(PhaseStrategy::default(), &words, &words, &[]);
    ///
    /// let suggestion = solver.suggest(SuggestOptions::default()).unwrap();
    /// assert_eq!(suggestion.candidate_count, 4);
    /// assert!(suggestion.best.entropy_bits > 0.0);
    /// ```
    pub fn suggest(&self, options: SuggestOptions) -> Result<Suggestion> {
        let count = self.candidates.len();
        if count == 0 {
            return Err(AdvisorError::NoCandidates);
        }

        let attempts = self.attempts();
        let phase = self.phase();
        let top_k = options.top_k.max(1);
        let limits = if options.approximate_when_large {
            SearchLimits::for_sizes(count, self.guess_pool.len())
        } else {
            SearchLimits::EXACT
        };

        debug!("phase {phase}, attempts {attempts}, candidates {count}");

        let pool = self
            .strategy
            .evaluation_pool(phase, self.guess_pool, self.candidates, limits);
        debug!(
            "scoring {} of {} pool words ({limits:?})",
            pool.len(),
            self.guess_pool.len()
        );

        let k = top_k.saturating_mul(2).min(MAX_RANKED);
        let ranked = rank_guesses(&pool, self.candidates, k, limits);
        let mut ranked = self.strategy.rerank(phase, ranked, count);
        ranked.truncate(top_k);

        let best = ranked.first().cloned().ok_or(AdvisorError::NoGuessesEvaluated)?;
        let debug = options.debug.then(|| DebugInfo {
            candidate_sample: candidate_sample(self.candidates),
            guess_pool_size: self.guess_pool.len(),
            history_count: attempts,
            evaluation_pool_size: pool.len(),
        });

        Ok(Suggestion {
            phase,
            attempts,
            candidate_count: count,
            explanation: explain_choice(phase, attempts, count, &best),
            best,
            alternatives: ranked,
            analysis: analyze_candidates(self.candidates),
            history: self.history.to_vec(),
            debug,
        })
    }

    /// Score an arbitrary guess against the current candidates
    ///
    /// An empty candidate set yields an all-zero explanation.
    #[must_use]
    pub fn explain(&self, guess: &Word) -> Explanation {
        let refs: Vec<&Word> = self.candidates.iter().collect();
        let metrics = calculate_metrics(guess, &refs);
        let total = refs.len();

        let pattern_distribution = pattern_distribution(guess, &refs)
            .into_iter()
            .map(|(pattern, n)| (pattern, n as f64 / total as f64))
            .collect();
        let estimated_pruning = if total == 0 {
            0.0
        } else {
            1.0 - metrics.max_partition as f64 / total as f64
        };

        Explanation {
            guess: guess.clone(),
            entropy_bits: metrics.entropy,
            expected_remaining: metrics.expected_remaining,
            max_partition: metrics.max_partition,
            estimated_pruning,
            pattern_distribution,
        }
    }
}

fn candidate_sample(candidates: &[Word]) -> Vec<String> {
    let texts = candidates.iter().map(|w| w.text().to_string());
    if candidates.len() <= 10 {
        return texts.collect();
    }

    let mut sample: Vec<String> = texts.clone().take(5).collect();
    sample.push("...".to_string());
    sample.extend(texts.skip(candidates.len() - 5));
    sample
}

fn explain_choice(phase: GamePhase, attempts: usize, count: usize, best: &ScoredGuess) -> String {
    let stage = match phase {
        GamePhase::Early => format!(
            "Early game ({attempts} attempts): favouring diverse letters to maximise information"
        ),
        GamePhase::Mid => format!(
            "Mid game ({attempts} attempts): balancing entropy against the chance of a hit"
        ),
        GamePhase::End => format!(
            "End game ({attempts} attempts): favouring real candidates over exploration"
        ),
    };

    let note = if count <= 2 {
        " Very close! Pick among the remaining candidates.".to_string()
    } else if count <= 10 {
        format!(" With {count} candidates left, prefer words that split them.")
    } else if attempts == 0 {
        " Opening word chosen to reveal common letters in key positions.".to_string()
    } else {
        String::new()
    };

    let (word, bits, left) = (&best.word, best.entropy_bits, best.expected_remaining);
    format!(
        "{stage}. '{word}' maximises expected information (≈{bits:.2} bits), \
         leaving ≈{left:.1} candidates on average.{note}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter_candidates;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn setup() -> Vec<Word> {
        words(&["crane", "slate", "irate", "crate", "grate", "trace", "grade"])
    }

    fn entry(guess: &str, answer: &str) -> HistoryEntry {
        let guess = Word::new(guess).unwrap();
        let pattern = Pattern::calculate(&guess, &Word::new(answer).unwrap());
        HistoryEntry::new(guess, pattern)
    }

    #[test]
    fn empty_candidates_is_an_error() {
        let pool = setup();
        let solver = Solver::new(PhaseStrategy::default(), &pool, &[], &[]);

        assert!(matches!(
            solver.suggest(SuggestOptions::default()),
            Err(AdvisorError::NoCandidates)
        ));
    }

    #[test]
    fn empty_pool_is_an_error_with_several_candidates() {
        let candidates = setup();
        let solver = Solver::new(PhaseStrategy::default(), &[], &candidates, &[]);

        assert!(matches!(
            solver.suggest(SuggestOptions::default()),
            Err(AdvisorError::NoGuessesEvaluated)
        ));
    }

    #[test]
    fn fresh_game_suggests_from_pool() {
        let pool = setup();
        let solver = Solver::new(PhaseStrategy::default(), &pool, &pool, &[]);

        let suggestion = solver.suggest(SuggestOptions::default()).unwrap();
        assert_eq!(suggestion.phase, GamePhase::Early);
        assert_eq!(suggestion.attempts, 0);
        assert!(pool.contains(&suggestion.best.word));
        assert!(suggestion.alternatives.len() <= 5);
        assert_eq!(suggestion.alternatives[0], suggestion.best);
        assert!(suggestion.explanation.starts_with("Early game (0 attempts)"));
        assert!(suggestion.explanation.contains("split them"));
    }

    #[test]
    fn single_candidate_is_suggested_in_any_phase() {
        let pool = setup();
        let answer = words(&["grade"]);
        let history: Vec<HistoryEntry> = (0..5).map(|_| entry("slate", "grade")).collect();

        for attempts in [0, 2, 5] {
            let solver = Solver::new(
                PhaseStrategy::default(),
                &pool,
                &answer,
                &history[..attempts],
            );
            let suggestion = solver.suggest(SuggestOptions::default()).unwrap();

            assert_eq!(suggestion.best.word.text(), "grade");
            assert!(suggestion.best.is_candidate);
            assert!(matches!(suggestion.analysis, CandidateAnalysis::Solved { .. }));
            assert!(suggestion.explanation.contains("Very close"));
        }
    }

    #[test]
    fn end_game_prefers_candidates() {
        let pool = setup();
        let history: Vec<HistoryEntry> = ["slate", "crane", "trace", "irate"]
            .iter()
            .map(|g| entry(g, "grate"))
            .collect();
        let candidates = words(&["grate", "crate"]);
        let solver = Solver::new(PhaseStrategy::default(), &pool, &candidates, &history);

        let suggestion = solver.suggest(SuggestOptions::default()).unwrap();
        assert_eq!(suggestion.phase, GamePhase::End);
        assert!(suggestion.best.is_candidate);
        assert_eq!(suggestion.history.len(), 4);
    }

    #[test]
    fn top_k_bounds_the_alternatives() {
        let pool = setup();
        let solver = Solver::new(PhaseStrategy::default(), &pool, &pool, &[]);

        let options = SuggestOptions {
            top_k: 2,
            ..SuggestOptions::default()
        };
        assert_eq!(solver.suggest(options).unwrap().alternatives.len(), 2);

        let options = SuggestOptions {
            top_k: 0,
            ..SuggestOptions::default()
        };
        assert_eq!(solver.suggest(options).unwrap().alternatives.len(), 1);
    }

    #[test]
    fn suggest_is_idempotent() {
        let pool = setup();
        let solver = Solver::new(PhaseStrategy::default(), &pool, &pool, &[]);

        let first = solver.suggest(SuggestOptions::default()).unwrap();
        let second = solver.suggest(SuggestOptions::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn debug_block_only_when_requested() {
        let pool = setup();
        let solver = Solver::new(PhaseStrategy::default(), &pool, &pool, &[]);

        assert!(solver.suggest(SuggestOptions::default()).unwrap().debug.is_none());

        let options = SuggestOptions {
            debug: true,
            ..SuggestOptions::default()
        };
        let info = solver.suggest(options).unwrap().debug.unwrap();
        assert_eq!(info.guess_pool_size, pool.len());
        assert_eq!(info.candidate_sample.len(), pool.len());
        assert_eq!(info.history_count, 0);
        assert!(info.evaluation_pool_size > 0);
    }

    #[test]
    fn long_candidate_sample_is_elided() {
        let candidates: Vec<Word> = b"abcdefghijkl"
            .iter()
            .map(|&l| Word::new(format!("{}ight", char::from(l))).unwrap())
            .collect();

        let sample = candidate_sample(&candidates);
        assert_eq!(sample.len(), 11);
        assert_eq!(sample[0], "aight");
        assert_eq!(sample[5], "...");
        assert_eq!(sample[10], "light");
    }

    #[test]
    fn explain_reports_distribution() {
        let candidates = words(&["crate", "crane", "grade"]);
        let solver = Solver::new(PhaseStrategy::default(), &candidates, &candidates, &[]);

        let explanation = solver.explain(&Word::new("crate").unwrap());
        assert_eq!(explanation.pattern_distribution.len(), 3);
        assert_eq!(explanation.max_partition, 1);
        assert!((explanation.estimated_pruning - 2.0 / 3.0).abs() < 1e-9);
        let total: f64 = explanation.pattern_distribution.values().sum();
        assert!((total - 1.0).abs() < 1e-9);

        let json = serde_json::to_value(&explanation).unwrap();
        assert!(json["pattern_distribution"].get("GGGGG").is_some());
    }

    #[test]
    fn explain_with_no_candidates_is_all_zero() {
        let pool = setup();
        let solver = Solver::new(PhaseStrategy::default(), &pool, &[], &[]);

        let explanation = solver.explain(&Word::new("crane").unwrap());
        assert!(explanation.pattern_distribution.is_empty());
        assert!(explanation.estimated_pruning.abs() < f64::EPSILON);
        assert_eq!(explanation.max_partition, 0);
    }

    #[test]
    fn following_suggestions_narrows_to_answer() {
        let pool = setup();
        let answer = Word::new("grade").unwrap();
        let mut candidates = pool.clone();
        let mut history = Vec::new();

        for _ in 0..6 {
            if candidates.len() == 1 {
                break;
            }
            let solver = Solver::new(PhaseStrategy::default(), &pool, &candidates, &history);
            let guess = solver.suggest(SuggestOptions::default()).unwrap().best.word;
            let pattern = Pattern::calculate(&guess, &answer);
            candidates = filter_candidates(&candidates, &guess, pattern);
            history.push(HistoryEntry::new(guess, pattern));
        }

        assert_eq!(candidates, vec![answer]);
    }

    /// Distinct words "aaaaa", "baaaa", ... counting in base 26
    fn synthetic_words(count: usize) -> Vec<Word> {
        (0..count)
            .map(|index| {
                let mut rest = index;
                let text: String = (0..5)
                    .map(|_| {
                        let letter = char::from(b'a' + (rest % 26) as u8);
                        rest /= 26;
                        letter
                    })
                    .collect();
                Word::new(text).unwrap()
            })
            .collect()
    }

    fn debug_options(approximate_when_large: bool) -> SuggestOptions {
        SuggestOptions {
            approximate_when_large,
            debug: true,
            ..SuggestOptions::default()
        }
    }

    #[test]
    fn large_early_search_caps_the_pool() {
        let words = synthetic_words(2500);
        let solver = Solver::new(PhaseStrategy::default(), &words, &words, &[]);

        let approximate = solver.suggest(debug_options(true)).unwrap();
        let debug = approximate.debug.unwrap();
        // clamp(2500 / 2, 1000, 3000)
        assert_eq!(debug.evaluation_pool_size, 1250);
        assert_eq!(debug.guess_pool_size, 2500);

        let exact = solver.suggest(debug_options(false)).unwrap();
        assert_eq!(exact.debug.unwrap().evaluation_pool_size, 2500);
    }

    #[test]
    fn large_mid_search_ranks_only_the_pool_prefix() {
        let words = synthetic_words(2500);
        let history = vec![entry("aaaaa", "baaaa"), entry("caaaa", "baaaa")];
        let solver = Solver::new(PhaseStrategy::default(), &words, &words, &history);

        let suggestion = solver.suggest(debug_options(true)).unwrap();
        assert_eq!(suggestion.phase, GamePhase::Mid);
        assert_eq!(suggestion.debug.unwrap().evaluation_pool_size, 2500);

        let prefix = &words[..1250];
        assert!(
            suggestion
                .alternatives
                .iter()
                .all(|scored| prefix.contains(&scored.word))
        );
    }
}
