//! Word solving command
//!
//! Plays a known target through an advisor session, always taking the top
//! suggestion, and records every step.

use crate::core::{Pattern, Word};
use crate::error::Result;
use crate::service::{Advisor, EvaluationInput, parse_guess};
use crate::session::SessionStore;
use crate::solver::{GamePhase, SuggestOptions};
use crate::wordlists::{Dictionary, Language};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub language: Option<Language>,
    pub max_guesses: usize,
    /// Session used for the play-through; it is reset first
    pub session: String,
}

impl SolveConfig {
    #[must_use]
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            language: None,
            max_guesses: 6,
            session: "solve".to_string(),
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: Word,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: Word,
    pub pattern: Pattern,
    pub phase: GamePhase,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy: f64,
    pub expected_remaining: f64,
}

/// Solve a specific word by following the advisor's suggestions
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (not 5 letters after normalization)
/// - The candidates run out, which happens when the target is not in the
///   dictionary
/// - The dictionary cannot be loaded
pub fn solve_word<S: SessionStore, D: Dictionary>(
    config: SolveConfig,
    advisor: &Advisor<S, D>,
) -> Result<SolveResult> {
    let target = parse_guess(&config.target)?;
    let session = config.session.as_str();
    advisor.reset(session, config.language)?;

    let mut guesses: Vec<GuessStep> = Vec::new();

    for _ in 0..config.max_guesses {
        let suggestion = advisor
            .suggest(session, EvaluationInput::UseSessionState, SuggestOptions::default())?
            .suggestion;
        let best = suggestion.best;

        let pattern = Pattern::calculate(&best.word, &target);
        let applied = advisor.apply_feedback(session, best.word.text(), &pattern.to_string())?;

        guesses.push(GuessStep {
            word: best.word,
            pattern,
            phase: suggestion.phase,
            candidates_before: applied.candidates_before,
            candidates_after: applied.candidates_after,
            entropy: best.entropy_bits,
            expected_remaining: best.expected_remaining,
        });

        if pattern.is_perfect() {
            return Ok(SolveResult {
                success: true,
                guesses,
                target,
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdvisorError;
    use crate::session::InMemorySessionStore;
    use crate::wordlists::WordListDictionary;

    fn advisor() -> Advisor {
        Advisor::new(
            InMemorySessionStore::new(),
            WordListDictionary::new(None, 400),
            Language::En,
        )
    }

    #[test]
    fn solve_word_succeeds() {
        let advisor = advisor();
        let config = SolveConfig::new("crate");

        let result = solve_word(config, &advisor).unwrap();

        assert!(result.success);
        assert!(result.guesses.len() <= 6);
        assert_eq!(result.guesses.last().unwrap().word.text(), "crate");
    }

    #[test]
    fn solve_records_narrowing() {
        let advisor = advisor();
        let result = solve_word(SolveConfig::new("slate"), &advisor).unwrap();

        assert!(!result.guesses.is_empty());
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.entropy >= 0.0);
        }
        assert_eq!(result.guesses[0].phase, GamePhase::Early);
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let advisor = advisor();

        assert!(matches!(
            solve_word(SolveConfig::new("toolong"), &advisor),
            Err(AdvisorError::InvalidGuess { .. })
        ));
    }

    #[test]
    fn target_outside_dictionary_is_never_solved() {
        let advisor = advisor();

        match solve_word(SolveConfig::new("zzzzz"), &advisor) {
            Err(AdvisorError::NoCandidates) => {}
            Ok(result) => assert!(!result.success),
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn solve_with_max_guesses_limit() {
        let advisor = advisor();
        let mut config = SolveConfig::new("crate");
        config.max_guesses = 1;

        let result = solve_word(config, &advisor).unwrap();
        assert_eq!(result.guesses.len(), 1);
    }
}
