//! Candidate filtering
//!
//! Narrows a candidate list to the words consistent with one observed
//! (guess, pattern) pair.

use super::{Pattern, Word};

/// Keep the candidates that would have produced `pattern` for `guess`
///
/// Relative order is preserved. The true answer always survives, since it
/// reproduces the observed pattern against itself.
///
/// # Examples
/// ```
/// use wordle_advisor::core::{Pattern, Word, filter_candidates};
///
/// let candidates: Vec<Word> = ["crate", "crane", "grade"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let guess = Word::new("crate").unwrap();
/// let observed = Pattern::calculate(&guess, &candidates[1]);
///
/// let remaining = filter_candidates(&candidates, &guess, observed);
/// assert_eq!(remaining, vec![Word::new("crane").unwrap()]);
/// ```
#[must_use]
pub fn filter_candidates(candidates: &[Word], guess: &Word, pattern: Pattern) -> Vec<Word> {
    candidates
        .iter()
        .filter(|&candidate| Pattern::calculate(guess, candidate) == pattern)
        .cloned()
        .collect()
}
