//! Word analysis command
//!
//! Reports how a single guess would split the candidates of a fresh game.

use crate::error::Result;
use crate::service::Advisor;
use crate::session::SessionStore;
use crate::solver::Explanation;
use crate::wordlists::{Dictionary, Language};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub explanation: Explanation,
    /// 2^entropy: how many ways the candidates are effectively split
    pub expected_reduction: f64,
    pub total_candidates: usize,
}

/// Analyze a guess against every word of the dictionary
///
/// Runs in its own session, which is reset first.
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (not 5 letters after normalization)
/// - The dictionary cannot be loaded
pub fn analyze_word<S: SessionStore, D: Dictionary>(
    advisor: &Advisor<S, D>,
    word: &str,
    language: Option<Language>,
) -> Result<AnalysisResult> {
    const SESSION: &str = "analyze";

    let reset = advisor.reset(SESSION, language)?;
    let explanation = advisor.explain(SESSION, word)?.explanation;

    Ok(AnalysisResult {
        expected_reduction: explanation.entropy_bits.exp2(),
        explanation,
        total_candidates: reset.candidate_count,
    })
}
