//! Guess recommendation
//!
//! Entropy scoring, the phase-aware strategy that decides what to score, and
//! the engine that combines them for one game snapshot.

mod analysis;
mod engine;
pub mod entropy;
mod phase;

pub use analysis::{
    CandidateAnalysis, LetterCount, LikelyPosition, UncertainPosition, analyze_candidates,
};
pub use engine::{DebugInfo, Explanation, Solver, SuggestOptions, Suggestion};
pub use phase::{GamePhase, PhaseStrategy, diverse_words, diversity_score};
