//! Entropy scoring and guess search
//!
//! Implements Shannon entropy calculation for pattern distributions and the
//! pool scan that ranks guesses by it.

mod calculator;
mod ranking;

pub use calculator::{
    GuessMetrics, calculate_entropy, calculate_metrics, pattern_distribution, shannon_entropy,
};
pub use ranking::{
    ScoredGuess, SearchLimits, rank_guesses, sample_candidates, sort_by_information,
};
