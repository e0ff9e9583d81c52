//! Benchmark command
//!
//! Plays the advisor against a sample of dictionary words and collects guess
//! statistics.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use super::solve::{SolveConfig, solve_word};
use crate::core::Word;
use crate::error::{AdvisorError, Result};
use crate::service::Advisor;
use crate::session::SessionStore;
use crate::wordlists::{Dictionary, Language};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: Vec<Word>,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count → number of solved words
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick `count` distinct targets at random
///
/// A `seed` makes the choice reproducible.
#[must_use]
pub fn choose_targets(words: &[Word], count: usize, seed: Option<u64>) -> Vec<Word> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    words.choose_multiple(&mut rng, count).cloned().collect()
}

/// Solve every target in turn and summarize the guess counts
///
/// Unsolved targets (six guesses without a hit) are listed in `failed` and
/// left out of the averages.
///
/// # Errors
///
/// Returns an error if a target is not a word of the advisor's dictionary or
/// the dictionary cannot be loaded.
pub fn run_benchmark<S: SessionStore, D: Dictionary>(
    advisor: &Advisor<S, D>,
    targets: &[Word],
    language: Option<Language>,
    show_progress: bool,
) -> Result<BenchmarkResult> {
    let progress = if show_progress {
        progress_bar(targets.len())
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut failed = Vec::new();
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();

    for target in targets {
        progress.set_message(target.text().to_string());
        let config = SolveConfig {
            language,
            session: "benchmark".to_string(),
            ..SolveConfig::new(target.text())
        };

        let result = solve_word(config, advisor)?;
        if result.success {
            *distribution.entry(result.guesses.len()).or_insert(0) += 1;
        } else {
            failed.push(target.clone());
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    let duration = start.elapsed();
    let solved: usize = distribution.values().sum();
    let total_guesses: usize = distribution.iter().map(|(guesses, n)| guesses * n).sum();

    Ok(BenchmarkResult {
        total_words: targets.len(),
        solved,
        failed,
        total_guesses,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: distribution.keys().next().copied().unwrap_or(0),
        max_guesses: distribution.keys().next_back().copied().unwrap_or(0),
        distribution,
        duration,
        words_per_second: targets.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

/// Load the benchmark pool for a language
///
/// # Errors
/// Propagates dictionary failures.
pub fn benchmark_pool<D: Dictionary>(dictionary: &D, language: Language) -> Result<Vec<Word>> {
    let words = dictionary.load_words(language)?;
    if words.is_empty() {
        return Err(AdvisorError::NoCandidates);
    }
    Ok(words)
}

fn progress_bar(len: usize) -> ProgressBar {
    let progress = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        progress.set_style(style.progress_chars("█▓▒░"));
    }
    progress
}
