//! Candidate diagnostics
//!
//! Describes how settled each letter position is among the remaining
//! candidates. Purely informational: nothing here feeds back into ranking.

use serde::Serialize;

use crate::core::Word;

/// Candidate lists longer than this are reported by count only
pub const LIST_LIMIT: usize = 20;

/// Positions below this entropy (bits) count as nearly determined
const DETERMINED_BITS: f64 = 1.0;

/// Positions above this entropy (bits) count as wide open
const UNCERTAIN_BITS: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CandidateAnalysis {
    /// No candidate is consistent with the feedback
    Exhausted,
    Solved {
        answer: Word,
    },
    Narrowed {
        count: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        candidates: Option<Vec<Word>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        most_likely: Option<LikelyPosition>,
        #[serde(skip_serializing_if = "Option::is_none")]
        most_uncertain: Option<UncertainPosition>,
    },
}

/// The position closest to being fixed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LikelyPosition {
    /// 1-based
    pub position: usize,
    pub letter: char,
    /// Share of candidates with `letter` here, rounded to 2 decimals
    pub probability: f64,
}

/// The position with the most spread
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UncertainPosition {
    /// 1-based
    pub position: usize,
    pub possible_letters: usize,
    /// Up to three most frequent letters, most frequent first
    pub top_letters: Vec<LetterCount>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LetterCount {
    pub letter: char,
    pub count: usize,
}

impl CandidateAnalysis {
    /// One-line human summary
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Exhausted => "No valid candidates remain".to_string(),
            Self::Solved { answer } => format!("Only one candidate left: '{answer}'"),
            Self::Narrowed { count, .. } => format!("{count} possible candidates remain"),
        }
    }
}

/// Letter counts at one position, in order of first appearance
struct PositionStats {
    index: usize,
    counts: Vec<(u8, usize)>,
    entropy: f64,
}

impl PositionStats {
    fn collect(candidates: &[Word], index: usize) -> Self {
        let mut counts: Vec<(u8, usize)> = Vec::new();
        for word in candidates {
            let letter = word.char_at(index);
            match counts.iter_mut().find(|(l, _)| *l == letter) {
                Some((_, count)) => *count += 1,
                None => counts.push((letter, 1)),
            }
        }

        let total = candidates.len() as f64;
        let entropy = counts
            .iter()
            .map(|&(_, count)| {
                let p = count as f64 / total;
                -p * p.log2()
            })
            .sum();

        Self {
            index,
            counts,
            entropy,
        }
    }

    /// Most frequent letter; the earliest seen wins a tie
    fn most_common(&self) -> Option<(u8, usize)> {
        self.counts
            .iter()
            .copied()
            .min_by_key(|&(_, count)| std::cmp::Reverse(count))
    }

    fn top_letters(&self, n: usize) -> Vec<LetterCount> {
        let mut sorted = self.counts.clone();
        sorted.sort_by_key(|&(_, count)| std::cmp::Reverse(count));
        sorted
            .into_iter()
            .take(n)
            .map(|(letter, count)| LetterCount {
                letter: char::from(letter),
                count,
            })
            .collect()
    }
}

/// Summarize the remaining candidates
///
/// # Examples
/// ```
/// use wordle_advisor::core::Word;
/// use wordle_advisor::solver::{CandidateAnalysis, analyze_candidates};
///
/// let answer = Word::new("crane").unwrap();
/// let analysis = analyze_candidates(std::slice::from_ref(&answer));
/// assert_eq!(analysis, CandidateAnalysis::Solved { answer });
/// ```
#[must_use]
pub fn analyze_candidates(candidates: &[Word]) -> CandidateAnalysis {
    match candidates {
        [] => return CandidateAnalysis::Exhausted,
        [only] => {
            return CandidateAnalysis::Solved {
                answer: only.clone(),
            };
        }
        _ => {}
    }

    let count = candidates.len();
    let positions: Vec<PositionStats> = (0..5)
        .map(|index| PositionStats::collect(candidates, index))
        .collect();

    // min_by keeps the first of equal minima, max_by the last of equal maxima
    let most_likely = positions
        .iter()
        .min_by(|a, b| a.entropy.total_cmp(&b.entropy))
        .filter(|stats| stats.entropy < DETERMINED_BITS)
        .and_then(|stats| {
            let (letter, freq) = stats.most_common()?;
            Some(LikelyPosition {
                position: stats.index + 1,
                letter: char::from(letter),
                probability: (freq as f64 / count as f64 * 100.0).round() / 100.0,
            })
        });

    let most_uncertain = positions
        .iter()
        .max_by(|a, b| a.entropy.total_cmp(&b.entropy))
        .filter(|stats| stats.entropy > UNCERTAIN_BITS)
        .map(|stats| UncertainPosition {
            position: stats.index + 1,
            possible_letters: stats.counts.len(),
            top_letters: stats.top_letters(3),
        });

    CandidateAnalysis::Narrowed {
        count,
        candidates: (count <= LIST_LIMIT).then(|| candidates.to_vec()),
        most_likely,
        most_uncertain,
    }
}
