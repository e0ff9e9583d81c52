//! Per-session game state

use std::sync::Arc;

use crate::core::{HistoryEntry, Pattern, Word, filter_candidates};
use crate::wordlists::Language;

/// Everything one session knows about its game
///
/// Candidates only shrink (until the session is reset), the guess pool never
/// changes, and history is append-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub language: Language,
    pub candidates: Vec<Word>,
    /// Shared between snapshots since it is never modified
    pub guess_pool: Arc<[Word]>,
    pub history: Vec<HistoryEntry>,
}

/// Candidate counts around one applied feedback row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Narrowing {
    pub before: usize,
    pub after: usize,
}

impl Narrowing {
    #[must_use]
    pub const fn eliminated(self) -> usize {
        self.before - self.after
    }
}

impl SessionState {
    /// Fresh game: every dictionary word is both a candidate and a guess
    #[must_use]
    pub fn new(language: Language, words: Vec<Word>) -> Self {
        Self {
            language,
            guess_pool: Arc::from(words.as_slice()),
            candidates: words,
            history: Vec::new(),
        }
    }

    /// Narrow the candidates by one observed row and record it
    pub fn apply(&mut self, guess: Word, pattern: Pattern) -> Narrowing {
        let before = self.candidates.len();
        self.candidates = filter_candidates(&self.candidates, &guess, pattern);
        self.history.push(HistoryEntry::new(guess, pattern));

        Narrowing {
            before,
            after: self.candidates.len(),
        }
    }
}
