//! Advisor operations
//!
//! The operation set exposed to transports: reset a session, feed it
//! observed feedback, ask for suggestions, inspect it, explain a guess and
//! import rows from a board. Every operation validates its raw input here and
//! hands the engine clean values.

use log::{debug, info};
use serde::Serialize;

use crate::board::BoardObserver;
use crate::config::AdvisorConfig;
use crate::core::{HistoryEntry, Pattern, Word};
use crate::error::{AdvisorError, Result};
use crate::session::{InMemorySessionStore, SessionState, SessionStore, SharedSession, lock};
use crate::solver::{Explanation, PhaseStrategy, Solver, SuggestOptions, Suggestion};
use crate::wordlists::{Dictionary, Language, WordListDictionary};

/// Session id used when a caller does not name one
pub const DEFAULT_SESSION: &str = "default";

/// Number of dictionary words shown by [`Advisor::server_info`]
const HEAD_WORDS: usize = 5;

/// Candidate set a suggestion is computed against
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationInput {
    /// The session's own candidates
    UseSessionState,
    /// Caller-supplied candidates, used for this request only
    ExplicitState(Vec<Word>),
}

impl EvaluationInput {
    /// Validate optional caller-supplied candidates
    ///
    /// Entries are normalized like guesses; repeats are dropped.
    ///
    /// # Errors
    /// `InvalidGuess` for the first entry that is not a five-letter word.
    pub fn resolve<I, T>(candidates: Option<I>) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let Some(candidates) = candidates else {
            return Ok(Self::UseSessionState);
        };

        let mut words: Vec<Word> = Vec::new();
        for raw in candidates {
            let word = parse_guess(raw.as_ref())?;
            if !words.contains(&word) {
                words.push(word);
            }
        }
        Ok(Self::ExplicitState(words))
    }
}

/// Normalize a raw guess into a word
///
/// # Errors
/// `InvalidGuess` when the cleaned input is not exactly five letters.
pub fn parse_guess(raw: &str) -> Result<Word> {
    Word::normalize(raw).map_err(|reason| AdvisorError::InvalidGuess {
        input: raw.to_string(),
        reason,
    })
}

/// Human-readable one-liner for an operation result
pub trait Summary {
    fn summary(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResetOutcome {
    pub session: String,
    pub language: Language,
    pub candidate_count: usize,
    pub pool_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackOutcome {
    pub session: String,
    pub guess: Word,
    pub feedback: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub narrowed: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestOutcome {
    pub session: String,
    #[serde(flatten)]
    pub suggestion: Suggestion,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateOutcome {
    pub session: String,
    pub language: Language,
    pub candidate_count: usize,
    pub pool_count: usize,
    pub history: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplainOutcome {
    pub session: String,
    #[serde(flatten)]
    pub explanation: Explanation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardOutcome {
    pub session: String,
    pub source: String,
    pub applied: Vec<FeedbackOutcome>,
    pub candidate_count: usize,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
    pub pid: u32,
    pub default_language: Language,
    pub wordlist: String,
    pub wordlist_head: Vec<String>,
}

impl Summary for ResetOutcome {
    fn summary(&self) -> String {
        format!(
            "Session '{}' reset ({}): {} candidates, {} guessable words",
            self.session, self.language, self.candidate_count, self.pool_count
        )
    }
}

impl Summary for FeedbackOutcome {
    fn summary(&self) -> String {
        format!(
            "{} {}: {} → {} candidates",
            self.guess, self.feedback, self.candidates_before, self.candidates_after
        )
    }
}

impl Summary for SuggestOutcome {
    fn summary(&self) -> String {
        let best = &self.suggestion.best;
        format!(
            "Suggestion: {} | H≈{:.2} bits | ≈{:.1} left",
            best.word, best.entropy_bits, best.expected_remaining
        )
    }
}

impl Summary for StateOutcome {
    fn summary(&self) -> String {
        format!(
            "Session '{}' ({}): {} candidates after {} guesses",
            self.session,
            self.language,
            self.candidate_count,
            self.history.len()
        )
    }
}

impl Summary for ExplainOutcome {
    fn summary(&self) -> String {
        let explanation = &self.explanation;
        format!(
            "{}: H≈{:.3} bits | pruning≈{:.3}",
            explanation.guess, explanation.entropy_bits, explanation.estimated_pruning
        )
    }
}

impl Summary for BoardOutcome {
    fn summary(&self) -> String {
        self.message.clone()
    }
}

impl Summary for ServerInfo {
    fn summary(&self) -> String {
        format!("{} {} ({})", self.name, self.version, self.wordlist)
    }
}

/// Word-game advisor over a session store and a dictionary
pub struct Advisor<S = InMemorySessionStore, D = WordListDictionary> {
    store: S,
    dictionary: D,
    strategy: PhaseStrategy,
    default_language: Language,
}

impl Advisor {
    /// In-memory sessions over the configured dictionary
    #[must_use]
    pub fn from_config(config: &AdvisorConfig) -> Self {
        Self::new(
            InMemorySessionStore::new(),
            config.dictionary(),
            config.default_language,
        )
    }
}

impl<S: SessionStore, D: Dictionary> Advisor<S, D> {
    #[must_use]
    pub fn new(store: S, dictionary: D, default_language: Language) -> Self {
        Self {
            store,
            dictionary,
            strategy: PhaseStrategy::default(),
            default_language,
        }
    }

    #[must_use]
    pub const fn default_language(&self) -> Language {
        self.default_language
    }

    fn fresh_state(&self, language: Language) -> Result<SessionState> {
        Ok(SessionState::new(language, self.dictionary.load_words(language)?))
    }

    /// Existing session or a fresh one in the default language
    fn session(&self, id: &str) -> Result<SharedSession> {
        let language = self.default_language;
        self.store.get_or_create(id, || self.fresh_state(language))
    }

    /// Start the session over with the full dictionary
    ///
    /// # Errors
    /// `WordList` if the dictionary cannot be read.
    pub fn reset(&self, session: &str, language: Option<Language>) -> Result<ResetOutcome> {
        let language = language.unwrap_or(self.default_language);
        let state = self.fresh_state(language)?;
        let candidate_count = state.candidates.len();
        let pool_count = state.guess_pool.len();

        self.store.replace(session, state);
        info!("session {session} reset: {candidate_count} words ({language})");

        Ok(ResetOutcome {
            session: session.to_string(),
            language,
            candidate_count,
            pool_count,
        })
    }

    /// Narrow the session's candidates by one observed row
    ///
    /// # Errors
    /// `InvalidGuess` or `InvalidFeedback` for malformed input; the session is
    /// left untouched in that case.
    pub fn apply_feedback(
        &self,
        session: &str,
        guess: &str,
        feedback: &str,
    ) -> Result<FeedbackOutcome> {
        let guess = parse_guess(guess)?;
        let pattern: Pattern = feedback.parse()?;

        let shared = self.session(session)?;
        let (narrowing, remaining) = {
            let mut state = lock(&shared);
            let narrowing = state.apply(guess.clone(), pattern);
            let remaining = (narrowing.after <= 10).then(|| {
                state
                    .candidates
                    .iter()
                    .map(|w| w.text().to_string())
                    .collect::<Vec<_>>()
            });
            (narrowing, remaining)
        };

        debug!(
            "{session}: {guess} {pattern} narrowed {} → {}",
            narrowing.before, narrowing.after
        );
        if let Some(remaining) = remaining {
            debug!("{session}: remaining {remaining:?}");
        }

        Ok(FeedbackOutcome {
            session: session.to_string(),
            guess,
            feedback: pattern,
            candidates_before: narrowing.before,
            candidates_after: narrowing.after,
            narrowed: narrowing.eliminated(),
        })
    }

    /// Recommend the next guess
    ///
    /// Scoring runs on a snapshot taken under the session lock, so other
    /// requests on the same session are not blocked while it runs.
    ///
    /// # Errors
    /// `NoCandidates` when there is nothing left to guess, `NoGuessesEvaluated`
    /// when the pool produced no ranking.
    pub fn suggest(
        &self,
        session: &str,
        input: EvaluationInput,
        options: SuggestOptions,
    ) -> Result<SuggestOutcome> {
        let shared = self.session(session)?;
        let (candidates, guess_pool, history) = {
            let state = lock(&shared);
            let candidates = match input {
                EvaluationInput::UseSessionState => state.candidates.clone(),
                EvaluationInput::ExplicitState(words) => words,
            };
            (candidates, state.guess_pool.clone(), state.history.clone())
        };

        let solver = Solver::new(self.strategy.clone(), &guess_pool, &candidates, &history);
        let suggestion = solver.suggest(options)?;

        Ok(SuggestOutcome {
            session: session.to_string(),
            suggestion,
        })
    }

    /// Read-only view of a session
    ///
    /// # Errors
    /// `WordList` if a new session has to be created and the dictionary
    /// cannot be read.
    pub fn state(&self, session: &str) -> Result<StateOutcome> {
        let shared = self.session(session)?;
        let state = lock(&shared);

        Ok(StateOutcome {
            session: session.to_string(),
            language: state.language,
            candidate_count: state.candidates.len(),
            pool_count: state.guess_pool.len(),
            history: state.history.clone(),
        })
    }

    /// How a guess would split the session's candidates
    ///
    /// # Errors
    /// `InvalidGuess` for a malformed guess.
    pub fn explain(&self, session: &str, guess: &str) -> Result<ExplainOutcome> {
        let guess = parse_guess(guess)?;
        let shared = self.session(session)?;
        let candidates = lock(&shared).candidates.clone();

        let explanation = Solver::new(self.strategy.clone(), &[], &candidates, &[]).explain(&guess);
        Ok(ExplainOutcome {
            session: session.to_string(),
            explanation,
        })
    }

    /// Apply every row an observer reports, in order
    ///
    /// # Errors
    /// Fails on the first invalid row; rows before it stay applied.
    pub fn observe_board(
        &self,
        session: &str,
        observer: &dyn BoardObserver,
    ) -> Result<BoardOutcome> {
        let rows = observer.observe()?;
        let applied = rows
            .iter()
            .map(|row| self.apply_feedback(session, &row.guess, &row.feedback))
            .collect::<Result<Vec<_>>>()?;

        let shared = self.session(session)?;
        let candidate_count = lock(&shared).candidates.len();
        let message = if applied.is_empty() {
            format!("No rows observed from {}", observer.describe())
        } else {
            format!(
                "Applied {} rows from {}; {candidate_count} candidates remain",
                applied.len(),
                observer.describe()
            )
        };

        Ok(BoardOutcome {
            session: session.to_string(),
            source: observer.describe(),
            applied,
            candidate_count,
            message,
        })
    }

    /// Name, version and dictionary details
    #[must_use]
    pub fn server_info(&self) -> ServerInfo {
        let wordlist_head = match self.dictionary.load_words(self.default_language) {
            Ok(words) => words
                .iter()
                .take(HEAD_WORDS)
                .map(|w| w.text().to_string())
                .collect(),
            Err(err) => vec![format!("<error reading word list: {err}>")],
        };

        ServerInfo {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            pid: std::process::id(),
            default_language: self.default_language,
            wordlist: self.dictionary.describe(),
            wordlist_head,
        }
    }
}
