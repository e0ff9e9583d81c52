//! Error taxonomy for the advisor
//!
//! Every failure is a local validation or lookup problem reported back to the
//! caller; nothing here is retried.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::WordError;

/// Errors surfaced by advisor operations
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// The guess is not exactly 5 letters a-z after normalization
    #[error("invalid guess {input:?}: {reason}")]
    InvalidGuess { input: String, reason: WordError },

    /// Feedback did not normalize to 5 symbols from either encoding
    #[error("invalid feedback {0:?}: use G/Y/K or 🟩/🟨/⬛ (5 symbols)")]
    InvalidFeedback(String),

    /// A suggestion was requested but no candidate answers remain
    #[error("no candidates remain; reset the session or check earlier feedback")]
    NoCandidates,

    /// The guess pool was empty or scoring produced no result
    #[error("no guesses could be evaluated")]
    NoGuessesEvaluated,

    #[error("unknown language {0:?}: expected \"es\" or \"en\"")]
    UnknownLanguage(String),

    #[error("could not read word list {}", path.display())]
    WordList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AdvisorError {
    /// Whether the error stems from caller input rather than the environment
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        !matches!(self, Self::WordList { .. })
    }
}

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, AdvisorError>;
