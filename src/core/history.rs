//! Guess history records

use serde::Serialize;

use super::{Pattern, Word};

/// One submitted guess and the feedback it received
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub guess: Word,
    #[serde(rename = "feedback")]
    pub pattern: Pattern,
}

impl HistoryEntry {
    #[must_use]
    pub const fn new(guess: Word, pattern: Pattern) -> Self {
        Self { guess, pattern }
    }
}
