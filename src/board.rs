//! Board observation
//!
//! A board observer reports rows (guess plus feedback) that were already
//! played somewhere else, so they can be fed into a session. Reading a live
//! page is out of reach for this crate; [`DetachedBoard`] stands in for that
//! and never reports anything.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One played row as shown on a board, not yet validated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservedRow {
    pub guess: String,
    pub feedback: String,
}

impl ObservedRow {
    #[must_use]
    pub fn new(guess: impl Into<String>, feedback: impl Into<String>) -> Self {
        Self {
            guess: guess.into(),
            feedback: feedback.into(),
        }
    }
}

/// Source of already-played rows
pub trait BoardObserver {
    /// Rows in play order
    ///
    /// # Errors
    /// Implementations report failures to reach their source.
    fn observe(&self) -> Result<Vec<ObservedRow>>;

    fn describe(&self) -> String;
}

/// Rows supplied up front, e.g. from a request payload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticBoard {
    rows: Vec<ObservedRow>,
}

impl StaticBoard {
    #[must_use]
    pub const fn new(rows: Vec<ObservedRow>) -> Self {
        Self { rows }
    }
}

impl BoardObserver for StaticBoard {
    fn observe(&self) -> Result<Vec<ObservedRow>> {
        Ok(self.rows.clone())
    }

    fn describe(&self) -> String {
        format!("{} supplied rows", self.rows.len())
    }
}

/// Remote board that is never contacted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetachedBoard {
    url: String,
}

impl DetachedBoard {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl BoardObserver for DetachedBoard {
    fn observe(&self) -> Result<Vec<ObservedRow>> {
        Ok(Vec::new())
    }

    fn describe(&self) -> String {
        format!("{} (live observation unavailable)", self.url)
    }
}
