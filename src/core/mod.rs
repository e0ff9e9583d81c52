//! Core domain types
//!
//! Words, feedback patterns and the filtering they drive. Everything here is a
//! pure function of its arguments.

mod filter;
mod history;
mod pattern;
mod word;

pub use filter::filter_candidates;
pub use history::HistoryEntry;
pub use pattern::{Feedback, Pattern};
pub use word::{Word, WordError};
