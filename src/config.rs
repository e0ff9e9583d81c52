//! Advisor configuration
//!
//! Resolved once at startup from command-line flags and their environment
//! fallbacks.

use std::path::PathBuf;

use crate::wordlists::{DEFAULT_MAX_WORDS, Language, WordListDictionary};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisorConfig {
    /// Language for sessions created without an explicit one
    pub default_language: Language,
    /// Word-list file; the embedded lists are used when absent or missing
    pub wordlist: Option<PathBuf>,
    pub max_words: usize,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            default_language: Language::default(),
            wordlist: None,
            max_words: DEFAULT_MAX_WORDS,
        }
    }
}

impl AdvisorConfig {
    #[must_use]
    pub fn dictionary(&self) -> WordListDictionary {
        WordListDictionary::new(self.wordlist.clone(), self.max_words)
    }
}
