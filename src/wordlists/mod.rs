//! Dictionaries for the advisor
//!
//! Every session draws its candidates and guess pool from a [`Dictionary`].
//! The shipped implementation reads a word-list file and falls back to the
//! per-language lists compiled into the binary.

mod embedded;
pub mod loader;

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;

use log::{debug, warn};
use serde::Serialize;

use crate::core::Word;
use crate::error::{AdvisorError, Result};

pub use embedded::{WORDS_EN, WORDS_ES};
pub use loader::DEFAULT_MAX_WORDS;

/// Dictionary language tag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
        }
    }

    /// Word list compiled into the binary for this language
    #[must_use]
    pub const fn embedded_words(self) -> &'static [&'static str] {
        match self {
            Self::Es => WORDS_ES,
            Self::En => WORDS_EN,
        }
    }
}

impl FromStr for Language {
    type Err = AdvisorError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "es" => Ok(Self::Es),
            "en" => Ok(Self::En),
            _ => Err(AdvisorError::UnknownLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Source of the words a session plays with
pub trait Dictionary {
    /// Ordered, deduplicated five-letter words for `language`
    ///
    /// # Errors
    /// Returns `AdvisorError::WordList` when a configured source exists but
    /// cannot be read.
    fn load_words(&self, language: Language) -> Result<Vec<Word>>;

    /// Short description of where words come from
    fn describe(&self) -> String;
}

/// Word-list file with an embedded fallback
///
/// Without a configured path, or when the file does not exist, the embedded
/// list for the requested language is used instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordListDictionary {
    path: Option<PathBuf>,
    max_words: usize,
}

impl WordListDictionary {
    #[must_use]
    pub const fn new(path: Option<PathBuf>, max_words: usize) -> Self {
        Self { path, max_words }
    }

    /// Embedded lists only
    #[must_use]
    pub const fn embedded() -> Self {
        Self::new(None, DEFAULT_MAX_WORDS)
    }

    fn embedded_words(&self, language: Language) -> Vec<Word> {
        loader::words_from_slice(language.embedded_words(), self.max_words)
    }
}

impl Default for WordListDictionary {
    fn default() -> Self {
        Self::embedded()
    }
}

impl Dictionary for WordListDictionary {
    fn load_words(&self, language: Language) -> Result<Vec<Word>> {
        let Some(path) = &self.path else {
            return Ok(self.embedded_words(language));
        };

        match loader::load_from_file(path, self.max_words) {
            Ok(words) => {
                debug!("loaded {} words from {}", words.len(), path.display());
                Ok(words)
            }
            Err(AdvisorError::WordList { source, .. })
                if source.kind() == io::ErrorKind::NotFound =>
            {
                let words = self.embedded_words(language);
                warn!(
                    "{} not found, using the embedded {language} list ({} words)",
                    path.display(),
                    words.len()
                );
                Ok(words)
            }
            Err(err) => Err(err),
        }
    }

    fn describe(&self) -> String {
        self.path.as_ref().map_or_else(
            || "embedded".to_string(),
            |path| path.display().to_string(),
        )
    }
}
