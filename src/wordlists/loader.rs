//! Word list loading utilities
//!
//! Reads word-list files and turns raw lines into a clean, deduplicated list of
//! words.

use std::fs;
use std::path::Path;

use rustc_hash::FxHashSet;

use crate::core::Word;
use crate::error::{AdvisorError, Result};

/// Default cap on dictionary size
pub const DEFAULT_MAX_WORDS: usize = 30_000;

/// Normalize raw entries into a word list
///
/// Each entry goes through [`Word::normalize`]; entries that do not come out
/// as exactly five letters are skipped, repeats keep their first position,
/// and the result is cut to `max_words`.
///
/// # Examples
/// ```
/// use wordle_advisor::wordlists::loader::normalize_word_list;
///
/// let words = normalize_word_list(["Árbol", "arbol", "#", "canción", "perro"], 10);
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, vec!["arbol", "perro"]);
/// ```
pub fn normalize_word_list<'s, I>(entries: I, max_words: usize) -> Vec<Word>
where
    I: IntoIterator<Item = &'s str>,
{
    let mut seen = FxHashSet::default();
    entries
        .into_iter()
        .filter_map(|raw| Word::normalize(raw).ok())
        .filter(|word| seen.insert(word.text().to_string()))
        .take(max_words)
        .collect()
}

/// Load words from a file, one per line
///
/// # Errors
///
/// Returns `AdvisorError::WordList` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_advisor::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words_es.txt", 30_000).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, max_words: usize) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| AdvisorError::WordList {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(normalize_word_list(content.lines(), max_words))
}

/// Convert an embedded string slice to a word list
///
/// # Examples
/// ```
/// use wordle_advisor::wordlists::loader::words_from_slice;
/// use wordle_advisor::wordlists::WORDS_EN;
///
/// let words = words_from_slice(WORDS_EN, usize::MAX);
/// assert!(!words.is_empty());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], max_words: usize) -> Vec<Word> {
    normalize_word_list(slice.iter().copied(), max_words)
}
