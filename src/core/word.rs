//! Word representation
//!
//! A Word stores a 5-letter lowercase token along with its raw bytes for
//! pattern calculation.

use std::fmt;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// A 5-letter word over the lowercase ASCII alphabet
///
/// Ordering and equality are plain string comparisons on the text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    chars: [u8; 5],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Uppercase input is lowercased; nothing else is rewritten.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.len() != 5 {
            return Err(WordError::InvalidLength(text.chars().count()));
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut chars = [0u8; 5];
        chars.copy_from_slice(text.as_bytes());

        Ok(Self { text, chars })
    }

    /// Normalize free-form input into a Word
    ///
    /// Trims, lowercases, folds common Latin diacritics (á → a, ñ → n, ü → u)
    /// and drops anything outside a-z before validating the length.
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` if the cleaned token is not 5 letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::Word;
    ///
    /// assert_eq!(Word::normalize(" Árbol ").unwrap().text(), "arbol");
    /// assert_eq!(Word::normalize("soñar").unwrap().text(), "sonar");
    /// assert!(Word::normalize("canción").is_err());
    /// ```
    pub fn normalize(raw: &str) -> Result<Self, WordError> {
        let cleaned: String = raw
            .trim()
            .to_lowercase()
            .chars()
            .filter_map(fold_letter)
            .collect();
        Self::new(cleaned)
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; 5] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Distinct letters in order of first appearance
    #[must_use]
    pub fn distinct_letters(&self) -> Vec<u8> {
        let mut seen = Vec::with_capacity(5);
        for &ch in &self.chars {
            if !seen.contains(&ch) {
                seen.push(ch);
            }
        }
        seen
    }
}

/// Map a lowercase character onto a-z, or drop it
fn fold_letter(c: char) -> Option<char> {
    let folded = match c {
        'a'..='z' => c,
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        'ý' | 'ÿ' => 'y',
        _ => return None,
    };
    Some(folded)
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for Word {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.chars(), b"crane");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CrAnE").unwrap();
        assert_eq!(word.text(), "crane");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("too long"),
            Err(WordError::InvalidLength(8))
        ));
        assert!(matches!(
            Word::new("shrt"),
            Err(WordError::InvalidLength(4))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("cran3").is_err());
        assert!(Word::new("cran ").is_err());
        assert!(Word::new("cran!").is_err());
    }

    #[test]
    fn normalize_strips_noise_and_accents() {
        assert_eq!(Word::normalize("  CRATE\n").unwrap().text(), "crate");
        assert_eq!(Word::normalize("c-r-a-t-e").unwrap().text(), "crate");
        assert_eq!(Word::normalize("Débil").unwrap().text(), "debil");
        assert_eq!(Word::normalize("otoño").unwrap().text(), "otono");
    }

    #[test]
    fn normalize_rejects_wrong_length_after_cleaning() {
        assert_eq!(Word::normalize("cr4te"), Err(WordError::InvalidLength(4)));
        assert!(Word::normalize("").is_err());
        assert!(Word::normalize("crates").is_err());
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.char_at(0), b'c');
        assert_eq!(word.char_at(4), b'e');
    }

    #[test]
    fn distinct_letters_keep_first_occurrence_order() {
        let word = Word::new("sassy").unwrap();
        assert_eq!(word.distinct_letters(), vec![b's', b'a', b'y']);
    }

    #[test]
    fn ordering_is_lexicographic() {
        let a = Word::new("crane").unwrap();
        let b = Word::new("crate").unwrap();
        assert!(a < b);
    }

    #[test]
    fn serializes_as_plain_string() {
        let word = Word::new("slate").unwrap();
        assert_eq!(serde_json::to_string(&word).unwrap(), "\"slate\"");
    }
}
