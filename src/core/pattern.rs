//! Feedback pattern calculation and representation
//!
//! A pattern encodes the per-letter verdict of a guess using base-3 digits:
//! - 0 = Absent (K, ⬛)
//! - 1 = Present (Y, 🟨)
//! - 2 = Match (G, 🟩)
//!
//! The pattern is stored as a single u8 value (0-242), where position `i`
//! contributes digit × 3^i to the total.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::Word;
use crate::error::AdvisorError;

/// Verdict for a single guess letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Letter does not occur (unmatched) in the answer
    Absent,
    /// Letter occurs elsewhere in the answer
    Present,
    /// Letter is in the correct position
    Match,
}

impl Feedback {
    const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Match => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Match,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Letter code: G, Y or K
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Absent => 'K',
            Self::Present => 'Y',
            Self::Match => 'G',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬛',
            Self::Present => '🟨',
            Self::Match => '🟩',
        }
    }

    /// Parse one symbol from either encoding
    const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Match),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            'K' | 'k' | '⬛' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback pattern for a guess against an answer
///
/// Value range: 0-242 (3^5 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern(u8);

impl Pattern {
    /// All matches
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Number of distinct patterns
    pub const COUNT: usize = 243;

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == 242
    }

    /// Build a pattern from five positional symbols
    #[must_use]
    pub fn from_symbols(symbols: [Feedback; 5]) -> Self {
        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        for symbol in symbols {
            pattern += symbol.digit() * multiplier;
            multiplier *= 3;
        }
        Self(pattern)
    }

    /// The five positional symbols, index i describing guess letter i
    #[must_use]
    pub fn symbols(self) -> [Feedback; 5] {
        let mut symbols = [Feedback::Absent; 5];
        let mut val = self.0;
        for symbol in &mut symbols {
            *symbol = Feedback::from_digit(val % 3);
            val /= 3;
        }
        symbols
    }

    /// Calculate the pattern when `guess` is played and `answer` is the target
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches; every unmatched answer
    ///    letter goes into a per-letter remaining pool
    /// 2. Second pass, left to right over unmatched positions: mark Present
    ///    and consume from the pool while the letter is still available,
    ///    otherwise Absent
    ///
    /// A letter is therefore credited at most as many times as it occurs
    /// unmatched in the answer.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::{Feedback, Pattern, Word};
    ///
    /// let guess = Word::new("crate").unwrap();
    /// let answer = Word::new("crane").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer);
    ///
    /// assert_eq!(pattern.to_string(), "GGGKG");
    /// assert_eq!(pattern.symbols()[3], Feedback::Absent);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let guess = guess.chars();
        let answer = answer.chars();
        let mut result = [Feedback::Absent; 5];
        let mut remaining = [0u8; 26];

        // Allow: index needed to compare guess[i], answer[i] and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if guess[i] == answer[i] {
                result[i] = Feedback::Match;
            } else {
                remaining[letter_index(answer[i])] += 1;
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if result[i] == Feedback::Match {
                continue;
            }
            let available = &mut remaining[letter_index(guess[i])];
            if *available > 0 {
                result[i] = Feedback::Present;
                *available -= 1;
            }
        }

        Self::from_symbols(result)
    }

    /// Parse feedback from letter codes ("GYKKG") or pictograms ("🟩🟨⬛⬛🟩")
    ///
    /// Surrounding whitespace and emoji variation selectors are ignored;
    /// letter codes are case-insensitive. Returns `None` unless exactly five
    /// symbols remain.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::Pattern;
    ///
    /// assert!(Pattern::parse("gyk kg").is_none());
    /// assert_eq!(Pattern::parse("GYKKG"), Pattern::parse("🟩🟨⬛⬜🟩"));
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut symbols = [Feedback::Absent; 5];
        let mut len = 0;

        for ch in s.trim().chars().filter(|&ch| ch != '\u{FE0F}') {
            let symbol = Feedback::from_symbol(ch)?;
            if len == 5 {
                return None;
            }
            symbols[len] = symbol;
            len += 1;
        }

        (len == 5).then(|| Self::from_symbols(symbols))
    }

    #[must_use]
    pub fn to_emoji(self) -> String {
        self.symbols().iter().map(|s| s.emoji()).collect()
    }
}

#[inline]
fn letter_index(letter: u8) -> usize {
    usize::from(letter - b'a')
}

impl FromStr for Pattern {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| AdvisorError::InvalidFeedback(s.to_string()))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.symbols() {
            write!(f, "{}", symbol.code())?;
        }
        Ok(())
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(guess: &str, answer: &str) -> Pattern {
        Pattern::calculate(&Word::new(guess).unwrap(), &Word::new(answer).unwrap())
    }

    #[test]
    fn pattern_perfect_constant() {
        assert_eq!(Pattern::PERFECT.value(), 242);
        assert!(Pattern::PERFECT.is_perfect());
        assert!(Pattern::PERFECT.symbols().iter().all(|&s| s == Feedback::Match));
        assert_eq!(Pattern::PERFECT.to_string(), "GGGGG");
    }

    #[test]
    fn pattern_all_absent() {
        let p = pattern("abcde", "fghij");
        assert_eq!(p.value(), 0);
        assert_eq!(p.to_string(), "KKKKK");
    }

    #[test]
    fn crate_against_crane() {
        let p = pattern("crate", "crane");
        assert_eq!(
            p.symbols(),
            [
                Feedback::Match,
                Feedback::Match,
                Feedback::Match,
                Feedback::Absent,
                Feedback::Match
            ]
        );
    }

    #[test]
    fn repeated_guess_letters_not_over_credited() {
        // SASSY vs MESAS: the third S is matched, one unmatched S remains for
        // the first S, so the fourth S is absent
        let p = pattern("sassy", "mesas");
        assert_eq!(p.to_string(), "YYGKK");
    }

    #[test]
    fn match_takes_priority_over_present() {
        // ROBOT vs FLOOR: second O is a match, first O takes the other O
        let p = pattern("robot", "floor");
        assert_eq!(p.to_string(), "YYKGK");

        // SPEED vs ERASE: both E's credited because ERASE has two
        let p = pattern("speed", "erase");
        assert_eq!(p.to_string(), "YKYYK");
    }

    #[test]
    fn repeated_letters_present_up_to_answer_count() {
        // HELLO has two unmatched L's, so both L's in LLAMA are present
        let p = pattern("llama", "hello");
        assert_eq!(p.to_string(), "YYKKK");

        // Anagram with no positional overlap: everything present
        let p = pattern("alloy", "loyal");
        assert_eq!(p.to_string(), "YYYYY");
    }

    #[test]
    fn self_pattern_is_perfect() {
        for word in ["crane", "slate", "sassy", "zzzzz", "aaaaa"] {
            assert_eq!(pattern(word, word), Pattern::PERFECT);
        }
    }

    #[test]
    fn symbols_round_trip_through_value() {
        let symbols = [
            Feedback::Present,
            Feedback::Match,
            Feedback::Absent,
            Feedback::Present,
            Feedback::Match,
        ];
        assert_eq!(Pattern::from_symbols(symbols).symbols(), symbols);
    }

    #[test]
    fn parse_both_encodings() {
        let codes = Pattern::parse("GYKKG").unwrap();
        let lower = Pattern::parse(" gykkg ").unwrap();
        let emoji = Pattern::parse("🟩🟨⬛⬜🟩").unwrap();
        let selectors = Pattern::parse("🟩🟨⬛\u{FE0F}⬛🟩").unwrap();

        assert_eq!(codes, lower);
        assert_eq!(codes, emoji);
        assert_eq!(codes, selectors);
        assert_eq!(codes.to_emoji(), "🟩🟨⬛⬛🟩");
    }

    #[test]
    fn parse_rejects_malformed_feedback() {
        assert!(Pattern::parse("GYKKGG").is_none());
        assert!(Pattern::parse("GYK").is_none());
        assert!(Pattern::parse("GXKKG").is_none());
        assert!(Pattern::parse("GY-KG").is_none());
        assert!(Pattern::parse("").is_none());
        assert!(matches!(
            "GGGG".parse::<Pattern>(),
            Err(AdvisorError::InvalidFeedback(_))
        ));
    }

    #[test]
    fn serializes_as_letter_codes() {
        let p = pattern("crate", "crane");
        assert_eq!(serde_json::to_string(&p).unwrap(), "\"GGGKG\"");
    }
}
