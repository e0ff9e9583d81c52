//! Formatting utilities for terminal output

use colored::{ColoredString, Colorize};

use crate::core::{Feedback, Pattern, Word};

/// Guess letters tinted by their feedback, e.g. a green `C` for a hit
#[must_use]
pub fn colored_guess(word: &Word, pattern: Pattern) -> String {
    word.text()
        .to_uppercase()
        .chars()
        .zip(pattern.symbols())
        .map(|(letter, feedback)| tint(letter, feedback).to_string())
        .collect()
}

fn tint(letter: char, feedback: Feedback) -> ColoredString {
    let text = letter.to_string();
    match feedback {
        Feedback::Match => text.black().on_green().bold(),
        Feedback::Present => text.black().on_yellow().bold(),
        Feedback::Absent => text.white().on_bright_black(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let ratio = if max > 0.0 { (value / max).clamp(0.0, 1.0) } else { 0.0 };
    let filled = ((ratio * width as f64).round() as usize).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Entropy as a bar scaled to `max_bits`
///
/// `max_bits` is normally `log2(candidates)`, the best any guess can do.
#[must_use]
pub fn entropy_bar(entropy: f64, max_bits: f64, width: usize) -> String {
    create_progress_bar(entropy, max_bits, width)
}

/// Candidate words joined for display, uppercased
#[must_use]
pub fn word_list(words: &[Word]) -> String {
    words
        .iter()
        .map(|w| w.text().to_uppercase())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_clamps_overflow_and_zero_max() {
        assert_eq!(create_progress_bar(250.0, 100.0, 4), "████");
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn colored_guess_keeps_letters() {
        colored::control::set_override(false);
        let word = Word::new("crane").unwrap();
        let pattern: Pattern = "GYKKG".parse().unwrap();

        assert_eq!(colored_guess(&word, pattern), "CRANE");
    }

    #[test]
    fn word_list_uppercases() {
        let words = vec![Word::new("crate").unwrap(), Word::new("grate").unwrap()];
        assert_eq!(word_list(&words), "CRATE, GRATE");
    }
}
