//! Simple interactive CLI mode
//!
//! Line-oriented front end over a single advisor session, without the TUI.
//! Reads commands from any `BufRead` so it can be scripted.

use std::io::{BufRead, Write};

use crate::error::{AdvisorError, Result};
use crate::service::{Advisor, EvaluationInput, Summary};
use crate::session::SessionStore;
use crate::solver::SuggestOptions;
use crate::wordlists::{Dictionary, Language};

const SESSION: &str = "simple";

const HELP: &str = "\
Commands:
  suggest                 best next guess
  apply GUESS FEEDBACK    record a row, e.g. apply crate GYKKY (🟩🟨⬛ also accepted)
  explain WORD            how WORD would split the candidates
  state                   candidates left and guesses so far
  reset [es|en]           start over, optionally switching language
  help                    this text
  quit                    leave";

enum Command<'a> {
    Suggest,
    Apply(&'a str, &'a str),
    Explain(&'a str),
    State,
    Reset(Option<&'a str>),
    Help,
    Quit,
    Unknown,
}

fn parse_command(line: &str) -> Command<'_> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Command::Unknown;
    };
    let args: Vec<&str> = parts.collect();

    match (head.to_ascii_lowercase().as_str(), args.as_slice()) {
        ("suggest" | "s", []) => Command::Suggest,
        ("apply" | "a", &[guess, feedback]) => Command::Apply(guess, feedback),
        ("explain" | "e", &[word]) => Command::Explain(word),
        ("state", []) => Command::State,
        ("reset" | "new", []) => Command::Reset(None),
        ("reset" | "new", &[language]) => Command::Reset(Some(language)),
        ("help" | "?", _) => Command::Help,
        ("quit" | "q" | "exit", _) => Command::Quit,
        _ => Command::Unknown,
    }
}

/// Run the simple interactive CLI mode until `quit` or end of input
///
/// Invalid guesses or feedback are reported and the loop continues.
///
/// # Errors
///
/// Returns an error on I/O failure or when the word list cannot be loaded.
pub fn run_simple<S, D, R, W>(
    advisor: &Advisor<S, D>,
    input: R,
    mut out: W,
) -> anyhow::Result<()>
where
    S: SessionStore,
    D: Dictionary,
    R: BufRead,
    W: Write,
{
    writeln!(out, "Wordle advisor, plain mode. Type 'help' for commands.")?;
    writeln!(out, "{}", advisor.reset(SESSION, None)?.summary())?;

    for line in input.lines() {
        let line = line?;
        let reply = match parse_command(&line) {
            Command::Quit => break,
            Command::Help => Ok(HELP.to_string()),
            Command::Unknown => Ok(format!(
                "Unrecognised command '{}'. Try 'help'.",
                line.trim()
            )),
            Command::Suggest => suggest(advisor),
            Command::Apply(guess, feedback) => advisor
                .apply_feedback(SESSION, guess, feedback)
                .map(|outcome| outcome.summary()),
            Command::Explain(word) => advisor
                .explain(SESSION, word)
                .map(|outcome| outcome.summary()),
            Command::State => advisor.state(SESSION).map(|state| {
                let rows: Vec<String> = state
                    .history
                    .iter()
                    .map(|entry| format!("  {} {}", entry.guess, entry.pattern))
                    .collect();
                std::iter::once(state.summary())
                    .chain(rows)
                    .collect::<Vec<_>>()
                    .join("\n")
            }),
            Command::Reset(language) => language
                .map(str::parse::<Language>)
                .transpose()
                .and_then(|language| advisor.reset(SESSION, language))
                .map(|outcome| outcome.summary()),
        };

        match reply {
            Ok(text) => writeln!(out, "{text}")?,
            Err(err @ AdvisorError::WordList { .. }) => return Err(err.into()),
            Err(err) => writeln!(out, "error: {err}")?,
        }
    }

    writeln!(out, "Bye.")?;
    Ok(())
}

fn suggest<S: SessionStore, D: Dictionary>(advisor: &Advisor<S, D>) -> Result<String> {
    let outcome = advisor.suggest(
        SESSION,
        EvaluationInput::UseSessionState,
        SuggestOptions::default(),
    )?;
    let suggestion = &outcome.suggestion;

    let mut lines = vec![outcome.summary(), suggestion.explanation.clone()];
    lines.extend(suggestion.alternatives.iter().skip(1).map(|alt| {
        format!(
            "  also {} ({:.2} bits, ≈{:.1} left)",
            alt.word, alt.entropy_bits, alt.expected_remaining
        )
    }));
    lines.push(suggestion.analysis.message());
    Ok(lines.join("\n"))
}
