//! TUI application state and logic

use std::io;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::core::{Pattern, Word};
use crate::error::AdvisorError;
use crate::service::{Advisor, EvaluationInput};
use crate::solver::entropy::ScoredGuess;
use crate::solver::{CandidateAnalysis, GamePhase, SuggestOptions};
use crate::wordlists::Language;

const SESSION: &str = "play";

/// Messages kept in the side panel
const MESSAGE_LIMIT: usize = 5;

/// Application state
pub struct App {
    advisor: Advisor,
    pub language: Language,
    pub rows: Vec<PlayedRow>,
    pub current_guess: Option<GuessInfo>,
    /// Runner-up suggestions for the current turn
    pub alternatives: Vec<GuessInfo>,
    pub analysis: Option<CandidateAnalysis>,
    pub candidate_count: usize,
    /// Candidate count at the start of the game
    pub initial_count: usize,
    pub input_buffer: String,
    pub manual_word: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Feedback,
    ManualWord,
    WinCelebration,
}

/// A submitted guess with the narrowing it caused
#[derive(Debug, Clone)]
pub struct PlayedRow {
    pub guess: Word,
    pub pattern: Pattern,
    pub entropy: f64,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

#[derive(Debug, Clone)]
pub struct GuessInfo {
    pub word: Word,
    pub entropy: f64,
    pub expected_remaining: f64,
    pub is_candidate: bool,
    /// `None` for words typed in by the player
    pub phase: Option<GamePhase>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; 7],
}

impl App {
    /// Create the app and start the first game
    ///
    /// # Errors
    /// Fails when the word list for the advisor's language cannot be loaded.
    pub fn new(advisor: Advisor) -> Result<Self> {
        let mut app = Self {
            language: advisor.default_language(),
            advisor,
            rows: Vec::new(),
            current_guess: None,
            alternatives: Vec::new(),
            analysis: None,
            candidate_count: 0,
            initial_count: 0,
            input_buffer: String::new(),
            manual_word: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Feedback,
        };
        app.start_game()?;
        app.add_message(
            "Enter feedback for the suggested word (e.g. 'GYKKG' or '🟩🟨⬛⬛🟩')",
            MessageStyle::Info,
        );
        Ok(app)
    }

    fn start_game(&mut self) -> Result<()> {
        let reset = self.advisor.reset(SESSION, Some(self.language))?;
        self.rows.clear();
        self.input_buffer.clear();
        self.manual_word.clear();
        self.input_mode = InputMode::Feedback;
        self.candidate_count = reset.candidate_count;
        self.initial_count = reset.candidate_count;
        self.compute_suggestion();
        Ok(())
    }

    pub fn compute_suggestion(&mut self) {
        let options = SuggestOptions::default();
        match self
            .advisor
            .suggest(SESSION, EvaluationInput::UseSessionState, options)
        {
            Ok(outcome) => {
                let suggestion = outcome.suggestion;
                let info = |guess: &ScoredGuess| GuessInfo {
                    word: guess.word.clone(),
                    entropy: guess.entropy_bits,
                    expected_remaining: guess.expected_remaining,
                    is_candidate: guess.is_candidate,
                    phase: Some(suggestion.phase),
                };
                self.current_guess = Some(info(&suggestion.best));
                self.alternatives = suggestion.alternatives.iter().skip(1).map(info).collect();
                self.candidate_count = suggestion.candidate_count;
                self.analysis = Some(suggestion.analysis);
            }
            Err(err) => {
                self.current_guess = None;
                self.alternatives.clear();
                self.analysis = Some(CandidateAnalysis::Exhausted);
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn handle_feedback(&mut self, feedback: &str) {
        let Some(guess) = self.current_guess.clone() else {
            self.add_message("No guess to give feedback on", MessageStyle::Error);
            return;
        };

        let outcome = match self
            .advisor
            .apply_feedback(SESSION, guess.word.text(), feedback)
        {
            Ok(outcome) => outcome,
            Err(AdvisorError::InvalidFeedback(_)) => {
                self.add_message("Invalid pattern! Use G/Y/K or 🟩🟨⬛", MessageStyle::Error);
                return;
            }
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };

        self.input_buffer.clear();
        self.candidate_count = outcome.candidates_after;
        self.rows.push(PlayedRow {
            guess: outcome.guess,
            pattern: outcome.feedback,
            entropy: guess.entropy,
            candidates_before: outcome.candidates_before,
            candidates_after: outcome.candidates_after,
        });

        if outcome.feedback.is_perfect() {
            self.record_win();
        } else if outcome.candidates_after == 0 {
            self.current_guess = None;
            self.alternatives.clear();
            self.analysis = Some(CandidateAnalysis::Exhausted);
            self.add_message(
                "No candidates remain - feedback may be wrong. Press 'n' for a new game.",
                MessageStyle::Error,
            );
        } else {
            self.compute_suggestion();
            self.add_message(
                &format!("{} candidates remaining", outcome.candidates_after),
                MessageStyle::Info,
            );
        }
    }

    fn record_win(&mut self) {
        let guess_count = self.rows.len();
        self.stats.games_won += 1;
        self.stats.total_games += 1;
        if guess_count <= 6 {
            self.stats.guess_distribution[guess_count] += 1;
        }
        self.input_mode = InputMode::WinCelebration;

        let celebration = match guess_count {
            1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
            2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
            3 => "✨ SPLENDID! Three guesses! ✨",
            4 => "👏 GREAT JOB! Four guesses! 👏",
            5 => "🎉 NICE WORK! Five guesses! 🎉",
            6 => "😅 PHEW! Got it in six! 😅",
            _ => "🎊 SOLVED! 🎊",
        };
        self.add_message(celebration, MessageStyle::Success);
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        let unfinished = !self.rows.is_empty() && self.input_mode != InputMode::WinCelebration;
        if unfinished {
            self.stats.total_games += 1;
        }

        self.messages.clear();
        match self.start_game() {
            Ok(()) => self.add_message(
                "New game started! Here is the best opening guess.",
                MessageStyle::Info,
            ),
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MESSAGE_LIMIT {
            self.messages.remove(0);
        }
    }

    /// Score the typed word and play it instead of the suggestion
    pub fn use_manual_word(&mut self) {
        let explanation = match self.advisor.explain(SESSION, &self.manual_word) {
            Ok(outcome) => outcome.explanation,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };

        if let Some(suggested) = &self.current_guess
            && explanation.entropy_bits < suggested.entropy
        {
            self.add_message(
                &format!(
                    "Note: {} had {:.2} bits ({:.2} more)",
                    suggested.word.text().to_uppercase(),
                    suggested.entropy,
                    suggested.entropy - explanation.entropy_bits
                ),
                MessageStyle::Info,
            );
        }

        let is_candidate = match &self.analysis {
            Some(CandidateAnalysis::Solved { answer }) => *answer == explanation.guess,
            Some(CandidateAnalysis::Narrowed {
                candidates: Some(candidates),
                ..
            }) => candidates.contains(&explanation.guess),
            _ => false,
        };

        self.add_message(
            &format!(
                "Using: {} (entropy: {:.2} bits, {:.1}x reduction)",
                explanation.guess.text().to_uppercase(),
                explanation.entropy_bits,
                explanation.entropy_bits.exp2()
            ),
            MessageStyle::Success,
        );
        self.current_guess = Some(GuessInfo {
            word: explanation.guess,
            entropy: explanation.entropy_bits,
            expected_remaining: explanation.expected_remaining,
            is_candidate,
            phase: None,
        });
        self.input_mode = InputMode::Feedback;
        self.manual_word.clear();
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::WinCelebration => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::Feedback => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Tab if self.candidate_count > 0 => {
                    self.input_mode = InputMode::ManualWord;
                    self.add_message("Enter your own word (5 letters)", MessageStyle::Info);
                }
                KeyCode::Char(c) => self.input_buffer.push(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => {
                    // rejected input stays in the buffer for correction
                    let input = self.input_buffer.clone();
                    self.handle_feedback(&input);
                }
                _ => {}
            },
            InputMode::ManualWord => match key.code {
                KeyCode::Esc => {
                    self.input_mode = InputMode::Feedback;
                    self.manual_word.clear();
                    self.add_message("Cancelled manual word entry", MessageStyle::Info);
                }
                KeyCode::Tab => {
                    self.input_mode = InputMode::Feedback;
                    self.manual_word.clear();
                }
                KeyCode::Char(c) if self.manual_word.chars().count() < 5 && c.is_alphabetic() => {
                    self.manual_word.extend(c.to_lowercase());
                }
                KeyCode::Backspace => {
                    self.manual_word.pop();
                }
                KeyCode::Enter => {
                    if self.manual_word.chars().count() == 5 {
                        self.use_manual_word();
                    } else {
                        self.add_message("Word must be exactly 5 letters!", MessageStyle::Error);
                    }
                }
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Windows reports releases too
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }

    Ok(())
}
