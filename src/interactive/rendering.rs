//! TUI rendering with ratatui
//!
//! Panels for the suggestion, remaining candidates, played rows and session
//! progress.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Feedback, Pattern, Word};
use crate::output::formatters::create_progress_bar;
use crate::solver::CandidateAnalysis;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn rounded(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        "🎯 WORDLE ADVISOR - {} words",
        app.language.code().to_uppercase()
    );
    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40), // Current guess info
            Constraint::Percentage(30), // Candidates
            Constraint::Percentage(30), // History
        ])
        .split(area);

    render_current_guess(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn render_current_guess(f: &mut Frame, app: &App, area: Rect) {
    let Some(guess) = &app.current_guess else {
        let paragraph = Paragraph::new("No suggestion available")
            .block(rounded(" Current Guess "));
        f.render_widget(paragraph, area);
        return;
    };

    let max_bits = (app.candidate_count.max(2) as f64).log2();
    let bar = create_progress_bar(guess.entropy, max_bits, 18);
    let mut source = guess
        .phase
        .map_or_else(|| "your word".to_string(), |phase| format!("{phase} game"));
    if guess.is_candidate {
        source.push_str(", possible answer");
    }

    let mut content = vec![
        Line::from(vec![
            Span::raw("Suggested: "),
            Span::styled(
                guess.word.text().to_uppercase(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ({source})"),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(format!("Entropy:   [{bar}] {:.3} bits", guess.entropy)),
        Line::from(format!("Info gain: {:.1}x reduction", guess.entropy.exp2())),
        Line::from(format!(
            "Expected:  {:.1} candidates remain",
            guess.expected_remaining
        )),
    ];

    if !app.alternatives.is_empty() {
        let others: Vec<String> = app
            .alternatives
            .iter()
            .take(4)
            .map(|alt| format!("{} {:.2}b", alt.word.text().to_uppercase(), alt.entropy))
            .collect();
        content.push(Line::from(Span::styled(
            format!("Also:      {}", others.join("  ")),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(content)
        .block(rounded(" Current Guess "))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn candidate_line(word: &Word) -> Line<'static> {
    Line::from(vec![
        Span::raw("  🟢 "),
        Span::styled(word.text().to_uppercase(), Style::default().fg(Color::Green)),
    ])
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let content = match &app.analysis {
        None | Some(CandidateAnalysis::Exhausted) => vec![Line::from("No candidates remain")],
        Some(CandidateAnalysis::Solved { answer }) => {
            vec![Line::from("The answer must be:"), candidate_line(answer)]
        }
        Some(CandidateAnalysis::Narrowed {
            count,
            candidates,
            most_likely,
            most_uncertain,
        }) => {
            let mut lines = match candidates {
                Some(words) => words.iter().take(12).map(candidate_line).collect(),
                None => vec![
                    Line::from(format!("{count} candidates remaining")),
                    Line::from(format!(
                        "Information needed: {:.2} bits",
                        (*count as f64).log2()
                    )),
                ],
            };
            if let Some(likely) = most_likely {
                lines.push(Line::from(Span::styled(
                    format!(
                        "Position {}: '{}' in {:.0}%",
                        likely.position,
                        likely.letter.to_ascii_uppercase(),
                        likely.probability * 100.0
                    ),
                    Style::default().fg(Color::Cyan),
                )));
            }
            if let Some(uncertain) = most_uncertain {
                lines.push(Line::from(Span::styled(
                    format!(
                        "Position {}: {} letters open",
                        uncertain.position, uncertain.possible_letters
                    ),
                    Style::default().fg(Color::Magenta),
                )));
            }
            lines
        }
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Candidates ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
}

fn pattern_spans(word: &Word, pattern: Pattern) -> Vec<Span<'static>> {
    word.text()
        .to_uppercase()
        .chars()
        .zip(pattern.symbols())
        .map(|(letter, feedback)| {
            let background = match feedback {
                Feedback::Match => Color::Green,
                Feedback::Present => Color::Yellow,
                Feedback::Absent => Color::DarkGray,
            };
            Span::styled(
                format!(" {letter} "),
                Style::default()
                    .fg(Color::Black)
                    .bg(background)
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect()
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .rows
        .iter()
        .enumerate()
        .rev()
        .take(6)
        .map(|(i, row)| {
            let mut spans = vec![Span::raw(format!("{}: ", i + 1))];
            spans.extend(pattern_spans(&row.guess, row.pattern));
            spans.push(Span::raw(format!(
                " [{:.1} bits] {} → {}",
                row.entropy, row.candidates_before, row.candidates_after
            )));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let history = List::new(items)
        .block(Block::default().title(" History ").borders(Borders::ALL));
    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_search_progress(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let total_bits = (app.initial_count.max(1) as f64).log2();
    let remaining_bits = (app.candidate_count.max(1) as f64).log2();
    let gained = (total_bits - remaining_bits).max(0.0);
    let ratio = if total_bits > 0.0 {
        (gained / total_bits).clamp(0.0, 1.0)
    } else {
        1.0
    };

    let gauge = Gauge::default()
        .block(rounded(" Information Gained "))
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio)
        .label(format!(
            "{gained:.1}/{total_bits:.1} bits | {} candidates remain",
            app.candidate_count
        ));
    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let list = List::new(messages)
        .block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::WinCelebration => (
            " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Feedback => (
            " Enter Feedback (G=Green Y=Yellow K=Gray, or emojis) | TAB for manual word ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::ManualWord => (
            " Enter Word to Try (5 letters) | ESC to cancel ",
            app.manual_word.as_str(),
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(area);

    let phase = app
        .current_guess
        .as_ref()
        .and_then(|guess| guess.phase)
        .map_or_else(|| "-".to_string(), |phase| phase.to_string());
    let mode = Paragraph::new(format!("Turn {} | {phase}", app.rows.len() + 1))
        .alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let win_rate = if app.stats.total_games > 0 {
        app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
    } else {
        0.0
    };
    let total_games = app.stats.total_games;
    let stats = Paragraph::new(format!("Games: {total_games} | Win Rate: {win_rate:.0}%"))
        .alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let candidates = Paragraph::new(format!("Candidates: {}", app.candidate_count))
        .alignment(Alignment::Center);
    f.render_widget(candidates, chunks[2]);

    let help = Paragraph::new("q: Quit | n: New Game | Enter: Submit | TAB: Manual Word")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
