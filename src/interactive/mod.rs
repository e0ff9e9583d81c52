//! Interactive TUI
//!
//! Plays one advisor session in the terminal: the player types the feedback
//! their game showed for each suggested word.

mod app;
mod rendering;

pub use app::{App, GuessInfo, InputMode, Message, MessageStyle, PlayedRow, Statistics, run_tui};
