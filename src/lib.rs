//! Wordle Advisor
//!
//! Session-based Wordle advice: feed each guess's colored feedback into a
//! session and get the next guess ranked by expected information, with a
//! diagnostic view of the candidates still in play.
//!
//! The [`service::Advisor`] is the entry point; [`rpc`] exposes it as
//! JSON-RPC tools over stdio.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_advisor::service::{Advisor, EvaluationInput};
//! use wordle_advisor::session::InMemorySessionStore;
//! use wordle_advisor::solver::SuggestOptions;
//! use wordle_advisor::wordlists::{Language, WordListDictionary};
//!
//! let advisor = Advisor::new(
//!     InMemorySessionStore::new(),
//!     WordListDictionary::new(None, 100),
//!     Language::En,
//! );
//!
//! advisor.reset("game", None).unwrap();
//! advisor.apply_feedback("game", "about", "KKKKK").unwrap();
//!
//! let next = advisor
//!     .suggest("game", EvaluationInput::UseSessionState, SuggestOptions::default())
//!     .unwrap();
//! println!("try {}", next.suggestion.best.word);
//! ```

// Board observation
pub mod board;

// Command implementations
pub mod commands;

// Startup configuration
pub mod config;

// Core domain types
pub mod core;

// Error taxonomy
pub mod error;

// Interactive TUI interface
pub mod interactive;

// Terminal output formatting
pub mod output;

// JSON-RPC transport
pub mod rpc;

// Advisor operations
pub mod service;

// Per-game sessions
pub mod session;

// Suggestion engine
pub mod solver;

// Word lists
pub mod wordlists;
