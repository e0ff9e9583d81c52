//! Tool catalogue
//!
//! Each tool is one advisor operation with a JSON argument object. Calls
//! produce a one-line summary for humans plus the full result as JSON.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::protocol::RpcError;
use crate::board::{BoardObserver, DetachedBoard, ObservedRow, StaticBoard};
use crate::service::{Advisor, DEFAULT_SESSION, EvaluationInput, Summary};
use crate::session::SessionStore;
use crate::solver::SuggestOptions;
use crate::wordlists::{Dictionary, Language};

/// Board consulted by `scrape_board` when no url is given
const DEFAULT_BOARD_URL: &str = "https://wordly.org/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    ResetSession,
    ApplyFeedback,
    SuggestGuess,
    State,
    Explain,
    ScrapeBoard,
    Whoami,
}

impl Tool {
    pub const ALL: [Self; 7] = [
        Self::ResetSession,
        Self::ApplyFeedback,
        Self::SuggestGuess,
        Self::State,
        Self::Explain,
        Self::ScrapeBoard,
        Self::Whoami,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ResetSession => "reset_session",
            Self::ApplyFeedback => "apply_feedback",
            Self::SuggestGuess => "suggest_guess",
            Self::State => "state",
            Self::Explain => "explain",
            Self::ScrapeBoard => "scrape_board",
            Self::Whoami => "whoami",
        }
    }

    /// Look a tool up by name; `reset` and `suggest_move` are accepted too
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "reset" => Some(Self::ResetSession),
            "suggest_move" => Some(Self::SuggestGuess),
            _ => Self::ALL.into_iter().find(|tool| tool.name() == name),
        }
    }

    const fn description(self) -> &'static str {
        match self {
            Self::ResetSession => "Start a session over with the full dictionary of a language",
            Self::ApplyFeedback => {
                "Record a guess and its G/Y/K (or 🟩🟨⬛) feedback and narrow the candidates"
            }
            Self::SuggestGuess => "Rank the next guesses by expected information",
            Self::State => "Show a session's language, candidate count and history",
            Self::Explain => "Show how a guess would split the current candidates",
            Self::ScrapeBoard => "Apply rows observed on a board to a session",
            Self::Whoami => "Server name, version and word list",
        }
    }

    fn input_schema(self) -> Value {
        let session = json!({"type": "string", "description": "Session id (default \"default\")"});
        let (properties, required) = match self {
            Self::ResetSession => (
                json!({
                    "session": session,
                    "language": {"type": "string", "enum": ["es", "en"]}
                }),
                json!([]),
            ),
            Self::ApplyFeedback => (
                json!({
                    "session": session,
                    "guess": {"type": "string", "description": "Five-letter word"},
                    "feedback": {"type": "string", "description": "Five of G/Y/K or 🟩/🟨/⬛"}
                }),
                json!(["guess", "feedback"]),
            ),
            Self::SuggestGuess => (
                json!({
                    "session": session,
                    "top_k": {"type": "integer", "minimum": 1, "default": 5},
                    "approximate_when_large": {"type": "boolean", "default": true},
                    "debug": {"type": "boolean", "default": false},
                    "state": {
                        "type": ["object", "null"],
                        "description": "Explicit candidates for this call only",
                        "properties": {"candidates": {"type": "array", "items": {"type": "string"}}}
                    }
                }),
                json!([]),
            ),
            Self::State => (json!({"session": session}), json!([])),
            Self::Explain => (
                json!({
                    "session": session,
                    "guess": {"type": "string"}
                }),
                json!(["guess"]),
            ),
            Self::ScrapeBoard => (
                json!({
                    "session": session,
                    "url": {"type": "string"},
                    "rows": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "guess": {"type": "string"},
                                "feedback": {"type": "string"}
                            },
                            "required": ["guess", "feedback"]
                        }
                    }
                }),
                json!([]),
            ),
            Self::Whoami => (json!({}), json!([])),
        };

        json!({"type": "object", "properties": properties, "required": required})
    }

    #[must_use]
    pub fn descriptor(self) -> Value {
        json!({
            "name": self.name(),
            "description": self.description(),
            "inputSchema": self.input_schema(),
        })
    }
}

/// `tools/list` result
#[must_use]
pub fn tool_list() -> Value {
    json!({"tools": Tool::ALL.map(Tool::descriptor)})
}

/// Result of a tool call, before transport wrapping
#[derive(Debug, Clone, PartialEq)]
pub struct ToolOutput {
    pub summary: String,
    pub payload: Value,
}

impl ToolOutput {
    fn from_outcome<T: Serialize + Summary>(outcome: &T) -> Result<Self, RpcError> {
        Ok(Self {
            summary: outcome.summary(),
            payload: serde_json::to_value(outcome).map_err(RpcError::internal)?,
        })
    }

    /// MCP-style content list: the summary as text, then the payload as JSON
    #[must_use]
    pub fn into_content(self) -> Value {
        json!({
            "content": [
                {"type": "text", "text": self.summary},
                {"type": "json", "json": self.payload},
            ]
        })
    }
}

fn default_session() -> String {
    DEFAULT_SESSION.to_string()
}

#[derive(Debug, Deserialize)]
struct ResetArgs {
    #[serde(default = "default_session")]
    session: String,
    language: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FeedbackArgs {
    #[serde(default = "default_session")]
    session: String,
    guess: String,
    feedback: String,
}

#[derive(Debug, Default, Deserialize)]
struct ExplicitState {
    candidates: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct SuggestArgs {
    #[serde(default = "default_session")]
    session: String,
    top_k: Option<usize>,
    approximate_when_large: Option<bool>,
    #[serde(default)]
    debug: bool,
    state: Option<ExplicitState>,
}

#[derive(Debug, Deserialize)]
struct SessionArgs {
    #[serde(default = "default_session")]
    session: String,
}

#[derive(Debug, Deserialize)]
struct ExplainArgs {
    #[serde(default = "default_session")]
    session: String,
    guess: String,
}

#[derive(Debug, Deserialize)]
struct BoardArgs {
    #[serde(default = "default_session")]
    session: String,
    url: Option<String>,
    rows: Option<Vec<ObservedRow>>,
}

fn arguments<T: DeserializeOwned>(args: Value) -> Result<T, RpcError> {
    let args = if args.is_null() { json!({}) } else { args };
    serde_json::from_value(args).map_err(RpcError::invalid_params)
}

/// Run a tool against the advisor
///
/// # Errors
/// `INVALID_PARAMS` for malformed arguments or rejected input, `INTERNAL_ERROR`
/// for word-list failures.
pub fn call_tool<S: SessionStore, D: Dictionary>(
    advisor: &Advisor<S, D>,
    tool: Tool,
    args: Value,
) -> Result<ToolOutput, RpcError> {
    match tool {
        Tool::ResetSession => {
            let args: ResetArgs = arguments(args)?;
            let language = args
                .language
                .as_deref()
                .map(str::parse::<Language>)
                .transpose()?;
            ToolOutput::from_outcome(&advisor.reset(&args.session, language)?)
        }
        Tool::ApplyFeedback => {
            let args: FeedbackArgs = arguments(args)?;
            ToolOutput::from_outcome(&advisor.apply_feedback(
                &args.session,
                &args.guess,
                &args.feedback,
            )?)
        }
        Tool::SuggestGuess => {
            let args: SuggestArgs = arguments(args)?;
            let defaults = SuggestOptions::default();
            let options = SuggestOptions {
                top_k: args.top_k.unwrap_or(defaults.top_k),
                approximate_when_large: args
                    .approximate_when_large
                    .unwrap_or(defaults.approximate_when_large),
                debug: args.debug,
            };
            let input = EvaluationInput::resolve(args.state.unwrap_or_default().candidates)?;
            ToolOutput::from_outcome(&advisor.suggest(&args.session, input, options)?)
        }
        Tool::State => {
            let args: SessionArgs = arguments(args)?;
            ToolOutput::from_outcome(&advisor.state(&args.session)?)
        }
        Tool::Explain => {
            let args: ExplainArgs = arguments(args)?;
            ToolOutput::from_outcome(&advisor.explain(&args.session, &args.guess)?)
        }
        Tool::ScrapeBoard => {
            let args: BoardArgs = arguments(args)?;
            let observer: Box<dyn BoardObserver> = match args.rows {
                Some(rows) => Box::new(StaticBoard::new(rows)),
                None => Box::new(DetachedBoard::new(
                    args.url.as_deref().unwrap_or(DEFAULT_BOARD_URL),
                )),
            };
            ToolOutput::from_outcome(&advisor.observe_board(&args.session, observer.as_ref())?)
        }
        Tool::Whoami => ToolOutput::from_outcome(&advisor.server_info()),
    }
}
