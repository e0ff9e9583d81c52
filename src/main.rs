//! Wordle Advisor - CLI
//!
//! Serves the advisor over JSON-RPC on stdio by default; the other
//! subcommands play, solve, analyze and benchmark in the terminal.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use wordle_advisor::{
    commands::{
        SolveConfig, analyze_word, benchmark_pool, choose_targets, run_benchmark, run_simple,
        solve_word,
    },
    config::AdvisorConfig,
    interactive::{App, run_tui},
    output::{print_analysis_result, print_benchmark_result, print_solve_result, print_suggestion},
    rpc::RpcServer,
    service::{Advisor, EvaluationInput},
    solver::SuggestOptions,
    wordlists::{DEFAULT_MAX_WORDS, Dictionary, Language},
};

#[derive(Parser)]
#[command(
    name = "wordle_advisor",
    about = "Entropy-driven Wordle advisor with a JSON-RPC stdio server",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word-list language: es (default) or en
    #[arg(short, long, global = true, env = "WORDLE_LANGUAGE", default_value = "es")]
    language: Language,

    /// Word-list file, one word per line (embedded list when absent or missing)
    #[arg(short = 'w', long, global = true, env = "WORDLE_WORDLIST")]
    wordlist: Option<PathBuf>,

    /// Keep at most this many words from the list
    #[arg(long, global = true, env = "WORDLE_MAX_WORDS", default_value_t = DEFAULT_MAX_WORDS)]
    max_words: usize,
}

impl Cli {
    fn config(&self) -> AdvisorConfig {
        AdvisorConfig {
            default_language: self.language,
            wordlist: self.wordlist.clone(),
            max_words: self.max_words,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// JSON-RPC 2.0 server on stdin/stdout (default)
    Serve,

    /// Interactive TUI mode
    Play,

    /// Simple CLI mode (line commands, no TUI)
    Simple,

    /// Suggest an opening guess and show the full ranking
    Suggest {
        /// Number of ranked guesses to show
        #[arg(short = 'k', long, default_value = "5")]
        top_k: usize,

        /// Score every candidate and the whole pool, even when large
        #[arg(long)]
        exact: bool,
    },

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze the entropy of a specific word
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Benchmark the advisor on random words
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for a reproducible word sample
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout carries RPC responses, so logs go to stderr
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let config = cli.config();
    let advisor = Advisor::from_config(&config);
    info!(
        "word list: {} ({}, max {} words)",
        config.dictionary().describe(),
        config.default_language,
        config.max_words
    );

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            RpcServer::new(advisor)
                .run(io::stdin().lock(), io::stdout().lock())
                .context("JSON-RPC stdio loop failed")
        }
        Commands::Play => {
            let app = App::new(advisor)?;
            run_tui(app)
        }
        Commands::Simple => run_simple(&advisor, io::stdin().lock(), io::stdout().lock()),
        Commands::Suggest { top_k, exact } => {
            let options = SuggestOptions {
                top_k,
                approximate_when_large: !exact,
                ..SuggestOptions::default()
            };
            let outcome = advisor.suggest("cli", EvaluationInput::UseSessionState, options)?;
            print_suggestion(&outcome.suggestion);
            Ok(())
        }
        Commands::Solve { word, verbose } => {
            let result = solve_word(SolveConfig::new(word.as_str()), &advisor)
                .with_context(|| format!("could not solve '{word}'"))?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&advisor, &word, None)
                .with_context(|| format!("could not analyze '{word}'"))?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark { count, seed } => {
            let pool = benchmark_pool(&config.dictionary(), config.default_language)?;
            let targets = choose_targets(&pool, count, seed);
            println!("Running benchmark on {} random words...", targets.len());

            let result = run_benchmark(&advisor, &targets, None, true)?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}
