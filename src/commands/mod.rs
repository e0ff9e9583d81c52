//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, benchmark_pool, choose_targets, run_benchmark};
pub use simple::run_simple;
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
