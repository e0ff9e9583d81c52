//! Display functions for command results

use colored::Colorize;

use super::formatters::{colored_guess, entropy_bar, word_list};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::solver::{CandidateAnalysis, Suggestion};

fn banner(title: &str, subject: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        title.bright_cyan().bold(),
        subject.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {} ({}): {} {}",
            i + 1,
            step.phase,
            colored_guess(&step.word, step.pattern),
            step.pattern.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Entropy:    {:.3} bits", step.entropy);
            println!("  Expected:   {:.1} candidates", step.expected_remaining);

            if step.candidates_after > 0 {
                let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({reduction:.1}x reduction)",
                    reduction.log2()
                );
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    let explanation = &result.explanation;
    banner("ENTROPY ANALYSIS:", explanation.guess.text());

    let max_bits = (result.total_candidates.max(1) as f64).log2();
    let bar = entropy_bar(explanation.entropy_bits, max_bits, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", explanation.entropy_bits).bright_yellow()
    );
    println!("   Info gain:   {:.1}x reduction", result.expected_reduction);
    println!(
        "   Expected:    {:.1} candidates remain",
        explanation.expected_remaining
    );
    println!(
        "   Worst case:  {} candidates ({:.1}% pruned)",
        explanation.max_partition,
        explanation.estimated_pruning * 100.0
    );

    let mut patterns: Vec<_> = explanation.pattern_distribution.iter().collect();
    patterns.sort_by(|a, b| b.1.total_cmp(a.1));
    println!("\n🎯 {}", "Most likely feedback:".bright_cyan().bold());
    for (pattern, probability) in patterns.into_iter().take(5) {
        println!(
            "   {} {} {:5.1}%",
            pattern.to_emoji(),
            colored_guess(&explanation.guess, *pattern),
            probability * 100.0
        );
    }
}

/// Print a suggestion with its ranking and candidate diagnostics
pub fn print_suggestion(suggestion: &Suggestion) {
    banner("SUGGESTION:", suggestion.best.word.text());

    println!(
        "\n{} | {} candidates | {} guesses so far",
        suggestion.phase.to_string().bright_magenta(),
        suggestion.candidate_count,
        suggestion.attempts
    );
    println!("{}", suggestion.explanation.italic());

    println!("\n🏆 {}", "Ranking:".bright_cyan().bold());
    for (rank, guess) in suggestion.alternatives.iter().enumerate() {
        let marker = if guess.is_candidate { "●" } else { " " };
        println!(
            "   {:2}. {} {}  {:.3} bits  ≈{:.1} left",
            rank + 1,
            marker.green(),
            guess.word.text().to_uppercase().bright_yellow(),
            guess.entropy_bits,
            guess.expected_remaining
        );
    }

    println!("\n🔍 {}", suggestion.analysis.message().bright_cyan());
    if let CandidateAnalysis::Narrowed {
        candidates,
        most_likely,
        most_uncertain,
        ..
    } = &suggestion.analysis
    {
        if let Some(candidates) = candidates {
            println!("   {}", word_list(candidates));
        }
        if let Some(likely) = most_likely {
            println!(
                "   Position {} is probably '{}' ({:.0}%)",
                likely.position,
                likely.letter.to_ascii_uppercase(),
                likely.probability * 100.0
            );
        }
        if let Some(uncertain) = most_uncertain {
            let letters: Vec<String> = uncertain
                .top_letters
                .iter()
                .map(|lc| format!("{}×{}", lc.letter.to_ascii_uppercase(), lc.count))
                .collect();
            println!(
                "   Position {} is wide open: {} letters ({})",
                uncertain.position,
                uncertain.possible_letters,
                letters.join(" ")
            );
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    banner("BENCHMARK RESULTS", "");

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        result.min_guesses.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_guesses.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&guess_count, &count) in &result.distribution {
        let pct = count as f64 / result.total_words.max(1) as f64 * 100.0;
        let bar_width = ((pct / 2.5) as usize).min(40);
        println!(
            "   {guess_count}: {}{} {count:4} ({pct:5.1}%)",
            "█".repeat(bar_width).green(),
            "░".repeat(40 - bar_width).bright_black()
        );
    }

    if !result.failed.is_empty() {
        println!(
            "\n{} {}",
            "Unsolved:".red().bold(),
            word_list(&result.failed)
        );
    }
}
