//! Display functions for command results

use super::formatters::{code_swatches, create_progress_bar, response_pegs};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::config::GameConfig;
use colored::Colorize;

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult, config: &GameConfig, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} ({})",
        code_swatches(&result.secret),
        result.strategy
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {}",
            turn,
            code_swatches(&step.guess),
            response_pegs(step.response, config)
        );

        if verbose {
            println!("  Response:   {}", step.response);
            if let (Some(before), Some(after)) = (step.candidates_before, step.candidates_after) {
                println!("  Candidates: {before} → {after}");
                if after > 0 {
                    println!(
                        "  Reduction:  {:.1}x",
                        before as f64 / after as f64
                    );
                }
            }
        }
    }

    println!();
    if result.success() {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of guess analysis
pub fn print_analysis_result(result: &AnalysisResult, config: &GameConfig) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        code_swatches(&result.guess)
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} possible codes:", result.total_candidates);
    println!(
        "   Worst case:  {}",
        format!("{} codes remain", result.worst_case).bright_yellow()
    );
    println!(
        "   Expected:    {:.1} codes remain",
        result.expected_remaining
    );
    println!("   Classes:     {}", result.partitions.len());
    println!(
        "   Could win:   {}",
        if result.is_candidate { "yes".green() } else { "no".red() }
    );

    println!("\n📈 {}", "Response classes:".bright_cyan().bold());
    for (response, size) in &result.partitions {
        let bar = create_progress_bar(*size as f64, result.worst_case as f64, 30);
        println!(
            "   {}  {} {size:5}",
            response_pegs(*response, config),
            bar.green()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ({}) ",
        "BENCHMARK RESULTS".bright_cyan().bold(),
        result.strategy
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!("   Solved:           {}", result.solved);
    if result.lost > 0 {
        println!(
            "   Out of guesses:   {}",
            result.lost.to_string().red()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&guess_count, &count) in &result.distribution {
        let pct = (count as f64 / result.total_games.max(1) as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count:2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
