//! Test all secrets - comprehensive solver evaluation
//!
//! Runs the solver against every code of the universe and generates statistics.

use crate::config::GameConfig;
use crate::core::Code;
use crate::error::Result;
use crate::output::formatters::create_progress_bar;
use crate::solver::{CandidateSpace, KnuthStrategy, Solver, Status, StrategyType};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Statistics from testing all secrets
#[derive(Debug)]
pub struct TestAllStatistics {
    pub strategy: &'static str,
    pub total_codes: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: BTreeMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    /// Hardest secrets, most guesses first
    pub worst_codes: Vec<(Code, usize)>,
    /// Knuth games on the classic board that needed more than 5 guesses
    pub regressions: Vec<(Code, usize)>,
}

impl TestAllStatistics {
    /// True when a proven bound was broken
    #[must_use]
    pub fn has_regressions(&self) -> bool {
        !self.regressions.is_empty()
    }
}

/// Run a fresh solver on every secret (or the first `limit` in canonical order)
///
/// `show_progress` draws an `indicatif` bar on stderr.
///
/// # Errors
///
/// Returns an error if the solver rejects a call, which indicates a defect
/// rather than bad input.
pub fn run_test_all(
    strategy_name: &str,
    config: &GameConfig,
    limit: Option<usize>,
    show_progress: bool,
) -> Result<TestAllStatistics> {
    let universe = CandidateSpace::generate_all(config);
    let secrets: Vec<&Code> = universe
        .iter()
        .take(limit.unwrap_or(universe.len()))
        .collect();

    let pb = if show_progress {
        let pb = ProgressBar::new(secrets.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        pb.set_style(style.progress_chars("█▓▒░"));
        pb
    } else {
        ProgressBar::hidden()
    };

    let classic = GameConfig::default();
    let classic_knuth = strategy_name_is_knuth(strategy_name)
        && config.total_colors() == classic.total_colors()
        && config.code_length() == classic.code_length();

    let mut strategy = "";
    let mut lengths: Vec<(Code, usize)> = Vec::with_capacity(secrets.len());
    let mut guess_distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut regressions = Vec::new();
    let mut failed = 0;

    let total_start = Instant::now();

    for (idx, &secret) in secrets.iter().enumerate() {
        let mut solver = Solver::new(
            StrategyType::from_name_seeded(strategy_name, config, idx as u64),
            *config,
        );
        strategy = solver.strategy_name();
        let turns = solver.play_out(secret)?;

        if solver.status() == Status::Won {
            let guesses = turns.len();
            *guess_distribution.entry(guesses).or_insert(0) += 1;
            if classic_knuth && guesses > KnuthStrategy::CLASSIC_MAX_GUESSES as usize {
                regressions.push((secret.clone(), guesses));
            }
            lengths.push((secret.clone(), guesses));
        } else {
            failed += 1;
        }

        if idx % 10 == 0 && !lengths.is_empty() {
            let avg = lengths.iter().map(|(_, n)| n).sum::<usize>() as f64 / lengths.len() as f64;
            pb.set_message(format!("Avg: {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let total_time = total_start.elapsed();
    let solved = lengths.len();
    let total_guesses: usize = lengths.iter().map(|(_, n)| n).sum();
    let average_guesses = if solved > 0 {
        total_guesses as f64 / solved as f64
    } else {
        0.0
    };

    let max_guesses = lengths.iter().map(|(_, n)| *n).max().unwrap_or(0);
    let min_guesses = lengths.iter().map(|(_, n)| *n).min().unwrap_or(0);

    let mut worst_codes = lengths;
    // Stable sort keeps canonical order among equals
    worst_codes.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    worst_codes.truncate(10);

    Ok(TestAllStatistics {
        strategy,
        total_codes: secrets.len(),
        solved,
        failed,
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses,
        min_guesses,
        worst_codes,
        regressions,
    })
}

fn strategy_name_is_knuth(name: &str) -> bool {
    !matches!(name, "easy" | "random" | "medium" | "probe")
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ({}) ", stats.strategy);
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total codes tested:  {}", stats.total_codes);
    let total = stats.total_codes.max(1) as f64;
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if stats.failed > 0 {
        println!(
            "  Out of guesses:      {} {}",
            stats.failed,
            format!("({:.1}%)", stats.failed as f64 / total * 100.0).red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Best / worst case:   {} / {}",
        stats.min_guesses, stats.max_guesses
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per code:       {:.1}ms",
        stats.total_time.as_millis() as f64 / total
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(1);
    for (&guesses, &count) in &stats.guess_distribution {
        let percentage = count as f64 / stats.solved.max(1) as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!(
            "  {guesses:2} guesses: {} {count:5} ({percentage:5.1}%)",
            bar.green()
        );
    }

    if !stats.worst_codes.is_empty() {
        println!("\n😰 {}", "Hardest Codes".yellow().bold());
        for (code, guesses) in stats.worst_codes.iter().take(5) {
            println!("  {} ({} guesses)", code.to_string().yellow(), guesses);
        }
    }

    if stats.has_regressions() {
        println!(
            "\n{}",
            format!(
                "⚠️  {} secrets needed more than {} guesses: the minimax bound is broken",
                stats.regressions.len(),
                KnuthStrategy::CLASSIC_MAX_GUESSES
            )
            .red()
            .bold()
        );
        for (code, guesses) in stats.regressions.iter().take(10) {
            println!("  {} ({} guesses)", code.to_string().red(), guesses);
        }
    }
}
