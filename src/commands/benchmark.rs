//! Benchmark command
//!
//! Tests solver performance across random secrets.

use crate::config::GameConfig;
use crate::core::Code;
use crate::error::Result;
use crate::solver::{Solver, Status, StrategyType};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub strategy: &'static str,
    pub total_games: usize,
    pub solved: usize,
    pub lost: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guesses needed to win -> number of games
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Run a benchmark on `count` random secrets
///
/// The same `seed` draws the same secrets and, for the random strategy, the
/// same guesses. Averages cover won games only.
///
/// # Errors
///
/// Returns an error if the solver rejects a call, which indicates a defect
/// rather than bad input.
pub fn run_benchmark(
    strategy_name: &str,
    config: &GameConfig,
    count: usize,
    seed: u64,
) -> Result<BenchmarkResult> {
    let mut rng = StdRng::seed_from_u64(seed);
    let secrets: Vec<Code> = (0..count).map(|_| Code::random(config, &mut rng)).collect();

    let start = Instant::now();
    let mut strategy = "";
    let mut total_guesses = 0;
    let mut solved = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();

    for secret in &secrets {
        let game_seed = rng.random();
        let mut solver = Solver::new(
            StrategyType::from_name_seeded(strategy_name, config, game_seed),
            *config,
        );
        strategy = solver.strategy_name();

        let turns = solver.play_out(secret)?;
        if solver.status() != Status::Won {
            continue;
        }

        let guesses = turns.len();
        solved += 1;
        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);
        *distribution.entry(guesses).or_insert(0) += 1;
    }

    let duration = start.elapsed();
    let total_games = secrets.len();

    Ok(BenchmarkResult {
        strategy,
        total_games,
        solved,
        lost: total_games - solved,
        total_guesses,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: if solved > 0 { min_guesses } else { 0 },
        max_guesses,
        distribution,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn benchmark_runs() {
        let config = GameConfig::default();
        let result = run_benchmark("knuth", &config, 10, 1).unwrap();

        assert_eq!(result.total_games, 10);
        assert_eq!(result.solved, 10);
        assert_eq!(result.strategy, "knuth");
        assert!(result.average_guesses >= 1.0);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= 5);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let config = GameConfig::default();
        let result = run_benchmark("medium", &config, 10, 2).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        assert_eq!(result.solved + result.lost, result.total_games);
    }

    #[test]
    fn benchmark_is_reproducible() {
        let config = GameConfig::default();
        let a = run_benchmark("easy", &config, 5, 99).unwrap();
        let b = run_benchmark("easy", &config, 5, 99).unwrap();

        assert_eq!(a.distribution, b.distribution);
        assert_eq!(a.lost, b.lost);
    }

    #[test]
    fn benchmark_empty_run() {
        let config = GameConfig::default();
        let result = run_benchmark("knuth", &config, 0, 0).unwrap();

        assert_eq!(result.total_games, 0);
        assert_eq!(result.total_guesses, 0);
        assert_eq!(result.min_guesses, 0);
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let config = GameConfig::default();
        let result = run_benchmark("knuth", &config, 8, 3).unwrap();

        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);
        for &guess_count in result.distribution.keys() {
            assert!((1..=5).contains(&guess_count));
        }
    }
}
