//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod play;
pub mod simple;
pub mod solve;
pub mod test_all;

pub use analyze::{AnalysisResult, analyze_guess, parse_history_entry};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use play::{choose_secret, run_play};
pub use simple::run_simple;
pub use solve::{GuessStep, SolveResult, solve_code};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};
