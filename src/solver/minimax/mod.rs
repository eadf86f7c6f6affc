//! Minimax (Knuth) guess scoring
//!
//! Implements worst-case minimization for Mastermind guess selection.

mod calculator;
mod selector;

pub use calculator::{calculate_max_remaining, partition_sizes};
pub use selector::{ScoredGuess, select_best_guess};
