//! Minimax worst-case calculation for Mastermind responses
//!
//! Given a guess and a set of candidates, partitions the candidates by the
//! response each would produce and reports the largest class.

use crate::config::GameConfig;
use crate::core::{Code, Response};
use rustc_hash::FxHashMap;

/// Calculate the maximum remaining candidates for a guess
///
/// Returns the worst-case number of candidates left after playing `guess`,
/// or `None` if the guess or a candidate does not fit `config`.
///
/// # Strategy
/// For each candidate assumed to be the secret:
/// - Compute the response the guess would receive
/// - Count candidates per response
/// - Return the largest count (worst case)
///
/// # Examples
/// ```
/// use mastermind_solver::config::GameConfig;
/// use mastermind_solver::core::Code;
/// use mastermind_solver::solver::minimax::calculate_max_remaining;
///
/// let config = GameConfig::default();
/// let guess = Code::parse("0011", &config).unwrap();
/// let candidates = vec![
///     Code::parse("0123", &config).unwrap(),
///     Code::parse("4455", &config).unwrap(),
/// ];
///
/// let max_remaining = calculate_max_remaining(&guess, &candidates, &config);
/// assert_eq!(max_remaining, Some(1));
/// ```
#[must_use]
pub fn calculate_max_remaining(
    guess: &Code,
    candidates: &[Code],
    config: &GameConfig,
) -> Option<usize> {
    if !guess.fits(config) || !candidates.iter().all(|c| c.fits(config)) {
        return None;
    }

    Some(max_remaining_unchecked(guess, candidates, config))
}

/// Worst case for codes already known to fit `config`
pub(super) fn max_remaining_unchecked(
    guess: &Code,
    candidates: &[Code],
    config: &GameConfig,
) -> usize {
    response_counts(guess, candidates, config)
        .into_iter()
        .max()
        .unwrap_or(0)
}

/// Count candidates per response class, indexed by `Response::class_index`
fn response_counts(guess: &Code, candidates: &[Code], config: &GameConfig) -> Vec<usize> {
    let mut counts = vec![0usize; config.response_classes()];

    for assumed in candidates {
        let response = Response::evaluate(assumed, guess);
        counts[response.class_index(config)] += 1;
    }

    counts
}

/// Group candidates by the response they produce with the guess
///
/// Only responses that actually occur are present.
#[must_use]
pub fn partition_sizes(guess: &Code, candidates: &[Code]) -> FxHashMap<Response, usize> {
    let mut sizes = FxHashMap::default();

    for assumed in candidates {
        *sizes.entry(Response::evaluate(assumed, guess)).or_insert(0) += 1;
    }

    sizes
}
