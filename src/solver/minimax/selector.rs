//! Minimax-based guess selection
//!
//! Selects the guess that minimizes the worst-case remaining candidates.
//! Ties prefer a guess that is itself still a candidate, then the lowest
//! canonical index, so the result does not depend on scoring order.

use super::calculator::max_remaining_unchecked;
use crate::config::GameConfig;
use crate::core::Code;
use crate::solver::CandidateSpace;
use rayon::prelude::*;

/// A scored guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredGuess<'a> {
    /// The selected code
    pub code: &'a Code,
    /// Size of its largest response class
    pub worst_case: usize,
    /// Whether the code is still a possible secret
    pub is_candidate: bool,
}

/// Select best guess by minimizing worst-case remaining candidates
///
/// Returns `None` if the guess pool or the candidate space is empty, or if a
/// candidate does not fit `config`. Pool codes that do not fit are skipped.
///
/// # Examples
/// ```
/// use mastermind_solver::config::GameConfig;
/// use mastermind_solver::solver::CandidateSpace;
/// use mastermind_solver::solver::minimax::select_best_guess;
///
/// let config = GameConfig::default();
/// let universe = CandidateSpace::generate_all(&config);
///
/// let best = select_best_guess(universe.codes(), &universe, &config).unwrap();
/// // Knuth's opening family: two pairs of colors
/// assert_eq!(best.code.digits(), "0011");
/// assert_eq!(best.worst_case, 256);
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &'a [Code],
    candidates: &CandidateSpace,
    config: &GameConfig,
) -> Option<ScoredGuess<'a>> {
    if candidates.is_empty() || !candidates.iter().all(|c| c.fits(config)) {
        return None;
    }

    let mut membership = vec![false; config.universe_size()];
    for candidate in candidates {
        membership[candidate.index(config)] = true;
    }

    guess_pool
        .par_iter()
        .filter(|guess| guess.fits(config))
        .map(|guess| {
            let index = guess.index(config);
            let worst_case = max_remaining_unchecked(guess, candidates.codes(), config);
            let is_candidate = membership[index];
            (worst_case, !is_candidate, index, guess)
        })
        .min_by_key(|&(worst_case, not_candidate, index, _)| (worst_case, not_candidate, index))
        .map(|(worst_case, not_candidate, _, code)| ScoredGuess {
            code,
            worst_case,
            is_candidate: !not_candidate,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Response;
    use crate::solver::minimax::calculate_max_remaining;

    fn code(text: &str) -> Code {
        Code::parse(text, &GameConfig::default()).unwrap()
    }

    #[test]
    fn selects_lowest_worst_case() {
        let config = GameConfig::default();
        let universe = CandidateSpace::generate_all(&config);
        let candidates = universe
            .filter_consistent(&code("0011"), Response::new(1, 0, &config).unwrap());

        let pool = vec![code("5555"), code("0123")];
        let best = select_best_guess(&pool, &candidates, &config).unwrap();

        let bad = calculate_max_remaining(&pool[0], candidates.codes(), &config).unwrap();
        assert!(best.worst_case <= bad);
        assert_eq!(best.code, &pool[1]);
    }

    #[test]
    fn single_candidate_is_selected() {
        let config = GameConfig::default();
        let universe = CandidateSpace::generate_all(&config);
        let secret = code("3141");
        let candidates =
            universe.filter_consistent(&secret, Response::perfect(&config));

        let best = select_best_guess(universe.codes(), &candidates, &config).unwrap();
        assert_eq!(best.code, &secret);
        assert_eq!(best.worst_case, 1);
        assert!(best.is_candidate);
    }

    #[test]
    fn ties_prefer_candidates() {
        // Many universe codes split these two apart, but only the candidates
        // can also win outright.
        let config = GameConfig::default();
        let universe = CandidateSpace::generate_all(&config);
        let two = CandidateSpace::from_codes(vec![code("4455"), code("0123")]);

        let best = select_best_guess(universe.codes(), &two, &config).unwrap();
        assert!(best.is_candidate);
        assert_eq!(best.worst_case, 1);
        assert_eq!(best.code.digits(), "0123");
    }

    #[test]
    fn ties_prefer_lowest_index() {
        // Nothing distinguishes 0000 and 1111 against a single far-away candidate
        let config = GameConfig::default();
        let candidates = CandidateSpace::from_codes(vec![code("5555")]);
        let pool = vec![code("1111"), code("0000")];

        let best = select_best_guess(&pool, &candidates, &config).unwrap();
        assert_eq!(best.code.digits(), "0000");
    }

    #[test]
    fn deterministic_across_runs() {
        let config = GameConfig::default();
        let universe = CandidateSpace::generate_all(&config);
        let candidates =
            universe.filter_consistent(&code("0011"), Response::new(0, 1, &config).unwrap());

        let first = select_best_guess(universe.codes(), &candidates, &config).unwrap();
        for _ in 0..3 {
            let again = select_best_guess(universe.codes(), &candidates, &config).unwrap();
            assert_eq!(first, again);
        }
    }

    #[test]
    fn returns_none_on_empty_inputs() {
        let config = GameConfig::default();
        let universe = CandidateSpace::generate_all(&config);
        assert!(select_best_guess(&[], &universe, &config).is_none());

        let empty = universe
            .filter_consistent(&code("0000"), Response::perfect(&config))
            .filter_consistent(&code("0000"), Response::new(0, 0, &config).unwrap());
        assert!(select_best_guess(universe.codes(), &empty, &config).is_none());
    }

    #[test]
    fn codes_from_another_board_are_not_scored() {
        let config = GameConfig::default();
        let five = GameConfig::new(6, 5, 10).unwrap();
        let long = Code::parse("01234", &five).unwrap();

        let foreign = CandidateSpace::from_codes(vec![long.clone()]);
        assert!(select_best_guess(&[code("0123")], &foreign, &config).is_none());

        let candidates = CandidateSpace::from_codes(vec![code("5555")]);
        let pool = vec![long, code("1111")];
        let best = select_best_guess(&pool, &candidates, &config).unwrap();
        assert_eq!(best.code.digits(), "1111");
    }
}
