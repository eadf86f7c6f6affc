//! Guess analysis command
//!
//! Shows how a guess would split the codes that are still possible.

use crate::config::GameConfig;
use crate::core::{Code, Response};
use crate::error::{MastermindError, Result};
use crate::solver::CandidateSpace;
use crate::solver::minimax::{calculate_max_remaining, partition_sizes};

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: Code,
    pub total_candidates: usize,
    /// Size of the largest response class
    pub worst_case: usize,
    /// Mean size of the class the secret falls into
    pub expected_remaining: f64,
    /// Response classes, largest first
    pub partitions: Vec<(Response, usize)>,
    /// Whether the guess could itself be the secret
    pub is_candidate: bool,
}

/// Parse a `code=response` history entry such as `0011=1,0`
///
/// # Errors
///
/// Returns `InvalidCode` or `InvalidResponse` for the offending half.
pub fn parse_history_entry(text: &str, config: &GameConfig) -> Result<(Code, Response)> {
    let (code, response) = text.split_once('=').ok_or_else(|| {
        MastermindError::InvalidResponse(format!("expected 'code=response', got '{text}'"))
    })?;
    Ok((Code::parse(code, config)?, Response::parse(response, config)?))
}

/// Analyze a guess after the given turns
///
/// # Errors
///
/// Returns `InvalidHints` if the history leaves no possible code, or
/// `InvalidCode` if the guess was built for another board.
pub fn analyze_guess(
    guess: &Code,
    history: &[(Code, Response)],
    config: &GameConfig,
) -> Result<AnalysisResult> {
    let candidates = history.iter().fold(
        CandidateSpace::generate_all(config),
        |space, (played, response)| space.filter_consistent(played, *response),
    );
    if candidates.is_empty() {
        return Err(MastermindError::InvalidHints(
            "no code is consistent with the given history".to_string(),
        ));
    }

    let total_candidates = candidates.len();
    let worst_case = calculate_max_remaining(guess, candidates.codes(), config)
        .ok_or_else(|| MastermindError::InvalidCode(format!("{guess} does not fit this board")))?;

    let mut partitions: Vec<(Response, usize)> =
        partition_sizes(guess, candidates.codes()).into_iter().collect();
    partitions.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let sum_of_squares: usize = partitions.iter().map(|(_, size)| size * size).sum();
    let expected_remaining = sum_of_squares as f64 / total_candidates as f64;

    Ok(AnalysisResult {
        guess: guess.clone(),
        total_candidates,
        worst_case,
        expected_remaining,
        partitions,
        is_candidate: candidates.contains(guess),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(text: &str) -> Code {
        Code::parse(text, &GameConfig::default()).unwrap()
    }

    #[test]
    fn analyze_knuth_opening() {
        let config = GameConfig::default();
        let result = analyze_guess(&code("0011"), &[], &config).unwrap();

        assert_eq!(result.total_candidates, 1296);
        assert_eq!(result.worst_case, 256);
        assert_eq!(result.partitions.len(), 13);
        assert_eq!(result.partitions[0].1, 256);
        assert_eq!(result.partitions.iter().map(|(_, n)| n).sum::<usize>(), 1296);
        assert!(result.is_candidate);
    }

    #[test]
    fn analyze_after_history() {
        let config = GameConfig::default();
        let history = [parse_history_entry("0011=1,0", &config).unwrap()];

        let good = analyze_guess(&code("0123"), &history, &config).unwrap();
        let bad = analyze_guess(&code("5555"), &history, &config).unwrap();

        assert_eq!(good.total_candidates, bad.total_candidates);
        assert!(good.worst_case < bad.worst_case);
        assert!(good.expected_remaining <= good.worst_case as f64);
    }

    #[test]
    fn analyze_inconsistent_history() {
        let config = GameConfig::default();
        let history = [
            parse_history_entry("0000=4 0", &config).unwrap(),
            parse_history_entry("0000=0 0", &config).unwrap(),
        ];
        let result = analyze_guess(&code("0123"), &history, &config);
        assert!(matches!(result, Err(MastermindError::InvalidHints(_))));
    }

    #[test]
    fn parse_history_entry_rejects_malformed() {
        let config = GameConfig::default();
        assert!(parse_history_entry("0011", &config).is_err());
        assert!(parse_history_entry("0011=9,9", &config).is_err());
        assert!(parse_history_entry("00x1=1,0", &config).is_err());
    }

    #[test]
    fn analyze_rejects_guess_for_another_board() {
        let config = GameConfig::default();
        let five = GameConfig::new(6, 5, 10).unwrap();
        let guess = Code::parse("01234", &five).unwrap();

        let result = analyze_guess(&guess, &[], &config);
        assert!(matches!(result, Err(MastermindError::InvalidCode(_))));
    }
}
