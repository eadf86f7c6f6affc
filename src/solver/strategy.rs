//! Guess selection strategies
//!
//! Defines the Strategy trait, the minimax (Knuth) strategy and the enum
//! wrapper used for runtime selection.

use super::CandidateSpace;
use super::heuristic::{EasyStrategy, MediumStrategy};
use super::minimax::select_best_guess;
use crate::config::GameConfig;
use crate::core::{Code, Response};
use crate::error::{MastermindError, Result};
use tracing::debug;

/// A guess-selection algorithm for one game
///
/// `first_guess` is called once, then `next_guess` once per turn with the
/// response to the previous guess. Attempt counting and win/lose detection
/// live in the solver, not here.
pub trait Strategy {
    /// Short name for display
    fn name(&self) -> &'static str;

    /// Board the strategy was built for
    fn config(&self) -> &GameConfig;

    /// Opening guess
    fn first_guess(&mut self) -> Code;

    /// Next guess given the feedback for `previous`
    ///
    /// # Errors
    /// Returns `InvalidHints` when no code is consistent with the responses
    /// seen so far.
    fn next_guess(&mut self, previous: &Code, response: Response) -> Result<Code>;

    /// Number of codes still considered possible, if the strategy tracks them
    fn remaining_candidates(&self) -> Option<usize> {
        None
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Knuth minimax (default, at most 5 guesses on the classic board)
    Knuth(KnuthStrategy),
    /// Random unguessed codes
    Easy(EasyStrategy),
    /// Monochrome probes, then the first remaining candidate
    Medium(MediumStrategy),
}

impl Strategy for StrategyType {
    fn name(&self) -> &'static str {
        match self {
            Self::Knuth(s) => s.name(),
            Self::Easy(s) => s.name(),
            Self::Medium(s) => s.name(),
        }
    }

    fn config(&self) -> &GameConfig {
        match self {
            Self::Knuth(s) => s.config(),
            Self::Easy(s) => s.config(),
            Self::Medium(s) => s.config(),
        }
    }

    fn first_guess(&mut self) -> Code {
        match self {
            Self::Knuth(s) => s.first_guess(),
            Self::Easy(s) => s.first_guess(),
            Self::Medium(s) => s.first_guess(),
        }
    }

    fn next_guess(&mut self, previous: &Code, response: Response) -> Result<Code> {
        match self {
            Self::Knuth(s) => s.next_guess(previous, response),
            Self::Easy(s) => s.next_guess(previous, response),
            Self::Medium(s) => s.next_guess(previous, response),
        }
    }

    fn remaining_candidates(&self) -> Option<usize> {
        match self {
            Self::Knuth(s) => s.remaining_candidates(),
            Self::Easy(s) => s.remaining_candidates(),
            Self::Medium(s) => s.remaining_candidates(),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "knuth", "minimax", "easy", "random", "medium", "probe".
    /// Defaults to knuth if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, config: &GameConfig) -> Self {
        match name {
            "easy" | "random" => Self::Easy(EasyStrategy::new(*config)),
            "medium" | "probe" => Self::Medium(MediumStrategy::new(*config)),
            _ => Self::Knuth(KnuthStrategy::new(*config)),
        }
    }

    /// Like [`Self::from_name`], seeding the random strategy
    #[must_use]
    pub fn from_name_seeded(name: &str, config: &GameConfig, seed: u64) -> Self {
        match name {
            "easy" | "random" => Self::Easy(EasyStrategy::seeded(*config, seed)),
            _ => Self::from_name(name, config),
        }
    }
}

/// Largest scoring job (pool size × candidates) minimax runs in one turn
///
/// `2^30` is the 8-color, 5-peg universe scored against itself.
pub const SCORING_BUDGET: usize = 1 << 30;

/// Where minimax draws the guesses it scores from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuessPool {
    /// Every code of the universe; needed for the 5-guess guarantee
    #[default]
    Universe,
    /// Only codes still consistent with the responses; cheaper
    Candidates,
}

impl GuessPool {
    /// Universe when scoring it against every code fits [`SCORING_BUDGET`],
    /// candidates otherwise
    #[must_use]
    pub fn for_config(config: &GameConfig) -> Self {
        let universe = config.universe_size();
        if universe.saturating_mul(universe) <= SCORING_BUDGET {
            Self::Universe
        } else {
            Self::Candidates
        }
    }
}

/// Knuth's minimax strategy
///
/// Opens with two colors twice each (`0011` on the classic board), then plays
/// the code whose worst-case response class is smallest. Ties prefer a code
/// that could still be the secret, then the lowest canonical index.
///
/// With the universe pool this solves every 6-color, 4-peg secret within 5
/// guesses; needing a 6th is a regression.
///
/// A turn whose scoring would exceed the budget plays the lowest candidate
/// instead, so large boards fall back to consistent guessing until the space
/// is small enough to score.
pub struct KnuthStrategy {
    config: GameConfig,
    pool: GuessPool,
    budget: usize,
    universe: Vec<Code>,
    candidates: CandidateSpace,
}

impl KnuthStrategy {
    /// Guaranteed worst case on the classic 6-color, 4-peg board
    pub const CLASSIC_MAX_GUESSES: u32 = 5;

    /// Create with the pool [`GuessPool::for_config`] picks for this board
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_pool(config, GuessPool::for_config(&config))
    }

    #[must_use]
    pub fn with_pool(config: GameConfig, pool: GuessPool) -> Self {
        let candidates = CandidateSpace::generate_all(&config);
        let universe = match pool {
            GuessPool::Universe => candidates.codes().to_vec(),
            GuessPool::Candidates => Vec::new(),
        };

        Self {
            config,
            pool,
            budget: SCORING_BUDGET,
            universe,
            candidates,
        }
    }

    /// Replace the per-turn scoring budget
    #[must_use]
    pub const fn with_scoring_budget(mut self, budget: usize) -> Self {
        self.budget = budget;
        self
    }

    #[must_use]
    pub const fn pool(&self) -> GuessPool {
        self.pool
    }

    /// Opening guess: first half color 0, second half color 1
    #[must_use]
    pub fn opening(config: &GameConfig) -> Code {
        let length = config.code_length();
        let indices: Vec<usize> = (0..length).map(|i| usize::from(i >= length / 2)).collect();
        // Colors 0 and 1 always exist and the length matches by construction
        Code::from_indices(&indices, config).unwrap_or_else(|_| Code::nth_unchecked(0, config))
    }

    /// Codes still consistent with every response
    #[must_use]
    pub const fn candidates(&self) -> &CandidateSpace {
        &self.candidates
    }
}

impl Strategy for KnuthStrategy {
    fn name(&self) -> &'static str {
        "knuth"
    }

    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn first_guess(&mut self) -> Code {
        Self::opening(&self.config)
    }

    fn next_guess(&mut self, previous: &Code, response: Response) -> Result<Code> {
        let narrowed = self.candidates.filter_consistent(previous, response);
        if narrowed.is_empty() {
            return Err(MastermindError::InvalidHints(format!(
                "no code is consistent with {response} for {previous}"
            )));
        }
        self.candidates = narrowed;
        debug!(
            remaining = self.candidates.len(),
            "narrowed candidates after {previous}"
        );

        let pool = match self.pool {
            GuessPool::Universe => self.universe.as_slice(),
            GuessPool::Candidates => self.candidates.codes(),
        };

        // One or two left: the lowest candidate already scores 1 and wins ties.
        // Over budget: guess consistently until the space can be scored.
        let over_budget = pool.len().saturating_mul(self.candidates.len()) > self.budget;
        if self.candidates.len() <= 2 || over_budget {
            if over_budget {
                debug!(
                    pool = pool.len(),
                    remaining = self.candidates.len(),
                    "scoring over budget, playing the lowest candidate"
                );
            }
            return self.candidates.first().cloned().ok_or_else(|| {
                MastermindError::InvalidHints("no candidates remain".to_string())
            });
        }

        let best = select_best_guess(pool, &self.candidates, &self.config).ok_or_else(|| {
            MastermindError::InvalidHints("no guess could be scored".to_string())
        })?;
        debug!(
            worst_case = best.worst_case,
            is_candidate = best.is_candidate,
            "selected {}",
            best.code
        );

        Ok(best.code.clone())
    }

    fn remaining_candidates(&self) -> Option<usize> {
        Some(self.candidates.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(text: &str) -> Code {
        Code::parse(text, &GameConfig::default()).unwrap()
    }

    /// Play a full game against `secret`, returning the guesses made
    fn play<S: Strategy>(strategy: &mut S, secret: &Code, config: &GameConfig) -> Vec<Code> {
        let mut guesses = vec![strategy.first_guess()];
        loop {
            let last = guesses.last().unwrap().clone();
            let response = Response::evaluate(secret, &last);
            if response.is_win(config) || guesses.len() > 20 {
                return guesses;
            }
            guesses.push(strategy.next_guess(&last, response).unwrap());
        }
    }

    #[test]
    fn knuth_opening_is_0011() {
        let mut strategy = KnuthStrategy::new(GameConfig::default());
        assert_eq!(strategy.first_guess(), code("0011"));
    }

    #[test]
    fn knuth_opening_for_other_lengths() {
        let five = GameConfig::new(6, 5, 10).unwrap();
        assert_eq!(KnuthStrategy::opening(&five).digits(), "00111");
        let one = GameConfig::new(6, 1, 10).unwrap();
        assert_eq!(KnuthStrategy::opening(&one).digits(), "1");
    }

    #[test]
    fn knuth_solves_sample_secrets_within_five() {
        let config = GameConfig::default();
        for text in ["0000", "0123", "5555", "3210", "4512", "1122"] {
            let mut strategy = KnuthStrategy::new(config);
            let guesses = play(&mut strategy, &code(text), &config);
            assert!(guesses.len() <= 5, "{text} took {} guesses", guesses.len());
            assert_eq!(guesses.last(), Some(&code(text)));
        }
    }

    #[test]
    fn knuth_candidates_pool_still_solves() {
        let config = GameConfig::default();
        let secret = code("2345");
        let mut strategy = KnuthStrategy::with_pool(config, GuessPool::Candidates);
        let guesses = play(&mut strategy, &secret, &config);
        assert_eq!(guesses.last(), Some(&secret));
    }

    #[test]
    fn knuth_tracks_remaining_candidates() {
        let config = GameConfig::default();
        let mut strategy = KnuthStrategy::new(config);
        assert_eq!(strategy.remaining_candidates(), Some(1296));

        let first = strategy.first_guess();
        let response = Response::new(0, 0, &config).unwrap();
        strategy.next_guess(&first, response).unwrap();
        assert_eq!(strategy.remaining_candidates(), Some(256));
    }

    #[test]
    fn knuth_contradictory_hints_are_reported() {
        let config = GameConfig::default();
        let mut strategy = KnuthStrategy::new(config);
        let first = strategy.first_guess();

        // 0011 scored (0, 0) rules out greens; then 0000 cannot score a black
        strategy
            .next_guess(&first, Response::new(0, 0, &config).unwrap())
            .unwrap();
        let result = strategy.next_guess(&code("0000"), Response::new(1, 0, &config).unwrap());
        assert!(matches!(result, Err(MastermindError::InvalidHints(_))));
    }

    #[test]
    fn knuth_survives_rejected_hints() {
        // A rejected response leaves the candidate space untouched
        let config = GameConfig::default();
        let mut strategy = KnuthStrategy::new(config);
        let first = strategy.first_guess();
        strategy
            .next_guess(&first, Response::new(0, 0, &config).unwrap())
            .unwrap();
        let before = strategy.remaining_candidates();

        let bad = strategy.next_guess(&code("0000"), Response::new(1, 0, &config).unwrap());
        assert!(bad.is_err());
        assert_eq!(strategy.remaining_candidates(), before);
    }

    #[test]
    fn from_name_selects_variants() {
        let config = GameConfig::default();
        assert_eq!(StrategyType::from_name("knuth", &config).name(), "knuth");
        assert_eq!(StrategyType::from_name("minimax", &config).name(), "knuth");
        assert_eq!(StrategyType::from_name("easy", &config).name(), "easy");
        assert_eq!(StrategyType::from_name("random", &config).name(), "easy");
        assert_eq!(StrategyType::from_name("medium", &config).name(), "medium");
        assert_eq!(StrategyType::from_name("whatever", &config).name(), "knuth");
        assert_eq!(StrategyType::from_name_seeded("probe", &config, 1).name(), "medium");
    }

    #[test]
    fn seeded_easy_is_reproducible() {
        let config = GameConfig::default();
        let mut a = StrategyType::from_name_seeded("random", &config, 77);
        let mut b = StrategyType::from_name_seeded("random", &config, 77);
        assert_eq!(a.first_guess(), b.first_guess());
    }

    #[test]
    fn strategy_type_dispatches() {
        let config = GameConfig::default();
        let mut strategy = StrategyType::from_name("knuth", &config);
        assert_eq!(strategy.first_guess(), code("0011"));
        assert_eq!(strategy.remaining_candidates(), Some(1296));
        assert_eq!(strategy.config(), &config);
    }

    #[test]
    fn large_boards_score_candidates_only() {
        let at_budget = GameConfig::new(8, 5, 10).unwrap();
        let larger = GameConfig::new(10, 5, 10).unwrap();
        let largest = GameConfig::new(10, 6, 10).unwrap();

        assert_eq!(GuessPool::for_config(&GameConfig::default()), GuessPool::Universe);
        assert_eq!(GuessPool::for_config(&at_budget), GuessPool::Universe);
        assert_eq!(GuessPool::for_config(&larger), GuessPool::Candidates);
        assert_eq!(GuessPool::for_config(&largest), GuessPool::Candidates);

        assert_eq!(KnuthStrategy::new(larger).pool(), GuessPool::Candidates);
        assert_eq!(KnuthStrategy::new(GameConfig::default()).pool(), GuessPool::Universe);
    }

    #[test]
    fn over_budget_turns_play_the_lowest_candidate() {
        let config = GameConfig::new(6, 4, 30).unwrap();
        let secret = code("4325");
        let mut strategy = KnuthStrategy::new(config).with_scoring_budget(0);

        let guesses = play(&mut strategy, &secret, &config);
        assert_eq!(guesses.last(), Some(&secret));

        // Every guess after the opening is consistent with all earlier feedback
        for (turn, guess) in guesses.iter().enumerate().skip(1) {
            for earlier in &guesses[..turn] {
                assert_eq!(
                    Response::evaluate(guess, earlier),
                    Response::evaluate(&secret, earlier)
                );
            }
        }
    }

    #[test]
    fn largest_board_game_finishes() {
        let config = GameConfig::new(10, 6, 30).unwrap();
        let secret = Code::parse("012345", &config).unwrap();
        let mut strategy = KnuthStrategy::new(config).with_scoring_budget(1 << 20);

        let guesses = play(&mut strategy, &secret, &config);
        assert_eq!(guesses.last(), Some(&secret));
    }
}
