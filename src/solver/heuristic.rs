//! Weak baseline strategies
//!
//! Easy and medium opponents for the code-breaker seat. Both are deliberately
//! worse than minimax and exist for comparison.

use super::CandidateSpace;
use super::strategy::Strategy;
use crate::config::GameConfig;
use crate::core::{Code, Response};
use crate::error::{MastermindError, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::FxHashSet;

/// Random strategy
///
/// Plays uniformly random codes it has not played before and ignores the
/// feedback entirely. Only the solver's attempt cap ends a game it cannot
/// stumble into.
pub struct EasyStrategy {
    config: GameConfig,
    rng: StdRng,
    guessed: FxHashSet<Code>,
}

impl EasyStrategy {
    /// Create with an OS-seeded generator
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Create with a fixed seed, for reproducible games
    #[must_use]
    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        Self {
            config,
            rng,
            guessed: FxHashSet::default(),
        }
    }

    fn random_unguessed(&mut self) -> Option<Code> {
        if self.guessed.len() >= self.config.universe_size() {
            return None;
        }
        loop {
            let code = Code::random(&self.config, &mut self.rng);
            if self.guessed.insert(code.clone()) {
                return Some(code);
            }
        }
    }
}

impl Strategy for EasyStrategy {
    fn name(&self) -> &'static str {
        "easy"
    }

    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn first_guess(&mut self) -> Code {
        // A fresh strategy has guessed nothing, and every universe has codes
        self.random_unguessed()
            .unwrap_or_else(|| Code::nth_unchecked(0, &self.config))
    }

    fn next_guess(&mut self, _previous: &Code, _response: Response) -> Result<Code> {
        // Every code has been played without a win: the feedback was wrong
        self.random_unguessed().ok_or_else(|| {
            MastermindError::InvalidHints("every possible code has already been guessed".into())
        })
    }
}

/// Monochrome probe strategy
///
/// Plays `[k, k, .., k]` for the first few turns to learn color counts, then
/// falls back to the lowest code still consistent with the feedback. Not
/// optimal by construction.
pub struct MediumStrategy {
    config: GameConfig,
    candidates: CandidateSpace,
    turn: usize,
}

impl MediumStrategy {
    /// Number of opening turns spent on monochrome probes
    pub const PROBE_TURNS: usize = 4;

    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            candidates: CandidateSpace::generate_all(&config),
            turn: 0,
        }
    }

    fn probe(&self, color: usize) -> Code {
        let indices = vec![color; self.config.code_length()];
        Code::from_indices(&indices, &self.config)
            .unwrap_or_else(|_| Code::nth_unchecked(0, &self.config))
    }

    fn probing(&self) -> bool {
        self.turn < Self::PROBE_TURNS && self.turn < usize::from(self.config.total_colors())
    }
}

impl Strategy for MediumStrategy {
    fn name(&self) -> &'static str {
        "medium"
    }

    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn first_guess(&mut self) -> Code {
        self.turn = 1;
        self.probe(0)
    }

    fn next_guess(&mut self, previous: &Code, response: Response) -> Result<Code> {
        let narrowed = self.candidates.filter_consistent(previous, response);
        if narrowed.is_empty() {
            return Err(MastermindError::InvalidHints(format!(
                "no code is consistent with {response} for {previous}"
            )));
        }
        self.candidates = narrowed;

        let guess = if self.probing() {
            self.probe(self.turn)
        } else {
            self.candidates
                .first()
                .cloned()
                .ok_or_else(|| MastermindError::InvalidHints("no candidates remain".into()))?
        };
        self.turn += 1;

        Ok(guess)
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

    #[test]
    fn easy_never_repeats_a_guess() {
        let config = GameConfig::default();
        let mut strategy = EasyStrategy::seeded(config, 42);
        let miss = Response::new(0, 0, &config).unwrap();

        let mut seen = FxHashSet::default();
        let mut guess = strategy.first_guess();
        assert!(seen.insert(guess.clone()));
        for _ in 0..200 {
            guess = strategy.next_guess(&guess, miss).unwrap();
            assert!(seen.insert(guess.clone()), "repeated {guess}");
        }
    }

    #[test]
    fn easy_is_reproducible_with_seed() {
        let config = GameConfig::default();
        let mut a = EasyStrategy::seeded(config, 9);
        let mut b = EasyStrategy::seeded(config, 9);
        assert_eq!(a.first_guess(), b.first_guess());
    }

    #[test]
    fn easy_exhausts_small_universe() {
        let config = GameConfig::new(2, 1, 10).unwrap();
        let mut strategy = EasyStrategy::seeded(config, 1);
        let miss = Response::new(0, 0, &config).unwrap();

        let first = strategy.first_guess();
        let second = strategy.next_guess(&first, miss).unwrap();
        assert_ne!(first, second);

        let third = strategy.next_guess(&second, miss);
        assert!(matches!(third, Err(MastermindError::InvalidHints(_))));
    }

    #[test]
    fn easy_does_not_track_candidates() {
        let strategy = EasyStrategy::seeded(GameConfig::default(), 0);
        assert_eq!(strategy.remaining_candidates(), None);
    }

    #[test]
    fn medium_probes_monochrome_first() {
        let config = GameConfig::default();
        let secret = code("5432");
        let mut strategy = MediumStrategy::new(config);

        let mut guess = strategy.first_guess();
        assert_eq!(guess, code("0000"));
        for expected in ["1111", "2222", "3333"] {
            let response = Response::evaluate(&secret, &guess);
            guess = strategy.next_guess(&guess, response).unwrap();
            assert_eq!(guess, code(expected));
        }

        // Probes done: now the lowest consistent candidate
        let response = Response::evaluate(&secret, &guess);
        guess = strategy.next_guess(&guess, response).unwrap();
        let remaining = strategy.remaining_candidates().unwrap();
        assert!(remaining >= 1);
        let probe = code("0000");
        assert_eq!(
            Response::evaluate(&guess, &probe),
            Response::evaluate(&secret, &probe)
        );
    }

    #[test]
    fn medium_probes_stop_at_palette_size() {
        let config = GameConfig::new(2, 3, 10).unwrap();
        let secret = Code::parse("101", &config).unwrap();
        let mut strategy = MediumStrategy::new(config);

        let first = strategy.first_guess();
        assert_eq!(first.digits(), "000");
        let second = strategy
            .next_guess(&first, Response::evaluate(&secret, &first))
            .unwrap();
        assert_eq!(second.digits(), "111");
        let third = strategy
            .next_guess(&second, Response::evaluate(&secret, &second))
            .unwrap();
        // No color 2 in a two-color palette: play a candidate instead
        for probe in [&first, &second] {
            assert_eq!(
                Response::evaluate(&secret, probe),
                Response::evaluate(&third, probe)
            );
        }
    }

    #[test]
    fn medium_reports_contradictions() {
        let config = GameConfig::default();
        let mut strategy = MediumStrategy::new(config);
        let first = strategy.first_guess();
        strategy
            .next_guess(&first, Response::new(0, 0, &config).unwrap())
            .unwrap();

        let result = strategy.next_guess(&first, Response::new(2, 0, &config).unwrap());
        assert!(matches!(result, Err(MastermindError::InvalidHints(_))));
    }
}
