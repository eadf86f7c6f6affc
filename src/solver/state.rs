//! Turn bookkeeping shared by the solver and the oracle
//!
//! Transitions are pure: each takes the current state and returns the next
//! one together with the decision, leaving the caller to commit it.

use crate::config::GameConfig;
use crate::core::{Code, Response};
use crate::error::{MastermindError, Result};
use std::fmt;

/// Lifecycle of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl Status {
    /// Won or Lost
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NotStarted => "not started",
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(text)
    }
}

/// Outcome of judging one response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Won,
    Lost,
    Continue,
}

impl Decision {
    /// Apply the win and lose rules to a response seen after `attempts` guesses
    #[must_use]
    pub fn judge(response: Response, attempts: u32, config: &GameConfig) -> Self {
        if response.is_win(config) {
            Self::Won
        } else if attempts >= config.max_guesses() {
            Self::Lost
        } else {
            Self::Continue
        }
    }

    /// Status a game is left in after this decision
    #[must_use]
    pub const fn status(self) -> Status {
        match self {
            Self::Won => Status::Won,
            Self::Lost => Status::Lost,
            Self::Continue => Status::InProgress,
        }
    }
}

/// Attempts made, last guess played and current status
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SolverState {
    attempts: u32,
    previous_guess: Option<Code>,
    status: Status,
}

impl SolverState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    #[must_use]
    pub const fn previous_guess(&self) -> Option<&Code> {
        self.previous_guess.as_ref()
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Play the opening guess
    ///
    /// # Errors
    /// `InvalidCallOrder` unless the game has not started.
    pub fn begin(&self, first: Code) -> Result<Self> {
        if self.status != Status::NotStarted {
            return Err(MastermindError::InvalidCallOrder(
                "the first guess has already been made".to_string(),
            ));
        }

        Ok(Self {
            attempts: 1,
            previous_guess: Some(first),
            status: Status::InProgress,
        })
    }

    /// Judge the response to the previous guess
    ///
    /// On `Continue` the returned state has the attempt counted but still
    /// holds the old guess; record the next one with [`Self::with_guess`].
    ///
    /// # Errors
    /// `InvalidCallOrder` unless a game is in progress.
    pub fn advance(&self, response: Response, config: &GameConfig) -> Result<(Self, Decision)> {
        match self.status {
            Status::InProgress => {}
            Status::NotStarted => {
                return Err(MastermindError::InvalidCallOrder(
                    "a response was given before the first guess".to_string(),
                ));
            }
            Status::Won | Status::Lost => {
                return Err(MastermindError::InvalidCallOrder(format!(
                    "the game is already {}",
                    self.status
                )));
            }
        }

        let decision = Decision::judge(response, self.attempts, config);
        let attempts = match decision {
            Decision::Continue => self.attempts + 1,
            Decision::Won | Decision::Lost => self.attempts,
        };

        let next = Self {
            attempts,
            previous_guess: self.previous_guess.clone(),
            status: decision.status(),
        };
        Ok((next, decision))
    }

    /// Count a guess checked against a known secret
    ///
    /// Every call is one attempt; the first call also starts the game.
    ///
    /// # Errors
    /// `InvalidCallOrder` once the game has ended.
    pub fn record(
        &self,
        guess: Code,
        response: Response,
        config: &GameConfig,
    ) -> Result<(Self, Decision)> {
        if self.status.is_terminal() {
            return Err(MastermindError::InvalidCallOrder(format!(
                "the game is already {}",
                self.status
            )));
        }

        let attempts = self.attempts + 1;
        let decision = Decision::judge(response, attempts, config);

        let next = Self {
            attempts,
            previous_guess: Some(guess),
            status: decision.status(),
        };
        Ok((next, decision))
    }

    /// Replace the last guess played
    #[must_use]
    pub fn with_guess(self, guess: Code) -> Self {
        Self {
            previous_guess: Some(guess),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(text: &str) -> Code {
        Code::parse(text, &GameConfig::default()).unwrap()
    }

    fn response(black: u8, white: u8) -> Response {
        Response::new(black, white, &GameConfig::default()).unwrap()
    }

    #[test]
    fn begin_starts_the_game() {
        let state = SolverState::new().begin(code("0011")).unwrap();
        assert_eq!(state.attempts(), 1);
        assert_eq!(state.status(), Status::InProgress);
        assert_eq!(state.previous_guess(), Some(&code("0011")));
    }

    #[test]
    fn begin_twice_is_rejected() {
        let state = SolverState::new().begin(code("0011")).unwrap();
        let again = state.begin(code("0011"));
        assert!(matches!(again, Err(MastermindError::InvalidCallOrder(_))));
    }

    #[test]
    fn advance_before_begin_is_rejected() {
        let config = GameConfig::default();
        let result = SolverState::new().advance(response(0, 0), &config);
        assert!(matches!(result, Err(MastermindError::InvalidCallOrder(_))));
    }

    #[test]
    fn advance_counts_continuing_turns() {
        let config = GameConfig::default();
        let state = SolverState::new().begin(code("0011")).unwrap();
        let (next, decision) = state.advance(response(1, 1), &config).unwrap();

        assert_eq!(decision, Decision::Continue);
        assert_eq!(next.attempts(), 2);
        assert_eq!(next.status(), Status::InProgress);
        // The input state is untouched
        assert_eq!(state.attempts(), 1);
    }

    #[test]
    fn advance_detects_win() {
        let config = GameConfig::default();
        let state = SolverState::new().begin(code("0011")).unwrap();
        let (next, decision) = state.advance(response(4, 0), &config).unwrap();

        assert_eq!(decision, Decision::Won);
        assert_eq!(next.status(), Status::Won);
        assert_eq!(next.attempts(), 1);
        assert_eq!(next.previous_guess(), Some(&code("0011")));
    }

    #[test]
    fn advance_detects_loss_at_cap() {
        let config = GameConfig::new(6, 4, 2).unwrap();
        let mut state = SolverState::new().begin(code("0011")).unwrap();

        let (next, decision) = state.advance(response(0, 0), &config).unwrap();
        assert_eq!(decision, Decision::Continue);
        state = next.with_guess(code("2233"));

        let (next, decision) = state.advance(response(0, 0), &config).unwrap();
        assert_eq!(decision, Decision::Lost);
        assert_eq!(next.status(), Status::Lost);
        assert_eq!(next.attempts(), 2);
    }

    #[test]
    fn advance_after_end_is_rejected() {
        let config = GameConfig::default();
        let state = SolverState::new().begin(code("0011")).unwrap();
        let (won, _) = state.advance(response(4, 0), &config).unwrap();
        assert!(won.advance(response(4, 0), &config).is_err());
    }

    #[test]
    fn record_counts_every_call() {
        let config = GameConfig::new(6, 4, 3).unwrap();
        let state = SolverState::new();

        let (state, decision) = state
            .record(code("0000"), response(1, 0), &config)
            .unwrap();
        assert_eq!((state.attempts(), decision), (1, Decision::Continue));
        let (state, decision) = state
            .record(code("1111"), response(0, 0), &config)
            .unwrap();
        assert_eq!((state.attempts(), decision), (2, Decision::Continue));
        let (state, decision) = state
            .record(code("2222"), response(0, 0), &config)
            .unwrap();
        assert_eq!((state.attempts(), decision), (3, Decision::Lost));

        assert!(state.record(code("3333"), response(4, 0), &config).is_err());
    }

    #[test]
    fn winning_on_the_last_attempt_is_a_win() {
        let config = GameConfig::new(6, 4, 1).unwrap();
        let (state, decision) = SolverState::new()
            .record(code("0123"), response(4, 0), &config)
            .unwrap();
        assert_eq!(decision, Decision::Won);
        assert_eq!(state.status(), Status::Won);
    }

    #[test]
    fn status_terminal_flags() {
        assert!(!Status::NotStarted.is_terminal());
        assert!(!Status::InProgress.is_terminal());
        assert!(Status::Won.is_terminal());
        assert!(Status::Lost.is_terminal());
        assert_eq!(Status::InProgress.to_string(), "in progress");
    }
}
