//! Main Mastermind solver interface

use super::state::{Decision, SolverState, Status};
use super::strategy::Strategy;
use crate::config::GameConfig;
use crate::core::{Code, Response};
use crate::error::{MastermindError, Result};
use crate::logging::LogSink;
use std::rc::Rc;
use tracing::Level;

/// Answer to a response: the status after it and the code to show
///
/// While in progress `code` is the next guess; once the game ends it is the
/// last guess played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    pub status: Status,
    pub code: Code,
}

/// One played turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Code,
    pub response: Response,
}

/// Main Mastermind solver
///
/// Coordinates a game: asks the strategy for guesses, counts attempts and
/// detects the end of the game. One instance plays one game.
pub struct Solver<S: Strategy> {
    strategy: S,
    config: GameConfig,
    state: SolverState,
    sink: Option<Rc<dyn LogSink>>,
}

impl<S: Strategy> Solver<S> {
    /// Create a new solver with the given strategy
    ///
    /// The strategy must have been built for the same board as `config`; the
    /// attempt cap may differ.
    ///
    /// # Panics
    /// In debug builds, panics if the strategy's colors or code length differ
    /// from `config`.
    pub fn new(strategy: S, config: GameConfig) -> Self {
        debug_assert!(
            strategy.config().same_board(&config),
            "strategy built for a different board"
        );
        Self {
            strategy,
            config,
            state: SolverState::new(),
            sink: None,
        }
    }

    /// Report game events to `sink`
    #[must_use]
    pub fn with_sink(mut self, sink: Rc<dyn LogSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Make the opening guess
    ///
    /// # Errors
    /// `InvalidCallOrder` if the game has already started.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::config::GameConfig;
    /// use mastermind_solver::solver::{KnuthStrategy, Solver, Status};
    ///
    /// let config = GameConfig::default();
    /// let mut solver = Solver::new(KnuthStrategy::new(config), config);
    ///
    /// let first = solver.first_guess().unwrap();
    /// assert_eq!(first.digits(), "0011");
    /// assert_eq!(solver.attempts(), 1);
    /// assert_eq!(solver.status(), Status::InProgress);
    /// ```
    pub fn first_guess(&mut self) -> Result<Code> {
        if self.state.status() != Status::NotStarted {
            return Err(MastermindError::InvalidCallOrder(
                "the first guess has already been made".to_string(),
            ));
        }

        let first = self.strategy.first_guess();
        self.state = self.state.begin(first.clone())?;
        self.log(Level::INFO, &format!("Guess {}: {first}", self.state.attempts()));

        Ok(first)
    }

    /// Feed back the response to the previous guess
    ///
    /// The state only changes when this returns `Ok`; after `InvalidHints`
    /// the caller may supply a corrected response.
    ///
    /// # Errors
    /// `InvalidCallOrder` before the first guess or after the game ended,
    /// `InvalidHints` when the responses contradict each other.
    pub fn guess(&mut self, response: Response) -> Result<GuessResult> {
        let (next, decision) = self.state.advance(response, &self.config)?;
        let previous = self.state.previous_guess().cloned().ok_or_else(|| {
            MastermindError::InvalidCallOrder("no guess has been played".to_string())
        })?;
        self.log(Level::INFO, &format!("Response: {response}"));

        let code = match decision {
            Decision::Won => {
                self.log(Level::INFO, &format!("Solved in {} guesses", next.attempts()));
                previous
            }
            Decision::Lost => {
                self.log(
                    Level::INFO,
                    &format!("Out of guesses after {}", next.attempts()),
                );
                previous
            }
            Decision::Continue => match self.strategy.next_guess(&previous, response) {
                Ok(code) => {
                    self.log(Level::INFO, &format!("Guess {}: {code}", next.attempts()));
                    code
                }
                Err(e) => {
                    self.log(Level::ERROR, &e.to_string());
                    return Err(e);
                }
            },
        };

        let status = next.status();
        self.state = next.with_guess(code.clone());
        Ok(GuessResult { status, code })
    }

    /// Play a whole game against a known secret
    ///
    /// Returns every turn played; [`Self::status`] tells how it ended.
    ///
    /// # Errors
    /// Any error from [`Self::first_guess`] or [`Self::guess`].
    pub fn play_out(&mut self, secret: &Code) -> Result<Vec<Turn>> {
        let mut turns = Vec::new();
        let mut guess = self.first_guess()?;

        loop {
            let response = Response::evaluate(secret, &guess);
            turns.push(Turn {
                guess: guess.clone(),
                response,
            });

            let result = self.guess(response)?;
            if result.status.is_terminal() {
                return Ok(turns);
            }
            guess = result.code;
        }
    }

    /// Guesses made so far
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.state.attempts()
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.state.status()
    }

    /// Last guess played, `None` before the first
    #[must_use]
    pub const fn previous_guess(&self) -> Option<&Code> {
        self.state.previous_guess()
    }

    /// Codes still possible, for strategies that track them
    #[must_use]
    pub fn remaining_candidates(&self) -> Option<usize> {
        self.strategy.remaining_candidates()
    }

    #[must_use]
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    fn log(&self, level: Level, line: &str) {
        if let Some(sink) = &self.sink {
            sink.write_line(level, line);
        }
    }
}
