//! Code-maker side of a game
//!
//! The oracle holds the secret and scores guesses made by a human, with the
//! same win and lose rules as the solver.

use super::state::{SolverState, Status};
use crate::config::GameConfig;
use crate::core::{Code, Response};
use crate::error::{MastermindError, Result};
use crate::logging::LogSink;
use std::rc::Rc;
use tracing::Level;

/// Result of checking one guess
///
/// `response` is `None` when the guess lost the game, so the last feedback
/// is not given away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OracleVerdict {
    pub status: Status,
    pub response: Option<Response>,
}

/// Scores guesses against a fixed secret
pub struct Oracle {
    secret: Code,
    config: GameConfig,
    state: SolverState,
    sink: Option<Rc<dyn LogSink>>,
}

impl Oracle {
    /// Create an oracle for `secret`
    ///
    /// # Errors
    /// `InvalidCode` if the secret does not fit `config`.
    pub fn new(secret: Code, config: GameConfig) -> Result<Self> {
        check_fits(&secret, &config)?;

        Ok(Self {
            secret,
            config,
            state: SolverState::new(),
            sink: None,
        })
    }

    /// Report game events to `sink`
    #[must_use]
    pub fn with_sink(mut self, sink: Rc<dyn LogSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Score a guess and count it as one attempt
    ///
    /// # Errors
    /// `InvalidCode` for a guess that does not fit the config,
    /// `InvalidCallOrder` once the game has ended.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::config::GameConfig;
    /// use mastermind_solver::core::Code;
    /// use mastermind_solver::solver::{Oracle, Status};
    ///
    /// let config = GameConfig::default();
    /// let mut oracle = Oracle::new(Code::parse("0123", &config).unwrap(), config).unwrap();
    ///
    /// let verdict = oracle.validate(&Code::parse("0132", &config).unwrap()).unwrap();
    /// assert_eq!(verdict.status, Status::InProgress);
    /// assert_eq!(verdict.response.map(|r| (r.black(), r.white())), Some((2, 2)));
    /// ```
    pub fn validate(&mut self, guess: &Code) -> Result<OracleVerdict> {
        check_fits(guess, &self.config)?;

        let response = Response::evaluate(&self.secret, guess);
        let (next, decision) = self.state.record(guess.clone(), response, &self.config)?;
        self.state = next;

        let status = decision.status();
        self.log(
            Level::INFO,
            &format!("Guess {}: {guess} -> {response}", self.state.attempts()),
        );
        let response = match status {
            Status::Lost => {
                self.log(Level::INFO, &format!("Out of guesses; the code was {}", self.secret));
                None
            }
            Status::Won => {
                self.log(Level::INFO, &format!("Solved in {} guesses", self.state.attempts()));
                Some(response)
            }
            Status::NotStarted | Status::InProgress => Some(response),
        };

        Ok(OracleVerdict { status, response })
    }

    /// Guesses checked so far
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.state.attempts()
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.state.status()
    }

    /// Guesses left before the game is lost
    #[must_use]
    pub const fn remaining_attempts(&self) -> u32 {
        self.config.max_guesses().saturating_sub(self.state.attempts())
    }

    /// The secret, for revealing once the game is over
    #[must_use]
    pub fn reveal(&self) -> Option<&Code> {
        self.state.status().is_terminal().then_some(&self.secret)
    }

    fn log(&self, level: Level, line: &str) {
        if let Some(sink) = &self.sink {
            sink.write_line(level, line);
        }
    }
}

fn check_fits(code: &Code, config: &GameConfig) -> Result<()> {
    if code.fits(config) {
        return Ok(());
    }
    if code.len() != config.code_length() {
        return Err(MastermindError::InvalidCode(format!(
            "expected {} pegs, got {}",
            config.code_length(),
            code.len()
        )));
    }
    Err(MastermindError::InvalidCode(format!(
        "{code} uses colors outside the {} in play",
        config.total_colors()
    )))
}
