//! Code solving command
//!
//! Breaks a known secret and returns the solution path.

use crate::core::{Code, Response};
use crate::error::Result;
use crate::solver::{Solver, Status, Strategy};

/// Result of solving a code
pub struct SolveResult {
    pub secret: Code,
    pub status: Status,
    pub steps: Vec<GuessStep>,
    pub strategy: &'static str,
}

impl SolveResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.status == Status::Won
    }
}

/// A single guess step in the solution
pub struct GuessStep {
    pub guess: Code,
    pub response: Response,
    /// Codes still possible when the guess was chosen
    pub candidates_before: Option<usize>,
    /// Codes still possible once the response was taken into account;
    /// unknown after the losing guess, which the strategy never sees
    pub candidates_after: Option<usize>,
}

/// Solve a specific code with a fresh solver
///
/// # Errors
///
/// Returns an error if the solver rejects a call, which only happens when the
/// strategy was built for a different configuration than `secret`.
pub fn solve_code<S: Strategy>(secret: &Code, solver: &mut Solver<S>) -> Result<SolveResult> {
    let mut steps = Vec::new();
    let mut candidates_before = solver.remaining_candidates();
    let mut guess = solver.first_guess()?;

    loop {
        let response = Response::evaluate(secret, &guess);
        let result = solver.guess(response)?;

        let candidates_after = match result.status {
            Status::Won => candidates_before.map(|_| 1),
            Status::Lost => None,
            Status::NotStarted | Status::InProgress => solver.remaining_candidates(),
        };
        steps.push(GuessStep {
            guess,
            response,
            candidates_before,
            candidates_after,
        });

        if result.status.is_terminal() {
            return Ok(SolveResult {
                secret: secret.clone(),
                status: result.status,
                steps,
                strategy: solver.strategy_name(),
            });
        }

        candidates_before = candidates_after;
        guess = result.code;
    }
}
