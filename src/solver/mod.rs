//! Mastermind solving engine
//!
//! Candidate tracking, guess strategies and the turn state machine for both
//! seats of the game.

mod engine;
pub mod heuristic;
pub mod minimax;
mod oracle;
mod space;
mod state;
pub mod strategy;

pub use engine::{GuessResult, Solver, Turn};
pub use heuristic::{EasyStrategy, MediumStrategy};
pub use oracle::{Oracle, OracleVerdict};
pub use space::CandidateSpace;
pub use state::{Decision, SolverState, Status};
pub use strategy::{GuessPool, KnuthStrategy, Strategy, StrategyType};
