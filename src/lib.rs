//! Mastermind Solver
//!
//! A Mastermind engine: code and response model, candidate tracking, and
//! guess strategies led by Knuth's minimax, which breaks any 6-color, 4-peg
//! secret within 5 guesses.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::config::GameConfig;
//! use mastermind_solver::core::{Code, Response};
//! use mastermind_solver::solver::{KnuthStrategy, Solver, Status};
//!
//! let config = GameConfig::default();
//! let secret = Code::parse("0123", &config).unwrap();
//!
//! // Score a guess by hand
//! let guess = Code::parse("0132", &config).unwrap();
//! let response = Response::evaluate(&secret, &guess);
//! assert_eq!((response.black(), response.white()), (2, 2));
//!
//! // Or let the solver break the code
//! let mut solver = Solver::new(KnuthStrategy::new(config), config);
//! solver.play_out(&secret).unwrap();
//! assert_eq!(solver.status(), Status::Won);
//! assert!(solver.attempts() <= 5);
//! ```

// Game parameters
pub mod config;

// Error taxonomy
pub mod error;

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Injected game log sinks
pub mod logging;

// Preset secret lists
pub mod codebook;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
