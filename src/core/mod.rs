//! Core domain types for Mastermind
//!
//! Colors, codes and responses. All types here are pure values with clear
//! mathematical properties; the evaluator in `Response::evaluate` is the single
//! source of truth for feedback.

mod code;
mod color;
mod response;

pub use code::Code;
pub use color::Color;
pub use response::Response;
