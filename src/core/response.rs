//! Mastermind feedback calculation and representation
//!
//! A response is the pair of key-peg counts returned for a guess:
//! - black: positions where guess and secret share the same color
//! - white: further shared colors in the wrong position, after exact
//!   matches have been consumed

use super::Code;
use crate::config::GameConfig;
use crate::error::{MastermindError, Result};
use std::fmt;

/// Feedback for a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Response {
    black: u8,
    white: u8,
}

impl Response {
    /// Create a response from peg counts, e.g. as typed by a human code maker
    ///
    /// # Errors
    /// Returns `InvalidResponse` if `black + white` exceeds the code length.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::config::GameConfig;
    /// use mastermind_solver::core::Response;
    ///
    /// let config = GameConfig::default();
    /// assert!(Response::new(2, 2, &config).is_ok());
    /// assert!(Response::new(3, 2, &config).is_err());
    /// ```
    pub fn new(black: u8, white: u8, config: &GameConfig) -> Result<Self> {
        let length = config.code_length();
        let total = usize::from(black) + usize::from(white);

        if total > length {
            return Err(MastermindError::InvalidResponse(format!(
                "{black} black + {white} white pegs exceeds the code length of {length}"
            )));
        }

        Ok(Self { black, white })
    }

    /// Perfect match for the configured code length
    #[must_use]
    pub fn perfect(config: &GameConfig) -> Self {
        Self {
            black: config.code_length() as u8,
            white: 0,
        }
    }

    /// Compute the feedback when `guess` is played against `secret`
    ///
    /// Exact matches are consumed before misplaced matches are counted, so a
    /// color is never credited twice. The result is symmetric in its
    /// arguments.
    ///
    /// # Algorithm
    /// 1. First pass: count blacks and remove them from the secret's color pool
    /// 2. Second pass: count whites for non-black positions from the remaining pool
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::config::GameConfig;
    /// use mastermind_solver::core::{Code, Response};
    ///
    /// let config = GameConfig::default();
    /// let secret = Code::parse("0123", &config).unwrap();
    /// let guess = Code::parse("0132", &config).unwrap();
    ///
    /// let response = Response::evaluate(&secret, &guess);
    /// assert_eq!((response.black(), response.white()), (2, 2));
    /// ```
    #[must_use]
    pub fn evaluate(secret: &Code, guess: &Code) -> Self {
        debug_assert_eq!(secret.len(), guess.len(), "codes of different lengths");

        let mut available = secret.occurrence_table();
        let mut black = 0u8;
        let mut white = 0u8;

        // First pass: exact matches
        for (s, g) in secret.colors().iter().zip(guess.colors()) {
            if s == g {
                black += 1;
                available[g.index()] -= 1;
            }
        }

        // Second pass: misplaced matches from what is left
        for (s, g) in secret.colors().iter().zip(guess.colors()) {
            if s != g {
                let slot = &mut available[g.index()];
                if *slot > 0 {
                    white += 1;
                    *slot -= 1;
                }
            }
        }

        Self { black, white }
    }

    /// Parse a response typed by a human
    ///
    /// Accepts two numbers (`"2 1"`, `"2,1"`, `"2/1"`) or a peg string of
    /// `B`/`W` letters with `-`/`.` for empty holes (`"BBW-"`).
    ///
    /// # Errors
    /// Returns `InvalidResponse` if the text is malformed or the counts are
    /// out of range.
    pub fn parse(text: &str, config: &GameConfig) -> Result<Self> {
        let trimmed = text.trim();
        let malformed =
            || MastermindError::InvalidResponse(format!("cannot read pegs from '{trimmed}'"));

        let numbers: Vec<&str> = trimmed
            .split(|c: char| c.is_whitespace() || c == ',' || c == '/')
            .filter(|token| !token.is_empty())
            .collect();

        if numbers.len() == 2 && numbers.iter().all(|n| n.chars().all(|c| c.is_ascii_digit())) {
            let black = numbers[0].parse::<u8>().map_err(|_| malformed())?;
            let white = numbers[1].parse::<u8>().map_err(|_| malformed())?;
            return Self::new(black, white, config);
        }

        let mut black = 0u8;
        let mut white = 0u8;
        for ch in trimmed.chars() {
            match ch {
                'B' | 'b' | '●' => black = black.saturating_add(1),
                'W' | 'w' | '○' => white = white.saturating_add(1),
                '-' | '.' | '_' | ' ' => {}
                _ => return Err(malformed()),
            }
        }
        Self::new(black, white, config)
    }

    /// Number of black pegs (exact matches)
    #[inline]
    #[must_use]
    pub const fn black(self) -> u8 {
        self.black
    }

    /// Number of white pegs (misplaced matches)
    #[inline]
    #[must_use]
    pub const fn white(self) -> u8 {
        self.white
    }

    /// Whether every peg is black
    #[inline]
    #[must_use]
    pub fn is_win(self, config: &GameConfig) -> bool {
        usize::from(self.black) == config.code_length()
    }

    /// Dense index in `0..config.response_classes()`
    #[inline]
    #[must_use]
    pub fn class_index(self, config: &GameConfig) -> usize {
        usize::from(self.black) * (config.code_length() + 1) + usize::from(self.white)
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Black: {}, White: {}", self.black, self.white)
    }
}
