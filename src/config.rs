//! Game configuration
//!
//! Palette size, code length and the attempt cap. A configuration is fixed for
//! the lifetime of a game; every code, response and solver carries a copy.

use crate::error::{MastermindError, Result};

/// Number of named colors in the palette
pub const MAX_COLORS: u8 = 10;

/// Longest supported code
pub const MAX_CODE_LENGTH: usize = 8;

/// Largest supported search space (`total_colors ^ code_length`)
pub const MAX_UNIVERSE: usize = 1_000_000;

/// Immutable game configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameConfig {
    total_colors: u8,
    code_length: usize,
    max_guesses: u32,
}

impl GameConfig {
    /// Classic palette size
    pub const DEFAULT_TOTAL_COLORS: u8 = 6;
    /// Classic code length
    pub const DEFAULT_CODE_LENGTH: usize = 4;
    /// Attempt cap of the classic game
    pub const DEFAULT_MAX_GUESSES: u32 = 10;

    /// Create a validated configuration
    ///
    /// # Errors
    /// Returns `InvalidConfig` if:
    /// - `total_colors` is not in `2..=MAX_COLORS`
    /// - `code_length` is not in `1..=MAX_CODE_LENGTH`
    /// - `max_guesses` is zero
    /// - the universe of codes exceeds `MAX_UNIVERSE`
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::config::GameConfig;
    ///
    /// let config = GameConfig::new(6, 4, 10).unwrap();
    /// assert_eq!(config.universe_size(), 1296);
    ///
    /// assert!(GameConfig::new(1, 4, 10).is_err());
    /// assert!(GameConfig::new(10, 8, 10).is_err()); // 10^8 codes
    /// ```
    pub fn new(total_colors: u8, code_length: usize, max_guesses: u32) -> Result<Self> {
        if !(2..=MAX_COLORS).contains(&total_colors) {
            return Err(MastermindError::InvalidConfig(format!(
                "total colors must be between 2 and {MAX_COLORS}, got {total_colors}"
            )));
        }
        if !(1..=MAX_CODE_LENGTH).contains(&code_length) {
            return Err(MastermindError::InvalidConfig(format!(
                "code length must be between 1 and {MAX_CODE_LENGTH}, got {code_length}"
            )));
        }
        if max_guesses == 0 {
            return Err(MastermindError::InvalidConfig(
                "max guesses must be at least 1".to_string(),
            ));
        }

        let universe = (0..code_length).try_fold(1usize, |acc, _| {
            acc.checked_mul(usize::from(total_colors))
                .filter(|&n| n <= MAX_UNIVERSE)
        });
        if universe.is_none() {
            return Err(MastermindError::InvalidConfig(format!(
                "{total_colors}^{code_length} codes exceeds the supported maximum of {MAX_UNIVERSE}"
            )));
        }

        Ok(Self {
            total_colors,
            code_length,
            max_guesses,
        })
    }

    /// Number of colors in the palette
    #[inline]
    #[must_use]
    pub const fn total_colors(&self) -> u8 {
        self.total_colors
    }

    /// Number of pegs in a code
    #[inline]
    #[must_use]
    pub const fn code_length(&self) -> usize {
        self.code_length
    }

    /// Maximum number of guesses before the game is lost
    #[inline]
    #[must_use]
    pub const fn max_guesses(&self) -> u32 {
        self.max_guesses
    }

    /// Total number of distinct codes (`total_colors ^ code_length`)
    #[must_use]
    pub fn universe_size(&self) -> usize {
        usize::from(self.total_colors).pow(self.code_length as u32)
    }

    /// Same palette and code length, whatever the attempt cap
    #[must_use]
    pub const fn same_board(&self, other: &Self) -> bool {
        self.total_colors == other.total_colors && self.code_length == other.code_length
    }

    /// Number of distinct (black, white) pairs, used to size partition tables
    #[must_use]
    pub const fn response_classes(&self) -> usize {
        (self.code_length + 1) * (self.code_length + 1)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            total_colors: Self::DEFAULT_TOTAL_COLORS,
            code_length: Self::DEFAULT_CODE_LENGTH,
            max_guesses: Self::DEFAULT_MAX_GUESSES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_classic_game() {
        let config = GameConfig::default();
        assert_eq!(config.total_colors(), 6);
        assert_eq!(config.code_length(), 4);
        assert_eq!(config.max_guesses(), 10);
        assert_eq!(config.universe_size(), 1296);
        assert_eq!(config.response_classes(), 25);
    }

    #[test]
    fn rejects_palette_out_of_range() {
        assert!(matches!(
            GameConfig::new(1, 4, 10),
            Err(MastermindError::InvalidConfig(_))
        ));
        assert!(GameConfig::new(11, 4, 10).is_err());
        assert!(GameConfig::new(10, 4, 10).is_ok());
    }

    #[test]
    fn rejects_length_out_of_range() {
        assert!(GameConfig::new(6, 0, 10).is_err());
        assert!(GameConfig::new(2, 9, 10).is_err());
        assert!(GameConfig::new(2, 8, 10).is_ok());
    }

    #[test]
    fn rejects_zero_guesses() {
        assert!(GameConfig::new(6, 4, 0).is_err());
    }

    #[test]
    fn rejects_oversized_universe() {
        // 8^7 = 2,097,152
        assert!(GameConfig::new(8, 7, 10).is_err());
        // 10^6 = 1,000,000 is exactly the limit
        assert!(GameConfig::new(10, 6, 10).is_ok());
    }

    #[test]
    fn same_board_ignores_attempt_cap() {
        let classic = GameConfig::default();
        assert!(classic.same_board(&GameConfig::new(6, 4, 3).unwrap()));
        assert!(!classic.same_board(&GameConfig::new(6, 5, 10).unwrap()));
        assert!(!classic.same_board(&GameConfig::new(8, 4, 10).unwrap()));
    }
}
