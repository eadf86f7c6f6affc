//! Mastermind code representation
//!
//! A Code is a fixed-length sequence of palette colors. Codes are ordered in a
//! canonical enumeration: the n-th code is `n` written in base `total_colors`
//! with exactly `code_length` digits, most-significant digit first.

use super::Color;
use crate::config::{GameConfig, MAX_COLORS};
use crate::error::{MastermindError, Result};
use rand::Rng;
use rustc_hash::FxHashMap;
use std::fmt;

/// An immutable sequence of colors
///
/// Equality and hashing are by full sequence content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code {
    colors: Box<[Color]>,
}

impl Code {
    /// Build a code from palette indices
    ///
    /// # Errors
    /// Returns `InvalidCode` if the length differs from the configured code
    /// length or any index is not below `total_colors`.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::config::GameConfig;
    /// use mastermind_solver::core::{Code, Color};
    ///
    /// let config = GameConfig::default();
    /// let code = Code::from_indices(&[0, 1, 2, 3], &config).unwrap();
    /// assert_eq!(code.color_at(2), Color::Blue);
    ///
    /// assert!(Code::from_indices(&[0, 1, 2], &config).is_err());
    /// assert!(Code::from_indices(&[0, 1, 2, 6], &config).is_err());
    /// ```
    pub fn from_indices(indices: &[usize], config: &GameConfig) -> Result<Self> {
        check_length(indices.len(), config)?;

        let colors = indices
            .iter()
            .map(|&index| {
                let color = Color::from_index(index)
                    .filter(|_| index < usize::from(config.total_colors()));
                color.ok_or_else(|| {
                    MastermindError::InvalidCode(format!(
                        "color index {index} is outside 0..{}",
                        config.total_colors()
                    ))
                })
            })
            .collect::<Result<Box<[Color]>>>()?;

        Ok(Self { colors })
    }

    /// Build a code from colors
    ///
    /// # Errors
    /// Returns `InvalidCode` on a length mismatch or a color outside the
    /// configured palette.
    pub fn from_colors(colors: &[Color], config: &GameConfig) -> Result<Self> {
        let indices: Vec<usize> = colors.iter().map(|c| c.index()).collect();
        Self::from_indices(&indices, config)
    }

    /// The n-th code of the canonical enumeration
    ///
    /// # Errors
    /// Returns `InvalidCode` if `n` is not below the universe size.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::config::GameConfig;
    /// use mastermind_solver::core::Code;
    ///
    /// let config = GameConfig::default();
    /// // 7 = 0*216 + 0*36 + 1*6 + 1
    /// assert_eq!(Code::from_index(7, &config).unwrap().digits(), "0011");
    /// assert_eq!(Code::from_index(1295, &config).unwrap().digits(), "5555");
    /// ```
    pub fn from_index(n: usize, config: &GameConfig) -> Result<Self> {
        if n >= config.universe_size() {
            return Err(MastermindError::InvalidCode(format!(
                "index {n} is outside the {} possible codes",
                config.universe_size()
            )));
        }
        Ok(Self::nth_unchecked(n, config))
    }

    /// Canonical enumeration without the range check; `n` must be in range
    pub(crate) fn nth_unchecked(n: usize, config: &GameConfig) -> Self {
        let base = usize::from(config.total_colors());
        let mut colors = vec![Color::Green; config.code_length()];
        let mut rest = n;

        for slot in colors.iter_mut().rev() {
            *slot = Color::ALL[rest % base];
            rest /= base;
        }

        Self {
            colors: colors.into_boxed_slice(),
        }
    }

    /// Position of this code in the canonical enumeration
    #[must_use]
    pub fn index(&self, config: &GameConfig) -> usize {
        let base = usize::from(config.total_colors());
        self.colors
            .iter()
            .fold(0, |acc, color| acc * base + color.index())
    }

    /// Generate a uniformly random code
    pub fn random<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Self {
        let colors = (0..config.code_length())
            .map(|_| Color::ALL[rng.random_range(0..usize::from(config.total_colors()))])
            .collect();
        Self { colors }
    }

    /// Parse a code from text
    ///
    /// Accepts a run of digits (`"0123"`) or color names or digits separated
    /// by whitespace, commas or dashes (`"green red blue yellow"`).
    ///
    /// # Errors
    /// Returns `InvalidCode` for unknown colors or a wrong length.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::config::GameConfig;
    /// use mastermind_solver::core::Code;
    ///
    /// let config = GameConfig::default();
    /// let a = Code::parse("0123", &config).unwrap();
    /// let b = Code::parse("Green, Red, Blue, Yellow", &config).unwrap();
    /// assert_eq!(a, b);
    /// ```
    pub fn parse(text: &str, config: &GameConfig) -> Result<Self> {
        let trimmed = text.trim();
        let tokens: Vec<&str> =
            if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
                trimmed
                    .char_indices()
                    .map(|(i, c)| &trimmed[i..i + c.len_utf8()])
                    .collect()
            } else {
                trimmed
                    .split(|c: char| c.is_whitespace() || c == ',' || c == '-')
                    .filter(|token| !token.is_empty())
                    .collect()
            };

        let colors = tokens
            .iter()
            .map(|token| {
                Color::from_name(token).ok_or_else(|| {
                    MastermindError::InvalidCode(format!("unknown color '{token}'"))
                })
            })
            .collect::<Result<Vec<Color>>>()?;

        Self::from_colors(&colors, config)
    }

    /// The colors of this code
    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Color at a position
    ///
    /// # Panics
    /// Panics if `position` is not below the code length
    #[inline]
    #[must_use]
    pub fn color_at(&self, position: usize) -> Color {
        self.colors[position]
    }

    /// Number of pegs
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether this code belongs to the board described by `config`
    #[must_use]
    pub fn fits(&self, config: &GameConfig) -> bool {
        self.colors.len() == config.code_length()
            && self
                .colors
                .iter()
                .all(|color| color.index() < usize::from(config.total_colors()))
    }

    /// Always false for a constructed code
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Count of each color present in the code
    ///
    /// Colors that do not occur are absent from the map.
    #[must_use]
    pub fn color_occurrences(&self) -> FxHashMap<Color, u8> {
        let mut counts = FxHashMap::default();
        for &color in self.colors.iter() {
            *counts.entry(color).or_insert(0) += 1;
        }
        counts
    }

    /// Occurrence counts indexed by palette position
    ///
    /// Same data as `color_occurrences`, in a form cheap enough for the
    /// evaluator's inner loop.
    #[inline]
    pub(crate) fn occurrence_table(&self) -> [u8; MAX_COLORS as usize] {
        let mut table = [0u8; MAX_COLORS as usize];
        for &color in self.colors.iter() {
            table[color.index()] += 1;
        }
        table
    }

    /// The code as a digit string, e.g. `"0011"`
    #[must_use]
    pub fn digits(&self) -> String {
        self.colors
            .iter()
            .map(|c| char::from(b'0' + c.index() as u8))
            .collect()
    }
}

fn check_length(len: usize, config: &GameConfig) -> Result<()> {
    if len == config.code_length() {
        Ok(())
    } else {
        Err(MastermindError::InvalidCode(format!(
            "expected {} colors, got {len}",
            config.code_length()
        )))
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, color) in self.colors.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{color}")?;
        }
        write!(f, "]")
    }
}
