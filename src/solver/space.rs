//! Candidate search space
//!
//! The set of codes not yet ruled out by observed responses, kept in
//! canonical enumeration order.

use crate::config::GameConfig;
use crate::core::{Code, Response};

/// Codes consistent with every response seen so far
///
/// Filtering returns a new space, so a strategy can check the result before
/// committing to it and scoring can simulate without touching the live space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSpace {
    codes: Vec<Code>,
}

impl CandidateSpace {
    /// Every code of the configured universe, in canonical order
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::config::GameConfig;
    /// use mastermind_solver::solver::CandidateSpace;
    ///
    /// let space = CandidateSpace::generate_all(&GameConfig::default());
    /// assert_eq!(space.len(), 1296);
    /// ```
    #[must_use]
    pub fn generate_all(config: &GameConfig) -> Self {
        let codes = (0..config.universe_size())
            .map(|n| Code::nth_unchecked(n, config))
            .collect();
        Self { codes }
    }

    /// Build a space from explicit codes
    ///
    /// Duplicates are dropped and the codes sorted into canonical order.
    #[must_use]
    pub fn from_codes(mut codes: Vec<Code>) -> Self {
        // Lexicographic color order on equal-length codes is the canonical order
        codes.sort_unstable();
        codes.dedup();
        Self { codes }
    }

    /// Keep only candidates `c` with `evaluate(c, tested_guess) == observed`
    ///
    /// Full response equality is the consistency test; applying the same
    /// filter twice yields the same space.
    #[must_use]
    pub fn filter_consistent(&self, tested_guess: &Code, observed: Response) -> Self {
        let codes = self
            .codes
            .iter()
            .filter(|&candidate| Response::evaluate(candidate, tested_guess) == observed)
            .cloned()
            .collect();
        Self { codes }
    }

    /// Number of remaining candidates
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True when the observed responses contradict each other
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Whether a code is still possible
    ///
    /// Binary search over the canonical order.
    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        self.codes.binary_search(code).is_ok()
    }

    /// Remaining candidates in canonical order
    #[inline]
    #[must_use]
    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    pub fn iter(&self) -> impl Iterator<Item = &Code> {
        self.codes.iter()
    }

    /// Lowest remaining candidate under the canonical enumeration
    #[must_use]
    pub fn first(&self) -> Option<&Code> {
        self.codes.first()
    }
}

impl<'a> IntoIterator for &'a CandidateSpace {
    type Item = &'a Code;
    type IntoIter = std::slice::Iter<'a, Code>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.iter()
    }
}
