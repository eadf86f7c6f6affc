//! Predefined secret codes
//!
//! Code lists for the code-breaker game, either read from a file or built
//! from embedded strings, and secret selection.

pub mod loader;

pub use loader::{codes_from_slice, load_from_file};

use crate::core::Code;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Pick one code uniformly at random, `None` for an empty list
#[must_use]
pub fn pick_random<'a, R: Rng + ?Sized>(codes: &'a [Code], rng: &mut R) -> Option<&'a Code> {
    codes.choose(rng)
}
